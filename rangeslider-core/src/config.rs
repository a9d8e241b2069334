//! Widget configuration and its coercion into connector parameters.
//!
//! Bounds and precision may arrive as numbers or numeric strings. Coercion
//! never fails: anything that does not parse is treated as unset so the
//! connector can apply its own defaults. Only an unreadable or ill-formed
//! configuration document is an error.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::format::DEFAULT_PRECISION;
use crate::pips::PipsOption;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// A number, or a string expected to hold one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumberInput {
    Number(f64),
    Text(String),
}

impl From<f64> for NumberInput {
    fn from(value: f64) -> Self {
        NumberInput::Number(value)
    }
}

impl From<&str> for NumberInput {
    fn from(value: &str) -> Self {
        NumberInput::Text(value.to_string())
    }
}

/// Coerce an optional number-or-string into a finite number.
pub fn parse_number_input(input: Option<&NumberInput>) -> Option<f64> {
    let value = match input? {
        NumberInput::Number(n) => *n,
        NumberInput::Text(s) => s.trim().parse::<f64>().ok()?,
    };
    value.is_finite().then_some(value)
}

fn default_precision() -> Option<NumberInput> {
    Some(NumberInput::Number(DEFAULT_PRECISION))
}

fn default_pips() -> Option<PipsOption> {
    Some(PipsOption::default())
}

fn default_true() -> bool {
    true
}

/// Host-supplied widget configuration. Read-only once constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidgetConfig {
    /// Filterable attribute this widget refines.
    pub attribute_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<NumberInput>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<NumberInput>,
    #[serde(default = "default_precision")]
    pub precision: Option<NumberInput>,
    #[serde(default = "default_pips")]
    pub pips: Option<PipsOption>,
    #[serde(default = "default_true")]
    pub tooltips: bool,
}

impl WidgetConfig {
    pub fn new(attribute_name: impl Into<String>) -> Self {
        Self {
            attribute_name: attribute_name.into(),
            min: None,
            max: None,
            precision: default_precision(),
            pips: default_pips(),
            tooltips: true,
        }
    }

    pub fn with_min(mut self, min: impl Into<NumberInput>) -> Self {
        self.min = Some(min.into());
        self
    }

    pub fn with_max(mut self, max: impl Into<NumberInput>) -> Self {
        self.max = Some(max.into());
        self
    }

    pub fn with_precision(mut self, precision: impl Into<NumberInput>) -> Self {
        self.precision = Some(precision.into());
        self
    }

    /// Clear precision entirely (as opposed to the default of 2).
    pub fn without_precision(mut self) -> Self {
        self.precision = None;
        self
    }

    pub fn with_pips(mut self, pips: PipsOption) -> Self {
        self.pips = Some(pips);
        self
    }

    pub fn with_tooltips(mut self, tooltips: bool) -> Self {
        self.tooltips = tooltips;
        self
    }

    /// Precision used for step and display; falls back to 2.
    pub fn display_precision(&self) -> f64 {
        parse_number_input(self.precision.as_ref()).unwrap_or(DEFAULT_PRECISION)
    }

    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }
}

/// Parameters the range connector is initialized with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectorParams {
    pub attribute_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precision: Option<f64>,
}

impl ConnectorParams {
    pub fn from_config(config: &WidgetConfig) -> Self {
        Self {
            attribute_name: config.attribute_name.clone(),
            min: parse_number_input(config.min.as_ref()),
            max: parse_number_input(config.max.as_ref()),
            precision: parse_number_input(config.precision.as_ref()),
        }
    }
}
