//! Host configuration: the widget table plus an optional dataset.
//!
//! ```toml
//! values = [12.5, 30.0, 99.9]
//!
//! [widget]
//! attribute_name = "price"
//! precision = "1"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use rangeslider_core::{ConfigError, WidgetConfig};

use crate::sample_data::sample_prices;

fn default_widget() -> WidgetConfig {
    WidgetConfig::new("price")
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostConfig {
    #[serde(default = "default_widget")]
    pub widget: WidgetConfig,
    /// Attribute values to filter; the sample prices when absent.
    #[serde(default)]
    pub values: Option<Vec<f64>>,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            widget: default_widget(),
            values: None,
        }
    }
}

impl HostConfig {
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

    pub fn dataset(&self) -> Vec<f64> {
        self.values.clone().unwrap_or_else(sample_prices)
    }
}
