//! Pip (track tick mark) configuration.

use serde::{Deserialize, Serialize};

/// How pip positions are chosen along the track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PipsMode {
    /// One pip at each end of the range.
    Range,
    /// A pip at every step.
    Steps,
    /// Pips at the given percentages of the track.
    Positions,
    /// `values[0]` evenly spaced pips.
    Count,
    /// Pips at the given absolute values.
    Values,
}

/// Pip specification handed to the slider primitive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipsSpec {
    pub mode: PipsMode,
    #[serde(default)]
    pub values: Vec<f64>,
    /// Percent of track between minor ticks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub density: Option<u32>,
    /// Snap pip positions to the step grid.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stepped: Option<bool>,
}

impl Default for PipsSpec {
    fn default() -> Self {
        Self {
            mode: PipsMode::Positions,
            values: vec![0.0, 50.0, 100.0],
            density: Some(3),
            stepped: Some(true),
        }
    }
}

/// Caller-facing pip option: a switch or an explicit specification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PipsOption {
    Enabled(bool),
    Spec(PipsSpec),
}

impl Default for PipsOption {
    fn default() -> Self {
        PipsOption::Enabled(true)
    }
}

/// Resolve the caller's option into what the primitive is constructed with.
///
/// `true` or unset synthesizes [`PipsSpec::default`]; `false` means no pips;
/// an explicit spec passes through unchanged.
pub fn resolve_pips(option: Option<&PipsOption>) -> Option<PipsSpec> {
    match option {
        None | Some(PipsOption::Enabled(true)) => Some(PipsSpec::default()),
        Some(PipsOption::Enabled(false)) => None,
        Some(PipsOption::Spec(spec)) => Some(spec.clone()),
    }
}
