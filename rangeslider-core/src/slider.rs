//! Boundary to the slider primitive that renders handles, pips and tooltips.
//!
//! The primitive is constructed once through a [`SliderBackend`] and then
//! driven only through [`SliderHandle::update_options`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{Range, Selection};
use crate::format::TooltipFormatter;
use crate::pips::PipsSpec;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SliderError {
    #[error("range min ({min}) must be below max ({max})")]
    EmptyRange { min: f64, max: f64 },

    #[error("step must be finite and positive, got {0}")]
    InvalidStep(f64),

    #[error("slider backend unavailable: {0}")]
    Backend(String),
}

/// Interaction behaviour of the track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Behaviour {
    /// Clicking the track moves the nearest handle there.
    Snap,
    /// Handles only move by dragging.
    Drag,
}

/// One-time construction configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderConfig {
    pub animate: bool,
    pub behaviour: Behaviour,
    /// Fill the track between the two handles.
    pub connect: bool,
    pub pips: Option<PipsSpec>,
    pub range: Range,
    pub start: Selection,
    pub step: f64,
    /// One formatter per handle.
    pub tooltips: Option<[TooltipFormatter; 2]>,
}

/// Incremental update applied after construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliderUpdate {
    pub disabled: bool,
    pub range: Range,
    pub start: Selection,
}

/// Listener for committed user changes.
pub type ChangeListener = Box<dyn FnMut(Selection)>;

/// A constructed slider control.
pub trait SliderHandle {
    /// Register the "change" listener, fired once per committed user change.
    fn on_change(&mut self, listener: ChangeListener);

    fn update_options(&mut self, update: &SliderUpdate) -> Result<(), SliderError>;
}

/// Factory for slider controls.
pub trait SliderBackend {
    type Handle: SliderHandle;

    fn create(&mut self, config: SliderConfig) -> Result<Self::Handle, SliderError>;
}

/// Checks every primitive applies before accepting a range.
pub fn validate_range(range: &Range) -> Result<(), SliderError> {
    if range.min < range.max {
        Ok(())
    } else {
        Err(SliderError::EmptyRange {
            min: range.min,
            max: range.max,
        })
    }
}

pub fn validate_step(step: f64) -> Result<(), SliderError> {
    if step.is_finite() && step > 0.0 {
        Ok(())
    } else {
        Err(SliderError::InvalidStep(step))
    }
}
