//! Range slider core — binds a numeric range refinement to a dual-handle slider.
//!
//! This crate holds the synchronization logic between connector state and
//! the slider control:
//! - Configuration coercion (number-or-string bounds and precision)
//! - Range adapter: connector params, state relay, refine forwarding
//! - Slider controller: construct-once / update-many, degenerate-range policy
//! - Step derivation and fixed-point tooltip formatting
//! - Pip resolution
//! - An in-memory range connector for driving the widget without a backend
//!
//! The slider primitive itself is abstracted behind [`slider::SliderBackend`].

pub mod adapter;
pub mod config;
pub mod connector;
pub mod controller;
pub mod domain;
pub mod format;
pub mod pips;
pub mod slider;
pub mod state;

pub use adapter::RangeAdapter;
pub use config::{ConfigError, ConnectorParams, NumberInput, WidgetConfig};
pub use connector::RangeConnector;
pub use controller::{SliderController, SliderOptions, DEGENERATE_EPSILON};
pub use domain::{Range, Refine, RefinementState, Selection};
pub use format::{format_fixed, step_for, TooltipFormatter, DEFAULT_PRECISION};
pub use pips::{resolve_pips, PipsMode, PipsOption, PipsSpec};
pub use slider::{
    Behaviour, ChangeListener, SliderBackend, SliderConfig, SliderError, SliderHandle,
    SliderUpdate,
};

#[cfg(test)]
mod test_helpers;
