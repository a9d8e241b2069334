//! Range adapter — the contract between the refinement connector and the slider.
//!
//! The adapter turns widget configuration into connector parameters, relays
//! connector state to the [`SliderController`], and forwards committed user
//! changes to the latest `refine` callback. It keeps no state beyond the most
//! recently received [`RefinementState`].

use crate::config::{ConnectorParams, WidgetConfig};
use crate::controller::{SliderController, SliderOptions};
use crate::domain::{RefinementState, Selection};
use crate::slider::{SliderBackend, SliderError};
use crate::state::StateCell;

pub struct RangeAdapter<B: SliderBackend> {
    config: WidgetConfig,
    state: StateCell,
    controller: SliderController<B>,
}

impl<B: SliderBackend> RangeAdapter<B> {
    pub fn new(config: WidgetConfig, backend: B) -> Self {
        let state = StateCell::new();
        let controller = SliderController::new(
            backend,
            SliderOptions::from_config(&config),
            state.refine_handle(),
        );
        Self {
            config,
            state,
            controller,
        }
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    /// Parameters for the connector's initialization call.
    pub fn initialize(&self) -> ConnectorParams {
        let params = ConnectorParams::from_config(&self.config);
        log::debug!(
            "range connector params for '{}': min={:?} max={:?} precision={:?}",
            params.attribute_name,
            params.min,
            params.max,
            params.precision
        );
        params
    }

    /// Store the new state and forward it to the controller.
    pub fn on_state_change(
        &mut self,
        state: RefinementState,
        is_first_render: bool,
    ) -> Result<(), SliderError> {
        self.state.replace(state.clone());
        self.controller.update(&state, is_first_render)
    }

    /// Commit a user selection through the latest `refine` callback.
    pub fn on_user_change(&self, values: Selection) {
        self.state.refine_handle().refine(values);
    }

    /// The most recently received state.
    pub fn state(&self) -> RefinementState {
        self.state.snapshot()
    }

    pub fn controller(&self) -> &SliderController<B> {
        &self.controller
    }
}
