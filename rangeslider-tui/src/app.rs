//! Application state — single-owner, main-thread only.
//!
//! The connector's `refine` callback only queues a [`ConnectorCommand`]; the
//! main loop drains the queue on its next tick, applies it to the
//! [`RangeConnector`] and pushes the resulting state through the adapter.

use std::sync::mpsc::{self, Receiver, Sender};

use rangeslider_core::{RangeAdapter, RangeConnector, Refine, Selection};

use crate::config::HostConfig;
use crate::theme::Theme;
use crate::ui::widgets::slider::{SliderSurface, TerminalSliderBackend};

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
}

/// Requests queued for the connector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConnectorCommand {
    Refine(Selection),
    Clear,
}

pub struct AppState {
    pub running: bool,
    pub theme: Theme,
    pub surface: SliderSurface,
    pub adapter: RangeAdapter<TerminalSliderBackend>,
    pub connector: RangeConnector,
    pub values: Vec<f64>,
    pub status_message: Option<(String, StatusLevel)>,
    refine: Refine,
    command_tx: Sender<ConnectorCommand>,
    command_rx: Receiver<ConnectorCommand>,
}

impl AppState {
    pub fn new(config: HostConfig) -> Self {
        let values = config.dataset();
        let surface = SliderSurface::new();
        let adapter = RangeAdapter::new(config.widget, TerminalSliderBackend::new(surface.clone()));
        let connector = RangeConnector::new(&adapter.initialize(), &values);

        let (command_tx, command_rx) = mpsc::channel();
        let tx = command_tx.clone();
        let refine = Refine::new(move |selection| {
            let _ = tx.send(ConnectorCommand::Refine(selection));
        });

        Self {
            running: true,
            theme: Theme::default(),
            surface,
            adapter,
            connector,
            values,
            status_message: None,
            refine,
            command_tx,
            command_rx,
        }
    }

    /// Deliver the connector's first state, constructing the slider.
    pub fn start(&mut self) {
        self.push_state(true);
        let failed = matches!(self.status_message, Some((_, StatusLevel::Error)));
        if self.connector.range().is_degenerate() && !failed {
            self.set_warning("Only one distinct value; slider disabled");
        }
    }

    /// Apply queued connector commands and re-render from the result.
    pub fn drain_commands(&mut self) {
        let mut drained = false;
        let mut changed = false;
        while let Ok(command) = self.command_rx.try_recv() {
            drained = true;
            changed |= match command {
                ConnectorCommand::Refine(selection) => self.connector.refine(selection),
                ConnectorCommand::Clear => self.connector.clear(),
            };
        }
        if !drained {
            return;
        }

        // Always push: a rejected request must snap the handles back.
        self.push_state(false);
        if changed {
            let [lo, hi] = self.connector.start();
            let controller = self.adapter.controller();
            let msg = format!(
                "Refined to {} – {}",
                controller.format_tooltip(lo),
                controller.format_tooltip(hi)
            );
            self.set_status(msg);
        }
    }

    /// Queue a reset of the refinement.
    pub fn reset(&mut self) {
        let _ = self.command_tx.send(ConnectorCommand::Clear);
    }

    /// Records inside the current selection.
    pub fn hits(&self) -> usize {
        self.connector.count_in_refinement(&self.values)
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Error));
    }

    fn push_state(&mut self, is_first_render: bool) {
        let state = self.connector.state(self.refine.clone());
        if let Err(err) = self.adapter.on_state_change(state, is_first_render) {
            log::error!("slider update failed: {err}");
            self.set_error(format!("Slider update failed: {err}"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rangeslider_core::{Range, WidgetConfig, DEGENERATE_EPSILON};

    fn app(values: Vec<f64>) -> AppState {
        app_with(WidgetConfig::new("price").with_precision(0.0), values)
    }

    fn app_with(widget: WidgetConfig, values: Vec<f64>) -> AppState {
        let mut app = AppState::new(HostConfig {
            widget,
            values: Some(values),
        });
        app.start();
        app
    }

    #[test]
    fn start_mounts_slider() {
        let app = app(vec![1.0, 50.0, 100.0]);
        assert!(app.surface.is_mounted());
        assert_eq!(app.surface.values(), Some([1.0, 100.0]));
        assert_eq!(app.hits(), 3);
    }

    #[test]
    fn user_move_round_trips_on_next_tick() {
        let mut app = app(vec![0.0, 50.0, 100.0]);
        assert!(app.surface.nudge(10));
        // optimistic until the connector answers
        assert_eq!(app.surface.values(), Some([10.0, 100.0]));
        assert_eq!(app.connector.start(), [0.0, 100.0]);

        app.drain_commands();
        assert_eq!(app.connector.start(), [10.0, 100.0]);
        assert_eq!(app.hits(), 2);
        assert_eq!(app.status_message.as_ref().unwrap().1, StatusLevel::Info);
    }

    #[test]
    fn reset_clears_refinement() {
        let mut app = app(vec![0.0, 100.0]);
        app.surface.nudge(5);
        app.drain_commands();
        app.reset();
        app.drain_commands();
        assert_eq!(app.connector.refinement(), (None, None));
        assert_eq!(app.surface.values(), Some([0.0, 100.0]));
    }

    #[test]
    fn single_value_disables_slider() {
        let app = app(vec![7.0, 7.0]);
        assert!(app.surface.is_disabled());
        assert_eq!(
            app.adapter.controller().last_update().unwrap().range,
            Range::new(7.0, 7.0 + DEGENERATE_EPSILON)
        );
        assert_eq!(app.status_message.as_ref().unwrap().1, StatusLevel::Warning);
    }

    #[test]
    fn single_large_value_still_mounts_disabled() {
        let app = app(vec![1e13, 1e13]);
        let update = app.adapter.controller().last_update().copied().unwrap();
        assert!(update.disabled);
        assert!(update.range.max > 1e13);
        assert!(app.surface.is_disabled());
        assert_eq!(app.status_message.as_ref().unwrap().1, StatusLevel::Warning);
    }

    #[test]
    fn construction_error_is_not_masked_by_degenerate_warning() {
        // 10^400 overflows, so the step collapses to zero and is rejected
        let app = app_with(WidgetConfig::new("price").with_precision(400.0), vec![7.0, 7.0]);
        assert!(!app.surface.is_mounted());
        let (msg, level) = app.status_message.as_ref().unwrap();
        assert_eq!(*level, StatusLevel::Error);
        assert!(msg.contains("step"), "{msg}");
    }
}
