//! Slider controller — constructs the visual control once, then updates it.
//!
//! Two phases:
//! - `Uninitialized`: no control exists. The first `update` constructs it
//!   with the normalized `[0, 1]` range, registers the single change
//!   listener, and moves to `Active`.
//! - `Active`: every `update` is an incremental `{disabled, range, start}`
//!   update; the control, its listener and its pips are never rebuilt.
//!
//! A collapsed range (`min == max`) disables the control and widens its
//! upper bound by [`DEGENERATE_EPSILON`], since the primitive needs a
//! strictly positive span. Where the epsilon is below the bound's ulp the
//! next representable value is used instead.

use crate::config::WidgetConfig;
use crate::domain::{Range, RefinementState, Selection};
use crate::format::{format_fixed, step_for, TooltipFormatter};
use crate::pips::{resolve_pips, PipsOption};
use crate::slider::{
    Behaviour, SliderBackend, SliderConfig, SliderError, SliderHandle, SliderUpdate,
};
use crate::state::RefineHandle;

/// Upper-bound nudge applied to a collapsed range.
pub const DEGENERATE_EPSILON: f64 = 0.0001;

/// Presentational options read from the widget configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct SliderOptions {
    pub precision: f64,
    pub pips: Option<PipsOption>,
    pub tooltips: bool,
}

impl SliderOptions {
    pub fn from_config(config: &WidgetConfig) -> Self {
        Self {
            precision: config.display_precision(),
            pips: config.pips.clone(),
            tooltips: config.tooltips,
        }
    }
}

/// Smallest `f64` strictly greater than `x`. NaN and `+inf` map to themselves.
fn next_up(x: f64) -> f64 {
    if x.is_nan() || x == f64::INFINITY {
        return x;
    }
    if x == 0.0 {
        return f64::from_bits(1);
    }
    let bits = x.to_bits();
    f64::from_bits(if x > 0.0 { bits + 1 } else { bits - 1 })
}

/// Upper bound for a collapsed range at `max`.
fn widened_max(max: f64) -> f64 {
    let nudged = max + DEGENERATE_EPSILON;
    if nudged > max {
        nudged
    } else {
        next_up(max)
    }
}

/// Map connector state onto the incremental update, applying the
/// degenerate-range policy.
pub fn slider_update_for(range: Range, start: Selection) -> SliderUpdate {
    let disabled = range.is_degenerate();
    let range = if disabled {
        Range::new(range.min, widened_max(range.max))
    } else {
        range
    };
    SliderUpdate {
        disabled,
        range,
        start,
    }
}

enum Phase<H> {
    Uninitialized,
    Active(H),
}

pub struct SliderController<B: SliderBackend> {
    backend: B,
    options: SliderOptions,
    on_user_change: RefineHandle,
    phase: Phase<B::Handle>,
    last_update: Option<SliderUpdate>,
}

impl<B: SliderBackend> SliderController<B> {
    pub fn new(backend: B, options: SliderOptions, on_user_change: RefineHandle) -> Self {
        Self {
            backend,
            options,
            on_user_change,
            phase: Phase::Uninitialized,
            last_update: None,
        }
    }

    pub fn options(&self) -> &SliderOptions {
        &self.options
    }

    pub fn step(&self) -> f64 {
        step_for(self.options.precision)
    }

    pub fn format_tooltip(&self, value: f64) -> String {
        format_fixed(value, self.options.precision)
    }

    pub fn is_active(&self) -> bool {
        matches!(self.phase, Phase::Active(_))
    }

    pub fn handle(&self) -> Option<&B::Handle> {
        match &self.phase {
            Phase::Active(handle) => Some(handle),
            Phase::Uninitialized => None,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Most recent update applied to the control.
    pub fn last_update(&self) -> Option<&SliderUpdate> {
        self.last_update.as_ref()
    }

    /// Configuration the control is constructed with.
    pub fn slider_config(&self) -> SliderConfig {
        let formatter = TooltipFormatter::new(self.options.precision);
        SliderConfig {
            animate: false,
            behaviour: Behaviour::Snap,
            connect: true,
            pips: resolve_pips(self.options.pips.as_ref()),
            range: Range::unit(),
            start: [0.0, 1.0],
            step: self.step(),
            tooltips: self.options.tooltips.then_some([formatter, formatter]),
        }
    }

    pub fn update(
        &mut self,
        state: &RefinementState,
        is_first_render: bool,
    ) -> Result<(), SliderError> {
        match (&self.phase, is_first_render) {
            (Phase::Uninitialized, false) => {
                log::warn!("slider update before first render; constructing now");
            }
            (Phase::Active(_), true) => {
                log::debug!("first-render flag on an active slider; updating in place");
            }
            _ => {}
        }

        if let Phase::Uninitialized = self.phase {
            let handle = self.construct()?;
            self.phase = Phase::Active(handle);
        }

        let update = slider_update_for(state.range, state.start);
        if update.disabled {
            log::debug!(
                "range collapsed at {}; slider disabled with max {}",
                state.range.min,
                update.range.max
            );
        }

        if let Phase::Active(handle) = &mut self.phase {
            log::trace!("slider update {update:?}");
            handle.update_options(&update)?;
        }
        self.last_update = Some(update);
        Ok(())
    }

    fn construct(&mut self) -> Result<B::Handle, SliderError> {
        let config = self.slider_config();
        log::debug!(
            "constructing slider: step={} pips={:?} tooltips={}",
            config.step,
            config.pips.as_ref().map(|p| p.mode),
            config.tooltips.is_some()
        );
        let mut handle = self.backend.create(config)?;
        let sink = self.on_user_change.clone();
        handle.on_change(Box::new(move |values| sink.refine(values)));
        Ok(handle)
    }
}
