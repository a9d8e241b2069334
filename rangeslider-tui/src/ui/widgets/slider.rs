//! Terminal dual-handle slider — the concrete slider primitive.
//!
//! [`TerminalSliderBackend`] builds the control into a shared
//! [`SliderSurface`], which the host renders and routes input through. The
//! [`TerminalSliderHandle`] returned to the controller is the only path for
//! option updates.
//!
//! User moves are applied optimistically and committed to the change
//! listener; the next `update_options` snaps handles to authoritative values.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Widget;

use rangeslider_core::slider::{validate_range, validate_step};
use rangeslider_core::{
    Behaviour, ChangeListener, PipsMode, PipsSpec, Range, Selection, SliderBackend,
    SliderConfig, SliderError, SliderHandle, SliderUpdate, TooltipFormatter,
};

use crate::theme::Theme;

/// Fraction digits implied by a step size (0.01 → 2).
fn digits_for_step(step: f64) -> f64 {
    (-step.log10()).round().max(0.0)
}

/// Upper bound on generated marks; more than this just paints the row solid.
const MAX_PIP_MARKS: usize = 101;

/// A tick on the pip row.
#[derive(Debug, Clone, PartialEq)]
pub struct PipMark {
    /// Position along the track, 0..=1.
    pub fraction: f64,
    /// Major marks carry a value label.
    pub value: Option<f64>,
}

/// Compute pip marks for the current range.
pub fn pip_marks(spec: &PipsSpec, range: Range, step: f64) -> Vec<PipMark> {
    let span = range.span();
    if span <= 0.0 {
        return Vec::new();
    }
    let snap = |v: f64| {
        if spec.stepped.unwrap_or(false) && step > 0.0 {
            range.min + ((v - range.min) / step).round() * step
        } else {
            v
        }
    };
    let at_fraction = |f: f64| {
        let value = range.clamp(snap(range.min + f * span));
        PipMark {
            fraction: ((value - range.min) / span).clamp(0.0, 1.0),
            value: Some(value),
        }
    };

    let mut marks: Vec<PipMark> = match spec.mode {
        PipsMode::Range => vec![at_fraction(0.0), at_fraction(1.0)],
        PipsMode::Positions => spec
            .values
            .iter()
            .filter(|p| (0.0..=100.0).contains(*p))
            .map(|p| at_fraction(p / 100.0))
            .collect(),
        PipsMode::Count => {
            let n = (spec.values.first().copied().unwrap_or(2.0).max(2.0) as usize)
                .min(MAX_PIP_MARKS);
            (0..n).map(|i| at_fraction(i as f64 / (n - 1) as f64)).collect()
        }
        PipsMode::Steps => {
            if step <= 0.0 {
                Vec::new()
            } else {
                let count = (span / step).floor() as usize;
                let stride = (count / (MAX_PIP_MARKS - 1)).max(1);
                (0..=count)
                    .step_by(stride)
                    .map(|i| at_fraction(i as f64 * step / span))
                    .collect()
            }
        }
        PipsMode::Values => spec
            .values
            .iter()
            .filter(|v| range.contains(**v))
            .map(|v| at_fraction((v - range.min) / span))
            .collect(),
    };

    if let Some(density) = spec.density.filter(|d| *d > 0) {
        let mut pct = 0;
        while pct <= 100 {
            let fraction = pct as f64 / 100.0;
            if !marks.iter().any(|m| (m.fraction - fraction).abs() < 1e-9) {
                marks.push(PipMark {
                    fraction,
                    value: None,
                });
            }
            pct += density;
        }
    }

    marks.sort_by(|a, b| a.fraction.total_cmp(&b.fraction));
    marks
}

struct SliderModel {
    config: SliderConfig,
    label_format: TooltipFormatter,
    disabled: bool,
    range: Range,
    values: Selection,
    active: usize,
    listener: Option<ChangeListener>,
}

impl SliderModel {
    fn snap(&self, value: f64) -> f64 {
        let step = self.config.step;
        let snapped = self.range.min + ((value - self.range.min) / step).round() * step;
        self.range.clamp(snapped)
    }

    /// Move one handle without crossing the other. Returns true if it moved.
    fn set_handle(&mut self, index: usize, value: f64) -> bool {
        let value = self.snap(value);
        let value = if index == 0 {
            value.min(self.values[1])
        } else {
            value.max(self.values[0])
        };
        if value == self.values[index] {
            return false;
        }
        self.values[index] = value;
        true
    }
}

/// Read-only snapshot used for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct SliderView {
    pub disabled: bool,
    pub range: Range,
    pub values: Selection,
    pub active: usize,
    pub connect: bool,
    pub tooltips: Option<[String; 2]>,
    pub pips: Vec<PipMark>,
    pub pip_format: TooltipFormatter,
}

/// Mount point for the slider, shared by the backend, its handle and the host.
#[derive(Clone, Default)]
pub struct SliderSurface {
    model: Rc<RefCell<Option<SliderModel>>>,
    track: Rc<Cell<Option<Rect>>>,
}

impl SliderSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_mounted(&self) -> bool {
        self.model.borrow().is_some()
    }

    pub fn values(&self) -> Option<Selection> {
        self.model.borrow().as_ref().map(|m| m.values)
    }

    pub fn is_disabled(&self) -> bool {
        self.model.borrow().as_ref().is_some_and(|m| m.disabled)
    }

    pub fn view(&self) -> Option<SliderView> {
        let model = self.model.borrow();
        let m = model.as_ref()?;
        Some(SliderView {
            disabled: m.disabled,
            range: m.range,
            values: m.values,
            active: m.active,
            connect: m.config.connect,
            tooltips: m
                .config
                .tooltips
                .map(|[lo, hi]| [lo.to(m.values[0]), hi.to(m.values[1])]),
            pips: m
                .config
                .pips
                .as_ref()
                .map(|spec| pip_marks(spec, m.range, m.config.step))
                .unwrap_or_default(),
            pip_format: m.label_format,
        })
    }

    pub fn select_handle(&self, index: usize) {
        if let Some(m) = self.model.borrow_mut().as_mut() {
            m.active = index.min(1);
        }
    }

    pub fn toggle_handle(&self) {
        if let Some(m) = self.model.borrow_mut().as_mut() {
            m.active = 1 - m.active;
        }
    }

    /// Move the active handle by `steps` steps and commit.
    pub fn nudge(&self, steps: i32) -> bool {
        self.commit_with(|m| {
            let index = m.active;
            let target = m.values[index] + steps as f64 * m.config.step;
            m.set_handle(index, target)
        })
    }

    /// Move the nearest handle to a point on the track and commit.
    pub fn snap_to_fraction(&self, fraction: f64) -> bool {
        self.commit_with(|m| {
            if m.config.behaviour != Behaviour::Snap {
                return false;
            }
            let value = m.range.min + fraction.clamp(0.0, 1.0) * m.range.span();
            let [lo, hi] = m.values;
            let index = if (value - lo).abs() < (value - hi).abs() || value < lo {
                0
            } else {
                1
            };
            m.active = index;
            m.set_handle(index, value)
        })
    }

    /// Translate a mouse click into a track snap.
    pub fn click(&self, column: u16, row: u16) -> bool {
        let Some(track) = self.track.get() else {
            return false;
        };
        if row != track.y || column < track.x || column >= track.x + track.width {
            return false;
        }
        let fraction = if track.width > 1 {
            (column - track.x) as f64 / (track.width - 1) as f64
        } else {
            0.0
        };
        self.snap_to_fraction(fraction)
    }

    pub(crate) fn set_track(&self, track: Rect) {
        self.track.set(Some(track));
    }

    fn commit_with(&self, apply: impl FnOnce(&mut SliderModel) -> bool) -> bool {
        let (values, listener) = {
            let mut model = self.model.borrow_mut();
            let Some(m) = model.as_mut() else {
                return false;
            };
            if m.disabled || !apply(m) {
                return false;
            }
            (m.values, m.listener.take())
        };

        // listener runs without the model borrowed
        if let Some(mut listener) = listener {
            listener(values);
            if let Some(m) = self.model.borrow_mut().as_mut() {
                m.listener.get_or_insert(listener);
            }
        }
        true
    }
}

pub struct TerminalSliderBackend {
    surface: SliderSurface,
}

impl TerminalSliderBackend {
    pub fn new(surface: SliderSurface) -> Self {
        Self { surface }
    }
}

pub struct TerminalSliderHandle {
    surface: SliderSurface,
}

impl SliderHandle for TerminalSliderHandle {
    fn on_change(&mut self, listener: ChangeListener) {
        if let Some(m) = self.surface.model.borrow_mut().as_mut() {
            m.listener = Some(listener);
        }
    }

    fn update_options(&mut self, update: &SliderUpdate) -> Result<(), SliderError> {
        validate_range(&update.range)?;
        let mut model = self.surface.model.borrow_mut();
        let m = model
            .as_mut()
            .ok_or_else(|| SliderError::Backend("slider not mounted".into()))?;
        m.disabled = update.disabled;
        m.range = update.range;
        let lo = update.range.clamp(update.start[0]);
        let hi = update.range.clamp(update.start[1]).max(lo);
        m.values = [lo, hi];
        Ok(())
    }
}

impl SliderBackend for TerminalSliderBackend {
    type Handle = TerminalSliderHandle;

    fn create(&mut self, config: SliderConfig) -> Result<TerminalSliderHandle, SliderError> {
        validate_range(&config.range)?;
        validate_step(config.step)?;
        let label_format = config
            .tooltips
            .map(|t| t[0])
            .unwrap_or_else(|| TooltipFormatter::new(digits_for_step(config.step)));
        let model = SliderModel {
            range: config.range,
            values: config.start,
            label_format,
            disabled: false,
            active: 0,
            listener: None,
            config,
        };
        *self.surface.model.borrow_mut() = Some(model);
        Ok(TerminalSliderHandle {
            surface: self.surface.clone(),
        })
    }
}

// ── Rendering ────────────────────────────────────────────────────────

/// Slider widget drawn from a [`SliderView`].
///
/// Rows: tooltips, track, pip ticks, pip labels.
pub struct SliderWidget<'a> {
    view: &'a SliderView,
    theme: &'a Theme,
}

impl<'a> SliderWidget<'a> {
    pub fn new(view: &'a SliderView, theme: &'a Theme) -> Self {
        Self { view, theme }
    }

    /// Rect of the track row inside `area`.
    pub fn track_rect(area: Rect) -> Rect {
        let y = if area.height > 1 { area.y + 1 } else { area.y };
        Rect::new(area.x + 1, y, area.width.saturating_sub(2), 1)
    }
}

fn column_for(track: Rect, fraction: f64) -> u16 {
    let offset = (fraction.clamp(0.0, 1.0) * track.width.saturating_sub(1) as f64).round();
    track.x + offset as u16
}

fn centered(len: u16, anchor: u16, left: u16, right: u16) -> u16 {
    let start = anchor.saturating_sub(len / 2).max(left);
    start.min(right.saturating_sub(len)).max(left)
}

impl<'a> Widget for SliderWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let track = Self::track_rect(area);
        if track.width < 2 {
            return;
        }
        let v = self.view;
        let span = v.range.span();
        let frac = |x: f64| if span > 0.0 { (x - v.range.min) / span } else { 0.0 };
        let cols = [
            column_for(track, frac(v.values[0])),
            column_for(track, frac(v.values[1])),
        ];

        let (line_style, fill_style, handle_style) = if v.disabled {
            let muted = Style::default().fg(self.theme.muted);
            (muted, muted, muted)
        } else {
            (
                Style::default().fg(self.theme.track),
                Style::default().fg(self.theme.accent),
                Style::default().fg(self.theme.handle).add_modifier(Modifier::BOLD),
            )
        };

        // Track with connect fill.
        for x in track.x..track.x + track.width {
            let inside = v.connect && x >= cols[0] && x <= cols[1];
            let (symbol, style) = if inside { ("━", fill_style) } else { ("─", line_style) };
            buf.set_string(x, track.y, symbol, style);
        }

        // Handles.
        for (i, col) in cols.iter().enumerate() {
            let symbol = if v.disabled { "○" } else { "●" };
            let style = if i == v.active && !v.disabled {
                handle_style.add_modifier(Modifier::REVERSED)
            } else {
                handle_style
            };
            buf.set_string(*col, track.y, symbol, style);
        }

        // Tooltips above handles.
        if let Some(tips) = &v.tooltips {
            if track.y > area.y {
                let right = area.x + area.width;
                let y = track.y - 1;
                let lo_len = tips[0].chars().count() as u16;
                let hi_len = tips[1].chars().count() as u16;
                let lo_x = centered(lo_len, cols[0], area.x, right);
                let hi_x = centered(hi_len, cols[1], area.x, right).max(lo_x + lo_len + 1);
                let style = Style::default().fg(self.theme.tooltip);
                buf.set_stringn(lo_x, y, &tips[0], right.saturating_sub(lo_x) as usize, style);
                if hi_x < right {
                    buf.set_stringn(hi_x, y, &tips[1], (right - hi_x) as usize, style);
                }
            }
        }

        // Pips below the track.
        let tick_y = track.y + 1;
        if tick_y >= area.y + area.height {
            return;
        }
        let pip_color = if v.disabled {
            self.theme.muted
        } else {
            self.theme.pip
        };
        let pip_style = Style::default().fg(pip_color);
        let label_y = tick_y + 1;
        let right = area.x + area.width;
        let mut next_free = area.x;
        for mark in &v.pips {
            let col = column_for(track, mark.fraction);
            let symbol = if mark.value.is_some() { "│" } else { "·" };
            buf.set_string(col, tick_y, symbol, pip_style);

            if let Some(value) = mark.value {
                if label_y >= area.y + area.height {
                    continue;
                }
                let label = v.pip_format.to(value);
                let len = label.chars().count() as u16;
                let x = centered(len, col, area.x, right);
                // skip labels that would overlap the previous one
                if x < next_free || x + len > right {
                    continue;
                }
                buf.set_string(x, label_y, &label, pip_style);
                next_free = x + len + 1;
            }
        }
    }
}
