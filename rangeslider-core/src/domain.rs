//! Refinement domain types shared by the adapter, the controller and connectors.
//!
//! A [`RefinementState`] is produced by a connector and replaced wholesale on
//! every change; nothing in this crate mutates one in place.

use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

/// A committed `[lower, upper]` pair of handle values.
pub type Selection = [f64; 2];

/// Closed numeric interval `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// The normalized `[0, 1]` range the control is constructed with.
    pub const fn unit() -> Self {
        Self { min: 0.0, max: 1.0 }
    }

    /// True when the interval has collapsed to a single value.
    pub fn is_degenerate(&self) -> bool {
        self.min == self.max
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    pub fn clamp(&self, value: f64) -> f64 {
        value.max(self.min).min(self.max)
    }
}

/// Callback that commits a new selection upstream.
///
/// Cloning is cheap; clones share the same underlying closure.
#[derive(Clone)]
pub struct Refine {
    inner: Option<Rc<dyn Fn(Selection)>>,
}

impl Refine {
    pub fn new(f: impl Fn(Selection) + 'static) -> Self {
        Self {
            inner: Some(Rc::new(f)),
        }
    }

    /// Placeholder used before the connector delivers its first state.
    pub fn noop() -> Self {
        Self { inner: None }
    }

    pub fn is_noop(&self) -> bool {
        self.inner.is_none()
    }

    pub fn call(&self, values: Selection) {
        match &self.inner {
            Some(f) => f(values),
            None => log::trace!("refine({values:?}) ignored: no connector state yet"),
        }
    }
}

impl Default for Refine {
    fn default() -> Self {
        Self::noop()
    }
}

impl fmt::Debug for Refine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_noop() {
            f.write_str("Refine(noop)")
        } else {
            f.write_str("Refine(..)")
        }
    }
}

/// Connector-owned refinement state.
///
/// Invariant: `range.min <= start[0] <= start[1] <= range.max`, except when
/// the range is degenerate.
#[derive(Debug, Clone)]
pub struct RefinementState {
    /// Full selectable bound.
    pub range: Range,
    /// Currently selected sub-range.
    pub start: Selection,
    pub refine: Refine,
}

impl RefinementState {
    pub fn new(range: Range, start: Selection, refine: Refine) -> Self {
        Self {
            range,
            start,
            refine,
        }
    }

    /// State held before the connector has rendered once.
    pub fn placeholder() -> Self {
        Self {
            range: Range::unit(),
            start: [0.0, 1.0],
            refine: Refine::noop(),
        }
    }
}

impl Default for RefinementState {
    fn default() -> Self {
        Self::placeholder()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn degenerate_range_detection() {
        assert!(Range::new(5.0, 5.0).is_degenerate());
        assert!(!Range::new(0.0, 100.0).is_degenerate());
    }

    #[test]
    fn clamp_stays_inside() {
        let r = Range::new(10.0, 20.0);
        assert_eq!(r.clamp(5.0), 10.0);
        assert_eq!(r.clamp(25.0), 20.0);
        assert_eq!(r.clamp(15.0), 15.0);
    }

    #[test]
    fn noop_refine_is_harmless() {
        let refine = Refine::noop();
        assert!(refine.is_noop());
        refine.call([1.0, 2.0]);
    }

    #[test]
    fn refine_clones_share_closure() {
        let hits = Rc::new(Cell::new(0));
        let counter = hits.clone();
        let refine = Refine::new(move |_| counter.set(counter.get() + 1));
        let other = refine.clone();
        refine.call([0.0, 1.0]);
        other.call([0.0, 1.0]);
        assert_eq!(hits.get(), 2);
    }

    #[test]
    fn placeholder_matches_unit_range() {
        let state = RefinementState::placeholder();
        assert_eq!(state.range, Range::unit());
        assert_eq!(state.start, [0.0, 1.0]);
        assert!(state.refine.is_noop());
    }
}
