//! In-memory range connector over a slice of attribute values.
//!
//! Stands in for a search backend's numeric range refinement: it owns the
//! authoritative bounds and the current refinement, validates and clamps
//! incoming selections, and renders [`RefinementState`]s for the adapter.

use crate::config::ConnectorParams;
use crate::domain::{Range, Refine, RefinementState, Selection};
use crate::format::DEFAULT_PRECISION;

fn scale(precision: f64) -> f64 {
    10f64.powf(precision)
}

/// Apply `op` on the `10^-precision` grid. Values the grid cannot represent
/// are returned unchanged.
fn on_grid(value: f64, precision: f64, op: fn(f64) -> f64) -> f64 {
    let pow = scale(precision);
    let scaled = value * pow;
    if pow == 0.0 || !scaled.is_finite() {
        return value;
    }
    op(scaled) / pow
}

fn round_to(value: f64, precision: f64) -> f64 {
    on_grid(value, precision, f64::round)
}

#[derive(Debug, Clone)]
pub struct RangeConnector {
    attribute_name: String,
    precision: f64,
    range: Range,
    lower: Option<f64>,
    upper: Option<f64>,
}

impl RangeConnector {
    /// Derive the authoritative range from configured bounds, falling back to
    /// the data's extent. Bounds are widened outward onto the precision grid.
    pub fn new(params: &ConnectorParams, values: &[f64]) -> Self {
        let precision = params.precision.unwrap_or(DEFAULT_PRECISION);
        let finite = values.iter().copied().filter(|v| v.is_finite());
        let data_min = finite.clone().fold(None, |acc: Option<f64>, v| {
            Some(acc.map_or(v, |a| a.min(v)))
        });
        let data_max = finite.fold(None, |acc: Option<f64>, v| Some(acc.map_or(v, |a| a.max(v))));

        let min = on_grid(params.min.or(data_min).unwrap_or(0.0), precision, f64::floor);
        let mut max = on_grid(params.max.or(data_max).unwrap_or(0.0), precision, f64::ceil);
        if min > max {
            max = min;
        }

        Self {
            attribute_name: params.attribute_name.clone(),
            precision,
            range: Range::new(min, max),
            lower: None,
            upper: None,
        }
    }

    pub fn attribute_name(&self) -> &str {
        &self.attribute_name
    }

    pub fn precision(&self) -> f64 {
        self.precision
    }

    pub fn range(&self) -> Range {
        self.range
    }

    /// Raw refinement; `None` means that side is unrestricted.
    pub fn refinement(&self) -> (Option<f64>, Option<f64>) {
        (self.lower, self.upper)
    }

    /// Current selection with unrestricted sides resolved to the bounds.
    pub fn start(&self) -> Selection {
        [
            self.lower.unwrap_or(self.range.min),
            self.upper.unwrap_or(self.range.max),
        ]
    }

    pub fn state(&self, refine: Refine) -> RefinementState {
        RefinementState::new(self.range, self.start(), refine)
    }

    /// Apply a selection. Returns whether the refinement changed.
    ///
    /// Non-finite or inverted selections are rejected. Accepted values are
    /// clamped into the range and rounded to the precision; a side equal to
    /// its bound is cleared.
    pub fn refine(&mut self, values: Selection) -> bool {
        let [lo, hi] = values;
        if !lo.is_finite() || !hi.is_finite() || lo > hi {
            log::debug!("{}: rejected refinement {values:?}", self.attribute_name);
            return false;
        }

        let snap = |v: f64| self.range.clamp(round_to(self.range.clamp(v), self.precision));
        let lo = snap(lo);
        let hi = snap(hi);
        let lower = (lo != self.range.min).then_some(lo);
        let upper = (hi != self.range.max).then_some(hi);

        let changed = (lower, upper) != (self.lower, self.upper);
        self.lower = lower;
        self.upper = upper;
        if changed {
            log::info!(
                "{}: refined to [{}, {}]",
                self.attribute_name,
                self.start()[0],
                self.start()[1]
            );
        }
        changed
    }

    pub fn clear(&mut self) -> bool {
        let changed = self.lower.is_some() || self.upper.is_some();
        self.lower = None;
        self.upper = None;
        changed
    }

    /// Number of values inside the current selection.
    pub fn count_in_refinement(&self, values: &[f64]) -> usize {
        let [lo, hi] = self.start();
        values.iter().filter(|v| **v >= lo && **v <= hi).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(min: Option<f64>, max: Option<f64>, precision: Option<f64>) -> ConnectorParams {
        ConnectorParams {
            attribute_name: "price".into(),
            min,
            max,
            precision,
        }
    }

    #[test]
    fn range_from_data_extent() {
        let c = RangeConnector::new(&params(None, None, Some(0.0)), &[3.2, 8.7, 5.0]);
        assert_eq!(c.range(), Range::new(3.0, 9.0));
        assert_eq!(c.start(), [3.0, 9.0]);
    }

    #[test]
    fn configured_bounds_win() {
        let c = RangeConnector::new(&params(Some(0.0), Some(100.0), Some(1.0)), &[3.0, 8.0]);
        assert_eq!(c.range(), Range::new(0.0, 100.0));
    }

    #[test]
    fn empty_data_defaults_to_zero() {
        let c = RangeConnector::new(&params(None, None, None), &[]);
        assert!(c.range().is_degenerate());
        assert_eq!(c.range().min, 0.0);
    }

    #[test]
    fn unrepresentable_grid_keeps_raw_bounds() {
        let c = RangeConnector::new(&params(None, None, Some(400.0)), &[7.0, 7.0]);
        assert_eq!(c.range(), Range::new(7.0, 7.0));
        let c = RangeConnector::new(&params(None, None, Some(2.0)), &[1.0, f64::MAX]);
        assert_eq!(c.range().max, f64::MAX);
    }

    #[test]
    fn single_value_collapses_range() {
        let c = RangeConnector::new(&params(None, None, Some(0.0)), &[5.0, 5.0]);
        assert_eq!(c.range(), Range::new(5.0, 5.0));
    }

    #[test]
    fn inverted_bounds_collapse_to_min() {
        let c = RangeConnector::new(&params(Some(10.0), Some(2.0), Some(0.0)), &[]);
        assert_eq!(c.range(), Range::new(10.0, 10.0));
    }

    #[test]
    fn refine_clamps_and_rounds() {
        let mut c = RangeConnector::new(&params(Some(0.0), Some(100.0), Some(0.0)), &[]);
        assert!(c.refine([-20.0, 42.4]));
        assert_eq!(c.refinement(), (None, Some(42.0)));
        assert_eq!(c.start(), [0.0, 42.0]);
    }

    #[test]
    fn refine_rejects_inverted_and_nan() {
        let mut c = RangeConnector::new(&params(Some(0.0), Some(100.0), Some(0.0)), &[]);
        assert!(!c.refine([80.0, 20.0]));
        assert!(!c.refine([f64::NAN, 20.0]));
        assert_eq!(c.refinement(), (None, None));
    }

    #[test]
    fn refine_to_bounds_clears() {
        let mut c = RangeConnector::new(&params(Some(0.0), Some(100.0), Some(0.0)), &[]);
        assert!(c.refine([20.0, 80.0]));
        assert!(c.refine([0.0, 100.0]));
        assert_eq!(c.refinement(), (None, None));
        assert!(!c.refine([0.0, 100.0]));
    }

    #[test]
    fn clear_reports_change() {
        let mut c = RangeConnector::new(&params(Some(0.0), Some(100.0), Some(0.0)), &[]);
        assert!(!c.clear());
        c.refine([10.0, 20.0]);
        assert!(c.clear());
        assert_eq!(c.start(), [0.0, 100.0]);
    }

    #[test]
    fn counts_values_in_selection() {
        let values = [1.0, 5.0, 10.0, 15.0, 20.0];
        let mut c = RangeConnector::new(&params(None, None, Some(0.0)), &values);
        assert_eq!(c.count_in_refinement(&values), 5);
        c.refine([5.0, 15.0]);
        assert_eq!(c.count_in_refinement(&values), 3);
    }
}
