//! Precision-derived step size and fixed-point tooltip formatting.

use serde::{Deserialize, Serialize};

/// Precision used for display when none is configured or it cannot be parsed.
pub const DEFAULT_PRECISION: f64 = 2.0;

/// Upper bound on fraction digits, matching what fixed-point formatters accept.
pub const MAX_FRACTION_DIGITS: usize = 100;

/// Step size for a given precision: `1 / 10^precision`.
pub fn step_for(precision: f64) -> f64 {
    1.0 / 10f64.powf(precision)
}

/// Number of digits after the decimal point for a precision value.
///
/// Fractional precisions truncate; negative or non-finite ones yield 0.
pub fn fraction_digits(precision: f64) -> usize {
    if !precision.is_finite() || precision <= 0.0 {
        return 0;
    }
    (precision.trunc() as usize).min(MAX_FRACTION_DIGITS)
}

/// Format `value` with exactly `precision` digits after the decimal point.
///
/// Plain fixed-point: no exponent, no digit grouping.
pub fn format_fixed(value: f64, precision: f64) -> String {
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    let digits = fraction_digits(precision);
    // -0.0 renders without a sign
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{value:.digits$}")
}

/// Tooltip formatter attached to one slider handle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TooltipFormatter {
    pub precision: f64,
}

impl TooltipFormatter {
    pub fn new(precision: f64) -> Self {
        Self { precision }
    }

    /// Render a handle value for display.
    pub fn to(&self, value: f64) -> String {
        format_fixed(value, self.precision)
    }
}

impl Default for TooltipFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_PRECISION)
    }
}
