//! Catastrophic cancellation: subtracting nearly equal numbers.
//!
//! The running example is `f(x) = sqrt(x^2 + 1) - x`. For large `x` the two
//! terms agree in almost every digit, so the subtraction wipes out most of
//! the significand. The algebraically identical form
//! `1 / (sqrt(x^2 + 1) + x)` adds instead of subtracting and keeps full
//! precision.

use serde::Serialize;

/// Decimal digits an f64 significand carries (53 * log10(2)).
pub const F64_DECIMAL_DIGITS: f64 = 15.954589770191003;

/// `sqrt(x^2 + 1) - x`, written exactly as the textbook gives it.
pub fn naive_diff(x: f64) -> f64 {
    (x * x + 1.0).sqrt() - x
}

/// The same quantity via the conjugate identity `1 / (sqrt(x^2 + 1) + x)`.
pub fn stable_diff(x: f64) -> f64 {
    1.0 / ((x * x + 1.0).sqrt() + x)
}

/// Decimal digits of precision lost by `approx` relative to `exact`.
///
/// Zero when the values agree to full precision; clamped to the digit budget
/// of an f64 when nothing survives (e.g. `approx` is 0 while `exact` is not).
pub fn digits_lost(approx: f64, exact: f64) -> f64 {
    if approx == exact {
        return 0.0;
    }
    if exact == 0.0 || !approx.is_finite() || !exact.is_finite() {
        return F64_DECIMAL_DIGITS;
    }
    let rel = ((approx - exact) / exact).abs();
    if rel == 0.0 {
        return 0.0;
    }
    // rel ~ 10^-d means d correct digits remain.
    let correct = -rel.log10();
    (F64_DECIMAL_DIGITS - correct).clamp(0.0, F64_DECIMAL_DIGITS)
}

/// One row of the cancellation sweep.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CancellationSample {
    pub x: f64,
    pub naive: f64,
    pub stable: f64,
    /// Relative error of the naive form, measured against the stable one.
    pub rel_error: f64,
}

/// Evaluate both forms over the given inputs.
pub fn sweep(xs: &[f64]) -> Vec<CancellationSample> {
    xs.iter()
        .map(|&x| {
            let naive = naive_diff(x);
            let stable = stable_diff(x);
            let rel_error = if stable != 0.0 {
                ((naive - stable) / stable).abs()
            } else {
                f64::NAN
            };
            CancellationSample {
                x,
                naive,
                stable,
                rel_error,
            }
        })
        .collect()
}
