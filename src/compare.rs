//! Floating-point equality: why `==` is the wrong tool and what to use instead.
//!
//! The classic example is `0.1 + 0.2 != 0.3`: none of the three literals is
//! representable in binary, and the rounding of the sum does not land on the
//! rounding of `0.3`. This module provides a tolerance-based comparison, an
//! ULP distance, and an empirical search for machine epsilon.

/// Combined absolute/relative tolerance for [`approx_eq`].
#[derive(Debug, Clone, Copy)]
pub struct Tolerance {
    /// Absolute floor: values closer than this are always equal.
    pub abs: f64,
    /// Relative tolerance, scaled by the larger magnitude of the operands.
    pub rel: f64,
}

impl Default for Tolerance {
    fn default() -> Self {
        // A few ULP of slack; enough to absorb a handful of roundings.
        Self {
            abs: 0.0,
            rel: 4.0 * f64::EPSILON,
        }
    }
}

impl Tolerance {
    /// Purely absolute tolerance.
    pub fn abs(abs: f64) -> Self {
        Self { abs, rel: 0.0 }
    }

    /// Purely relative tolerance.
    pub fn rel(rel: f64) -> Self {
        Self { abs: 0.0, rel }
    }
}

/// Tolerance-based equality: `|a - b| <= max(abs, rel * max(|a|, |b|))`.
///
/// NaN never compares equal to anything (including itself). Two identical
/// infinities compare equal; an infinity never equals a finite value.
pub fn approx_eq(a: f64, b: f64, tol: Tolerance) -> bool {
    if a.is_nan() || b.is_nan() {
        return false;
    }
    if a == b {
        // Covers equal infinities and exact hits, where the subtraction
        // below would produce NaN or needless work.
        return true;
    }
    if a.is_infinite() || b.is_infinite() {
        return false;
    }
    let diff = (a - b).abs();
    diff <= tol.abs.max(tol.rel * a.abs().max(b.abs()))
}

/// Number of representable doubles between `a` and `b` (order-independent).
///
/// Returns `None` for NaN operands. Uses the standard bit-pattern trick:
/// reinterpret as sign-magnitude integers, map onto a single monotonic scale,
/// and subtract. `-0.0` and `+0.0` are 0 ULP apart.
pub fn ulp_distance(a: f64, b: f64) -> Option<u64> {
    if a.is_nan() || b.is_nan() {
        return None;
    }
    fn ordered_bits(x: f64) -> i64 {
        let bits = x.to_bits() as i64;
        // Negative floats order backwards in raw two's complement; flip them
        // onto the same monotonic scale as positives. -0.0 maps to 0.
        if bits < 0 {
            i64::MIN.wrapping_sub(bits)
        } else {
            bits
        }
    }
    Some(ordered_bits(a).abs_diff(ordered_bits(b)))
}

/// Find machine epsilon empirically: halve a candidate until adding it to 1.0
/// no longer changes the result, and report the last value that did.
///
/// The result equals [`f64::EPSILON`]; computing it the long way is the point
/// of the demonstration.
pub fn observed_epsilon() -> f64 {
    let mut eps = 1.0f64;
    while 1.0 + eps / 2.0 != 1.0 {
        eps /= 2.0;
    }
    eps
}
