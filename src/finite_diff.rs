//! Finite-difference derivatives and the truncation/round-off trade-off.
//!
//! Shrinking the step size `h` reduces truncation error (O(h) for the forward
//! scheme, O(h^2) for central) but amplifies round-off: the numerator
//! subtracts two nearly equal function values and then divides by a tiny
//! number. Swept over many decades of `h`, the total error traces the
//! familiar V shape on a log-log plot, bottoming out near `sqrt(eps)` for the
//! forward scheme and `cbrt(eps)` for the central one.

use serde::Serialize;

/// One-sided difference quotient `(f(x+h) - f(x)) / h`.
pub fn forward_diff<F: Fn(f64) -> f64>(f: F, x: f64, h: f64) -> f64 {
    (f(x + h) - f(x)) / h
}

/// Symmetric difference quotient `(f(x+h) - f(x-h)) / 2h`.
pub fn central_diff<F: Fn(f64) -> f64>(f: F, x: f64, h: f64) -> f64 {
    (f(x + h) - f(x - h)) / (2.0 * h)
}

/// Step sizes `10^min_exp ..= 10^max_exp`, `per_decade` per decade, ascending.
///
/// # Panics
///
/// Panics if `min_exp >= max_exp` or `per_decade == 0`.
pub fn log_spaced_steps(min_exp: i32, max_exp: i32, per_decade: usize) -> Vec<f64> {
    assert!(min_exp < max_exp, "empty exponent range");
    assert!(per_decade > 0, "need at least one step per decade");
    let decades = (max_exp - min_exp) as usize;
    let n = decades * per_decade;
    let mut steps = Vec::with_capacity(n + 1);
    for i in 0..=n {
        let exp = min_exp as f64 + i as f64 / per_decade as f64;
        steps.push(10f64.powf(exp));
    }
    steps
}

/// One row of the step-size sweep: absolute errors of both schemes at `h`.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SweepSample {
    pub h: f64,
    pub forward_err: f64,
    pub central_err: f64,
}

/// Evaluate both schemes against the analytic derivative `df` at `x` for
/// every step size in `steps`.
pub fn error_sweep<F, D>(f: F, df: D, x: f64, steps: &[f64]) -> Vec<SweepSample>
where
    F: Fn(f64) -> f64 + Copy,
    D: Fn(f64) -> f64,
{
    let exact = df(x);
    steps
        .iter()
        .map(|&h| SweepSample {
            h,
            forward_err: (forward_diff(f, x, h) - exact).abs(),
            central_err: (central_diff(f, x, h) - exact).abs(),
        })
        .collect()
}

/// Rule-of-thumb optimal step for the forward scheme, `sqrt(eps)`.
pub fn optimal_step_forward() -> f64 {
    f64::EPSILON.sqrt()
}

/// Rule-of-thumb optimal step for the central scheme, `cbrt(eps)`.
pub fn optimal_step_central() -> f64 {
    f64::EPSILON.cbrt()
}

/// The sample with the smallest forward error (useful for annotating plots).
pub fn best_forward(samples: &[SweepSample]) -> Option<&SweepSample> {
    samples
        .iter()
        .filter(|s| s.forward_err.is_finite())
        .min_by(|a, b| a.forward_err.total_cmp(&b.forward_err))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn central_beats_forward_at_moderate_h() {
        let f = |x: f64| x.sin();
        let x: f64 = 1.0;
        let exact = x.cos();
        let h = 1e-5;
        let fwd = (forward_diff(f, x, h) - exact).abs();
        let cen = (central_diff(f, x, h) - exact).abs();
        assert!(
            cen < fwd,
            "central O(h^2) should beat forward O(h): {cen} vs {fwd}"
        );
    }

    #[test]
    #[should_panic(expected = "empty exponent range")]
    fn steps_reject_inverted_range() {
        log_spaced_steps(0, -4, 4);
    }

    #[test]
    #[should_panic(expected = "at least one step per decade")]
    fn steps_reject_zero_density() {
        log_spaced_steps(-4, 0, 0);
    }

    #[test]
    fn steps_are_ascending_and_cover_range() {
        let steps = log_spaced_steps(-16, 0, 4);
        assert_eq!(steps.len(), 16 * 4 + 1);
        assert!(steps.windows(2).all(|w| w[0] < w[1]));
        assert!((steps[0] - 1e-16).abs() < 1e-30);
        assert!((steps[steps.len() - 1] - 1.0).abs() < 1e-12);
    }
}
