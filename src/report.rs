//! Plain-text rendering of the demonstration results.
//!
//! Each `render_*` function returns a complete `String` so the output can be
//! asserted on in tests without capturing stdout; the binary and the demo
//! programs just print it.

use std::fmt::Write;

use crate::cancellation::{digits_lost, CancellationSample};
use crate::compare::{approx_eq, observed_epsilon, ulp_distance, Tolerance};
use crate::finite_diff::{best_forward, optimal_step_central, optimal_step_forward, SweepSample};
use crate::quadratic::{Quadratic, Roots};

/// Demonstration 1: `0.1 + 0.2` versus `0.3`.
pub fn render_equality() -> String {
    let sum = 0.1 + 0.2;
    let mut out = String::new();
    writeln!(out, "== Floating-point equality ==").unwrap();
    writeln!(out, "0.1 + 0.2          = {sum:.20}").unwrap();
    writeln!(out, "0.3                = {:.20}", 0.3).unwrap();
    writeln!(out, "exactly equal?       {}", sum == 0.3).unwrap();
    writeln!(
        out,
        "ULP apart:           {}",
        ulp_distance(sum, 0.3).unwrap_or(u64::MAX)
    )
    .unwrap();
    writeln!(
        out,
        "approx_eq (default): {}",
        approx_eq(sum, 0.3, Tolerance::default())
    )
    .unwrap();
    writeln!(
        out,
        "machine epsilon:     observed {:e}, f64::EPSILON {:e}",
        observed_epsilon(),
        f64::EPSILON
    )
    .unwrap();
    out
}

/// Demonstration 2: cancellation in `sqrt(x^2+1) - x`.
pub fn render_cancellation(samples: &[CancellationSample]) -> String {
    let mut out = String::new();
    writeln!(out, "== Catastrophic cancellation: sqrt(x^2+1) - x ==").unwrap();
    writeln!(
        out,
        "{:>12} {:>24} {:>24} {:>12} {:>12}",
        "x", "naive", "stable", "rel error", "digits lost"
    )
    .unwrap();
    for s in samples {
        writeln!(
            out,
            "{:>12.4e} {:>24.16e} {:>24.16e} {:>12.2e} {:>12.1}",
            s.x,
            s.naive,
            s.stable,
            s.rel_error,
            digits_lost(s.naive, s.stable)
        )
        .unwrap();
    }
    out
}

fn fmt_roots(r: &Roots) -> String {
    match r {
        Roots::Two { smaller, larger } => format!("x1 = {smaller:.16e}, x2 = {larger:.16e}"),
        Roots::Double(x) => format!("x1 = x2 = {x:.16e}"),
        Roots::Complex { re, im } => format!("x = {re:.6e} ± {im:.6e}i"),
        Roots::Linear(x) => format!("linear, x = {x:.16e}"),
        Roots::Constant => "no variable terms".to_string(),
    }
}

/// Demonstration 3: naive versus stable quadratic formula.
pub fn render_quadratic(q: &Quadratic) -> String {
    let mut out = String::new();
    writeln!(out, "== Quadratic roots: {}x^2 + {}x + {} ==", q.a, q.b, q.c).unwrap();
    let naive = q.roots_naive();
    let stable = q.roots_stable();
    writeln!(out, "naive:  {}", fmt_roots(&naive)).unwrap();
    writeln!(out, "stable: {}", fmt_roots(&stable)).unwrap();
    if let (Roots::Two { smaller: n, .. }, Roots::Two { smaller: s, .. }) = (&naive, &stable) {
        // The residual at the small root is where the difference shows.
        writeln!(out, "residual at naive small root:  {:.4e}", q.residual(*n)).unwrap();
        writeln!(out, "residual at stable small root: {:.4e}", q.residual(*s)).unwrap();
    }
    out
}

/// Demonstration 4: the error sweep summary printed alongside the plot.
pub fn render_sweep(samples: &[SweepSample]) -> String {
    let mut out = String::new();
    writeln!(out, "== Finite-difference error vs step size ==").unwrap();
    writeln!(out, "{:>12} {:>14} {:>14}", "h", "forward err", "central err").unwrap();
    for s in samples {
        writeln!(
            out,
            "{:>12.2e} {:>14.4e} {:>14.4e}",
            s.h, s.forward_err, s.central_err
        )
        .unwrap();
    }
    if let Some(best) = best_forward(samples) {
        writeln!(
            out,
            "best forward step: h = {:.2e} (err {:.2e}); sqrt(eps) = {:.2e}, cbrt(eps) = {:.2e}",
            best.h,
            best.forward_err,
            optimal_step_forward(),
            optimal_step_central()
        )
        .unwrap();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_report_mentions_the_mismatch() {
        let s = render_equality();
        assert!(s.contains("exactly equal?       false"));
        assert!(s.contains("approx_eq (default): true"));
    }
}
