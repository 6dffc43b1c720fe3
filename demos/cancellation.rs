//! Demo: Catastrophic cancellation
//!
//! What it demonstrates
//! - `sqrt(x^2 + 1) - x` losing digits as x grows, while the conjugate form
//!   `1 / (sqrt(x^2 + 1) + x)` stays accurate.
//! - Quantifying the loss in decimal digits per input magnitude.
//!
//! How to run
//! ```bash
//! cargo run --example cancellation
//! ```

use floatscope::cancellation::{digits_lost, naive_diff, stable_diff, sweep};
use floatscope::report;

fn main() {
    let xs: Vec<f64> = (0..=8).map(|k| 10f64.powi(k)).collect();
    let samples = sweep(&xs);
    print!("{}", report::render_cancellation(&samples));

    // Past ~1e8 the naive form collapses entirely to 0.
    let x = 1e9;
    println!(
        "\nat x = 1e9: naive = {:e}, stable = {:e}, digits lost = {:.1}",
        naive_diff(x),
        stable_diff(x),
        digits_lost(naive_diff(x), stable_diff(x))
    );
}
