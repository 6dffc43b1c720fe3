//! Demo: Floating-point equality and tolerant comparison
//!
//! What it demonstrates
//! - `0.1 + 0.2 != 0.3` under exact comparison, and how far apart they are in ULP.
//! - `approx_eq` with combined absolute/relative tolerance accepting the sum.
//! - Locating machine epsilon empirically by repeated halving.
//!
//! How to run
//! ```bash
//! cargo run --example equality
//! ```

use floatscope::compare::{approx_eq, ulp_distance, Tolerance};
use floatscope::report;

fn main() {
    print!("{}", report::render_equality());

    // A tolerance that is too tight still rejects the sum.
    let sum = 0.1 + 0.2;
    println!(
        "\napprox_eq with rel = eps/4: {}",
        approx_eq(sum, 0.3, Tolerance::rel(f64::EPSILON / 4.0))
    );

    // Accumulated error grows with the number of roundings.
    let mut tenth_sum = 0.0f64;
    for _ in 0..10 {
        tenth_sum += 0.1;
    }
    println!(
        "sum of ten 0.1s = {:.20}, ULP from 1.0: {}",
        tenth_sum,
        ulp_distance(tenth_sum, 1.0).unwrap_or(u64::MAX)
    );
}
