//! Demo: Quadratic-formula instability
//!
//! What it demonstrates
//! - The textbook quadratic formula destroying the small root of
//!   `x^2 + 1e8 x + 1 = 0` through cancellation.
//! - The stable variant recovering it via `q = -(b + sign(b) sqrt(disc)) / 2`
//!   and `x2 = c / q`, verified by the residual at each computed root.
//!
//! How to run
//! ```bash
//! cargo run --example quadratic_roots
//! ```

use floatscope::quadratic::Quadratic;
use floatscope::report;

fn main() {
    for b in [1e4, 1e6, 1e8] {
        let q = Quadratic::new(1.0, b, 1.0);
        print!("{}", report::render_quadratic(&q));
        println!();
    }

    // Degenerate inputs take the linear/constant paths instead of dividing by 0.
    print!("{}", report::render_quadratic(&Quadratic::new(0.0, 2.0, -4.0)));
    print!("{}", report::render_quadratic(&Quadratic::new(1.0, 0.0, 1.0)));
}
