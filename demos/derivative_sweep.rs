//! Demo: Finite-difference error sweep with log-log plot
//!
//! What it demonstrates
//! - Sweeping the step size of forward and central difference quotients over
//!   sixteen decades and plotting absolute error against h on log-log axes.
//! - The V-shaped trade-off between truncation error (right side) and
//!   round-off error (left side), bottoming out near sqrt(eps) / cbrt(eps).
//!
//! How to run
//! ```bash
//! cargo run --example derivative_sweep
//! ```
//! A window opens showing both error curves; the terminal prints the table.

use floatscope::config::ErrorPlotConfig;
use floatscope::finite_diff::{error_sweep, log_spaced_steps};
use floatscope::plot::run_error_plot;
use floatscope::report;
use floatscope::sink::{channel_plot, PlotPoint};

fn main() -> eframe::Result<()> {
    // f(x) = exp(x) at x = 0.5: derivative equals the function value.
    let f = |x: f64| x.exp();
    let x0 = 0.5;
    let steps = log_spaced_steps(-16, 0, 8);
    let sweep = error_sweep(f, f, x0, &steps);
    print!("{}", report::render_sweep(&sweep));

    let (sink, rx) = channel_plot();
    let fwd = sink.create_trace("forward");
    let cen = sink.create_trace("central");
    let _ = sink.set_data(
        &fwd,
        sweep
            .iter()
            .map(|s| PlotPoint {
                x: s.h,
                y: s.forward_err,
            })
            .collect::<Vec<_>>(),
    );
    let _ = sink.set_data(
        &cen,
        sweep
            .iter()
            .map(|s| PlotPoint {
                x: s.h,
                y: s.central_err,
            })
            .collect::<Vec<_>>(),
    );

    let mut cfg = ErrorPlotConfig::default();
    cfg.title = "Derivative error sweep".to_string();
    cfg.headline = Some("Finite-difference error vs step size, f(x) = exp(x) at x = 0.5".to_string());
    run_error_plot(rx, cfg)
}
