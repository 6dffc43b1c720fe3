//! FloatScope binary: runs all four demonstrations in sequence.
//!
//! Usage:
//! ```bash
//! floatscope [--plot] [--export <path.csv|path.json>]
//! ```
//! `--plot` opens the log-log error plot window after printing the reports;
//! `--export` writes the finite-difference sweep to the given path.

use floatscope::cancellation;
use floatscope::config::ErrorPlotConfig;
use floatscope::export::save_sweep;
use floatscope::finite_diff::{error_sweep, log_spaced_steps};
use floatscope::plot::run_error_plot;
use floatscope::quadratic::Quadratic;
use floatscope::report;
use floatscope::sink::{channel_plot, PlotPoint};

const USAGE: &str = "usage: floatscope [--plot] [--export <path.csv|path.json>]";

struct Args {
    show_plot: bool,
    export_path: Option<String>,
    /// `--export` was given without a path following it.
    export_missing_path: bool,
}

fn parse_args(args: &[String]) -> Args {
    let export_flag = args.iter().position(|a| a == "--export");
    let export_path = export_flag.and_then(|i| args.get(i + 1)).cloned();
    Args {
        show_plot: args.iter().any(|a| a == "--plot"),
        export_missing_path: export_flag.is_some() && export_path.is_none(),
        export_path,
    }
}

fn main() -> eframe::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let Args {
        show_plot,
        export_path,
        export_missing_path,
    } = parse_args(&args);
    if export_missing_path {
        eprintln!("--export requires a path\n{USAGE}");
    }

    println!(
        "FloatScope — floating-point pitfalls, {}\n",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );

    // 1. Equality
    println!("{}", report::render_equality());

    // 2. Catastrophic cancellation
    let xs = [1.0, 1e2, 1e4, 1e6, 1e7, 1e8];
    let cancel = cancellation::sweep(&xs);
    println!("{}", report::render_cancellation(&cancel));

    // 3. Quadratic roots
    let q = Quadratic::new(1.0, 1e8, 1.0);
    println!("{}", report::render_quadratic(&q));

    // 4. Finite-difference error sweep on f(x) = sin(x) at x = 1
    let steps = log_spaced_steps(-16, 0, 4);
    let sweep = error_sweep(|x| x.sin(), |x| x.cos(), 1.0, &steps);
    println!("{}", report::render_sweep(&sweep));

    if let Some(path) = export_path {
        match save_sweep(&path, &sweep) {
            Ok(()) => println!("wrote sweep to {path}"),
            Err(e) => eprintln!("failed to write {path}: {e}"),
        }
    }

    if show_plot {
        let (sink, rx) = channel_plot();
        let fwd = sink.create_trace("forward");
        let cen = sink.create_trace("central");
        let fwd_pts: Vec<PlotPoint> = sweep
            .iter()
            .map(|s| PlotPoint {
                x: s.h,
                y: s.forward_err,
            })
            .collect();
        let cen_pts: Vec<PlotPoint> = sweep
            .iter()
            .map(|s| PlotPoint {
                x: s.h,
                y: s.central_err,
            })
            .collect();
        let _ = sink.set_data(&fwd, fwd_pts);
        let _ = sink.set_data(&cen, cen_pts);

        let mut cfg = ErrorPlotConfig::default();
        cfg.title = "FloatScope — derivative error".to_string();
        cfg.headline = Some("Finite-difference error vs step size, f(x) = sin(x) at x = 1".to_string());
        return run_error_plot(rx, cfg);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strs(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn export_takes_the_following_argument() {
        let args = parse_args(&strs(&["--plot", "--export", "out.csv"]));
        assert!(args.show_plot);
        assert_eq!(args.export_path.as_deref(), Some("out.csv"));
        assert!(!args.export_missing_path);
    }

    #[test]
    fn trailing_export_flag_is_flagged() {
        let args = parse_args(&strs(&["--export"]));
        assert!(args.export_path.is_none());
        assert!(args.export_missing_path, "a path-less --export should be diagnosed");
    }

    #[test]
    fn no_flags_means_report_only() {
        let args = parse_args(&[]);
        assert!(!args.show_plot);
        assert!(args.export_path.is_none());
        assert!(!args.export_missing_path);
    }
}
