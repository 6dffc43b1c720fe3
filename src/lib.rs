//! FloatScope crate root: re-exports and module wiring.
//!
//! Four demonstrations of floating-point arithmetic pitfalls, each a small
//! library module with a matching demo program:
//! - `compare`: equality, tolerances, ULP distance, machine epsilon
//! - `cancellation`: catastrophic cancellation vs the conjugate identity
//! - `quadratic`: textbook vs numerically stable quadratic formula
//! - `finite_diff`: truncation vs round-off error in difference quotients
//!
//! Supporting modules:
//! - `sink`: channel types to feed samples into the plot window
//! - `plot` / `config` / `trace_look`: the egui_plot-based log-log error plot
//! - `report`: plain-text rendering of the demonstration results
//! - `export`: CSV/JSON writers for sweep data

pub mod cancellation;
pub mod compare;
pub mod config;
pub mod export;
pub mod finite_diff;
pub mod plot;
pub mod quadratic;
pub mod report;
pub mod sink;
pub mod trace_look;

// Public re-exports for a compact external API
pub use config::ErrorPlotConfig;
pub use plot::{run_error_plot, ErrorPlotApp};
pub use sink::{channel_plot, PlotPoint, PlotSink, Trace, TraceId};
