//! Configuration for the error plot window.

/// Top-level configuration for [`crate::plot::run_error_plot`].
///
/// Defaults are tuned for the finite-difference error sweep: both axes in
/// log10 scale, legend on.
#[derive(Clone)]
pub struct ErrorPlotConfig {
    /// Native window title.
    pub title: String,
    /// Optional headline rendered inside the UI above the plot.
    pub headline: Option<String>,
    /// X axis label.
    pub x_label: String,
    /// Y axis label.
    pub y_label: String,
    /// Show the X axis in log10 scale.
    pub x_log: bool,
    /// Show the Y axis in log10 scale.
    pub y_log: bool,
    /// Show the plot legend.
    pub legend: bool,
    /// Optional eframe native-window options.
    pub native_options: Option<eframe::NativeOptions>,
}

impl Default for ErrorPlotConfig {
    fn default() -> Self {
        Self {
            title: "FloatScope".to_string(),
            headline: None,
            x_label: "step size h".to_string(),
            y_label: "absolute error".to_string(),
            x_log: true,
            y_log: true,
            legend: true,
            native_options: None,
        }
    }
}
