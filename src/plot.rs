//! The error plot window: an eframe app fed through the plot channel.
//!
//! egui_plot has no native log axes, so a log axis is realized by plotting
//! `log10` of the coordinate and formatting the axis marks back as `1e{k}`.
//! Points that are zero or negative on a log axis carry no information for
//! this plot and are skipped.

use std::collections::HashMap;
use std::sync::mpsc::Receiver;
use std::time::Duration;

use egui_plot::{Legend, Line, Plot, PlotPoints, Points};

use crate::config::ErrorPlotConfig;
use crate::sink::{PlotCommand, PlotPoint, TraceId};
use crate::trace_look::TraceLook;

struct TraceState {
    name: String,
    look: TraceLook,
    points: Vec<PlotPoint>,
}

/// eframe app rendering all registered traces into a single plot.
pub struct ErrorPlotApp {
    rx: Receiver<PlotCommand>,
    traces: HashMap<TraceId, TraceState>,
    order: Vec<TraceId>,
    cfg: ErrorPlotConfig,
    reset_view: bool,
}

impl ErrorPlotApp {
    pub fn new(rx: Receiver<PlotCommand>, cfg: ErrorPlotConfig) -> Self {
        Self {
            rx,
            traces: HashMap::new(),
            order: Vec::new(),
            cfg,
            reset_view: false,
        }
    }

    fn drain_commands(&mut self) {
        while let Ok(cmd) = self.rx.try_recv() {
            match cmd {
                PlotCommand::RegisterTrace { id, name } => {
                    self.traces.entry(id).or_insert_with(|| {
                        self.order.push(id);
                        TraceState {
                            name,
                            look: TraceLook::new(self.order.len() - 1),
                            points: Vec::new(),
                        }
                    });
                }
                PlotCommand::Points { trace_id, points } => {
                    if let Some(tr) = self.traces.get_mut(&trace_id) {
                        tr.points.extend(points);
                    }
                }
                PlotCommand::SetData { trace_id, points } => {
                    if let Some(tr) = self.traces.get_mut(&trace_id) {
                        tr.points = points;
                    }
                }
                PlotCommand::ClearData { trace_id } => {
                    if let Some(tr) = self.traces.get_mut(&trace_id) {
                        tr.points.clear();
                    }
                }
            }
        }
    }
}

/// Map raw points onto plot coordinates, applying log10 per axis and skipping
/// points that have no log-scale image.
pub fn display_points(points: &[PlotPoint], x_log: bool, y_log: bool) -> Vec<[f64; 2]> {
    points
        .iter()
        .filter_map(|p| {
            let x = if x_log {
                if p.x > 0.0 {
                    p.x.log10()
                } else {
                    return None;
                }
            } else {
                p.x
            };
            let y = if y_log {
                if p.y > 0.0 {
                    p.y.log10()
                } else {
                    return None;
                }
            } else {
                p.y
            };
            if x.is_finite() && y.is_finite() {
                Some([x, y])
            } else {
                None
            }
        })
        .collect()
}

/// Axis label for a log10-scaled mark: `1e{k}` at whole decades, blank between.
pub fn log_tick_label(value: f64) -> String {
    let k = value.round();
    if (value - k).abs() < 0.05 {
        format!("1e{}", k as i64)
    } else {
        String::new()
    }
}

impl eframe::App for ErrorPlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_commands();

        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            if let Some(h) = &self.cfg.headline {
                ui.heading(h);
            }
            ui.horizontal(|ui| {
                if ui.button("Reset View").clicked() {
                    self.reset_view = true;
                }
                for id in &self.order {
                    if let Some(tr) = self.traces.get_mut(id) {
                        ui.checkbox(&mut tr.look.visible, tr.name.clone());
                    }
                }
            });
        });

        let (x_log, y_log) = (self.cfg.x_log, self.cfg.y_log);
        egui::CentralPanel::default().show(ctx, |ui| {
            let mut plot = Plot::new("error_plot")
                .allow_scroll(false)
                .allow_zoom(true)
                .allow_boxed_zoom(true)
                .x_axis_label(self.cfg.x_label.clone())
                .y_axis_label(self.cfg.y_label.clone());
            if self.cfg.legend {
                plot = plot.legend(Legend::default());
            }
            if x_log {
                plot = plot.x_axis_formatter(|m, _range| log_tick_label(m.value));
            }
            if y_log {
                plot = plot.y_axis_formatter(|m, _range| log_tick_label(m.value));
            }
            if self.reset_view {
                plot = plot.reset();
                self.reset_view = false;
            }
            plot.show(ui, |plot_ui| {
                for id in &self.order {
                    let Some(tr) = self.traces.get(id) else { continue };
                    if !tr.look.visible {
                        continue;
                    }
                    let pts = display_points(&tr.points, x_log, y_log);
                    let line_points: PlotPoints = pts.clone().into();
                    plot_ui.line(
                        Line::new(tr.name.clone(), line_points)
                            .color(tr.look.color)
                            .width(tr.look.width),
                    );
                    if tr.look.show_points {
                        plot_ui.points(
                            Points::new(tr.name.clone(), pts)
                                .color(tr.look.color)
                                .radius(tr.look.point_size),
                        );
                    }
                }
            });
        });

        // Keep draining the channel even when nothing animates.
        ctx.request_repaint_after(Duration::from_millis(100));
    }
}

/// Open the plot window and run it until closed.
pub fn run_error_plot(rx: Receiver<PlotCommand>, cfg: ErrorPlotConfig) -> eframe::Result<()> {
    let native_options = cfg.native_options.clone().unwrap_or_else(|| {
        let mut opts = eframe::NativeOptions::default();
        opts.viewport = egui::ViewportBuilder::default().with_inner_size([1000.0, 700.0]);
        opts
    });
    let title = cfg.title.clone();
    let app = ErrorPlotApp::new(rx, cfg);
    eframe::run_native(&title, native_options, Box::new(|_cc| Ok(Box::new(app))))
}
