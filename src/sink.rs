//! Channel plumbing for feeding precomputed samples into the plot window.
//!
//! The demo programs compute their data on the main thread before the UI
//! starts, so the usual flow is: create a trace, `set_data` the whole sweep
//! at once, then hand the receiver to [`crate::plot::run_error_plot`].

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::mpsc::{Receiver, Sender};

/// Numeric identifier for a trace, assigned when the trace is created.
pub type TraceId = u32;

/// A single point: for the error plot, x is the step size and y the error.
#[derive(Debug, Clone, Copy)]
pub struct PlotPoint {
    pub x: f64,
    pub y: f64,
}

/// Handle to a registered trace.
#[derive(Debug, Clone)]
pub struct Trace {
    pub id: TraceId,
    pub name: String,
}

/// Messages understood by the plot window.
pub enum PlotCommand {
    /// Register a new trace under the given name.
    RegisterTrace { id: TraceId, name: String },
    /// Append a chunk of points to the trace.
    Points {
        trace_id: TraceId,
        points: Vec<PlotPoint>,
    },
    /// Replace the trace's data wholesale.
    SetData {
        trace_id: TraceId,
        points: Vec<PlotPoint>,
    },
    /// Drop all points of the trace.
    ClearData { trace_id: TraceId },
}

/// Sending side of the plot channel.
#[derive(Clone)]
pub struct PlotSink {
    tx: Sender<PlotCommand>,
}

impl PlotSink {
    /// Create and register a new trace with a unique numeric ID.
    pub fn create_trace<S: Into<String>>(&self, name: S) -> Trace {
        static NEXT_ID: AtomicU32 = AtomicU32::new(1);
        let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
        let name = name.into();
        let _ = self.tx.send(PlotCommand::RegisterTrace {
            id,
            name: name.clone(),
        });
        Trace { id, name }
    }

    /// Append a chunk of points to a trace.
    pub fn send_points<I>(
        &self,
        trace: &Trace,
        points: I,
    ) -> Result<(), std::sync::mpsc::SendError<PlotCommand>>
    where
        I: Into<Vec<PlotPoint>>,
    {
        self.tx.send(PlotCommand::Points {
            trace_id: trace.id,
            points: points.into(),
        })
    }

    /// Replace a trace's data wholesale, discarding existing points.
    pub fn set_data<I>(
        &self,
        trace: &Trace,
        points: I,
    ) -> Result<(), std::sync::mpsc::SendError<PlotCommand>>
    where
        I: Into<Vec<PlotPoint>>,
    {
        self.tx.send(PlotCommand::SetData {
            trace_id: trace.id,
            points: points.into(),
        })
    }

    /// Remove all points for a trace.
    pub fn clear_data(&self, trace: &Trace) -> Result<(), std::sync::mpsc::SendError<PlotCommand>> {
        self.tx.send(PlotCommand::ClearData { trace_id: trace.id })
    }
}

/// Create the channel pair: `(PlotSink, Receiver<PlotCommand>)`.
pub fn channel_plot() -> (PlotSink, Receiver<PlotCommand>) {
    let (tx, rx) = std::sync::mpsc::channel();
    (PlotSink { tx }, rx)
}
