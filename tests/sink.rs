use floatscope::sink::{channel_plot, PlotCommand, PlotPoint};

#[test]
fn create_trace_registers_and_assigns_distinct_ids() {
    let (sink, rx) = channel_plot();
    let a = sink.create_trace("forward");
    let b = sink.create_trace("central");
    assert_ne!(a.id, b.id);

    match rx.try_recv().unwrap() {
        PlotCommand::RegisterTrace { id, name } => {
            assert_eq!(id, a.id);
            assert_eq!(name, "forward");
        }
        _ => panic!("expected RegisterTrace first"),
    }
    match rx.try_recv().unwrap() {
        PlotCommand::RegisterTrace { id, name } => {
            assert_eq!(id, b.id);
            assert_eq!(name, "central");
        }
        _ => panic!("expected second RegisterTrace"),
    }
}

#[test]
fn set_data_carries_the_points() {
    let (sink, rx) = channel_plot();
    let tr = sink.create_trace("errors");
    let _ = rx.try_recv(); // discard registration
    sink.set_data(&tr, vec![PlotPoint { x: 1e-8, y: 1e-9 }])
        .unwrap();
    match rx.try_recv().unwrap() {
        PlotCommand::SetData { trace_id, points } => {
            assert_eq!(trace_id, tr.id);
            assert_eq!(points.len(), 1);
            assert_eq!(points[0].x, 1e-8);
        }
        _ => panic!("expected SetData"),
    }
}

#[test]
fn send_after_receiver_drop_reports_error() {
    let (sink, rx) = channel_plot();
    let tr = sink.create_trace("errors");
    drop(rx);
    assert!(sink.send_points(&tr, vec![PlotPoint { x: 1.0, y: 1.0 }]).is_err());
}
