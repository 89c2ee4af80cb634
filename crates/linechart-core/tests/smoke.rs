// File: crates/linechart-core/tests/smoke.rs
// Purpose: End-to-end windowed rendering: scenario geometry, PNG output,
// and adapter observer wiring.

use std::rc::Rc;

use linechart_core::series::y_position;
use linechart_core::window::visible_window;
use linechart_core::{ChartView, SeriesPoint, VecAdapter};

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}

#[test]
fn short_series_scenario_geometry() {
    // Series [(-5, "-5"), (10, "10"), (0, "0")], spacing 60, viewport 200.
    let window = visible_window(60.0, 200.0, 0.0, 3);
    assert_eq!((window.start, window.end), (0, 3));

    let xs: Vec<f32> = (0..3).map(|i| window.local_x(i, 60.0)).collect();
    assert_eq!(xs, vec![30.0, 90.0, 150.0]);

    let y_center = 240.0;
    assert!(approx(y_position(-5.0, 100.0, y_center), y_center + 0.05 * y_center));
    assert!(approx(y_position(10.0, 100.0, y_center), y_center - 0.10 * y_center));
    assert_eq!(y_position(0.0, 100.0, y_center), y_center);
}

#[test]
fn render_scrolled_frames_to_png() {
    let adapter = Rc::new(VecAdapter::with_data(vec![vec![
        SeriesPoint::new(-5.0, "-5"),
        SeriesPoint::new(10.0, "10"),
        SeriesPoint::new(0.0, "0"),
    ]]));
    let mut chart = ChartView::new();
    chart.set_adapter(Some(adapter.clone()));
    assert!(chart.take_redraw_request());

    let out = std::path::PathBuf::from("target/test_out/scrolled.png");
    chart.render_to_png(400, 300, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // A large offset degrades to an empty window; axes still render.
    chart.set_scroll_offset(10_000.0);
    chart
        .render_to_png(400, 300, "target/test_out/scrolled_far.png")
        .expect("empty window still renders axes");
}

#[test]
fn absent_adapter_still_renders_axes() {
    let mut chart = ChartView::new();
    chart
        .render_to_png(200, 200, "target/test_out/axes_only.png")
        .expect("no adapter is not an error");
}

#[test]
fn adapter_notifications_collapse_into_one_redraw() {
    let adapter = Rc::new(VecAdapter::new());
    let mut chart = ChartView::new();
    chart.set_adapter(Some(adapter.clone()));
    chart.take_redraw_request();

    adapter.push_series(vec![SeriesPoint::new(1.0, "1")]);
    adapter.push_series(vec![SeriesPoint::new(2.0, "2")]);
    assert!(chart.take_redraw_request());
    assert!(
        !chart.take_redraw_request(),
        "rapid changes schedule a single redraw"
    );
}

#[test]
fn replacing_the_adapter_unsubscribes_the_old_one() {
    let first = Rc::new(VecAdapter::new());
    let second = Rc::new(VecAdapter::new());
    let mut chart = ChartView::new();
    chart.set_adapter(Some(first.clone()));
    chart.set_adapter(Some(second.clone()));
    chart.take_redraw_request();

    first.push_series(vec![SeriesPoint::new(1.0, "1")]);
    assert!(
        !chart.take_redraw_request(),
        "a stale adapter must not reach the view"
    );

    second.push_series(vec![SeriesPoint::new(2.0, "2")]);
    assert!(chart.take_redraw_request());
}

#[test]
fn changing_text_size_invalidates_cached_widths() {
    let adapter = Rc::new(VecAdapter::with_data(vec![vec![
        SeriesPoint::new(5.0, "5"),
        SeriesPoint::new(-5.0, "-5"),
    ]]));
    let mut chart = ChartView::new();
    chart.set_adapter(Some(adapter));

    chart
        .render_to_png(300, 200, "target/test_out/text_a.png")
        .expect("first frame");
    chart.style.text_size = 20.0;
    // Must not reuse widths measured at the old size.
    chart
        .render_to_png(300, 200, "target/test_out/text_b.png")
        .expect("second frame after text size change");
}
