// File: crates/demo/src/main.rs
// Summary: Demo builds a data adapter with two series and renders several
// frames at increasing scroll offsets to PNGs.

use std::path::PathBuf;
use std::rc::Rc;

use anyhow::Result;
use linechart_core::{ChartView, SeriesPoint, VecAdapter};
use tracing::info;

fn sample_series() -> Vec<Vec<SeriesPoint>> {
    let values = [
        12.0, -35.0, 60.0, 5.0, -80.0, 95.0, 0.0, 42.0, -15.0, 70.0, 30.0, -55.0,
    ];
    let primary: Vec<SeriesPoint> = values
        .iter()
        .map(|&v| SeriesPoint::new(v, format!("{v:.0}")))
        .collect();
    // A shorter second series; it stops extending before the first one ends.
    let secondary: Vec<SeriesPoint> = values
        .iter()
        .take(8)
        .map(|&v| SeriesPoint::new(v / 2.0, format!("{:.0}", v / 2.0)))
        .collect();
    vec![primary, secondary]
}

fn main() -> Result<()> {
    tracing_subscriber::fmt().init();

    let adapter = Rc::new(VecAdapter::with_data(sample_series()));
    let mut chart = ChartView::new();
    chart.set_adapter(Some(adapter.clone()));

    let out_dir = PathBuf::from("target/out");
    for (frame, offset) in [0.0f32, 150.0, 400.0, 900.0].into_iter().enumerate() {
        chart.set_scroll_offset(offset);
        if chart.take_redraw_request() {
            let out = out_dir.join(format!("frame_{frame}.png"));
            chart.render_to_png(800, 480, &out)?;
            info!(offset, path = %out.display(), "wrote frame");
        }
    }

    // Mutating the adapter schedules exactly one more frame.
    adapter.push_series(vec![
        SeriesPoint::new(25.0, "25"),
        SeriesPoint::new(-25.0, "-25"),
    ]);
    if chart.take_redraw_request() {
        chart.set_scroll_offset(0.0);
        let out = out_dir.join("frame_final.png");
        chart.render_to_png(800, 480, &out)?;
        info!(path = %out.display(), "wrote frame after data change");
    }
    Ok(())
}
