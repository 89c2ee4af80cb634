// File: crates/linechart-core/src/series.rs
// Summary: Series data model plus the windowed polyline/marker/label pass.

use skia_safe as skia;

use crate::path_pool::PathPool;
use crate::style::ChartStyle;
use crate::text_cache::TextWidthCache;
use crate::window::Window;

/// One data point: a signed value and the label drawn next to its marker.
#[derive(Clone, Debug, PartialEq)]
pub struct SeriesPoint {
    pub value: f64,
    pub label: String,
}

impl SeriesPoint {
    pub fn new(value: f64, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
        }
    }
}

/// Map a value to its vertical pixel. Zero lands on the axis (`y_center`),
/// `+y_max` on the top edge, `-y_max` mirrored below it; out-of-range values
/// overshoot the viewport rather than clamp.
pub fn y_position(value: f64, y_max: f64, y_center: f32) -> f32 {
    let scale = value / y_max;
    y_center - y_center * scale as f32
}

/// Baseline for a point label. Positive values sit above the marker, zero
/// and negative below. `offset` folds the font's built-in leading back out so
/// the visual gap to the marker equals `text_space` on both sides.
pub fn label_baseline(
    value: f64,
    y: f32,
    dot_width: f32,
    text_space: f32,
    metrics: &skia::FontMetrics,
) -> f32 {
    // ascent and top are negative in Skia's convention.
    let offset = metrics.ascent + (metrics.ascent - metrics.top);
    if value > 0.0 {
        y - dot_width - metrics.descent - text_space
    } else {
        y + dot_width - offset + text_space
    }
}

/// Draw one series over the visible window: a single connected polyline, one
/// compound path of circular markers, and a label per point. A series shorter
/// than the window simply stops early.
pub fn draw_series(
    canvas: &skia::Canvas,
    pool: &mut PathPool,
    text_widths: &mut TextWidthCache,
    font: &skia::Font,
    style: &ChartStyle,
    window: Window,
    item_spacing: f32,
    y_center: f32,
    points: &[SeriesPoint],
) {
    let line = pool.acquire();
    let dots = pool.acquire();

    let metrics = font.metrics().1;
    let mut text_paint = skia::Paint::default();
    text_paint.set_anti_alias(true);
    text_paint.set_style(skia::paint::Style::Fill);
    text_paint.set_color(style.text_color);

    for index in window.start..window.end {
        // Series lengths are not uniform; stop at this series' own end.
        let Some(point) = points.get(index) else {
            break;
        };
        let x = window.local_x(index, item_spacing);
        let y = y_position(point.value, style.y_line_max, y_center);

        if index == window.start {
            pool.get_mut(line).move_to((x, y));
        } else {
            pool.get_mut(line).line_to((x, y));
        }
        pool.get_mut(dots)
            .add_circle((x, y), style.dot_width, skia::PathDirection::CW);

        let width = text_widths.width_of(&point.label, |label| {
            font.measure_str(label, Some(&text_paint)).0
        });
        let baseline = label_baseline(point.value, y, style.dot_width, style.text_space, &metrics);
        canvas.draw_str(&point.label, (x - width / 2.0, baseline), font, &text_paint);
    }

    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_color(style.chart_line_color);
    stroke.set_stroke_width(style.chart_line_width);
    canvas.draw_path(pool.get(line), &stroke);

    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_style(skia::paint::Style::Fill);
    fill.set_color(style.dot_color);
    canvas.draw_path(pool.get(dots), &fill);
}
