// File: crates/linechart-core/src/axis.rs
// Summary: Fixed X/Y axis lines and per-item dashed gridlines.

use skia_safe as skia;

use crate::path_pool::PathPool;
use crate::style::ChartStyle;
use crate::window::Window;

/// Draw the X and Y axes in the untranslated frame. The X axis is the
/// value-zero line at the vertical center; the Y axis hugs the left edge.
pub fn draw_axes(canvas: &skia::Canvas, style: &ChartStyle, width: f32, height: f32) {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_color(style.line_color);
    paint.set_stroke_width(style.line_width);

    let y_center = style.y_center(height);
    canvas.draw_line((0.0, y_center), (width, y_center), &paint);

    let x = style.line_width / 2.0;
    canvas.draw_line((x, 0.0), (x, height), &paint);
}

/// Draw one dashed vertical line per visible item boundary, in the translated
/// frame. Every boundary goes into a single pooled multi-segment path so the
/// dash effect is stroked once per frame.
pub fn draw_gridlines(
    canvas: &skia::Canvas,
    pool: &mut PathPool,
    style: &ChartStyle,
    window: Window,
    item_spacing: f32,
    height: f32,
) {
    let id = pool.acquire();
    let path = pool.get_mut(id);
    for index in window.start..window.end {
        let x = (index - window.start) as f32 * item_spacing;
        path.move_to((x, 0.0));
        path.line_to((x, height));
    }

    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_color(style.dash_line_color);
    paint.set_stroke_width(style.dash_line_width);
    paint.set_path_effect(skia::PathEffect::dash(&style.dash_intervals, 1.0));
    canvas.draw_path(pool.get(id), &paint);
}
