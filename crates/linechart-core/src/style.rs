// File: crates/linechart-core/src/style.rs
// Summary: Flat style options with defaults; each field takes effect on the next frame.

use skia_safe as skia;

/// All drawing options as one plain value struct. Mutating a field takes
/// effect on the next frame; there are no recomputation side effects.
///
/// Preconditions enforced by the caller and not re-checked here:
/// `x_mark_count > 0` (it divides the canvas width into item slots).
#[derive(Clone, Debug)]
pub struct ChartStyle {
    /// X/Y axis stroke color.
    pub line_color: skia::Color,
    /// X/Y axis stroke width.
    pub line_width: f32,
    /// Series polyline color.
    pub chart_line_color: skia::Color,
    /// Series polyline width.
    pub chart_line_width: f32,
    /// Point marker fill color.
    pub dot_color: skia::Color,
    /// Point marker radius.
    pub dot_width: f32,
    /// Gridline color.
    pub dash_line_color: skia::Color,
    /// Gridline stroke width.
    pub dash_line_width: f32,
    /// On/off lengths of the gridline dash pattern.
    pub dash_intervals: [f32; 2],
    /// Number of item slots across the viewport width.
    pub x_mark_count: u32,
    /// Value mapped to the top of the canvas; the normalization denominator.
    pub y_line_max: f64,
    pub text_size: f32,
    pub text_color: skia::Color,
    /// Gap between a label and its marker.
    pub text_space: f32,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            line_color: skia::Color::BLUE,
            line_width: 5.0,
            chart_line_color: skia::Color::RED,
            chart_line_width: 3.0,
            dot_color: skia::Color::BLACK,
            dot_width: 15.0,
            dash_line_color: skia::Color::GRAY,
            dash_line_width: 2.0,
            dash_intervals: [10.0, 10.0],
            x_mark_count: 5,
            y_line_max: 100.0,
            text_size: 40.0,
            text_color: skia::Color::BLACK,
            text_space: 10.0,
        }
    }
}

impl ChartStyle {
    /// Vertical pixel of value zero: the X axis sits at the vertical center,
    /// pulled up by its own stroke width.
    pub fn y_center(&self, height: f32) -> f32 {
        (height - self.line_width) / 2.0
    }

    /// Horizontal distance between adjacent items.
    pub fn item_spacing(&self, width: f32) -> f32 {
        width / self.x_mark_count as f32
    }
}
