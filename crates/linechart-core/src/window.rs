// File: crates/linechart-core/src/window.rs
// Summary: Scroll windowing math: visible index range and local x projection.

/// Half-open range of item indices visible in the viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Window {
    /// First visible index (inclusive).
    pub start: usize,
    /// One past the last visible index.
    pub end: usize,
}

impl Window {
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// X coordinate of item `index` in the translated frame: items sit at
    /// the center of their slot, rebased on the window start.
    pub fn local_x(&self, index: usize, item_spacing: f32) -> f32 {
        item_spacing / 2.0 + (index - self.start) as f32 * item_spacing
    }

    /// Translation applied to the canvas before drawing windowed content:
    /// the fraction of a slot the viewport has scrolled past `start`. This
    /// keeps `local_x` positions consistent with the untranslated axes.
    pub fn canvas_offset(&self, scroll_offset: f32, item_spacing: f32) -> f32 {
        -(scroll_offset - self.start as f32 * item_spacing)
    }
}

/// Compute the visible window. The start index is the slot under the left
/// viewport edge; one extra slot of slack keeps a partially visible trailing
/// item on screen. Out-of-range scroll offsets clamp to an empty window.
///
/// Precondition: `item_spacing > 0` (validated by the configuration surface).
pub fn visible_window(
    item_spacing: f32,
    viewport_width: f32,
    scroll_offset: f32,
    item_count: usize,
) -> Window {
    let start = ((scroll_offset / item_spacing).floor() as usize).min(item_count);
    let visible = (viewport_width / item_spacing).ceil() as usize + 1;
    let end = (start + visible).min(item_count);
    Window { start, end }
}
