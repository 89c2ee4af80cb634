// File: crates/linechart-core/src/chart.rs
// Summary: Per-frame orchestration and the headless PNG rendering entry point.

use std::rc::Rc;

use skia_safe as skia;
use thiserror::Error;
use tracing::debug;

use crate::adapter::{DataAdapter, RedrawRequest, SubscriptionId};
use crate::axis;
use crate::path_pool::PathPool;
use crate::series;
use crate::style::ChartStyle;
use crate::text_cache::TextWidthCache;
use crate::window::visible_window;

/// Number of label widths kept cached; about one viewport's worth.
const TEXT_CACHE_CAPACITY: usize = 6;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to create raster surface")]
    SurfaceCreation,
    #[error("PNG encoding failed")]
    Encode,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// The scrollable chart renderer. Owns its caches and path pool for its whole
/// lifetime; holds a non-owning handle to the externally supplied adapter.
///
/// Single-threaded and frame-synchronous: each frame runs to completion
/// inside one `draw` call on the rendering thread.
pub struct ChartView {
    pub style: ChartStyle,
    adapter: Option<Rc<dyn DataAdapter>>,
    subscription: Option<SubscriptionId>,
    redraw: RedrawRequest,
    scroll_offset: f32,
    pool: PathPool,
    text_widths: TextWidthCache,
    cached_text_size: f32,
}

impl ChartView {
    pub fn new() -> Self {
        let style = ChartStyle::default();
        let cached_text_size = style.text_size;
        Self {
            style,
            adapter: None,
            subscription: None,
            redraw: RedrawRequest::new(),
            scroll_offset: 0.0,
            pool: PathPool::new(),
            text_widths: TextWidthCache::new(TEXT_CACHE_CAPACITY),
            cached_text_size,
        }
    }

    /// Swap the data source. The previous adapter's observer is removed
    /// before the new one is registered, and a redraw is requested so the
    /// new data shows on the next frame.
    pub fn set_adapter(&mut self, adapter: Option<Rc<dyn DataAdapter>>) {
        if let (Some(old), Some(sub)) = (self.adapter.as_ref(), self.subscription.take()) {
            old.unsubscribe(sub);
        }
        self.subscription = adapter.as_ref().map(|a| a.subscribe(self.redraw.clone()));
        self.adapter = adapter;
        self.redraw.raise();
        debug!(subscribed = self.subscription.is_some(), "adapter replaced");
    }

    /// Set the scroll offset in pixels. Offsets past the content degrade to
    /// an empty visible window; nothing clamps against content length here.
    pub fn set_scroll_offset(&mut self, offset: f32) {
        self.scroll_offset = offset.max(0.0);
        self.redraw.raise();
    }

    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    /// True when a change notification or state mutation wants a new frame.
    /// Rapid notifications collapse into one request.
    pub fn take_redraw_request(&mut self) -> bool {
        self.redraw.take()
    }

    /// Render one frame onto `canvas`. Runs synchronously to completion; the
    /// host calls this from its render loop, never concurrently.
    pub fn draw(&mut self, canvas: &skia::Canvas, width: f32, height: f32) {
        canvas.save();
        self.pool.reset_for_new_frame();
        if self.style.text_size != self.cached_text_size {
            self.text_widths.invalidate_all();
            self.cached_text_size = self.style.text_size;
            debug!(text_size = self.style.text_size, "text size changed; width cache dropped");
        }

        axis::draw_axes(canvas, &self.style, width, height);

        // Absent adapter or no data: axes only, nothing windowed this frame.
        if let Some(data) = self.adapter.as_ref().and_then(|a| a.snapshot()) {
            let item_spacing = self.style.item_spacing(width);
            let item_count = data.iter().map(Vec::len).max().unwrap_or(0);
            let window = visible_window(item_spacing, width, self.scroll_offset, item_count);
            canvas.translate((window.canvas_offset(self.scroll_offset, item_spacing), 0.0));

            axis::draw_gridlines(canvas, &mut self.pool, &self.style, window, item_spacing, height);

            let mut font = skia::Font::default();
            font.set_size(self.style.text_size);
            let y_center = self.style.y_center(height);
            for points in &data {
                series::draw_series(
                    canvas,
                    &mut self.pool,
                    &mut self.text_widths,
                    &font,
                    &self.style,
                    window,
                    item_spacing,
                    y_center,
                    points,
                );
            }
        }

        canvas.restore();
    }

    /// Headless render to a PNG file using a CPU raster surface. This is the
    /// test and demo entry point; an on-screen host calls `draw` with its
    /// own canvas instead.
    pub fn render_to_png(
        &mut self,
        width: i32,
        height: i32,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<(), RenderError> {
        let mut surface = skia::surfaces::raster_n32_premul((width, height))
            .ok_or(RenderError::SurfaceCreation)?;
        let canvas = surface.canvas();
        canvas.clear(skia::Color::WHITE);
        self.draw(canvas, width as f32, height as f32);

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(RenderError::Encode)?;

        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, data.as_bytes())?;
        Ok(())
    }
}

impl Default for ChartView {
    fn default() -> Self {
        Self::new()
    }
}
