// File: crates/linechart-core/src/lib.rs
// Summary: Core library entry point; exports the scrollable chart view API.

pub mod adapter;
pub mod axis;
pub mod chart;
pub mod path_pool;
pub mod series;
pub mod style;
pub mod text_cache;
pub mod window;

pub use adapter::{DataAdapter, RedrawRequest, SubscriptionId, VecAdapter};
pub use chart::{ChartView, RenderError};
pub use path_pool::{PathId, PathPool};
pub use series::SeriesPoint;
pub use style::ChartStyle;
pub use text_cache::TextWidthCache;
pub use window::{visible_window, Window};
