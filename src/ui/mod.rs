//! UI modules for the catalog viewer.
//!
//! The UI is split into distinct panels:
//! - Top bar: Title and load status
//! - Controls: Search box, sort direction and facet filters
//! - Central results: Card grid or a notice

mod colors;
mod controls;
mod loading;
mod results;
mod top_bar;

pub use controls::render_controls;
pub use loading::LoadingIndicator;
pub use results::render_results;
pub use top_bar::render_top_bar;
