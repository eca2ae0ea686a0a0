//! UI modules for the world map.
//!
//! The UI is split into distinct panels:
//! - Top bar: Title and load status
//! - Left panel: Month, category and passport selectors
//! - Central canvas: The map, tooltip and zoom controls
//! - Right panel: Legend for the active category

mod canvas;
pub mod colors;
mod left_panel;
mod right_panel;
mod top_bar;

pub use canvas::{render_canvas, MapScene};
pub use left_panel::render_left_panel;
pub use right_panel::render_right_panel;
pub use top_bar::render_top_bar;
