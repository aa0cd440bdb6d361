//! Pixel rendering for posters
//!
//! - Drawing primitives (text, rules, wrapped blocks)
//! - Layer composition onto the page canvas
//! - Export to PDF or raster files

mod canvas;
mod compose;
mod export;

pub use canvas::{blank_canvas, draw_hrule, draw_text, draw_wrapped_block};
pub use compose::*;
pub use export::*;
