//! Fonts, text measurement and paragraph wrapping

mod font;
mod metrics;
mod wrap;

pub use font::*;
pub(crate) use metrics::glyph_run;
pub use metrics::{TextSize, measure};
pub use wrap::*;
