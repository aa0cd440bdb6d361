//! Text measurement
//!
//! Measuring and drawing share [`glyph_run`], so a string measured before it
//! is drawn covers exactly the measured area.

use super::PosterFont;
use rusttype::{PositionedGlyph, point};

/// Rendered extent of a string in whole pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextSize {
    /// Sum of glyph advances including kerning, rounded up
    pub width: u32,
    /// Lowest inked pixel below the top of the ascent line
    pub height: u32,
}

/// Lay out `text` with the top of its ascent line at (`x`, `y`).
pub(crate) fn glyph_run(
    font: &PosterFont,
    text: &str,
    x: f32,
    y: f32,
) -> Vec<PositionedGlyph<'static>> {
    let face = font.face();
    let scale = font.scale();
    let ascent = face.v_metrics(scale).ascent;
    face.layout(text, scale, point(x, y + ascent)).collect()
}

/// Measure `text` in `font` using the face's glyph advances.
pub fn measure(text: &str, font: &PosterFont) -> TextSize {
    let glyphs = glyph_run(font, text, 0.0, 0.0);

    let width = glyphs
        .last()
        .map(|g| g.position().x + g.unpositioned().h_metrics().advance_width)
        .unwrap_or(0.0);

    let height = glyphs
        .iter()
        .filter_map(|g| g.pixel_bounding_box())
        .map(|bb| bb.max.y)
        .max()
        .unwrap_or(0);

    TextSize {
        width: width.max(0.0).ceil() as u32,
        height: height.max(0) as u32,
    }
}
