//! Drawing primitives on RGBA pixel buffers
//!
//! Everything is composited source-over, so the same routines paint the
//! opaque page canvas and the transparent stamp layer.

use crate::constants::BACKGROUND_COLOR;
use crate::options::PageGeometry;
use crate::text::{PosterFont, WrappedBlock, glyph_run};
use image::{Rgba, RgbaImage};

/// A white page-sized canvas
pub fn blank_canvas(geometry: &PageGeometry) -> RgbaImage {
    RgbaImage::from_pixel(geometry.width, geometry.height, BACKGROUND_COLOR)
}

/// Blend `color` over `dst` with the given glyph coverage (0.0..=1.0)
pub(crate) fn blend_pixel(dst: &mut Rgba<u8>, color: Rgba<u8>, coverage: f32) {
    let src_a = f32::from(color[3]) / 255.0 * coverage.clamp(0.0, 1.0);
    if src_a <= 0.0 {
        return;
    }
    let dst_a = f32::from(dst[3]) / 255.0;
    let out_a = src_a + dst_a * (1.0 - src_a);

    for c in 0..3 {
        let blended =
            f32::from(color[c]) * src_a + f32::from(dst[c]) * dst_a * (1.0 - src_a);
        dst[c] = (blended / out_a).round().clamp(0.0, 255.0) as u8;
    }
    dst[3] = (out_a * 255.0).round().clamp(0.0, 255.0) as u8;
}

fn blend_at(target: &mut RgbaImage, x: i64, y: i64, color: Rgba<u8>, coverage: f32) {
    if x < 0 || y < 0 || x >= i64::from(target.width()) || y >= i64::from(target.height()) {
        return;
    }
    blend_pixel(target.get_pixel_mut(x as u32, y as u32), color, coverage);
}

/// Draw `text` with the top of its ascent line at (`x`, `y`).
///
/// Glyphs outside the target are clipped. A fully transparent color leaves
/// the target untouched.
pub fn draw_text(
    target: &mut RgbaImage,
    font: &PosterFont,
    x: i64,
    y: i64,
    color: Rgba<u8>,
    text: &str,
) {
    if color[3] == 0 {
        return;
    }

    for glyph in glyph_run(font, text, x as f32, y as f32) {
        if let Some(bb) = glyph.pixel_bounding_box() {
            glyph.draw(|gx, gy, coverage| {
                let px = i64::from(bb.min.x) + i64::from(gx);
                let py = i64::from(bb.min.y) + i64::from(gy);
                blend_at(target, px, py, color, coverage);
            });
        }
    }
}

/// Horizontal rule from `x_start` to `x_end` (inclusive), `thickness` rows
/// centered on `y`.
pub fn draw_hrule(
    target: &mut RgbaImage,
    x_start: i64,
    x_end: i64,
    y: i64,
    thickness: u32,
    color: Rgba<u8>,
) {
    let top = y - i64::from(thickness / 2);
    for row in top..top + i64::from(thickness) {
        for col in x_start..=x_end {
            blend_at(target, col, row, color, 1.0);
        }
    }
}

/// Draw a wrapped attribute block at (`x`, `y`) and return the y below it.
pub fn draw_wrapped_block(
    target: &mut RgbaImage,
    block: &WrappedBlock,
    x: i64,
    y: i64,
    label_font: &PosterFont,
    text_font: &PosterFont,
    color: Rgba<u8>,
) -> i64 {
    let line_height = i64::from(block.line_height);

    draw_text(target, label_font, x, y, color, &block.label_text());
    if let Some(first) = block.lines.first() {
        draw_text(target, text_font, x + i64::from(block.label_width), y, color, first);
    }
    let mut y = y + line_height;

    for line in block.lines.iter().skip(1) {
        draw_text(target, text_font, x, y, color, line);
        y += line_height;
    }

    y
}
