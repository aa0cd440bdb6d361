//! Poster composition
//!
//! Layers are drawn top to bottom in a fixed order: title and accent rule,
//! photo, classification stamp, name, file number, attribute band between
//! two rules, and finally the footer so it sits above anything it overlaps.

use super::canvas::{blank_canvas, draw_hrule, draw_text, draw_wrapped_block};
use crate::constants::*;
use crate::layout::{
    BandLayout, CropRegion, PixelRect, StampSide, distribute_blocks, place_stamp, square_crop,
    square_crop_region,
};
use crate::options::PageGeometry;
use crate::poster::RenderContext;
use crate::record::{Classification, PosterRecord};
use crate::text::{PosterFont, WrappedBlock, measure, wrap_labeled};
use image::imageops::{self, FilterType};
use image::{DynamicImage, Rgb, RgbImage, Rgba, RgbaImage};
use log::debug;

/// Where every element of a poster ended up
#[derive(Debug, Clone, PartialEq)]
pub struct PosterLayout {
    pub header: PixelRect,
    pub header_rule_y: i64,
    pub photo: PixelRect,
    /// Region of the source photo that was kept
    pub crop: CropRegion,
    pub stamp: PixelRect,
    pub stamp_side: StampSide,
    pub stamp_visible: bool,
    pub name: PixelRect,
    pub number: PixelRect,
    pub top_rule_y: i64,
    pub bottom_rule_y: i64,
    pub band: BandLayout,
    pub blocks: Vec<WrappedBlock>,
    pub footer: PixelRect,
    pub footer_text: String,
}

/// A finished page, ready to export
#[derive(Debug, Clone)]
pub struct Poster {
    pub canvas: RgbaImage,
    pub layout: PosterLayout,
    pub geometry: PageGeometry,
}

/// Edge length of the square photo: the usable width, capped at a share of
/// the page height.
pub fn photo_side(geometry: &PageGeometry) -> u32 {
    let max_height = (geometry.height as f32 * PHOTO_MAX_HEIGHT_RATIO) as u32;
    geometry.usable_width().min(max_height)
}

/// Remove all color, keeping ITU-R 601-2 luma in every channel.
pub fn desaturate(photo: &DynamicImage) -> RgbImage {
    let mut rgb = photo.to_rgb8();
    for pixel in rgb.pixels_mut() {
        let [r, g, b] = pixel.0.map(u32::from);
        let luma = ((299 * r + 587 * g + 114 * b) / 1000) as u8;
        *pixel = Rgb([luma, luma, luma]);
    }
    rgb
}

/// Desaturate, square-crop and resize a source photo to `side` pixels.
pub fn prepare_photo(photo: &DynamicImage, side: u32) -> (RgbaImage, CropRegion) {
    let gray = DynamicImage::ImageRgb8(desaturate(photo));
    let region = square_crop_region(gray.width(), gray.height());
    let square = square_crop(&gray);
    let resized = square
        .resize_exact(side, side, FilterType::Lanczos3)
        .to_rgba8();
    (resized, region)
}

/// Render the classification into its own transparent, unrotated layer.
///
/// Records without a classification get a layer of the same construction
/// with nothing painted on it.
pub fn stamp_layer(
    classification: &Classification,
    font: &PosterFont,
    padding: i64,
) -> RgbaImage {
    let text = classification.text();
    let size = measure(text, font);
    let pad = padding.max(0) as u32;

    let mut layer =
        RgbaImage::from_pixel(size.width + 2 * pad, size.height + 2 * pad, TRANSPARENT);
    let color = if classification.is_visible() {
        STAMP_COLOR
    } else {
        TRANSPARENT
    };
    draw_text(&mut layer, font, i64::from(pad), i64::from(pad), color, text);
    layer
}

fn centered_x(page_width: u32, content_width: u32) -> i64 {
    (i64::from(page_width) - i64::from(content_width)).div_euclid(2)
}

fn rule_width(geometry: &PageGeometry, inches: f32, minimum: u32) -> u32 {
    (geometry.px(inches).max(0) as u32).max(minimum)
}

fn draw_centered(
    canvas: &mut RgbaImage,
    geometry: &PageGeometry,
    font: &PosterFont,
    y: i64,
    color: Rgba<u8>,
    text: &str,
) -> PixelRect {
    let size = measure(text, font);
    let rect = PixelRect::new(
        centered_x(geometry.width, size.width),
        y,
        size.width,
        size.height,
    );
    draw_text(canvas, font, rect.x, rect.y, color, text);
    rect
}

/// Compose one poster onto a fresh canvas.
///
/// Pure apart from the pixels it writes: the same inputs always produce the
/// same canvas.
pub fn compose_poster(
    ctx: &RenderContext,
    record: &PosterRecord,
    photo: &DynamicImage,
    phone_number: &str,
) -> Poster {
    let geometry = ctx.geometry;
    let fonts = &ctx.fonts;
    let x0 = i64::from(geometry.margin);
    let y0 = x0;
    let usable = geometry.usable_width();
    let page_height = i64::from(geometry.height);

    let mut canvas = blank_canvas(&geometry);

    // 1) Title with accent rule
    let header = draw_centered(
        &mut canvas,
        &geometry,
        &fonts.header,
        y0,
        ACCENT_COLOR,
        &ctx.title,
    );
    let header_rule_y = header.bottom() + geometry.px(HEADER_RULE_OFFSET_IN);
    draw_hrule(
        &mut canvas,
        x0,
        x0 + i64::from(usable),
        header_rule_y,
        rule_width(&geometry, HEADER_RULE_WIDTH_IN, HEADER_RULE_MIN_WIDTH),
        ACCENT_COLOR,
    );
    let y = header_rule_y + geometry.px(HEADER_SPACING_IN);

    // 2) Photo
    let side = photo_side(&geometry);
    let (picture, crop) = prepare_photo(photo, side);
    let photo_rect = PixelRect::new(x0 + i64::from((usable - side) / 2), y, side, side);
    imageops::replace(&mut canvas, &picture, photo_rect.x, photo_rect.y);

    // 3) Classification stamp, reading bottom to top
    let layer = stamp_layer(
        &record.classification,
        &fonts.classification,
        geometry.px(STAMP_PADDING_IN),
    );
    let rotated = imageops::rotate270(&layer);
    let placement = place_stamp(
        &photo_rect,
        rotated.width(),
        rotated.height(),
        geometry.px(STAMP_SIDE_GAP_IN),
        &geometry,
    );
    imageops::overlay(&mut canvas, &rotated, placement.x, placement.y);
    let stamp = PixelRect::new(placement.x, placement.y, rotated.width(), rotated.height());

    // 4) Name
    let y = photo_rect.bottom() + geometry.px(PHOTO_SPACING_IN);
    let name = draw_centered(
        &mut canvas,
        &geometry,
        &fonts.name,
        y,
        TEXT_COLOR,
        &record.name,
    );

    // 5) File number
    let y = name.bottom() + geometry.px(NAME_SPACING_IN);
    let number_text = format!("#{}", record.file_number);
    let number = draw_centered(
        &mut canvas,
        &geometry,
        &fonts.number,
        y,
        TEXT_COLOR,
        &number_text,
    );
    let top_rule_y =
        number.bottom() + geometry.px(NUMBER_SPACING_IN) + geometry.px(BAND_TOP_OFFSET_IN);

    // 7) Footer anchor fixes the bottom rule before any attribute is drawn
    let footer_text = ctx.footer_text(phone_number);
    let footer_size = measure(&footer_text, &fonts.call);
    let footer_y = top_rule_y.max(page_height - x0 - i64::from(footer_size.height));
    let footer = PixelRect::new(
        centered_x(geometry.width, footer_size.width),
        footer_y,
        footer_size.width,
        footer_size.height,
    );
    let bottom_rule_y = footer_y - geometry.px(BAND_BOTTOM_OFFSET_IN);

    let band_rule = rule_width(&geometry, BAND_RULE_WIDTH_IN, BAND_RULE_MIN_WIDTH);
    let rule_end = x0 + i64::from(usable);
    draw_hrule(&mut canvas, x0, rule_end, top_rule_y, band_rule, TEXT_COLOR);
    draw_hrule(&mut canvas, x0, rule_end, bottom_rule_y, band_rule, TEXT_COLOR);

    // 6) Attribute blocks spread between the rules
    let inset = geometry.px(BAND_INSET_IN);
    let blocks: Vec<WrappedBlock> = record
        .attributes
        .iter()
        .take(ctx.max_attributes)
        .map(|attr| {
            wrap_labeled(
                &attr.label,
                &attr.value,
                usable,
                &fonts.label,
                &fonts.text,
            )
        })
        .collect();
    let heights: Vec<u32> = blocks.iter().map(WrappedBlock::total_height).collect();
    let band = distribute_blocks(top_rule_y + inset, bottom_rule_y - inset, &heights);
    debug!(
        "{} attribute blocks, {}px of text, gap {:.1}px",
        blocks.len(),
        band.content_height,
        band.gap
    );

    for (block, &offset) in blocks.iter().zip(&band.offsets) {
        draw_wrapped_block(
            &mut canvas,
            block,
            x0,
            offset,
            &fonts.label,
            &fonts.text,
            TEXT_COLOR,
        );
    }

    // 8) Footer last, on top of any overflow
    draw_text(&mut canvas, &fonts.call, footer.x, footer.y, FOOTER_COLOR, &footer_text);

    Poster {
        canvas,
        geometry,
        layout: PosterLayout {
            header,
            header_rule_y,
            photo: photo_rect,
            crop,
            stamp,
            stamp_side: placement.side,
            stamp_visible: record.classification.is_visible(),
            name,
            number,
            top_rule_y,
            bottom_rule_y,
            band,
            blocks,
            footer,
            footer_text,
        },
    }
}
