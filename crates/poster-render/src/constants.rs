//! Shared constants for poster rendering
//!
//! Distances are stored in inches and converted to pixels with the page DPI,
//! so a poster keeps its proportions at any output resolution.

use image::Rgba;

// =============================================================================
// Unit Conversion
// =============================================================================

/// Millimeters per inch
pub const MM_PER_INCH: f32 = 25.4;

/// Convert inches to whole pixels, truncating toward zero
#[inline]
pub fn inches_to_px(inches: f32, dpi: u32) -> i64 {
    (inches * dpi as f32) as i64
}

/// Convert millimeters to the nearest whole pixel
#[inline]
pub fn mm_to_px(mm: f32, dpi: u32) -> u32 {
    (mm / MM_PER_INCH * dpi as f32).round() as u32
}

/// Convert pixels back to millimeters
#[inline]
pub fn px_to_mm(px: u32, dpi: u32) -> f32 {
    px as f32 / dpi as f32 * MM_PER_INCH
}

// =============================================================================
// Defaults
// =============================================================================

pub const DEFAULT_DPI: u32 = 300;

pub const DEFAULT_MARGIN_IN: f32 = 0.25;

/// Quality for lossy raster export
pub const DEFAULT_JPEG_QUALITY: u8 = 95;

pub const DEFAULT_TITLE: &str = "MISSING";

/// Placeholder replaced by the chosen phone number
pub const PHONE_PLACEHOLDER: &str = "{number}";

pub const DEFAULT_FOOTER_TEMPLATE: &str = "PLEASE CALL - {number}!";

pub const DEFAULT_PHONE_NUMBERS: [&str; 2] = ["017621663536", "01629567590"];

/// Attribute pairs drawn per poster; extras are ignored
pub const MAX_ATTRIBUTES: usize = 4;

// =============================================================================
// Header
// =============================================================================

/// Gap between title glyphs and the accent rule (inches)
pub const HEADER_RULE_OFFSET_IN: f32 = 0.02;

pub const HEADER_RULE_WIDTH_IN: f32 = 0.01;

pub const HEADER_RULE_MIN_WIDTH: u32 = 3;

/// Gap between the accent rule and the photo (inches)
pub const HEADER_SPACING_IN: f32 = 0.04;

// =============================================================================
// Photo
// =============================================================================

/// The photo never grows taller than this share of the page height
pub const PHOTO_MAX_HEIGHT_RATIO: f32 = 0.60;

/// Gap between the photo and the name (inches)
pub const PHOTO_SPACING_IN: f32 = 0.04;

/// Height / width of a portrait ISO 216 sheet
pub const PORTRAIT_DOCUMENT_RATIO: f32 = 1.4142;

/// Relative tolerance when classifying an image as a scanned page
pub const PORTRAIT_RATIO_TOLERANCE: f32 = 0.05;

// =============================================================================
// Classification Stamp
// =============================================================================

/// Padding around the stamp text inside its layer (inches)
pub const STAMP_PADDING_IN: f32 = 0.02;

/// Gap between the photo edge and the stamp (inches)
pub const STAMP_SIDE_GAP_IN: f32 = 0.05;

// =============================================================================
// Name and File Number
// =============================================================================

pub const NAME_SPACING_IN: f32 = 0.015;

pub const NUMBER_SPACING_IN: f32 = 0.02;

// =============================================================================
// Attribute Band
// =============================================================================

/// Offset of the top rule below the file number (inches)
pub const BAND_TOP_OFFSET_IN: f32 = 0.015;

/// Offset of the bottom rule above the footer (inches)
pub const BAND_BOTTOM_OFFSET_IN: f32 = 0.02;

pub const BAND_RULE_WIDTH_IN: f32 = 0.006;

pub const BAND_RULE_MIN_WIDTH: u32 = 2;

/// Keeps attribute text off the rules (inches)
pub const BAND_INSET_IN: f32 = 0.015;

pub const LINE_HEIGHT_FACTOR: f32 = 1.2;

/// Sample with an ascender and a descender, used for text line height
pub const LINE_HEIGHT_SAMPLE: &str = "Ag";

// =============================================================================
// Colors
// =============================================================================

pub const BACKGROUND_COLOR: Rgba<u8> = Rgba([255, 255, 255, 255]);

pub const TEXT_COLOR: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Title and title rule
pub const ACCENT_COLOR: Rgba<u8> = Rgba([200, 0, 0, 255]);

pub const FOOTER_COLOR: Rgba<u8> = Rgba([255, 0, 0, 255]);

/// Semi-transparent dark gray for visible stamps
pub const STAMP_COLOR: Rgba<u8> = Rgba([50, 50, 50, 200]);

pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);
