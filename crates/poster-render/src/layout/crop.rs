//! Square cropping of source photos
//!
//! Scans of a portrait document keep their full width and lose equal strips
//! from top and bottom. Every other image is center-cropped to its shorter
//! side. No resampling happens here.

use crate::constants::{PORTRAIT_DOCUMENT_RATIO, PORTRAIT_RATIO_TOLERANCE};
use image::DynamicImage;
use log::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CropPolicy {
    /// Aspect close to a portrait sheet: trim top and bottom only
    DocumentPage,
    /// Center square with the shorter side
    CenterSquare,
}

/// The region of the source image that is kept
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropRegion {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    pub policy: CropPolicy,
}

impl CropRegion {
    /// True when the region is the whole `width` x `height` image
    pub fn is_full_image(&self, width: u32, height: u32) -> bool {
        self.x == 0 && self.y == 0 && self.width == width && self.height == height
    }
}

/// Height / width within tolerance of a portrait document sheet
pub fn is_document_aspect(width: u32, height: u32) -> bool {
    let aspect = if width == 0 {
        1.0
    } else {
        height as f32 / width as f32
    };
    let low = PORTRAIT_DOCUMENT_RATIO * (1.0 - PORTRAIT_RATIO_TOLERANCE);
    let high = PORTRAIT_DOCUMENT_RATIO * (1.0 + PORTRAIT_RATIO_TOLERANCE);
    (low..=high).contains(&aspect)
}

/// Compute the square region kept from a `width` x `height` image.
pub fn square_crop_region(width: u32, height: u32) -> CropRegion {
    if is_document_aspect(width, height) {
        if height > width {
            let top = (height - width) / 2;
            return CropRegion {
                x: 0,
                y: top,
                width,
                height: width,
                policy: CropPolicy::DocumentPage,
            };
        }
        return CropRegion {
            x: 0,
            y: 0,
            width,
            height,
            policy: CropPolicy::DocumentPage,
        };
    }

    let side = width.min(height);
    CropRegion {
        x: (width - side) / 2,
        y: (height - side) / 2,
        width: side,
        height: side,
        policy: CropPolicy::CenterSquare,
    }
}

/// Crop `image` to a square according to its aspect ratio.
pub fn square_crop(image: &DynamicImage) -> DynamicImage {
    let region = square_crop_region(image.width(), image.height());
    debug!(
        "Cropping {}x{} image with {:?} to {}x{} at ({}, {})",
        image.width(),
        image.height(),
        region.policy,
        region.width,
        region.height,
        region.x,
        region.y
    );

    if region.is_full_image(image.width(), image.height()) {
        return image.clone();
    }
    image.crop_imm(region.x, region.y, region.width, region.height)
}

// =============================================================================
// Tests
// =============================================================================
