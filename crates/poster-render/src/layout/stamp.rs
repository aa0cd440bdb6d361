//! Placement of the rotated classification stamp
//!
//! The stamp goes right of the photo when it ends before twice the usable
//! width from the left margin, else left of the photo when that stays inside
//! the left margin. Otherwise it is clamped between the page margins.

use super::PixelRect;
use crate::options::PageGeometry;
use log::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StampSide {
    Right,
    Left,
    Clamped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StampPlacement {
    pub x: i64,
    pub y: i64,
    pub side: StampSide,
}

/// Position a `stamp_width` x `stamp_height` stamp next to `photo`.
///
/// The stamp is vertically centered on the photo whichever side it lands on.
pub fn place_stamp(
    photo: &PixelRect,
    stamp_width: u32,
    stamp_height: u32,
    side_gap: i64,
    geometry: &PageGeometry,
) -> StampPlacement {
    let margin = i64::from(geometry.margin);
    let width = i64::from(stamp_width);
    let y = photo.y + (i64::from(photo.height) - i64::from(stamp_height)).div_euclid(2);

    let right_x = photo.right() + side_gap;
    let right_limit = margin + 2 * i64::from(geometry.usable_width());
    if right_x + width <= right_limit {
        debug!("Stamp placed right of photo at x={}", right_x);
        return StampPlacement {
            x: right_x,
            y,
            side: StampSide::Right,
        };
    }

    let left_x = photo.x - side_gap - width;
    if left_x >= margin {
        debug!("Stamp placed left of photo at x={}", left_x);
        return StampPlacement {
            x: left_x,
            y,
            side: StampSide::Left,
        };
    }

    let max_x = (i64::from(geometry.width) - margin - width).max(margin);
    let x = right_x.clamp(margin, max_x);
    warn!(
        "Classification stamp ({}px wide) fits beside neither side of the photo; clamped to x={}",
        stamp_width, x
    );
    StampPlacement {
        x,
        y,
        side: StampSide::Clamped,
    }
}

// =============================================================================
// Tests
// =============================================================================
