//! Layout data types
//!
//! Pixel coordinates have their origin at the top-left corner of the page
//! with y growing downward. Positions are signed because a clamped stamp or
//! an oversized title may start left of or above the page.

/// An axis-aligned pixel rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PixelRect {
    pub x: i64,
    pub y: i64,
    pub width: u32,
    pub height: u32,
}

impl PixelRect {
    pub fn new(x: i64, y: i64, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> i64 {
        self.x + i64::from(self.width)
    }

    pub fn bottom(&self) -> i64 {
        self.y + i64::from(self.height)
    }

    /// Overlap with a `width` x `height` area anchored at the origin
    pub fn clip_to(&self, width: u32, height: u32) -> Option<PixelRect> {
        let left = self.x.max(0);
        let top = self.y.max(0);
        let right = self.right().min(i64::from(width));
        let bottom = self.bottom().min(i64::from(height));
        if right <= left || bottom <= top {
            return None;
        }
        Some(PixelRect::new(
            left,
            top,
            (right - left) as u32,
            (bottom - top) as u32,
        ))
    }
}
