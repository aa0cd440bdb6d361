//! Vertical distribution of attribute blocks
//!
//! Blocks are separated by one equal gap, with the same gap above the first
//! and below the last. When the blocks are taller than the band the gap is
//! zero and the overflow runs past the band's bottom edge.

use log::warn;

/// Result of distributing blocks inside a band
#[derive(Debug, Clone, PartialEq)]
pub struct BandLayout {
    pub top: i64,
    pub bottom: i64,
    /// Nominal gap before, between and after blocks
    pub gap: f64,
    /// Top edge of each block
    pub offsets: Vec<i64>,
    /// Total height of the blocks
    pub content_height: u64,
}

impl BandLayout {
    pub fn available_height(&self) -> u64 {
        (self.bottom - self.top).max(0) as u64
    }

    /// Content does not fit between the rules
    pub fn overflows(&self) -> bool {
        self.content_height > self.available_height()
    }

    /// Actual whitespace above, between and below the blocks, in order.
    ///
    /// Always `offsets.len() + 1` entries. Their sum plus the content height
    /// equals the band height whenever the content fits.
    pub fn gaps(&self, heights: &[u32]) -> Vec<i64> {
        let mut gaps = Vec::with_capacity(self.offsets.len() + 1);
        let mut cursor = self.top;
        for (offset, height) in self.offsets.iter().zip(heights) {
            gaps.push(offset - cursor);
            cursor = offset + i64::from(*height);
        }
        gaps.push(self.bottom - cursor);
        gaps
    }
}

/// Spread blocks of the given heights evenly between `top` and `bottom`.
pub fn distribute_blocks(top: i64, bottom: i64, heights: &[u32]) -> BandLayout {
    let available = (bottom - top).max(0) as f64;
    let content_height: u64 = heights.iter().map(|&h| u64::from(h)).sum();
    let gap = ((available - content_height as f64) / (heights.len() + 1) as f64).max(0.0);

    let mut offsets = Vec::with_capacity(heights.len());
    let mut cursor = top as f64 + gap;
    for &height in heights {
        let y = cursor.floor() as i64;
        offsets.push(y);
        cursor = (y + i64::from(height)) as f64 + gap;
    }

    let layout = BandLayout {
        top,
        bottom,
        gap,
        offsets,
        content_height,
    };

    if layout.overflows() {
        warn!(
            "Attribute text needs {}px but the band has {}px; overflowing below the bottom rule",
            layout.content_height,
            layout.available_height()
        );
    }

    layout
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_even_distribution() {
        let layout = distribute_blocks(100, 500, &[50, 50, 50]);
        // (400 - 150) / 4 = 62.5
        assert_eq!(layout.gap, 62.5);
        assert_eq!(layout.offsets, vec![162, 274, 386]);
    }

    #[test]
    fn test_gaps_fill_band_exactly() {
        let heights = [37, 81, 12, 64];
        let layout = distribute_blocks(40, 713, &heights);
        let gaps = layout.gaps(&heights);
        assert_eq!(gaps.len(), heights.len() + 1);

        let content: i64 = heights.iter().map(|&h| i64::from(h)).sum();
        assert_eq!(gaps.iter().sum::<i64>() + content, 713 - 40);

        for gap in &gaps[..heights.len()] {
            assert!((*gap as f64 - layout.gap).abs() < 1.0);
        }
    }

    #[test]
    fn test_no_blocks() {
        let layout = distribute_blocks(0, 300, &[]);
        assert!(layout.offsets.is_empty());
        assert_eq!(layout.gap, 300.0);
        assert_eq!(layout.gaps(&[]), vec![300]);
    }

    #[test]
    fn test_overflow_collapses_gap() {
        let heights = [200, 200];
        let layout = distribute_blocks(0, 300, &heights);
        assert_eq!(layout.gap, 0.0);
        assert_eq!(layout.offsets, vec![0, 200]);
        assert!(layout.overflows());
    }

    #[test]
    fn test_inverted_band_is_empty() {
        let layout = distribute_blocks(500, 400, &[10]);
        assert_eq!(layout.available_height(), 0);
        assert_eq!(layout.offsets, vec![500]);
    }
}
