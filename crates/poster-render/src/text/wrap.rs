//! Labeled paragraph wrapping
//!
//! A block reads `Label: value…` with the label in its own font. The first
//! line only has the width left over after the label; continuation lines use
//! the full width and start at the block's left edge (hanging indent).

use super::{PosterFont, measure};
use crate::constants::{LINE_HEIGHT_FACTOR, LINE_HEIGHT_SAMPLE};

/// A wrapped attribute ready to draw
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrappedBlock {
    pub label: String,
    /// Measured width of the `"<label>: "` prefix
    pub label_width: u32,
    /// Value lines; the first one follows the label prefix
    pub lines: Vec<String>,
    /// Uniform height of every line, including the label line
    pub line_height: u32,
}

impl WrappedBlock {
    /// Text drawn in the label font
    pub fn label_text(&self) -> String {
        label_prefix(&self.label)
    }

    /// Lines occupied on the page; an empty value still takes the label line
    pub fn line_count(&self) -> usize {
        self.lines.len().max(1)
    }

    pub fn total_height(&self) -> u32 {
        self.line_count() as u32 * self.line_height
    }
}

pub fn label_prefix(label: &str) -> String {
    format!("{}: ", label)
}

/// Width allowed for the line at `index`
pub fn line_limit(index: usize, label_width: u32, max_width: u32) -> u32 {
    if index == 0 {
        max_width.saturating_sub(label_width)
    } else {
        max_width
    }
}

/// Line height shared by every line of a block
pub fn block_line_height(
    label_text: &str,
    label_font: &PosterFont,
    text_font: &PosterFont,
) -> u32 {
    let label_height = measure(label_text, label_font).height;
    let sample_height = measure(LINE_HEIGHT_SAMPLE, text_font).height;
    (label_height.max(sample_height) as f32 * LINE_HEIGHT_FACTOR) as u32
}

/// Greedily pack whitespace-separated words into lines.
///
/// A word wider than its line's limit still gets a line of its own; words
/// are never split.
pub fn pack_words(
    value: &str,
    label_width: u32,
    max_width: u32,
    text_font: &PosterFont,
) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in value.split_whitespace() {
        let trial = if current.is_empty() {
            word.to_string()
        } else {
            format!("{} {}", current, word)
        };
        let limit = line_limit(lines.len(), label_width, max_width);

        if measure(&trial, text_font).width <= limit {
            current = trial;
        } else {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            current = word.to_string();
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

/// Wrap `value` under a `label` prefix within `max_width` pixels.
pub fn wrap_labeled(
    label: &str,
    value: &str,
    max_width: u32,
    label_font: &PosterFont,
    text_font: &PosterFont,
) -> WrappedBlock {
    let label_text = label_prefix(label);
    let label_width = measure(&label_text, label_font).width;
    let line_height = block_line_height(&label_text, label_font, text_font);
    let lines = pack_words(value, label_width, max_width, text_font);

    WrappedBlock {
        label: label.to_string(),
        label_width,
        lines,
        line_height,
    }
}

/// Height `wrap_labeled` would occupy, without drawing anything.
pub fn measure_labeled_height(
    label: &str,
    value: &str,
    max_width: u32,
    label_font: &PosterFont,
    text_font: &PosterFont,
) -> u32 {
    wrap_labeled(label, value, max_width, label_font, text_font).total_height()
}
