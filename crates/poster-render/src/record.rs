//! Poster input records
//!
//! A record is created once by the tabular layer and consumed once by the
//! renderer. Only the first `max_attributes` pairs (four by default) make it
//! onto the page.

use rand::Rng;
use std::fmt;
use std::path::PathBuf;

/// A (label, value) pair rendered as one bracketed description line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub label: String,
    pub value: String,
}

impl Attribute {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Classification shown in the rotated stamp beside the photo.
///
/// `None` still occupies layout space: its placeholder text is measured and
/// placed like any other stamp, but painted fully transparent.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Classification {
    #[default]
    None,
    Labeled(String),
}

impl Classification {
    /// Placeholder text stored and measured for records without a classification
    pub const SENTINEL: &'static str = "X";

    /// Parse a stored cell. `X`, `none` and blank cells mean no classification.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty()
            || trimmed.eq_ignore_ascii_case(Self::SENTINEL)
            || trimmed.eq_ignore_ascii_case("none")
        {
            Classification::None
        } else {
            Classification::Labeled(trimmed.to_string())
        }
    }

    /// Text laid out for the stamp
    pub fn text(&self) -> &str {
        match self {
            Classification::None => Self::SENTINEL,
            Classification::Labeled(text) => text,
        }
    }

    pub fn is_visible(&self) -> bool {
        matches!(self, Classification::Labeled(_))
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// Eight-digit, zero-padded tracking number
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileNumber(String);

impl FileNumber {
    pub const DIGITS: usize = 8;
    pub const MAX: u32 = 99_999_999;

    /// Build from a numeric value; values above [`FileNumber::MAX`] are rejected.
    pub fn new(value: u32) -> Option<Self> {
        (value <= Self::MAX).then(|| Self(format!("{:0width$}", value, width = Self::DIGITS)))
    }

    /// Draw a number uniformly from `0..=MAX`
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let value = rng.gen_range(0..=Self::MAX);
        Self(format!("{:0width$}", value, width = Self::DIGITS))
    }

    /// Parse a stored number. Shorter digit strings are zero-padded, since
    /// spreadsheet tools tend to strip leading zeros.
    pub fn parse(raw: &str) -> Option<Self> {
        let digits = raw.trim();
        if digits.is_empty()
            || digits.len() > Self::DIGITS
            || !digits.bytes().all(|b| b.is_ascii_digit())
        {
            return None;
        }
        Some(Self(format!("{:0>width$}", digits, width = Self::DIGITS)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FileNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Everything the renderer needs to draw one poster
#[derive(Debug, Clone, PartialEq)]
pub struct PosterRecord {
    pub name: String,
    pub classification: Classification,
    pub file_number: FileNumber,
    pub image_path: PathBuf,
    pub attributes: Vec<Attribute>,
}
