use crate::constants::*;
use crate::text::{FontCandidates, FontRole};
use crate::types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Font sizes per role, in inches (multiplied by the DPI to get pixels)
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FontSizes {
    pub header_in: f32,
    pub name_in: f32,
    pub label_in: f32,
    pub number_in: f32,
    pub text_in: f32,
    pub call_in: f32,
    pub classification_in: f32,
}

impl Default for FontSizes {
    fn default() -> Self {
        Self {
            header_in: 1.5,
            name_in: 0.5,
            label_in: 0.20,
            number_in: 0.30,
            text_in: 0.20,
            call_in: 0.4,
            classification_in: 0.6,
        }
    }
}

impl FontSizes {
    pub fn inches(&self, role: FontRole) -> f32 {
        match role {
            FontRole::Header => self.header_in,
            FontRole::Name => self.name_in,
            FontRole::Label => self.label_in,
            FontRole::Number => self.number_in,
            FontRole::Text => self.text_in,
            FontRole::Call => self.call_in,
            FontRole::Classification => self.classification_in,
        }
    }

    /// Whole-pixel em size for a role at the given DPI
    pub fn px(&self, role: FontRole, dpi: u32) -> f32 {
        inches_to_px(self.inches(role), dpi) as f32
    }
}

/// Complete poster configuration
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PosterOptions {
    // Page
    pub paper_size: PaperSize,
    pub dpi: u32,
    pub margin_in: f32,

    // Typography
    pub font_sizes: FontSizes,
    pub fonts: FontCandidates,

    // Fixed chrome
    pub title: String,
    pub footer_template: String,

    /// Attribute pairs beyond this count are not drawn
    pub max_attributes: usize,

    // Raster export
    pub jpeg_quality: u8,
}

impl Default for PosterOptions {
    fn default() -> Self {
        Self {
            paper_size: PaperSize::A4,
            dpi: DEFAULT_DPI,
            margin_in: DEFAULT_MARGIN_IN,
            font_sizes: FontSizes::default(),
            fonts: FontCandidates::default(),
            title: DEFAULT_TITLE.to_string(),
            footer_template: DEFAULT_FOOTER_TEMPLATE.to_string(),
            max_attributes: MAX_ATTRIBUTES,
            jpeg_quality: DEFAULT_JPEG_QUALITY,
        }
    }
}

impl PosterOptions {
    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| PosterError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| PosterError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        if self.dpi == 0 {
            return Err(PosterError::Config("DPI must be greater than zero".to_string()));
        }

        let (width_mm, height_mm) = self.paper_size.dimensions_mm();
        if !(width_mm > 0.0 && height_mm > 0.0) {
            return Err(PosterError::Config(format!(
                "Paper size must be positive, got {}x{} mm",
                width_mm, height_mm
            )));
        }

        if self.margin_in < 0.0 {
            return Err(PosterError::Config("Margin cannot be negative".to_string()));
        }

        if !self.footer_template.contains(PHONE_PLACEHOLDER) {
            return Err(PosterError::Config(format!(
                "Footer template must contain the {} placeholder",
                PHONE_PLACEHOLDER
            )));
        }

        if !(1..=100).contains(&self.jpeg_quality) {
            return Err(PosterError::Config(format!(
                "JPEG quality must be between 1 and 100, got {}",
                self.jpeg_quality
            )));
        }

        // Margin against page size is checked on the derived pixel geometry
        PageGeometry::from_options(self).map(|_| ())
    }
}

/// Pixel geometry of one page, fixed for the duration of a render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageGeometry {
    pub width: u32,
    pub height: u32,
    pub margin: u32,
    pub dpi: u32,
}

impl PageGeometry {
    /// Create a geometry, requiring `margin < min(width, height) / 2`
    pub fn new(width: u32, height: u32, margin: u32, dpi: u32) -> Result<Self> {
        if dpi == 0 {
            return Err(PosterError::Config("DPI must be greater than zero".to_string()));
        }
        if margin.saturating_mul(2) >= width.min(height) {
            return Err(PosterError::Config(format!(
                "Margin of {}px leaves no usable area on a {}x{}px page",
                margin, width, height
            )));
        }
        Ok(Self {
            width,
            height,
            margin,
            dpi,
        })
    }

    pub fn from_options(options: &PosterOptions) -> Result<Self> {
        let (width_mm, height_mm) = options.paper_size.dimensions_mm();
        let dpi = options.dpi;
        Self::new(
            mm_to_px(width_mm, dpi),
            mm_to_px(height_mm, dpi),
            inches_to_px(options.margin_in, dpi).max(0) as u32,
            dpi,
        )
    }

    /// Width between the left and right margins
    pub fn usable_width(&self) -> u32 {
        self.width - 2 * self.margin
    }

    /// Convert an inch distance to whole pixels at this page's DPI
    pub fn px(&self, inches: f32) -> i64 {
        inches_to_px(inches, self.dpi)
    }

    /// Physical page size in millimeters
    pub fn size_mm(&self) -> (f32, f32) {
        (px_to_mm(self.width, self.dpi), px_to_mm(self.height, self.dpi))
    }
}
