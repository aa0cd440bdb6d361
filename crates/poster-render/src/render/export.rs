//! Poster export
//!
//! The output extension picks the format. PDF embeds the page raster at the
//! render DPI, so the document prints at the physical paper size; every
//! other extension is written as a compressed raster.

use super::compose::Poster;
use crate::options::PageGeometry;
use crate::types::*;
use image::codecs::jpeg::JpegEncoder;
use image::{ImageFormat, Rgb, RgbImage, RgbaImage};
use log::info;
use printpdf::{
    Mm, Op, PdfDocument, PdfPage, PdfSaveOptions, RawImage, RawImageData, RawImageFormat,
    XObjectTransform,
};
use std::io::Cursor;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Pdf,
    Jpeg { quality: u8 },
    Raster(ImageFormat),
}

impl ExportFormat {
    /// Pick the format from a file extension (case-insensitive)
    pub fn from_extension(extension: &str, jpeg_quality: u8) -> Result<Self> {
        let ext = extension.trim_start_matches('.').to_ascii_lowercase();
        match ext.as_str() {
            "pdf" => Ok(ExportFormat::Pdf),
            "jpg" | "jpeg" => Ok(ExportFormat::Jpeg {
                quality: jpeg_quality,
            }),
            _ => ImageFormat::from_extension(&ext)
                .filter(|format| format.writing_enabled())
                .map(ExportFormat::Raster)
                .ok_or_else(|| PosterError::UnsupportedFormat(format!(".{}", ext))),
        }
    }

    pub fn from_path(path: impl AsRef<Path>, jpeg_quality: u8) -> Result<Self> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| {
                PosterError::UnsupportedFormat(format!("{} has no extension", path.display()))
            })?;
        Self::from_extension(ext, jpeg_quality)
    }
}

/// Drop the alpha channel of an opaque canvas
fn flatten(canvas: &RgbaImage) -> RgbImage {
    RgbImage::from_fn(canvas.width(), canvas.height(), |x, y| {
        let p = canvas.get_pixel(x, y);
        Rgb([p[0], p[1], p[2]])
    })
}

fn pdf_bytes(title: &str, page: RgbImage, geometry: &PageGeometry) -> Vec<u8> {
    let mut doc = PdfDocument::new(title);

    let image = RawImage {
        width: page.width() as usize,
        height: page.height() as usize,
        pixels: RawImageData::U8(page.into_raw()),
        data_format: RawImageFormat::RGB8,
        tag: Vec::new(),
    };
    let image_id = doc.add_image(&image);

    let (width_mm, height_mm) = geometry.size_mm();
    let ops = vec![Op::UseXobject {
        id: image_id,
        transform: XObjectTransform {
            dpi: Some(geometry.dpi as f32),
            ..Default::default()
        },
    }];
    doc.pages.push(PdfPage::new(Mm(width_mm), Mm(height_mm), ops));

    let mut warnings = Vec::new();
    doc.save(&PdfSaveOptions::default(), &mut warnings)
}

/// Encode a canvas in the given format.
pub fn encode_canvas(
    canvas: &RgbaImage,
    geometry: &PageGeometry,
    format: ExportFormat,
    title: &str,
) -> Result<Vec<u8>> {
    let page = flatten(canvas);

    match format {
        ExportFormat::Pdf => Ok(pdf_bytes(title, page, geometry)),
        ExportFormat::Jpeg { quality } => {
            let mut bytes = Vec::new();
            JpegEncoder::new_with_quality(&mut bytes, quality).encode_image(&page)?;
            Ok(bytes)
        }
        ExportFormat::Raster(image_format) => {
            let mut cursor = Cursor::new(Vec::new());
            page.write_to(&mut cursor, image_format)?;
            Ok(cursor.into_inner())
        }
    }
}

impl Poster {
    /// Encode the page; the record name becomes the PDF title
    pub fn encode(&self, format: ExportFormat, title: &str) -> Result<Vec<u8>> {
        encode_canvas(&self.canvas, &self.geometry, format, title)
    }

    /// Write the page to `path`, choosing the format from its extension.
    ///
    /// The parent directory must already exist.
    pub fn save(&self, path: impl AsRef<Path>, title: &str, jpeg_quality: u8) -> Result<()> {
        let path = path.as_ref();
        let format = ExportFormat::from_path(path, jpeg_quality)?;
        let bytes = self.encode(format, title)?;
        std::fs::write(path, bytes)?;
        info!("Saved {}", path.display());
        Ok(())
    }
}
