//! Poster rendering entry points
//!
//! 1. Build a [`RenderContext`] once (geometry + resolved fonts)
//! 2. Pick a phone number from the caller's pool with the caller's RNG
//! 3. Open the record's photo and compose the page
//! 4. Export by output extension

use crate::options::{PageGeometry, PosterOptions};
use crate::record::PosterRecord;
use crate::render::{ExportFormat, Poster, compose_poster};
use crate::text::FontSet;
use crate::types::*;
use rand::Rng;
use rand::seq::SliceRandom;
use std::path::{Path, PathBuf};

/// Everything fixed across renders: page geometry, fonts and chrome text.
///
/// Read-only once built, so one context can serve any number of renders,
/// including concurrent ones.
#[derive(Debug, Clone)]
pub struct RenderContext {
    pub geometry: PageGeometry,
    pub fonts: FontSet,
    pub title: String,
    pub footer_template: String,
    pub max_attributes: usize,
    pub jpeg_quality: u8,
}

impl RenderContext {
    /// Validate options and resolve fonts from the configured candidates
    pub fn new(options: &PosterOptions) -> Result<Self> {
        options.validate()?;
        let fonts = FontSet::resolve(options)?;
        Self::with_fonts(options, fonts)
    }

    /// Use the fonts compiled into the library, ignoring font candidates
    pub fn embedded(options: &PosterOptions) -> Result<Self> {
        options.validate()?;
        let fonts = FontSet::embedded(options)?;
        Self::with_fonts(options, fonts)
    }

    pub fn with_fonts(options: &PosterOptions, fonts: FontSet) -> Result<Self> {
        Ok(Self {
            geometry: PageGeometry::from_options(options)?,
            fonts,
            title: options.title.clone(),
            footer_template: options.footer_template.clone(),
            max_attributes: options.max_attributes,
            jpeg_quality: options.jpeg_quality,
        })
    }

    pub fn footer_text(&self, phone_number: &str) -> String {
        self.footer_template
            .replace(crate::constants::PHONE_PLACEHOLDER, phone_number)
    }
}

/// Choose a phone number uniformly from `pool`
pub fn choose_phone_number<'a, R: Rng + ?Sized>(
    pool: &'a [String],
    rng: &mut R,
) -> Result<&'a str> {
    pool.choose(rng)
        .map(String::as_str)
        .ok_or_else(|| PosterError::Config("Phone number pool is empty".to_string()))
}

/// Open the record's photo and compose its poster.
pub fn render_poster<R: Rng + ?Sized>(
    ctx: &RenderContext,
    record: &PosterRecord,
    phone_numbers: &[String],
    rng: &mut R,
) -> Result<Poster> {
    let phone_number = choose_phone_number(phone_numbers, rng)?;
    let photo = image::open(&record.image_path).map_err(|source| PosterError::ImageOpen {
        path: record.image_path.clone(),
        source,
    })?;
    Ok(compose_poster(ctx, record, &photo, phone_number))
}

/// Render a record and write it to `output_path`.
///
/// Fails before touching the photo if the extension is not supported.
pub fn write_poster<R: Rng + ?Sized>(
    ctx: &RenderContext,
    record: &PosterRecord,
    phone_numbers: &[String],
    rng: &mut R,
    output_path: impl AsRef<Path>,
) -> Result<PathBuf> {
    let output_path = output_path.as_ref();
    ExportFormat::from_path(output_path, ctx.jpeg_quality)?;
    let poster = render_poster(ctx, record, phone_numbers, rng)?;
    poster.save(output_path, &record.name, ctx.jpeg_quality)?;
    Ok(output_path.to_owned())
}

/// Render and save a poster without blocking the async runtime.
///
/// The phone number is drawn from an unseeded thread-local RNG.
pub async fn generate_poster(
    ctx: &RenderContext,
    record: &PosterRecord,
    phone_numbers: &[String],
    output_path: impl AsRef<Path>,
) -> Result<PathBuf> {
    let ctx = ctx.clone();
    let record = record.clone();
    let phone_numbers = phone_numbers.to_vec();
    let output_path = output_path.as_ref().to_owned();

    let format = ExportFormat::from_path(&output_path, ctx.jpeg_quality)?;
    let image_bytes = tokio::fs::read(&record.image_path)
        .await
        .map_err(|e| PosterError::ImageOpen {
            path: record.image_path.clone(),
            source: image::ImageError::IoError(e),
        })?;

    // Decoding, composition and encoding are CPU-bound
    let bytes = tokio::task::spawn_blocking(move || {
        let phone_number = choose_phone_number(&phone_numbers, &mut rand::thread_rng())?;
        let photo =
            image::load_from_memory(&image_bytes).map_err(|source| PosterError::ImageOpen {
                path: record.image_path.clone(),
                source,
            })?;
        let poster = compose_poster(&ctx, &record, &photo, phone_number);
        poster.encode(format, &record.name)
    })
    .await??;

    tokio::fs::write(&output_path, bytes).await?;
    log::info!("Saved {}", output_path.display());

    Ok(output_path)
}
