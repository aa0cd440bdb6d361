//! Random record generation
//!
//! All randomness flows through one explicit RNG, so a seed fully determines
//! the generated file for a given image folder.

use crate::catalog::{CLASSIFICATIONS, Catalog};
use crate::naming::name_from_path;
use crate::options::CreateCsvOptions;
use crate::table::save_to_csv;
use crate::types::*;
use log::{debug, info};
use poster_render::{Attribute, Classification, FileNumber, PosterRecord};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::path::{Path, PathBuf};

/// Extensions picked up from the input folder (compared case-insensitively)
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp"];

pub fn is_image_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        })
}

/// Image files directly inside `dir`, sorted by path
pub fn collect_image_paths(dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for entry in std::fs::read_dir(dir.as_ref())? {
        let path = entry?.path();
        if path.is_file() && is_image_path(&path) {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}

pub struct RecordGenerator<R: Rng> {
    rng: R,
    catalog: Catalog,
}

impl RecordGenerator<StdRng> {
    /// Built-in catalog with a seeded RNG
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed), Catalog::builtin())
    }
}

impl<R: Rng> RecordGenerator<R> {
    pub fn new(rng: R, catalog: Catalog) -> Self {
        Self { rng, catalog }
    }

    pub fn catalog(&self) -> Catalog {
        self.catalog
    }

    /// Fail early when `n` attributes per record can never be satisfied
    pub fn check_attribute_count(&self, n: usize) -> Result<()> {
        let available = self.catalog.len();
        if n > available {
            return Err(RecordError::NotEnoughCategories {
                requested: n,
                available,
            });
        }
        Ok(())
    }

    pub fn file_number(&mut self) -> FileNumber {
        FileNumber::random(&mut self.rng)
    }

    /// A random label, kept or dropped with equal odds
    pub fn classification(&mut self) -> Classification {
        let label = CLASSIFICATIONS[self.rng.gen_range(0..CLASSIFICATIONS.len())];
        if self.rng.gen_bool(0.5) {
            Classification::Labeled(label.to_string())
        } else {
            Classification::None
        }
    }

    /// `n` attributes from distinct categories.
    ///
    /// Each draw is uniform over the remaining (category, value) pairs, so
    /// categories with more values are picked more often.
    pub fn attributes(&mut self, n: usize) -> Result<Vec<Attribute>> {
        self.check_attribute_count(n)?;

        let mut pool: Vec<(&str, &str)> = self.catalog.pairs().collect();
        let mut picked = Vec::with_capacity(n);
        for _ in 0..n {
            let Some(&(label, value)) = pool.choose(&mut self.rng) else {
                break;
            };
            picked.push(Attribute::new(label, value));
            pool.retain(|(category, _)| *category != label);
        }
        Ok(picked)
    }

    pub fn record(&mut self, image_path: &Path, n_attributes: usize) -> Result<PosterRecord> {
        let attributes = self.attributes(n_attributes)?;
        let classification = self.classification();
        let file_number = self.file_number();
        Ok(PosterRecord {
            name: name_from_path(image_path),
            classification,
            file_number,
            image_path: image_path.to_owned(),
            attributes,
        })
    }

    /// One record per image, in the given order
    pub fn records(
        &mut self,
        image_paths: &[PathBuf],
        n_attributes: usize,
    ) -> Result<Vec<PosterRecord>> {
        self.check_attribute_count(n_attributes)?;
        image_paths
            .iter()
            .map(|path| self.record(path, n_attributes))
            .collect()
    }
}

/// Scan `input_dir` and generate records with a fresh seeded generator.
pub fn generate_records(
    input_dir: impl AsRef<Path>,
    n_attributes: usize,
    seed: u64,
) -> Result<Vec<PosterRecord>> {
    let input_dir = input_dir.as_ref();
    let mut generator = RecordGenerator::seeded(seed);
    generator.check_attribute_count(n_attributes)?;

    let paths = collect_image_paths(input_dir)?;
    if paths.is_empty() {
        return Err(RecordError::NoImages(input_dir.to_owned()));
    }
    debug!("Found {} images in {}", paths.len(), input_dir.display());

    generator.records(&paths, n_attributes)
}

/// Build the record file for an image folder and return its path.
pub async fn create_csv(options: &CreateCsvOptions) -> Result<PathBuf> {
    let input_dir = options.input_dir.clone();
    let n_attributes = options.n_attributes;
    let seed = options.seed;

    let records = tokio::task::spawn_blocking(move || {
        generate_records(&input_dir, n_attributes, seed)
    })
    .await??;

    tokio::fs::create_dir_all(&options.output_dir).await?;
    let output = options.output_path();
    save_to_csv(&output, &records, n_attributes).await?;

    info!("CSV with {} records saved to {}", records.len(), output.display());
    Ok(output)
}
