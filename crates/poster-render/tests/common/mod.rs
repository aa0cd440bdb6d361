use image::{Rgb, RgbImage};
use poster_render::*;
use std::path::{Path, PathBuf};

/// 72 DPI keeps A4 canvases at 595x842
pub fn low_dpi_options() -> PosterOptions {
    PosterOptions {
        dpi: 72,
        ..PosterOptions::default()
    }
}

pub fn context() -> RenderContext {
    RenderContext::embedded(&low_dpi_options()).unwrap()
}

/// Write a gradient test photo so crops and resizes have something to chew on
pub fn write_photo(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    let img = RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8])
    });
    img.save(&path).unwrap();
    path
}

pub fn record(image_path: PathBuf, classification: Classification) -> PosterRecord {
    PosterRecord {
        name: "Jane Doe".to_string(),
        classification,
        file_number: FileNumber::new(12_345).unwrap(),
        image_path,
        attributes: vec![
            Attribute::new("Height", "Roughly the size of a grandfather clock"),
            Attribute::new("Last seen", "Arguing with a vending machine"),
            Attribute::new("Known for", "Humming the same four bars of a waltz"),
        ],
    }
}

pub fn pool(numbers: &[&str]) -> Vec<String> {
    numbers.iter().map(|n| n.to_string()).collect()
}
