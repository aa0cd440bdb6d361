use std::path::PathBuf;

pub const DEFAULT_OUTPUT_DIR: &str = "out";
pub const DEFAULT_CSV_NAME: &str = "missing_poster.csv";
pub const DEFAULT_SEED: u64 = 42;
pub const DEFAULT_ATTRIBUTE_COUNT: usize = 3;

/// Settings for turning an image folder into a record file
#[derive(Debug, Clone, PartialEq)]
pub struct CreateCsvOptions {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub file_name: String,
    pub n_attributes: usize,
    pub seed: u64,
}

impl Default for CreateCsvOptions {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::new(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            file_name: DEFAULT_CSV_NAME.to_string(),
            n_attributes: DEFAULT_ATTRIBUTE_COUNT,
            seed: DEFAULT_SEED,
        }
    }
}

impl CreateCsvOptions {
    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(&self.file_name)
    }
}
