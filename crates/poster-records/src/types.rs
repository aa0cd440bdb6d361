use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecordError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid record file: {0}")]
    Schema(String),
    #[error("Requested {requested} attributes but the catalog only has {available} categories")]
    NotEnoughCategories { requested: usize, available: usize },
    #[error("No images found in {}", .0.display())]
    NoImages(PathBuf),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, RecordError>;
