//! Layout calculation modules for posters
//!
//! Pure geometry, no pixels are touched here:
//! - Square crop regions for source photos
//! - Even vertical distribution of attribute blocks
//! - Classification stamp placement beside the photo

mod band;
mod crop;
mod stamp;
mod types;

pub use band::*;
pub use crop::*;
pub use stamp::*;
pub use types::*;
