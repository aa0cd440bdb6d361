//! Record files for missing-person posters
//!
//! Generates records from a folder of portraits using a built-in catalog of
//! attribute text, and reads and writes them as semicolon-separated files.

mod catalog;
mod generate;
mod naming;
mod options;
mod table;
mod types;

pub use catalog::*;
pub use generate::*;
pub use naming::*;
pub use options::*;
pub use table::*;
pub use types::*;
