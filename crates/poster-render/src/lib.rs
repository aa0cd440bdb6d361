pub mod constants;
pub mod layout;
mod options;
mod poster;
mod record;
pub mod render;
pub mod text;
mod types;

pub use options::*;
pub use poster::{RenderContext, choose_phone_number, generate_poster, render_poster, write_poster};
pub use record::*;
pub use render::{ExportFormat, Poster, PosterLayout};
pub use text::{FontCandidates, FontSet, FontWeight, PosterFont};
pub use types::*;
