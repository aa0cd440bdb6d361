//! Font resolution
//!
//! Every font request walks an ordered list of candidate files and takes the
//! first one that loads. When none does, a DejaVu face compiled into the
//! library is used, so resolving a [`FontSet`] never fails for a missing file.

use crate::options::PosterOptions;
use crate::types::{PosterError, Result};
use log::{debug, warn};
use rusttype::{Font, Scale};
use std::fmt;
use std::path::{Path, PathBuf};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

static EMBEDDED_REGULAR: &[u8] = include_bytes!("../../fonts/DejaVuSans.ttf");
static EMBEDDED_BOLD: &[u8] = include_bytes!("../../fonts/DejaVuSans-Bold.ttf");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontWeight {
    Regular,
    Bold,
}

impl fmt::Display for FontWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FontWeight::Regular => "regular",
            FontWeight::Bold => "bold",
        })
    }
}

/// What a font is used for on the poster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontRole {
    Header,
    Name,
    Label,
    Number,
    Text,
    Call,
    Classification,
}

impl FontRole {
    pub const ALL: [FontRole; 7] = [
        FontRole::Header,
        FontRole::Name,
        FontRole::Label,
        FontRole::Number,
        FontRole::Text,
        FontRole::Call,
        FontRole::Classification,
    ];

    /// Attribute values are the only regular-weight text
    pub fn weight(self) -> FontWeight {
        match self {
            FontRole::Text => FontWeight::Regular,
            _ => FontWeight::Bold,
        }
    }
}

/// Where a resolved face came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontSource {
    File(PathBuf),
    Embedded,
}

/// Ordered candidate font files per weight
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FontCandidates {
    pub regular: Vec<PathBuf>,
    pub bold: Vec<PathBuf>,
}

impl Default for FontCandidates {
    fn default() -> Self {
        Self {
            regular: vec![
                PathBuf::from("/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf"),
                PathBuf::from("/Library/Fonts/Arial.ttf"),
                PathBuf::from("C:\\Windows\\Fonts\\arial.ttf"),
            ],
            bold: vec![
                PathBuf::from("/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf"),
                PathBuf::from("/Library/Fonts/Arial Bold.ttf"),
                PathBuf::from("C:\\Windows\\Fonts\\arialbd.ttf"),
            ],
        }
    }
}

impl FontCandidates {
    /// No candidate files; every request resolves to the embedded faces
    pub fn none() -> Self {
        Self {
            regular: Vec::new(),
            bold: Vec::new(),
        }
    }

    pub fn for_weight(&self, weight: FontWeight) -> &[PathBuf] {
        match weight {
            FontWeight::Regular => &self.regular,
            FontWeight::Bold => &self.bold,
        }
    }
}

/// Return the first candidate for which `load` succeeds
pub fn first_success<C, T>(
    candidates: impl IntoIterator<Item = C>,
    load: impl FnMut(C) -> Option<T>,
) -> Option<T> {
    candidates.into_iter().find_map(load)
}

/// A parsed face at a fixed pixel size
#[derive(Clone)]
pub struct PosterFont {
    face: Font<'static>,
    size_px: f32,
    weight: FontWeight,
    source: FontSource,
}

impl fmt::Debug for PosterFont {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PosterFont")
            .field("size_px", &self.size_px)
            .field("weight", &self.weight)
            .field("source", &self.source)
            .finish()
    }
}

impl PosterFont {
    /// The built-in face for a weight
    pub fn embedded(weight: FontWeight, size_px: f32) -> Result<Self> {
        Ok(Self {
            face: embedded_face(weight)?,
            size_px,
            weight,
            source: FontSource::Embedded,
        })
    }

    /// Resolve a weight against candidate files, falling back to the embedded face
    pub fn resolve(candidates: &[PathBuf], weight: FontWeight, size_px: f32) -> Result<Self> {
        let (face, source) = resolve_face(candidates, weight)?;
        Ok(Self {
            face,
            size_px,
            weight,
            source,
        })
    }

    /// Same face at another size
    pub fn with_size(&self, size_px: f32) -> Self {
        Self {
            size_px,
            ..self.clone()
        }
    }

    pub fn size_px(&self) -> f32 {
        self.size_px
    }

    pub fn weight(&self) -> FontWeight {
        self.weight
    }

    pub fn source(&self) -> &FontSource {
        &self.source
    }

    pub(crate) fn face(&self) -> &Font<'static> {
        &self.face
    }

    /// Glyph scale for the em size.
    ///
    /// rusttype scales by ascent-to-descent height, so the em size is
    /// converted with the face's own vertical metrics.
    pub(crate) fn scale(&self) -> Scale {
        let units_per_em = f32::from(self.face.units_per_em().max(1));
        let v = self.face.v_metrics_unscaled();
        let extent = v.ascent - v.descent;
        if extent <= 0.0 {
            return Scale::uniform(self.size_px);
        }
        Scale::uniform(self.size_px * extent / units_per_em)
    }
}

fn load_face(path: &Path) -> Option<Font<'static>> {
    let bytes = std::fs::read(path).ok()?;
    Font::try_from_vec(bytes)
}

fn embedded_face(weight: FontWeight) -> Result<Font<'static>> {
    let bytes = match weight {
        FontWeight::Regular => EMBEDDED_REGULAR,
        FontWeight::Bold => EMBEDDED_BOLD,
    };
    Font::try_from_bytes(bytes).ok_or_else(|| {
        PosterError::Font(format!("Embedded {} face is not a valid TrueType font", weight))
    })
}

fn resolve_face(candidates: &[PathBuf], weight: FontWeight) -> Result<(Font<'static>, FontSource)> {
    let found = first_success(candidates, |path| {
        load_face(path).map(|face| (face, path.clone()))
    });

    match found {
        Some((face, path)) => {
            debug!("Using {} font {}", weight, path.display());
            Ok((face, FontSource::File(path)))
        }
        None => {
            if !candidates.is_empty() {
                warn!(
                    "None of {} {} font candidates could be loaded; using embedded DejaVu Sans",
                    candidates.len(),
                    weight
                );
            }
            Ok((embedded_face(weight)?, FontSource::Embedded))
        }
    }
}

/// One font per poster role, resolved once per render context.
///
/// Read-only after construction; clones share the parsed faces.
#[derive(Debug, Clone)]
pub struct FontSet {
    pub header: PosterFont,
    pub name: PosterFont,
    pub label: PosterFont,
    pub number: PosterFont,
    pub text: PosterFont,
    pub call: PosterFont,
    pub classification: PosterFont,
}

impl FontSet {
    /// Resolve every role from the configured candidate files
    pub fn resolve(options: &PosterOptions) -> Result<Self> {
        let regular = PosterFont::resolve(
            options.fonts.for_weight(FontWeight::Regular),
            FontWeight::Regular,
            0.0,
        )?;
        let bold = PosterFont::resolve(
            options.fonts.for_weight(FontWeight::Bold),
            FontWeight::Bold,
            0.0,
        )?;
        Ok(Self::from_faces(options, &regular, &bold))
    }

    /// Use the built-in faces only, ignoring configured candidates
    pub fn embedded(options: &PosterOptions) -> Result<Self> {
        let regular = PosterFont::embedded(FontWeight::Regular, 0.0)?;
        let bold = PosterFont::embedded(FontWeight::Bold, 0.0)?;
        Ok(Self::from_faces(options, &regular, &bold))
    }

    fn from_faces(options: &PosterOptions, regular: &PosterFont, bold: &PosterFont) -> Self {
        let sized = |role: FontRole| {
            let base = match role.weight() {
                FontWeight::Regular => regular,
                FontWeight::Bold => bold,
            };
            base.with_size(options.font_sizes.px(role, options.dpi))
        };

        Self {
            header: sized(FontRole::Header),
            name: sized(FontRole::Name),
            label: sized(FontRole::Label),
            number: sized(FontRole::Number),
            text: sized(FontRole::Text),
            call: sized(FontRole::Call),
            classification: sized(FontRole::Classification),
        }
    }

    pub fn get(&self, role: FontRole) -> &PosterFont {
        match role {
            FontRole::Header => &self.header,
            FontRole::Name => &self.name,
            FontRole::Label => &self.label,
            FontRole::Number => &self.number,
            FontRole::Text => &self.text,
            FontRole::Call => &self.call,
            FontRole::Classification => &self.classification,
        }
    }
}
