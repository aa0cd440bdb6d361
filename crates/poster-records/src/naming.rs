use std::path::Path;

/// Appended to the underscored person name in every output file
pub const POSTER_SUFFIX: &str = "_missing_poster";

/// Derive a display name from an image file name.
///
/// `mary-jane_smith.jpg` becomes `Mary Jane Smith`.
pub fn name_from_path(path: impl AsRef<Path>) -> String {
    let stem = path
        .as_ref()
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    title_case(&stem.replace(['_', '-'], " "))
}

/// Uppercase the first letter of every run of letters, lowercase the rest
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_word = false;
    for ch in text.chars() {
        if ch.is_alphabetic() {
            if in_word {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(ch);
            in_word = false;
        }
    }
    out
}

/// `<Name_With_Underscores>_missing_poster.<extension>`
pub fn output_file_name(name: &str, extension: &str) -> String {
    format!(
        "{}{}.{}",
        name.trim().replace(' ', "_"),
        POSTER_SUFFIX,
        extension.trim_start_matches('.')
    )
}
