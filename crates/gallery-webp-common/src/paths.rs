//! Path rules for deciding what gets converted and where it lands.
//!
//! A source is any file with a PNG or JPEG extension (case-insensitive). Its
//! output is the sibling file with the extension swapped for `webp`. The
//! existence of that sibling is the only record that a source was converted.

use std::path::{Path, PathBuf};

/// Extensions of files that get converted.
const CONVERTIBLE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

/// Extension of the converted output.
pub const TARGET_EXTENSION: &str = "webp";

/// Check if a path has a convertible image extension.
///
/// The check is a suffix match on the file name, so a dotfile named exactly
/// `.png` counts as well.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use gallery_webp_common::paths::is_convertible_image;
///
/// assert!(is_convertible_image(Path::new("photo.png")));
/// assert!(is_convertible_image(Path::new("/gallery/photo.JPEG")));
/// assert!(!is_convertible_image(Path::new("animation.gif")));
/// ```
pub fn is_convertible_image(path: &Path) -> bool {
    let Some(name) = path.file_name() else {
        return false;
    };
    let name = name.to_string_lossy().to_lowercase();
    CONVERTIBLE_EXTENSIONS
        .iter()
        .any(|ext| name.strip_suffix(*ext).is_some_and(|stem| stem.ends_with('.')))
}

/// Get the list of convertible extensions.
///
/// # Examples
///
/// ```
/// use gallery_webp_common::paths::convertible_extensions;
///
/// let extensions = convertible_extensions();
/// assert!(extensions.contains(&"png"));
/// assert!(extensions.contains(&"jpeg"));
/// ```
#[must_use]
pub fn convertible_extensions() -> &'static [&'static str] {
    CONVERTIBLE_EXTENSIONS
}

/// Derive the output path for a source image.
///
/// Only the final extension is replaced, so the output stays in the same
/// directory as the source.
///
/// # Examples
///
/// ```
/// use std::path::{Path, PathBuf};
/// use gallery_webp_common::paths::output_path_for;
///
/// assert_eq!(
///     output_path_for(Path::new("gallery/2024/beach.PNG")),
///     PathBuf::from("gallery/2024/beach.webp"),
/// );
/// ```
#[must_use]
pub fn output_path_for(path: &Path) -> PathBuf {
    path.with_extension(TARGET_EXTENSION)
}
