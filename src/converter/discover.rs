//! Enumeration of convertible images under a root directory.

use gallery_webp_common::paths::{is_convertible_image, output_path_for};
use std::path::{Path, PathBuf};
use tracing::warn;
use walkdir::{DirEntry, WalkDir};

/// A source image and the path its WebP sibling would occupy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageCandidate {
    pub source: PathBuf,
    pub output: PathBuf,
}

impl ImageCandidate {
    pub fn new(source: PathBuf) -> Self {
        let output = output_path_for(&source);
        Self { source, output }
    }

    /// Whether the output already exists, meaning this source was converted
    /// by an earlier run.
    pub fn is_converted(&self) -> bool {
        self.output.exists()
    }
}

/// Walk `root` recursively and yield every regular file with a convertible
/// extension.
///
/// Entries within a directory are visited in file-name order, so the
/// sequence is deterministic for a given tree. Symlinked directories are
/// not descended into; symlinks to regular files are yielded like the files
/// themselves. Entries that cannot be read are logged and skipped.
pub fn discover(root: &Path) -> impl Iterator<Item = ImageCandidate> {
    WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!("Skipping unreadable entry: {}", e);
                None
            }
        })
        .filter(is_regular_file)
        .filter(|entry| is_convertible_image(entry.path()))
        .map(|entry| ImageCandidate::new(entry.into_path()))
}

/// A regular file, or a symlink whose target is one.
fn is_regular_file(entry: &DirEntry) -> bool {
    entry.file_type().is_file() || (entry.path_is_symlink() && entry.path().is_file())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn touch(path: &Path) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, b"x").unwrap();
    }

    #[test]
    fn test_discover_filters_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("a.PNG"));
        touch(&dir.path().join("b.jpg"));
        touch(&dir.path().join("c.gif"));
        touch(&dir.path().join("d.webp"));
        touch(&dir.path().join("notes.txt"));

        let mut names: Vec<String> = discover(dir.path())
            .map(|c| c.source.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        names.sort();
        assert_eq!(names, vec!["a.PNG", "b.jpg"]);
    }

    #[test]
    fn test_discover_recurses() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("one/two/three/deep.jpeg");
        touch(&nested);

        let found: Vec<ImageCandidate> = discover(dir.path()).collect();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].source, nested);
        assert_eq!(found[0].output, dir.path().join("one/two/three/deep.webp"));
    }

    #[test]
    fn test_discover_skips_directories_named_like_images() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("album.png")).unwrap();
        touch(&dir.path().join("album.png/inner.png"));

        let found: Vec<ImageCandidate> = discover(dir.path()).collect();
        assert_eq!(found.len(), 1);
        assert!(found[0].source.ends_with("album.png/inner.png"));
    }

    #[test]
    fn test_discover_is_sorted_within_directory() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("c.png"));
        touch(&dir.path().join("a.png"));
        touch(&dir.path().join("b.png"));

        let names: Vec<String> = discover(dir.path())
            .map(|c| c.source.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.png", "b.png", "c.png"]);
    }

    #[test]
    fn test_candidate_is_converted() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("photo.png");
        touch(&source);

        let candidate = ImageCandidate::new(source);
        assert!(!candidate.is_converted());

        touch(&dir.path().join("photo.webp"));
        assert!(candidate.is_converted());
    }

    #[cfg(unix)]
    #[test]
    fn test_discover_follows_file_symlinks() {
        let store = tempfile::tempdir().unwrap();
        let target = store.path().join("real.png");
        touch(&target);

        let dir = tempfile::tempdir().unwrap();
        let link = dir.path().join("link.png");
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let found: Vec<ImageCandidate> = discover(dir.path()).collect();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].source, link);
        assert_eq!(found[0].output, dir.path().join("link.webp"));
    }

    #[cfg(unix)]
    #[test]
    fn test_discover_skips_dangling_and_directory_symlinks() {
        let store = tempfile::tempdir().unwrap();
        touch(&store.path().join("album/inside.png"));

        let dir = tempfile::tempdir().unwrap();
        std::os::unix::fs::symlink(store.path().join("album"), dir.path().join("album"))
            .unwrap();
        std::os::unix::fs::symlink(store.path().join("gone.png"), dir.path().join("gone.png"))
            .unwrap();
        // Points back at the root; must not loop.
        std::os::unix::fs::symlink(dir.path(), dir.path().join("again")).unwrap();
        touch(&dir.path().join("kept.png"));

        let found: Vec<ImageCandidate> = discover(dir.path()).collect();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].source, dir.path().join("kept.png"));
    }

    #[test]
    fn test_discover_empty_root() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(discover(dir.path()).count(), 0);
    }
}
