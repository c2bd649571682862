//! Per-file outcomes collected over one batch run.

use gallery_webp_common::ConversionError;
use std::path::{Path, PathBuf};

/// What happened to a single source image.
#[derive(Debug)]
pub enum FileOutcome {
    /// A new WebP file was written.
    Converted { output: PathBuf },
    /// The WebP sibling already existed; nothing was done.
    Skipped { output: PathBuf },
    /// Dry run: the file would have been converted.
    Planned { output: PathBuf },
    /// Decoding, encoding or I/O failed for this file.
    Failed(ConversionError),
}

impl FileOutcome {
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

#[derive(Debug)]
pub struct FileReport {
    pub source: PathBuf,
    pub outcome: FileOutcome,
}

/// Result of one pass over the root directory.
#[derive(Debug)]
pub struct BatchReport {
    pub root: PathBuf,
    /// The root did not exist and was created by this run.
    pub root_created: bool,
    pub files: Vec<FileReport>,
}

impl BatchReport {
    pub fn new(root: PathBuf, root_created: bool) -> Self {
        Self {
            root,
            root_created,
            files: Vec::new(),
        }
    }

    pub fn record(&mut self, source: PathBuf, outcome: FileOutcome) {
        self.files.push(FileReport { source, outcome });
    }

    pub fn converted(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::Converted { .. }))
    }

    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::Skipped { .. }))
    }

    pub fn planned(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::Planned { .. }))
    }

    pub fn failed(&self) -> usize {
        self.count(FileOutcome::is_failed)
    }

    /// Sources that failed, with the reason.
    pub fn failures(&self) -> impl Iterator<Item = (&Path, &ConversionError)> {
        self.files.iter().filter_map(|f| match &f.outcome {
            FileOutcome::Failed(err) => Some((f.source.as_path(), err)),
            _ => None,
        })
    }

    /// Look up the outcome recorded for a source path.
    pub fn outcome_for(&self, source: &Path) -> Option<&FileOutcome> {
        self.files
            .iter()
            .find(|f| f.source == source)
            .map(|f| &f.outcome)
    }

    fn count(&self, pred: impl Fn(&FileOutcome) -> bool) -> usize {
        self.files.iter().filter(|f| pred(&f.outcome)).count()
    }
}
