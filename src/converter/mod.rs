//! Batch conversion of a gallery tree to WebP.
//!
//! This module walks the configured root, converts every PNG/JPEG that does
//! not yet have a WebP sibling, and reports what happened to each file.
//! A failure on one file is recorded and the batch moves on; only an
//! inaccessible root stops a run.

pub mod discover;
pub mod report;

use anyhow::{Context, Result};
use gallery_webp_common::ConversionError;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

use crate::codec::ImageCodec;
use crate::config::ConverterConfig;

pub use discover::{discover, ImageCandidate};
pub use report::{BatchReport, FileOutcome, FileReport};

/// Converts every PNG/JPEG under a root directory to WebP, in place.
pub struct Converter<C> {
    config: ConverterConfig,
    codec: C,
    dry_run: bool,
}

impl<C: ImageCodec> Converter<C> {
    pub fn new(config: ConverterConfig, codec: C) -> Self {
        Self {
            config,
            codec,
            dry_run: false,
        }
    }

    /// Only report what would be converted. Nothing is written, and a
    /// missing root is not created.
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// Run one pass over the root directory.
    ///
    /// Relative roots resolve against the process working directory.
    pub fn run(&self) -> Result<BatchReport> {
        let cwd = std::env::current_dir().context("Failed to determine working directory")?;
        self.run_in(&cwd)
    }

    /// Run one pass with relative roots resolved against `cwd`.
    pub fn run_in(&self, cwd: &Path) -> Result<BatchReport> {
        let root = self.config.resolved_root(cwd);
        let root_created = match self.prepare_root(&root)? {
            RootState::Ready { created } => created,
            RootState::Missing => return Ok(BatchReport::new(root, false)),
        };

        info!("Scanning: {}", root.display());
        debug!(
            "Using codec {} at quality {}",
            self.codec.name(),
            self.config.quality
        );

        let mut report = BatchReport::new(root.clone(), root_created);
        for candidate in discover(&root) {
            let outcome = self.process(&root, &candidate);
            report.record(candidate.source, outcome);
        }

        if self.dry_run {
            info!(
                "Dry run complete: {} to convert, {} already converted",
                report.planned(),
                report.skipped()
            );
        } else {
            info!(
                "Done: {} converted, {} skipped, {} failed",
                report.converted(),
                report.skipped(),
                report.failed()
            );
        }

        Ok(report)
    }

    /// Convert one source file and write the WebP result to `output`.
    ///
    /// The source is read fully and its handle closed before decoding. The
    /// output is written to a temporary file in the same directory and then
    /// renamed into place, so an interrupted run never leaves a partial
    /// output that a later run would treat as finished.
    pub fn convert_file(&self, source: &Path, output: &Path) -> Result<(), ConversionError> {
        let data = std::fs::read(source).map_err(|e| ConversionError::read(source, e))?;
        let image = self.codec.decode(&data)?;
        drop(data);

        let encoded = self.codec.encode(&image, self.config.quality)?;
        write_atomically(source, output, &encoded)
    }

    fn process(&self, root: &Path, candidate: &ImageCandidate) -> FileOutcome {
        let name = display_name(root, &candidate.source);

        if candidate.is_converted() {
            debug!("Already converted: {}", name);
            return FileOutcome::Skipped {
                output: candidate.output.clone(),
            };
        }

        if self.dry_run {
            info!("Would convert: {} -> .webp", name);
            return FileOutcome::Planned {
                output: candidate.output.clone(),
            };
        }

        match self.convert_file(&candidate.source, &candidate.output) {
            Ok(()) => {
                info!("Converted: {} -> .webp", name);
                FileOutcome::Converted {
                    output: candidate.output.clone(),
                }
            }
            Err(e) => {
                warn!("Failed: {} - {}", name, e);
                FileOutcome::Failed(e)
            }
        }
    }

    fn prepare_root(&self, root: &Path) -> Result<RootState> {
        if root.is_dir() {
            return Ok(RootState::Ready { created: false });
        }
        if root.exists() {
            anyhow::bail!("Root is not a directory: {}", root.display());
        }

        warn!("Directory not found: {}", root.display());
        if self.dry_run {
            return Ok(RootState::Missing);
        }

        std::fs::create_dir_all(root)
            .with_context(|| format!("Failed to create root directory: {}", root.display()))?;
        info!("Created empty directory: {}", root.display());
        Ok(RootState::Ready { created: true })
    }
}

enum RootState {
    Ready { created: bool },
    Missing,
}

/// Path relative to the root for log lines, or the full path if it is not
/// under the root.
fn display_name(root: &Path, source: &Path) -> String {
    source
        .strip_prefix(root)
        .unwrap_or(source)
        .display()
        .to_string()
}

fn write_atomically(source: &Path, output: &Path, data: &[u8]) -> Result<(), ConversionError> {
    let dir = output
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let write_err = |e| ConversionError::write(output, e);

    let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
    tmp.write_all(data).map_err(write_err)?;
    tmp.as_file().sync_all().map_err(write_err)?;

    // Temp files are created 0600; give the output the source's permissions.
    let permissions = std::fs::metadata(source).map_err(write_err)?.permissions();
    std::fs::set_permissions(tmp.path(), permissions).map_err(write_err)?;

    tmp.persist(output).map_err(|e| write_err(e.error))?;
    Ok(())
}
