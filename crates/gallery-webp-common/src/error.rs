//! Error type for a single file conversion.
//!
//! Every failure that can happen while turning one source image into its
//! WebP sibling is represented here. The converter records these per file
//! and never lets one abort the batch.

use std::path::PathBuf;

/// Failure converting one source image.
#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    /// The source file could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The codec could not decode the source bytes.
    #[error("Decode error: {0}")]
    Decode(String),

    /// The codec could not encode the decoded pixels.
    #[error("Encode error: {0}")]
    Encode(String),

    /// The output file could not be written.
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A quality value outside 0..=100 was supplied.
    #[error("Invalid quality {0}: must be between 0 and 100")]
    InvalidQuality(u16),
}

impl ConversionError {
    /// Create a new Read error.
    pub fn read<P: Into<PathBuf>>(path: P, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    /// Create a new Decode error.
    pub fn decode<S: Into<String>>(msg: S) -> Self {
        Self::Decode(msg.into())
    }

    /// Create a new Encode error.
    pub fn encode<S: Into<String>>(msg: S) -> Self {
        Self::Encode(msg.into())
    }

    /// Create a new Write error.
    pub fn write<P: Into<PathBuf>>(path: P, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias using the conversion error.
pub type Result<T> = std::result::Result<T, ConversionError>;
