use gallery_webp_common::ConversionError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Lossy WebP quality on a 0-100 scale. Higher means larger files and
/// better fidelity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Quality(u8);

impl Quality {
    pub const MAX: u8 = 100;

    pub fn new(value: u16) -> Result<Self, ConversionError> {
        if value > u16::from(Self::MAX) {
            return Err(ConversionError::InvalidQuality(value));
        }
        Ok(Self(value as u8))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Quality in the form libwebp expects.
    pub fn as_f32(self) -> f32 {
        f32::from(self.0)
    }
}

impl Default for Quality {
    fn default() -> Self {
        Self(80)
    }
}

impl TryFrom<u16> for Quality {
    type Error = ConversionError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Quality> for u16 {
    fn from(quality: Quality) -> Self {
        u16::from(quality.0)
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ConverterConfig {
    /// Directory tree to scan. Relative paths resolve against the working
    /// directory.
    #[serde(default = "default_root")]
    pub root: PathBuf,

    #[serde(default)]
    pub quality: Quality,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            quality: Quality::default(),
        }
    }
}

fn default_root() -> PathBuf {
    PathBuf::from("src/assets/gallery")
}

impl ConverterConfig {
    pub fn new(root: impl Into<PathBuf>, quality: Quality) -> Self {
        Self {
            root: root.into(),
            quality,
        }
    }

    /// The root joined onto `cwd` when it is relative.
    pub fn resolved_root(&self, cwd: &Path) -> PathBuf {
        if self.root.is_absolute() {
            self.root.clone()
        } else {
            cwd.join(&self.root)
        }
    }
}
