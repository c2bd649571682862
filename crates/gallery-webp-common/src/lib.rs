//! Gallery-WebP-Common: Shared error type and path rules.
//!
//! This crate provides the pieces of gallery-webp that do not depend on an
//! image codec:
//!
//! - **Path Rules**: Which files are convertible, and where their output goes
//! - **Error Handling**: The per-file conversion error and result alias
//!
//! # Examples
//!
//! ```
//! use gallery_webp_common::paths::{is_convertible_image, output_path_for};
//! use gallery_webp_common::{ConversionError, Result};
//! use std::path::{Path, PathBuf};
//!
//! // Check file types
//! assert!(is_convertible_image(Path::new("holiday.JPG")));
//!
//! // Derive the sibling output path
//! assert_eq!(output_path_for(Path::new("holiday.JPG")), PathBuf::from("holiday.webp"));
//!
//! fn example() -> Result<()> {
//!     Err(ConversionError::decode("not an image"))
//! }
//! ```

pub mod error;
pub mod paths;

pub use error::{ConversionError, Result};
