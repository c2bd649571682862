//! Gallery-WebP - Batch PNG/JPEG to WebP conversion for a gallery tree
//!
//! This library crate exposes the core functionality for integration testing.

pub mod codec;
pub mod config;
pub mod converter;
