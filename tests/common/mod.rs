//! Shared fixtures for integration tests.
//!
//! Provides image writers for building gallery trees on disk and
//! [`RecordingCodec`], a codec double that records every call so tests can
//! assert on what the converter asked for without running libwebp.

#![allow(dead_code)]

use std::io::Cursor;
use std::path::Path;
use std::sync::Mutex;

use gallery_webp::codec::ImageCodec;
use gallery_webp::config::Quality;
use gallery_webp_common::{ConversionError, Result};
use image::{DynamicImage, ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};

/// Bytes the recording codec refuses to decode.
pub const CORRUPT_MAGIC: &[u8] = b"CORRUPT";

/// Write a small opaque image in the given format, creating parent
/// directories as needed.
pub fn write_image(path: &Path, format: ImageFormat) {
    let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(6, 4, Rgb([40, 120, 200])));
    write_dynamic(path, &img, format);
}

/// Write a small PNG with a translucent alpha channel.
pub fn write_rgba_png(path: &Path) {
    let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(6, 4, Rgba([255, 0, 0, 100])));
    write_dynamic(path, &img, ImageFormat::Png);
}

/// Write bytes that no decoder accepts.
pub fn write_corrupt(path: &Path) {
    ensure_parent(path);
    std::fs::write(path, CORRUPT_MAGIC).expect("failed to write corrupt file");
}

fn write_dynamic(path: &Path, img: &DynamicImage, format: ImageFormat) {
    ensure_parent(path);
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, format).expect("failed to encode fixture");
    std::fs::write(path, buf.into_inner()).expect("failed to write fixture");
}

fn ensure_parent(path: &Path) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("failed to create fixture directory");
    }
}

/// Codec double that records decode/encode calls.
///
/// Decoding fails for data starting with [`CORRUPT_MAGIC`] and succeeds with
/// a 1x1 image otherwise. Encoding returns a fixed WebP-looking header.
#[derive(Default)]
pub struct RecordingCodec {
    decodes: Mutex<usize>,
    encodes: Mutex<Vec<Quality>>,
}

impl RecordingCodec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn decode_calls(&self) -> usize {
        *self.decodes.lock().unwrap()
    }

    /// Qualities passed to `encode`, in call order.
    pub fn encode_qualities(&self) -> Vec<Quality> {
        self.encodes.lock().unwrap().clone()
    }

    pub fn encode_calls(&self) -> usize {
        self.encodes.lock().unwrap().len()
    }
}

impl ImageCodec for RecordingCodec {
    fn name(&self) -> &'static str {
        "recording"
    }

    fn decode(&self, data: &[u8]) -> Result<DynamicImage> {
        *self.decodes.lock().unwrap() += 1;
        if data.starts_with(CORRUPT_MAGIC) {
            return Err(ConversionError::decode("corrupt fixture"));
        }
        Ok(DynamicImage::ImageRgb8(RgbImage::new(1, 1)))
    }

    fn encode(&self, _image: &DynamicImage, quality: Quality) -> Result<Vec<u8>> {
        self.encodes.lock().unwrap().push(quality);
        Ok(b"RIFF\0\0\0\0WEBPVP8 ".to_vec())
    }
}
