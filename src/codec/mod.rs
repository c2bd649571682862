//! Image codec seam.
//!
//! The converter never touches pixels itself. It hands source bytes to an
//! [`ImageCodec`] for decoding and gets WebP bytes back from it. The
//! production implementation is [`WebpCodec`]; tests substitute recording
//! doubles.

mod webp_codec;

pub use webp_codec::WebpCodec;

use gallery_webp_common::Result;
use image::DynamicImage;

use crate::config::Quality;

/// A decoder/encoder pair used to turn a source image into WebP.
///
/// Implementations must be safe to share across threads (`Send + Sync`).
pub trait ImageCodec: Send + Sync {
    /// Human-readable name identifying this codec implementation.
    fn name(&self) -> &'static str;

    /// Decode raw file bytes into a pixel buffer.
    ///
    /// The returned image carries its own color layout, so callers can ask
    /// it whether an alpha channel is present.
    fn decode(&self, data: &[u8]) -> Result<DynamicImage>;

    /// Encode a pixel buffer as lossy WebP at the given quality.
    fn encode(&self, image: &DynamicImage, quality: Quality) -> Result<Vec<u8>>;
}

impl<C: ImageCodec + ?Sized> ImageCodec for &C {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn decode(&self, data: &[u8]) -> Result<DynamicImage> {
        (**self).decode(data)
    }

    fn encode(&self, image: &DynamicImage, quality: Quality) -> Result<Vec<u8>> {
        (**self).encode(image, quality)
    }
}
