//! Production codec backed by the `image` crate for decoding and libwebp
//! (through the `webp` crate) for lossy encoding.

use gallery_webp_common::{ConversionError, Result};
use image::DynamicImage;
use tracing::trace;

use super::ImageCodec;
use crate::config::Quality;

/// Largest width or height libwebp will encode.
const WEBP_MAX_DIMENSION: u32 = 16383;

/// Decodes PNG/JPEG with `image` and encodes lossy WebP with libwebp.
#[derive(Debug, Clone, Copy, Default)]
pub struct WebpCodec;

impl WebpCodec {
    pub fn new() -> Self {
        Self
    }
}

impl ImageCodec for WebpCodec {
    fn name(&self) -> &'static str {
        "libwebp"
    }

    fn decode(&self, data: &[u8]) -> Result<DynamicImage> {
        // Format is sniffed from the bytes, not the file name.
        image::load_from_memory(data).map_err(|e| ConversionError::decode(e.to_string()))
    }

    fn encode(&self, image: &DynamicImage, quality: Quality) -> Result<Vec<u8>> {
        let (width, height) = (image.width(), image.height());
        if width == 0 || height == 0 {
            return Err(ConversionError::encode("image has no pixels"));
        }
        if width > WEBP_MAX_DIMENSION || height > WEBP_MAX_DIMENSION {
            return Err(ConversionError::encode(format!(
                "{}x{} exceeds the WebP limit of {}x{}",
                width, height, WEBP_MAX_DIMENSION, WEBP_MAX_DIMENSION
            )));
        }

        trace!(
            width,
            height,
            color = ?image.color(),
            quality = quality.value(),
            "Encoding WebP"
        );

        // libwebp takes 8-bit RGB or RGBA only. Other layouts are converted
        // to whichever of the two keeps their alpha channel.
        let memory = match image {
            DynamicImage::ImageRgba8(buf) => {
                webp::Encoder::from_rgba(buf.as_raw(), width, height)
                    .encode_simple(false, quality.as_f32())
            }
            DynamicImage::ImageRgb8(buf) => {
                webp::Encoder::from_rgb(buf.as_raw(), width, height)
                    .encode_simple(false, quality.as_f32())
            }
            other if other.color().has_alpha() => {
                let buf = other.to_rgba8();
                webp::Encoder::from_rgba(buf.as_raw(), width, height)
                    .encode_simple(false, quality.as_f32())
            }
            other => {
                let buf = other.to_rgb8();
                webp::Encoder::from_rgb(buf.as_raw(), width, height)
                    .encode_simple(false, quality.as_f32())
            }
        }
        .map_err(|e| ConversionError::encode(format!("{:?}", e)))?;

        Ok(memory.to_vec())
    }
}
