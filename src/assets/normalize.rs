use image::{DynamicImage, ImageBuffer, RgbImage};

use crate::foundation::core::Rgba8Image;
use crate::foundation::error::{MockupError, MockupResult};

/// Coerce a decoded image to 8-bit RGBA.
///
/// 16-bit samples are rescaled by dropping the low byte and three-channel images gain an opaque
/// alpha channel. Anything that is not 3 or 4 channels afterwards (grey, grey+alpha, float) is
/// rejected.
pub fn normalize_rgba8(img: DynamicImage) -> MockupResult<Rgba8Image> {
    let (width, height) = (img.width(), img.height());
    let mismatch = || {
        MockupError::unsupported_format(format!(
            "normalized buffer does not match {width}x{height}"
        ))
    };
    match img {
        DynamicImage::ImageRgba8(buf) => Ok(buf),
        DynamicImage::ImageRgb8(buf) => Ok(DynamicImage::ImageRgb8(buf).into_rgba8()),
        DynamicImage::ImageRgba16(buf) => {
            ImageBuffer::from_raw(width, height, depth_16_to_8(buf.as_raw())).ok_or_else(mismatch)
        }
        DynamicImage::ImageRgb16(buf) => {
            let rgb: RgbImage = ImageBuffer::from_raw(width, height, depth_16_to_8(buf.as_raw()))
                .ok_or_else(mismatch)?;
            Ok(DynamicImage::ImageRgb8(rgb).into_rgba8())
        }
        other => Err(MockupError::unsupported_format(format!(
            "expected 3 or 4 channels at 8 or 16 bits per sample, got {:?}",
            other.color()
        ))),
    }
}

/// Keep the high byte; `image`'s own conversion rounds instead.
fn depth_16_to_8(samples: &[u16]) -> Vec<u8> {
    samples.iter().map(|&v| (v >> 8) as u8).collect()
}

#[cfg(test)]
#[path = "../../tests/unit/assets/normalize.rs"]
mod tests;
