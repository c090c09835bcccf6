use std::path::Path;

use image::DynamicImage;

use crate::assets::normalize::normalize_rgba8;
use crate::foundation::core::Rgba8Image;
use crate::foundation::error::{MockupError, MockupResult};

/// Decode encoded image bytes, keeping the source depth and channel layout.
pub fn decode_image(bytes: &[u8]) -> MockupResult<DynamicImage> {
    image::load_from_memory(bytes)
        .map_err(|e| MockupError::decode_failure(format!("decode image from memory: {e}")))
}

/// Open and decode an image file, keeping the source depth and channel layout.
pub fn open_image(path: impl AsRef<Path>) -> MockupResult<DynamicImage> {
    let path = path.as_ref();
    image::open(path).map_err(|e| {
        MockupError::decode_failure(format!("'{}' not found or invalid: {e}", path.display()))
    })
}

/// Open a template mask and normalize it to RGBA8.
///
/// A mask that cannot be read is a broken template rather than bad user input, so every failure
/// is reported as [`MockupError::InvalidTemplateAsset`].
pub fn load_mask(path: impl AsRef<Path>) -> MockupResult<Rgba8Image> {
    let path = path.as_ref();
    let decoded = open_image(path).map_err(|e| {
        MockupError::invalid_template(format!("mask '{}' is unusable: {e}", path.display()))
    })?;
    normalize_rgba8(decoded).map_err(|e| {
        MockupError::invalid_template(format!("mask '{}' is unusable: {e}", path.display()))
    })
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
