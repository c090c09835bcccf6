use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use image::ImageFormat;
use image::codecs::jpeg::JpegEncoder;

use crate::foundation::core::Rgba8Image;
use crate::foundation::error::{MockupError, MockupResult};

/// File written when no output path is given.
pub const DEFAULT_OUTPUT: &str = "mockup.png";

const JPEG_QUALITY: u8 = 100;

/// Where a mockup will be written and in which format.
///
/// No path means [`DEFAULT_OUTPUT`]; a path without an extension gets `.png` appended; otherwise
/// the extension picks the encoder.
pub fn resolve_output(output: Option<&Path>) -> MockupResult<(PathBuf, ImageFormat)> {
    let Some(path) = output else {
        return Ok((PathBuf::from(DEFAULT_OUTPUT), ImageFormat::Png));
    };
    match path.extension().and_then(|e| e.to_str()) {
        None | Some("") => {
            let mut with_ext = path.as_os_str().to_owned();
            with_ext.push(".png");
            Ok((PathBuf::from(with_ext), ImageFormat::Png))
        }
        Some(ext) => {
            let format = ImageFormat::from_extension(ext).ok_or_else(|| {
                MockupError::invalid_config(format!("invalid output file extension \"{ext}\""))
            })?;
            Ok((path.to_path_buf(), format))
        }
    }
}

/// Encode the finished mockup and return the path actually written.
///
/// JPEG output drops alpha and is written at maximum quality.
pub fn save_image(img: &Rgba8Image, output: Option<&Path>) -> MockupResult<PathBuf> {
    let (path, format) = resolve_output(output)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    match format {
        ImageFormat::Jpeg => {
            let rgb = image::DynamicImage::ImageRgba8(img.clone()).to_rgb8();
            let f = File::create(&path)
                .with_context(|| format!("create '{}'", path.display()))?;
            let encoder = JpegEncoder::new_with_quality(BufWriter::new(f), JPEG_QUALITY);
            rgb.write_with_encoder(encoder)
                .with_context(|| format!("write jpeg '{}'", path.display()))?;
        }
        other => {
            img.save_with_format(&path, other)
                .with_context(|| format!("write {other:?} '{}'", path.display()))?;
        }
    }
    tracing::debug!(path = %path.display(), ?format, "mockup saved");
    Ok(path)
}

#[cfg(test)]
#[path = "../../tests/unit/encode/save.rs"]
mod tests;
