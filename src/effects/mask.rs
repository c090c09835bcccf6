use crate::effects::crop::center_crop;
use crate::foundation::core::{AspectRatioMismatch, Rgba8Image};
use crate::foundation::error::{MockupError, MockupResult};
use crate::render::resize::{Interpolation, resize_exact};
use crate::template::model::MaskSpec;

/// Screenshot ready for warping, plus any stretch warning raised while preparing it.
#[derive(Clone, Debug)]
pub struct MaskedScreen {
    pub image: Rgba8Image,
    pub warning: Option<AspectRatioMismatch>,
}

/// Replace the screenshot's alpha with the mask's, stretching the mask to fit.
pub fn apply_mask(mut screenshot: Rgba8Image, mask: &Rgba8Image) -> MockupResult<Rgba8Image> {
    let (w, h) = screenshot.dimensions();
    let fitted = resize_exact(mask, w, h, Interpolation::Bilinear)?;
    for (dst, src) in screenshot.pixels_mut().zip(fitted.pixels()) {
        dst.0[3] = src.0[3];
    }
    Ok(screenshot)
}

/// Crop (optionally) and mask the screenshot for the template's screen.
///
/// `mask` must be present exactly when the template uses [`MaskSpec::ExplicitMask`]. The stretch
/// check compares the screenshot as it will be warped against the mask's (or declared) ratio.
pub fn mask_screenshot(
    screenshot: Rgba8Image,
    spec: &MaskSpec,
    mask: Option<&Rgba8Image>,
    crop: bool,
) -> MockupResult<MaskedScreen> {
    let (mask, target_ratio) = match (spec, mask) {
        (MaskSpec::ExplicitMask { .. }, Some(mask)) => (Some(mask), ratio_of(mask)?),
        (MaskSpec::AspectRatioOnly { ratio }, None) => (None, *ratio),
        (MaskSpec::ExplicitMask { path }, None) => {
            return Err(MockupError::invalid_template(format!(
                "mask '{path}' was not loaded"
            )));
        }
        (MaskSpec::AspectRatioOnly { .. }, Some(_)) => {
            return Err(MockupError::invalid_template(
                "mask image supplied for an aspect-ratio-only template",
            ));
        }
    };

    let screenshot = if crop {
        center_crop(screenshot, target_ratio)
    } else {
        screenshot
    };

    let warning = AspectRatioMismatch::check(ratio_of(&screenshot)?, target_ratio);
    if let Some(w) = &warning {
        tracing::warn!(
            screenshot_ratio = w.screenshot_ratio,
            target_ratio = w.target_ratio,
            "screenshot stretched significantly to fit the template; crop to avoid this"
        );
    }

    let image = match mask {
        Some(mask) => apply_mask(screenshot, mask)?,
        None => screenshot,
    };
    Ok(MaskedScreen { image, warning })
}

fn ratio_of(img: &Rgba8Image) -> MockupResult<f64> {
    let (w, h) = img.dimensions();
    if w == 0 || h == 0 {
        return Err(MockupError::unsupported_format(format!(
            "empty {w}x{h} image"
        )));
    }
    Ok(f64::from(w) / f64::from(h))
}

#[cfg(test)]
#[path = "../../tests/unit/effects/mask.rs"]
mod tests;
