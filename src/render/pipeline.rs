use image::DynamicImage;

use crate::assets::normalize::normalize_rgba8;
use crate::effects::adjust::{Adjustments, contrast_gain};
use crate::effects::blur::soften;
use crate::effects::composite::composite_over;
use crate::effects::crop::rotate_ccw;
use crate::effects::mask::mask_screenshot;
use crate::foundation::core::{AspectRatioMismatch, Rgba8Image};
use crate::foundation::error::{MockupError, MockupResult};
use crate::render::resize::{finish_output, upscale_for_warp};
use crate::template::model::TemplateDescriptor;
use crate::warp::perspective::warp_perspective;

/// Per-invocation render settings.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RenderConfig {
    /// Center-crop the screenshot to the screen's aspect ratio instead of stretching it.
    #[serde(default)]
    pub crop: bool,
    /// Quarter turns counter-clockwise applied to the screenshot first; reduced modulo 4.
    #[serde(default)]
    pub rotate: i32,
    /// Brightness multiplier applied after the template's own adjustments; `0` skips it.
    #[serde(default = "default_factor")]
    pub brightness: f64,
    /// Contrast multiplier applied after the template's own adjustments; `0` skips it.
    #[serde(default = "default_factor")]
    pub contrast: f64,
    /// Final image width; height follows the base photo's aspect ratio.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_width: Option<u32>,
}

fn default_factor() -> f64 {
    1.0
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            crop: false,
            rotate: 0,
            brightness: 1.0,
            contrast: 1.0,
            output_width: None,
        }
    }
}

impl RenderConfig {
    /// Brightness and contrast must be finite and non-negative; `0` skips that adjustment.
    pub fn validate(&self) -> MockupResult<()> {
        if !self.brightness.is_finite() || self.brightness < 0.0 {
            return Err(MockupError::invalid_config(format!(
                "brightness must be >= 0, got {}",
                self.brightness
            )));
        }
        if !self.contrast.is_finite()
            || self.contrast < 0.0
            || contrast_gain(self.contrast).is_none()
        {
            return Err(MockupError::invalid_config(format!(
                "contrast must be >= 0 with a finite gain, got {}",
                self.contrast
            )));
        }
        if self.output_width == Some(0) {
            return Err(MockupError::invalid_config("output width must be > 0"));
        }
        Ok(())
    }

    fn adjustments(&self) -> Adjustments {
        let or_skip = |factor: f64| if factor == 0.0 { 1.0 } else { factor };
        Adjustments {
            contrast: or_skip(self.contrast),
            brightness: or_skip(self.brightness),
        }
    }
}

/// Result of a render: the finished mockup plus any non-fatal warnings.
#[derive(Clone, Debug)]
pub struct RenderOutput {
    pub image: Rgba8Image,
    pub warnings: Vec<AspectRatioMismatch>,
}

/// Composite `screenshot` into the template's device photo.
///
/// `base` is the decoded device photo and `mask` the normalized mask image for templates that
/// declare one. The stages run in a fixed order:
///
/// 1. normalize both buffers to RGBA8 and rotate the screenshot
/// 2. upscale the device photo (output width, then the fixed 4x warp supersampling)
/// 3. template contrast/brightness, then the caller's contrast/brightness
/// 4. crop (optional) and mask the screenshot
/// 5. warp onto the scaled screen quad and soften the edges
/// 6. composite, undo the supersampling, fit the output width
#[tracing::instrument(skip_all, fields(template = %template.name))]
pub fn render_mockup(
    screenshot: DynamicImage,
    base: DynamicImage,
    mask: Option<&Rgba8Image>,
    template: &TemplateDescriptor,
    config: &RenderConfig,
) -> MockupResult<RenderOutput> {
    config.validate()?;

    let screenshot = normalize_rgba8(screenshot)?;
    let base = normalize_rgba8(base)?;
    let screenshot = rotate_ccw(screenshot, config.rotate);

    let (base, upscale) = upscale_for_warp(base, config.output_width)?;

    let template_pass = Adjustments {
        contrast: template.contrast,
        brightness: template.brightness,
    };
    let screenshot = template_pass.apply(screenshot)?;
    let screenshot = config.adjustments().apply(screenshot)?;

    let masked = mask_screenshot(screenshot, &template.mask, mask, config.crop)?;

    let quad = template.screen_points.scaled(upscale);
    let warped = warp_perspective(&masked.image, &quad, base.width(), base.height())?;
    let warped = soften(warped)?;

    let composed = composite_over(base, &warped)?;
    let image = finish_output(composed, config.output_width)?;
    tracing::debug!(
        width = image.width(),
        height = image.height(),
        "mockup rendered"
    );

    Ok(RenderOutput {
        image,
        warnings: masked.warning.into_iter().collect(),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
