//! Brightness and contrast adjustments on straight RGBA8. Alpha is never touched.

use crate::foundation::core::Rgba8Image;
use crate::foundation::error::{MockupError, MockupResult};
use crate::foundation::math::round_u8;

/// One contrast-then-brightness adjustment pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Adjustments {
    pub contrast: f64,
    pub brightness: f64,
}

impl Default for Adjustments {
    fn default() -> Self {
        Self {
            contrast: 1.0,
            brightness: 1.0,
        }
    }
}

impl Adjustments {
    /// Apply contrast, then brightness.
    pub fn apply(self, img: Rgba8Image) -> MockupResult<Rgba8Image> {
        let img = contrast(img, self.contrast)?;
        Ok(brightness(img, self.brightness))
    }
}

/// Scale the HSV value channel by `factor`, clamped to `[0, 255]`.
///
/// Hue and saturation are held fixed, which is the same as scaling R, G and B by the ratio of the
/// new value to the old one. The new value is truncated to an integer before converting back.
pub fn brightness(mut img: Rgba8Image, factor: f64) -> Rgba8Image {
    for px in img.pixels_mut() {
        let [r, g, b, _] = px.0;
        let v = r.max(g).max(b);
        if v == 0 {
            continue;
        }
        let v_new = (f64::from(v) * factor).clamp(0.0, 255.0).floor();
        let ratio = v_new / f64::from(v);
        for c in &mut px.0[..3] {
            *c = round_u8((f64::from(*c) * ratio) as f32);
        }
    }
    img
}

/// Gain for a contrast `factor`; `1.0` maps to a gain of exactly `1.0`.
///
/// Returns `None` when the gain is not finite (the factor lands on the curve's pole).
pub fn contrast_gain(factor: f64) -> Option<f64> {
    let c = factor * 127.0 - 127.0;
    let f = 131.0 * (c + 127.0) / (127.0 * (131.0 - c));
    f.is_finite().then_some(f)
}

/// Push RGB away from (gain > 1) or toward (gain < 1) mid-grey 127.
pub fn contrast(mut img: Rgba8Image, factor: f64) -> MockupResult<Rgba8Image> {
    let f = contrast_gain(factor)
        .ok_or_else(|| MockupError::invalid_config(format!("contrast {factor} has no finite gain")))?;
    let offset = 127.0 * (1.0 - f);
    for px in img.pixels_mut() {
        for c in &mut px.0[..3] {
            *c = round_u8((f * f64::from(*c) + offset) as f32);
        }
    }
    Ok(img)
}

#[cfg(test)]
#[path = "../../tests/unit/effects/adjust.rs"]
mod tests;
