use image::imageops;

use crate::foundation::core::Rgba8Image;

/// Crop the largest centered window with width / height equal to `target_ratio`.
///
/// Window bounds are truncated toward zero, so the result can be one pixel off the exact ratio.
pub fn center_crop(img: Rgba8Image, target_ratio: f64) -> Rgba8Image {
    let (w, h) = img.dimensions();
    if w == 0 || h == 0 || !target_ratio.is_finite() || target_ratio <= 0.0 {
        return img;
    }
    let (wf, hf) = (f64::from(w), f64::from(h));
    let image_ratio = wf / hf;
    if target_ratio == image_ratio {
        return img;
    }

    let (crop_w, crop_h) = if target_ratio > image_ratio {
        (wf, wf / target_ratio)
    } else {
        (hf * target_ratio, hf)
    };
    let (cx, cy) = (wf / 2.0, hf / 2.0);
    let span = |center: f64, extent: f64, limit: u32| {
        let lo = ((center - extent / 2.0) as u32).min(limit - 1);
        let hi = ((center + extent / 2.0) as u32).clamp(lo + 1, limit);
        (lo, hi - lo)
    };
    let (x, cw) = span(cx, crop_w, w);
    let (y, ch) = span(cy, crop_h, h);

    tracing::debug!(from_w = w, from_h = h, to_w = cw, to_h = ch, "center crop");
    imageops::crop_imm(&img, x, y, cw, ch).to_image()
}

/// Rotate by `turns` quarter turns counter-clockwise; any integer is reduced modulo 4.
pub fn rotate_ccw(img: Rgba8Image, turns: i32) -> Rgba8Image {
    (0..turns.rem_euclid(4)).fold(img, |img, _| imageops::rotate270(&img))
}

#[cfg(test)]
#[path = "../../tests/unit/effects/crop.rs"]
mod tests;
