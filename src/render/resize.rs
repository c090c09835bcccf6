use fast_image_resize as fr;

use crate::foundation::core::Rgba8Image;
use crate::foundation::error::{MockupError, MockupResult};
use crate::foundation::math::scaled_dim;

/// Fixed supersampling applied to the base photo before the perspective warp.
pub const WARP_SUPERSAMPLE: f64 = 4.0;

/// Resampling kernel used for a resize.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Interpolation {
    /// Two-tap linear; used to fit masks to the screenshot.
    Bilinear,
    /// Catmull-Rom cubic; used for upscales.
    Cubic,
    /// Box averaging over the covered source area; used for downscales.
    Area,
}

impl Interpolation {
    fn resize_alg(self) -> fr::ResizeAlg {
        match self {
            Self::Bilinear => fr::ResizeAlg::Convolution(fr::FilterType::Bilinear),
            Self::Cubic => fr::ResizeAlg::Convolution(fr::FilterType::CatmullRom),
            Self::Area => fr::ResizeAlg::Convolution(fr::FilterType::Box),
        }
    }
}

/// Resize to exactly `width` x `height`, treating alpha as an ordinary channel.
pub fn resize_exact(
    img: &Rgba8Image,
    width: u32,
    height: u32,
    interp: Interpolation,
) -> MockupResult<Rgba8Image> {
    if width == 0 || height == 0 {
        return Err(MockupError::invalid_config(format!(
            "cannot resize to {width}x{height}"
        )));
    }
    let (src_w, src_h) = img.dimensions();
    if (src_w, src_h) == (width, height) {
        return Ok(img.clone());
    }

    let src = fr::images::ImageRef::new(src_w, src_h, img.as_raw(), fr::PixelType::U8x4)
        .map_err(|e| anyhow::anyhow!("wrap {src_w}x{src_h} source for resize: {e}"))?;
    let mut dst = fr::images::Image::new(width, height, fr::PixelType::U8x4);

    let options = fr::ResizeOptions::new()
        .resize_alg(interp.resize_alg())
        .use_alpha(false);
    let mut resizer = fr::Resizer::new();
    resizer
        .resize(&src, &mut dst, &options)
        .map_err(|e| anyhow::anyhow!("resize {src_w}x{src_h} -> {width}x{height}: {e}"))?;

    Rgba8Image::from_raw(width, height, dst.into_vec()).ok_or_else(|| {
        MockupError::Other(anyhow::anyhow!(
            "resized buffer does not match {width}x{height}"
        ))
    })
}

/// Scale both axes by `factor`; each side is rounded to the nearest pixel.
pub fn resize_by(img: &Rgba8Image, factor: f64, interp: Interpolation) -> MockupResult<Rgba8Image> {
    let (w, h) = img.dimensions();
    resize_exact(img, scaled_dim(w, factor), scaled_dim(h, factor), interp)
}

/// Resize to `width`, keeping the aspect ratio; the height is truncated.
pub fn resize_to_width(
    img: &Rgba8Image,
    width: u32,
    interp: Interpolation,
) -> MockupResult<Rgba8Image> {
    let (w, h) = img.dimensions();
    let height = ((f64::from(h) * (f64::from(width) / f64::from(w))) as u32).max(1);
    resize_exact(img, width, height, interp)
}

/// Upscale the base photo ahead of the warp and report the cumulative factor applied.
///
/// When an output width is requested and the photo's height is below it, the photo is first
/// scaled by `output_width / height`. The fixed [`WARP_SUPERSAMPLE`] step always follows.
pub fn upscale_for_warp(
    base: Rgba8Image,
    output_width: Option<u32>,
) -> MockupResult<(Rgba8Image, f64)> {
    let mut factor = 1.0;
    let mut base = base;
    if let Some(out_w) = output_width
        && base.height() < out_w
    {
        let f = f64::from(out_w) / f64::from(base.height());
        base = resize_by(&base, f, Interpolation::Cubic)?;
        factor *= f;
    }
    let base = resize_by(&base, WARP_SUPERSAMPLE, Interpolation::Cubic)?;
    factor *= WARP_SUPERSAMPLE;
    tracing::debug!(
        width = base.width(),
        height = base.height(),
        factor,
        "base photo upscaled for warp"
    );
    Ok((base, factor))
}

/// Undo the warp supersampling and apply the requested output width.
pub fn finish_output(img: Rgba8Image, output_width: Option<u32>) -> MockupResult<Rgba8Image> {
    let img = resize_by(&img, 1.0 / WARP_SUPERSAMPLE, Interpolation::Area)?;
    match output_width {
        Some(w) => resize_to_width(&img, w, Interpolation::Area),
        None => Ok(img),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/resize.rs"]
mod tests;
