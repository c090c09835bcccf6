use image::Rgba;

use crate::foundation::core::{Point, Rgba8Image, ScreenQuad};
use crate::foundation::error::MockupResult;
use crate::warp::homography::Homography;

/// Tolerance for samples landing a hair outside the source due to round-off.
const EDGE_EPS: f64 = 1e-6;

/// Warp `src` so that its corners land on `dst_quad`, on a transparent `width` x `height` canvas.
///
/// Every canvas pixel inside the quad's bounding box is mapped back into the source and sampled
/// bilinearly. Pixels whose source position falls outside the screenshot stay fully transparent.
pub fn warp_perspective(
    src: &Rgba8Image,
    dst_quad: &ScreenQuad,
    width: u32,
    height: u32,
) -> MockupResult<Rgba8Image> {
    let (sw, sh) = src.dimensions();
    let forward = Homography::from_quads(&ScreenQuad::from_size(sw, sh), dst_quad)?;
    let inverse = forward.inverse()?;

    let mut out = Rgba8Image::new(width, height);
    let bounds = dst_quad.bounds();
    let (x_start, x_end) = clip_span(bounds.x0, bounds.x1, width);
    let (y_start, y_end) = clip_span(bounds.y0, bounds.y1, height);
    tracing::debug!(
        src_w = sw,
        src_h = sh,
        width,
        height,
        x_start,
        x_end,
        y_start,
        y_end,
        "perspective warp"
    );

    for y in y_start..y_end {
        for x in x_start..x_end {
            let Some(s) = inverse.apply(Point::new(f64::from(x), f64::from(y))) else {
                continue;
            };
            if let Some(px) = sample_bilinear(src, s) {
                out.put_pixel(x, y, px);
            }
        }
    }
    Ok(out)
}

/// Integer pixel range covering `[lo, hi]`, clipped to `[0, limit)`.
fn clip_span(lo: f64, hi: f64, limit: u32) -> (u32, u32) {
    let start = lo.floor().clamp(0.0, f64::from(limit)) as u32;
    let end = (hi.ceil() + 1.0).clamp(0.0, f64::from(limit)) as u32;
    (start, end.max(start))
}

fn sample_bilinear(src: &Rgba8Image, p: Point) -> Option<Rgba<u8>> {
    let (w, h) = src.dimensions();
    if p.x < -EDGE_EPS || p.y < -EDGE_EPS || p.x >= f64::from(w) || p.y >= f64::from(h) {
        return None;
    }
    let (sx, sy) = (p.x.max(0.0), p.y.max(0.0));
    let x0 = (sx.floor() as u32).min(w - 1);
    let y0 = (sy.floor() as u32).min(h - 1);
    let x1 = (x0 + 1).min(w - 1);
    let y1 = (y0 + 1).min(h - 1);
    let fx = (sx - f64::from(x0)).clamp(0.0, 1.0);
    let fy = (sy - f64::from(y0)).clamp(0.0, 1.0);

    let p00 = src.get_pixel(x0, y0).0;
    let p10 = src.get_pixel(x1, y0).0;
    let p01 = src.get_pixel(x0, y1).0;
    let p11 = src.get_pixel(x1, y1).0;

    let mut out = [0u8; 4];
    for c in 0..4 {
        let top = f64::from(p00[c]) * (1.0 - fx) + f64::from(p10[c]) * fx;
        let bottom = f64::from(p01[c]) * (1.0 - fx) + f64::from(p11[c]) * fx;
        out[c] = (top * (1.0 - fy) + bottom * fy).round().clamp(0.0, 255.0) as u8;
    }
    Some(Rgba(out))
}

#[cfg(test)]
#[path = "../../tests/unit/warp/perspective.rs"]
mod tests;
