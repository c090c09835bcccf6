use crate::foundation::core::Rgba8Image;
use crate::foundation::error::{MockupError, MockupResult};

/// 2x2 box blur over all four channels of a straight RGBA8 buffer.
///
/// Each output pixel averages itself with its left, upper and upper-left neighbours. Row and
/// column -1 reflect onto 1 (or onto 0 for a one-pixel-wide axis).
pub fn box_blur_2x2_rgba8(src: &[u8], width: u32, height: u32) -> MockupResult<Vec<u8>> {
    let expected_len = (width as usize)
        .checked_mul(height as usize)
        .and_then(|v| v.checked_mul(4))
        .ok_or_else(|| MockupError::invalid_config("blur buffer size overflow"))?;
    if src.len() != expected_len {
        return Err(MockupError::Other(anyhow::anyhow!(
            "box_blur_2x2_rgba8 expects src matching width*height*4"
        )));
    }

    let (w, h) = (width as usize, height as usize);
    let mut out = vec![0u8; expected_len];
    for y in 0..h {
        let y_prev = prev_reflected(y, h);
        for x in 0..w {
            let x_prev = prev_reflected(x, w);
            let taps = [
                (y_prev * w + x_prev) * 4,
                (y_prev * w + x) * 4,
                (y * w + x_prev) * 4,
                (y * w + x) * 4,
            ];
            let out_idx = (y * w + x) * 4;
            for c in 0..4 {
                let sum: u16 = taps.iter().map(|&i| u16::from(src[i + c])).sum();
                out[out_idx + c] = ((sum + 2) / 4) as u8;
            }
        }
    }
    Ok(out)
}

/// Soften the aliased edges a perspective warp leaves behind.
pub fn soften(img: Rgba8Image) -> MockupResult<Rgba8Image> {
    let (w, h) = img.dimensions();
    let blurred = box_blur_2x2_rgba8(img.as_raw(), w, h)?;
    Rgba8Image::from_raw(w, h, blurred)
        .ok_or_else(|| MockupError::Other(anyhow::anyhow!("blurred buffer does not match {w}x{h}")))
}

fn prev_reflected(i: usize, len: usize) -> usize {
    match i {
        0 if len > 1 => 1,
        0 => 0,
        _ => i - 1,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/blur.rs"]
mod tests;
