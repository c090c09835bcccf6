use crate::foundation::core::Rgba8Image;
use crate::foundation::error::{MockupError, MockupResult};
use crate::foundation::math::mul_div255_u8;

pub type StraightRgba8 = [u8; 4];

/// "Over" blend of straight-alpha `src` onto `dst`, weighting by `src` alpha.
///
/// Only the color channels are blended; `dst` keeps its own alpha.
pub fn over(dst: StraightRgba8, src: StraightRgba8) -> StraightRgba8 {
    let a = u16::from(src[3]);
    if a == 0 {
        return dst;
    }
    let inv = 255 - a;

    let mut out = dst;
    for i in 0..3 {
        let sc = mul_div255_u8(u16::from(src[i]), a);
        let dc = mul_div255_u8(u16::from(dst[i]), inv);
        out[i] = sc.saturating_add(dc);
    }
    out
}

pub fn over_in_place(dst: &mut [u8], src: &[u8]) -> MockupResult<()> {
    if dst.len() != src.len() || !dst.len().is_multiple_of(4) {
        return Err(MockupError::Other(anyhow::anyhow!(
            "over_in_place expects equal-length rgba8 buffers"
        )));
    }
    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        let out = over([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]]);
        d.copy_from_slice(&out);
    }
    Ok(())
}

/// Composite the warped screenshot onto the base photo in a single pass.
pub fn composite_over(mut base: Rgba8Image, warped: &Rgba8Image) -> MockupResult<Rgba8Image> {
    if base.dimensions() != warped.dimensions() {
        return Err(MockupError::Other(anyhow::anyhow!(
            "composite size mismatch: base {:?} vs screen {:?}",
            base.dimensions(),
            warped.dimensions()
        )));
    }
    over_in_place(&mut base, warped.as_raw())?;
    Ok(base)
}

#[cfg(test)]
#[path = "../../tests/unit/effects/composite.rs"]
mod tests;
