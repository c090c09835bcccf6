pub(crate) fn mul_div255_u16(x: u16, y: u16) -> u16 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u16
}

pub(crate) fn mul_div255_u8(x: u16, y: u16) -> u8 {
    mul_div255_u16(x, y) as u8
}

/// Round a float channel value to the nearest representable u8.
pub(crate) fn round_u8(v: f32) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

/// Pixel size of `dim` scaled by `factor`, rounded to nearest and never zero.
pub(crate) fn scaled_dim(dim: u32, factor: f64) -> u32 {
    ((f64::from(dim) * factor).round() as u32).max(1)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
