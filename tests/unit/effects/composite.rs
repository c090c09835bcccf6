use image::Rgba;

use super::*;

#[test]
fn over_src_alpha_0_is_noop() {
    let dst = [10, 20, 30, 255];
    let src = [255, 255, 255, 0];
    assert_eq!(over(dst, src), dst);
}

#[test]
fn over_src_opaque_replaces_color_and_keeps_dst_alpha() {
    let dst = [0, 0, 0, 255];
    let src = [255, 10, 0, 255];
    assert_eq!(over(dst, src), [255, 10, 0, 255]);

    let dst = [0, 0, 0, 200];
    assert_eq!(over(dst, src), [255, 10, 0, 200]);
}

#[test]
fn over_half_alpha_mixes_colors() {
    let dst = [0, 100, 200, 255];
    let src = [200, 100, 0, 128];
    let out = over(dst, src);
    assert_eq!(out[1], 100);
    assert!((i32::from(out[0]) - 100).abs() <= 1);
    assert!((i32::from(out[2]) - 100).abs() <= 1);
    assert_eq!(out[3], 255);
}

#[test]
fn over_in_place_rejects_mismatched_buffers() {
    let mut dst = vec![0u8; 8];
    assert!(over_in_place(&mut dst, &[0u8; 4]).is_err());
    assert!(over_in_place(&mut dst[..6], &[0u8; 6]).is_err());
}

#[test]
fn transparent_screen_leaves_base_and_opaque_screen_replaces_it() {
    let base = Rgba8Image::from_fn(5, 4, |x, y| Rgba([x as u8 * 40, y as u8 * 50, 7, 255]));

    let clear = Rgba8Image::from_pixel(5, 4, Rgba([99, 99, 99, 0]));
    assert_eq!(composite_over(base.clone(), &clear).unwrap(), base);

    let solid = Rgba8Image::from_fn(5, 4, |x, y| Rgba([200 - x as u8, 3, y as u8, 255]));
    let out = composite_over(base, &solid).unwrap();
    assert_eq!(out, solid);
}

#[test]
fn composite_rejects_size_mismatch() {
    let err = composite_over(Rgba8Image::new(2, 2), &Rgba8Image::new(3, 2));
    assert!(err.is_err());
}
