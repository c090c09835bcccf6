use image::Rgba;

use super::*;

#[test]
fn constant_image_is_identity() {
    let (w, h) = (4u32, 3u32);
    let px = [10u8, 20u8, 30u8, 40u8];
    let src = px.repeat((w * h) as usize);
    let out = box_blur_2x2_rgba8(&src, w, h).unwrap();
    assert_eq!(out, src);
}

#[test]
fn single_pixel_spreads_right_and_down() {
    let (w, h) = (4u32, 4u32);
    let mut src = vec![0u8; (w * h * 4) as usize];
    let at = |x: u32, y: u32| ((y * w + x) * 4) as usize;
    src[at(1, 1)..at(1, 1) + 4].copy_from_slice(&[200, 200, 200, 200]);

    let out = box_blur_2x2_rgba8(&src, w, h).unwrap();
    for (x, y) in [(1, 1), (2, 1), (1, 2), (2, 2)] {
        assert_eq!(out[at(x, y) + 3], 50, "pixel ({x},{y})");
    }
    // Column and row 0 reflect onto 1.
    assert_eq!(out[at(0, 1) + 3], 50);
    assert_eq!(out[at(1, 0) + 3], 50);
    assert_eq!(out[at(0, 0) + 3], 50);
    assert_eq!(out[at(3, 3) + 3], 0);
}

#[test]
fn one_pixel_image_is_unchanged() {
    let src = vec![1u8, 2, 3, 4];
    assert_eq!(box_blur_2x2_rgba8(&src, 1, 1).unwrap(), src);
}

#[test]
fn mismatched_length_is_rejected() {
    assert!(box_blur_2x2_rgba8(&[0u8; 7], 1, 2).is_err());
}

#[test]
fn soften_keeps_dimensions_and_blurs_alpha() {
    let img = Rgba8Image::from_fn(3, 3, |x, _| {
        if x == 2 {
            Rgba([255, 255, 255, 255])
        } else {
            Rgba([0, 0, 0, 0])
        }
    });
    let out = soften(img).unwrap();
    assert_eq!(out.dimensions(), (3, 3));
    assert_eq!(out.get_pixel(2, 1), &Rgba([128, 128, 128, 128]));
    assert_eq!(out.get_pixel(0, 1)[3], 0);
}
