use image::Rgba;

use super::*;

#[test]
fn same_size_resize_is_identity() {
    let img = Rgba8Image::from_fn(7, 5, |x, y| Rgba([x as u8, y as u8, 3, 200]));
    for interp in [Interpolation::Bilinear, Interpolation::Cubic, Interpolation::Area] {
        assert_eq!(resize_exact(&img, 7, 5, interp).unwrap(), img);
    }
}

#[test]
fn zero_target_is_rejected() {
    let img = Rgba8Image::new(4, 4);
    assert!(resize_exact(&img, 0, 4, Interpolation::Area).is_err());
}

#[test]
fn uniform_image_stays_uniform_through_any_kernel() {
    let px = Rgba([40, 90, 200, 255]);
    let img = Rgba8Image::from_pixel(12, 8, px);
    for interp in [Interpolation::Bilinear, Interpolation::Cubic, Interpolation::Area] {
        let up = resize_by(&img, 4.0, interp).unwrap();
        assert_eq!(up.dimensions(), (48, 32));
        assert!(up.pixels().all(|p| *p == px));

        let down = resize_by(&up, 0.25, Interpolation::Area).unwrap();
        assert_eq!(down.dimensions(), (12, 8));
        assert!(down.pixels().all(|p| *p == px));
    }
}

#[test]
fn area_downscale_averages_blocks() {
    let img = Rgba8Image::from_fn(4, 4, |x, _| {
        if x < 2 {
            Rgba([0, 0, 0, 255])
        } else {
            Rgba([200, 200, 200, 255])
        }
    });
    let out = resize_exact(&img, 2, 1, Interpolation::Area).unwrap();
    assert_eq!(out.get_pixel(0, 0)[0], 0);
    assert_eq!(out.get_pixel(1, 0)[0], 200);
}

#[test]
fn resize_to_width_truncates_height() {
    let img = Rgba8Image::new(30, 20);
    let out = resize_to_width(&img, 16, Interpolation::Area).unwrap();
    // 20 * 16 / 30 = 10.67
    assert_eq!(out.dimensions(), (16, 10));
}

#[test]
fn upscale_factor_includes_output_width_step_only_when_needed() {
    let base = Rgba8Image::new(40, 50);

    let (up, factor) = upscale_for_warp(base.clone(), None).unwrap();
    assert_eq!(factor, 4.0);
    assert_eq!(up.dimensions(), (160, 200));

    let (up, factor) = upscale_for_warp(base.clone(), Some(50)).unwrap();
    assert_eq!(factor, 4.0);
    assert_eq!(up.dimensions(), (160, 200));

    // Height 50 is compared against the requested width 100.
    let (up, factor) = upscale_for_warp(base, Some(100)).unwrap();
    assert_eq!(factor, 8.0);
    assert_eq!(up.dimensions(), (320, 400));
}

#[test]
fn finish_output_undoes_supersampling_then_fits_width() {
    let img = Rgba8Image::new(160, 200);
    assert_eq!(finish_output(img.clone(), None).unwrap().dimensions(), (40, 50));
    assert_eq!(finish_output(img, Some(20)).unwrap().dimensions(), (20, 25));
}
