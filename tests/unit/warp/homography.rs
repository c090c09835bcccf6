use super::*;

fn quad(pts: [[f64; 2]; 4]) -> ScreenQuad {
    ScreenQuad(pts.map(|[x, y]| Point::new(x, y)))
}

fn close(a: Point, b: Point) -> bool {
    (a.x - b.x).abs() < 1e-6 && (a.y - b.y).abs() < 1e-6
}

#[test]
fn congruent_rectangles_give_identity() {
    let r = ScreenQuad::from_size(100, 50);
    let h = Homography::from_quads(&r, &r).unwrap();
    let id = Homography::identity();
    for (a, b) in h.matrix().iter().zip(id.matrix().iter()) {
        assert!((a - b).abs() < 1e-9);
    }
}

#[test]
fn corners_map_onto_destination_quad() {
    let src = ScreenQuad::from_size(1000, 2000);
    let dst = quad([[120.0, 80.0], [90.0, 1900.0], [910.0, 1870.0], [880.0, 110.0]]);
    let h = Homography::from_quads(&src, &dst).unwrap();
    for (s, d) in src.corners().iter().zip(dst.corners()) {
        assert!(close(h.apply(*s).unwrap(), *d));
    }

    let inv = h.inverse().unwrap();
    for (s, d) in src.corners().iter().zip(dst.corners()) {
        assert!(close(inv.apply(*d).unwrap(), *s));
    }
    let mid = h.apply(Point::new(500.0, 1000.0)).unwrap();
    assert!(close(inv.apply(mid).unwrap(), Point::new(500.0, 1000.0)));
}

#[test]
fn scaled_rectangle_is_pure_scale() {
    let src = ScreenQuad::from_size(10, 20);
    let dst = src.scaled(4.0);
    let h = Homography::from_quads(&src, &dst).unwrap();
    assert!(close(h.apply(Point::new(3.0, 7.0)).unwrap(), Point::new(12.0, 28.0)));
}

#[test]
fn collapsed_quad_is_invalid_template() {
    let src = ScreenQuad::from_size(10, 20);
    let dst = quad([[5.0, 5.0]; 4]);
    let err = Homography::from_quads(&src, &dst).unwrap_err();
    assert!(matches!(err, MockupError::InvalidTemplateAsset(_)));
}

#[test]
fn collinear_quad_is_invalid_template() {
    let src = ScreenQuad::from_size(10, 20);
    let dst = quad([[0.0, 0.0], [0.0, 10.0], [0.0, 20.0], [0.0, 30.0]]);
    assert!(Homography::from_quads(&src, &dst).is_err());
}

#[test]
fn screen_far_from_photo_origin_is_accepted() {
    let src = ScreenQuad::from_size(1179, 2556);
    let dst = quad([[1500.0, 300.0], [1500.0, 1000.0], [1800.0, 1000.0], [1800.0, 300.0]]).scaled(4.0);
    let h = Homography::from_quads(&src, &dst).unwrap();
    for (s, d) in src.corners().iter().zip(dst.corners()) {
        let p = h.apply(*s).unwrap();
        assert!((p.x - d.x).abs() < 1e-6 && (p.y - d.y).abs() < 1e-6, "{p:?} vs {d:?}");
    }

    let inv = h.inverse().unwrap();
    let back = inv.apply(Point::new(6600.0, 2600.0)).unwrap();
    assert!((back.x - 1179.0 / 2.0).abs() < 1e-6, "{back:?}");
    assert!((back.y - 2556.0 / 2.0).abs() < 1e-6, "{back:?}");
}

#[test]
fn tilted_screen_in_large_photo_is_accepted() {
    let src = ScreenQuad::from_size(1000, 2000);
    let dst = quad([[9120.0, 4080.0], [9090.0, 11900.0], [12910.0, 11870.0], [12880.0, 4110.0]]);
    let h = Homography::from_quads(&src, &dst).unwrap();
    let inv = h.inverse().unwrap();
    let mid = h.apply(Point::new(250.0, 1500.0)).unwrap();
    let back = inv.apply(mid).unwrap();
    assert!((back.x - 250.0).abs() < 1e-6 && (back.y - 1500.0).abs() < 1e-6, "{back:?}");
}
