use super::*;

#[test]
fn zoom_delta_clamps_to_bounds() {
    let cfg = ViewportConfig::default();
    let mut vp = Viewport::default();
    vp.apply_zoom_delta(1.0e9, &cfg);
    assert_eq!(vp.zoom, 2.5);
    vp.apply_zoom_delta(-1.0e9, &cfg);
    assert_eq!(vp.zoom, 0.3);
}

#[test]
fn infinite_zoom_delta_lands_on_bounds() {
    let cfg = ViewportConfig::default();
    let mut vp = Viewport::default();
    vp.apply_zoom_delta(f64::INFINITY, &cfg);
    assert_eq!(vp.zoom, 2.5);
    vp.apply_zoom_delta(f64::NEG_INFINITY, &cfg);
    assert_eq!(vp.zoom, 0.3);
    vp.apply_zoom_delta(f64::NAN, &cfg);
    assert_eq!(vp.zoom, 0.3);
    vp.set_zoom_absolute(f64::INFINITY, &cfg);
    assert_eq!(vp.zoom, 2.5);
}

#[test]
fn set_zoom_absolute_clamps_and_ignores_nan() {
    let cfg = ViewportConfig::default();
    let mut vp = Viewport::default();
    vp.set_zoom_absolute(1.75, &cfg);
    assert_eq!(vp.zoom, 1.75);
    vp.set_zoom_absolute(0.0, &cfg);
    assert_eq!(vp.zoom, 0.3);
    vp.set_zoom_absolute(f64::NAN, &cfg);
    assert_eq!(vp.zoom, 0.3);
}

#[test]
fn pan_is_unbounded() {
    let mut vp = Viewport::default();
    vp.apply_pan(Vec2::new(-1.0e7, 3.0e6));
    vp.apply_pan(Vec2::new(5.0, -6.0));
    assert_eq!(vp.pan, Vec2::new(-1.0e7 + 5.0, 3.0e6 - 6.0));
}

#[test]
fn transform_translates_then_scales() {
    let vp = Viewport {
        pan: Vec2::new(10.0, -20.0),
        zoom: 2.0,
    };
    assert_eq!(vp.to_screen(Point::new(3.0, 4.0)), Point::new(16.0, -12.0));
    assert_eq!(vp.to_screen(Point::ORIGIN), Point::new(10.0, -20.0));

    let back = vp.to_content(Point::new(16.0, -12.0));
    assert!((back - Point::new(3.0, 4.0)).hypot() < 1e-9);
}

#[test]
fn identity_viewport_has_identity_transform() {
    assert_eq!(Viewport::default().transform(), Affine::IDENTITY);
    assert_eq!(Viewport::default().zoom_percent(), 100);
}

#[test]
fn zoom_percent_rounds() {
    let vp = Viewport {
        pan: Vec2::ZERO,
        zoom: 1.154,
    };
    assert_eq!(vp.zoom_percent(), 115);
}
