#![allow(clippy::float_cmp)]

use super::*;

// --- surface_size ---

#[test]
fn surface_size_caps_at_max() {
    assert_eq!(surface_size(1200.0), 350.0);
}

#[test]
fn surface_size_uses_narrow_container_width() {
    assert_eq!(surface_size(280.6), 280.0);
}

#[test]
fn surface_size_defaults_when_unmeasured() {
    assert_eq!(surface_size(0.0), 300.0);
    assert_eq!(surface_size(f64::NAN), 300.0);
}

// --- brush / label ---

#[test]
fn brush_radius_scales_with_width() {
    assert_eq!(brush_radius(300.0), 20.0);
    assert_eq!(brush_radius(350.0), 23.0);
}

#[test]
fn label_font_scales_with_width() {
    assert_eq!(label_font_px(300.0), 25.0);
    assert_eq!(label_font_px(350.0), 29.0);
}

// --- to_surface_point ---

#[test]
fn to_surface_point_subtracts_rect_origin() {
    let rect = ClientRect { left: 10.0, top: 20.0, width: 300.0, height: 300.0 };
    assert_eq!(to_surface_point(60.0, 70.0, rect, 300.0, 300.0), Point::new(50.0, 50.0));
}

#[test]
fn to_surface_point_applies_css_scaling() {
    let rect = ClientRect { left: 0.0, top: 0.0, width: 150.0, height: 150.0 };
    assert_eq!(to_surface_point(75.0, 30.0, rect, 300.0, 300.0), Point::new(150.0, 60.0));
}

#[test]
fn to_surface_point_handles_zero_sized_rect() {
    let rect = ClientRect { left: 5.0, top: 5.0, width: 0.0, height: 0.0 };
    assert_eq!(to_surface_point(15.0, 25.0, rect, 300.0, 300.0), Point::new(10.0, 20.0));
}
