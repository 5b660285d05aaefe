//! Points, surface sizing, and client-to-canvas coordinate mapping.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use crate::consts::{BRUSH_DIVISOR, DEFAULT_SURFACE_PX, LABEL_FONT_DIVISOR, MAX_SURFACE_PX};

/// A point in canvas pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Bounding rectangle of the canvas element as laid out on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClientRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Edge length of the square surface for a container of `container_width` CSS pixels.
///
/// Unmeasured (zero or negative) containers fall back to the default size.
#[must_use]
pub fn surface_size(container_width: f64) -> f64 {
    if container_width <= 0.0 || !container_width.is_finite() {
        return DEFAULT_SURFACE_PX;
    }
    container_width.min(MAX_SURFACE_PX).floor()
}

/// Brush radius for a surface of the given width.
#[must_use]
pub fn brush_radius(surface_width: f64) -> f64 {
    (surface_width / BRUSH_DIVISOR).floor()
}

/// Cover label font size for a surface of the given width.
#[must_use]
pub fn label_font_px(surface_width: f64) -> f64 {
    (surface_width / LABEL_FONT_DIVISOR).floor()
}

/// Map a pointer position in client coordinates onto the canvas pixel grid.
///
/// The canvas may be scaled by CSS, so the offset inside the element is
/// stretched by the ratio between the backing store and the laid-out rect.
#[must_use]
pub fn to_surface_point(client_x: f64, client_y: f64, rect: ClientRect, canvas_w: f64, canvas_h: f64) -> Point {
    let scale_x = if rect.width > 0.0 { canvas_w / rect.width } else { 1.0 };
    let scale_y = if rect.height > 0.0 { canvas_h / rect.height } else { 1.0 };
    Point::new((client_x - rect.left) * scale_x, (client_y - rect.top) * scale_y)
}
