//! Spin-wheel geometry.
//!
//! The wheel is an SVG of equal slices, one per prize, with slice 0 starting
//! at 12 o'clock and slices running clockwise. Spinning is a CSS rotation of
//! the whole SVG; the pointer sits at the top. Angles are degrees measured
//! clockwise from 12 o'clock.

#[cfg(test)]
#[path = "wheel_test.rs"]
mod wheel_test;

/// Slice fills, cycled by index.
pub const PALETTE: [&str; 8] = ["#3B82F6", "#EF4444", "#10B981", "#F59E0B", "#8B5CF6", "#EC4899", "#14B8A6", "#F97316"];
/// Full turns added to every spin before settling.
pub const SPIN_TURNS: f64 = 5.0;
/// Must match the CSS transition on `.spin-wheel__disc`.
pub const SPIN_DURATION_MS: u32 = 3600;
/// SVG viewBox is `0 0 VIEWBOX VIEWBOX`.
pub const VIEWBOX: f64 = 400.0;

#[must_use]
pub fn slice_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

/// Angular width of one slice; zero for an empty wheel.
#[must_use]
pub fn slice_angle(count: usize) -> f64 {
    if count == 0 { 0.0 } else { 360.0 / count_f64(count) }
}

/// Point on a circle of `radius` around the viewBox centre at `angle_deg`.
#[must_use]
pub fn polar(radius: f64, angle_deg: f64) -> (f64, f64) {
    let c = VIEWBOX / 2.0;
    let theta = angle_deg.to_radians();
    (c + radius * theta.sin(), c - radius * theta.cos())
}

/// SVG path data for slice `index` of `count`.
#[must_use]
pub fn slice_path(index: usize, count: usize, radius: f64) -> String {
    let c = VIEWBOX / 2.0;
    if count <= 1 {
        return format!(
            "M {c:.2} {top:.2} A {radius:.2} {radius:.2} 0 1 1 {c:.2} {bottom:.2} A {radius:.2} {radius:.2} 0 1 1 {c:.2} {top:.2} Z",
            top = c - radius,
            bottom = c + radius,
        );
    }
    let width = slice_angle(count);
    let start = width * count_f64(index);
    let (x0, y0) = polar(radius, start);
    let (x1, y1) = polar(radius, start + width);
    let large_arc = u8::from(width > 180.0);
    format!("M {c:.2} {c:.2} L {x0:.2} {y0:.2} A {radius:.2} {radius:.2} 0 {large_arc} 1 {x1:.2} {y1:.2} Z")
}

/// Label anchor and text rotation for slice `index`, placed at `distance` from the centre.
#[must_use]
pub fn label_anchor(index: usize, count: usize, distance: f64) -> (f64, f64, f64) {
    let centre = slice_angle(count) * (count_f64(index) + 0.5);
    let (x, y) = polar(distance, centre);
    // Text reads outward along the radius.
    (x, y, centre - 90.0)
}

/// Rotation that lands slice `index` under the top pointer after
/// [`SPIN_TURNS`] full turns past `current`.
#[must_use]
pub fn target_rotation(current: f64, index: usize, count: usize) -> f64 {
    if count == 0 {
        return current;
    }
    let centre = slice_angle(count) * (count_f64(index) + 0.5);
    let settle = (360.0 - centre).rem_euclid(360.0);
    let base = current - current.rem_euclid(360.0);
    base + SPIN_TURNS * 360.0 + settle
}

/// Index of the slice under the pointer at `rotation`.
#[must_use]
pub fn slice_at_pointer(rotation: f64, count: usize) -> Option<usize> {
    if count == 0 {
        return None;
    }
    let angle = (360.0 - rotation.rem_euclid(360.0)).rem_euclid(360.0);
    let width = slice_angle(count);
    (0..count).find(|i| {
        let start = width * count_f64(*i);
        angle >= start && angle < start + width
    })
}

#[allow(clippy::cast_precision_loss)]
fn count_f64(n: usize) -> f64 {
    n as f64
}
