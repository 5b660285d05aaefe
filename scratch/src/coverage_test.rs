#![allow(clippy::float_cmp)]

use super::*;

fn rgba(opaque: usize, clear: usize) -> Vec<u8> {
    let mut out = Vec::with_capacity((opaque + clear) * 4);
    for _ in 0..opaque {
        out.extend_from_slice(&[79, 70, 229, 255]);
    }
    for _ in 0..clear {
        out.extend_from_slice(&[0, 0, 0, 0]);
    }
    out
}

// --- transparent_ratio ---

#[test]
fn transparent_ratio_empty_buffer_is_zero() {
    assert_eq!(transparent_ratio(&[]), 0.0);
}

#[test]
fn transparent_ratio_counts_only_zero_alpha() {
    let mut buf = rgba(2, 1);
    // Partially transparent pixel is not scratched.
    buf.extend_from_slice(&[0, 0, 0, 1]);
    assert_eq!(transparent_ratio(&buf), 0.25);
}

#[test]
fn transparent_ratio_ignores_trailing_partial_pixel() {
    let mut buf = rgba(1, 1);
    buf.extend_from_slice(&[0, 0]);
    assert_eq!(transparent_ratio(&buf), 0.5);
}

#[test]
fn transparent_ratio_fully_clear() {
    assert_eq!(transparent_ratio(&rgba(0, 16)), 1.0);
}

// --- RevealDetector ---

#[test]
fn detector_does_not_fire_below_threshold() {
    let mut d = RevealDetector::default();
    assert!(!d.observe(0.1));
    assert!(!d.observe(0.49));
    assert!(!d.fired());
}

#[test]
fn detector_fires_at_exact_threshold() {
    let mut d = RevealDetector::default();
    assert!(d.observe(0.5));
    assert!(d.fired());
}

#[test]
fn detector_fires_only_once() {
    let mut d = RevealDetector::default();
    assert!(d.observe(0.62));
    assert!(!d.observe(0.8));
    assert!(!d.observe(1.0));
}

#[test]
fn detector_from_sampled_buffer() {
    let mut d = RevealDetector::default();
    assert!(!d.observe(transparent_ratio(&rgba(6, 4))));
    assert!(d.observe(transparent_ratio(&rgba(5, 5))));
}

#[test]
fn progress_hidden_before_any_scratch() {
    let d = RevealDetector::default();
    assert_eq!(d.progress_percent(), None);
}

#[test]
fn progress_rounds_percentage() {
    let mut d = RevealDetector::default();
    d.observe(0.236);
    assert_eq!(d.progress_percent(), Some(24));
}

#[test]
fn progress_hidden_after_threshold() {
    let mut d = RevealDetector::default();
    d.observe(0.7);
    assert_eq!(d.progress_percent(), None);
}
