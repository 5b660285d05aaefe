//! Alpha-channel sampling and the reveal detector.
//!
//! The canvas pixel buffer is RGBA, four bytes per pixel. A pixel counts as
//! scratched once its alpha byte is exactly zero, which is what the
//! `destination-out` erase leaves behind.

#[cfg(test)]
#[path = "coverage_test.rs"]
mod coverage_test;

use crate::consts::REVEAL_THRESHOLD;

/// Fraction of fully transparent pixels in an RGBA buffer, in `0.0..=1.0`.
///
/// Trailing bytes that do not form a whole pixel are ignored. An empty buffer
/// reports `0.0`.
#[must_use]
pub fn transparent_ratio(rgba: &[u8]) -> f64 {
    let mut total = 0_u32;
    let mut clear = 0_u32;
    for pixel in rgba.chunks_exact(4) {
        total += 1;
        if pixel[3] == 0 {
            clear += 1;
        }
    }
    if total == 0 {
        return 0.0;
    }
    f64::from(clear) / f64::from(total)
}

/// Fires once, the first time an observed ratio reaches the threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealDetector {
    threshold: f64,
    last_ratio: f64,
    fired: bool,
}

impl Default for RevealDetector {
    fn default() -> Self {
        Self::new(REVEAL_THRESHOLD)
    }
}

impl RevealDetector {
    #[must_use]
    pub fn new(threshold: f64) -> Self {
        Self { threshold, last_ratio: 0.0, fired: false }
    }

    /// Record a sampled ratio. Returns `true` only on the observation that
    /// first crosses the threshold.
    pub fn observe(&mut self, ratio: f64) -> bool {
        self.last_ratio = ratio;
        if self.fired || ratio < self.threshold {
            return false;
        }
        self.fired = true;
        true
    }

    /// Whether the reveal has already fired.
    #[must_use]
    pub fn fired(&self) -> bool {
        self.fired
    }

    /// Most recent sampled ratio.
    #[must_use]
    pub fn last_ratio(&self) -> f64 {
        self.last_ratio
    }

    /// Rounded percentage for the progress hint, or `None` when the hint
    /// should be hidden (nothing scratched yet, or already past the threshold).
    #[must_use]
    pub fn progress_percent(&self) -> Option<u32> {
        if self.last_ratio <= 0.0 || self.last_ratio >= self.threshold {
            return None;
        }
        // Ratio is clamped to [0, threshold) above, so the cast cannot truncate.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let percent = (self.last_ratio * 100.0).round() as u32;
        Some(percent)
    }
}
