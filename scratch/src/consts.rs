//! Shared numeric constants for the scratch crate.

// ── Surface ─────────────────────────────────────────────────────

/// Largest edge length of the square scratch surface, in CSS pixels.
pub const MAX_SURFACE_PX: f64 = 350.0;

/// Edge length used before the container has been measured.
pub const DEFAULT_SURFACE_PX: f64 = 300.0;

/// Brush radius is the surface width divided by this.
pub const BRUSH_DIVISOR: f64 = 15.0;

/// Cover label font size is the surface width divided by this.
pub const LABEL_FONT_DIVISOR: f64 = 12.0;

// ── Cover ───────────────────────────────────────────────────────

/// Gradient start colour of the scratch cover.
pub const COVER_COLOR_START: &str = "#4F46E5";

/// Gradient end colour of the scratch cover.
pub const COVER_COLOR_END: &str = "#6366F1";

/// Number of faint speckles drawn over the cover gradient.
pub const SPECKLE_COUNT: usize = 300;

/// Opacity of the speckle texture.
pub const SPECKLE_ALPHA: f64 = 0.1;

/// Text printed in the middle of the cover.
pub const COVER_LABEL: &str = "Scratch here!";

// ── Reveal ──────────────────────────────────────────────────────

/// Transparent-pixel ratio at which the prize counts as revealed.
pub const REVEAL_THRESHOLD: f64 = 0.5;

/// Coverage is sampled on every Nth erase stroke (and always on release).
pub const SAMPLE_EVERY_STROKES: u32 = 4;
