//! Rendering: paints the scratch cover and erases it along strokes.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! All fallible `Canvas2D` calls propagate errors via `Result<_, JsValue>`;
//! the caller ([`crate::engine::ScratchCard`]) hands them to the host.

use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::consts::{COVER_COLOR_END, COVER_COLOR_START, COVER_LABEL, SPECKLE_ALPHA, SPECKLE_COUNT};
use crate::geometry::label_font_px;
use crate::input::EraseSegment;

/// Paint a fresh opaque cover over the whole surface.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails.
pub fn paint_cover(ctx: &CanvasRenderingContext2d, size: f64) -> Result<(), JsValue> {
    ctx.set_global_composite_operation("source-over")?;
    ctx.set_global_alpha(1.0);
    ctx.clear_rect(0.0, 0.0, size, size);

    let gradient = ctx.create_linear_gradient(0.0, 0.0, size, size);
    gradient.add_color_stop(0.0, COVER_COLOR_START)?;
    gradient.add_color_stop(1.0, COVER_COLOR_END)?;
    ctx.set_fill_style_canvas_gradient(&gradient);
    ctx.fill_rect(0.0, 0.0, size, size);

    // Texture: faint white speckles.
    ctx.set_fill_style_str("#FFF");
    ctx.set_global_alpha(SPECKLE_ALPHA);
    for _ in 0..SPECKLE_COUNT {
        ctx.begin_path();
        ctx.arc(js_sys::Math::random() * size, js_sys::Math::random() * size, 1.0, 0.0, 2.0 * PI)?;
        ctx.fill();
    }

    ctx.set_global_alpha(1.0);
    ctx.set_font(&format!("bold {:.0}px Arial", label_font_px(size)));
    ctx.set_fill_style_str("#FFF");
    ctx.set_text_align("center");
    ctx.fill_text(COVER_LABEL, size / 2.0, size / 2.0)?;
    Ok(())
}

/// Punch a stroke segment out of the cover.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails.
pub fn erase(ctx: &CanvasRenderingContext2d, segment: &EraseSegment) -> Result<(), JsValue> {
    ctx.set_global_composite_operation("destination-out")?;

    ctx.begin_path();
    ctx.arc(segment.to.x, segment.to.y, segment.radius, 0.0, 2.0 * PI)?;
    ctx.fill();

    if let Some(from) = segment.from {
        ctx.begin_path();
        ctx.set_line_width(segment.radius * 2.0);
        ctx.set_line_cap("round");
        ctx.set_line_join("round");
        ctx.move_to(from.x, from.y);
        ctx.line_to(segment.to.x, segment.to.y);
        ctx.stroke();
    }
    Ok(())
}

/// Read the full RGBA pixel buffer of the surface.
///
/// # Errors
///
/// Returns `Err` if `getImageData` fails (e.g. a zero-sized canvas).
pub fn read_pixels(ctx: &CanvasRenderingContext2d, size: f64) -> Result<Vec<u8>, JsValue> {
    let image = ctx.get_image_data(0.0, 0.0, size, size)?;
    Ok(image.data().0)
}
