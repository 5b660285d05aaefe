use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::consts::SAMPLE_EVERY_STROKES;
use crate::coverage::{RevealDetector, transparent_ratio};
use crate::geometry::{ClientRect, Point, brush_radius, to_surface_point};
use crate::input::{EraseSegment, StrokeState};
use crate::render;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions produced by the engine for its host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    /// Erase this segment from the cover.
    Erase(EraseSegment),
    /// Read the pixel buffer and feed the ratio back via `observe_coverage`.
    SampleCoverage,
    /// Updated progress hint (`None` hides it).
    Progress(Option<u32>),
    /// The prize is now revealed. Emitted at most once per card.
    Revealed,
}

/// Core scratch state: everything that does not touch the canvas element.
///
/// Separated from `ScratchCard` so it can be tested without WASM/browser dependencies.
#[derive(Debug, Clone)]
pub struct ScratchCore {
    pub size: f64,
    pub stroke: StrokeState,
    pub detector: RevealDetector,
    strokes_since_sample: u32,
}

impl ScratchCore {
    #[must_use]
    pub fn new(size: f64) -> Self {
        Self { size, stroke: StrokeState::default(), detector: RevealDetector::default(), strokes_since_sample: 0 }
    }

    /// Pointer pressed at `point` (canvas pixels).
    pub fn pointer_down(&mut self, point: Point) {
        self.stroke.begin(point);
    }

    /// Pointer moved to `point` (canvas pixels).
    pub fn pointer_move(&mut self, point: Point) -> Vec<Action> {
        let Some(segment) = self.stroke.advance(point, brush_radius(self.size)) else {
            return Vec::new();
        };
        let mut actions = vec![Action::Erase(segment)];
        self.strokes_since_sample += 1;
        if self.strokes_since_sample >= SAMPLE_EVERY_STROKES {
            self.strokes_since_sample = 0;
            actions.push(Action::SampleCoverage);
        }
        actions
    }

    /// Pointer released or left the surface.
    pub fn pointer_up(&mut self) -> Vec<Action> {
        if !self.stroke.end() {
            return Vec::new();
        }
        self.strokes_since_sample = 0;
        vec![Action::SampleCoverage]
    }

    /// Feed a sampled transparent-pixel ratio back into the detector.
    pub fn observe_coverage(&mut self, ratio: f64) -> Vec<Action> {
        let crossed = self.detector.observe(ratio);
        let mut actions = vec![Action::Progress(self.detector.progress_percent())];
        if crossed {
            actions.push(Action::Revealed);
        }
        actions
    }

    /// Whether the reveal has fired.
    #[must_use]
    pub fn revealed(&self) -> bool {
        self.detector.fired()
    }
}

/// The browser scratch card. Wraps `ScratchCore` and owns the canvas element.
pub struct ScratchCard {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    pub core: ScratchCore,
}

impl ScratchCard {
    /// Bind to `canvas`, size it to `size` pixels square, and paint the cover.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the 2D context is unavailable or painting fails.
    pub fn new(canvas: HtmlCanvasElement, size: f64) -> Result<Self, JsValue> {
        let ctx = context_2d(&canvas)?;
        let mut card = Self { canvas, ctx, core: ScratchCore::new(size) };
        card.resize(size)?;
        Ok(card)
    }

    /// Resize the backing store and repaint a fresh cover.
    ///
    /// # Errors
    ///
    /// Returns `Err` if any `Canvas2D` call fails.
    pub fn resize(&mut self, size: f64) -> Result<(), JsValue> {
        // Sizes come from `geometry::surface_size`, which is non-negative and capped.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let px = size as u32;
        self.canvas.set_width(px);
        self.canvas.set_height(px);
        self.core.size = size;
        render::paint_cover(&self.ctx, size)
    }

    pub fn on_pointer_down(&mut self, client_x: f64, client_y: f64) {
        let point = self.surface_point(client_x, client_y);
        self.core.pointer_down(point);
    }

    /// # Errors
    ///
    /// Returns `Err` if erasing or sampling the canvas fails.
    pub fn on_pointer_move(&mut self, client_x: f64, client_y: f64) -> Result<Vec<Action>, JsValue> {
        let point = self.surface_point(client_x, client_y);
        let actions = self.core.pointer_move(point);
        self.apply(actions)
    }

    /// # Errors
    ///
    /// Returns `Err` if sampling the canvas fails.
    pub fn on_pointer_up(&mut self) -> Result<Vec<Action>, JsValue> {
        let actions = self.core.pointer_up();
        self.apply(actions)
    }

    /// Execute canvas-side actions and return the ones meant for the host.
    fn apply(&mut self, actions: Vec<Action>) -> Result<Vec<Action>, JsValue> {
        let mut out = Vec::new();
        for action in actions {
            match action {
                Action::Erase(segment) => render::erase(&self.ctx, &segment)?,
                Action::SampleCoverage => {
                    let rgba = render::read_pixels(&self.ctx, self.core.size)?;
                    out.extend(self.core.observe_coverage(transparent_ratio(&rgba)));
                }
                other => out.push(other),
            }
        }
        Ok(out)
    }

    fn surface_point(&self, client_x: f64, client_y: f64) -> Point {
        let rect = self.canvas.get_bounding_client_rect();
        let rect = ClientRect { left: rect.left(), top: rect.top(), width: rect.width(), height: rect.height() };
        to_surface_point(
            client_x,
            client_y,
            rect,
            f64::from(self.canvas.width()),
            f64::from(self.canvas.height()),
        )
    }
}

/// Acquire a 2D context tuned for frequent `getImageData` reads.
fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, JsValue> {
    let options = js_sys::Object::new();
    js_sys::Reflect::set(&options, &JsValue::from_str("willReadFrequently"), &JsValue::TRUE)?;
    let ctx = canvas
        .get_context_with_context_options("2d", &options)?
        .ok_or_else(|| JsValue::from_str("2d context unavailable"))?;
    ctx.dyn_into::<CanvasRenderingContext2d>().map_err(JsValue::from)
}
