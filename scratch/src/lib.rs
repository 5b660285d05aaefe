//! Scratch-card reveal engine for the public campaign page.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! scratch overlay drawn on top of a prize: painting the cover, erasing it
//! along pointer strokes, sampling the canvas alpha channel, and deciding when
//! enough of the prize is visible to count as revealed. The Leptos host only
//! wires DOM pointer events into the engine and reacts to the returned
//! [`engine::Action`]s.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Browser-bound [`engine::ScratchCard`] and testable [`engine::ScratchCore`] |
//! | [`input`] | Pointer stroke state machine producing erase segments |
//! | [`coverage`] | Alpha sampling and the fire-once reveal detector |
//! | [`geometry`] | Points, surface sizing, and client-to-canvas mapping |
//! | [`render`] | Canvas 2D painting of the cover and erase strokes |
//! | [`consts`] | Shared numeric constants (threshold, brush ratio, sizes) |

pub mod consts;
pub mod coverage;
pub mod engine;
pub mod geometry;
pub mod input;
pub mod render;
