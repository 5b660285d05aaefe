//! Pointer stroke state machine.
//!
//! `StrokeState` tracks whether a scratch gesture is in progress between
//! pointer-down and pointer-up, remembering the previous point so each move
//! can be turned into a connected [`EraseSegment`].

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::geometry::Point;

/// One erase operation: a round dab at `to`, joined to `from` by a thick
/// round-capped line when the stroke already had a previous point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EraseSegment {
    pub from: Option<Point>,
    pub to: Point,
    pub radius: f64,
}

/// Gesture state between pointer events.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum StrokeState {
    /// No pointer is held on the surface.
    #[default]
    Idle,
    /// Pointer is held; `last` is the previous erase position.
    Scratching { last: Point },
}

impl StrokeState {
    /// Begin a stroke at `point`. No erase happens until the pointer moves.
    pub fn begin(&mut self, point: Point) {
        *self = Self::Scratching { last: point };
    }

    /// Advance the stroke to `point`, returning the segment to erase.
    ///
    /// Moves while idle (hover, or a drag that started outside the surface)
    /// produce nothing.
    pub fn advance(&mut self, point: Point, radius: f64) -> Option<EraseSegment> {
        match *self {
            Self::Idle => None,
            Self::Scratching { last } => {
                *self = Self::Scratching { last: point };
                Some(EraseSegment { from: Some(last), to: point, radius })
            }
        }
    }

    /// End the stroke. Returns whether a stroke was actually in progress.
    pub fn end(&mut self) -> bool {
        let was_active = self.is_active();
        *self = Self::Idle;
        was_active
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Scratching { .. })
    }
}
