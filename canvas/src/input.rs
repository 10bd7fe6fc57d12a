//! Input model: the drag gesture state machine and cursor styles.
//!
//! `InputState` is the active gesture tracked between pointer-down and
//! pointer-up. Only one gesture stream exists at a time; a second finger is not
//! a second gesture.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::camera::Point;

/// CSS cursor shown while the canvas is being dragged.
pub const DRAG_CURSOR: &str = "move";

/// Internal state for the input state machine.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// The user is panning the canvas by dragging.
    Panning {
        /// Screen-space position of the previous pointer event, used to compute pan delta.
        last_screen: Point,
    },
}

impl InputState {
    #[must_use]
    pub fn is_panning(&self) -> bool {
        matches!(self, Self::Panning { .. })
    }
}

/// The single touch point of a one-finger gesture, if that is what `touches` is.
#[must_use]
pub fn single_touch(touches: &[Point]) -> Option<Point> {
    match touches {
        [only] => Some(*only),
        _ => None,
    }
}
