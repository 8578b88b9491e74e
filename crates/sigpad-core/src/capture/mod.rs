//! Stroke capture.
//!
//! Public API is platform-agnostic: hosts translate their touch/mouse events into
//! `PadEvent`s with surface-local coordinates and feed them to a `StrokeCapture`.

mod observer;
mod state;
mod types;

pub use observer::StrokeObserver;
pub use state::{StrokeCapture, StrokePhase};
pub use types::{InputDevice, InputMode, PadEvent, Step};
