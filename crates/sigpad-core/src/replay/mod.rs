//! Replay of signatures onto an external rendering surface.
//!
//! The core only ever issues the four directives of [`RenderSink`]. Pen colour,
//! width, caps and clearing belong to the host surface.

mod draw_list;
mod sink;

pub use draw_list::{DrawCmd, DrawList};
pub use sink::{replay, replay_from, NullSink, RenderSink};
