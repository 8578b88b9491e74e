//! Coordinate types shared by capture, codec and replay.
//!
//! Canonical space:
//! - Integer surface pixels
//! - Origin top-left of the capture surface
//! - +X right, +Y down
//!
//! Translating page/device coordinates into this space is the host's job.

mod point;
mod segment;

pub use point::Point;
pub use segment::Segment;
