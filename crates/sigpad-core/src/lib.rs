//! Signature pad core.
//!
//! Captures hand-drawn signatures from a pointer/touch input stream and persists
//! them in a compact, restorable string form.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`coords`] | `Point`, `Segment` |
//! | [`capture`] | `StrokeCapture` state machine, `PadEvent`, `StrokeObserver` |
//! | [`codec`] | `compress`, `decompress`, `decode`, legacy JSON |
//! | [`replay`] | `RenderSink` contract, `replay`, `DrawList` |
//! | [`time`] | `Clock`, leave-grace timer |
//! | [`logging`] | `init_logging` |
//!
//! [`SignaturePad`] ties capture, rendering and the persistence slot together.

pub mod capture;
pub mod codec;
pub mod coords;
pub mod logging;
pub mod replay;
pub mod time;

mod pad;
mod settings;
mod signature;

pub use codec::CodecError;
pub use pad::{SignatureInput, SignaturePad};
pub use settings::PadSettings;
pub use signature::Signature;
