//! Time subsystem.
//!
//! The only deferred work in the core is the pointer leave-grace timer. It is
//! modelled as a polled deadline against an injectable `Clock` so hosts can drive
//! it from their own loop and tests can drive it deterministically.

mod clock;
mod grace;

pub use clock::{Clock, ManualClock, MonotonicClock};
pub use grace::{GraceTimer, DEFAULT_LEAVE_GRACE};
