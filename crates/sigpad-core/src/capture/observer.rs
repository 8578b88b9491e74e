use crate::signature::Signature;

/// Receives drawing notifications from a `StrokeCapture`.
///
/// Both callbacks default to no-ops; `()` is the observer that ignores everything.
pub trait StrokeObserver {
    /// Called after each appended segment.
    fn on_draw(&mut self, signature: &Signature) {
        let _ = signature;
    }

    /// Called when a stroke ends and the signature holds at least one segment.
    fn on_draw_end(&mut self, signature: &Signature) {
        let _ = signature;
    }
}

impl StrokeObserver for () {}
