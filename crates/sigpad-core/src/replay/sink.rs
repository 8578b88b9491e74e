use crate::coords::Point;
use crate::signature::Signature;

/// Drawing contract implemented by the host surface.
pub trait RenderSink {
    fn begin_stroke(&mut self);
    fn move_to(&mut self, point: Point);
    fn line_to(&mut self, point: Point);
    fn end_stroke(&mut self);
}

impl<S: RenderSink + ?Sized> RenderSink for &mut S {
    fn begin_stroke(&mut self) {
        (**self).begin_stroke();
    }
    fn move_to(&mut self, point: Point) {
        (**self).move_to(point);
    }
    fn line_to(&mut self, point: Point) {
        (**self).line_to(point);
    }
    fn end_stroke(&mut self) {
        (**self).end_stroke();
    }
}

/// Sink that draws nothing. For headless sessions.
#[derive(Debug, Copy, Clone, Default)]
pub struct NullSink;

impl RenderSink for NullSink {
    fn begin_stroke(&mut self) {}
    fn move_to(&mut self, _: Point) {}
    fn line_to(&mut self, _: Point) {}
    fn end_stroke(&mut self) {}
}

/// Issues one "move to `from`, line to `to`" stroke per segment, in order.
pub fn replay<S: RenderSink + ?Sized>(signature: &Signature, sink: &mut S) {
    replay_from(signature, 0, sink);
}

/// Like [`replay`], starting at segment index `start`. Out-of-range starts draw nothing.
pub fn replay_from<S: RenderSink + ?Sized>(signature: &Signature, start: usize, sink: &mut S) {
    let Some(segments) = signature.segments().get(start..) else {
        return;
    };
    for segment in segments {
        sink.begin_stroke();
        sink.move_to(segment.start());
        sink.line_to(segment.end());
        sink.end_stroke();
    }
}
