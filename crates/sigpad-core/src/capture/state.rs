use std::time::Duration;

use log::{debug, trace};

use crate::coords::{Point, Segment};
use crate::signature::Signature;
use crate::time::{Clock, GraceTimer, MonotonicClock, DEFAULT_LEAVE_GRACE};

use super::observer::StrokeObserver;
use super::types::{InputDevice, InputMode, PadEvent, Step};

/// Coarse state of the capture session.
///
/// The device-mode decision and the opening dot happen atomically inside
/// [`StrokeCapture::pointer_down`], so there is no observable "awaiting mode" phase.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum StrokePhase {
    /// No active stroke.
    Idle,
    /// A stroke is open; moves append segments.
    Drawing,
    /// Pointer left mid-stroke. The stroke is finalized but the pointer may still be
    /// held; the grace timer drops the active flag when it fires.
    LeaveGrace,
}

/// Transient state of one stroke. Exists from press until release, cancel or grace expiry.
#[derive(Debug)]
struct StrokeState {
    /// `None` once the stroke has been finalized by a leave.
    last_point: Option<Point>,
    /// Segments appended by this stroke, including the opening dot.
    marks: usize,
    grace: GraceTimer,
}

/// Turns a raw input stream into an ordered, de-duplicated `Signature`.
///
/// One instance per capture surface. All mutation happens through the event
/// methods below; no method fails, malformed input is ignored and reported as
/// [`Step::Ignored`].
#[derive(Debug)]
pub struct StrokeCapture<C: Clock = MonotonicClock> {
    signature: Signature,
    mode: InputMode,
    stroke: Option<StrokeState>,
    leave_grace: Duration,
    clock: C,
}

impl StrokeCapture<MonotonicClock> {
    pub fn new() -> Self {
        Self::with_clock(MonotonicClock)
    }
}

impl Default for StrokeCapture<MonotonicClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> StrokeCapture<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            signature: Signature::new(),
            mode: InputMode::Undetermined,
            stroke: None,
            leave_grace: DEFAULT_LEAVE_GRACE,
            clock,
        }
    }

    /// Sets the delay used when the pointer leaves mid-stroke.
    pub fn leave_grace(mut self, delay: Duration) -> Self {
        self.leave_grace = delay;
        self
    }

    pub fn set_leave_grace(&mut self, delay: Duration) {
        self.leave_grace = delay;
    }

    #[inline]
    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    #[inline]
    pub fn into_signature(self) -> Signature {
        self.signature
    }

    #[inline]
    pub fn mode(&self) -> InputMode {
        self.mode
    }

    pub fn phase(&self) -> StrokePhase {
        match &self.stroke {
            None => StrokePhase::Idle,
            Some(s) if s.grace.is_armed() => StrokePhase::LeaveGrace,
            Some(_) => StrokePhase::Drawing,
        }
    }

    /// True from press until release, cancel or grace expiry.
    #[inline]
    pub fn is_pointer_active(&self) -> bool {
        self.stroke.is_some()
    }

    /// Drops the signature and any open stroke. The device mode stays latched.
    pub fn reset(&mut self) {
        self.stroke = None;
        self.signature.clear();
    }

    /// Replaces the signature wholesale (used when regenerating from storage).
    pub fn adopt(&mut self, signature: Signature) {
        self.stroke = None;
        self.signature = signature;
    }

    /// Dispatches a `PadEvent` to the matching operation.
    pub fn apply_event(&mut self, ev: PadEvent, observer: &mut impl StrokeObserver) -> Step {
        match ev {
            PadEvent::Down { device, x, y } => self.pointer_down(device, x, y, observer),
            PadEvent::Move { device, x, y } => self.pointer_move(device, x, y, observer),
            PadEvent::Up { device } => self.pointer_up(device, observer),
            PadEvent::Cancel { device } => self.pointer_cancel(device, observer),
            PadEvent::Left => self.pointer_leave(observer),
        }
    }

    /// Press. Latches the device mode on first use and records a dot at `(x, y)`.
    pub fn pointer_down(
        &mut self,
        device: InputDevice,
        x: f32,
        y: f32,
        observer: &mut impl StrokeObserver,
    ) -> Step {
        let Some(at) = Point::from_surface(x, y) else {
            return Step::Ignored;
        };

        if self.mode == InputMode::Undetermined {
            self.mode = device.into();
            debug!("input mode latched to {:?}", self.mode);
        } else if !self.mode.matches(device) {
            return Step::Ignored;
        }

        if let Some(stroke) = self.stroke.as_mut() {
            // A press while drawing is a second contact; only a press during the
            // leave grace period starts over.
            if !stroke.grace.cancel() {
                return Step::Ignored;
            }
            trace!("leave grace cancelled by press");
        }

        self.open_stroke(at, observer);
        Step::Drawn
    }

    /// Move. Appends `(last, new)` unless `new` repeats the last recorded point.
    pub fn pointer_move(
        &mut self,
        device: InputDevice,
        x: f32,
        y: f32,
        observer: &mut impl StrokeObserver,
    ) -> Step {
        let Some(to) = Point::from_surface(x, y) else {
            return Step::Ignored;
        };
        if !self.mode.matches(device) {
            return Step::Ignored;
        }
        let Some(stroke) = self.stroke.as_mut() else {
            return Step::Ignored;
        };

        if stroke.grace.cancel() {
            // Re-entered with the button still held.
            trace!("pointer re-entered during leave grace");
            self.open_stroke(to, observer);
            return Step::Drawn;
        }

        let Some(from) = stroke.last_point else {
            return Step::Ignored;
        };
        let Some(segment) = Segment::new(from, to) else {
            return Step::Ignored;
        };

        stroke.last_point = Some(to);
        stroke.marks += 1;
        self.signature.push(segment);
        observer.on_draw(&self.signature);
        Step::Drawn
    }

    /// Release. Finalizes the stroke and returns to idle.
    pub fn pointer_up(&mut self, device: InputDevice, observer: &mut impl StrokeObserver) -> Step {
        if !self.mode.matches(device) {
            return Step::Ignored;
        }
        match self.phase() {
            StrokePhase::Idle => Step::Ignored,
            StrokePhase::LeaveGrace => {
                self.stroke = None;
                trace!("released during leave grace");
                Step::Released
            }
            StrokePhase::Drawing => {
                self.finish_stroke(observer);
                self.stroke = None;
                Step::Finished
            }
        }
    }

    /// Touch cancel. Same as [`pointer_up`](Self::pointer_up).
    pub fn pointer_cancel(&mut self, device: InputDevice, observer: &mut impl StrokeObserver) -> Step {
        self.pointer_up(device, observer)
    }

    /// Pointer left the surface. Pointer mode only: finalizes the stroke at once and
    /// arms the grace timer. Touch input has no leave notion.
    pub fn pointer_leave(&mut self, observer: &mut impl StrokeObserver) -> Step {
        if self.mode != InputMode::Pointer || self.phase() != StrokePhase::Drawing {
            return Step::Ignored;
        }

        self.finish_stroke(observer);

        let now = self.clock.now();
        if let Some(stroke) = self.stroke.as_mut() {
            stroke.last_point = None;
            stroke.grace.arm(now, self.leave_grace);
            trace!("leave grace armed for {:?}", self.leave_grace);
        }
        Step::Finished
    }

    /// Fires the leave-grace timer if it is due.
    pub fn poll_timers(&mut self) -> Step {
        let now = self.clock.now();
        if self.stroke.as_ref().is_some_and(|s| s.grace.is_due(now)) {
            self.stroke = None;
            trace!("leave grace expired");
            return Step::Released;
        }
        Step::Ignored
    }

    fn open_stroke(&mut self, at: Point, observer: &mut impl StrokeObserver) {
        // Dot so that a tap without movement still leaves a mark.
        let dot = Segment::mark(at);
        self.stroke = Some(StrokeState {
            last_point: Some(dot.end()),
            marks: 1,
            grace: GraceTimer::new(),
        });
        self.signature.push(dot);
        observer.on_draw(&self.signature);
    }

    fn finish_stroke(&mut self, observer: &mut impl StrokeObserver) {
        let Some(stroke) = self.stroke.as_mut() else {
            return;
        };
        let Some(last) = stroke.last_point.take() else {
            return;
        };

        // A bare tap is already marked by its dot.
        if stroke.marks > 1 {
            self.signature.push(Segment::mark(last));
            observer.on_draw(&self.signature);
        }

        debug!("stroke finished with {} segments total", self.signature.len());
        if !self.signature.is_empty() {
            observer.on_draw_end(&self.signature);
        }
    }
}
