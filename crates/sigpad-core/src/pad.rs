use log::{debug, warn};

use crate::capture::{InputMode, PadEvent, Step, StrokeCapture, StrokeObserver, StrokePhase};
use crate::codec::{self, CodecError};
use crate::replay::{replay, replay_from, RenderSink};
use crate::settings::PadSettings;
use crate::signature::Signature;
use crate::time::{Clock, MonotonicClock};

type Hook = Box<dyn FnMut(&Signature)>;

/// Anything `regenerate` can show: a stored string or a live signature.
#[derive(Debug, Clone, PartialEq)]
pub enum SignatureInput {
    /// Compact or legacy JSON payload.
    Encoded(String),
    Live(Signature),
}

impl From<String> for SignatureInput {
    fn from(s: String) -> Self {
        SignatureInput::Encoded(s)
    }
}

impl From<&str> for SignatureInput {
    fn from(s: &str) -> Self {
        SignatureInput::Encoded(s.to_string())
    }
}

impl From<Signature> for SignatureInput {
    fn from(sig: Signature) -> Self {
        SignatureInput::Live(sig)
    }
}

/// Forwards capture notifications to the user hooks.
struct Hooks<'a> {
    on_draw: &'a mut Option<Hook>,
    on_draw_end: &'a mut Option<Hook>,
}

impl StrokeObserver for Hooks<'_> {
    fn on_draw(&mut self, signature: &Signature) {
        if let Some(f) = self.on_draw.as_mut() {
            f(signature);
        }
    }

    fn on_draw_end(&mut self, signature: &Signature) {
        if let Some(f) = self.on_draw_end.as_mut() {
            f(signature);
        }
    }
}

/// One signature surface: capture session, render sink and persistence slot.
///
/// Segments are rendered to the sink as they are captured. Every finished stroke
/// rewrites the output slot with the encoded signature (compact form, or legacy
/// JSON when compression is off or the compact form cannot represent it).
///
/// ```rust
/// use sigpad_core::capture::{InputDevice, PadEvent};
/// use sigpad_core::replay::DrawList;
/// use sigpad_core::{PadSettings, SignaturePad};
///
/// let mut pad = SignaturePad::new(PadSettings::default(), DrawList::new());
/// let _ = pad.handle_event(PadEvent::Down { device: InputDevice::Pointer, x: 4.0, y: 4.0 });
/// let _ = pad.handle_event(PadEvent::Up { device: InputDevice::Pointer });
/// assert_eq!(pad.signature().len(), 1);
/// assert!(!pad.output().is_empty());
/// ```
pub struct SignaturePad<S: RenderSink, C: Clock = MonotonicClock> {
    settings: PadSettings,
    capture: StrokeCapture<C>,
    sink: S,
    output: String,
    /// Segments already sent to the sink.
    rendered: usize,
    display_pen_width: u32,
    enabled: bool,
    on_draw: Option<Hook>,
    on_draw_end: Option<Hook>,
}

impl<S: RenderSink> SignaturePad<S, MonotonicClock> {
    pub fn new(settings: PadSettings, sink: S) -> Self {
        Self::with_clock(settings, sink, MonotonicClock)
    }
}

impl<S: RenderSink, C: Clock> SignaturePad<S, C> {
    pub fn with_clock(settings: PadSettings, sink: S, clock: C) -> Self {
        let capture = StrokeCapture::with_clock(clock).leave_grace(settings.leave_grace_duration());
        Self {
            display_pen_width: settings.pen_width,
            settings,
            capture,
            sink,
            output: String::new(),
            rendered: 0,
            enabled: true,
            on_draw: None,
            on_draw_end: None,
        }
    }

    /// Called after every appended segment.
    pub fn on_draw(mut self, f: impl FnMut(&Signature) + 'static) -> Self {
        self.on_draw = Some(Box::new(f));
        self
    }

    /// Called when a stroke ends with a non-empty signature.
    pub fn on_draw_end(mut self, f: impl FnMut(&Signature) + 'static) -> Self {
        self.on_draw_end = Some(Box::new(f));
        self
    }

    // ── input ─────────────────────────────────────────────────────────────

    /// Feeds one input event. Ignored while disabled or display-only.
    pub fn handle_event(&mut self, ev: PadEvent) -> Step {
        if !self.enabled || self.settings.display_only {
            return Step::Ignored;
        }

        let mut hooks = Hooks { on_draw: &mut self.on_draw, on_draw_end: &mut self.on_draw_end };
        let step = self.capture.apply_event(ev, &mut hooks);

        self.render_pending();
        if step == Step::Finished {
            self.write_output();
        }
        step
    }

    /// Drives the leave-grace timer. Call from the host loop.
    pub fn poll_timers(&mut self) -> Step {
        self.capture.poll_timers()
    }

    /// Stops accepting input. Rendering and codec operations keep working.
    pub fn disable(&mut self) {
        self.enabled = false;
    }

    pub fn enable(&mut self) {
        self.enabled = true;
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    // ── signature ─────────────────────────────────────────────────────────

    /// Drops the signature and empties the output slot.
    ///
    /// Clearing the pixels is up to the host surface.
    pub fn clear(&mut self) {
        self.capture.reset();
        self.rendered = 0;
        self.output.clear();
        self.display_pen_width = self.settings.pen_width;
    }

    /// Shows a stored or live signature and adopts it as the current one.
    ///
    /// Encoded input is decoded against `settings.surface_width` (compact or legacy
    /// JSON). On a decode error the pad is left untouched.
    pub fn regenerate(&mut self, input: impl Into<SignatureInput>) -> Result<(), CodecError> {
        let (signature, pen_width) = match input.into() {
            SignatureInput::Live(signature) => (signature, None),
            SignatureInput::Encoded(encoded) => {
                let decoded = codec::decode(&encoded, self.settings.surface_width)?;
                (decoded.signature, decoded.pen_width)
            }
        };

        self.clear();
        replay(&signature, &mut self.sink);
        self.rendered = signature.len();
        self.capture.adopt(signature);
        self.display_pen_width = pen_width.unwrap_or(self.settings.pen_width);
        self.write_output();

        debug!(
            "regenerated {} segments (pen width {})",
            self.rendered, self.display_pen_width
        );
        Ok(())
    }

    #[inline]
    pub fn signature(&self) -> &Signature {
        self.capture.signature()
    }

    /// Signature as legacy JSON.
    pub fn signature_string(&self) -> Result<String, CodecError> {
        codec::to_legacy_json(self.signature())
    }

    /// Signature in compact form with this pad's pen width and surface width.
    pub fn encode(&self) -> Result<String, CodecError> {
        codec::compress(self.signature(), self.settings.pen_width, self.settings.surface_width)
    }

    /// Current value of the persistence slot.
    #[inline]
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Pen width to draw with: rescaled after regenerating a compact payload,
    /// otherwise the configured width.
    #[inline]
    pub fn display_pen_width(&self) -> u32 {
        self.display_pen_width
    }

    // ── state ─────────────────────────────────────────────────────────────

    #[inline]
    pub fn settings(&self) -> &PadSettings {
        &self.settings
    }

    pub fn update_settings(&mut self, f: impl FnOnce(&mut PadSettings)) {
        f(&mut self.settings);
        self.capture.set_leave_grace(self.settings.leave_grace_duration());
    }

    #[inline]
    pub fn phase(&self) -> StrokePhase {
        self.capture.phase()
    }

    #[inline]
    pub fn mode(&self) -> InputMode {
        self.capture.mode()
    }

    #[inline]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    #[inline]
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    fn render_pending(&mut self) {
        let signature = self.capture.signature();
        replay_from(signature, self.rendered, &mut self.sink);
        self.rendered = signature.len();
    }

    fn write_output(&mut self) {
        let signature = self.capture.signature();

        if self.settings.compress {
            match codec::compress(signature, self.settings.pen_width, self.settings.surface_width) {
                Ok(encoded) => {
                    self.output = encoded;
                    return;
                }
                Err(err) => warn!("compact encoding failed, writing json instead: {err}"),
            }
        }

        match codec::to_legacy_json(signature) {
            Ok(json) => self.output = json,
            Err(err) => warn!("could not write signature output: {err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;
    use std::time::Duration;

    use super::*;
    use crate::capture::InputDevice;
    use crate::coords::Point;
    use crate::replay::{DrawCmd, DrawList};
    use crate::time::ManualClock;

    const P: InputDevice = InputDevice::Pointer;

    fn pad(settings: PadSettings) -> (SignaturePad<DrawList, ManualClock>, ManualClock) {
        let clock = ManualClock::new();
        (SignaturePad::with_clock(settings, DrawList::new(), clock.clone()), clock)
    }

    fn down(x: f32, y: f32) -> PadEvent {
        PadEvent::Down { device: P, x, y }
    }

    fn mv(x: f32, y: f32) -> PadEvent {
        PadEvent::Move { device: P, x, y }
    }

    const UP: PadEvent = PadEvent::Up { device: P };

    fn draw_stroke(pad: &mut SignaturePad<DrawList, ManualClock>) {
        let _ = pad.handle_event(down(0.0, 0.0));
        let _ = pad.handle_event(mv(5.0, 5.0));
        let _ = pad.handle_event(UP);
    }

    #[test]
    fn output_written_after_stroke() {
        let (mut pad, _) = pad(PadSettings::default());
        let _ = pad.handle_event(down(0.0, 0.0));
        let _ = pad.handle_event(mv(5.0, 5.0));
        assert_eq!(pad.output(), "");

        assert_eq!(pad.handle_event(UP), Step::Finished);
        assert_eq!(pad.output(), pad.encode().unwrap());
    }

    #[test]
    fn output_is_json_without_compression() {
        let (mut pad, _) = pad(PadSettings::default().compress(false));
        draw_stroke(&mut pad);
        assert!(pad.output().starts_with('['));
        assert_eq!(pad.output(), pad.signature_string().unwrap());
    }

    #[test]
    fn output_falls_back_to_json_when_out_of_range() {
        let (mut pad, _) = pad(PadSettings::default().surface(60_000, 100));
        let _ = pad.handle_event(down(59_000.0, 1.0));
        let _ = pad.handle_event(UP);
        assert!(pad.output().starts_with('['));
    }

    #[test]
    fn zero_width_surface_never_stores_compact_output() {
        let (mut pad, _) = pad(PadSettings::default().surface(0, 100));
        draw_stroke(&mut pad);
        assert_eq!(
            pad.encode().unwrap_err(),
            CodecError::InvalidHeader { pen_width: 2, surface_width: 0 }
        );
        assert_eq!(codec::from_legacy_json(pad.output()).unwrap(), *pad.signature());
    }

    #[test]
    fn segments_render_live() {
        let (mut pad, _) = pad(PadSettings::default());
        let _ = pad.handle_event(down(2.0, 3.0));
        assert_eq!(pad.sink().stroke_count(), 1);
        let _ = pad.handle_event(mv(8.0, 3.0));
        assert_eq!(pad.sink().stroke_count(), 2);
        let _ = pad.handle_event(UP);
        assert_eq!(pad.sink().stroke_count(), 3);
        assert_eq!(pad.sink().cmds()[1], DrawCmd::MoveTo(Point::new(2, 3)));
    }

    #[test]
    fn hooks_fire() {
        let draws = Rc::new(Cell::new(0));
        let ends = Rc::new(Cell::new(0));
        let (d, e) = (draws.clone(), ends.clone());
        let (pad, _) = pad(PadSettings::default());
        let mut pad = pad
            .on_draw(move |_| d.set(d.get() + 1))
            .on_draw_end(move |sig| e.set(sig.len()));

        draw_stroke(&mut pad);
        assert_eq!(draws.get(), 3);
        assert_eq!(ends.get(), 3);
    }

    #[test]
    fn display_only_ignores_input() {
        let (mut pad, _) = pad(PadSettings::default().display_only(true));
        assert_eq!(pad.handle_event(down(1.0, 1.0)), Step::Ignored);
        assert!(pad.signature().is_empty());
    }

    #[test]
    fn disabled_ignores_input() {
        let (mut pad, _) = pad(PadSettings::default());
        pad.disable();
        assert_eq!(pad.handle_event(down(1.0, 1.0)), Step::Ignored);
        pad.enable();
        assert_eq!(pad.handle_event(down(1.0, 1.0)), Step::Drawn);
    }

    #[test]
    fn clear_empties_output() {
        let (mut pad, _) = pad(PadSettings::default());
        draw_stroke(&mut pad);
        pad.clear();
        assert!(pad.signature().is_empty());
        assert_eq!(pad.output(), "");
        assert_eq!(pad.encode().unwrap(), "");
    }

    #[test]
    fn regenerate_rescales_to_surface() {
        let (mut source, _) = pad(PadSettings::default().surface(100, 50));
        draw_stroke(&mut source);
        let stored = source.output().to_string();

        let (mut target, _) = pad(PadSettings::default().surface(200, 100));
        target.regenerate(stored).unwrap();
        assert_eq!(target.signature().len(), 3);
        assert_eq!(target.signature().segments()[1].end(), Point::new(10, 10));
        assert_eq!(target.display_pen_width(), 4);
        assert_eq!(target.sink().stroke_count(), 3);
        // The regenerated signature is itself serializable.
        assert_eq!(target.output(), target.encode().unwrap());
    }

    #[test]
    fn regenerate_accepts_legacy_and_live() {
        let (mut pad, _) = pad(PadSettings::default());
        pad.regenerate(r#"[{"lx":5,"ly":5,"mx":0,"my":0}]"#).unwrap();
        assert_eq!(pad.signature().len(), 1);
        assert_eq!(pad.display_pen_width(), 2);

        let live = pad.signature().clone();
        pad.regenerate(live.clone()).unwrap();
        assert_eq!(pad.signature(), &live);
    }

    #[test]
    fn regenerate_error_leaves_pad_untouched() {
        let (mut pad, _) = pad(PadSettings::default());
        draw_stroke(&mut pad);
        let before = pad.signature().clone();

        let bad: String = [2u32 + 91, 91].iter().filter_map(|&c| char::from_u32(c)).collect();
        assert!(matches!(pad.regenerate(bad), Err(CodecError::Scale { .. })));
        assert_eq!(pad.signature(), &before);
    }

    #[test]
    fn leave_writes_output_and_expires() {
        let (mut pad, clock) = pad(PadSettings::default().leave_grace(Duration::from_millis(100)));
        let _ = pad.handle_event(down(0.0, 0.0));
        let _ = pad.handle_event(mv(3.0, 0.0));
        assert_eq!(pad.handle_event(PadEvent::Left), Step::Finished);
        assert!(!pad.output().is_empty());

        clock.advance(Duration::from_millis(100));
        assert_eq!(pad.poll_timers(), Step::Released);
        assert_eq!(pad.phase(), StrokePhase::Idle);
    }

    #[test]
    fn update_settings_applies_grace() {
        let (mut pad, clock) = pad(PadSettings::default());
        pad.update_settings(|s| s.leave_grace_ms = 10);
        let _ = pad.handle_event(down(0.0, 0.0));
        let _ = pad.handle_event(PadEvent::Left);
        clock.advance(Duration::from_millis(10));
        assert_eq!(pad.poll_timers(), Step::Released);
    }
}
