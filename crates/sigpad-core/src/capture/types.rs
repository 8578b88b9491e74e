/// Kind of device an input event came from.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum InputDevice {
    Touch,
    Pointer,
}

/// Device kind latched by the first press of a capture session.
///
/// Starts `Undetermined` and is set exactly once; events from the other device
/// kind are ignored afterwards.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum InputMode {
    #[default]
    Undetermined,
    Touch,
    Pointer,
}

impl InputMode {
    /// True when this mode has been latched to `device`.
    #[inline]
    pub fn matches(self, device: InputDevice) -> bool {
        matches!(
            (self, device),
            (InputMode::Touch, InputDevice::Touch) | (InputMode::Pointer, InputDevice::Pointer)
        )
    }
}

impl From<InputDevice> for InputMode {
    fn from(device: InputDevice) -> Self {
        match device {
            InputDevice::Touch => InputMode::Touch,
            InputDevice::Pointer => InputMode::Pointer,
        }
    }
}

/// Platform-agnostic input events in surface-local logical pixels.
///
/// The host translates page/device coordinates before building these.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PadEvent {
    /// Mouse button or touch pressed.
    Down { device: InputDevice, x: f32, y: f32 },
    /// Pointer or touch moved.
    Move { device: InputDevice, x: f32, y: f32 },
    /// Mouse button released or touch ended.
    Up { device: InputDevice },
    /// Touch cancelled by the platform. Finalizes like `Up`.
    Cancel { device: InputDevice },
    /// Pointer left the capture surface.
    Left,
}

/// What an input operation did to the capture session.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[must_use]
pub enum Step {
    /// No state change (malformed ordering, duplicate point, wrong device, ...).
    Ignored,
    /// One or more segments were appended; the stroke is still open.
    Drawn,
    /// The stroke was finalized; the signature should be persisted.
    Finished,
    /// The active flag was dropped without new segments (release or grace expiry).
    Released,
}
