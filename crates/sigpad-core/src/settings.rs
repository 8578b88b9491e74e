use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::time::DEFAULT_LEAVE_GRACE;

/// Per-pad configuration.
///
/// Every field has a default, so partial JSON documents deserialize:
///
/// ```rust
/// let s: sigpad_core::PadSettings = serde_json::from_str(r#"{ "pen_width": 3 }"#).unwrap();
/// assert_eq!(s.pen_width, 3);
/// assert!(s.compress);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PadSettings {
    /// Pen thickness in surface pixels, written into compact headers.
    pub pen_width: u32,
    /// Width of the capture/reconstruction surface. Drives codec rescaling.
    pub surface_width: u32,
    pub surface_height: u32,
    /// Write the compact form to the output slot; otherwise legacy JSON.
    pub compress: bool,
    /// Delay before a pointer that left mid-stroke is considered released.
    pub leave_grace_ms: u64,
    /// Render signatures only; every input event is ignored.
    pub display_only: bool,
}

impl Default for PadSettings {
    fn default() -> Self {
        Self {
            pen_width: 2,
            surface_width: 300,
            surface_height: 150,
            compress: true,
            leave_grace_ms: DEFAULT_LEAVE_GRACE.as_millis() as u64,
            display_only: false,
        }
    }
}

impl PadSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pen_width(mut self, width: u32) -> Self {
        self.pen_width = width;
        self
    }

    /// Set the surface size in pixels.
    pub fn surface(mut self, width: u32, height: u32) -> Self {
        self.surface_width = width;
        self.surface_height = height;
        self
    }

    pub fn compress(mut self, on: bool) -> Self {
        self.compress = on;
        self
    }

    pub fn display_only(mut self, on: bool) -> Self {
        self.display_only = on;
        self
    }

    pub fn leave_grace(mut self, delay: Duration) -> Self {
        self.leave_grace_ms = delay.as_millis() as u64;
        self
    }

    #[inline]
    pub fn leave_grace_duration(&self) -> Duration {
        Duration::from_millis(self.leave_grace_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let s = PadSettings::default();
        assert_eq!(s.pen_width, 2);
        assert_eq!((s.surface_width, s.surface_height), (300, 150));
        assert_eq!(s.leave_grace_duration(), Duration::from_millis(500));
        assert!(s.compress);
        assert!(!s.display_only);
    }

    #[test]
    fn builder_overrides() {
        let s = PadSettings::new().pen_width(4).surface(198, 55).compress(false);
        assert_eq!(s.pen_width, 4);
        assert_eq!(s.surface_width, 198);
        assert!(!s.compress);
    }

    #[test]
    fn json_round_trip() {
        let s = PadSettings::new().leave_grace(Duration::from_millis(250));
        let json = serde_json::to_string(&s).unwrap();
        let back: PadSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(back, s);
    }
}
