use std::time::{Duration, Instant};

/// Delay between a pointer leaving the surface and its active flag being dropped.
pub const DEFAULT_LEAVE_GRACE: Duration = Duration::from_millis(500);

/// Single cancellable deadline.
///
/// At most one deadline is armed at a time; arming while armed keeps the
/// original deadline.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct GraceTimer {
    deadline: Option<Instant>,
}

impl GraceTimer {
    #[inline]
    pub const fn new() -> Self {
        Self { deadline: None }
    }

    /// Arms the timer to fire `delay` after `now`. Returns `false` if it was already armed.
    pub fn arm(&mut self, now: Instant, delay: Duration) -> bool {
        if self.deadline.is_some() {
            return false;
        }
        self.deadline = Some(now + delay);
        true
    }

    /// Disarms the timer. Returns `true` if a deadline was pending.
    #[inline]
    pub fn cancel(&mut self) -> bool {
        self.deadline.take().is_some()
    }

    #[inline]
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    #[inline]
    pub fn is_due(&self, now: Instant) -> bool {
        self.deadline.is_some_and(|d| now >= d)
    }
}
