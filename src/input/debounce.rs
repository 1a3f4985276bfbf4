//! Re-entrancy guard against duplicate drop delivery.
//!
//! After a spawn commit the guard stays armed for a short window; any
//! further spawn commit inside that window is ignored.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy)]
pub struct DropGuard {
    window: Duration,
    armed_until: Option<Instant>,
}

impl DropGuard {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            armed_until: None,
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    pub fn set_window(&mut self, window: Duration) {
        self.window = window;
    }

    pub fn is_armed(&self, now: Instant) -> bool {
        self.armed_until.is_some_and(|until| now < until)
    }

    pub fn arm(&mut self, now: Instant) {
        self.armed_until = Some(now + self.window);
    }
}
