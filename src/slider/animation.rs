// SPDX-License-Identifier: MPL-2.0
//! Selection indicator animation.
//!
//! The indicator position is a fractional stop index: `0.0` is the first stop,
//! `1.5` is halfway between the second and third. The animation is driven by
//! explicit timestamps so it stays deterministic under test.

use std::time::{Duration, Instant};

/// Cubic ease-in-out over `t` in `[0, 1]`.
#[must_use]
pub fn ease_in_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// An in-flight move of the selection indicator towards a stop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionAnimation {
    from: f32,
    to: usize,
    started: Instant,
    duration: Duration,
    now: Instant,
}

impl SelectionAnimation {
    /// Starts moving from position `from` to stop `to` at `started`.
    #[must_use]
    pub fn new(from: f32, to: usize, started: Instant, duration: Duration) -> Self {
        Self {
            from,
            to,
            started,
            duration,
            now: started,
        }
    }

    /// Records the current frame time.
    ///
    /// Timestamps earlier than the last one are ignored.
    pub fn advance(&mut self, now: Instant) {
        if now > self.now {
            self.now = now;
        }
    }

    /// Linear progress in `[0, 1]`.
    #[must_use]
    pub fn progress(&self) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = self.now.saturating_duration_since(self.started);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    /// Eased indicator position at the last recorded frame.
    #[must_use]
    pub fn position(&self) -> f32 {
        let target = self.to as f32;
        self.from + (target - self.from) * ease_in_out_cubic(self.progress())
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.progress() >= 1.0
    }
}
