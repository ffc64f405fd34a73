//! Retriggerable pulse timers.
//!
//! [`PulseTimer`] is the timing half of a timed output: the controller arms
//! it when it drives a line HIGH and polls it every cycle; the poll that
//! observes `now - started_at >= duration` returns `true` exactly once, and
//! that is the only moment the line is driven LOW again.
//!
//! [`LightPulse`] is the same timer paired with the colour shown on the
//! strip while it runs.

use smart_leds::RGB8;

use crate::clock::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PulseTimer {
    active: bool,
    started_at: Instant,
    duration_ms: u32,
}

impl PulseTimer {
    /// Inactive timer.
    pub const fn new() -> Self {
        Self {
            active: false,
            started_at: Instant::ZERO,
            duration_ms: 0,
        }
    }

    /// Start (or restart) the pulse at `now`.
    ///
    /// Re-arming an active timer moves its expiry to `now + duration_ms`;
    /// the earlier window no longer applies.
    pub fn activate(&mut self, now: Instant, duration_ms: u32) {
        self.active = true;
        self.started_at = now;
        self.duration_ms = duration_ms;
    }

    /// Returns `true` if this call expired the pulse.
    pub fn poll(&mut self, now: Instant) -> bool {
        if self.active && now.has_elapsed(self.started_at, self.duration_ms) {
            self.active = false;
            return true;
        }
        false
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn started_at(&self) -> Instant {
        self.started_at
    }

    pub fn duration_ms(&self) -> u32 {
        self.duration_ms
    }

    /// Milliseconds until expiry, `None` when inactive.
    pub fn remaining_ms(&self, now: Instant) -> Option<u32> {
        self.active
            .then(|| self.duration_ms.saturating_sub(now.millis_since(self.started_at)))
    }
}

/// All-pixels pulse on the LED strip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightPulse {
    timer: PulseTimer,
    colour: RGB8,
}

impl LightPulse {
    pub const fn new(colour: RGB8) -> Self {
        Self {
            timer: PulseTimer::new(),
            colour,
        }
    }

    pub fn activate(&mut self, now: Instant, duration_ms: u32) {
        self.timer.activate(now, duration_ms);
    }

    /// Returns `true` if this call expired the pulse.
    pub fn poll(&mut self, now: Instant) -> bool {
        self.timer.poll(now)
    }

    pub fn is_active(&self) -> bool {
        self.timer.is_active()
    }

    pub fn colour(&self) -> RGB8 {
        self.colour
    }

    pub fn timer(&self) -> &PulseTimer {
        &self.timer
    }
}
