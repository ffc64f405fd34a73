//! Time-window debouncer for active-low momentary switches.
//!
//! ## Hardware
//!
//! Switches pull the line LOW when pressed; the internal pull-up holds it
//! HIGH otherwise.  The main loop samples the raw level on every poll cycle
//! and feeds it to [`Debouncer::poll`] together with the cycle timestamp.
//!
//! ## State machine
//!
//! | Step                              | Effect                               |
//! |-----------------------------------|--------------------------------------|
//! | raw level differs from last raw   | restart the settle window            |
//! | window elapsed, raw != stable     | commit `stable = raw`, emit an edge  |
//! | edge to LOW while armed           | edge carries `press`, disarm         |
//! | stable level is HIGH              | re-arm                               |
//!
//! A switch held down across any number of cycles therefore yields exactly
//! one press; the next press is only recognised after a stable release.

use crate::app::ports::Level;
use crate::clock::Instant;

/// Default settle window.
pub const DEBOUNCE_MS: u32 = 50;

/// A committed change of the debounced level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeEvent {
    pub from: Level,
    pub to: Level,
    /// `true` when this edge is the single press trigger of a new press.
    pub press: bool,
}

#[derive(Debug, Clone)]
pub struct Debouncer {
    last_raw: Level,
    stable: Level,
    last_change: Instant,
    window_ms: u32,
    armed: bool,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEBOUNCE_MS)
    }
}

impl Debouncer {
    /// Idle (released, HIGH) and armed.
    pub fn new(window_ms: u32) -> Self {
        Self {
            last_raw: Level::High,
            stable: Level::High,
            last_change: Instant::ZERO,
            window_ms,
            armed: true,
        }
    }

    /// Feed one raw sample taken at `now`.
    pub fn poll(&mut self, raw: Level, now: Instant) -> Option<EdgeEvent> {
        if raw != self.last_raw {
            self.last_change = now;
            self.last_raw = raw;
        }

        let mut event = None;
        if now.has_elapsed(self.last_change, self.window_ms) && raw != self.stable {
            let from = self.stable;
            self.stable = raw;

            let press = raw == Level::Low && self.armed;
            if press {
                self.armed = false;
            }
            event = Some(EdgeEvent {
                from,
                to: raw,
                press,
            });
        }

        if self.stable == Level::High {
            self.armed = true;
        }

        event
    }

    /// Debounced level.
    pub fn stable(&self) -> Level {
        self.stable
    }

    /// Most recent raw sample.
    pub fn last_raw(&self) -> Level {
        self.last_raw
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    pub fn window_ms(&self) -> u32 {
        self.window_ms
    }
}
