//! Point-in-time controller state for the status display.

use crate::clock::Instant;

use super::ports::Level;

/// Which way a command character travelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Received,
    Sent,
}

/// Last command character seen on the serial link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandRecord {
    pub code: char,
    pub direction: Direction,
    pub at: Instant,
}

/// Read-only summary handed to a [`StatusSink`](super::ports::StatusSink).
/// Rebuilt every render; owns no state of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot {
    pub taken_at: Instant,
    /// Raw levels of switch 1 and switch 2 as last sampled.
    pub inputs: [Level; 2],
    /// Levels of output channels 1–3.
    pub outputs: [Level; 3],
    /// Pulse length channel 3 will use next.
    pub channel3_pulse_ms: u32,
    pub light_on: bool,
    pub last_command: Option<CommandRecord>,
}

impl Snapshot {
    /// Age of the last command, `None` before any traffic.
    pub fn last_command_age_ms(&self) -> Option<u32> {
        self.last_command
            .map(|rec| self.taken_at.millis_since(rec.at))
    }
}

/// Rate limiter for status renders, independent of the poll rate.
#[derive(Debug, Clone, Copy)]
pub struct RenderThrottle {
    interval_ms: u32,
    last: Option<Instant>,
}

impl RenderThrottle {
    pub const fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms,
            last: None,
        }
    }

    /// `true` if a render is due at `now`; records `now` as the render time.
    pub fn ready(&mut self, now: Instant) -> bool {
        match self.last {
            Some(last) if !now.has_elapsed(last, self.interval_ms) => false,
            _ => {
                self.last = Some(now);
                true
            }
        }
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }
}
