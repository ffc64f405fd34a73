//! Port traits — the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ Controller (domain)
//! ```
//!
//! Driven adapters (pins, LED strip, serial link, status display) implement
//! these traits.  The [`Controller`](super::controller::Controller) consumes
//! them via generics, so the domain core never touches hardware directly.
//!
//! All ports are used from the single task that owns the controller; none
//! of them needs to be `Sync`.

use embedded_hal::digital::PinState;
use heapless::String;
use smart_leds::RGB8;

use crate::config::MAX_LINE_LEN;
use crate::error::{LightError, PinError, SerialError};

use super::events::Notification;
use super::snapshot::Snapshot;

// ───────────────────────────────────────────────────────────────
// Logical levels and line identifiers
// ───────────────────────────────────────────────────────────────

/// Logical state of a digital line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    High,
    Low,
}

impl Level {
    pub fn is_high(self) -> bool {
        self == Self::High
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::High => "HIGH",
            Self::Low => "LOW",
        }
    }
}

impl From<PinState> for Level {
    fn from(state: PinState) -> Self {
        match state {
            PinState::High => Self::High,
            PinState::Low => Self::Low,
        }
    }
}

impl From<Level> for PinState {
    fn from(level: Level) -> Self {
        match level {
            Level::High => PinState::High,
            Level::Low => PinState::Low,
        }
    }
}

impl From<bool> for Level {
    fn from(high: bool) -> Self {
        if high { Self::High } else { Self::Low }
    }
}

/// The two debounced switch inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputId {
    Switch1,
    Switch2,
}

/// The three timed output channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChannelId {
    Ch1,
    Ch2,
    Ch3,
}

impl ChannelId {
    pub const ALL: [ChannelId; 3] = [ChannelId::Ch1, ChannelId::Ch2, ChannelId::Ch3];

    /// Zero-based array index.
    pub const fn index(self) -> usize {
        match self {
            Self::Ch1 => 0,
            Self::Ch2 => 1,
            Self::Ch3 => 2,
        }
    }
}

/// One received command line, trimmed, without its terminator.
pub type Line = String<MAX_LINE_LEN>;

// ───────────────────────────────────────────────────────────────
// Digital I/O ports (driven adapter: domain ↔ GPIO)
// ───────────────────────────────────────────────────────────────

/// Read-side port for the switch inputs.
pub trait InputPort {
    /// Current raw (undebounced) level of `input`.
    fn read_input(&mut self, input: InputId) -> Result<Level, PinError>;
}

/// Write-side port for the timed output channels.
pub trait OutputPort {
    /// Drive `channel` to `level`.
    fn write_output(&mut self, channel: ChannelId, level: Level) -> Result<(), PinError>;
}

// ───────────────────────────────────────────────────────────────
// Light sink (driven adapter: domain → addressable strip)
// ───────────────────────────────────────────────────────────────

/// An addressable strip driven as a single all-on / all-off element.
pub trait LightSink {
    /// Stage `colour` on every pixel.  Nothing is visible until [`show`].
    ///
    /// [`show`]: LightSink::show
    fn set_all(&mut self, colour: RGB8);

    /// Latch the staged pixels onto the strip.
    fn show(&mut self) -> Result<(), LightError>;
}

// ───────────────────────────────────────────────────────────────
// Status sink (driven adapter: domain → display)
// ───────────────────────────────────────────────────────────────

/// Receives a fresh [`Snapshot`] at most once per render interval.
pub trait StatusSink {
    fn render(&mut self, snapshot: &Snapshot);
}

// ───────────────────────────────────────────────────────────────
// Serial link (driven adapter: domain ↔ UART)
// ───────────────────────────────────────────────────────────────

/// Line-oriented, bidirectional command link.
pub trait SerialLink {
    /// Return the next completed line, or `Ok(None)` if none is ready.
    /// Must never block.
    fn read_line(&mut self) -> Result<Option<Line>, SerialError>;

    /// Send one outbound notification line.
    fn notify(&mut self, notification: Notification) -> Result<(), SerialError>;
}
