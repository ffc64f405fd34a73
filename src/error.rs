//! Unified error types for the PulseBridge firmware.
//!
//! Every port that touches hardware returns one of the small `Copy` error
//! enums below.  None of them is fatal: the controller logs the failure,
//! skips that step for the current poll cycle, and re-derives its state on
//! the next one.

use core::fmt;

// ---------------------------------------------------------------------------
// Top-level firmware error
// ---------------------------------------------------------------------------

/// Every fallible operation in the firmware funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A digital input or output line could not be accessed.
    Pin(PinError),
    /// The serial link failed or delivered an unusable line.
    Serial(SerialError),
    /// The LED strip could not be updated.
    Light(LightError),
    /// Configuration is invalid.
    Config(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pin(e) => write!(f, "pin: {e}"),
            Self::Serial(e) => write!(f, "serial: {e}"),
            Self::Light(e) => write!(f, "light: {e}"),
            Self::Config(msg) => write!(f, "config: {msg}"),
        }
    }
}

impl core::error::Error for Error {}

// ---------------------------------------------------------------------------
// Pin errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinError {
    /// Reading an input line failed.
    ReadFailed,
    /// Driving an output line failed.
    WriteFailed,
}

impl fmt::Display for PinError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ReadFailed => write!(f, "GPIO read failed"),
            Self::WriteFailed => write!(f, "GPIO write failed"),
        }
    }
}

impl From<PinError> for Error {
    fn from(e: PinError) -> Self {
        Self::Pin(e)
    }
}

// ---------------------------------------------------------------------------
// Serial errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SerialError {
    /// The underlying transport reported a read error.
    ReadFailed,
    /// The underlying transport reported a write error or a short write.
    WriteFailed,
    /// A line exceeded the decoder buffer and was discarded.
    LineTooLong,
    /// A line contained bytes that are not valid UTF-8.
    InvalidUtf8,
}

impl fmt::Display for SerialError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ReadFailed => write!(f, "read failed"),
            Self::WriteFailed => write!(f, "write failed"),
            Self::LineTooLong => write!(f, "line too long"),
            Self::InvalidUtf8 => write!(f, "line is not valid UTF-8"),
        }
    }
}

impl From<SerialError> for Error {
    fn from(e: SerialError) -> Self {
        Self::Serial(e)
    }
}

// ---------------------------------------------------------------------------
// Light errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightError {
    /// Pushing pixel data to the strip failed.
    WriteFailed,
}

impl fmt::Display for LightError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WriteFailed => write!(f, "strip write failed"),
        }
    }
}

impl From<LightError> for Error {
    fn from(e: LightError) -> Self {
        Self::Light(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Firmware-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
