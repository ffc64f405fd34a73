//! Newline-delimited line decoder.
//!
//! Wire format:
//! ```text
//! ┌──────────────────────────┬────┐
//! │ command text (≤ 64 B)    │ \n │      \r bytes are dropped
//! └──────────────────────────┴────┘
//! ```
//!
//! The decoder accumulates bytes one at a time and yields a complete,
//! whitespace-trimmed line when the terminator arrives.  This handles
//! partial reads gracefully — a single transport read may return part of a
//! line, or the tail of one line and the start of the next.
//!
//! A line longer than [`MAX_LINE_LEN`] is discarded up to its terminator
//! and reported once as [`SerialError::LineTooLong`].

use heapless::Vec;

use crate::app::ports::Line;
use crate::config::MAX_LINE_LEN;
use crate::error::SerialError;
use crate::serial::wire::LINE_TERMINATOR;

/// Streaming line decoder.
pub struct LineDecoder {
    buf: Vec<u8, MAX_LINE_LEN>,
    /// Set once the current line has outgrown `buf`.
    overflowed: bool,
}

impl Default for LineDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl LineDecoder {
    pub fn new() -> Self {
        Self {
            buf: Vec::new(),
            overflowed: false,
        }
    }

    /// Feed one byte.
    ///
    /// Returns `Ok(Some(line))` when `byte` terminates a line.
    pub fn push(&mut self, byte: u8) -> Result<Option<Line>, SerialError> {
        if byte == LINE_TERMINATOR {
            if self.overflowed {
                self.reset();
                return Err(SerialError::LineTooLong);
            }
            let line = self.finish();
            self.reset();
            return line.map(Some);
        }

        // CR never reaches the buffer, so a full-length CRLF line still fits.
        if byte == b'\r' {
            return Ok(None);
        }

        if !self.overflowed && self.buf.push(byte).is_err() {
            self.overflowed = true;
        }
        Ok(None)
    }

    /// Drop any partially received line.
    pub fn reset(&mut self) {
        self.buf.clear();
        self.overflowed = false;
    }

    /// Bytes buffered for the line in progress.
    pub fn pending(&self) -> usize {
        self.buf.len()
    }

    fn finish(&self) -> Result<Line, SerialError> {
        let text = core::str::from_utf8(&self.buf).map_err(|_| SerialError::InvalidUtf8)?;
        let mut line = Line::new();
        line.push_str(text.trim())
            .map_err(|()| SerialError::LineTooLong)?;
        Ok(line)
    }
}
