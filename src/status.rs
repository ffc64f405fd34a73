//! Text layout of the status display.
//!
//! Mirrors the 128×128 LCD page of the bench unit, one entry per text row:
//!
//! ```text
//! GPIO Status
//! IN  SW1: HIGH
//! IN  SW2: HIGH
//! OUT CH1: LOW
//! OUT CH2: LOW
//! OUT CH3: LOW (60ms)
//! LEDs: OFF
//! Serial: No data
//! ```
//!
//! A frame is pure data built from a [`Snapshot`]; any status sink (LCD,
//! log, test recorder) can draw it.

use core::fmt::{self, Write as _};

use heapless::{String, Vec};

use crate::app::snapshot::{Direction, Snapshot};

pub const FRAME_LINES: usize = 8;
pub const LINE_WIDTH: usize = 32;

pub type FrameLine = String<LINE_WIDTH>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusFrame {
    lines: Vec<FrameLine, FRAME_LINES>,
}

impl StatusFrame {
    pub fn from_snapshot(snap: &Snapshot) -> Self {
        let mut lines = Vec::new();

        push_row(&mut lines, format_args!("GPIO Status"));
        push_row(&mut lines, format_args!("IN  SW1: {}", snap.inputs[0].as_str()));
        push_row(&mut lines, format_args!("IN  SW2: {}", snap.inputs[1].as_str()));
        push_row(&mut lines, format_args!("OUT CH1: {}", snap.outputs[0].as_str()));
        push_row(&mut lines, format_args!("OUT CH2: {}", snap.outputs[1].as_str()));
        push_row(&mut lines, format_args!(
            "OUT CH3: {} ({}ms)",
            snap.outputs[2].as_str(),
            snap.channel3_pulse_ms
        ));
        push_row(&mut lines, format_args!("LEDs: {}", if snap.light_on { "ON" } else { "OFF" }));

        match (snap.last_command, snap.last_command_age_ms()) {
            (Some(rec), Some(age_ms)) => {
                let dir = match rec.direction {
                    Direction::Received => "rx",
                    Direction::Sent => "tx",
                };
                push_row(&mut lines, format_args!("Serial: {} {} ({}s)", dir, rec.code, age_ms / 1000));
            }
            _ => push_row(&mut lines, format_args!("Serial: No data")),
        }

        Self { lines }
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }
}

fn push_row(lines: &mut Vec<FrameLine, FRAME_LINES>, args: fmt::Arguments<'_>) {
    let mut line = FrameLine::new();
    // Over-wide rows are truncated by the fixed buffer.
    let _ = line.write_fmt(args);
    let _ = lines.push(line);
}

impl fmt::Display for StatusFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines().enumerate() {
            if i > 0 {
                f.write_str(" | ")?;
            }
            f.write_str(line)?;
        }
        Ok(())
    }
}
