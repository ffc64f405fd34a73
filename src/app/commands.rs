//! Inbound commands to the controller.
//!
//! One command per serial line.  Only the first character selects the
//! command; channel 3 optionally carries a `,<milliseconds>` parameter.
//!
//! | Line        | Command                                   |
//! |-------------|-------------------------------------------|
//! | `1...`      | `ActivateChannel1`                        |
//! | `2...`      | `ActivateChannel2`                        |
//! | `3`         | `ActivateChannel3 { duration_ms: None }`  |
//! | `3,150`     | `ActivateChannel3 { duration_ms: Some(150) }` |
//! | `3,abc`     | `ActivateChannel3 { duration_ms: None }`  |
//! | anything else / empty | `Unrecognized`                  |

use log::{debug, warn};

use crate::serial::wire::{PARAM_SEPARATOR, WireCode};

/// Commands that the serial peer can send into the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InboundCommand {
    /// Pulse output channel 1 for the fixed channel duration.
    ActivateChannel1,

    /// Pulse output channel 2 for the fixed channel duration.
    ActivateChannel2,

    /// Pulse output channel 3.  `Some` replaces the stored duration first;
    /// `None` keeps the previous one.
    ActivateChannel3 { duration_ms: Option<u32> },

    /// Unknown or empty line.  Ignored.
    Unrecognized,
}

impl InboundCommand {
    /// Parse one trimmed line.  Never fails; malformed input maps to
    /// [`InboundCommand::Unrecognized`] or a `None` duration.
    pub fn parse(line: &str) -> Self {
        let Some(first) = line.chars().next() else {
            return Self::Unrecognized;
        };

        match WireCode::from_char(first) {
            Some(WireCode::One) => Self::ActivateChannel1,
            Some(WireCode::Two) => Self::ActivateChannel2,
            Some(WireCode::Three) => Self::ActivateChannel3 {
                duration_ms: parse_duration_param(line),
            },
            None => Self::Unrecognized,
        }
    }

    /// Wire character of the command, if it has one.
    pub fn wire_char(self) -> Option<char> {
        match self {
            Self::ActivateChannel1 => Some(WireCode::One.as_char()),
            Self::ActivateChannel2 => Some(WireCode::Two.as_char()),
            Self::ActivateChannel3 { .. } => Some(WireCode::Three.as_char()),
            Self::Unrecognized => None,
        }
    }
}

/// Text after the first separator as a decimal millisecond count.
fn parse_duration_param(line: &str) -> Option<u32> {
    let Some((_, param)) = line.split_once(PARAM_SEPARATOR) else {
        debug!("cmd 3: no duration parameter, keeping previous");
        return None;
    };

    let param = param.trim();
    match param.parse::<u32>() {
        Ok(ms) => {
            debug!("cmd 3: duration text '{}' -> {} ms", param, ms);
            Some(ms)
        }
        Err(_) => {
            warn!("cmd 3: invalid duration '{}', keeping previous", param);
            None
        }
    }
}
