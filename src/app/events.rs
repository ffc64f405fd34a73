//! Outbound notifications.
//!
//! The [`Controller`](super::controller::Controller) sends these through the
//! [`SerialLink`](super::ports::SerialLink) port when a local switch is
//! pressed, so the peer on the other end of the link can mirror the press.

use crate::serial::wire::WireCode;

/// Messages the device emits on its own initiative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notification {
    /// Switch 1 was pressed (outputs 1 + 2 and the light fired locally).
    Button1Pressed,
    /// Switch 2 was pressed (no local effect).
    Button2Pressed,
}

impl Notification {
    pub const fn wire_code(self) -> WireCode {
        match self {
            Self::Button1Pressed => WireCode::One,
            Self::Button2Pressed => WireCode::Two,
        }
    }

    /// Bytes to put on the wire, newline included.
    pub const fn encode(self) -> [u8; 2] {
        self.wire_code().encode_line()
    }
}
