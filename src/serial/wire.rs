//! Shared single-character wire alphabet.
//!
//! Both directions of the link use the same characters:
//!
//! ```text
//!   peer ──"1\n" / "2\n" / "3\n" / "3,<ms>\n"──▶ device   (InboundCommand)
//!   peer ◀──"1\n" / "2\n"──────────────────────── device   (Notification)
//! ```
//!
//! Inbound and outbound traffic are separate Rust types that only meet
//! here, so an outbound notification can never be mistaken for a command
//! by the code that produced it.

/// Separator between the command character and its parameter.
pub const PARAM_SEPARATOR: char = ',';

/// Line terminator on the wire.
pub const LINE_TERMINATOR: u8 = b'\n';

/// Channel-selecting characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WireCode {
    One,
    Two,
    Three,
}

impl WireCode {
    pub const fn as_char(self) -> char {
        match self {
            Self::One => '1',
            Self::Two => '2',
            Self::Three => '3',
        }
    }

    pub const fn as_byte(self) -> u8 {
        self.as_char() as u8
    }

    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '1' => Some(Self::One),
            '2' => Some(Self::Two),
            '3' => Some(Self::Three),
            _ => None,
        }
    }

    /// The complete outbound line for a bare code.
    pub const fn encode_line(self) -> [u8; 2] {
        [self.as_byte(), LINE_TERMINATOR]
    }
}
