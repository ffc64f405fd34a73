//! GPIO / peripheral pin assignments for the PulseBridge board
//! (ESP32-S3 stamp with an on-board 16-pixel WS2812B ring).
//!
//! Single source of truth — [`hw_init`](crate::drivers::hw_init) references
//! this module rather than hard-coding pin numbers.

// ---------------------------------------------------------------------------
// Inputs (active-low momentary switches, internal pull-up)
// ---------------------------------------------------------------------------

/// Switch 1: local trigger for channels 1 + 2 and the light pulse.
pub const SWITCH1_GPIO: i32 = 6;
/// Switch 2: remote-notification only.
pub const SWITCH2_GPIO: i32 = 7;

// ---------------------------------------------------------------------------
// Timed outputs (idle LOW, pulsed HIGH)
// ---------------------------------------------------------------------------

pub const OUTPUT1_GPIO: i32 = 38;
pub const OUTPUT2_GPIO: i32 = 39;
pub const OUTPUT3_GPIO: i32 = 8;

// ---------------------------------------------------------------------------
// Addressable LED strip (WS2812B, GRB order)
// ---------------------------------------------------------------------------

/// RMT data line for the strip.
pub const LED_DATA_GPIO: i32 = 5;

// ---------------------------------------------------------------------------
// UART command link
// ---------------------------------------------------------------------------

pub const UART_TX_GPIO: i32 = 43;
pub const UART_RX_GPIO: i32 = 44;
