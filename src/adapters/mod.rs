//! Adapters — concrete implementations of the hexagonal port traits.
//!
//! | Adapter    | Implements   | Connects to                  |
//! |------------|--------------|------------------------------|
//! | `hardware` | InputPort    | Switch GPIOs (pull-up)       |
//! |            | OutputPort   | Channel GPIOs                |
//! |            | LightSink    | WS2812B strip over RMT       |
//! | `log_sink` | StatusSink   | Serial log output            |
//! | `time`     | Clock        | ESP32 system timer           |
//!
//! The serial [`SerialLink`](crate::app::ports::SerialLink) adapter lives in
//! [`crate::serial`] next to its codec.

pub mod hardware;
pub mod log_sink;
pub mod time;
