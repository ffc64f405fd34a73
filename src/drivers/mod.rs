//! Input debouncing, LED strip output, board bring-up and the task watchdog.

pub mod button;
pub mod hw_init;
pub mod led_strip;
pub mod watchdog;
