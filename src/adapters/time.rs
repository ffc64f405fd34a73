//! Monotonic clock adapter.
//!
//! On the device the source is the ESP-IDF high-resolution timer
//! (`esp_timer_get_time`, µs since boot). Host builds read
//! `std::time::Instant` relative to construction instead.
//!
//! [`Clock::now`] truncates to a `u32` millisecond count, which wraps after
//! ~49.7 days; [`Instant`] comparisons are wrap-safe.

use crate::clock::{Clock, Instant};

#[derive(Debug)]
pub struct Esp32TimeAdapter {
    #[cfg(not(target_os = "espidf"))]
    origin: std::time::Instant,
}

impl Esp32TimeAdapter {
    pub fn new() -> Self {
        Self {
            #[cfg(not(target_os = "espidf"))]
            origin: std::time::Instant::now(),
        }
    }

    /// Full-width monotonic microsecond count.
    pub fn uptime_us(&self) -> u64 {
        #[cfg(target_os = "espidf")]
        {
            // SAFETY: reads the system timer, which runs before app_main.
            let us = unsafe { esp_idf_svc::sys::esp_timer_get_time() };
            us.max(0) as u64
        }
        #[cfg(not(target_os = "espidf"))]
        {
            u64::try_from(self.origin.elapsed().as_micros()).unwrap_or(u64::MAX)
        }
    }

    pub fn uptime_ms(&self) -> u64 {
        self.uptime_us() / 1_000
    }
}

impl Default for Esp32TimeAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for Esp32TimeAdapter {
    fn now(&self) -> Instant {
        Instant::from_millis(self.uptime_ms() as u32)
    }
}
