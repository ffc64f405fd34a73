//! Task watchdog (TWDT) guard for the poll loop.
//!
//! Subscribes the main task to the ESP-IDF task watchdog; if the loop stops
//! calling [`Watchdog::feed`] for longer than the timeout, the chip panics
//! and reboots. On the host it only counts feeds.

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::*;

/// Poll cycles are ~1 ms, so a stall of this length is never legitimate.
pub const WATCHDOG_TIMEOUT_MS: u32 = 5_000;

pub struct Watchdog {
    #[cfg(target_os = "espidf")]
    subscribed: bool,
    feeds: core::cell::Cell<u32>,
}

impl Watchdog {
    pub fn new(timeout_ms: u32) -> Self {
        #[cfg(target_os = "espidf")]
        {
            let cfg = esp_task_wdt_config_t {
                timeout_ms,
                idle_core_mask: 0,
                trigger_panic: true,
            };
            // SAFETY: called once from the main task during bring-up.
            let ret = unsafe { esp_task_wdt_reconfigure(&cfg) };
            if ret != ESP_OK {
                log::warn!("watchdog: reconfigure returned {} (already set up?)", ret);
            }

            // SAFETY: a null handle subscribes the calling task.
            let ret = unsafe { esp_task_wdt_add(core::ptr::null_mut()) };
            let subscribed = ret == ESP_OK;
            if subscribed {
                log::info!("watchdog: subscribed ({} ms, panic on trigger)", timeout_ms);
            } else {
                log::warn!("watchdog: subscribe failed ({})", ret);
            }
            Self {
                subscribed,
                feeds: core::cell::Cell::new(0),
            }
        }

        #[cfg(not(target_os = "espidf"))]
        {
            log::debug!("watchdog(sim): {} ms timeout ignored", timeout_ms);
            Self {
                feeds: core::cell::Cell::new(0),
            }
        }
    }

    pub fn feed(&self) {
        self.feeds.set(self.feeds.get().wrapping_add(1));
        #[cfg(target_os = "espidf")]
        if self.subscribed {
            // SAFETY: only resets the calling task's TWDT entry.
            unsafe {
                esp_task_wdt_reset();
            }
        }
    }

    pub fn feeds(&self) -> u32 {
        self.feeds.get()
    }
}

impl Default for Watchdog {
    fn default() -> Self {
        Self::new(WATCHDOG_TIMEOUT_MS)
    }
}
