//! Log-based status sink adapter.
//!
//! Implements [`StatusSink`] by writing the status frame to the ESP-IDF
//! logger (UART / USB-CDC console). The controller renders on a fixed
//! cadence, so the sink only logs when the frame text actually changes.
//! An LCD adapter would implement the same trait.

use log::info;

use crate::app::ports::StatusSink;
use crate::app::snapshot::Snapshot;
use crate::status::StatusFrame;

/// Adapter that logs each distinct [`StatusFrame`] to the console.
#[derive(Default)]
pub struct LogStatusSink {
    last: Option<StatusFrame>,
    renders: u32,
}

impl LogStatusSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last frame that was logged.
    pub fn last_frame(&self) -> Option<&StatusFrame> {
        self.last.as_ref()
    }

    /// Number of render calls, logged or not.
    pub fn renders(&self) -> u32 {
        self.renders
    }
}

impl StatusSink for LogStatusSink {
    fn render(&mut self, snapshot: &Snapshot) {
        self.renders = self.renders.wrapping_add(1);
        let frame = StatusFrame::from_snapshot(snapshot);
        if self.last.as_ref() == Some(&frame) {
            return;
        }
        info!("STATUS | {}", frame);
        self.last = Some(frame);
    }
}
