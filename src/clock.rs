//! Monotonic millisecond time.
//!
//! Timestamps are a `u32` millisecond counter that wraps after ~49.7 days.
//! Every elapsed-time comparison in the firmware goes through
//! [`Instant::millis_since`], which uses `wrapping_sub`, so a pulse that
//! starts just before the wrap still expires on schedule just after it.
//!
//! ```text
//!   started_at = 0xFFFF_FFF0        now = 0x0000_0020
//!   now.wrapping_sub(started_at) == 0x30  (48 ms)
//! ```

/// A point on the wrapping millisecond timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Instant(u32);

impl Instant {
    /// Timeline origin (boot).
    pub const ZERO: Self = Self(0);

    pub const fn from_millis(ms: u32) -> Self {
        Self(ms)
    }

    pub const fn as_millis(self) -> u32 {
        self.0
    }

    /// Milliseconds elapsed from `earlier` to `self`, modulo 2^32.
    pub const fn millis_since(self, earlier: Instant) -> u32 {
        self.0.wrapping_sub(earlier.0)
    }

    /// `true` once at least `duration_ms` has passed since `start`.
    pub const fn has_elapsed(self, start: Instant, duration_ms: u32) -> bool {
        self.millis_since(start) >= duration_ms
    }

    /// The instant `ms` milliseconds after `self` (wrapping).
    #[must_use]
    pub const fn add_millis(self, ms: u32) -> Self {
        Self(self.0.wrapping_add(ms))
    }
}

/// Monotonic time source.
pub trait Clock {
    fn now(&self) -> Instant;
}
