//! Addressable LED strip driver.
//!
//! [`LedStrip`] keeps a frame buffer of [`STRIP_LEN`] pixels and pushes it
//! to any [`SmartLedsWrite`] backend on [`show`](LedStrip::show).
//!
//! ## Dual-target design
//!
//! On ESP-IDF: [`Ws2812Rmt`] encodes WS2812B bit timings on an RMT channel.
//! On host/test: any in-memory `SmartLedsWrite` implementation.

use smart_leds::{RGB8, SmartLedsWrite};

use crate::config::{BLACK, STRIP_LEN};
use crate::error::LightError;

#[cfg(target_os = "espidf")]
pub use rmt::Ws2812Rmt;

pub struct LedStrip<W> {
    writer: W,
    pixels: [RGB8; STRIP_LEN],
}

impl<W> LedStrip<W>
where
    W: SmartLedsWrite<Color = RGB8>,
    W::Error: core::fmt::Debug,
{
    /// Strip with all pixels staged off.  Nothing is written until `show`.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            pixels: [BLACK; STRIP_LEN],
        }
    }

    pub fn set_all(&mut self, colour: RGB8) {
        self.pixels = [colour; STRIP_LEN];
    }

    pub fn show(&mut self) -> Result<(), LightError> {
        self.writer.write(self.pixels.iter().copied()).map_err(|e| {
            log::debug!("strip write error: {:?}", e);
            LightError::WriteFailed
        })
    }

    /// Staged frame.
    pub fn pixels(&self) -> &[RGB8; STRIP_LEN] {
        &self.pixels
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }
}

#[cfg(target_os = "espidf")]
mod rmt {
    use core::time::Duration;

    use esp_idf_hal::rmt::{FixedLengthSignal, PinState, Pulse, TxRmtDriver};
    use esp_idf_hal::sys::EspError;
    use smart_leds::{RGB8, SmartLedsWrite};

    use crate::config::STRIP_LEN;

    const BITS_PER_PIXEL: usize = 24;

    /// WS2812B over one RMT TX channel (clock divider 1).
    pub struct Ws2812Rmt<'d> {
        tx: TxRmtDriver<'d>,
    }

    impl<'d> Ws2812Rmt<'d> {
        pub fn new(tx: TxRmtDriver<'d>) -> Self {
            Self { tx }
        }
    }

    impl SmartLedsWrite for Ws2812Rmt<'_> {
        type Error = EspError;
        type Color = RGB8;

        fn write<T, I>(&mut self, iterator: T) -> Result<(), EspError>
        where
            T: IntoIterator<Item = I>,
            I: Into<RGB8>,
        {
            let ticks_hz = self.tx.counter_clock()?;
            let t0h = Pulse::new_with_duration(ticks_hz, PinState::High, &Duration::from_nanos(350))?;
            let t0l = Pulse::new_with_duration(ticks_hz, PinState::Low, &Duration::from_nanos(800))?;
            let t1h = Pulse::new_with_duration(ticks_hz, PinState::High, &Duration::from_nanos(700))?;
            let t1l = Pulse::new_with_duration(ticks_hz, PinState::Low, &Duration::from_nanos(600))?;

            let mut signal = FixedLengthSignal::<{ STRIP_LEN * BITS_PER_PIXEL }>::new();
            for (i, colour) in iterator.into_iter().take(STRIP_LEN).enumerate() {
                let c: RGB8 = colour.into();
                // GRB order, MSB first.
                let grb = (u32::from(c.g) << 16) | (u32::from(c.r) << 8) | u32::from(c.b);
                for bit in 0..BITS_PER_PIXEL {
                    let pair = if grb & (1 << (23 - bit)) != 0 {
                        (t1h, t1l)
                    } else {
                        (t0h, t0l)
                    };
                    signal.set(i * BITS_PER_PIXEL + bit, &pair)?;
                }
            }

            // ~0.5 ms for 16 pixels.
            self.tx.start_blocking(&signal)
        }
    }
}
