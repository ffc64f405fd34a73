//! Hardware adapter — bridges real peripherals to domain port traits.
//!
//! Owns the switch inputs, the three output lines and the LED strip,
//! exposing them through [`InputPort`], [`OutputPort`] and [`LightSink`].
//! Pins are anything implementing the `embedded-hal` 1.0 digital traits:
//! `esp_idf_hal::gpio::PinDriver` on the device, plain fakes in tests.

use embedded_hal::digital::{Error as _, InputPin, OutputPin};
use log::debug;
use smart_leds::{RGB8, SmartLedsWrite};

use crate::app::ports::{ChannelId, InputId, InputPort, Level, LightSink, OutputPort};
use crate::drivers::led_strip::LedStrip;
use crate::error::{LightError, PinError};

/// Concrete adapter that combines all hardware behind port traits.
pub struct HardwareAdapter<I, O, W> {
    inputs: [I; 2],
    outputs: [O; 3],
    strip: LedStrip<W>,
}

impl<I, O, W> HardwareAdapter<I, O, W>
where
    W: SmartLedsWrite<Color = RGB8>,
    W::Error: core::fmt::Debug,
{
    /// `inputs` = [switch 1, switch 2]; `outputs` = [ch1, ch2, ch3].
    pub fn new(inputs: [I; 2], outputs: [O; 3], strip: LedStrip<W>) -> Self {
        Self {
            inputs,
            outputs,
            strip,
        }
    }

    pub fn strip(&self) -> &LedStrip<W> {
        &self.strip
    }

    pub fn output_pin(&self, channel: ChannelId) -> &O {
        &self.outputs[channel.index()]
    }
}

// ── InputPort implementation ──────────────────────────────────

impl<I: InputPin, O, W> InputPort for HardwareAdapter<I, O, W> {
    fn read_input(&mut self, input: InputId) -> Result<Level, PinError> {
        let pin = match input {
            InputId::Switch1 => &mut self.inputs[0],
            InputId::Switch2 => &mut self.inputs[1],
        };
        pin.is_high().map(Level::from).map_err(|e| {
            debug!("{:?} read error: {:?}", input, e.kind());
            PinError::ReadFailed
        })
    }
}

// ── OutputPort implementation ─────────────────────────────────

impl<I, O: OutputPin, W> OutputPort for HardwareAdapter<I, O, W> {
    fn write_output(&mut self, channel: ChannelId, level: Level) -> Result<(), PinError> {
        self.outputs[channel.index()]
            .set_state(level.into())
            .map_err(|e| {
                debug!("{:?} write error: {:?}", channel, e.kind());
                PinError::WriteFailed
            })
    }
}

// ── LightSink implementation ──────────────────────────────────

impl<I, O, W> LightSink for HardwareAdapter<I, O, W>
where
    W: SmartLedsWrite<Color = RGB8>,
    W::Error: core::fmt::Debug,
{
    fn set_all(&mut self, colour: RGB8) {
        self.strip.set_all(colour);
    }

    fn show(&mut self) -> Result<(), LightError> {
        self.strip.show()
    }
}
