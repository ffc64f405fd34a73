//! System configuration parameters
//!
//! All tunable parameters for the PulseBridge controller.  Defaults are
//! compiled in; a JSON document can override any subset of fields.
//! Nothing is persisted across power cycles.

use serde::{Deserialize, Serialize};
use smart_leds::RGB8;

use crate::error::{Error, Result};

/// Number of pixels on the addressable strip.
pub const STRIP_LEN: usize = 16;

/// Longest serial command line accepted, excluding the newline.
pub const MAX_LINE_LEN: usize = 64;

/// Full-brightness white.
pub const WHITE: RGB8 = RGB8 {
    r: 255,
    g: 255,
    b: 255,
};

/// All pixels off.
pub const BLACK: RGB8 = RGB8 { r: 0, g: 0, b: 0 };

/// Core system configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemConfig {
    // --- Inputs ---
    /// Time a raw input must stay unchanged before the change is accepted
    pub debounce_ms: u32,

    // --- Outputs ---
    /// Pulse length for channels 1 and 2
    pub channel_pulse_ms: u32,
    /// Initial pulse length for channel 3 (replaced by `3,<ms>` commands)
    pub channel3_pulse_ms: u32,

    // --- Light ---
    /// Strip pulse length on a switch-1 press
    pub light_pulse_ms: u32,
    /// Strip colour while pulsed, `[r, g, b]` in JSON
    #[serde(with = "colour_serde")]
    pub light_colour: RGB8,

    // --- Status display ---
    /// Minimum time between two status renders
    pub render_interval_ms: u32,

    // --- Serial ---
    pub serial_baud: u32,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 50,

            channel_pulse_ms: 60,
            channel3_pulse_ms: 60,

            light_pulse_ms: 100,
            light_colour: WHITE,

            render_interval_ms: 10,

            serial_baud: 115_200,
        }
    }
}

impl SystemConfig {
    /// Defaults overlaid with the fields present in `json`, then validated.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|_| Error::Config("malformed config JSON"))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would make the controller misbehave.
    ///
    /// Zero-length pulses are allowed (they expire in the cycle that armed
    /// them); a zero debounce window or render interval is not.
    pub fn validate(&self) -> Result<()> {
        if self.debounce_ms == 0 {
            return Err(Error::Config("debounce_ms must be > 0"));
        }
        if self.render_interval_ms == 0 {
            return Err(Error::Config("render_interval_ms must be > 0"));
        }
        if self.serial_baud == 0 {
            return Err(Error::Config("serial_baud must be > 0"));
        }
        Ok(())
    }
}

mod colour_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use smart_leds::RGB8;

    pub fn serialize<S: Serializer>(c: &RGB8, s: S) -> Result<S::Ok, S::Error> {
        [c.r, c.g, c.b].serialize(s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<RGB8, D::Error> {
        let [r, g, b] = <[u8; 3]>::deserialize(d)?;
        Ok(RGB8 { r, g, b })
    }
}
