//! One-shot board bring-up.
//!
//! Claims the switch and channel GPIOs, the command UART and the RMT
//! channel for the LED strip. Called once from `main()` before the poll
//! loop starts; every pin number comes from [`crate::pins`].

use crate::config::SystemConfig;

#[cfg(target_os = "espidf")]
use crate::pins;
#[cfg(target_os = "espidf")]
use log::info;

// ── Error type ────────────────────────────────────────────────

/// Errors during one-shot peripheral bring-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HwInitError {
    PeripheralsTaken,
    GpioConfigFailed(i32),
    UartInitFailed(i32),
    RmtInitFailed(i32),
    InvalidConfig(&'static str),
}

impl core::fmt::Display for HwInitError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::PeripheralsTaken     => write!(f, "peripherals already taken"),
            Self::GpioConfigFailed(rc) => write!(f, "GPIO config failed (rc={})", rc),
            Self::UartInitFailed(rc)   => write!(f, "UART init failed (rc={})", rc),
            Self::RmtInitFailed(rc)    => write!(f, "RMT init failed (rc={})", rc),
            Self::InvalidConfig(why)   => write!(f, "invalid config: {}", why),
        }
    }
}

impl core::error::Error for HwInitError {}

/// Reject configs the board cannot run with before touching hardware.
pub fn check_config(config: &SystemConfig) -> Result<(), HwInitError> {
    config.validate().map_err(|e| match e {
        crate::error::Error::Config(why) => HwInitError::InvalidConfig(why),
        _ => HwInitError::InvalidConfig("unknown"),
    })
}

#[cfg(target_os = "espidf")]
pub use board::{Board, init_board};

#[cfg(target_os = "espidf")]
mod board {
    use esp_idf_hal::gpio::{AnyIOPin, Input, Output, PinDriver, Pull};
    use esp_idf_hal::peripherals::Peripherals;
    use esp_idf_hal::rmt::TxRmtDriver;
    use esp_idf_hal::rmt::config::TransmitConfig;
    use esp_idf_hal::uart::{UartDriver, config::Config as UartConfig};
    use esp_idf_hal::units::Hertz;

    use super::*;
    use crate::drivers::led_strip::{LedStrip, Ws2812Rmt};

    pub type SwitchPin = PinDriver<'static, AnyIOPin, Input>;
    pub type ChannelPin = PinDriver<'static, AnyIOPin, Output>;

    /// Everything the poll loop needs, already configured.
    pub struct Board {
        pub switches: [SwitchPin; 2],
        pub outputs: [ChannelPin; 3],
        pub strip: LedStrip<Ws2812Rmt<'static>>,
        pub uart: UartDriver<'static>,
    }

    pub fn init_board(config: &SystemConfig) -> Result<Board, HwInitError> {
        check_config(config)?;
        let p = Peripherals::take().map_err(|_| HwInitError::PeripheralsTaken)?;

        // SAFETY: each GPIO number is claimed exactly once here, and the
        // typed pins in `p.pins` are never used elsewhere.
        let pin = |num: i32| unsafe { AnyIOPin::new(num) };

        let switches = [
            switch(pin(pins::SWITCH1_GPIO))?,
            switch(pin(pins::SWITCH2_GPIO))?,
        ];
        let outputs = [
            channel(pin(pins::OUTPUT1_GPIO))?,
            channel(pin(pins::OUTPUT2_GPIO))?,
            channel(pin(pins::OUTPUT3_GPIO))?,
        ];
        info!(
            "hw_init: switches GPIO{}/{}, outputs GPIO{}/{}/{}",
            pins::SWITCH1_GPIO,
            pins::SWITCH2_GPIO,
            pins::OUTPUT1_GPIO,
            pins::OUTPUT2_GPIO,
            pins::OUTPUT3_GPIO
        );

        let uart_cfg = UartConfig::new().baudrate(Hertz(config.serial_baud));
        let uart = UartDriver::new(
            p.uart1,
            pin(pins::UART_TX_GPIO),
            pin(pins::UART_RX_GPIO),
            Option::<AnyIOPin>::None,
            Option::<AnyIOPin>::None,
            &uart_cfg,
        )
        .map_err(|e| HwInitError::UartInitFailed(e.code()))?;
        info!("hw_init: UART1 at {} baud", config.serial_baud);

        let rmt_cfg = TransmitConfig::new().clock_divider(1);
        let tx = TxRmtDriver::new(p.rmt.channel0, pin(pins::LED_DATA_GPIO), &rmt_cfg)
            .map_err(|e| HwInitError::RmtInitFailed(e.code()))?;
        info!("hw_init: LED strip on GPIO{}", pins::LED_DATA_GPIO);

        Ok(Board {
            switches,
            outputs,
            strip: LedStrip::new(Ws2812Rmt::new(tx)),
            uart,
        })
    }

    fn switch(pin: AnyIOPin) -> Result<SwitchPin, HwInitError> {
        let mut drv = PinDriver::input(pin).map_err(|e| HwInitError::GpioConfigFailed(e.code()))?;
        drv.set_pull(Pull::Up)
            .map_err(|e| HwInitError::GpioConfigFailed(e.code()))?;
        Ok(drv)
    }

    fn channel(pin: AnyIOPin) -> Result<ChannelPin, HwInitError> {
        let mut drv = PinDriver::output(pin).map_err(|e| HwInitError::GpioConfigFailed(e.code()))?;
        drv.set_low()
            .map_err(|e| HwInitError::GpioConfigFailed(e.code()))?;
        Ok(drv)
    }
}
