//! PulseBridge Firmware — Main Entry Point
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                  Adapters (outer ring)                     │
//! │                                                            │
//! │  HardwareAdapter        LineLink<UartDriver>  Esp32Time    │
//! │  (Input+Output+Light)   (SerialLink)          (Clock)      │
//! │  LogStatusSink (StatusSink)                                │
//! │                                                            │
//! │  ────────────── Port Trait Boundary ───────────────        │
//! │                                                            │
//! │  ┌──────────────────────────────────────────────────┐      │
//! │  │          Controller (pure logic)                 │      │
//! │  │  Debounce · Pulse timers · Render throttle       │      │
//! │  └──────────────────────────────────────────────────┘      │
//! └────────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use anyhow::{Context, Result};
use esp_idf_hal::delay::FreeRtos;
use log::info;

use pulsebridge::adapters::hardware::HardwareAdapter;
use pulsebridge::adapters::log_sink::LogStatusSink;
use pulsebridge::adapters::time::Esp32TimeAdapter;
use pulsebridge::app::controller::Controller;
use pulsebridge::clock::Clock;
use pulsebridge::config::SystemConfig;
use pulsebridge::drivers::hw_init;
use pulsebridge::drivers::watchdog::Watchdog;
use pulsebridge::serial::LineLink;

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("PulseBridge v{}", env!("CARGO_PKG_VERSION"));

    // ── 2. Config + board ─────────────────────────────────────
    // Build-time override, e.g. PULSEBRIDGE_CONFIG='{"channel3_pulse_ms":250}'.
    let config = match option_env!("PULSEBRIDGE_CONFIG") {
        Some(json) => SystemConfig::from_json(json).context("PULSEBRIDGE_CONFIG")?,
        None => SystemConfig::default(),
    };
    info!("Config: {:?}", config);
    let board = hw_init::init_board(&config).context("board bring-up")?;

    // ── 3. Adapters ───────────────────────────────────────────
    let mut hw = HardwareAdapter::new(board.switches, board.outputs, board.strip);
    let mut link = LineLink::new(board.uart);
    let mut status = LogStatusSink::new();
    let clock = Esp32TimeAdapter::new();
    let watchdog = Watchdog::default();

    // ── 4. Controller ─────────────────────────────────────────
    let mut controller = Controller::new(config);
    controller.start(&mut hw);

    info!("System ready. Entering poll loop.");

    // ── 5. Poll loop ──────────────────────────────────────────
    loop {
        controller.poll(clock.now(), &mut hw, &mut link, &mut status);
        watchdog.feed();
        // Yield so the idle task runs and the TWDT stays serviced.
        FreeRtos::delay_ms(1);
    }
}
