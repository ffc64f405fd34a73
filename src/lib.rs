//! PulseBridge firmware library.
//!
//! Exposes the pure-logic modules for integration testing and host-side
//! simulation. All ESP-IDF-specific code is guarded by
//! `#[cfg(target_os = "espidf")]` within each module.

#![deny(unused_must_use)]

pub mod app;
pub mod clock;
pub mod config;
pub mod error;
pub mod pins;
pub mod serial;
pub mod status;

// Host builds compile these too; the peripheral code inside is cfg-gated.
pub mod adapters;
pub mod drivers;
