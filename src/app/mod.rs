//! Application core — pure domain logic, zero I/O.
//!
//! This module contains the rules of the PulseBridge controller: command
//! parsing, pulse timing, snapshot building, and the per-cycle orchestration
//! in [`controller`].  All interaction with hardware happens through **port
//! traits** defined in [`ports`], keeping this layer fully testable without
//! real peripherals.

pub mod commands;
pub mod controller;
pub mod events;
pub mod ports;
pub mod pulse;
pub mod snapshot;
