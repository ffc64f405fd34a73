//! Integration test driver for `tests/integration/` submodule.
//!
//! Each `mod` below maps to a file that exercises the controller against
//! mock adapters and a manual clock.  All tests run on the host with no
//! real hardware required.

mod controller_tests;
mod serial_link_tests;
