//! Transport abstraction — any byte-oriented channel.
//!
//! Concrete implementations:
//! - UART (`esp_idf_hal::uart::UartDriver`, non-blocking reads)
//! - [`NullTransport`] when no peer is wired up
//! - in-memory loopbacks in tests
//!
//! [`LineLink`](super::LineLink) is generic over `Transport`, so a new
//! physical link needs zero changes to the line or command logic.

/// Byte-oriented transport channel.
pub trait Transport {
    /// Error type for this transport.
    type Error: core::fmt::Debug;

    /// Read up to `buf.len()` bytes into `buf`.
    /// Returns the number of bytes actually read.
    /// Returns 0 if no data is available (non-blocking).
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error>;

    /// Write `data` to the transport.
    /// Returns the number of bytes actually written.
    fn write(&mut self, data: &[u8]) -> Result<usize, Self::Error>;

    /// Flush any buffered output.
    fn flush(&mut self) -> Result<(), Self::Error>;
}

/// A null transport that discards all writes and never reads.
pub struct NullTransport;

impl Transport for NullTransport {
    type Error = core::convert::Infallible;

    fn read(&mut self, _buf: &mut [u8]) -> Result<usize, Self::Error> {
        Ok(0)
    }

    fn write(&mut self, data: &[u8]) -> Result<usize, Self::Error> {
        Ok(data.len())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

#[cfg(target_os = "espidf")]
mod uart {
    use esp_idf_hal::delay::NON_BLOCK;
    use esp_idf_hal::sys::EspError;
    use esp_idf_hal::uart::UartDriver;

    use super::Transport;

    impl Transport for UartDriver<'_> {
        type Error = EspError;

        fn read(&mut self, buf: &mut [u8]) -> Result<usize, EspError> {
            UartDriver::read(self, buf, NON_BLOCK)
        }

        fn write(&mut self, data: &[u8]) -> Result<usize, EspError> {
            UartDriver::write(self, data)
        }

        fn flush(&mut self) -> Result<(), EspError> {
            // The driver's TX ring buffer drains in the background.
            Ok(())
        }
    }
}
