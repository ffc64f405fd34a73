//! Serial command link.
//!
//! ```text
//!   Transport (bytes) ──▶ LineDecoder ──▶ Line ──▶ InboundCommand::parse
//!   Notification ──▶ WireCode::encode_line ──▶ Transport (bytes)
//! ```
//!
//! [`LineLink`] glues a byte [`Transport`] to the controller's
//! [`SerialLink`] port.  Each `read_line` performs at most one transport
//! read, so the work done per poll cycle is bounded even when the peer
//! streams continuously; bytes after a completed line stay buffered for the
//! next cycle.

pub mod codec;
pub mod transport;
pub mod wire;

use log::{debug, warn};

use crate::app::events::Notification;
use crate::app::ports::{Line, SerialLink};
use crate::error::SerialError;

use codec::LineDecoder;
use transport::Transport;

/// Bytes pulled from the transport per read.
const RX_CHUNK: usize = 32;

/// Line-oriented [`SerialLink`] over any byte transport.
pub struct LineLink<T: Transport> {
    transport: T,
    decoder: LineDecoder,
    rx: [u8; RX_CHUNK],
    rx_pos: usize,
    rx_len: usize,
}

impl<T: Transport> LineLink<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            decoder: LineDecoder::new(),
            rx: [0; RX_CHUNK],
            rx_pos: 0,
            rx_len: 0,
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Feed buffered bytes to the decoder until a line completes.
    fn drain_buffered(&mut self) -> Result<Option<Line>, SerialError> {
        while self.rx_pos < self.rx_len {
            let byte = self.rx[self.rx_pos];
            self.rx_pos += 1;
            if let Some(line) = self.decoder.push(byte)? {
                return Ok(Some(line));
            }
        }
        Ok(None)
    }
}

impl<T: Transport> SerialLink for LineLink<T> {
    fn read_line(&mut self) -> Result<Option<Line>, SerialError> {
        if let Some(line) = self.drain_buffered()? {
            return Ok(Some(line));
        }

        let n = self.transport.read(&mut self.rx).map_err(|e| {
            debug!("transport read error: {:?}", e);
            SerialError::ReadFailed
        })?;
        self.rx_pos = 0;
        self.rx_len = n;

        self.drain_buffered()
    }

    fn notify(&mut self, notification: Notification) -> Result<(), SerialError> {
        let frame = notification.encode();
        let written = self.transport.write(&frame).map_err(|e| {
            debug!("transport write error: {:?}", e);
            SerialError::WriteFailed
        })?;
        if written != frame.len() {
            warn!("short write: {}/{} bytes", written, frame.len());
            return Err(SerialError::WriteFailed);
        }
        self.transport
            .flush()
            .map_err(|_| SerialError::WriteFailed)
    }
}
