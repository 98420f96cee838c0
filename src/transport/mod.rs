//! # Printer Transport Layer
//!
//! This module provides communication backends for sending encoded commands
//! to the printer.
//!
//! ## Available Transports
//!
//! - [`tcp`]: stream socket to a network printer (default port 9100)
//! - [`serial`]: serial line (COM port / tty device)
//!
//! The session core is transport-agnostic: it only needs the [`Transport`]
//! contract — write some bytes, learn how many were accepted, and close the
//! connection when the job is done. Timeouts, pacing, and reconnection are
//! transport-layer concerns; the core never retries.

pub mod serial;
pub mod tcp;

pub use serial::SerialTransport;
pub use tcp::TcpTransport;

use crate::error::OneilError;

/// Byte-sink contract consumed by the session state machine.
///
/// `write` reports the number of bytes the connection accepted, which the
/// document-start handshake inspects; everything else about delivery is the
/// implementation's business. Implementations are expected to block.
pub trait Transport {
    /// Write `data`, returning how many bytes were accepted.
    fn write(&mut self, data: &[u8]) -> Result<usize, OneilError>;

    /// Shut the connection down. The session never reopens a transport.
    fn close(&mut self) -> Result<(), OneilError>;
}

/// Connection target, decided once at construction.
///
/// The two bindings are mutually exclusive; selecting one here rather than
/// via optional constructor arguments keeps the session core independent of
/// the concrete transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Binding {
    /// Network printer at `host:port` (printers listen on 9100 by default)
    Tcp {
        /// Host name or IP address
        host: String,
        /// TCP port
        port: u16,
    },
    /// Serial-attached printer
    Serial {
        /// Device path (e.g. `/dev/ttyUSB0`)
        device: String,
        /// Line speed in baud
        baud: u32,
    },
}

impl Binding {
    /// Open the selected transport.
    ///
    /// ## Errors
    ///
    /// Returns a `Transport` error when the target is unreachable or the
    /// device cannot be opened/configured; the session is unusable in that
    /// case and the caller must construct a new binding.
    pub fn open(&self) -> Result<Box<dyn Transport>, OneilError> {
        match self {
            Self::Tcp { host, port } => Ok(Box::new(TcpTransport::open(host, *port)?)),
            Self::Serial { device, baud } => {
                Ok(Box::new(SerialTransport::open(device, *baud)?))
            }
        }
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn write(&mut self, data: &[u8]) -> Result<usize, OneilError> {
        (**self).write(data)
    }

    fn close(&mut self) -> Result<(), OneilError> {
        (**self).close()
    }
}
