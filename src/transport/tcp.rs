//! # TCP Stream Transport
//!
//! Network binding for printers with an Ethernet or Wi-Fi interface. Label
//! printers conventionally expose a raw byte sink on port 9100; whatever is
//! written to the socket is fed straight to the firmware's command parser.

use std::io::Write;
use std::net::{Shutdown, TcpStream};

use super::Transport;
use crate::error::OneilError;

/// Conventional raw-printing port
pub const DEFAULT_PORT: u16 = 9100;

/// # TCP Printer Transport
///
/// Owns a connected stream to the printer. The connection is established at
/// construction; a failure to connect leaves no half-open state.
///
/// ## Example
///
/// ```no_run
/// use oneil::transport::{TcpTransport, Transport};
///
/// let mut transport = TcpTransport::open("192.168.1.50", 9100)?;
/// transport.write(b"\x02m")?;
/// transport.close()?;
/// # Ok::<(), oneil::OneilError>(())
/// ```
pub struct TcpTransport {
    stream: TcpStream,
}

impl TcpTransport {
    /// Connect to the printer at `host:port`.
    ///
    /// ## Errors
    ///
    /// Returns a `Transport` error when the host cannot be resolved or the
    /// connection is refused.
    pub fn open(host: &str, port: u16) -> Result<Self, OneilError> {
        let stream = TcpStream::connect((host, port)).map_err(|e| {
            OneilError::Transport(format!("Failed to connect to {host}:{port}: {e}"))
        })?;

        // One command per write; buffering would defeat the handshake's
        // accepted-byte check.
        stream
            .set_nodelay(true)
            .map_err(|e| OneilError::Transport(format!("Failed to set TCP_NODELAY: {e}")))?;

        Ok(Self { stream })
    }

    /// Connect on the conventional raw-printing port (9100).
    pub fn open_default(host: &str) -> Result<Self, OneilError> {
        Self::open(host, DEFAULT_PORT)
    }
}

impl Transport for TcpTransport {
    fn write(&mut self, data: &[u8]) -> Result<usize, OneilError> {
        self.stream
            .write(data)
            .map_err(|e| OneilError::Transport(format!("Write failed: {e}")))
    }

    fn close(&mut self) -> Result<(), OneilError> {
        self.stream
            .shutdown(Shutdown::Both)
            .map_err(|e| OneilError::Transport(format!("Shutdown failed: {e}")))
    }
}

// ============================================================================
// TESTS
// ============================================================================
