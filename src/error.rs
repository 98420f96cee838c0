//! # Error Types
//!
//! This module defines error types used throughout the oneil library.

use thiserror::Error;

use crate::printer::Mode;

/// Main error type for oneil operations
#[derive(Debug, Error)]
pub enum OneilError {
    /// Transport-level errors (connection, write, close)
    #[error("Transport error: {0}")]
    Transport(String),

    /// An operation was invoked in a session mode that forbids it.
    ///
    /// Recoverable: the session state is untouched and the operation can be
    /// retried once the session is in the right mode.
    #[error("Cannot {operation} in {mode} mode")]
    Protocol {
        /// The operation that was attempted
        operation: &'static str,
        /// The mode the session was in at the time
        mode: Mode,
    },

    /// The printer accepted fewer bytes than the protocol handshake requires.
    ///
    /// Raised by `start_document` when the `STX L` header is not accepted in
    /// full; the session stays in command mode.
    #[error("Printer accepted {accepted} of {expected} handshake bytes")]
    ShortWrite {
        /// Bytes the handshake requires
        expected: usize,
        /// Bytes the transport reported as accepted
        accepted: usize,
    },

    /// Text payload contains a character with no CP866 representation.
    ///
    /// Surfaced before any bytes reach the transport.
    #[error("Character '{ch}' is not representable in CP866")]
    Encoding {
        /// The offending character
        ch: char,
    },

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
