//! # Oneil - DPL Label Printer Library
//!
//! Oneil is a Rust client library for Datamax-O'Neil label printers speaking
//! the DPL command language, over TCP or a serial line. It provides:
//!
//! - **Protocol implementation**: DPL command and field-record builders
//! - **Session state machine**: command / label-formatting mode enforcement
//! - **Character encoding**: strict Unicode to CP866 conversion
//! - **Transport**: TCP stream and raw serial communication
//!
//! ## Quick Start
//!
//! ```no_run
//! use oneil::{
//!     printer::{DplPrinter, JobConfig},
//!     protocol::text::{FontSize, LabelField},
//!     protocol::barcode::QrField,
//!     transport::Binding,
//! };
//!
//! // Open a session to a network printer
//! let binding = Binding::Tcp { host: "192.168.1.50".into(), port: 9100 };
//! let mut printer = DplPrinter::connect(&binding)?;
//!
//! // Configure, then compose and print one label
//! printer.configure(&JobConfig::default())?;
//! printer.start_document()?;
//! printer.set_encoding("CP")?;
//! printer.set_qr_code(&QrField::new(285, 120, "https://example.com").size(9))?;
//! printer.set_label(&LabelField::new(300, 60, "hello", 9, FontSize::Magnification(10)))?;
//! printer.print()?;
//!
//! printer.close()?;
//! # Ok::<(), oneil::OneilError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`protocol`] | DPL command builders and CP866 encoding |
//! | [`printer`] | Session state machine and job configuration |
//! | [`transport`] | Communication backends |
//! | [`error`] | Error types |
//!
//! ## Session Modes
//!
//! The printer's command parser is modal, and the session mirrors it: in
//! **command mode** only configuration and document-start are legal; after
//! `start_document` succeeds, the session is in **label-formatting mode**
//! and accepts field records until `print` closes the label and resets the
//! mode. Calling an operation in the wrong mode is an error before any
//! bytes are sent — see [`printer::DplPrinter`].

pub mod error;
pub mod printer;
pub mod protocol;
pub mod transport;

// Re-exports for convenience
pub use error::OneilError;
pub use printer::{DplPrinter, JobConfig, Mode};
pub use transport::{Binding, SerialTransport, TcpTransport, Transport};
