//! # DPL Protocol Implementation
//!
//! This module provides low-level command builders for the DPL command
//! language used by Datamax-O'Neil label printers.
//!
//! ## Module Structure
//!
//! - [`commands`]: control bytes, numeric field padding, configuration and
//!   document lifecycle commands
//! - [`text`]: positioned text field records
//! - [`barcode`]: QR code field records
//! - [`cp866`]: Unicode to CP866 single-byte conversion
//!
//! ## Usage Example
//!
//! ```
//! use oneil::protocol::{barcode, commands, text};
//!
//! // Build a label job as command strings
//! let mut job = Vec::new();
//! job.push(commands::units_metric());
//! job.push(commands::start_label_header());
//! job.push(commands::start_label_body());
//! job.push(text::encode(&text::LabelField::new(
//!     300,
//!     60,
//!     "hello",
//!     9,
//!     text::FontSize::Magnification(10),
//! )));
//! job.push(commands::print_and_reset());
//!
//! // Each string is CP866-encoded at the session's send step.
//! ```
//!
//! The builders are stateless; mode legality is enforced by
//! [`crate::printer::DplPrinter`], which owns the transport and the
//! session state machine.

pub mod barcode;
pub mod commands;
pub mod cp866;
pub mod text;
