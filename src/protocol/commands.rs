//! # DPL Protocol Commands
//!
//! This module implements the command-mode subset of the DPL protocol used
//! by Datamax-O'Neil label printers (E-Class, M-Class, RL series, etc.).
//!
//! ## Protocol Overview
//!
//! DPL is a line-oriented protocol: commands are short ASCII strings framed
//! by control bytes and terminated by a carriage return. The printer runs in
//! one of two modes:
//!
//! - **Command mode**: accepts configuration commands prefixed with STX
//! - **Label-formatting mode**: entered via `STX L`, accepts field records
//!   (text, barcodes) until the print command `E` closes the label
//!
//! ## Field Widths
//!
//! All numeric fields are decimal ASCII, left-zero-padded to a fixed width:
//! 4 digits for coordinates and offsets, 2 digits for font magnification.
//!
//! ## Reference
//!
//! Based on the "Class Series Programmer's Manual" (DPL) by Datamax-O'Neil.

// ============================================================================
// CONTROL CHARACTER CONSTANTS
// ============================================================================

/// SOH (Start of Heading) - Immediate command prefix
///
/// Reserved by the protocol for immediate (interrupt-style) commands such as
/// status requests. None of the job-composition commands in this crate use
/// it, but the byte is reserved and must never appear in field data.
pub const SOH: char = '\x01';

/// STX (Start of Text) - System command prefix
///
/// Prefixes configuration and document-start commands in command mode:
/// - `STX m` / `STX n`: measurement units
/// - `STX O`: start-of-print offset
/// - `STX L`: enter label-formatting mode
pub const STX: char = '\x02';

/// CR (Carriage Return) - Command terminator
///
/// Terminates data-carrying commands. The QR barcode record is terminated by
/// two carriage returns.
pub const CR: char = '\x0D';

// ============================================================================
// NUMERIC FIELD ENCODING
// ============================================================================

/// Encode a numeric field as decimal ASCII, left-zero-padded to `width`.
///
/// Values that do not fit in `width` digits are clamped to the largest value
/// that does (a 5-digit coordinate becomes `9999`), keeping the fixed-width
/// frame intact.
///
/// ## Example
///
/// ```
/// use oneil::protocol::commands::zpad;
///
/// assert_eq!(zpad(7, 4), "0007");
/// assert_eq!(zpad(1234, 4), "1234");
/// assert_eq!(zpad(12345, 4), "9999");
/// ```
pub fn zpad(value: u16, width: usize) -> String {
    let max = 10u32.pow(width as u32) - 1;
    let value = (value as u32).min(max);
    format!("{:0width$}", value, width = width)
}

// ============================================================================
// CONFIGURATION COMMANDS (COMMAND MODE)
// ============================================================================

/// # Set Metric Units (STX m)
///
/// Switches the printer to metric measurement mode. Coordinates and offsets
/// in subsequent commands are interpreted in 0.1 mm units.
///
/// | Format  | Bytes   |
/// |---------|---------|
/// | ASCII   | STX m   |
/// | Hex     | 02 6D   |
#[inline]
pub fn units_metric() -> String {
    format!("{STX}m")
}

/// # Set Imperial Units (STX n)
///
/// Switches the printer to inch measurement mode. Coordinates and offsets
/// in subsequent commands are interpreted in 0.01 in units.
///
/// | Format  | Bytes   |
/// |---------|---------|
/// | ASCII   | STX n   |
/// | Hex     | 02 6E   |
#[inline]
pub fn units_imperial() -> String {
    format!("{STX}n")
}

/// # Set Start-of-Print Offset (STX O nnnn)
///
/// Sets the start-of-print position, shifting the whole label away from the
/// bottom edge. The offset is a 4-digit zero-padded value in the currently
/// selected units.
///
/// | Format  | Bytes        |
/// |---------|--------------|
/// | ASCII   | STX O n n n n|
/// | Hex     | 02 4F ...    |
///
/// ## Example
///
/// ```
/// use oneil::protocol::commands;
///
/// assert_eq!(commands::border_bottom(0), "\x02O0000");
/// assert_eq!(commands::border_bottom(120), "\x02O0120");
/// ```
#[inline]
pub fn border_bottom(offset: u16) -> String {
    format!("{STX}O{}", zpad(offset, 4))
}

// ============================================================================
// DOCUMENT LIFECYCLE COMMANDS
// ============================================================================

/// # Enter Label-Formatting Mode, Header (STX L)
///
/// First half of the document-start handshake. The printer switches to
/// label-formatting mode only when it accepts both bytes; the session layer
/// checks the transport's accepted-byte count before committing the mode
/// transition and sending [`start_label_body`].
///
/// | Format  | Bytes   |
/// |---------|---------|
/// | ASCII   | STX L   |
/// | Hex     | 02 4C   |
#[inline]
pub fn start_label_header() -> String {
    format!("{STX}L")
}

/// # Label Dot Size (D11 CR)
///
/// Second half of the document-start handshake: selects 1x1 dot size for the
/// label. Sent immediately after the printer accepts [`start_label_header`].
///
/// | Format  | Bytes        |
/// |---------|--------------|
/// | ASCII   | D 1 1 CR     |
/// | Hex     | 44 31 31 0D  |
#[inline]
pub fn start_label_body() -> String {
    format!("D11{CR}")
}

/// # Select Character Code Page (yS name CR)
///
/// Selects the printer-side single-byte character set applied to subsequent
/// text fields. Only valid in label-formatting mode.
///
/// ## Example
///
/// ```
/// use oneil::protocol::commands;
///
/// assert_eq!(commands::select_code_page("CP"), "ySCP\r");
/// ```
#[inline]
pub fn select_code_page(name: &str) -> String {
    format!("yS{name}{CR}")
}

/// # Print and Reset (E)
///
/// Terminates the label format, queues it for printing, and returns the
/// printer to command mode. Legal in any mode; in command mode it is a
/// no-op reset on the printer side.
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | E     |
/// | Hex     | 45    |
#[inline]
pub fn print_and_reset() -> String {
    "E".to_string()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zpad_pads_short_values() {
        assert_eq!(zpad(7, 4), "0007");
        assert_eq!(zpad(0, 4), "0000");
        assert_eq!(zpad(5, 2), "05");
    }

    #[test]
    fn test_zpad_passes_exact_width() {
        assert_eq!(zpad(1234, 4), "1234");
        assert_eq!(zpad(99, 2), "99");
    }

    #[test]
    fn test_zpad_clamps_overwide_values() {
        // Out-of-contract values clamp to the widest representable value
        assert_eq!(zpad(12345, 4), "9999");
        assert_eq!(zpad(10000, 4), "9999");
        assert_eq!(zpad(100, 2), "99");
    }

    #[test]
    fn test_units() {
        assert_eq!(units_metric(), "\x02m");
        assert_eq!(units_imperial(), "\x02n");
    }

    #[test]
    fn test_border_bottom() {
        assert_eq!(border_bottom(0), "\x02O0000");
        assert_eq!(border_bottom(9999), "\x02O9999");
    }

    #[test]
    fn test_start_label_pair() {
        assert_eq!(start_label_header(), "\x02L");
        assert_eq!(start_label_header().len(), 2);
        assert_eq!(start_label_body(), "D11\r");
    }

    #[test]
    fn test_select_code_page() {
        assert_eq!(select_code_page("CP"), "ySCP\r");
        assert_eq!(select_code_page("UTF8"), "ySUTF8\r");
    }

    #[test]
    fn test_print_and_reset() {
        assert_eq!(print_and_reset(), "E");
    }
}
