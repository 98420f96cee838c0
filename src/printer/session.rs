//! # Session State Machine
//!
//! The stateful core of the crate: [`DplPrinter`] owns a transport, tracks
//! the printer's two-state mode, and refuses operations that are illegal in
//! the current mode before a single byte leaves the process.
//!
//! ## Mode Transition Table
//!
//! | Operation | Legal in | New mode |
//! |---|---|---|
//! | `configure` | Command | Command |
//! | `start_document` | Command | LabelFormatting (on handshake success) |
//! | `set_encoding` | LabelFormatting | LabelFormatting |
//! | `set_label` | LabelFormatting | LabelFormatting |
//! | `set_qr_code` | LabelFormatting | LabelFormatting |
//! | `print` | any | Command |
//!
//! A wrong-mode invocation returns [`OneilError::Protocol`], writes nothing,
//! and mutates nothing. `start_document` is the one place where "bytes
//! queued" and "protocol committed" differ: the mode only advances when the
//! transport reports that the printer accepted the `STX L` header in full.

use std::fmt;

use crate::error::OneilError;
use crate::protocol::text::LabelField;
use crate::protocol::barcode::QrField;
use crate::protocol::{barcode, commands, cp866, text};
use crate::transport::{Binding, Transport};

use super::JobConfig;

/// Code page selected when the caller does not name one.
pub const DEFAULT_CODE_PAGE: &str = "CP";

/// Session mode, mirroring the printer's own command parser state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Accepting configuration and document-start commands
    Command,
    /// Accepting field records until a print command closes the label
    LabelFormatting,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Command => f.write_str("command"),
            Self::LabelFormatting => f.write_str("label-formatting"),
        }
    }
}

/// # DPL Printer Session
///
/// One logical session per connection. Not internally synchronized: callers
/// invoking from multiple threads must serialize access themselves (a mutex,
/// or confining the session to one task).
///
/// ## Example
///
/// ```no_run
/// use oneil::printer::{DplPrinter, JobConfig};
/// use oneil::protocol::text::{FontSize, LabelField};
/// use oneil::transport::Binding;
///
/// let binding = Binding::Tcp { host: "192.168.1.50".into(), port: 9100 };
/// let mut printer = DplPrinter::connect(&binding)?;
///
/// printer.configure(&JobConfig::default())?;
/// printer.start_document()?;
/// printer.set_label(&LabelField::new(300, 60, "hello", 9, FontSize::Magnification(10)))?;
/// printer.print()?;
/// printer.close()?;
/// # Ok::<(), oneil::OneilError>(())
/// ```
pub struct DplPrinter<T: Transport> {
    transport: T,
    mode: Mode,
}

impl DplPrinter<Box<dyn Transport>> {
    /// Open the binding's transport and wrap it in a fresh session.
    pub fn connect(binding: &Binding) -> Result<Self, OneilError> {
        Ok(Self::new(binding.open()?))
    }
}

impl<T: Transport> DplPrinter<T> {
    /// Wrap an already-open transport. The session starts in command mode,
    /// matching the printer's state right after the connection is made.
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            mode: Mode::Command,
        }
    }

    /// Current session mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Check that `operation` is legal in the current mode.
    fn require(&self, operation: &'static str, required: Mode) -> Result<(), OneilError> {
        if self.mode == required {
            Ok(())
        } else {
            Err(OneilError::Protocol {
                operation,
                mode: self.mode,
            })
        }
    }

    /// CP866-encode a command and hand it to the transport.
    ///
    /// Encoding happens first: a payload the code page cannot represent
    /// fails here, before anything is written.
    fn send(&mut self, command: &str) -> Result<usize, OneilError> {
        let bytes = cp866::encode(command)?;
        self.transport.write(&bytes)
    }

    /// Apply per-document configuration (units, bottom offset).
    ///
    /// Legal in command mode only.
    pub fn configure(&mut self, config: &JobConfig) -> Result<(), OneilError> {
        self.require("configure", Mode::Command)?;

        if config.imperial {
            self.send(&commands::units_imperial())?;
        } else {
            self.send(&commands::units_metric())?;
        }
        self.send(&commands::border_bottom(config.border_bottom))?;
        Ok(())
    }

    /// Open a label format, switching the session to label-formatting mode.
    ///
    /// Sends the `STX L` header and checks the transport's accepted-byte
    /// count: only an exact 2 proves the printer took the mode switch, so
    /// anything else returns [`OneilError::ShortWrite`] and the session
    /// stays in command mode. On success the `D11` dot-size record follows
    /// and the session transitions.
    pub fn start_document(&mut self) -> Result<(), OneilError> {
        self.require("start document", Mode::Command)?;

        let header = commands::start_label_header();
        let accepted = self.send(&header)?;
        if accepted != header.len() {
            return Err(OneilError::ShortWrite {
                expected: header.len(),
                accepted,
            });
        }

        self.send(&commands::start_label_body())?;
        self.mode = Mode::LabelFormatting;
        Ok(())
    }

    /// Select the printer-side code page for subsequent text fields.
    ///
    /// Legal in label-formatting mode only. [`DEFAULT_CODE_PAGE`] is the
    /// directive the supported firmware expects for its CP866 set.
    pub fn set_encoding(&mut self, name: &str) -> Result<(), OneilError> {
        self.require("set encoding", Mode::LabelFormatting)?;
        self.send(&commands::select_code_page(name))?;
        Ok(())
    }

    /// Place a text field on the open label.
    ///
    /// Legal in label-formatting mode only.
    pub fn set_label(&mut self, field: &LabelField) -> Result<(), OneilError> {
        self.require("place label field", Mode::LabelFormatting)?;
        self.send(&text::encode(field))?;
        Ok(())
    }

    /// Place a QR code on the open label.
    ///
    /// Legal in label-formatting mode only.
    pub fn set_qr_code(&mut self, field: &QrField) -> Result<(), OneilError> {
        self.require("place qr-code field", Mode::LabelFormatting)?;
        self.send(&barcode::encode(field))?;
        Ok(())
    }

    /// Print the label and reset the session to command mode.
    ///
    /// Legal in any mode; in command mode the printer treats it as a plain
    /// reset.
    pub fn print(&mut self) -> Result<(), OneilError> {
        self.send(&commands::print_and_reset())?;
        self.mode = Mode::Command;
        Ok(())
    }

    /// Escape hatch: CP866-encode and send an arbitrary command string,
    /// bypassing the mode checks. Returns the accepted byte count.
    ///
    /// The session mode is not consulted or updated; callers who change the
    /// printer's state this way own the consequences.
    pub fn send_raw(&mut self, command: &str) -> Result<usize, OneilError> {
        self.send(command)
    }

    /// Close the underlying transport, consuming the session.
    pub fn close(mut self) -> Result<(), OneilError> {
        self.transport.close()
    }

    /// Consume the session and hand the transport back without closing it.
    pub fn into_transport(self) -> T {
        self.transport
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::text::FontSize;

    /// Transport stub that records every write and replays scripted
    /// accepted-byte counts (`None` entries echo the write length).
    struct StubTransport {
        writes: Vec<Vec<u8>>,
        accept_script: Vec<Option<usize>>,
    }

    impl StubTransport {
        fn new() -> Self {
            Self {
                writes: Vec::new(),
                accept_script: Vec::new(),
            }
        }

        fn scripted(script: Vec<Option<usize>>) -> Self {
            Self {
                accept_script: script,
                ..Self::new()
            }
        }
    }

    impl Transport for StubTransport {
        fn write(&mut self, data: &[u8]) -> Result<usize, OneilError> {
            self.writes.push(data.to_vec());
            let index = self.writes.len() - 1;
            Ok(match self.accept_script.get(index) {
                Some(Some(n)) => *n,
                _ => data.len(),
            })
        }

        fn close(&mut self) -> Result<(), OneilError> {
            Ok(())
        }
    }

    fn printer() -> DplPrinter<StubTransport> {
        DplPrinter::new(StubTransport::new())
    }

    #[test]
    fn test_new_session_starts_in_command_mode() {
        assert_eq!(printer().mode(), Mode::Command);
    }

    #[test]
    fn test_configure_metric_sends_two_commands() {
        let mut p = printer();
        p.configure(&JobConfig::default()).unwrap();
        assert_eq!(p.transport.writes, vec![b"\x02m".to_vec(), b"\x02O0000".to_vec()]);
        assert_eq!(p.mode(), Mode::Command);
    }

    #[test]
    fn test_configure_imperial() {
        let mut p = printer();
        p.configure(&JobConfig::imperial(250)).unwrap();
        assert_eq!(p.transport.writes, vec![b"\x02n".to_vec(), b"\x02O0250".to_vec()]);
    }

    #[test]
    fn test_start_document_transitions_on_exact_handshake() {
        let mut p = printer();
        p.start_document().unwrap();
        assert_eq!(p.mode(), Mode::LabelFormatting);
        assert_eq!(p.transport.writes, vec![b"\x02L".to_vec(), b"D11\r".to_vec()]);
    }

    #[test]
    fn test_start_document_short_write_stays_in_command_mode() {
        let mut p = DplPrinter::new(StubTransport::scripted(vec![Some(1)]));
        let err = p.start_document().unwrap_err();
        match err {
            OneilError::ShortWrite { expected, accepted } => {
                assert_eq!(expected, 2);
                assert_eq!(accepted, 1);
            }
            other => panic!("Expected ShortWrite, got {other:?}"),
        }
        assert_eq!(p.mode(), Mode::Command);
        // Only the header went out; the D11 record must not follow
        assert_eq!(p.transport.writes.len(), 1);
    }

    #[test]
    fn test_start_document_overlong_count_also_fails() {
        let mut p = DplPrinter::new(StubTransport::scripted(vec![Some(3)]));
        assert!(p.start_document().is_err());
        assert_eq!(p.mode(), Mode::Command);
    }

    #[test]
    fn test_start_document_twice_is_a_protocol_error() {
        let mut p = printer();
        p.start_document().unwrap();
        let err = p.start_document().unwrap_err();
        assert!(matches!(
            err,
            OneilError::Protocol { operation: "start document", mode: Mode::LabelFormatting }
        ));
        // The failed call wrote nothing
        assert_eq!(p.transport.writes.len(), 2);
    }

    #[test]
    fn test_field_operations_require_label_formatting_mode() {
        let mut p = printer();
        let label = LabelField::new(300, 60, "hello", 9, FontSize::Magnification(10));
        let qr = QrField::new(285, 120, "https://example.com").size(9);

        assert!(matches!(
            p.set_label(&label),
            Err(OneilError::Protocol { mode: Mode::Command, .. })
        ));
        assert!(matches!(
            p.set_qr_code(&qr),
            Err(OneilError::Protocol { mode: Mode::Command, .. })
        ));
        assert!(matches!(
            p.set_encoding(DEFAULT_CODE_PAGE),
            Err(OneilError::Protocol { mode: Mode::Command, .. })
        ));
        // Guards fire before the transport sees anything
        assert!(p.transport.writes.is_empty());
    }

    #[test]
    fn test_configure_requires_command_mode() {
        let mut p = printer();
        p.start_document().unwrap();
        assert!(matches!(
            p.configure(&JobConfig::default()),
            Err(OneilError::Protocol { mode: Mode::LabelFormatting, .. })
        ));
        assert_eq!(p.mode(), Mode::LabelFormatting);
    }

    #[test]
    fn test_print_resets_from_label_formatting() {
        let mut p = printer();
        p.start_document().unwrap();
        p.print().unwrap();
        assert_eq!(p.mode(), Mode::Command);
        assert_eq!(p.transport.writes.last().unwrap(), b"E");
    }

    #[test]
    fn test_print_is_legal_in_command_mode() {
        let mut p = printer();
        p.print().unwrap();
        assert_eq!(p.mode(), Mode::Command);
        assert_eq!(p.transport.writes, vec![b"E".to_vec()]);
    }

    #[test]
    fn test_label_text_is_cp866_encoded() {
        let mut p = printer();
        p.start_document().unwrap();
        p.set_label(&LabelField::new(0, 0, "Яр", 9, FontSize::Magnification(10)))
            .unwrap();

        let record = p.transport.writes.last().unwrap();
        // "1911A1000000000" + Я(0x9F) р(0xE0) + CR
        let mut expected = b"1911A1000000000".to_vec();
        expected.extend([0x9F, 0xE0, 0x0D]);
        assert_eq!(record, &expected);
    }

    #[test]
    fn test_unencodable_text_fails_before_any_write() {
        let mut p = printer();
        p.start_document().unwrap();
        let writes_before = p.transport.writes.len();

        let err = p
            .set_label(&LabelField::new(0, 0, "5€", 9, FontSize::Magnification(10)))
            .unwrap_err();
        assert!(matches!(err, OneilError::Encoding { ch: '€' }));
        assert_eq!(p.transport.writes.len(), writes_before);
        // Session still usable in the same mode
        assert_eq!(p.mode(), Mode::LabelFormatting);
    }

    #[test]
    fn test_send_raw_bypasses_mode_checks() {
        let mut p = printer();
        let accepted = p.send_raw("yUT\r").unwrap();
        assert_eq!(accepted, 4);
        assert_eq!(p.mode(), Mode::Command);
    }
}
