//! # Serial Line Transport
//!
//! Serial binding for printers attached over RS-232 or a USB-serial adapter.
//!
//! ## TTY Configuration
//!
//! The device is opened in raw mode so command bytes pass through without
//! modification:
//!
//! - **No input processing**: disable IGNBRK, BRKINT, PARMRK, ISTRIP, etc.
//! - **No output processing**: disable OPOST (no CR/LF translation — CR is
//!   the protocol's command terminator and must arrive verbatim)
//! - **8-bit characters**: CS8, no parity
//! - **No echo**: disable ECHO, ECHONL
//! - **Non-canonical mode**: disable ICANON (no line buffering)
//! - **No software flow control**: IXON/IXOFF/IXANY off — STX (0x02) and
//!   other control bytes are protocol data here, not terminal signals

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
#[cfg(unix)]
use std::os::unix::io::AsRawFd;
use std::path::Path;

use super::Transport;
use crate::error::OneilError;

/// Default line speed for serial-attached label printers
pub const DEFAULT_BAUD: u32 = 9600;

/// # Serial Printer Transport
///
/// Owns the opened device file. Raw mode and line speed are configured at
/// construction; an unsupported baud rate is a construction error, not a
/// silent fallback.
///
/// ## Example
///
/// ```no_run
/// use oneil::transport::{SerialTransport, Transport};
///
/// let mut transport = SerialTransport::open("/dev/ttyUSB0", 9600)?;
/// transport.write(b"\x02m")?;
/// # Ok::<(), oneil::OneilError>(())
/// ```
pub struct SerialTransport {
    file: File,
}

impl SerialTransport {
    /// Open the serial device and configure it for raw 8N1 at `baud`.
    ///
    /// ## Errors
    ///
    /// Returns a `Transport` error if:
    /// - The device doesn't exist
    /// - Permission denied (may need the dialout group)
    /// - The baud rate has no termios constant
    /// - TTY configuration fails
    pub fn open<P: AsRef<Path>>(device: P, baud: u32) -> Result<Self, OneilError> {
        let path = device.as_ref();

        let file = OpenOptions::new().write(true).open(path).map_err(|e| {
            OneilError::Transport(format!("Failed to open {}: {}", path.display(), e))
        })?;

        configure_serial_raw(&file, baud)?;

        Ok(Self { file })
    }

    /// Open with the default line speed (9600 baud).
    pub fn open_default<P: AsRef<Path>>(device: P) -> Result<Self, OneilError> {
        Self::open(device, DEFAULT_BAUD)
    }
}

impl Transport for SerialTransport {
    fn write(&mut self, data: &[u8]) -> Result<usize, OneilError> {
        self.file
            .write(data)
            .map_err(|e| OneilError::Transport(format!("Write failed: {e}")))
    }

    fn close(&mut self) -> Result<(), OneilError> {
        // The descriptor is released on drop; closing only drains output.
        self.file
            .flush()
            .map_err(|e| OneilError::Transport(format!("Flush failed: {e}")))
    }
}

/// Map a numeric baud rate to its termios speed constant.
///
/// Only rates a label printer's serial port can actually run are listed;
/// anything else is an error at construction time.
#[cfg(unix)]
fn baud_constant(baud: u32) -> Result<libc::speed_t, OneilError> {
    let speed = match baud {
        1200 => libc::B1200,
        2400 => libc::B2400,
        4800 => libc::B4800,
        9600 => libc::B9600,
        19200 => libc::B19200,
        38400 => libc::B38400,
        57600 => libc::B57600,
        115200 => libc::B115200,
        _ => {
            return Err(OneilError::Transport(format!(
                "Unsupported baud rate: {baud}"
            )));
        }
    };
    Ok(speed)
}

/// Configure a serial device for raw binary communication at `baud`.
#[cfg(unix)]
fn configure_serial_raw(file: &File, baud: u32) -> Result<(), OneilError> {
    use std::mem::MaybeUninit;

    let fd = file.as_raw_fd();
    let speed = baud_constant(baud)?;

    // Get current terminal attributes
    let mut termios = MaybeUninit::uninit();
    let result = unsafe { libc::tcgetattr(fd, termios.as_mut_ptr()) };
    if result != 0 {
        return Err(OneilError::Transport(format!(
            "tcgetattr failed: {}",
            io::Error::last_os_error()
        )));
    }
    let mut termios = unsafe { termios.assume_init() };

    // Input flags: disable all processing
    // IXON/IXOFF/IXANY: disable XON/XOFF flow control (STX/SOH are protocol
    // bytes and must not be eaten as terminal signals)
    termios.c_iflag &= !(libc::IGNBRK
        | libc::BRKINT
        | libc::PARMRK
        | libc::ISTRIP
        | libc::INLCR
        | libc::IGNCR
        | libc::ICRNL
        | libc::IXON
        | libc::IXOFF
        | libc::IXANY);

    // Output flags: disable post-processing
    termios.c_oflag &= !libc::OPOST;

    // Local flags: disable echo, canonical mode, signals
    termios.c_lflag &= !(libc::ECHO | libc::ECHONL | libc::ICANON | libc::ISIG | libc::IEXTEN);

    // Control flags: 8-bit characters, no parity
    termios.c_cflag &= !(libc::CSIZE | libc::PARENB);
    termios.c_cflag |= libc::CS8;

    // Line speed, both directions
    let result = unsafe { libc::cfsetispeed(&mut termios, speed) };
    if result == 0 {
        unsafe { libc::cfsetospeed(&mut termios, speed) };
    }

    // Apply settings immediately
    let result = unsafe { libc::tcsetattr(fd, libc::TCSANOW, &termios) };
    if result != 0 {
        return Err(OneilError::Transport(format!(
            "tcsetattr failed: {}",
            io::Error::last_os_error()
        )));
    }

    Ok(())
}

#[cfg(not(unix))]
fn configure_serial_raw(_file: &File, _baud: u32) -> Result<(), OneilError> {
    // On non-Unix platforms, skip TTY configuration
    // The device may work differently
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
