//! # Oneil CLI
//!
//! Command-line demo for DPL label printing.
//!
//! ## Usage
//!
//! ```bash
//! # Print the demo label to a network printer
//! oneil 192.168.1.50
//!
//! # Non-default port
//! oneil 192.168.1.50 --port 9101
//!
//! # Serial-attached printer instead of TCP
//! oneil --device /dev/ttyUSB0 --baud 9600
//!
//! # Custom text and QR payload
//! oneil 192.168.1.50 --text "hello" --url https://example.com
//! ```

use clap::Parser;

use oneil::{
    OneilError,
    printer::{DplPrinter, JobConfig},
    protocol::barcode::QrField,
    protocol::text::{FontSize, LabelField},
    transport::Binding,
};

/// Oneil - DPL label printer utility
#[derive(Parser, Debug)]
#[command(name = "oneil")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// IP address or hostname of the printer (omit when using --device)
    host: Option<String>,

    /// TCP port the printer listens on
    #[arg(long, short, default_value_t = 9100)]
    port: u16,

    /// Serial device path instead of a network host
    #[arg(long, conflicts_with = "host")]
    device: Option<String>,

    /// Serial line speed in baud
    #[arg(long, default_value_t = 9600)]
    baud: u32,

    /// Label text
    #[arg(long, default_value = "oneil demo")]
    text: String,

    /// QR code payload
    #[arg(long, default_value = "https://example.com")]
    url: String,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), OneilError> {
    let cli = Cli::parse();

    let binding = match (&cli.host, &cli.device) {
        (_, Some(device)) => Binding::Serial {
            device: device.clone(),
            baud: cli.baud,
        },
        (Some(host), None) => Binding::Tcp {
            host: host.clone(),
            port: cli.port,
        },
        (None, None) => {
            return Err(OneilError::Transport(
                "Specify a printer host or --device".to_string(),
            ));
        }
    };

    println!("Connecting...");
    let mut printer = DplPrinter::connect(&binding)?;
    println!("Connected.");

    printer.configure(&JobConfig::default())?;
    printer.start_document()?;
    printer.set_encoding("CP")?;
    printer.set_qr_code(&QrField::new(285, 120, cli.url).size(9))?;
    printer.set_label(&LabelField::new(300, 60, cli.text, 9, FontSize::Magnification(10)))?;
    printer.print()?;
    printer.close()?;

    println!("Label queued.");
    Ok(())
}
