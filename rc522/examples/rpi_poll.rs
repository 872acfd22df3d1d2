#![cfg(feature = "rppal")]

//! Poll an RC522 on a Raspberry Pi and print each new card as a decimal
//! number.
//!
//! Wiring: SPI0 (SCK/MOSI/MISO), SDA to a free GPIO used as chip select,
//! RST to another GPIO. Both are BCM numbers.
//!
//! Usage:
//!   RUST_LOG=info cargo run -p rc522 --example rpi_poll --features rppal -- [cs] [rst]

use anyhow::Context;
use rc522::prelude::*;
use rc522::transport::RppalTransport;

const DEFAULT_CS_PIN: u8 = 22;
const DEFAULT_RST_PIN: u8 = 25;

fn pin_arg(args: &[String], index: usize, default: u8) -> anyhow::Result<u8> {
    match args.get(index) {
        Some(s) => s.parse().with_context(|| format!("invalid pin number '{}'", s)),
        None => Ok(default),
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let cs = pin_arg(&args, 1, DEFAULT_CS_PIN)?;
    let rst = pin_arg(&args, 2, DEFAULT_RST_PIN)?;

    let transport = RppalTransport::open(cs, rst).context("opening SPI0 and GPIO")?;
    let mut reader = ReaderBuilder::new()
        .with_transport(Box::new(transport))
        .build()
        .context("initializing MFRC522")?;
    println!("Reader version: {:#04x}", reader.version()?);

    let token = CancellationToken::new();
    let mut session = Session::new(reader, SessionConfig::default(), StdoutSink);
    session.run(&token)?;
    Ok(())
}
