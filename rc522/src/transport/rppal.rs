// rc522/src/transport/rppal.rs

use std::thread;
use std::time::Duration;

use rppal::gpio::{Gpio, OutputPin};
use rppal::spi::{Bus, Mode, SlaveSelect, Spi};

use crate::transport::traits::Transport;
use crate::Result;

/// SPI clock used when opening the bus.
pub const DEFAULT_CLOCK_HZ: u32 = 1_000_000;

/// Raspberry Pi transport: spidev for the bus, plain GPIO lines (BCM
/// numbering) for chip select and reset.
pub struct RppalTransport {
    spi: Spi,
    cs: OutputPin,
    rst: OutputPin,
}

impl RppalTransport {
    /// Open SPI0 in mode 0 and claim the two GPIO lines.
    pub fn open(cs_pin: u8, rst_pin: u8) -> Result<Self> {
        Self::open_bus(Bus::Spi0, DEFAULT_CLOCK_HZ, cs_pin, rst_pin)
    }

    pub fn open_bus(bus: Bus, clock_hz: u32, cs_pin: u8, rst_pin: u8) -> Result<Self> {
        let spi = Spi::new(bus, SlaveSelect::Ss0, clock_hz, Mode::Mode0)?;
        let gpio = Gpio::new()?;

        let mut cs = gpio.get(cs_pin)?.into_output_high();
        let mut rst = gpio.get(rst_pin)?.into_output();
        // Leave the reader powered when the process exits
        cs.set_reset_on_drop(false);
        rst.set_reset_on_drop(false);

        Ok(Self { spi, cs, rst })
    }
}

impl Transport for RppalTransport {
    fn transfer(&mut self, byte: u8) -> Result<u8> {
        let mut read = [0u8; 1];
        self.spi.transfer(&mut read, &[byte])?;
        Ok(read[0])
    }

    fn select(&mut self) -> Result<()> {
        self.cs.set_low();
        Ok(())
    }

    fn release(&mut self) -> Result<()> {
        self.cs.set_high();
        Ok(())
    }

    fn reset_low(&mut self) -> Result<()> {
        self.rst.set_low();
        Ok(())
    }

    fn reset_high(&mut self) -> Result<()> {
        self.rst.set_high();
        Ok(())
    }

    fn sleep(&mut self, duration: Duration) {
        thread::sleep(duration);
    }
}
