// rc522/src/transport/hal.rs

use std::time::Duration;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiBus;

use crate::transport::traits::Transport;
use crate::{Error, Result};

/// Transport over embedded-hal 1.0 traits: a raw SPI bus, a GPIO used as
/// chip select and the NRSTPD reset pin.
///
/// Chip select is driven by hand: it stays low across the address and data
/// bytes of one register access.
pub struct HalTransport<SPI, CS, RST, D> {
    spi: SPI,
    cs: CS,
    rst: RST,
    delay: D,
}

impl<SPI, CS, RST, D> HalTransport<SPI, CS, RST, D>
where
    SPI: SpiBus<u8>,
    CS: OutputPin,
    RST: OutputPin,
    D: DelayNs,
{
    pub fn new(spi: SPI, cs: CS, rst: RST, delay: D) -> Self {
        Self {
            spi,
            cs,
            rst,
            delay,
        }
    }

    /// Give the peripherals back.
    pub fn release_parts(self) -> (SPI, CS, RST, D) {
        (self.spi, self.cs, self.rst, self.delay)
    }
}

fn bus_error<E: core::fmt::Debug>(what: &str, e: E) -> Error {
    Error::Transport(format!("{}: {:?}", what, e))
}

impl<SPI, CS, RST, D> Transport for HalTransport<SPI, CS, RST, D>
where
    SPI: SpiBus<u8>,
    CS: OutputPin,
    RST: OutputPin,
    D: DelayNs,
{
    fn transfer(&mut self, byte: u8) -> Result<u8> {
        let mut buf = [byte];
        self.spi
            .transfer_in_place(&mut buf)
            .map_err(|e| bus_error("spi", e))?;
        Ok(buf[0])
    }

    fn select(&mut self) -> Result<()> {
        self.cs.set_low().map_err(|e| bus_error("cs", e))
    }

    fn release(&mut self) -> Result<()> {
        // Bus may still be clocking the last byte
        self.spi.flush().map_err(|e| bus_error("spi", e))?;
        self.cs.set_high().map_err(|e| bus_error("cs", e))
    }

    fn reset_low(&mut self) -> Result<()> {
        self.rst.set_low().map_err(|e| bus_error("rst", e))
    }

    fn reset_high(&mut self) -> Result<()> {
        self.rst.set_high().map_err(|e| bus_error("rst", e))
    }

    fn sleep(&mut self, duration: Duration) {
        match u32::try_from(duration.as_micros()) {
            Ok(us) => self.delay.delay_us(us),
            Err(_) => self
                .delay
                .delay_ms(u32::try_from(duration.as_millis()).unwrap_or(u32::MAX)),
        }
    }
}
