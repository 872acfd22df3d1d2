// rc522/src/transport/traits.rs

use std::time::Duration;

use crate::Result;

/// Physical boundary of the driver: a synchronous serial link, its
/// chip-select line, the reset line and a way to wait.
///
/// Implementations must not retry; any error here is treated as fatal by
/// the layers above.
pub trait Transport {
    /// Clock one byte out and return the byte clocked in.
    fn transfer(&mut self, byte: u8) -> Result<u8>;

    /// Assert chip select (drive it low).
    fn select(&mut self) -> Result<()>;

    /// Release chip select (drive it high).
    fn release(&mut self) -> Result<()>;

    /// Drive the reset (NRSTPD) line low.
    fn reset_low(&mut self) -> Result<()>;

    /// Drive the reset (NRSTPD) line high.
    fn reset_high(&mut self) -> Result<()>;

    /// Block for `duration`. The default sleeps the current thread.
    fn sleep(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn transfer(&mut self, byte: u8) -> Result<u8> {
        (**self).transfer(byte)
    }

    fn select(&mut self) -> Result<()> {
        (**self).select()
    }

    fn release(&mut self) -> Result<()> {
        (**self).release()
    }

    fn reset_low(&mut self) -> Result<()> {
        (**self).reset_low()
    }

    fn reset_high(&mut self) -> Result<()> {
        (**self).reset_high()
    }

    fn sleep(&mut self, duration: Duration) {
        (**self).sleep(duration)
    }
}
