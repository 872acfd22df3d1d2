// rc522/src/device/io.rs

use log::trace;

use crate::device::registers::Register;
use crate::transport::Transport;
use crate::Result;

/// Single-register access over a [`Transport`]. Every access is one
/// chip-select frame: the framing byte followed by one data byte.
pub trait RegisterIo {
    fn write_register(&mut self, reg: Register, value: u8) -> Result<()>;

    fn read_register(&mut self, reg: Register) -> Result<u8>;

    /// Read-modify-write OR.
    fn set_bits(&mut self, reg: Register, mask: u8) -> Result<()> {
        let value = self.read_register(reg)?;
        self.write_register(reg, value | mask)
    }

    /// Read-modify-write AND-NOT.
    fn clear_bits(&mut self, reg: Register, mask: u8) -> Result<()> {
        let value = self.read_register(reg)?;
        self.write_register(reg, value & !mask)
    }
}

impl<T: Transport + ?Sized> RegisterIo for T {
    fn write_register(&mut self, reg: Register, value: u8) -> Result<()> {
        trace!("write {:?} <- {:#04x}", reg, value);
        let frame = exchange(self, reg.write_address(), value);
        finish(self, frame).map(|_| ())
    }

    fn read_register(&mut self, reg: Register) -> Result<u8> {
        let frame = exchange(self, reg.read_address(), 0x00);
        let value = finish(self, frame)?;
        trace!("read {:?} -> {:#04x}", reg, value);
        Ok(value)
    }
}

fn exchange<T: Transport + ?Sized>(t: &mut T, framing: u8, data: u8) -> Result<u8> {
    t.select()?;
    t.transfer(framing)?;
    t.transfer(data)
}

// Chip select is released even when the exchange failed; the first error wins
fn finish<T: Transport + ?Sized>(t: &mut T, frame: Result<u8>) -> Result<u8> {
    let released = t.release();
    let value = frame?;
    released?;
    Ok(value)
}
