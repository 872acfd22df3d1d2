// rc522/src/device/crc.rs

use log::warn;

use crate::constants::CRC_POLL_LIMIT;
use crate::device::io::RegisterIo;
use crate::device::registers::{div_irq, ChipCommand, Register, FIFO_FLUSH};
use crate::transport::Transport;
use crate::{Error, Result};

/// Run `data` through the chip's CRC coprocessor.
///
/// Returns the CRC_A low byte first, ready to append to a frame. If CRCIRq
/// never rises within the poll budget the result registers are not read.
pub fn calculate_crc<T: Transport + ?Sized>(t: &mut T, data: &[u8]) -> Result<[u8; 2]> {
    // Set2 = 0: acknowledge a stale CRCIRq
    t.write_register(Register::DivIrq, div_irq::CRC)?;
    t.write_register(Register::FifoLevel, FIFO_FLUSH)?;
    for &byte in data {
        t.write_register(Register::FifoData, byte)?;
    }
    t.write_register(Register::Command, ChipCommand::CalcCrc.code())?;

    for _ in 0..CRC_POLL_LIMIT {
        if t.read_register(Register::DivIrq)? & div_irq::CRC != 0 {
            let low = t.read_register(Register::CrcResultLow)?;
            let high = t.read_register(Register::CrcResultHigh)?;
            return Ok([low, high]);
        }
    }

    warn!("CRC coprocessor timed out after {} polls", CRC_POLL_LIMIT);
    Err(Error::CrcTimeout)
}
