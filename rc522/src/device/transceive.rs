// rc522/src/device/transceive.rs

use log::{debug, trace};

use crate::constants::{ERROR_MASK, MAX_RECEIVE_LEN, TRANSCEIVE_POLL_LIMIT};
use crate::device::io::RegisterIo;
use crate::device::registers::{
    irq, ChipCommand, Register, FIFO_FLUSH, RX_LAST_BITS, START_SEND,
};
use crate::protocol::Received;
use crate::transport::Transport;
use crate::{Error, Result};

/// Interrupt enable mask and the completion bits waited for.
fn interrupt_masks(command: ChipCommand) -> (u8, u8) {
    match command {
        // TxIEn RxIEn IdleIEn LoAlertIEn ErrIEn TimerIEn; wait on Rx|Idle
        ChipCommand::Transceive => (0x77, irq::RX | irq::IDLE),
        // ErrIEn IdleIEn; wait on Idle
        _ => (irq::IDLE | irq::ERR, irq::IDLE),
    }
}

/// Load `send` into the FIFO, run `command` and collect the reply.
///
/// Only [`ChipCommand::Transceive`] reads data back; other commands return
/// an empty [`Received`] once the chip goes idle. The wait is a bounded
/// spin on ComIrqReg: exhausting it yields [`Error::Timeout`], the reader
/// timer firing yields [`Error::NoTag`], and any of the protocol, parity,
/// collision or buffer-overflow error bits yield [`Error::Chip`].
pub fn transceive<T: Transport + ?Sized>(
    t: &mut T,
    command: ChipCommand,
    send: &[u8],
) -> Result<Received> {
    let (irq_en, wait_irq) = interrupt_masks(command);

    t.write_register(Register::ComIEn, irq_en | irq::SET)?;
    // Set1 = 0: acknowledge everything pending
    t.write_register(Register::ComIrq, irq::ALL)?;
    t.write_register(Register::FifoLevel, FIFO_FLUSH)?;
    t.write_register(Register::Command, ChipCommand::Idle.code())?;

    for &byte in send {
        t.write_register(Register::FifoData, byte)?;
    }

    t.write_register(Register::Command, command.code())?;
    if command == ChipCommand::Transceive {
        t.set_bits(Register::BitFraming, START_SEND)?;
    }

    let mut fired = None;
    for _ in 0..TRANSCEIVE_POLL_LIMIT {
        let n = t.read_register(Register::ComIrq)?;
        if n & (irq::TIMER | wait_irq) != 0 {
            fired = Some(n);
            break;
        }
    }

    t.clear_bits(Register::BitFraming, START_SEND)?;

    let Some(n) = fired else {
        debug!(
            "{:?}: no interrupt after {} polls",
            command, TRANSCEIVE_POLL_LIMIT
        );
        return Err(Error::Timeout);
    };

    let error = t.read_register(Register::Error)? & ERROR_MASK;
    if error != 0 {
        return Err(Error::Chip { bits: error });
    }

    if n & irq_en & irq::TIMER != 0 {
        return Err(Error::NoTag);
    }

    if command != ChipCommand::Transceive {
        return Ok(Received::default());
    }

    let level = (t.read_register(Register::FifoLevel)? & 0x7F) as usize;
    let last_bits = t.read_register(Register::Control)? & RX_LAST_BITS;
    let valid_bits = Received::bit_count(level, last_bits);

    let count = level.clamp(1, MAX_RECEIVE_LEN);
    let mut data = Vec::with_capacity(count);
    for _ in 0..count {
        data.push(t.read_register(Register::FifoData)?);
    }

    trace!("received {} bytes, {} valid bits", data.len(), valid_bits);
    Ok(Received::new(data, valid_bits))
}
