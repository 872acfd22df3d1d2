// rc522/src/transport/mock.rs

use std::collections::VecDeque;
use std::time::Duration;

use crate::device::registers::{
    ChipCommand, FIFO_FLUSH, RX_LAST_BITS, Register, START_SEND, div_irq, irq,
};
use crate::protocol::checksum::crc_a;
use crate::transport::traits::Transport;
use crate::{Error, Result};

/// VersionReg value reported by the simulated chip (MFRC522 v2.0).
pub const DEFAULT_VERSION: u8 = 0x92;

/// Pin activity recorded by the mock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinEvent {
    Select,
    Release,
    ResetLow,
    ResetHigh,
}

/// What the simulated card does when the reader transmits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardReply {
    /// Card answers; `last_bits` valid bits in the final byte (0 = all 8).
    Frame { data: Vec<u8>, last_bits: u8 },
    /// Nobody answers and the reader timer expires.
    Silence,
    /// Reception fails with these ErrorReg bits.
    ChipError(u8),
    /// No interrupt is ever raised.
    Hang,
}

impl CardReply {
    pub fn bytes(data: &[u8]) -> Self {
        CardReply::Frame {
            data: data.to_vec(),
            last_bits: 0,
        }
    }

    pub fn bits(data: &[u8], last_bits: u8) -> Self {
        CardReply::Frame {
            data: data.to_vec(),
            last_bits,
        }
    }
}

/// Mock transport for unit tests: a register-level model of the MFRC522
/// with a scripted card in front of its antenna.
///
/// Every SPI exchange is decoded into register reads/writes, so tests see
/// exactly what the driver puts on the bus.
#[derive(Debug)]
pub struct MockTransport {
    registers: [u8; 64],
    fifo: VecDeque<u8>,
    selected: bool,
    pending: Option<u8>,
    replies: VecDeque<CardReply>,
    transfers: usize,
    /// Testing hook: CRC coprocessor never raises CRCIRq
    pub crc_stuck: bool,
    /// Testing hook: fail every transfer after this many succeeded
    pub fail_after: Option<usize>,
    /// Register writes as (address, value)
    pub writes: Vec<(u8, u8)>,
    /// Register reads by address
    pub reads: Vec<u8>,
    /// FIFO contents at each StartSend
    pub transmitted: Vec<Vec<u8>>,
    /// BitFramingReg TxLastBits at each StartSend
    pub tx_last_bits: Vec<u8>,
    /// Inputs handed to the CRC coprocessor
    pub crc_inputs: Vec<Vec<u8>>,
    pub pins: Vec<PinEvent>,
    pub sleeps: Vec<Duration>,
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl MockTransport {
    pub fn new() -> Self {
        let mut m = Self {
            registers: [0u8; 64],
            fifo: VecDeque::new(),
            selected: false,
            pending: None,
            replies: VecDeque::new(),
            transfers: 0,
            crc_stuck: false,
            fail_after: None,
            writes: Vec::new(),
            reads: Vec::new(),
            transmitted: Vec::new(),
            tx_last_bits: Vec::new(),
            crc_inputs: Vec::new(),
            pins: Vec::new(),
            sleeps: Vec::new(),
        };
        m.power_on_defaults();
        m
    }

    /// Queue the card's answer to the next transmission. Transmissions
    /// with nothing queued meet silence.
    pub fn push_reply(&mut self, reply: CardReply) {
        self.replies.push_back(reply);
    }

    pub fn with_replies(replies: impl IntoIterator<Item = CardReply>) -> Self {
        let mut m = Self::new();
        m.replies.extend(replies);
        m
    }

    pub fn pending_replies(&self) -> usize {
        self.replies.len()
    }

    /// Current value of a register as the chip holds it.
    pub fn register(&self, reg: Register) -> u8 {
        self.registers[reg.addr() as usize]
    }

    /// Values written to one register, in order.
    pub fn writes_to(&self, reg: Register) -> Vec<u8> {
        self.writes
            .iter()
            .filter(|(addr, _)| *addr == reg.addr())
            .map(|(_, v)| *v)
            .collect()
    }

    /// Commands written to CommandReg, in order.
    pub fn commands(&self) -> Vec<u8> {
        self.writes_to(Register::Command)
    }

    /// Reads of one register.
    pub fn reads_of(&self, reg: Register) -> usize {
        self.reads.iter().filter(|addr| **addr == reg.addr()).count()
    }

    fn power_on_defaults(&mut self) {
        self.registers = [0u8; 64];
        self.registers[Register::TxControl.addr() as usize] = 0x80;
        self.registers[Register::Version.addr() as usize] = DEFAULT_VERSION;
        self.fifo.clear();
    }

    fn chip_read(&mut self, addr: u8) -> u8 {
        self.reads.push(addr);
        match Register::from_address(addr) {
            Some(Register::FifoLevel) => self.fifo.len().min(64) as u8,
            Some(Register::FifoData) => self.fifo.pop_front().unwrap_or(0),
            _ => self.registers[addr as usize],
        }
    }

    fn chip_write(&mut self, addr: u8, value: u8) {
        self.writes.push((addr, value));
        match Register::from_address(addr) {
            Some(Register::Command) => {
                self.registers[addr as usize] = value;
                self.run_command(value);
            }
            Some(reg @ (Register::ComIrq | Register::DivIrq)) => {
                let slot = &mut self.registers[reg.addr() as usize];
                if value & irq::SET != 0 {
                    *slot |= value & irq::ALL;
                } else {
                    *slot &= !(value & irq::ALL);
                }
            }
            Some(Register::FifoLevel) => {
                if value & FIFO_FLUSH != 0 {
                    self.fifo.clear();
                }
            }
            Some(Register::FifoData) => self.fifo.push_back(value),
            Some(Register::BitFraming) => {
                self.registers[addr as usize] = value;
                let transceiving = ChipCommand::from_code(self.register(Register::Command))
                    == Some(ChipCommand::Transceive);
                if value & START_SEND != 0 && transceiving {
                    self.exchange(value & 0x07);
                }
            }
            _ => self.registers[addr as usize] = value,
        }
    }

    fn run_command(&mut self, value: u8) {
        match ChipCommand::from_code(value) {
            Some(ChipCommand::SoftReset) => self.power_on_defaults(),
            Some(ChipCommand::CalcCrc) => {
                let input: Vec<u8> = self.fifo.drain(..).collect();
                let crc = crc_a(&input);
                self.crc_inputs.push(input);
                if !self.crc_stuck {
                    self.registers[Register::CrcResultLow.addr() as usize] = crc[0];
                    self.registers[Register::CrcResultHigh.addr() as usize] = crc[1];
                    self.registers[Register::DivIrq.addr() as usize] |= div_irq::CRC;
                    self.registers[Register::ComIrq.addr() as usize] |= irq::IDLE;
                }
            }
            // Transceive waits for StartSend, Idle just stops
            _ => {}
        }
    }

    fn exchange(&mut self, tx_last_bits: u8) {
        let sent: Vec<u8> = self.fifo.drain(..).collect();
        self.transmitted.push(sent);
        self.tx_last_bits.push(tx_last_bits);
        self.registers[Register::Error.addr() as usize] = 0;

        let com_irq = Register::ComIrq.addr() as usize;
        match self.replies.pop_front().unwrap_or(CardReply::Silence) {
            CardReply::Frame { data, last_bits } => {
                self.fifo.extend(data);
                let control = &mut self.registers[Register::Control.addr() as usize];
                *control = (*control & !RX_LAST_BITS) | (last_bits & RX_LAST_BITS);
                self.registers[com_irq] |= irq::RX | irq::IDLE;
            }
            CardReply::Silence => self.registers[com_irq] |= irq::TIMER,
            CardReply::ChipError(bits) => {
                self.registers[Register::Error.addr() as usize] = bits;
                self.registers[com_irq] |= irq::ERR | irq::RX | irq::IDLE;
            }
            CardReply::Hang => {}
        }
    }
}

impl Transport for MockTransport {
    fn transfer(&mut self, byte: u8) -> Result<u8> {
        if !self.selected {
            return Err(Error::Transport("transfer without chip select".into()));
        }
        if let Some(limit) = self.fail_after {
            if self.transfers >= limit {
                return Err(Error::Transport("bus not responding".into()));
            }
        }
        self.transfers += 1;

        match self.pending.take() {
            None => {
                self.pending = Some(byte);
                Ok(0)
            }
            Some(framing) => {
                let addr = (framing >> 1) & 0x3F;
                if framing & 0x80 != 0 {
                    Ok(self.chip_read(addr))
                } else {
                    self.chip_write(addr, byte);
                    Ok(0)
                }
            }
        }
    }

    fn select(&mut self) -> Result<()> {
        self.selected = true;
        self.pending = None;
        self.pins.push(PinEvent::Select);
        Ok(())
    }

    fn release(&mut self) -> Result<()> {
        self.selected = false;
        self.pending = None;
        self.pins.push(PinEvent::Release);
        Ok(())
    }

    fn reset_low(&mut self) -> Result<()> {
        self.pins.push(PinEvent::ResetLow);
        Ok(())
    }

    fn reset_high(&mut self) -> Result<()> {
        self.pins.push(PinEvent::ResetHigh);
        self.power_on_defaults();
        Ok(())
    }

    fn sleep(&mut self, duration: Duration) {
        // Recorded only; tests never wait
        self.sleeps.push(duration);
    }
}
