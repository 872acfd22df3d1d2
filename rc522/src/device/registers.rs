// rc522/src/device/registers.rs
//! MFRC522 register map, command codes and the bit masks the driver uses.

/// Chip registers touched by the driver (6-bit addresses).
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Register {
    Command = 0x01,
    ComIEn = 0x02,
    DivIEn = 0x03,
    ComIrq = 0x04,
    DivIrq = 0x05,
    Error = 0x06,
    Status1 = 0x07,
    Status2 = 0x08,
    FifoData = 0x09,
    FifoLevel = 0x0A,
    Control = 0x0C,
    BitFraming = 0x0D,
    Coll = 0x0E,
    Mode = 0x11,
    TxMode = 0x12,
    RxMode = 0x13,
    TxControl = 0x14,
    TxAsk = 0x15,
    CrcResultHigh = 0x21,
    CrcResultLow = 0x22,
    ModWidth = 0x24,
    TMode = 0x2A,
    TPrescaler = 0x2B,
    TReloadHigh = 0x2C,
    TReloadLow = 0x2D,
    Version = 0x37,
}

impl Register {
    pub fn addr(self) -> u8 {
        self as u8
    }

    /// Framing byte for a write: address in bits 6..1, bit 7 clear.
    pub fn write_address(self) -> u8 {
        (self.addr() << 1) & 0x7E
    }

    /// Framing byte for a read: address in bits 6..1, bit 7 set.
    pub fn read_address(self) -> u8 {
        self.write_address() | 0x80
    }

    /// Inverse of the framing: which register a framing byte addresses.
    pub fn from_address(addr: u8) -> Option<Self> {
        use Register::*;
        const ALL: [Register; 26] = [
            Command, ComIEn, DivIEn, ComIrq, DivIrq, Error, Status1, Status2, FifoData,
            FifoLevel, Control, BitFraming, Coll, Mode, TxMode, RxMode, TxControl, TxAsk,
            CrcResultHigh, CrcResultLow, ModWidth, TMode, TPrescaler, TReloadHigh, TReloadLow,
            Version,
        ];
        ALL.iter().copied().find(|r| r.addr() == addr)
    }
}

/// Commands accepted by CommandReg.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChipCommand {
    Idle = 0x00,
    CalcCrc = 0x03,
    Transceive = 0x0C,
    SoftReset = 0x0F,
}

impl ChipCommand {
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code & 0x0F {
            0x00 => Some(ChipCommand::Idle),
            0x03 => Some(ChipCommand::CalcCrc),
            0x0C => Some(ChipCommand::Transceive),
            0x0F => Some(ChipCommand::SoftReset),
            _ => None,
        }
    }
}

/// ComIEnReg / ComIrqReg bits.
pub mod irq {
    /// IRqInv (ComIEn) / Set1 (ComIrq)
    pub const SET: u8 = 0x80;
    pub const TX: u8 = 0x40;
    pub const RX: u8 = 0x20;
    pub const IDLE: u8 = 0x10;
    pub const HI_ALERT: u8 = 0x08;
    pub const LO_ALERT: u8 = 0x04;
    pub const ERR: u8 = 0x02;
    pub const TIMER: u8 = 0x01;
    /// Every request bit, used to acknowledge all pending interrupts
    pub const ALL: u8 = 0x7F;
}

/// DivIrqReg bits.
pub mod div_irq {
    pub const CRC: u8 = 0x04;
}

/// ErrorReg bits.
pub mod error_bits {
    pub const PROTOCOL: u8 = 0x01;
    pub const PARITY: u8 = 0x02;
    pub const CRC: u8 = 0x04;
    pub const COLLISION: u8 = 0x08;
    pub const BUFFER_OVERFLOW: u8 = 0x10;
}

/// FIFOLevelReg FlushBuffer bit.
pub const FIFO_FLUSH: u8 = 0x80;

/// BitFramingReg StartSend bit.
pub const START_SEND: u8 = 0x80;

/// ControlReg RxLastBits mask.
pub const RX_LAST_BITS: u8 = 0x07;

/// TxControlReg Tx1RFEn | Tx2RFEn.
pub const ANTENNA_BITS: u8 = 0x03;
