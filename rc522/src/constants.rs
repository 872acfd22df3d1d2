// rc522/src/constants.rs
//! Common protocol constants used across the crate

/// REQA: request cards in the IDLE state (7-bit short frame)
pub const PICC_REQA: u8 = 0x26;

/// WUPA: wake up cards in the IDLE or HALT state (7-bit short frame)
pub const PICC_WUPA: u8 = 0x52;

/// SEL codes for cascade levels 1..3
pub const PICC_SEL_CL1: u8 = 0x93;
pub const PICC_SEL_CL2: u8 = 0x95;
pub const PICC_SEL_CL3: u8 = 0x97;

/// NVB for an anti-collision frame with no known UID bits
pub const NVB_ANTICOLL: u8 = 0x20;

/// NVB for a SELECT frame carrying the full 40 bits of the fragment
pub const NVB_SELECT: u8 = 0x70;

/// Cascade tag: the fragment continues at the next level
pub const CASCADE_TAG: u8 = 0x88;

/// Bytes per anti-collision response: 4 serial bytes plus BCC
pub const UID_FRAGMENT_LEN: usize = 5;

/// Longest UID (triple size)
pub const UID_MAX_LEN: usize = 10;

/// Valid bits expected in an ATQA
pub const ATQA_BITS: usize = 16;

/// Valid bits expected in a SELECT acknowledgement (SAK + CRC_A)
pub const SAK_BITS: usize = 24;

/// Short frame bit count used for REQA/WUPA
pub const SHORT_FRAME_BITS: u8 = 7;

/// Max bytes drained from the FIFO after a transceive
pub const MAX_RECEIVE_LEN: usize = 16;

/// ErrorReg bits that fail an exchange: BufferOvfl, CollErr, ParityErr, ProtocolErr
pub const ERROR_MASK: u8 = 0x1B;

/// Iteration bound of the ComIrqReg spin loop
pub const TRANSCEIVE_POLL_LIMIT: usize = 2000;

/// Iteration bound of the DivIrqReg CRC spin loop
pub const CRC_POLL_LIMIT: usize = 255;

/// CRC_A preset (ISO/IEC 14443-3 6.2.4)
pub const CRC_A_PRESET: u16 = 0x6363;
