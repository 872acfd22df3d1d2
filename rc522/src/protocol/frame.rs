// rc522/src/protocol/frame.rs

use crate::constants::{
    ATQA_BITS, NVB_ANTICOLL, NVB_SELECT, SAK_BITS, UID_FRAGMENT_LEN,
};
use crate::types::{Atqa, CascadeLevel, RequestMode, Sak, UidFragment};
use crate::{Error, Result};

/// Bytes drained from the FIFO after an exchange, plus the number of valid
/// bits they carry (the last byte may be partial).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Received {
    pub data: Vec<u8>,
    pub valid_bits: usize,
}

impl Received {
    pub fn new(data: Vec<u8>, valid_bits: usize) -> Self {
        Self { data, valid_bits }
    }

    /// Valid bits for `byte_count` FIFO bytes whose last byte holds
    /// `last_bits` bits (0 means the whole byte).
    pub fn bit_count(byte_count: usize, last_bits: u8) -> usize {
        if last_bits != 0 {
            byte_count.saturating_sub(1) * 8 + last_bits as usize
        } else {
            byte_count * 8
        }
    }
}

/// Short frame for REQA/WUPA.
pub fn request_frame(mode: RequestMode) -> [u8; 1] {
    [mode.code()]
}

/// Anti-collision frame asking for the whole serial of a level.
pub fn anticollision_frame(level: CascadeLevel) -> [u8; 2] {
    [level.code(), NVB_ANTICOLL]
}

/// SELECT frame without its CRC: SEL, NVB, 4 serial bytes, BCC.
pub fn select_header(level: CascadeLevel, fragment: &UidFragment) -> [u8; 7] {
    let mut out = [0u8; 7];
    out[0] = level.code();
    out[1] = NVB_SELECT;
    out[2..].copy_from_slice(fragment.as_bytes());
    out
}

/// Complete SELECT frame with the CRC_A appended low byte first.
pub fn select_frame(level: CascadeLevel, fragment: &UidFragment, crc: [u8; 2]) -> [u8; 9] {
    let mut out = [0u8; 9];
    out[..7].copy_from_slice(&select_header(level, fragment));
    out[7..].copy_from_slice(&crc);
    out
}

/// ATQA must be exactly 16 valid bits.
pub fn parse_atqa(received: &Received) -> Result<Atqa> {
    if received.valid_bits != ATQA_BITS || received.data.len() < 2 {
        return Err(Error::UnexpectedBits {
            expected: ATQA_BITS,
            actual: received.valid_bits,
        });
    }
    Ok(Atqa::from_bytes([received.data[0], received.data[1]]))
}

/// Anti-collision response must be 5 bytes with a matching BCC.
pub fn parse_fragment(received: &Received) -> Result<UidFragment> {
    if received.data.len() != UID_FRAGMENT_LEN {
        return Err(Error::UnexpectedLength {
            expected: UID_FRAGMENT_LEN,
            actual: received.data.len(),
        });
    }
    UidFragment::try_from(received.data.as_slice())
}

/// SELECT acknowledgement must be exactly 24 valid bits (SAK + CRC_A).
pub fn parse_sak(received: &Received) -> Result<Sak> {
    if received.valid_bits != SAK_BITS || received.data.is_empty() {
        return Err(Error::AckRejected {
            bits: received.valid_bits,
        });
    }
    Ok(Sak::new(received.data[0]))
}
