// rc522/src/types.rs

use crate::Error;
use crate::constants::{
    CASCADE_TAG, PICC_REQA, PICC_SEL_CL1, PICC_SEL_CL2, PICC_SEL_CL3, PICC_WUPA,
    UID_FRAGMENT_LEN, UID_MAX_LEN,
};
use crate::protocol::checksum::bcc;
use std::fmt;

/// Card identifier assembled from the cascade (4, 7 or 10 bytes).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Uid {
    bytes: [u8; UID_MAX_LEN],
    len: usize,
}

impl Uid {
    /// Build a UID from a single, double or triple size byte slice.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, Error> {
        match bytes.len() {
            4 | 7 | 10 => {
                let mut arr = [0u8; UID_MAX_LEN];
                arr[..bytes.len()].copy_from_slice(bytes);
                Ok(Self {
                    bytes: arr,
                    len: bytes.len(),
                })
            }
            n => Err(Error::InvalidUid(n)),
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Number of cascade levels the card needed.
    pub fn cascade_levels(&self) -> usize {
        match self.len {
            4 => 1,
            7 => 2,
            _ => 3,
        }
    }

    /// Integer value with byte 0 least significant.
    ///
    /// For a single size UID this is the classic 32-bit card number.
    pub fn to_le_integer(&self) -> u128 {
        self.as_bytes()
            .iter()
            .rev()
            .fold(0u128, |acc, &b| (acc << 8) | b as u128)
    }

    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(self.as_bytes())
    }
}

impl TryFrom<&[u8]> for Uid {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Uid::from_slice(bytes)
    }
}

impl fmt::Debug for Uid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Uid({})", self.to_hex())
    }
}

impl fmt::Display for Uid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_le_integer())
    }
}

/// One anti-collision response: 4 serial bytes followed by their BCC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UidFragment([u8; UID_FRAGMENT_LEN]);

impl UidFragment {
    /// Validate the BCC and wrap the response.
    pub fn from_bytes(bytes: [u8; UID_FRAGMENT_LEN]) -> Result<Self, Error> {
        let expected = bcc(&bytes[..4]);
        if bytes[4] != expected {
            return Err(Error::ChecksumMismatch {
                expected,
                actual: bytes[4],
            });
        }
        Ok(Self(bytes))
    }

    pub fn as_bytes(&self) -> &[u8; UID_FRAGMENT_LEN] {
        &self.0
    }

    pub fn serial(&self) -> &[u8] {
        &self.0[..4]
    }

    pub fn bcc(&self) -> u8 {
        self.0[4]
    }

    /// True when the first byte is the cascade tag.
    pub fn is_cascade(&self) -> bool {
        self.0[0] == CASCADE_TAG
    }
}

impl TryFrom<&[u8]> for UidFragment {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != UID_FRAGMENT_LEN {
            return Err(Error::UnexpectedLength {
                expected: UID_FRAGMENT_LEN,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; UID_FRAGMENT_LEN];
        arr.copy_from_slice(bytes);
        UidFragment::from_bytes(arr)
    }
}

/// Answer to request (ATQA), two bytes, LSB first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Atqa([u8; 2]);

impl Atqa {
    pub fn from_bytes(bytes: [u8; 2]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 2] {
        &self.0
    }

    pub fn as_u16(&self) -> u16 {
        u16::from_le_bytes(self.0)
    }
}

/// Select acknowledge byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Sak(u8);

impl Sak {
    pub fn new(value: u8) -> Self {
        Self(value)
    }

    pub fn as_u8(&self) -> u8 {
        self.0
    }

    /// Cascade bit (b3 in ISO numbering): the UID is not complete yet.
    pub fn uid_incomplete(&self) -> bool {
        self.0 & 0x04 != 0
    }
}

/// Cascade level of the anti-collision loop.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CascadeLevel {
    Level1 = PICC_SEL_CL1,
    Level2 = PICC_SEL_CL2,
    Level3 = PICC_SEL_CL3,
}

impl CascadeLevel {
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn next(self) -> Option<Self> {
        match self {
            CascadeLevel::Level1 => Some(CascadeLevel::Level2),
            CascadeLevel::Level2 => Some(CascadeLevel::Level3),
            CascadeLevel::Level3 => None,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            PICC_SEL_CL1 => Some(CascadeLevel::Level1),
            PICC_SEL_CL2 => Some(CascadeLevel::Level2),
            PICC_SEL_CL3 => Some(CascadeLevel::Level3),
            _ => None,
        }
    }
}

/// Which short frame opens a poll.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RequestMode {
    /// REQA, only cards in IDLE answer
    #[default]
    Idle = PICC_REQA,
    /// WUPA, cards in HALT answer too
    All = PICC_WUPA,
}

impl RequestMode {
    pub fn code(self) -> u8 {
        self as u8
    }
}
