// rc522/src/protocol/cascade.rs

use crate::constants::UID_MAX_LEN;
use crate::types::{CascadeLevel, Uid, UidFragment};
use crate::{Error, Result};

/// Result of feeding one selected fragment into the assembler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CascadeStep {
    /// Fragment carried the cascade tag; run anti-collision at this level next.
    Continue(CascadeLevel),
    /// UID is complete.
    Complete(Uid),
}

/// Accumulates serial bytes across cascade levels.
///
/// A fragment starting with the cascade tag contributes bytes 1..4 and
/// moves on to the next level; any other fragment (and every level 3
/// fragment) contributes its 4 serial bytes and ends the cascade.
#[derive(Debug, Clone)]
pub struct UidAssembler {
    level: Option<CascadeLevel>,
    bytes: [u8; UID_MAX_LEN],
    len: usize,
}

impl Default for UidAssembler {
    fn default() -> Self {
        Self::new()
    }
}

impl UidAssembler {
    pub fn new() -> Self {
        Self {
            level: Some(CascadeLevel::Level1),
            bytes: [0u8; UID_MAX_LEN],
            len: 0,
        }
    }

    /// Level whose fragment is expected next, `None` once complete.
    pub fn level(&self) -> Option<CascadeLevel> {
        self.level
    }

    /// Serial bytes gathered so far.
    pub fn partial(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    pub fn push(&mut self, fragment: &UidFragment) -> Result<CascadeStep> {
        let level = self.level.ok_or(Error::InvalidUid(self.len))?;

        match level.next() {
            Some(next) if fragment.is_cascade() => {
                self.extend(&fragment.serial()[1..]);
                self.level = Some(next);
                Ok(CascadeStep::Continue(next))
            }
            _ => {
                self.extend(fragment.serial());
                self.level = None;
                Ok(CascadeStep::Complete(Uid::from_slice(self.partial())?))
            }
        }
    }

    fn extend(&mut self, serial: &[u8]) {
        self.bytes[self.len..self.len + serial.len()].copy_from_slice(serial);
        self.len += serial.len();
    }
}
