// rc522/src/session/dedup.rs

use crate::types::Uid;

/// Remembers the last announced UID so a card sitting in the field is
/// reported once, plus a cycle counter that periodically forgets it.
#[derive(Debug, Clone)]
pub struct Deduplicator {
    last: Option<Uid>,
    cycles: usize,
    reset_after: usize,
}

impl Deduplicator {
    pub fn new(reset_after: usize) -> Self {
        Self {
            last: None,
            cycles: 0,
            reset_after,
        }
    }

    /// Record a successful read. Returns true when `uid` must be announced.
    pub fn observe(&mut self, uid: &Uid) -> bool {
        if self.last.as_ref() == Some(uid) {
            return false;
        }
        self.last = Some(*uid);
        true
    }

    /// Count one poll cycle. Past the threshold the last UID is forgotten
    /// and counting restarts. Returns true when that happened.
    pub fn tick(&mut self) -> bool {
        self.cycles += 1;
        if self.cycles > self.reset_after {
            self.cycles = 0;
            self.last = None;
            return true;
        }
        false
    }

    pub fn last(&self) -> Option<&Uid> {
        self.last.as_ref()
    }

    pub fn cycles(&self) -> usize {
        self.cycles
    }
}
