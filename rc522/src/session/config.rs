// rc522/src/session/config.rs

use std::time::Duration;

use crate::types::RequestMode;

/// Pause between poll cycles.
pub const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Cycles after which the last announced UID is forgotten.
pub const DEDUP_RESET_CYCLES: usize = 1000;

/// Poll loop settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionConfig {
    #[cfg_attr(feature = "serde", serde(with = "crate::utils::serde_millis"))]
    pub poll_interval: Duration,
    /// A card left in the field is re-announced after this many cycles.
    pub dedup_reset_cycles: usize,
    pub request_mode: RequestMode,
    /// Soft reset and reconfigure the chip at the start of every cycle.
    pub reinit_every_cycle: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            poll_interval: POLL_INTERVAL,
            dedup_reset_cycles: DEDUP_RESET_CYCLES,
            request_mode: RequestMode::Idle,
            reinit_every_cycle: true,
        }
    }
}
