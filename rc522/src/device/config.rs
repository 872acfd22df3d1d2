// rc522/src/device/config.rs
//! Register values written during initialization.

use std::time::Duration;

use crate::device::registers::Register;

/// TModeReg: TAuto, timer starts after every transmission, prescaler high
/// nibble 0xD.
pub const TIMER_MODE: u8 = 0x8D;

/// TPrescalerReg: prescaler low byte (0xD3E total, about 2 kHz tick).
pub const TIMER_PRESCALER: u8 = 0x3E;

/// Timer reload value, ticks before TimerIRq (about 15 ms).
pub const TIMER_RELOAD: u16 = 30;

/// TxASKReg: force 100 % ASK modulation.
pub const TX_ASK: u8 = 0x40;

/// ModeReg: CRC preset 0x6363, MSB first.
pub const MODE: u8 = 0x3D;

/// Wait after releasing the reset line before the first register access.
pub const RESET_SETTLE: Duration = Duration::from_millis(50);

/// Chip configuration applied after every (soft) reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReaderConfig {
    pub timer_mode: u8,
    pub timer_prescaler: u8,
    pub timer_reload: u16,
    pub tx_ask: u8,
    pub mode: u8,
    /// Switch the antenna drivers on after configuring.
    pub antenna_on: bool,
    /// Pause between the hardware reset and the soft reset.
    #[cfg_attr(feature = "serde", serde(with = "crate::utils::serde_millis"))]
    pub reset_settle: Duration,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            timer_mode: TIMER_MODE,
            timer_prescaler: TIMER_PRESCALER,
            timer_reload: TIMER_RELOAD,
            tx_ask: TX_ASK,
            mode: MODE,
            antenna_on: true,
            reset_settle: RESET_SETTLE,
        }
    }
}

impl ReaderConfig {
    /// Register writes in the order they are issued after a soft reset.
    pub fn register_sequence(&self) -> [(Register, u8); 6] {
        let [reload_high, reload_low] = self.timer_reload.to_be_bytes();
        [
            (Register::TMode, self.timer_mode),
            (Register::TPrescaler, self.timer_prescaler),
            (Register::TReloadLow, reload_low),
            (Register::TReloadHigh, reload_high),
            (Register::TxAsk, self.tx_ask),
            (Register::Mode, self.mode),
        ]
    }
}
