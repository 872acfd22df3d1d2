// rc522/src/error.rs

use thiserror::Error;

/// Error type shared by every layer of the driver.
///
/// Protocol-level failures are never panics; each step returns one of these
/// and the poll loop collapses them into a [`Status`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("no tag answered before the reader timer expired")]
    NoTag,

    #[error("reader reported error bits {bits:#04x}")]
    Chip { bits: u8 },

    #[error("unexpected response length: expected {expected} bytes, got {actual}")]
    UnexpectedLength { expected: usize, actual: usize },

    #[error("unexpected response size: expected {expected} valid bits, got {actual}")]
    UnexpectedBits { expected: usize, actual: usize },

    #[error("checksum mismatch: expected {expected:#04x}, got {actual:#04x}")]
    ChecksumMismatch { expected: u8, actual: u8 },

    #[error("select acknowledgement rejected: {bits} valid bits")]
    AckRejected { bits: usize },

    #[error("CRC coprocessor did not complete")]
    CrcTimeout,

    #[error("reader did not raise an interrupt in time")]
    Timeout,

    #[error("invalid UID length {0}")]
    InvalidUid(usize),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("device not found")]
    DeviceNotFound,
}

impl Error {
    /// Collapse the error into the coarse public status.
    pub fn status(&self) -> Status {
        match self {
            Error::NoTag => Status::NoTag,
            _ => Status::Error,
        }
    }

    /// Transport faults mean wiring or clocking is broken; nothing a retry
    /// on the next poll cycle can fix.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::Transport(_) | Error::DeviceNotFound)
    }
}

#[cfg(feature = "rppal")]
impl From<rppal::spi::Error> for Error {
    fn from(e: rppal::spi::Error) -> Self {
        Error::Transport(format!("spi: {}", e))
    }
}

#[cfg(feature = "rppal")]
impl From<rppal::gpio::Error> for Error {
    fn from(e: rppal::gpio::Error) -> Self {
        Error::Transport(format!("gpio: {}", e))
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// Tri-state outcome of a protocol exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Ok,
    NoTag,
    Error,
}

impl Status {
    /// Status of an arbitrary driver result.
    pub fn of<T>(result: &Result<T>) -> Self {
        match result {
            Ok(_) => Status::Ok,
            Err(e) => e.status(),
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, Status::Ok)
    }
}
