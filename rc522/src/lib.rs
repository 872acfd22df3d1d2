// rc522/src/lib.rs

//! rc522
//!
//! Pure Rust driver for MFRC522 (RC522) ISO/IEC 14443-A contactless
//! readers: register access over SPI, the chip's transceive and CRC
//! coprocessor, the REQA/anti-collision/select cascade and a polling
//! session that reports card UIDs.
#![warn(missing_docs)]

pub mod constants;
pub mod device;
pub mod error;
pub mod prelude;
pub mod protocol;
pub mod session;
pub mod test_support;
pub mod transport;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available to consumers and to the
// prelude.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
