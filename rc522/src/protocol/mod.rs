// rc522/src/protocol/mod.rs
//! ISO/IEC 14443-A framing that does not depend on the reader chip.

pub mod cascade;
pub mod checksum;
pub mod frame;

pub use cascade::{CascadeStep, UidAssembler};
pub use checksum::{bcc, crc_a, verify_bcc};
pub use frame::Received;
