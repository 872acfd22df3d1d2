//! Small helpers shared across the crate: hex rendering and loop timing.

pub mod hex;
pub mod timing;

pub use hex::*;
pub use timing::*;
