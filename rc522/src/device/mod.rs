// rc522/src/device/mod.rs

pub mod builder;
pub mod config;
pub mod crc;
pub mod handle;
pub mod io;
pub mod registers;
pub mod transceive;

pub use builder::ReaderBuilder;
pub use config::ReaderConfig;
pub use handle::{Initialized, Mfrc522, Uninitialized};
pub use io::RegisterIo;
pub use registers::{ChipCommand, Register};
