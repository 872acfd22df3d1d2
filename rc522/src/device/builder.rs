// rc522/src/device/builder.rs

use crate::device::config::ReaderConfig;
use crate::device::handle::{Initialized, Mfrc522, Uninitialized};
use crate::transport::Transport;
use crate::{Error, Result};

/// Helper to construct a reader with optional configuration.
#[derive(Default)]
pub struct ReaderBuilder {
    transport: Option<Box<dyn Transport>>,
    config: ReaderConfig,
}

impl ReaderBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Provide an already-created transport instance (e.g. MockTransport)
    pub fn with_transport(mut self, transport: Box<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn with_config(mut self, config: ReaderConfig) -> Self {
        self.config = config;
        self
    }

    /// Leave the antenna off after initialization.
    pub fn antenna_off(mut self) -> Self {
        self.config.antenna_on = false;
        self
    }

    /// Consume the builder and return an uninitialized reader.
    /// Requires a transport to be provided; otherwise returns DeviceNotFound.
    pub fn build_uninitialized(self) -> Result<Mfrc522<Uninitialized>> {
        match self.transport {
            Some(t) => Ok(Mfrc522::with_config(t, self.config)),
            None => Err(Error::DeviceNotFound),
        }
    }

    /// Build and run the reset/configuration sequence.
    pub fn build(self) -> Result<Mfrc522<Initialized>> {
        self.build_uninitialized()?.initialize()
    }
}
