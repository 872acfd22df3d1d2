// rc522/src/device/handle.rs

use std::marker::PhantomData;
use std::time::Duration;

use log::{debug, info};

use crate::device::config::ReaderConfig;
use crate::device::io::RegisterIo;
use crate::device::registers::{ANTENNA_BITS, ChipCommand, Register};
use crate::device::{crc, transceive};
use crate::protocol::{CascadeStep, Received, UidAssembler, frame};
use crate::transport::Transport;
use crate::types::{Atqa, CascadeLevel, RequestMode, Sak, Uid, UidFragment};
use crate::{Error, Result};

/// Type-state markers
pub struct Uninitialized;
pub struct Initialized;

/// MFRC522 handle that enforces initialization state at compile time.
pub struct Mfrc522<State = Uninitialized> {
    transport: Box<dyn Transport>,
    config: ReaderConfig,
    _state: PhantomData<State>,
}

impl Mfrc522<Uninitialized> {
    /// Wrap a transport with the default register configuration.
    pub fn new_with_transport(transport: Box<dyn Transport>) -> Self {
        Self::with_config(transport, ReaderConfig::default())
    }

    pub fn with_config(transport: Box<dyn Transport>, config: ReaderConfig) -> Self {
        Self {
            transport,
            config,
            _state: PhantomData,
        }
    }

    /// Hardware reset handshake followed by soft reset and configuration.
    pub fn initialize(mut self) -> Result<Mfrc522<Initialized>> {
        self.transport.reset_low()?;
        self.transport.release()?;
        self.transport.reset_high()?;
        if !self.config.reset_settle.is_zero() {
            self.transport.sleep(self.config.reset_settle);
        }

        let mut reader = Mfrc522 {
            transport: self.transport,
            config: self.config,
            _state: PhantomData,
        };
        reader.reinitialize()?;

        let version = reader.version()?;
        info!("MFRC522 ready, version {:#04x}", version);
        Ok(reader)
    }

    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }
}

impl Mfrc522<Initialized> {
    /// Soft reset and replay the register configuration.
    pub fn reinitialize(&mut self) -> Result<()> {
        self.write_register(Register::Command, ChipCommand::SoftReset.code())?;
        for (reg, value) in self.config.register_sequence() {
            self.write_register(reg, value)?;
        }
        if self.config.antenna_on {
            self.antenna_on()?;
        }
        Ok(())
    }

    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    pub fn read_register(&mut self, reg: Register) -> Result<u8> {
        self.transport.read_register(reg)
    }

    pub fn write_register(&mut self, reg: Register, value: u8) -> Result<()> {
        self.transport.write_register(reg, value)
    }

    /// VersionReg: 0x91 for v1.0, 0x92 for v2.0, 0x88 for clones.
    pub fn version(&mut self) -> Result<u8> {
        self.read_register(Register::Version)
    }

    /// Enable both antenna drivers unless they already are.
    pub fn antenna_on(&mut self) -> Result<()> {
        let value = self.read_register(Register::TxControl)?;
        if value & ANTENNA_BITS != ANTENNA_BITS {
            self.write_register(Register::TxControl, value | ANTENNA_BITS)?;
        }
        Ok(())
    }

    pub fn antenna_off(&mut self) -> Result<()> {
        self.transport.clear_bits(Register::TxControl, ANTENNA_BITS)
    }

    pub fn calculate_crc(&mut self, data: &[u8]) -> Result<[u8; 2]> {
        crc::calculate_crc(&mut *self.transport, data)
    }

    pub fn transceive(&mut self, command: ChipCommand, send: &[u8]) -> Result<Received> {
        transceive::transceive(&mut *self.transport, command, send)
    }

    /// Send REQA or WUPA as a 7-bit short frame and return the ATQA.
    pub fn request(&mut self, mode: RequestMode) -> Result<Atqa> {
        self.write_register(Register::BitFraming, crate::constants::SHORT_FRAME_BITS)?;
        let received = self.transceive(ChipCommand::Transceive, &frame::request_frame(mode))?;
        frame::parse_atqa(&received).inspect_err(|e| debug!("request: {}", e))
    }

    /// Ask every card at `level` for its serial fragment.
    pub fn anticollision(&mut self, level: CascadeLevel) -> Result<UidFragment> {
        self.write_register(Register::BitFraming, 0x00)?;
        let received =
            self.transceive(ChipCommand::Transceive, &frame::anticollision_frame(level))?;
        frame::parse_fragment(&received).inspect_err(|e| debug!("anticollision {:?}: {}", level, e))
    }

    /// Select the card owning `fragment` at `level`.
    pub fn select(&mut self, level: CascadeLevel, fragment: &UidFragment) -> Result<Sak> {
        let header = frame::select_header(level, fragment);
        let crc = self.calculate_crc(&header)?;
        let received = self.transceive(
            ChipCommand::Transceive,
            &frame::select_frame(level, fragment, crc),
        )?;
        frame::parse_sak(&received).inspect_err(|e| debug!("select {:?}: {}", level, e))
    }

    /// Run the cascade until the full UID is known.
    ///
    /// Assumes a card has just answered [`request`](Self::request).
    pub fn select_card(&mut self) -> Result<Uid> {
        let mut assembler = UidAssembler::new();
        while let Some(level) = assembler.level() {
            let fragment = self.anticollision(level)?;
            self.select(level, &fragment)?;
            if let CascadeStep::Complete(uid) = assembler.push(&fragment)? {
                return Ok(uid);
            }
        }
        Err(Error::InvalidUid(assembler.partial().len()))
    }

    /// Request followed by the cascade.
    pub fn read_uid(&mut self, mode: RequestMode) -> Result<Uid> {
        self.request(mode)?;
        self.select_card()
    }

    /// Block through the transport.
    pub fn delay(&mut self, duration: Duration) {
        self.transport.sleep(duration);
    }

    /// Give the transport back.
    pub fn into_transport(self) -> Box<dyn Transport> {
        self.transport
    }
}
