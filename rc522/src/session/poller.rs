// rc522/src/session/poller.rs

use std::time::Instant;

use log::{debug, info, trace, warn};

use crate::device::{Initialized, Mfrc522};
use crate::session::cancellation_token::CancellationToken;
use crate::session::config::SessionConfig;
use crate::session::dedup::Deduplicator;
use crate::session::sink::CardSink;
use crate::types::Uid;
use crate::utils::remaining;
use crate::{Error, Result, Status};

/// The poll loop: owns the reader, re-reads the field at a fixed cadence
/// and hands newly seen UIDs to a sink.
pub struct Session<S: CardSink> {
    reader: Mfrc522<Initialized>,
    config: SessionConfig,
    dedup: Deduplicator,
    sink: S,
}

impl<S: CardSink> Session<S> {
    pub fn new(reader: Mfrc522<Initialized>, config: SessionConfig, sink: S) -> Self {
        Self {
            reader,
            dedup: Deduplicator::new(config.dedup_reset_cycles),
            config,
            sink,
        }
    }

    /// One cycle without the pacing delay.
    ///
    /// Protocol failures come back as a [`Status`]; only faults no later
    /// cycle can recover from (see [`Error::is_fatal`]) are returned as
    /// errors.
    pub fn poll_once(&mut self) -> Result<Status> {
        let status = match self.read_card() {
            Ok(uid) => {
                if self.dedup.observe(&uid) {
                    info!("new card {}", uid.to_hex());
                    self.sink.announce(&uid);
                } else {
                    trace!("card {} still present", uid.to_hex());
                }
                Ok(Status::Ok)
            }
            Err(e) if e.is_fatal() => {
                warn!("poll aborted: {}", e);
                return Err(e);
            }
            Err(Error::NoTag) => Ok(Status::NoTag),
            Err(e) => {
                debug!("poll cycle failed: {}", e);
                Ok(e.status())
            }
        };

        if self.dedup.tick() {
            trace!("dedup window elapsed, last UID forgotten");
        }
        status
    }

    /// Poll until `token` is canceled or a fatal error occurs.
    pub fn run(&mut self, token: &CancellationToken) -> Result<()> {
        while !token.is_canceled() {
            self.paced_cycle()?;
        }
        Ok(())
    }

    /// Poll exactly `cycles` times.
    pub fn run_for(&mut self, cycles: usize) -> Result<()> {
        for _ in 0..cycles {
            self.paced_cycle()?;
        }
        Ok(())
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// UID most recently announced and not yet forgotten.
    pub fn last_announced(&self) -> Option<&Uid> {
        self.dedup.last()
    }

    pub fn reader_mut(&mut self) -> &mut Mfrc522<Initialized> {
        &mut self.reader
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_parts(self) -> (Mfrc522<Initialized>, S) {
        (self.reader, self.sink)
    }

    fn read_card(&mut self) -> Result<Uid> {
        if self.config.reinit_every_cycle {
            self.reader.reinitialize()?;
        }
        self.reader.read_uid(self.config.request_mode)
    }

    // Cadence is measured on the monotonic clock; a slow cycle eats into
    // its own delay
    fn paced_cycle(&mut self) -> Result<Status> {
        let started = Instant::now();
        let status = self.poll_once()?;
        let wait = remaining(self.config.poll_interval, started);
        if !wait.is_zero() {
            self.reader.delay(wait);
        }
        Ok(status)
    }
}
