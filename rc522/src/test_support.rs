//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize simulated-chip setup so tests across the crate
//! and the tests/ directory script cards the same way.
#![allow(dead_code)]

use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;
use std::time::Duration;

use crate::constants::CASCADE_TAG;
use crate::device::{Initialized, Mfrc522};
use crate::protocol::checksum::{bcc, crc_a};
use crate::transport::mock::{CardReply, MockTransport};
use crate::transport::Transport;
use crate::Result;

/// SAK with the cascade bit set (UID not complete).
pub const SAK_CASCADE: u8 = 0x04;

/// SAK of a MIFARE Classic 1K.
pub const SAK_COMPLETE: u8 = 0x08;

/// Transport handle that can be inspected after a reader owns a clone.
#[doc(hidden)]
pub struct SharedTransport<T> {
    inner: Rc<RefCell<T>>,
}

impl<T> Clone for SharedTransport<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T> SharedTransport<T> {
    pub fn new(inner: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(inner)),
        }
    }

    pub fn borrow(&self) -> Ref<'_, T> {
        self.inner.borrow()
    }

    pub fn borrow_mut(&self) -> RefMut<'_, T> {
        self.inner.borrow_mut()
    }
}

impl<T: Transport> Transport for SharedTransport<T> {
    fn transfer(&mut self, byte: u8) -> Result<u8> {
        self.inner.borrow_mut().transfer(byte)
    }

    fn select(&mut self) -> Result<()> {
        self.inner.borrow_mut().select()
    }

    fn release(&mut self) -> Result<()> {
        self.inner.borrow_mut().release()
    }

    fn reset_low(&mut self) -> Result<()> {
        self.inner.borrow_mut().reset_low()
    }

    fn reset_high(&mut self) -> Result<()> {
        self.inner.borrow_mut().reset_high()
    }

    fn sleep(&mut self, duration: Duration) {
        self.inner.borrow_mut().sleep(duration)
    }
}

/// SAK byte followed by its CRC_A, as a card sends it.
#[doc(hidden)]
pub fn sak_reply(sak: u8) -> CardReply {
    let crc = crc_a(&[sak]);
    CardReply::bytes(&[sak, crc[0], crc[1]])
}

/// Anti-collision reply carrying `serial` and its BCC.
#[doc(hidden)]
pub fn fragment_reply(serial: [u8; 4]) -> CardReply {
    CardReply::bytes(&[serial[0], serial[1], serial[2], serial[3], bcc(&serial)])
}

/// ATQA a card of this UID size would send.
#[doc(hidden)]
pub fn atqa_reply(uid_len: usize) -> CardReply {
    let size_bits = match uid_len {
        4 => 0x00,
        7 => 0x40,
        _ => 0x80,
    };
    CardReply::bytes(&[size_bits | 0x04, 0x00])
}

/// Every reply a well-behaved card sends for one complete read of `uid`:
/// ATQA, then anti-collision and SAK per cascade level.
#[doc(hidden)]
pub fn card_replies(uid: &[u8]) -> Vec<CardReply> {
    let mut replies = vec![atqa_reply(uid.len())];
    let mut rest = uid;
    loop {
        if rest.len() > 4 {
            replies.push(fragment_reply([CASCADE_TAG, rest[0], rest[1], rest[2]]));
            replies.push(sak_reply(SAK_CASCADE));
            rest = &rest[3..];
        } else {
            let mut serial = [0u8; 4];
            serial[..rest.len()].copy_from_slice(rest);
            replies.push(fragment_reply(serial));
            replies.push(sak_reply(SAK_COMPLETE));
            return replies;
        }
    }
}

/// Build a MockTransport pre-seeded with the given replies and return it
/// boxed as a Transport trait object.
#[doc(hidden)]
pub fn boxed_mock_with_replies(replies: Vec<CardReply>) -> Box<dyn Transport> {
    Box::new(MockTransport::with_replies(replies))
}

/// Convenience: create and initialize a reader backed by a MockTransport
/// pre-seeded with the provided replies.
#[doc(hidden)]
pub fn initialized_mock_reader(replies: Vec<CardReply>) -> Result<Mfrc522<Initialized>> {
    Mfrc522::new_with_transport(boxed_mock_with_replies(replies)).initialize()
}

/// Like [`initialized_mock_reader`] but keeps a handle on the simulated
/// chip for assertions. The reset settle delay is skipped.
#[doc(hidden)]
pub fn shared_mock_reader(
    replies: Vec<CardReply>,
) -> Result<(SharedTransport<MockTransport>, Mfrc522<Initialized>)> {
    let shared = SharedTransport::new(MockTransport::with_replies(replies));
    let config = crate::device::ReaderConfig {
        reset_settle: Duration::ZERO,
        ..Default::default()
    };
    let reader = Mfrc522::with_config(Box::new(shared.clone()), config).initialize()?;
    Ok((shared, reader))
}
