// rc522/src/session/sink.rs

use std::io::Write;

use log::info;

use crate::types::Uid;

/// Receives every UID the session decides to announce.
pub trait CardSink {
    fn announce(&mut self, uid: &Uid);
}

impl<F: FnMut(&Uid)> CardSink for F {
    fn announce(&mut self, uid: &Uid) {
        self(uid)
    }
}

/// Prints one line per announcement: the UID as a little-endian integer.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl CardSink for StdoutSink {
    fn announce(&mut self, uid: &Uid) {
        let mut out = std::io::stdout().lock();
        // A closed stdout only loses the line
        let _ = writeln!(out, "{}", uid);
        let _ = out.flush();
    }
}

/// Announces through the `log` facade at info level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl CardSink for LogSink {
    fn announce(&mut self, uid: &Uid) {
        info!("card {} ({} bytes, hex {})", uid, uid.len(), uid.to_hex());
    }
}
