// rc522/src/prelude.rs

pub use crate::device::{Initialized, Mfrc522, ReaderBuilder, ReaderConfig, Uninitialized};
pub use crate::session::{CancellationToken, CardSink, LogSink, Session, SessionConfig, StdoutSink};
pub use crate::transport::Transport;
pub use crate::{Atqa, CascadeLevel, Error, RequestMode, Result, Sak, Status, Uid, UidFragment};

pub use crate::utils::{bytes_to_hex, bytes_to_hex_spaced, ms, parse_hex};
