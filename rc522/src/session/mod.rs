// rc522/src/session/mod.rs
//! Continuous polling: re-initialize, request, run the cascade, announce
//! UIDs not seen recently, wait, repeat.

pub mod cancellation_token;
pub mod config;
pub mod dedup;
pub mod poller;
pub mod sink;

pub use cancellation_token::CancellationToken;
pub use config::SessionConfig;
pub use dedup::Deduplicator;
pub use poller::Session;
pub use sink::{CardSink, LogSink, StdoutSink};
