//! Timing helpers for the poll loop.

use std::time::{Duration, Instant};

/// Convert milliseconds to Duration.
pub fn ms(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

/// Part of `interval` still left since `started`, zero once overrun.
pub fn remaining(interval: Duration, started: Instant) -> Duration {
    interval.saturating_sub(started.elapsed())
}

/// Durations as integer milliseconds for the `serde` feature.
#[cfg(feature = "serde")]
pub mod serde_millis {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        u64::deserialize(d).map(Duration::from_millis)
    }
}
