// rc522/src/session/cancellation_token.rs

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Stop flag for [`Session::run`](crate::session::Session::run), shareable
/// with a signal handler or another thread.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    canceled: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn cancel(&self) {
        self.canceled.store(true, Ordering::Release);
    }

    #[inline]
    pub fn is_canceled(&self) -> bool {
        self.canceled.load(Ordering::Acquire)
    }
}
