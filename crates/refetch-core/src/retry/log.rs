//! Diagnostic sink for retries.

use std::time::Duration;

use crate::transport::TransportError;

/// Receives one record per retry (not for the final failed attempt).
pub trait RetryLog {
    /// `attempt` is the 1-based attempt that just failed.
    fn retrying(&self, attempt: u32, error: &TransportError, delay: Duration);
}

/// Emits a `tracing` warning per retry.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingRetryLog;

impl RetryLog for TracingRetryLog {
    fn retrying(&self, attempt: u32, error: &TransportError, delay: Duration) {
        tracing::warn!(
            attempt,
            delay_ms = delay.as_millis() as u64,
            "attempt {} failed, retrying: {}",
            attempt,
            error
        );
    }
}

impl<L: RetryLog + ?Sized> RetryLog for &L {
    fn retrying(&self, attempt: u32, error: &TransportError, delay: Duration) {
        (**self).retrying(attempt, error, delay);
    }
}
