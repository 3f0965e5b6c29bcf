use std::time::Duration;

use super::classify::{classification_text, classify, matches_transient_message};
use crate::config::RetryConfig;
use crate::transport::TransportError;

/// Statuses retried by default: bad gateway, service unavailable, gateway timeout.
pub const DEFAULT_RETRY_STATUSES: [u16; 3] = [502, 503, 504];

/// Message fragments that mark an otherwise unclassified error as transient.
pub const DEFAULT_MESSAGE_PATTERNS: [&str; 5] = ["502", "503", "504", "Timeout", "server error"];

/// High-level classification of an error for retry purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Operation timed out (connect/transfer).
    Timeout,
    /// Network-level failure (connection refused, DNS, reset).
    Connection,
    /// Server answered with this status.
    Http(u16),
    /// Not retryable by kind, but its message matched a transient pattern.
    TransientMessage,
    /// Any other error (not retried).
    Other,
}

/// Decision returned by the retry policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryDecision {
    /// Do not retry this error.
    NoRetry,
    /// Retry after the given delay.
    RetryAfter(Duration),
    /// The error is retryable but no attempts are left.
    Exhausted,
}

/// Exponential backoff policy: `base_delay * 2^(attempt - 1)`, capped at `max_delay`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Maximum number of attempts (including the first). 0 behaves like 1.
    pub max_attempts: u32,
    /// Delay before the second attempt; doubles for each later one.
    pub base_delay: Duration,
    /// Upper bound on a single backoff delay.
    pub max_delay: Duration,
    /// HTTP statuses worth retrying.
    pub retry_statuses: Vec<u16>,
    /// Whether connection-level failures are retried.
    pub retry_connection_errors: bool,
    /// Fragments checked against the message of unclassified errors.
    pub message_patterns: Vec<String>,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::from_config(&RetryConfig::default())
    }
}

impl RetryPolicy {
    pub fn from_config(cfg: &RetryConfig) -> Self {
        Self {
            max_attempts: cfg.max_attempts,
            base_delay: Duration::from_millis(cfg.base_delay_ms),
            max_delay: Duration::from_millis(cfg.max_delay_ms),
            retry_statuses: cfg.retry_statuses.clone(),
            retry_connection_errors: cfg.retry_connection_errors,
            message_patterns: cfg.message_patterns.clone(),
        }
    }

    /// Effective attempt budget.
    pub fn attempts(&self) -> u32 {
        self.max_attempts.max(1)
    }

    pub fn is_retryable(&self, kind: ErrorKind) -> bool {
        match kind {
            ErrorKind::Timeout | ErrorKind::TransientMessage => true,
            ErrorKind::Connection => self.retry_connection_errors,
            ErrorKind::Http(code) => self.retry_statuses.contains(&code),
            ErrorKind::Other => false,
        }
    }

    /// Classify `e`: the structural kind wins when it already allows a
    /// retry, otherwise the message patterns get a say.
    ///
    /// Depends only on `e` and this policy, never on attempt history.
    pub fn classify(&self, e: &TransportError) -> ErrorKind {
        let kind = classify(e);
        if self.is_retryable(kind) {
            return kind;
        }
        if matches_transient_message(&classification_text(e), &self.message_patterns) {
            return ErrorKind::TransientMessage;
        }
        kind
    }

    /// Delay to wait after failed attempt `attempt` (1-based).
    pub fn backoff(&self, attempt: u32) -> Duration {
        let shift = attempt.saturating_sub(1).min(31);
        let raw = self.base_delay.saturating_mul(1u32 << shift);
        raw.min(self.max_delay)
    }

    /// Decide what to do after attempt `attempt` (1-based) failed with `kind`.
    pub fn decide(&self, attempt: u32, kind: ErrorKind) -> RetryDecision {
        if !self.is_retryable(kind) {
            return RetryDecision::NoRetry;
        }
        if attempt >= self.attempts() {
            return RetryDecision::Exhausted;
        }
        RetryDecision::RetryAfter(self.backoff(attempt))
    }
}
