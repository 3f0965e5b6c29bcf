//! Retry and backoff.
//!
//! Error classification, the exponential backoff policy and the attempt
//! loop live here, together with `RetryingFetcher`, which runs an HTTP
//! request through a `Transport` under that policy.

mod classify;
mod error;
mod fetcher;
mod log;
mod policy;
mod run;

pub use classify::{classification_text, classify, matches_transient_message};
pub use error::{FetchError, EXHAUSTED_PREFIX};
pub use fetcher::{fetch_with_retry, RetryingFetcher};
pub use log::{RetryLog, TracingRetryLog};
pub use policy::{
    ErrorKind, RetryDecision, RetryPolicy, DEFAULT_MESSAGE_PATTERNS, DEFAULT_RETRY_STATUSES,
};
pub use run::run_with_retry;
