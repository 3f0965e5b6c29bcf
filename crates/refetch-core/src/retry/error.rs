//! Errors surfaced to callers of the retrying fetcher.

use crate::transport::TransportError;

/// Prefix of the message reported when every attempt failed.
pub const EXHAUSTED_PREFIX: &str = "最大リトライ回数を超過しました: ";

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// URL was empty or not an http(s) URL. No request was made.
    #[error("invalid URL {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },
    /// Non-retryable failure, passed through unchanged.
    #[error(transparent)]
    Fatal(TransportError),
    /// Every attempt failed with a retryable error; `last` is the final one.
    #[error("{}{last}", EXHAUSTED_PREFIX)]
    Exhausted { attempts: u32, last: TransportError },
}

impl FetchError {
    /// The transport error behind this failure, if a request was made.
    pub fn transport_error(&self) -> Option<&TransportError> {
        match self {
            FetchError::InvalidUrl { .. } => None,
            FetchError::Fatal(e) => Some(e),
            FetchError::Exhausted { last, .. } => Some(last),
        }
    }
}
