//! Error type for a single transport attempt.

use std::fmt;

use super::Response;

/// Longest prefix of a response body carried in an HTTP error message.
pub const BODY_SNIPPET_LIMIT: usize = 200;

/// Failure of one request, classified at the point where it happened so the
/// retry policy can decide on the kind instead of parsing text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// The server answered with a failure status.
    Http {
        url: String,
        status: u32,
        /// Leading part of the response body, if it was non-empty.
        body_snippet: Option<String>,
    },
    /// Connect or transfer timed out.
    Timeout(String),
    /// Network-level failure (DNS, refused connection, reset, empty reply).
    Connection(String),
    /// The request could not be built (malformed URL, bad header, ...).
    InvalidRequest(String),
    /// Anything else. Classified by its message.
    Other(String),
}

impl TransportError {
    /// Builds an `Http` error from a response whose status is not 2xx.
    pub fn from_response(url: &str, response: &Response) -> Self {
        let text = response.content_text();
        let text = text.trim();
        let body_snippet = if text.is_empty() {
            None
        } else {
            Some(text.chars().take(BODY_SNIPPET_LIMIT).collect())
        };
        TransportError::Http {
            url: url.to_string(),
            status: response.response_code(),
            body_snippet,
        }
    }

    /// HTTP status for `Http` errors.
    pub fn status(&self) -> Option<u32> {
        match self {
            TransportError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportError::Http {
                url,
                status,
                body_snippet,
            } => {
                write!(f, "Request failed for {} returned code {}", url, status)?;
                if let Some(snippet) = body_snippet {
                    write!(f, ". Truncated server response: {}", snippet)?;
                }
                Ok(())
            }
            TransportError::Timeout(msg)
            | TransportError::Connection(msg)
            | TransportError::InvalidRequest(msg)
            | TransportError::Other(msg) => f.write_str(msg),
        }
    }
}

impl std::error::Error for TransportError {}
