//! Classify transport errors into retry policy error kinds.

use crate::retry::policy::ErrorKind;
use crate::transport::TransportError;

/// Structural classification: what the transport reported, before any
/// message matching. `RetryPolicy::classify` adds the message fallback.
pub fn classify(e: &TransportError) -> ErrorKind {
    match e {
        TransportError::Http { status, .. } => {
            ErrorKind::Http(u16::try_from(*status).unwrap_or(u16::MAX))
        }
        TransportError::Timeout(_) => ErrorKind::Timeout,
        TransportError::Connection(_) => ErrorKind::Connection,
        TransportError::InvalidRequest(_) | TransportError::Other(_) => ErrorKind::Other,
    }
}

/// Text checked against the transient message patterns.
///
/// For HTTP errors this is the server's response text only; the status is
/// already covered structurally and the URL must not influence the outcome.
pub fn classification_text(e: &TransportError) -> String {
    match e {
        TransportError::Http { body_snippet, .. } => body_snippet.clone().unwrap_or_default(),
        other => other.to_string(),
    }
}

/// True if `message` contains any of `patterns` (case-sensitive).
pub fn matches_transient_message(message: &str, patterns: &[String]) -> bool {
    patterns
        .iter()
        .any(|p| !p.is_empty() && message.contains(p.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::retry::policy::DEFAULT_MESSAGE_PATTERNS;

    fn patterns() -> Vec<String> {
        DEFAULT_MESSAGE_PATTERNS.iter().map(|s| s.to_string()).collect()
    }

    fn http(status: u32, body: Option<&str>) -> TransportError {
        TransportError::Http {
            url: "https://example.com/503/Timeout".to_string(),
            status,
            body_snippet: body.map(str::to_string),
        }
    }

    #[test]
    fn http_errors_keep_status() {
        assert_eq!(classify(&http(503, None)), ErrorKind::Http(503));
        assert_eq!(classify(&http(404, None)), ErrorKind::Http(404));
    }

    #[test]
    fn structural_kinds() {
        assert_eq!(
            classify(&TransportError::Timeout("took too long".into())),
            ErrorKind::Timeout
        );
        assert_eq!(
            classify(&TransportError::Connection("refused".into())),
            ErrorKind::Connection
        );
        assert_eq!(
            classify(&TransportError::InvalidRequest("bad url".into())),
            ErrorKind::Other
        );
        assert_eq!(
            classify(&TransportError::Other("Service 503".into())),
            ErrorKind::Other
        );
    }

    #[test]
    fn http_text_ignores_url() {
        assert_eq!(classification_text(&http(404, None)), "");
        assert_eq!(
            classification_text(&http(500, Some("a server error occurred"))),
            "a server error occurred"
        );
        assert_eq!(
            classification_text(&TransportError::Connection("Timeout in DNS".into())),
            "Timeout in DNS"
        );
    }

    #[test]
    fn pattern_matching() {
        let p = patterns();
        for msg in [
            "Request failed: returned code 502",
            "Service 503 unavailable",
            "gateway 504",
            "Timeout while reading",
            "We're sorry, a server error occurred. Please wait a bit and try again.",
        ] {
            assert!(matches_transient_message(msg, &p), "{msg}");
        }
        assert!(!matches_transient_message("returned code 404", &p));
        // Matching is case-sensitive.
        assert!(!matches_transient_message("timeout", &p));
    }

    #[test]
    fn empty_patterns_never_match() {
        assert!(!matches_transient_message("anything", &[String::new()]));
        assert!(!matches_transient_message("anything", &[]));
    }
}
