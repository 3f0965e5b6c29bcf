//! Per-request options passed through to the transport.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::config::TransportConfig;

/// HTTP request method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    #[default]
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Head,
    Options,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
            Method::Head => "HEAD",
            Method::Options => "OPTIONS",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "GET" => Ok(Method::Get),
            "POST" => Ok(Method::Post),
            "PUT" => Ok(Method::Put),
            "PATCH" => Ok(Method::Patch),
            "DELETE" => Ok(Method::Delete),
            "HEAD" => Ok(Method::Head),
            "OPTIONS" => Ok(Method::Options),
            other => Err(format!("unsupported HTTP method: {}", other)),
        }
    }
}

/// Request configuration. Absent values fall back to transport defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestOptions {
    pub method: Method,
    /// Extra request headers, sent in order.
    pub headers: Vec<(String, String)>,
    /// Request body. Ignored for GET and HEAD.
    pub payload: Option<Vec<u8>>,
    /// `Content-Type` for the payload, unless `headers` already sets one.
    pub content_type: Option<String>,
    /// When false, a 4xx/5xx response is reported as `TransportError::Http`.
    /// When true, the response is handed back and the caller inspects the status.
    pub mute_http_exceptions: bool,
    pub follow_redirects: bool,
    pub validate_https_certificates: bool,
    pub connect_timeout: Duration,
    pub timeout: Duration,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self::from_config(&TransportConfig::default())
    }
}

impl RequestOptions {
    /// Options carrying the transport defaults from config.
    pub fn from_config(cfg: &TransportConfig) -> Self {
        Self {
            method: Method::Get,
            headers: Vec::new(),
            payload: None,
            content_type: None,
            mute_http_exceptions: false,
            follow_redirects: cfg.follow_redirects,
            validate_https_certificates: cfg.validate_https_certificates,
            connect_timeout: Duration::from_secs(cfg.connect_timeout_secs),
            timeout: Duration::from_secs(cfg.timeout_secs),
        }
    }

    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn payload(mut self, payload: impl Into<Vec<u8>>) -> Self {
        self.payload = Some(payload.into());
        self
    }

    pub fn content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    pub fn mute_http_exceptions(mut self, mute: bool) -> Self {
        self.mute_http_exceptions = mute;
        self
    }

    /// True if `name` is already present in `headers` (case-insensitive).
    pub fn has_header(&self, name: &str) -> bool {
        self.headers
            .iter()
            .any(|(k, _)| k.trim().eq_ignore_ascii_case(name))
    }
}

/// Splits a raw `Name: value` header line. Returns None for lines without a
/// colon or with an empty name (status lines, blank separators).
pub fn split_header_line(line: &str) -> Option<(String, String)> {
    let (name, value) = line.split_once(':')?;
    let name = name.trim();
    if name.is_empty() || name.contains(' ') {
        return None;
    }
    Some((name.to_string(), value.trim().to_string()))
}
