//! HTTP transport capability.
//!
//! A `Transport` performs exactly one request and reports either a response
//! or a structured `TransportError`. Retrying is the caller's job.

mod curl_transport;
mod error;
mod options;
mod response;

pub use curl_transport::CurlTransport;
pub use error::{TransportError, BODY_SNIPPET_LIMIT};
pub use options::{split_header_line, Method, RequestOptions};
pub use response::Response;

/// Executes a single HTTP request.
pub trait Transport {
    /// Performs one request against `url`. Implementations must not retry.
    fn execute(&mut self, url: &str, options: &RequestOptions) -> Result<Response, TransportError>;
}

impl<T: Transport + ?Sized> Transport for &mut T {
    fn execute(&mut self, url: &str, options: &RequestOptions) -> Result<Response, TransportError> {
        (**self).execute(url, options)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn execute(&mut self, url: &str, options: &RequestOptions) -> Result<Response, TransportError> {
        (**self).execute(url, options)
    }
}
