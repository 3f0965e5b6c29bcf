//! HTTP fetch with bounded exponential-backoff retry.

use super::error::FetchError;
use super::log::{RetryLog, TracingRetryLog};
use super::policy::RetryPolicy;
use super::run::run_with_retry;
use crate::sleep::{Sleeper, ThreadSleeper};
use crate::transport::{CurlTransport, RequestOptions, Response, Transport, TransportError};

/// Performs a request through `T`, retrying transient failures under a
/// `RetryPolicy`. Sleeping and retry logging are injected so the loop can be
/// driven without real time passing.
#[derive(Debug)]
pub struct RetryingFetcher<T, S = ThreadSleeper, L = TracingRetryLog> {
    transport: T,
    sleeper: S,
    log: L,
    policy: RetryPolicy,
}

impl<T: Transport> RetryingFetcher<T> {
    /// Fetcher with the default policy, thread sleeping and tracing logs.
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            sleeper: ThreadSleeper,
            log: TracingRetryLog,
            policy: RetryPolicy::default(),
        }
    }
}

impl<T, S, L> RetryingFetcher<T, S, L>
where
    T: Transport,
    S: Sleeper,
    L: RetryLog,
{
    pub fn with_policy(mut self, policy: RetryPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_sleeper<S2: Sleeper>(self, sleeper: S2) -> RetryingFetcher<T, S2, L> {
        RetryingFetcher {
            transport: self.transport,
            sleeper,
            log: self.log,
            policy: self.policy,
        }
    }

    pub fn with_log<L2: RetryLog>(self, log: L2) -> RetryingFetcher<T, S, L2> {
        RetryingFetcher {
            transport: self.transport,
            sleeper: self.sleeper,
            log,
            policy: self.policy,
        }
    }

    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn sleeper(&self) -> &S {
        &self.sleeper
    }

    pub fn log(&self) -> &L {
        &self.log
    }

    /// Fetch `url`, returning the first 2xx response.
    ///
    /// A non-2xx response that comes back without a transport error (muted
    /// HTTP exceptions) is handled exactly like the matching HTTP error:
    /// retried if its status is retryable, fatal otherwise.
    pub fn fetch(&mut self, url: &str, options: &RequestOptions) -> Result<Response, FetchError> {
        validate_url(url)?;

        let Self {
            transport,
            sleeper,
            log,
            policy,
        } = self;

        run_with_retry(&*policy, sleeper, &*log, |attempt| {
            tracing::trace!(attempt, method = %options.method, url, "sending request");
            let response = transport.execute(url, options)?;
            if response.is_success() {
                Ok(response)
            } else {
                Err(TransportError::from_response(url, &response))
            }
        })
    }
}

/// Fetch with the curl transport and default policy.
pub fn fetch_with_retry(url: &str, options: &RequestOptions) -> Result<Response, FetchError> {
    RetryingFetcher::new(CurlTransport::new()).fetch(url, options)
}

fn validate_url(url: &str) -> Result<(), FetchError> {
    let invalid = |reason: String| FetchError::InvalidUrl {
        url: url.to_string(),
        reason,
    };
    if url.trim().is_empty() {
        return Err(invalid("URL is empty".to_string()));
    }
    let parsed = url::Url::parse(url).map_err(|e| invalid(e.to_string()))?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(invalid(format!("unsupported scheme {}", other))),
    }
}
