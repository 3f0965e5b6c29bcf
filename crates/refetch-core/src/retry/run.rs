//! Retry loop: run a closure until success or policy says stop.

use super::error::FetchError;
use super::log::RetryLog;
use super::policy::{RetryDecision, RetryPolicy};
use crate::sleep::Sleeper;
use crate::transport::TransportError;

/// Runs `f` until it succeeds or the retry policy says to stop.
///
/// `f` receives the 1-based attempt number. On a retryable failure with
/// attempts left, `log` gets one record and `sleeper` blocks for the backoff
/// delay. No sleep happens after the last attempt.
pub fn run_with_retry<T, F, S, L>(
    policy: &RetryPolicy,
    sleeper: &mut S,
    log: &L,
    mut f: F,
) -> Result<T, FetchError>
where
    F: FnMut(u32) -> Result<T, TransportError>,
    S: Sleeper + ?Sized,
    L: RetryLog + ?Sized,
{
    let mut attempt = 1u32;
    loop {
        match f(attempt) {
            Ok(v) => return Ok(v),
            Err(e) => {
                let kind = policy.classify(&e);
                match policy.decide(attempt, kind) {
                    RetryDecision::NoRetry => {
                        tracing::debug!(attempt, ?kind, "non-retryable failure: {}", e);
                        return Err(FetchError::Fatal(e));
                    }
                    RetryDecision::Exhausted => {
                        tracing::debug!(attempt, ?kind, "retries exhausted: {}", e);
                        return Err(FetchError::Exhausted {
                            attempts: attempt,
                            last: e,
                        });
                    }
                    RetryDecision::RetryAfter(d) => {
                        log.retrying(attempt, &e, d);
                        sleeper.sleep(d);
                        attempt += 1;
                    }
                }
            }
        }
    }
}
