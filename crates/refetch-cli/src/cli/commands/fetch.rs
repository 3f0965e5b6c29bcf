//! `refetch fetch` – perform one request with retry and print the result.

use anyhow::{anyhow, Context, Result};
use refetch_core::config::RefetchConfig;
use refetch_core::retry::{RetryPolicy, RetryingFetcher};
use refetch_core::transport::{split_header_line, CurlTransport, Method, RequestOptions};
use std::fs;
use std::io::{self, Write};

use crate::cli::FetchArgs;

/// Merge config defaults with command-line overrides.
pub(crate) fn build_request(cfg: &RefetchConfig, args: &FetchArgs) -> Result<(RequestOptions, RetryPolicy)> {
    let mut options = cfg.request_options();
    for raw in &args.headers {
        let (name, value) = split_header_line(raw)
            .ok_or_else(|| anyhow!("invalid header {:?}, expected 'Name: value'", raw))?;
        options.headers.push((name, value));
    }
    if let Some(data) = &args.data {
        options.payload = Some(data.clone().into_bytes());
    }
    options.method = match args.method {
        Some(m) => m,
        None if args.data.is_some() => Method::Post,
        None => Method::Get,
    };
    options.content_type = args.content_type.clone();
    options.mute_http_exceptions = args.mute_http_exceptions;
    if args.no_follow {
        options.follow_redirects = false;
    }
    if args.insecure {
        options.validate_https_certificates = false;
    }

    let mut policy = cfg.retry_policy();
    if let Some(n) = args.max_attempts {
        policy.max_attempts = n;
    }
    if let Some(ms) = args.base_delay_ms {
        policy.base_delay = std::time::Duration::from_millis(ms);
    }
    Ok((options, policy))
}

pub fn run_fetch(cfg: &RefetchConfig, args: &FetchArgs) -> Result<()> {
    let (options, policy) = build_request(cfg, args)?;
    tracing::info!(
        url = %args.url,
        method = %options.method,
        max_attempts = policy.max_attempts,
        "fetch"
    );

    let mut fetcher = RetryingFetcher::new(CurlTransport::new()).with_policy(policy);
    let response = fetcher.fetch(&args.url, &options)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if args.include {
        writeln!(out, "HTTP {}", response.response_code())?;
        for (k, v) in response.headers() {
            writeln!(out, "{}: {}", k, v)?;
        }
        writeln!(out)?;
    }
    match &args.output {
        Some(path) => {
            fs::write(path, response.body())
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!("wrote {} bytes to {}", response.body().len(), path.display());
        }
        None => out.write_all(response.body())?,
    }
    out.flush()?;
    Ok(())
}
