//! CLI for refetch.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use refetch_core::config;
use refetch_core::transport::Method;
use std::path::PathBuf;

use commands::{run_fetch, run_show_config};

/// Top-level CLI for refetch.
#[derive(Debug, Parser)]
#[command(name = "refetch")]
#[command(about = "refetch: HTTP requests with exponential-backoff retry", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Perform a request, retrying transient failures.
    Fetch(FetchArgs),

    /// Show the config file path and the effective configuration.
    Config,
}

#[derive(Debug, Args)]
pub struct FetchArgs {
    /// HTTP/HTTPS URL to request.
    pub url: String,

    /// Request method (GET unless --data is given, then POST).
    #[arg(short = 'X', long = "request", value_name = "METHOD")]
    pub method: Option<Method>,

    /// Extra request header as 'Name: value'. Repeatable.
    #[arg(short = 'H', long = "header", value_name = "HEADER")]
    pub headers: Vec<String>,

    /// Request body.
    #[arg(short = 'd', long = "data", value_name = "DATA")]
    pub data: Option<String>,

    /// Content-Type of the request body.
    #[arg(long, value_name = "TYPE")]
    pub content_type: Option<String>,

    /// Hand 4xx/5xx responses back instead of treating them as transport errors.
    #[arg(long)]
    pub mute_http_exceptions: bool,

    /// Do not follow redirects.
    #[arg(long)]
    pub no_follow: bool,

    /// Skip TLS certificate verification.
    #[arg(short = 'k', long)]
    pub insecure: bool,

    /// Override the maximum number of attempts.
    #[arg(long, value_name = "N")]
    pub max_attempts: Option<u32>,

    /// Override the base backoff delay in milliseconds.
    #[arg(long, value_name = "MS")]
    pub base_delay_ms: Option<u64>,

    /// Write the body to FILE instead of stdout.
    #[arg(short = 'o', long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Print status line and response headers before the body.
    #[arg(short = 'i', long)]
    pub include: bool,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Fetch(args) => run_fetch(&cfg, &args)?,
            CliCommand::Config => run_show_config(&cfg)?,
        }

        Ok(())
    }
}
