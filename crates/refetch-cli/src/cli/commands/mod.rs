//! CLI command handlers.

mod fetch;
mod show_config;

pub use fetch::run_fetch;
#[cfg(test)]
pub(crate) use fetch::build_request;
pub use show_config::run_show_config;
