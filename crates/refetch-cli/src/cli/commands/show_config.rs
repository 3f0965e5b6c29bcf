//! `refetch config` – print config path and effective settings.

use anyhow::Result;
use refetch_core::config::{self, RefetchConfig};

pub fn run_show_config(cfg: &RefetchConfig) -> Result<()> {
    let effective = RefetchConfig {
        retry: Some(cfg.retry.clone().unwrap_or_default()),
        transport: Some(cfg.transport.clone().unwrap_or_default()),
    };
    println!("# {}", config::config_path()?.display());
    print!("{}", toml::to_string_pretty(&effective)?);
    Ok(())
}
