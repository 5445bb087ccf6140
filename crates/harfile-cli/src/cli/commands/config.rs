//! `harfile config` – show where the config lives and what it holds.

use anyhow::{Context, Result};
use harfile_core::config::{self, HarfileConfig};

pub fn run_config(cfg: &HarfileConfig) -> Result<()> {
    let path = config::config_path()?;
    let rendered = toml::to_string_pretty(cfg).context("render config")?;
    println!("# {}", path.display());
    print!("{rendered}");
    Ok(())
}
