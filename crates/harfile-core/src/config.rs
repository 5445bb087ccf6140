use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::model::{Browser, Creator};
use crate::writer::HarWriterBuilder;

/// Global configuration loaded from `~/.config/harfile/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HarfileConfig {
    /// Default top-level `log.comment`.
    #[serde(default)]
    pub comment: Option<String>,
    /// Written as `log.creator`; defaults to this program.
    #[serde(default = "default_creator")]
    pub creator: Creator,
    /// Written as `log.browser`; empty name and version when missing.
    #[serde(default)]
    pub browser: Option<Browser>,
}

fn default_creator() -> Creator {
    Creator::new("harfile", env!("CARGO_PKG_VERSION"))
}

impl Default for HarfileConfig {
    fn default() -> Self {
        Self {
            comment: None,
            creator: default_creator(),
            browser: None,
        }
    }
}

impl HarfileConfig {
    /// Writer builder pre-filled with the configured metadata.
    pub fn writer_builder(&self) -> HarWriterBuilder {
        let mut builder = HarWriterBuilder::default().creator(self.creator.clone());
        if let Some(browser) = &self.browser {
            builder = builder.browser(browser.clone());
        }
        if let Some(comment) = &self.comment {
            builder = builder.comment(comment.clone());
        }
        builder
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("harfile")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<HarfileConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = HarfileConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from(&path)
}

/// Load configuration from an explicit path.
pub fn load_from(path: &Path) -> Result<HarfileConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("read config: {}", path.display()))?;
    let cfg: HarfileConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    Ok(cfg)
}
