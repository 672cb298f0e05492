use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use verona_core::Dialect;

/// Name of the configuration file searched for by the CLI
pub const CONFIG_FILE: &str = "verona.toml";

/// The verona configuration file structure (verona.toml)
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct VeronaConfig {
    /// Parsing configuration
    pub parse: ParseConfig,
}

/// Version parsing configuration
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ParseConfig {
    /// Dialect used when none is given on the command line (strict, osgi, lax)
    pub dialect: Option<String>,
}

impl VeronaConfig {
    /// Load configuration from verona.toml, searching upward from the given directory
    pub fn load(start_dir: &Path) -> Result<Option<Self>> {
        let mut current = start_dir.to_path_buf();

        loop {
            let config_path = current.join(CONFIG_FILE);

            if config_path.exists() {
                log::debug!("Reading {}", config_path.display());
                let content = std::fs::read_to_string(&config_path)
                    .with_context(|| format!("Failed to read {}", config_path.display()))?;
                let config: VeronaConfig = toml::from_str(&content)
                    .with_context(|| format!("Failed to parse {}", config_path.display()))?;
                return Ok(Some(config));
            }

            if !current.pop() {
                return Ok(None);
            }
        }
    }

    /// Load configuration by searching upward from the current working directory
    pub fn load_from_cwd() -> Result<Option<Self>> {
        let cwd = std::env::current_dir()?;
        Self::load(&cwd)
    }

    /// The configured default dialect, if any
    pub fn dialect(&self) -> Result<Option<Dialect>> {
        match &self.parse.dialect {
            Some(name) => name
                .parse::<Dialect>()
                .map(Some)
                .map_err(|e| anyhow::anyhow!("{} in {}", e, CONFIG_FILE)),
            None => Ok(None),
        }
    }
}

/// Pick the dialect: command line first, then config file, then strict
pub fn resolve_dialect(cli: Option<Dialect>, config: Option<&VeronaConfig>) -> Result<Dialect> {
    if let Some(dialect) = cli {
        return Ok(dialect);
    }
    match config {
        Some(cfg) => Ok(cfg.dialect()?.unwrap_or_default()),
        None => Ok(Dialect::default()),
    }
}
