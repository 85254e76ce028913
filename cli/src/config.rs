//! CLI configuration file.

use std::path::Path;

use anyhow::Context;
use rbridge_ledger::LedgerConfig;
use rbridge_utils::LogFormat;
use serde::{Deserialize, Serialize};

/// Settings read from `--config <file>.toml`. Flags and env vars win.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Seed all deposit addresses derive from.
    #[serde(default)]
    pub master_seed: Option<String>,

    #[serde(default)]
    pub log_level: Option<String>,

    #[serde(default)]
    pub log_format: Option<LogFormat>,

    #[serde(default)]
    pub ledger: LedgerConfig,
}

impl CliConfig {
    pub fn from_toml_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("parsing config file {}", path.display()))
    }

    pub fn from_toml_str(s: &str) -> anyhow::Result<Self> {
        let config: Self = toml::from_str(s)?;
        config.ledger.validate()?;
        Ok(config)
    }
}
