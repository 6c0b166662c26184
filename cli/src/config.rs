//! The `ballot` configuration file.

use anyhow::Context;
use ballot_election::ElectionConfig;
use ballot_types::AccountId;
use ballot_utils::LogFormat;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level config file: logging settings plus an `[election]` table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub log_format: LogFormat,

    #[serde(default = "default_log_level")]
    pub log_level: String,

    pub election: ElectionConfig,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl FileConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }

    /// A starting point printed by `ballot config`.
    pub fn sample() -> Self {
        Self {
            log_format: LogFormat::default(),
            log_level: default_log_level(),
            election: ElectionConfig::new(AccountId::new("admin"))
                .with_voters(["voter1", "voter2", "voter3"].map(AccountId::new)),
        }
    }
}
