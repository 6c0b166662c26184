//! Election configuration with TOML file support.

use ballot_types::AccountId;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::ConfigError;

/// How an election is set up at construction.
///
/// Can be loaded from TOML via [`ElectionConfig::from_toml_file`] or
/// built programmatically with [`ElectionConfig::new`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElectionConfig {
    /// The identity allowed to register voters and drive the phases.
    pub administrator: AccountId,

    /// Voters registered when the election is created.
    #[serde(default)]
    pub voters: Vec<AccountId>,

    /// Description of the reserved proposal at index 0.
    #[serde(default = "default_sentinel_description")]
    pub sentinel_description: String,

    /// Reject `add_voter` once the election has left `RegisteringVoters`.
    #[serde(default)]
    pub restrict_voter_registration: bool,
}

fn default_sentinel_description() -> String {
    "GENESIS".to_string()
}

impl ElectionConfig {
    pub fn new(administrator: AccountId) -> Self {
        Self {
            administrator,
            voters: Vec::new(),
            sentinel_description: default_sentinel_description(),
            restrict_voter_registration: false,
        }
    }

    pub fn with_voters(mut self, voters: impl IntoIterator<Item = AccountId>) -> Self {
        self.voters.extend(voters);
        self
    }

    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Serialize the configuration to a TOML string.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}
