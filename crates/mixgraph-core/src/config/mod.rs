mod admg_config;
mod edge_names;

pub use admg_config::{AcyclicityCheck, AdmgConfig};
pub use edge_names::EdgeRoleNames;

use serde::{Deserialize, Serialize};

use crate::errors::{ConfigError, MixGraphResult};

/// Workspace-wide configuration.
///
/// Every field has a default, so an empty TOML document is a valid config.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MixGraphConfig {
    pub admg: AdmgConfig,
}

impl MixGraphConfig {
    /// Parse a config from TOML and validate it.
    pub fn from_toml(input: &str) -> MixGraphResult<Self> {
        let config: Self = toml::from_str(input).map_err(|e| ConfigError::ParseFailed {
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> MixGraphResult<()> {
        self.admg.edge_names.validate()
    }
}
