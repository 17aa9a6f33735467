use serde::{Deserialize, Serialize};

use crate::constants;
use crate::errors::{ConfigError, MixGraphResult};
use crate::models::EdgeRole;

/// Edge-type names bound to each causal role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeRoleNames {
    pub directed: String,
    pub bidirected: String,
    pub undirected: String,
}

impl Default for EdgeRoleNames {
    fn default() -> Self {
        Self {
            directed: constants::DEFAULT_DIRECTED_NAME.to_string(),
            bidirected: constants::DEFAULT_BIDIRECTED_NAME.to_string(),
            undirected: constants::DEFAULT_UNDIRECTED_NAME.to_string(),
        }
    }
}

impl EdgeRoleNames {
    pub fn new(
        directed: impl Into<String>,
        bidirected: impl Into<String>,
        undirected: impl Into<String>,
    ) -> Self {
        Self {
            directed: directed.into(),
            bidirected: bidirected.into(),
            undirected: undirected.into(),
        }
    }

    /// Name registered for `role`.
    pub fn name_of(&self, role: EdgeRole) -> &str {
        match role {
            EdgeRole::Directed => &self.directed,
            EdgeRole::Bidirected => &self.bidirected,
            EdgeRole::Undirected => &self.undirected,
        }
    }

    /// Role bound to `name`, if any.
    pub fn role_of(&self, name: &str) -> Option<EdgeRole> {
        EdgeRole::ALL
            .into_iter()
            .find(|&role| self.name_of(role) == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.role_of(name).is_some()
    }

    /// Names must be non-empty and pairwise distinct.
    pub fn validate(&self) -> MixGraphResult<()> {
        for role in EdgeRole::ALL {
            if self.name_of(role).is_empty() {
                return Err(ConfigError::InvalidEdgeNames {
                    reason: format!("{role} edge name is empty"),
                }
                .into());
            }
        }
        if self.directed == self.bidirected
            || self.directed == self.undirected
            || self.bidirected == self.undirected
        {
            return Err(ConfigError::InvalidEdgeNames {
                reason: format!(
                    "names must be distinct, got '{}', '{}', '{}'",
                    self.directed, self.bidirected, self.undirected
                ),
            }
            .into());
        }
        Ok(())
    }
}
