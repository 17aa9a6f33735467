use serde::{Deserialize, Serialize};

use super::EdgeRoleNames;

/// When the directed role of a causal graph is checked for cycles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AcyclicityCheck {
    /// Check at construction and reject every directed insertion that closes a cycle.
    #[default]
    OnMutation,
    /// Check at construction only. Callers must not introduce cycles afterwards.
    ConstructionOnly,
}

/// ADMG construction settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdmgConfig {
    /// Names under which the three role sub-graphs are registered.
    pub edge_names: EdgeRoleNames,
    pub acyclicity: AcyclicityCheck,
}
