use std::fmt;

use serde::{Deserialize, Serialize};

use super::EdgeKind;

/// The causal meaning of an edge in an ADMG.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeRole {
    /// `x -> y`: direct causal effect.
    Directed,
    /// `x <-> y`: latent confounder.
    Bidirected,
    /// `x -- y`: selection bias.
    Undirected,
}

impl EdgeRole {
    pub const ALL: [EdgeRole; 3] = [Self::Directed, Self::Bidirected, Self::Undirected];

    /// Storage orientation for this role.
    pub fn kind(&self) -> EdgeKind {
        match self {
            Self::Directed => EdgeKind::Directed,
            Self::Bidirected | Self::Undirected => EdgeKind::Undirected,
        }
    }

    /// Symmetric roles forbid self-loops.
    pub fn is_symmetric(&self) -> bool {
        self.kind() == EdgeKind::Undirected
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Directed => "directed",
            Self::Bidirected => "bidirected",
            Self::Undirected => "undirected",
        }
    }
}

impl fmt::Display for EdgeRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
