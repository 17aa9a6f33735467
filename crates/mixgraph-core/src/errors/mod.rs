mod causal_error;
mod config_error;
mod registry_error;

pub use causal_error::CausalError;
pub use config_error::ConfigError;
pub use registry_error::RegistryError;

/// Top-level error for every mixed-graph operation.
#[derive(Debug, thiserror::Error)]
pub enum MixGraphError {
    #[error("node not found: {node}")]
    NodeNotFound { node: String },

    #[error("edge not found: {tail} -> {head} in edge type '{edge_type}'")]
    EdgeNotFound {
        tail: String,
        head: String,
        edge_type: String,
    },

    #[error("no edge types registered")]
    EmptyRegistry,

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Causal(#[from] CausalError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl MixGraphError {
    /// Build a `NodeNotFound` from any debuggable node id.
    pub fn node_not_found(node: &impl std::fmt::Debug) -> Self {
        Self::NodeNotFound {
            node: format!("{node:?}"),
        }
    }
}

pub type MixGraphResult<T> = Result<T, MixGraphError>;
