/// Causal-graph invariant errors.
#[derive(Debug, thiserror::Error)]
pub enum CausalError {
    #[error("directed edges are not acyclic: {cycle}")]
    NotADag { cycle: String },

    #[error("self-loop on {node} is not allowed in edge type '{edge_type}'")]
    SelfLoop { node: String, edge_type: String },

    #[error("invalid chain graph: {reason}")]
    InvalidChainGraph { reason: String },

    #[error("invalid separation query: {reason}")]
    InvalidSeparationQuery { reason: String },
}
