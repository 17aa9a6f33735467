use crate::models::EdgeKind;

/// Edge-type registry errors.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("unknown edge type: '{name}'")]
    UnknownEdgeType { name: String },

    #[error("edge type already registered: '{name}'")]
    DuplicateEdgeType { name: String },

    #[error("edge type '{name}' is {found}, expected {expected}")]
    EdgeKindMismatch {
        name: String,
        expected: EdgeKind,
        found: EdgeKind,
    },

    #[error("edge type '{name}' is reserved for a fixed role")]
    ReservedEdgeType { name: String },
}
