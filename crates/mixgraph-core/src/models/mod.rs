mod edge_kind;
mod edge_role;

pub use edge_kind::EdgeKind;
pub use edge_role::EdgeRole;

/// Graph-level metadata attached to a mixed-edge graph.
pub type Attributes = std::collections::BTreeMap<String, serde_json::Value>;
