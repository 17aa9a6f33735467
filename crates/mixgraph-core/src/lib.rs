//! # mixgraph-core
//!
//! Foundation crate for mixed-edge causal graphs.
//! Defines the shared errors, config, constants, and edge models.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::{AcyclicityCheck, AdmgConfig, EdgeRoleNames, MixGraphConfig};
pub use errors::{MixGraphError, MixGraphResult};
pub use models::{Attributes, EdgeKind, EdgeRole};
pub use traits::NodeId;
