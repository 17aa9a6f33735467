//! Causal algorithms over mixed-edge graphs.

pub mod chain_graph;
pub mod dag_enforcement;
pub mod m_separation;

pub use chain_graph::is_valid_chain_graph;
pub use m_separation::m_separated;
