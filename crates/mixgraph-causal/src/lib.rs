//! # mixgraph-causal
//!
//! Mixed-edge causal graphs: several single-edge-type graphs composed over one
//! node set, with ADMG and chain-graph specialisations, ancestral queries,
//! c-components, and m-separation.
//!
//! Storage and graph algorithms are delegated to `petgraph`.

pub mod admg;
pub mod algorithms;
pub mod ancestral;
pub mod chain_graph;
pub mod convert;
pub mod graph;

pub use admg::{Admg, AdmgBuilder};
pub use ancestral::{AncestralQueries, HasDirectedRole};
pub use chain_graph::ChainGraph;
pub use graph::{DiEdgeGraph, EdgeGraph, EdgeInput, InputKind, MixedEdgeGraph, SubGraph, UnEdgeGraph};
