//! Graph storage: single-edge-type graphs and the mixed-edge registry.

pub mod edge_graph;
pub mod input;
pub mod mixed;
pub mod sub_graph;

pub use edge_graph::{Components, DiEdgeGraph, EdgeGraph, Edges, Neighbors, UnEdgeGraph};
pub use input::{EdgeInput, InputKind};
pub use mixed::{MixedEdgeGraph, Nodes};
pub use sub_graph::SubGraph;
