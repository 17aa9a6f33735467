//! A registered sub-graph: either all-directed or all-undirected.

use std::collections::HashSet;

use mixgraph_core::{EdgeKind, NodeId};

use super::edge_graph::{DiEdgeGraph, UnEdgeGraph};

/// One homogeneous entry in a mixed-edge graph's registry.
#[derive(Debug, Clone)]
pub enum SubGraph<N: NodeId> {
    Directed(DiEdgeGraph<N>),
    Undirected(UnEdgeGraph<N>),
}

macro_rules! dispatch {
    ($self:expr, $g:ident => $body:expr) => {
        match $self {
            SubGraph::Directed($g) => $body,
            SubGraph::Undirected($g) => $body,
        }
    };
}

impl<N: NodeId> SubGraph<N> {
    pub fn directed() -> Self {
        Self::Directed(DiEdgeGraph::new())
    }

    pub fn undirected() -> Self {
        Self::Undirected(UnEdgeGraph::new())
    }

    pub fn kind(&self) -> EdgeKind {
        match self {
            Self::Directed(_) => EdgeKind::Directed,
            Self::Undirected(_) => EdgeKind::Undirected,
        }
    }

    pub fn as_directed(&self) -> Option<&DiEdgeGraph<N>> {
        match self {
            Self::Directed(g) => Some(g),
            Self::Undirected(_) => None,
        }
    }

    pub fn as_undirected(&self) -> Option<&UnEdgeGraph<N>> {
        match self {
            Self::Undirected(g) => Some(g),
            Self::Directed(_) => None,
        }
    }

    pub fn add_node(&mut self, node: N) {
        dispatch!(self, g => { g.add_node(node); })
    }

    pub fn remove_node(&mut self, node: &N) -> bool {
        dispatch!(self, g => g.remove_node(node))
    }

    pub fn contains_node(&self, node: &N) -> bool {
        dispatch!(self, g => g.contains_node(node))
    }

    pub fn add_edge(&mut self, u: N, v: N) -> bool {
        dispatch!(self, g => g.add_edge(u, v))
    }

    pub fn remove_edge(&mut self, u: &N, v: &N) -> bool {
        dispatch!(self, g => g.remove_edge(u, v))
    }

    pub fn has_edge(&self, u: &N, v: &N) -> bool {
        dispatch!(self, g => g.has_edge(u, v))
    }

    pub fn node_count(&self) -> usize {
        dispatch!(self, g => g.node_count())
    }

    pub fn edge_count(&self) -> usize {
        dispatch!(self, g => g.edge_count())
    }

    pub fn nodes(&self) -> Box<dyn Iterator<Item = &N> + '_> {
        dispatch!(self, g => Box::new(g.nodes()))
    }

    pub fn edges(&self) -> Box<dyn Iterator<Item = (&N, &N)> + '_> {
        dispatch!(self, g => Box::new(g.edges()))
    }

    /// Adjacent nodes in either direction.
    pub fn adjacent(&self, node: &N) -> HashSet<&N> {
        match self {
            Self::Directed(g) => g
                .successors(node)
                .into_iter()
                .flatten()
                .chain(g.predecessors(node).into_iter().flatten())
                .collect(),
            Self::Undirected(g) => g.neighbors(node).into_iter().flatten().collect(),
        }
    }

    pub fn clear(&mut self) {
        dispatch!(self, g => g.clear())
    }

    pub fn clear_edges(&mut self) {
        dispatch!(self, g => g.clear_edges())
    }

    pub fn subgraph(&self, keep: &HashSet<N>) -> Self {
        match self {
            Self::Directed(g) => Self::Directed(g.subgraph(keep)),
            Self::Undirected(g) => Self::Undirected(g.subgraph(keep)),
        }
    }
}

impl<N: NodeId> From<DiEdgeGraph<N>> for SubGraph<N> {
    fn from(graph: DiEdgeGraph<N>) -> Self {
        Self::Directed(graph)
    }
}

impl<N: NodeId> From<UnEdgeGraph<N>> for SubGraph<N> {
    fn from(graph: UnEdgeGraph<N>) -> Self {
        Self::Undirected(graph)
    }
}
