//! Ancestral queries over the directed role of a mixed-edge graph.
//!
//! Any graph type that can hand out its directed sub-graph implements
//! [`HasDirectedRole`] and gets [`AncestralQueries`] for free. The free
//! functions below do the work so callers holding a bare [`DiEdgeGraph`]
//! can use them directly.

use std::collections::HashSet;

use mixgraph_core::{MixGraphError, MixGraphResult, NodeId};
use petgraph::{Directed, Direction};

use crate::graph::{DiEdgeGraph, Neighbors};

/// A graph with a designated directed (causal) sub-graph.
///
/// Fails with `UnknownEdgeType` when the role has no registered sub-graph.
pub trait HasDirectedRole<N: NodeId> {
    fn sub_directed_graph(&self) -> MixGraphResult<&DiEdgeGraph<N>>;
}

/// Ancestors, descendants, parents, and children against the directed role.
///
/// Edges of every other type are ignored.
pub trait AncestralQueries<N: NodeId>: HasDirectedRole<N> {
    /// Nodes with a directed path into `source`.
    fn ancestors(&self, source: &N) -> MixGraphResult<HashSet<N>> {
        ancestors(self.sub_directed_graph()?, source)
    }

    /// Nodes reachable by a directed path out of `source`.
    fn descendants(&self, source: &N) -> MixGraphResult<HashSet<N>> {
        descendants(self.sub_directed_graph()?, source)
    }

    /// Nodes `m` with `n -> m`.
    fn children<'a>(&'a self, n: &N) -> MixGraphResult<Neighbors<'a, N, Directed>> {
        children(self.sub_directed_graph()?, n)
    }

    /// Nodes `m` with `m -> n`.
    fn parents<'a>(&'a self, n: &N) -> MixGraphResult<Neighbors<'a, N, Directed>> {
        parents(self.sub_directed_graph()?, n)
    }
}

impl<N: NodeId, T: HasDirectedRole<N> + ?Sized> AncestralQueries<N> for T {}

pub fn ancestors<N: NodeId>(graph: &DiEdgeGraph<N>, source: &N) -> MixGraphResult<HashSet<N>> {
    graph
        .reachable(source, Direction::Incoming)
        .ok_or_else(|| MixGraphError::node_not_found(source))
}

pub fn descendants<N: NodeId>(graph: &DiEdgeGraph<N>, source: &N) -> MixGraphResult<HashSet<N>> {
    graph
        .reachable(source, Direction::Outgoing)
        .ok_or_else(|| MixGraphError::node_not_found(source))
}

pub fn children<'a, N: NodeId>(
    graph: &'a DiEdgeGraph<N>,
    n: &N,
) -> MixGraphResult<Neighbors<'a, N, Directed>> {
    graph
        .successors(n)
        .ok_or_else(|| MixGraphError::node_not_found(n))
}

pub fn parents<'a, N: NodeId>(
    graph: &'a DiEdgeGraph<N>,
    n: &N,
) -> MixGraphResult<Neighbors<'a, N, Directed>> {
    graph
        .predecessors(n)
        .ok_or_else(|| MixGraphError::node_not_found(n))
}
