//! Flatten a mixed-edge graph into one labelled petgraph `DiGraph`.
//!
//! Each edge carries its edge-type name as weight, so parallel edges of
//! different types between the same pair survive. Undirected edges are
//! emitted once in each direction.

use std::collections::HashMap;

use mixgraph_core::constants::{GRAPH_NAME_KEY, GRAPH_TYPE_KEY};
use mixgraph_core::{Attributes, NodeId};
use petgraph::graph::{DiGraph, NodeIndex};

use crate::graph::{MixedEdgeGraph, SubGraph};

/// A flattened mixed-edge graph.
#[derive(Debug, Clone)]
pub struct LabeledDiGraph<N> {
    pub graph: DiGraph<N, String>,
    /// Copied graph attributes plus `graph_type` and, when set, `name`.
    pub attrs: Attributes,
}

impl<N: NodeId> LabeledDiGraph<N> {
    /// Edges labelled `edge_type`, as `(u, v)` pairs.
    pub fn edges_of_type<'a>(&'a self, edge_type: &'a str) -> impl Iterator<Item = (&'a N, &'a N)> + 'a {
        self.graph
            .edge_indices()
            .filter(move |&e| self.graph[e] == edge_type)
            .filter_map(move |e| {
                let (a, b) = self.graph.edge_endpoints(e)?;
                Some((&self.graph[a], &self.graph[b]))
            })
    }
}

/// Flatten `graph`, recording `graph_type` in the attributes.
pub fn to_multi_digraph<N: NodeId>(graph: &MixedEdgeGraph<N>, graph_type: &str) -> LabeledDiGraph<N> {
    let mut out: DiGraph<N, String> = DiGraph::new();
    let mut index: HashMap<&N, NodeIndex> = HashMap::new();
    for node in graph.nodes() {
        index.insert(node, out.add_node(node.clone()));
    }

    for (edge_type, sub) in graph.graphs() {
        let symmetric = matches!(sub, SubGraph::Undirected(_));
        for (u, v) in sub.edges() {
            let (a, b) = (index[u], index[v]);
            out.add_edge(a, b, edge_type.clone());
            if symmetric && a != b {
                out.add_edge(b, a, edge_type.clone());
            }
        }
    }

    let mut attrs = graph.attrs().clone();
    attrs.insert(GRAPH_TYPE_KEY.to_string(), graph_type.into());
    if !graph.name().is_empty() {
        attrs.insert(GRAPH_NAME_KEY.to_string(), graph.name().into());
    }
    LabeledDiGraph { graph: out, attrs }
}
