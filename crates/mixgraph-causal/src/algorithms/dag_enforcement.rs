//! Cycle detection over a directed edge graph.
//! Tarjan's SCC for whole-graph checks, DFS reachability for single insertions.

use mixgraph_core::NodeId;
use petgraph::algo::tarjan_scc;
use petgraph::visit::{Dfs, EdgeRef, IntoEdgeReferences};

use crate::graph::DiEdgeGraph;

/// Check whether adding `source -> target` would create a cycle.
///
/// Returns `true` if a cycle would be created (edge should be rejected).
/// Endpoints missing from the graph cannot close a cycle, except a self-loop.
pub fn would_create_cycle<N: NodeId>(graph: &DiEdgeGraph<N>, source: &N, target: &N) -> bool {
    // Self-loops are always cycles.
    if source == target {
        return true;
    }
    let (Some(from), Some(to)) = (graph.node_index(target), graph.node_index(source)) else {
        return false;
    };

    // Adding source→target closes a cycle iff target already reaches source.
    let inner = graph.inner();
    let mut dfs = Dfs::new(inner, from);
    while let Some(node) = dfs.next(inner) {
        if node == to {
            return true;
        }
    }
    false
}

/// Every cycle in the graph, as node groups.
///
/// Strongly connected components with more than one node, plus self-loops.
pub fn find_cycles<N: NodeId>(graph: &DiEdgeGraph<N>) -> Vec<Vec<N>> {
    let inner = graph.inner();
    let mut cycles: Vec<Vec<N>> = tarjan_scc(inner)
        .into_iter()
        .filter(|scc| scc.len() > 1)
        .map(|scc| {
            scc.into_iter()
                .filter_map(|idx| graph.node_id(idx).cloned())
                .collect()
        })
        .collect();
    for edge in inner.edge_references() {
        if edge.source() == edge.target() {
            if let Some(node) = graph.node_id(edge.source()) {
                cycles.push(vec![node.clone()]);
            }
        }
    }
    cycles
}

/// Human-readable rendering of one cycle, e.g. `1 -> 2 -> 1`.
pub fn describe_cycle<N: NodeId>(cycle: &[N]) -> String {
    let mut parts: Vec<String> = cycle.iter().map(|n| format!("{n:?}")).collect();
    if let Some(first) = parts.first().cloned() {
        parts.push(first);
    }
    parts.join(" -> ")
}
