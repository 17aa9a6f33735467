//! Chain-graph validity.
//!
//! A chain graph may contain cycles made only of undirected edges, but no
//! cycle that uses a directed edge. Equivalently: no directed edge joins two
//! nodes of the same undirected component, and directed edges between
//! components form a DAG.

use std::collections::HashMap;

use mixgraph_core::errors::CausalError;
use mixgraph_core::{EdgeRoleNames, MixGraphError, MixGraphResult, NodeId};

use crate::graph::{DiEdgeGraph, MixedEdgeGraph, UnEdgeGraph};

/// Whether the directed and undirected roles of `graph` form a valid chain graph.
///
/// Missing roles count as empty; other edge types are ignored.
pub fn is_valid_chain_graph<N: NodeId>(
    graph: &MixedEdgeGraph<N>,
    names: &EdgeRoleNames,
) -> MixGraphResult<bool> {
    let directed = if graph.has_edge_type(&names.directed) {
        Some(graph.get_directed(&names.directed)?)
    } else {
        None
    };
    let undirected = if graph.has_edge_type(&names.undirected) {
        Some(graph.get_undirected(&names.undirected)?)
    } else {
        None
    };
    match check_chain_graph(directed, undirected) {
        Ok(()) => Ok(true),
        Err(MixGraphError::Causal(CausalError::InvalidChainGraph { .. })) => Ok(false),
        Err(err) => Err(err),
    }
}

/// Validate a directed/undirected pair.
///
/// Fails with `InvalidChainGraph` describing the first violation found.
pub fn check_chain_graph<N: NodeId>(
    directed: Option<&DiEdgeGraph<N>>,
    undirected: Option<&UnEdgeGraph<N>>,
) -> MixGraphResult<()> {
    let Some(directed) = directed else {
        return Ok(());
    };

    let mut component_of: HashMap<N, usize> = HashMap::new();
    if let Some(undirected) = undirected {
        for (id, component) in undirected.connected_components().enumerate() {
            component_of.extend(component.into_iter().map(|node| (node, id)));
        }
    }
    let mut next = component_of.values().max().map_or(0, |max| max + 1);
    for node in directed.nodes() {
        if !component_of.contains_key(node) {
            component_of.insert(node.clone(), next);
            next += 1;
        }
    }

    let mut quotient: DiEdgeGraph<usize> = DiEdgeGraph::new();
    for (u, v) in directed.edges() {
        if u == v {
            return Err(invalid(format!("directed self-loop on {u:?}")));
        }
        let (cu, cv) = (component_of[u], component_of[v]);
        if cu == cv {
            return Err(invalid(format!(
                "directed edge {u:?} -> {v:?} lies inside an undirected chain component"
            )));
        }
        quotient.add_edge(cu, cv);
    }
    if !quotient.is_acyclic() {
        return Err(invalid(
            "directed edges form a cycle between chain components".to_string(),
        ));
    }
    Ok(())
}

fn invalid(reason: String) -> MixGraphError {
    CausalError::InvalidChainGraph { reason }.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::EdgeInput;

    #[test]
    fn undirected_cycle_is_allowed() {
        let d: DiEdgeGraph<u32> = EdgeInput::edges([(0, 1)]).build();
        let u: UnEdgeGraph<u32> = EdgeInput::edges([(1, 2), (2, 3), (3, 1)]).build();
        assert!(check_chain_graph(Some(&d), Some(&u)).is_ok());
    }

    #[test]
    fn directed_edge_inside_component_is_rejected() {
        let d: DiEdgeGraph<u32> = EdgeInput::edges([(1, 3)]).build();
        let u: UnEdgeGraph<u32> = EdgeInput::edges([(1, 2), (2, 3)]).build();
        let err = check_chain_graph(Some(&d), Some(&u)).unwrap_err();
        assert!(err.to_string().contains("inside an undirected chain component"));
    }

    #[test]
    fn directed_self_loop_is_reported_as_such() {
        let d: DiEdgeGraph<u32> = EdgeInput::edges([(4, 4)]).build();
        let u: UnEdgeGraph<u32> = EdgeInput::edges([(1, 2)]).build();
        let err = check_chain_graph(Some(&d), Some(&u)).unwrap_err();
        assert!(matches!(
            &err,
            MixGraphError::Causal(CausalError::InvalidChainGraph { reason })
                if reason == "directed self-loop on 4"
        ));

        let mut g = MixedEdgeGraph::new();
        g.add_edge_type(d, "directed").unwrap();
        g.add_edge_type(u, "undirected").unwrap();
        assert!(!is_valid_chain_graph(&g, &EdgeRoleNames::default()).unwrap());
    }

    #[test]
    fn semi_directed_cycle_is_rejected() {
        // 1 -> 2 -- 3 -> 1
        let d: DiEdgeGraph<u32> = EdgeInput::edges([(1, 2), (3, 1)]).build();
        let u: UnEdgeGraph<u32> = EdgeInput::edges([(2, 3)]).build();
        let err = check_chain_graph(Some(&d), Some(&u)).unwrap_err();
        assert!(err.to_string().contains("cycle between chain components"));
    }
}
