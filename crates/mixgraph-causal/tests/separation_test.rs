//! m-separation and chain-graph validity over mixed-edge graphs.

use std::collections::HashSet;

use mixgraph_causal::algorithms::{is_valid_chain_graph, m_separated};
use mixgraph_causal::{Admg, AncestralQueries, ChainGraph, EdgeInput, MixedEdgeGraph, SubGraph};
use mixgraph_core::errors::{CausalError, RegistryError};
use mixgraph_core::{EdgeRole, EdgeRoleNames, MixGraphError};

fn set<T: Clone + Eq + std::hash::Hash>(items: &[T]) -> HashSet<T> {
    items.iter().cloned().collect()
}

/// Mixed graph with the default role names.
fn mixed<N: mixgraph_core::NodeId>(
    directed: Vec<(N, N)>,
    bidirected: Vec<(N, N)>,
    undirected: Vec<(N, N)>,
) -> MixedEdgeGraph<N> {
    let names = EdgeRoleNames::default();
    MixedEdgeGraph::from_graphs(vec![
        (
            names.directed.clone(),
            SubGraph::Directed(EdgeInput::edges(directed).build()),
        ),
        (
            names.bidirected.clone(),
            SubGraph::Undirected(EdgeInput::edges(bidirected).build()),
        ),
        (
            names.undirected.clone(),
            SubGraph::Undirected(EdgeInput::edges(undirected).build()),
        ),
    ])
    .unwrap()
}

fn msep<N: mixgraph_core::NodeId>(g: &MixedEdgeGraph<N>, x: &[N], y: &[N], z: &[N]) -> bool {
    m_separated(g, &set(x), &set(y), &set(z), &EdgeRoleNames::default()).unwrap()
}

// =============================================================================
// m-separation
// =============================================================================

#[test]
fn directed_chain_with_confounded_tail() {
    // 0 -> 1 -> 2 -> 3, 2 -> 4, 2 <-> 3
    let g = mixed(vec![(0, 1), (1, 2), (2, 3), (2, 4)], vec![(2, 3)], vec![]);

    assert!(!msep(&g, &[0], &[3], &[]));
    assert!(msep(&g, &[0], &[3], &[1]));
    // 2 is a collider on 1 -> 2 <-> 3, so conditioning on it opens that path.
    assert!(!msep(&g, &[0], &[3], &[2]));
    assert!(msep(&g, &[0], &[3], &[1, 2]));
    assert!(!msep(&g, &[0], &[3], &[4]));
}

#[test]
fn collider_is_not_bypassed_through_undirected_edge() {
    // 3 -> 2 -> 0 <-> 4, 3 -> 1 - 2, 5 <-> 0 - 5
    let g = mixed(
        vec![(3, 2), (3, 1), (2, 0)],
        vec![(0, 4), (5, 0)],
        vec![(2, 1), (5, 0)],
    );

    // Every path into 4 enters 0 through an arrowhead and leaves through 0 <-> 4.
    assert!(msep(&g, &[3], &[4], &[]));
    assert!(msep(&g, &[4], &[3], &[]));
    // 0 is in z, so the collider opens.
    assert!(!msep(&g, &[3], &[4], &[0]));
    // 5 is not an ancestor of 0, and 5 - 0 cannot be revisited.
    assert!(msep(&g, &[3], &[4], &[5]));
}

#[test]
fn bidirected_chain_opens_on_conditioning() {
    let g = mixed(vec![], vec![(1, 2), (2, 3)], vec![]);
    assert!(msep(&g, &[1], &[3], &[]));
    assert!(!msep(&g, &[1], &[3], &[2]));
}

#[test]
fn unconditioned_collider_blocks_mixed_path() {
    // 1 - 2 -> 3 <- 4 <-> 5
    let g = mixed(vec![(2, 3), (4, 3)], vec![(4, 5)], vec![(1, 2)]);
    assert!(msep(&g, &[1], &[4], &[]));
    assert!(!msep(&g, &[1], &[4], &[3]));
}

#[test]
fn undirected_then_bidirected_is_not_a_collider() {
    // 1 - 2 -> 3 <-> 4 - 5, 3 -> 6, 2 - 7 <-> 5
    let g = mixed(
        vec![(2, 3), (3, 6)],
        vec![(3, 4), (7, 5)],
        vec![(1, 2), (4, 5), (2, 7)],
    );

    assert!(msep(&g, &[1], &[5], &[7]));
    assert!(!msep(&g, &[1], &[5], &[]));
    // 6 is a descendant of the collider 3.
    assert!(!msep(&g, &[1], &[5], &[6]));
    assert!(!msep(&g, &[1], &[5], &[6, 7]));
}

#[test]
fn undirected_chain() {
    let mut g = mixed(vec![], vec![], vec![(1, 2), (2, 3)]);
    assert!(!msep(&g, &[1], &[3], &[]));
    assert!(msep(&g, &[1], &[3], &[2]));

    g.add_edge(1, 3, "undirected").unwrap();
    assert!(!msep(&g, &[1], &[3], &[2]));
}

#[test]
fn isolated_nodes_are_separated() {
    let mut g: MixedEdgeGraph<u32> = mixed(vec![], vec![], vec![]);
    g.add_nodes_from([1, 2, 3]).unwrap();
    assert!(msep(&g, &[1], &[3], &[2]));
    assert!(msep(&g, &[1], &[2], &[]));
}

#[test]
fn zhang_figure_six() {
    // A -> C -> D, B -> D, A <-> B
    let g = mixed(
        vec![("A", "C"), ("C", "D"), ("B", "D")],
        vec![("A", "B")],
        vec![],
    );

    assert!(!msep(&g, &["A"], &["D"], &["C"]));
    assert!(msep(&g, &["A"], &["D"], &["B", "C"]));
    assert!(msep(&g, &["B"], &["C"], &["A"]));
    assert!(!msep(&g, &["B"], &["C"], &["A", "D"]));
    assert!(!msep(&g, &["B"], &["C"], &[]));
}

#[test]
fn inducing_path_connects_non_adjacent_nodes() {
    // B -> C -> D, A <-> B, B <-> C
    let g = mixed(
        vec![("B", "C"), ("C", "D")],
        vec![("A", "B"), ("B", "C")],
        vec![],
    );

    assert!(!msep(&g, &["A"], &["C"], &["B"]));
    assert!(!msep(&g, &["A"], &["C"], &[]));
    assert!(!msep(&g, &["A"], &["D"], &[]));
}

#[test]
fn conditioning_on_collider_descendant() {
    // A -> B <- C, B -> D
    let g = mixed(vec![("A", "B"), ("C", "B"), ("B", "D")], vec![], vec![]);
    assert!(!msep(&g, &["A"], &["C"], &["D"]));
    assert!(msep(&g, &["A"], &["C"], &[]));

    // A -> B, B -> D, B <-> C
    let g = mixed(vec![("A", "B"), ("B", "D")], vec![("B", "C")], vec![]);
    assert!(!msep(&g, &["A"], &["C"], &["D"]));
    assert!(msep(&g, &["A"], &["C"], &[]));
}

#[test]
fn empty_and_overlapping_query_sets() {
    let g = mixed(vec![(1, 2)], vec![], vec![]);
    assert!(msep(&g, &[], &[2], &[]));
    assert!(msep(&g, &[1], &[], &[]));
    assert!(!msep(&g, &[1, 2], &[2], &[]));
}

#[test]
fn cyclic_directed_role_is_rejected() {
    let g = mixed(vec![(0, 1), (1, 2), (2, 3), (3, 4), (4, 2)], vec![(2, 3)], vec![]);
    let err = m_separated(&g, &set(&[0]), &set(&[3]), &set(&[]), &EdgeRoleNames::default())
        .unwrap_err();
    assert!(matches!(err, MixGraphError::Causal(CausalError::NotADag { .. })));
}

#[test]
fn unexpected_edge_type_is_rejected() {
    let g = MixedEdgeGraph::from_graphs(vec![
        ("directed", SubGraph::Directed(EdgeInput::edges([(0, 1), (1, 2)]).build())),
        ("bi-directed", SubGraph::Undirected(EdgeInput::edges([(1, 2)]).build())),
    ])
    .unwrap();

    let err = m_separated(&g, &set(&[0]), &set(&[2]), &set(&[]), &EdgeRoleNames::default())
        .unwrap_err();
    assert!(matches!(
        err,
        MixGraphError::Causal(CausalError::InvalidSeparationQuery { .. })
    ));

    let names = EdgeRoleNames::new("directed", "bi-directed", "undirected");
    assert!(!m_separated(&g, &set(&[0]), &set(&[2]), &set(&[]), &names).unwrap());
}

#[test]
fn unknown_query_node_is_rejected() {
    let g = mixed(vec![(1, 2)], vec![], vec![]);
    let err = m_separated(&g, &set(&[1]), &set(&[9]), &set(&[]), &EdgeRoleNames::default())
        .unwrap_err();
    assert!(matches!(err, MixGraphError::NodeNotFound { .. }));
}

#[test]
fn admg_delegates_separation_queries() {
    let admg = Admg::from_edges(vec![("A", "C"), ("C", "D"), ("B", "D")], vec![("A", "B")], vec![])
        .unwrap();
    assert!(admg
        .m_separated(&set(&["A"]), &set(&["D"]), &set(&["B", "C"]))
        .unwrap());
    assert!(!admg
        .m_separated(&set(&["A"]), &set(&["D"]), &set(&["C"]))
        .unwrap());
}

// =============================================================================
// Chain graphs
// =============================================================================

#[test]
fn chain_graph_accepts_directed_edges_between_components() {
    // {1 - 2} -> {3 - 4}
    let g = mixed(vec![(1, 3), (2, 4)], vec![], vec![(1, 2), (3, 4)]);
    assert!(is_valid_chain_graph(&g, &EdgeRoleNames::default()).unwrap());
}

#[test]
fn directed_edge_inside_component_is_invalid() {
    // 1 -> 2 - 3 - 1 closes a semi-directed cycle.
    let g = mixed(vec![(1, 2)], vec![], vec![(2, 3), (3, 1)]);
    assert!(!is_valid_chain_graph(&g, &EdgeRoleNames::default()).unwrap());
}

#[test]
fn cycle_between_components_is_invalid() {
    // {1 - 2} -> {3 - 4} -> {1 - 2}
    let g = mixed(vec![(1, 3), (4, 2)], vec![], vec![(1, 2), (3, 4)]);
    assert!(!is_valid_chain_graph(&g, &EdgeRoleNames::default()).unwrap());
}

#[test]
fn chain_graph_construction_and_mutation() {
    let mut cg = ChainGraph::new(vec![(1, 3)], vec![(1, 2), (3, 4)]).unwrap();
    assert_eq!(cg.chain_components().unwrap().count(), 2);
    assert_eq!(cg.children(&1).unwrap().collect::<Vec<_>>(), vec![&3]);

    // 4 -> 2 would close {1,2} -> {3,4} -> {1,2}.
    let err = cg.add_edge(4, 2, EdgeRole::Directed).unwrap_err();
    assert!(matches!(
        err,
        MixGraphError::Causal(CausalError::InvalidChainGraph { .. })
    ));
    assert!(!cg.mixed().has_edge(&4, &2, Some("directed")));

    assert!(cg.add_edge(2, 4, EdgeRole::Directed).unwrap());

    let err = cg.add_edge(1, 4, EdgeRole::Bidirected).unwrap_err();
    assert!(matches!(
        err,
        MixGraphError::Registry(RegistryError::UnknownEdgeType { .. })
    ));

    let err = cg.add_edge(5, 5, EdgeRole::Undirected).unwrap_err();
    assert!(matches!(err, MixGraphError::Causal(CausalError::SelfLoop { .. })));
}

#[test]
fn chain_graph_rejects_invalid_input() {
    let err = ChainGraph::new(vec![(1, 2)], vec![(1, 2)]).unwrap_err();
    assert!(matches!(
        err,
        MixGraphError::Causal(CausalError::InvalidChainGraph { .. })
    ));
}

#[test]
fn directed_self_loop_is_not_a_chain_graph() {
    let err = ChainGraph::new(vec![(3, 3)], vec![(1, 2)]).unwrap_err();
    assert!(matches!(
        &err,
        MixGraphError::Causal(CausalError::InvalidChainGraph { reason })
            if reason.contains("self-loop")
    ));

    let mut cg = ChainGraph::new(vec![(1, 3)], vec![(1, 2)]).unwrap();
    let err = cg.add_edge(2, 2, EdgeRole::Directed).unwrap_err();
    assert!(err.to_string().contains("directed self-loop on 2"));
    assert!(!cg.mixed().has_edge(&2, &2, None));
}
