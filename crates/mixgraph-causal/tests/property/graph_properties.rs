//! Property tests for mixgraph-causal: acyclicity, node coherence, ancestry, and separation.

use std::collections::HashSet;

use proptest::prelude::*;

use mixgraph_causal::algorithms::{dag_enforcement, is_valid_chain_graph};
use mixgraph_causal::{Admg, AncestralQueries, ChainGraph};
use mixgraph_core::{EdgeRole, EdgeRoleNames};

const N: u32 = 12;

/// Build an ADMG by inserting edges one at a time, skipping rejected ones.
fn build_random_admg(directed: &[(u32, u32)], bidirected: &[(u32, u32)]) -> Admg<u32> {
    let mut admg = Admg::new();
    for i in 0..N {
        admg.add_node(i).unwrap();
    }
    for &(u, v) in directed {
        let _ = admg.add_edge(u, v, EdgeRole::Directed);
    }
    for &(u, v) in bidirected {
        let _ = admg.add_edge(u, v, EdgeRole::Bidirected);
    }
    admg
}

fn edge_strategy(n: u32) -> impl Strategy<Value = Vec<(u32, u32)>> {
    prop::collection::vec((0..n, 0..n), 0..(n as usize) * 2)
}

fn node_set_strategy(n: u32) -> impl Strategy<Value = HashSet<u32>> {
    prop::collection::hash_set(0..n, 0..3)
}

// =============================================================================
// Directed role stays acyclic under insertion
// =============================================================================
proptest! {
    #[test]
    fn directed_role_never_cycles(
        directed in edge_strategy(N),
        bidirected in edge_strategy(N),
    ) {
        let admg = build_random_admg(&directed, &bidirected);
        prop_assert!(admg.validate().is_ok());
        let cycles = dag_enforcement::find_cycles(admg.sub_directed_graph().unwrap());
        prop_assert!(cycles.is_empty(), "found {} cycles", cycles.len());
    }
}

// =============================================================================
// Every role sees the same node set
// =============================================================================
proptest! {
    #[test]
    fn roles_share_one_node_set(
        directed in edge_strategy(N),
        bidirected in edge_strategy(N),
    ) {
        let admg = build_random_admg(&directed, &bidirected);
        let all: HashSet<u32> = admg.nodes().copied().collect();
        prop_assert_eq!(all.len(), N as usize);
        for (_, sub) in admg.mixed().graphs() {
            let own: HashSet<u32> = sub.nodes().copied().collect();
            prop_assert_eq!(&own, &all);
        }
    }
}

// =============================================================================
// Parents and children are mirror images
// =============================================================================
proptest! {
    #[test]
    fn parents_mirror_children(directed in edge_strategy(N)) {
        let admg = build_random_admg(&directed, &[]);
        for u in 0..N {
            for v in admg.children(&u).unwrap() {
                prop_assert!(admg.parents(v).unwrap().any(|p| *p == u));
            }
        }
    }
}

// =============================================================================
// Ancestry is transitive and dual to descent
// =============================================================================
proptest! {
    #[test]
    fn ancestry_is_transitive(directed in edge_strategy(N)) {
        let admg = build_random_admg(&directed, &[]);
        for b in 0..N {
            let ancestors_b = admg.ancestors(&b).unwrap();
            prop_assert!(!ancestors_b.contains(&b));
            for a in &ancestors_b {
                prop_assert!(admg.descendants(a).unwrap().contains(&b));
                for c in admg.descendants(&b).unwrap() {
                    prop_assert!(admg.ancestors(&c).unwrap().contains(a));
                }
            }
        }
    }
}

// =============================================================================
// c-components partition the node set
// =============================================================================
proptest! {
    #[test]
    fn c_components_partition_nodes(
        directed in edge_strategy(N),
        bidirected in edge_strategy(N),
    ) {
        let admg = build_random_admg(&directed, &bidirected);
        let mut seen: HashSet<u32> = HashSet::new();
        for component in admg.c_components().unwrap() {
            prop_assert!(!component.is_empty());
            for node in component {
                prop_assert!(seen.insert(node), "node {} in two components", node);
            }
        }
        prop_assert_eq!(seen.len(), N as usize);
    }
}

// =============================================================================
// m-separation is symmetric in x and y
// =============================================================================
proptest! {
    #[test]
    fn m_separation_is_symmetric(
        directed in edge_strategy(N),
        bidirected in edge_strategy(N),
        x in node_set_strategy(N),
        y in node_set_strategy(N),
        z in node_set_strategy(N),
    ) {
        let admg = build_random_admg(&directed, &bidirected);
        let forward = admg.m_separated(&x, &y, &z).unwrap();
        let backward = admg.m_separated(&y, &x, &z).unwrap();
        prop_assert_eq!(forward, backward);
    }
}

// =============================================================================
// Chain graphs stay valid under checked insertion
// =============================================================================
proptest! {
    #[test]
    fn chain_graph_insertion_preserves_validity(
        directed in edge_strategy(N),
        undirected in edge_strategy(N),
    ) {
        let mut cg: ChainGraph<u32> = ChainGraph::new(Vec::new(), Vec::new()).unwrap();
        for (&(du, dv), &(uu, uv)) in directed.iter().zip(undirected.iter()) {
            let _ = cg.add_edge(du, dv, EdgeRole::Directed);
            let _ = cg.add_edge(uu, uv, EdgeRole::Undirected);
        }
        prop_assert!(is_valid_chain_graph(cg.mixed(), &EdgeRoleNames::default()).unwrap());
    }
}
