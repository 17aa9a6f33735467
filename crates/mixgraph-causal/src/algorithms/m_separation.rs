//! m-separation for mixed graphs with directed, bidirected, and undirected edges.
//!
//! Depth-first search over simple paths. A node is a collider on a path when
//! both of its path edges carry an arrowhead at it:
//! - directed `u -> v`: arrowhead at `v`, tail at `u`
//! - bidirected `u <-> v`: arrowheads at both ends
//! - undirected `u -- v`: tails at both ends
//!
//! A path is open given `z` when every collider is an ancestor of `z` (or in
//! `z`) and no non-collider is in `z`. `x` and `y` are m-separated given `z`
//! iff no open path joins them. Worst case is exponential in the node count.

use std::collections::{HashMap, HashSet};

use mixgraph_core::errors::CausalError;
use mixgraph_core::{EdgeRoleNames, MixGraphError, MixGraphResult, NodeId};
use petgraph::Direction;
use tracing::debug;

use super::dag_enforcement;
use crate::graph::MixedEdgeGraph;

/// Mark at one end of an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Tail,
    Arrow,
}

/// `node -> [(neighbour, mark at node, mark at neighbour)]`
type MarkedAdjacency<'a, N> = HashMap<&'a N, Vec<(&'a N, Mark, Mark)>>;

/// Whether `x` and `y` are m-separated given `z` in `graph`.
///
/// Every registered edge type must be one of the three role names in
/// `names`; absent roles are treated as empty. The directed role must be
/// acyclic and every query node must exist.
pub fn m_separated<N: NodeId>(
    graph: &MixedEdgeGraph<N>,
    x: &HashSet<N>,
    y: &HashSet<N>,
    z: &HashSet<N>,
    names: &EdgeRoleNames,
) -> MixGraphResult<bool> {
    if let Some(unexpected) = graph.edge_types().find(|name| !names.contains(name)) {
        return Err(CausalError::InvalidSeparationQuery {
            reason: format!(
                "edge type '{unexpected}' is not one of directed '{}', bidirected '{}', undirected '{}'",
                names.directed, names.bidirected, names.undirected
            ),
        }
        .into());
    }

    if graph.has_edge_type(&names.directed) {
        let directed = graph.get_directed(&names.directed)?;
        if let Some(cycle) = dag_enforcement::find_cycles(directed).first() {
            return Err(CausalError::NotADag {
                cycle: dag_enforcement::describe_cycle(cycle),
            }
            .into());
        }
    }

    if let Some(missing) = x.iter().chain(y).chain(z).find(|n| !graph.has_node(n)) {
        return Err(MixGraphError::node_not_found(missing));
    }

    if x.is_empty() || y.is_empty() {
        return Ok(true);
    }
    if !x.is_disjoint(y) {
        return Ok(false);
    }

    let adjacency = marked_adjacency(graph, names)?;
    let ancestors_of_z = ancestors_of(graph, names, z)?;
    let connected = m_connected(&adjacency, x, y, z, &ancestors_of_z);
    debug!(?x, ?y, ?z, connected, "m-separation query");
    Ok(!connected)
}

fn marked_adjacency<'a, N: NodeId>(
    graph: &'a MixedEdgeGraph<N>,
    names: &EdgeRoleNames,
) -> MixGraphResult<MarkedAdjacency<'a, N>> {
    let mut adjacency: MarkedAdjacency<'a, N> = HashMap::new();
    let mut link = |edges: Box<dyn Iterator<Item = (&'a N, &'a N)> + 'a>, at_u: Mark, at_v: Mark| {
        for (u, v) in edges {
            adjacency.entry(u).or_default().push((v, at_u, at_v));
            adjacency.entry(v).or_default().push((u, at_v, at_u));
        }
    };

    if graph.has_edge_type(&names.directed) {
        let edges = graph.get_directed(&names.directed)?.edges();
        link(Box::new(edges), Mark::Tail, Mark::Arrow);
    }
    if graph.has_edge_type(&names.bidirected) {
        let edges = graph.get_undirected(&names.bidirected)?.edges();
        link(Box::new(edges), Mark::Arrow, Mark::Arrow);
    }
    if graph.has_edge_type(&names.undirected) {
        let edges = graph.get_undirected(&names.undirected)?.edges();
        link(Box::new(edges), Mark::Tail, Mark::Tail);
    }
    Ok(adjacency)
}

/// `z` together with every node that has a directed path into `z`.
fn ancestors_of<N: NodeId>(
    graph: &MixedEdgeGraph<N>,
    names: &EdgeRoleNames,
    z: &HashSet<N>,
) -> MixGraphResult<HashSet<N>> {
    let mut closed: HashSet<N> = z.clone();
    if graph.has_edge_type(&names.directed) {
        let directed = graph.get_directed(&names.directed)?;
        for node in z {
            // Nodes outside the directed role have no ancestors.
            if let Some(ancestors) = directed.reachable(node, Direction::Incoming) {
                closed.extend(ancestors);
            }
        }
    }
    Ok(closed)
}

/// Whether an open simple path joins some node of `x` to some node of `y`.
fn m_connected<'a, N: NodeId>(
    adjacency: &'a MarkedAdjacency<'a, N>,
    x: &'a HashSet<N>,
    y: &'a HashSet<N>,
    z: &'a HashSet<N>,
    ancestors_of_z: &'a HashSet<N>,
) -> bool {
    let search = PathSearch {
        adjacency,
        x,
        y,
        z,
        ancestors_of_z,
    };
    x.iter().any(|start| {
        let mut on_path: HashSet<&N> = HashSet::from([start]);
        // Endpoints are never blocked.
        adjacency
            .get(start)
            .into_iter()
            .flatten()
            .any(|&(next, _, at_next)| search.reaches_y(next, at_next == Mark::Arrow, &mut on_path))
    })
}

struct PathSearch<'a, N> {
    adjacency: &'a MarkedAdjacency<'a, N>,
    x: &'a HashSet<N>,
    y: &'a HashSet<N>,
    z: &'a HashSet<N>,
    ancestors_of_z: &'a HashSet<N>,
}

impl<'a, N: NodeId> PathSearch<'a, N> {
    /// Extend the current path with `node`, entered through an arrowhead iff `arrow_in`.
    fn reaches_y(&self, node: &'a N, arrow_in: bool, on_path: &mut HashSet<&'a N>) -> bool {
        if self.y.contains(node) {
            return true;
        }
        // A path through another start node has an open suffix from that node.
        if self.x.contains(node) || !on_path.insert(node) {
            return false;
        }

        let mut found = false;
        for &(next, at_node, at_next) in self.adjacency.get(node).into_iter().flatten() {
            if on_path.contains(next) {
                continue;
            }
            let open = if arrow_in && at_node == Mark::Arrow {
                self.ancestors_of_z.contains(node)
            } else {
                !self.z.contains(node)
            };
            if open && self.reaches_y(next, at_next == Mark::Arrow, on_path) {
                found = true;
                break;
            }
        }
        on_path.remove(node);
        found
    }
}
