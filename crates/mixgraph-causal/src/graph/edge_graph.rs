//! Single-edge-type graph: petgraph StableGraph + node-id index.
//! Every edge in one `EdgeGraph` has the same orientation (`Ty`).

use std::collections::{HashMap, HashSet, VecDeque};
use std::fmt;

use mixgraph_core::{EdgeKind, NodeId};
use petgraph::stable_graph::{self, NodeIndex, StableGraph};
use petgraph::visit::{EdgeRef, IntoEdgeReferences};
use petgraph::{Directed, Direction, EdgeType, Undirected};

/// Directed single-edge-type graph.
pub type DiEdgeGraph<N> = EdgeGraph<N, Directed>;

/// Undirected single-edge-type graph.
pub type UnEdgeGraph<N> = EdgeGraph<N, Undirected>;

/// A homogeneous graph keyed by node id.
///
/// Parallel edges are never stored: adding an existing edge is a no-op.
#[derive(Debug, Clone)]
pub struct EdgeGraph<N: NodeId, Ty: EdgeType> {
    graph: StableGraph<N, (), Ty>,
    index: HashMap<N, NodeIndex>,
}

impl<N: NodeId, Ty: EdgeType> EdgeGraph<N, Ty> {
    pub fn new() -> Self {
        Self {
            graph: StableGraph::default(),
            index: HashMap::new(),
        }
    }

    pub fn kind(&self) -> EdgeKind {
        if Ty::is_directed() {
            EdgeKind::Directed
        } else {
            EdgeKind::Undirected
        }
    }

    /// Get or create the node for an id.
    pub fn add_node(&mut self, node: N) -> NodeIndex {
        if let Some(&idx) = self.index.get(&node) {
            return idx;
        }
        let idx = self.graph.add_node(node.clone());
        self.index.insert(node, idx);
        idx
    }

    /// Remove a node and all incident edges. Returns whether it existed.
    pub fn remove_node(&mut self, node: &N) -> bool {
        match self.index.remove(node) {
            Some(idx) => {
                self.graph.remove_node(idx);
                true
            }
            None => false,
        }
    }

    pub fn contains_node(&self, node: &N) -> bool {
        self.index.contains_key(node)
    }

    pub fn node_index(&self, node: &N) -> Option<NodeIndex> {
        self.index.get(node).copied()
    }

    /// Node id stored at an index.
    pub fn node_id(&self, idx: NodeIndex) -> Option<&N> {
        self.graph.node_weight(idx)
    }

    /// Add an edge, creating missing endpoints. Returns `false` if it already existed.
    pub fn add_edge(&mut self, u: N, v: N) -> bool {
        let a = self.add_node(u);
        let b = self.add_node(v);
        if self.graph.find_edge(a, b).is_some() {
            return false;
        }
        self.graph.add_edge(a, b, ());
        true
    }

    /// Remove an edge. Returns whether it existed.
    pub fn remove_edge(&mut self, u: &N, v: &N) -> bool {
        let (Some(a), Some(b)) = (self.node_index(u), self.node_index(v)) else {
            return false;
        };
        match self.graph.find_edge(a, b) {
            Some(edge) => self.graph.remove_edge(edge).is_some(),
            None => false,
        }
    }

    pub fn has_edge(&self, u: &N, v: &N) -> bool {
        match (self.node_index(u), self.node_index(v)) {
            (Some(a), Some(b)) => self.graph.find_edge(a, b).is_some(),
            _ => false,
        }
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Iterate node ids.
    pub fn nodes(&self) -> impl Iterator<Item = &N> + '_ {
        self.graph
            .node_indices()
            .filter_map(move |idx| self.graph.node_weight(idx))
    }

    /// Borrowed view over stored edges. Undirected edges appear once.
    pub fn edges(&self) -> Edges<'_, N, Ty> {
        Edges {
            graph: &self.graph,
            inner: self.graph.edge_references(),
        }
    }

    /// All neighbours. For directed graphs this is successors only.
    pub fn neighbors(&self, node: &N) -> Option<Neighbors<'_, N, Ty>> {
        self.neighbors_directed(node, Direction::Outgoing)
    }

    /// Neighbours in one direction. Undirected graphs ignore `dir`.
    pub fn neighbors_directed(&self, node: &N, dir: Direction) -> Option<Neighbors<'_, N, Ty>> {
        let idx = self.node_index(node)?;
        Some(Neighbors {
            graph: &self.graph,
            inner: self.graph.neighbors_directed(idx, dir),
        })
    }

    /// Breadth-first reach from `node` along `dir`, excluding `node` unless a cycle returns to it.
    pub fn reachable(&self, node: &N, dir: Direction) -> Option<HashSet<N>> {
        let start = self.node_index(node)?;
        let mut seen: HashSet<NodeIndex> = HashSet::new();
        let mut queue = VecDeque::from([start]);
        while let Some(current) = queue.pop_front() {
            for next in self.graph.neighbors_directed(current, dir) {
                if seen.insert(next) {
                    queue.push_back(next);
                }
            }
        }
        Some(
            seen.into_iter()
                .filter_map(|idx| self.graph.node_weight(idx).cloned())
                .collect(),
        )
    }

    /// Drop every edge, keeping nodes.
    pub fn clear_edges(&mut self) {
        self.graph.clear_edges();
    }

    pub fn clear(&mut self) {
        self.graph.clear();
        self.index.clear();
    }

    /// Induced subgraph over the given ids. Unknown ids are ignored.
    pub fn subgraph(&self, keep: &HashSet<N>) -> Self {
        let mut sub = Self::new();
        for node in self.nodes().filter(|n| keep.contains(*n)) {
            sub.add_node(node.clone());
        }
        for (u, v) in self.edges() {
            if keep.contains(u) && keep.contains(v) {
                sub.add_edge(u.clone(), v.clone());
            }
        }
        sub
    }

    /// Underlying petgraph storage, for composing with `petgraph::algo`.
    pub fn inner(&self) -> &StableGraph<N, (), Ty> {
        &self.graph
    }
}

impl<N: NodeId> EdgeGraph<N, Directed> {
    /// Direct successors: `node -> m`.
    pub fn successors(&self, node: &N) -> Option<Neighbors<'_, N, Directed>> {
        self.neighbors_directed(node, Direction::Outgoing)
    }

    /// Direct predecessors: `m -> node`.
    pub fn predecessors(&self, node: &N) -> Option<Neighbors<'_, N, Directed>> {
        self.neighbors_directed(node, Direction::Incoming)
    }

    pub fn is_acyclic(&self) -> bool {
        !petgraph::algo::is_cyclic_directed(&self.graph)
    }
}

impl<N: NodeId> EdgeGraph<N, Undirected> {
    /// Lazily yield one node set per connected component.
    pub fn connected_components(&self) -> Components<'_, N> {
        Components {
            graph: &self.graph,
            order: self.graph.node_indices().collect(),
            next: 0,
            seen: HashSet::new(),
        }
    }

    /// First node carrying a self-loop, if any.
    pub fn self_loop(&self) -> Option<&N> {
        self.graph
            .edge_references()
            .find(|e| e.source() == e.target())
            .and_then(|e| self.graph.node_weight(e.source()))
    }
}

impl<N: NodeId, Ty: EdgeType> Default for EdgeGraph<N, Ty> {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over `(u, v)` node-id pairs of an edge graph.
pub struct Edges<'a, N, Ty: EdgeType> {
    graph: &'a StableGraph<N, (), Ty>,
    inner: stable_graph::EdgeReferences<'a, ()>,
}

impl<N, Ty: EdgeType> fmt::Debug for Edges<'_, N, Ty> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Edges")
            .field("edge_count", &self.graph.edge_count())
            .finish_non_exhaustive()
    }
}

impl<'a, N, Ty: EdgeType> Iterator for Edges<'a, N, Ty> {
    type Item = (&'a N, &'a N);

    fn next(&mut self) -> Option<Self::Item> {
        let graph = self.graph;
        self.inner.find_map(|e| {
            Some((graph.node_weight(e.source())?, graph.node_weight(e.target())?))
        })
    }
}

/// Iterator over adjacent node ids.
pub struct Neighbors<'a, N, Ty: EdgeType> {
    graph: &'a StableGraph<N, (), Ty>,
    inner: stable_graph::Neighbors<'a, ()>,
}

impl<N, Ty: EdgeType> fmt::Debug for Neighbors<'_, N, Ty> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Neighbors").finish_non_exhaustive()
    }
}

impl<'a, N, Ty: EdgeType> Iterator for Neighbors<'a, N, Ty> {
    type Item = &'a N;

    fn next(&mut self) -> Option<Self::Item> {
        let graph = self.graph;
        self.inner.find_map(|idx| graph.node_weight(idx))
    }
}

/// Lazy connected-components walk over an undirected edge graph.
pub struct Components<'a, N> {
    graph: &'a StableGraph<N, (), Undirected>,
    order: Vec<NodeIndex>,
    next: usize,
    seen: HashSet<NodeIndex>,
}

impl<N> fmt::Debug for Components<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Components")
            .field("visited", &self.seen.len())
            .field("remaining", &(self.order.len() - self.next))
            .finish_non_exhaustive()
    }
}

impl<N: NodeId> Iterator for Components<'_, N> {
    type Item = HashSet<N>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.next < self.order.len() {
            let start = self.order[self.next];
            self.next += 1;
            if !self.seen.insert(start) {
                continue;
            }

            let mut component = HashSet::new();
            let mut queue = VecDeque::from([start]);
            while let Some(current) = queue.pop_front() {
                if let Some(node) = self.graph.node_weight(current) {
                    component.insert(node.clone());
                }
                for neighbor in self.graph.neighbors(current) {
                    if self.seen.insert(neighbor) {
                        queue.push_back(neighbor);
                    }
                }
            }
            return Some(component);
        }
        None
    }
}
