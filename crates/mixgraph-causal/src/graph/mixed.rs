//! MixedEdgeGraph: several single-edge-type graphs over one node set.

use std::collections::{BTreeMap, HashSet};
use std::fmt;

use mixgraph_core::errors::RegistryError;
use mixgraph_core::{Attributes, EdgeKind, MixGraphError, MixGraphResult, NodeId};
use tracing::debug;

use super::edge_graph::{DiEdgeGraph, UnEdgeGraph};
use super::sub_graph::SubGraph;

/// A graph whose edges come in several named types.
///
/// Each edge type is stored in its own [`SubGraph`]. The node set of the
/// mixed graph is the union of the sub-graph node sets; `add_node`,
/// `remove_node`, and `add_edge` touch every registered sub-graph so that the
/// union stays a single coherent node set. Registering a new edge type does
/// not copy existing nodes into it; call [`MixedEdgeGraph::synchronize_nodes`]
/// for that.
#[derive(Debug, Clone)]
pub struct MixedEdgeGraph<N: NodeId> {
    graphs: BTreeMap<String, SubGraph<N>>,
    attrs: Attributes,
    name: String,
}

impl<N: NodeId> MixedEdgeGraph<N> {
    pub fn new() -> Self {
        Self {
            graphs: BTreeMap::new(),
            attrs: Attributes::new(),
            name: String::new(),
        }
    }

    /// Wrap an already de-duplicated registry.
    pub(crate) fn from_registry(graphs: BTreeMap<String, SubGraph<N>>) -> Self {
        Self {
            graphs,
            ..Self::new()
        }
    }

    /// Build from `(name, sub_graph)` pairs. Fails on the first duplicate name.
    pub fn from_graphs<I, S>(graphs: I) -> MixGraphResult<Self>
    where
        I: IntoIterator<Item = (S, SubGraph<N>)>,
        S: Into<String>,
    {
        let mut mixed = Self::new();
        for (name, graph) in graphs {
            mixed.add_edge_type(graph, name)?;
        }
        Ok(mixed)
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_attrs(mut self, attrs: Attributes) -> Self {
        self.attrs.extend(attrs);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn attrs(&self) -> &Attributes {
        &self.attrs
    }

    pub fn attrs_mut(&mut self) -> &mut Attributes {
        &mut self.attrs
    }

    // ---------------------------------------------------------------------
    // Edge-type registry
    // ---------------------------------------------------------------------

    /// Register `graph` under `name`.
    ///
    /// Duplicate names are rejected and the registered graph is left untouched.
    pub fn add_edge_type(
        &mut self,
        graph: impl Into<SubGraph<N>>,
        name: impl Into<String>,
    ) -> MixGraphResult<()> {
        let name = name.into();
        if self.graphs.contains_key(&name) {
            return Err(RegistryError::DuplicateEdgeType { name }.into());
        }
        let graph = graph.into();
        debug!(edge_type = %name, kind = %graph.kind(), "registering edge type");
        self.graphs.insert(name, graph);
        Ok(())
    }

    /// Unregister and return the sub-graph stored under `name`.
    pub fn remove_edge_type(&mut self, name: &str) -> MixGraphResult<SubGraph<N>> {
        let graph = self
            .graphs
            .remove(name)
            .ok_or_else(|| unknown_edge_type(name))?;
        debug!(edge_type = %name, "removed edge type");
        Ok(graph)
    }

    pub fn has_edge_type(&self, name: &str) -> bool {
        self.graphs.contains_key(name)
    }

    /// Registered edge-type names, in sorted order.
    pub fn edge_types(&self) -> impl Iterator<Item = &str> + '_ {
        self.graphs.keys().map(String::as_str)
    }

    pub fn number_of_edge_types(&self) -> usize {
        self.graphs.len()
    }

    /// All registered sub-graphs keyed by name.
    pub fn graphs(&self) -> &BTreeMap<String, SubGraph<N>> {
        &self.graphs
    }

    pub fn get_graph(&self, name: &str) -> MixGraphResult<&SubGraph<N>> {
        self.graphs.get(name).ok_or_else(|| unknown_edge_type(name))
    }

    /// The directed sub-graph registered under `name`.
    pub fn get_directed(&self, name: &str) -> MixGraphResult<&DiEdgeGraph<N>> {
        let graph = self.get_graph(name)?;
        graph
            .as_directed()
            .ok_or_else(|| kind_mismatch(name, EdgeKind::Directed, graph.kind()))
    }

    /// The undirected sub-graph registered under `name`.
    pub fn get_undirected(&self, name: &str) -> MixGraphResult<&UnEdgeGraph<N>> {
        let graph = self.get_graph(name)?;
        graph
            .as_undirected()
            .ok_or_else(|| kind_mismatch(name, EdgeKind::Undirected, graph.kind()))
    }

    pub(crate) fn get_graph_mut(&mut self, name: &str) -> MixGraphResult<&mut SubGraph<N>> {
        self.graphs
            .get_mut(name)
            .ok_or_else(|| unknown_edge_type(name))
    }

    // ---------------------------------------------------------------------
    // Unified node view
    // ---------------------------------------------------------------------

    /// Every node that appears in at least one sub-graph, each yielded once.
    pub fn nodes(&self) -> Nodes<'_, N> {
        Nodes {
            inner: Box::new(self.graphs.values().flat_map(|g| g.nodes())),
            seen: HashSet::new(),
        }
    }

    pub fn has_node(&self, node: &N) -> bool {
        self.graphs.values().any(|g| g.contains_node(node))
    }

    pub fn number_of_nodes(&self) -> usize {
        self.nodes().count()
    }

    /// Add `node` to every registered sub-graph.
    pub fn add_node(&mut self, node: N) -> MixGraphResult<()> {
        if self.graphs.is_empty() {
            return Err(MixGraphError::EmptyRegistry);
        }
        for graph in self.graphs.values_mut() {
            graph.add_node(node.clone());
        }
        Ok(())
    }

    pub fn add_nodes_from<I>(&mut self, nodes: I) -> MixGraphResult<()>
    where
        I: IntoIterator<Item = N>,
    {
        for node in nodes {
            self.add_node(node)?;
        }
        Ok(())
    }

    /// Remove `node` and its incident edges from every sub-graph.
    pub fn remove_node(&mut self, node: &N) -> MixGraphResult<()> {
        let mut found = false;
        for graph in self.graphs.values_mut() {
            found |= graph.remove_node(node);
        }
        if found {
            Ok(())
        } else {
            Err(MixGraphError::node_not_found(node))
        }
    }

    /// Copy the union node set into every sub-graph.
    pub fn synchronize_nodes(&mut self) {
        let all: Vec<N> = self.nodes().cloned().collect();
        for graph in self.graphs.values_mut() {
            for node in &all {
                graph.add_node(node.clone());
            }
        }
    }

    /// Union of adjacent nodes across every edge type.
    pub fn neighbors(&self, node: &N) -> MixGraphResult<HashSet<&N>> {
        if !self.has_node(node) {
            return Err(MixGraphError::node_not_found(node));
        }
        Ok(self.graphs.values().flat_map(|g| g.adjacent(node)).collect())
    }

    // ---------------------------------------------------------------------
    // Edges
    // ---------------------------------------------------------------------

    /// Add `u -> v` (or `u -- v`) to the `edge_type` sub-graph.
    ///
    /// Endpoints are added to every sub-graph. Returns `false` if the edge
    /// already existed.
    pub fn add_edge(&mut self, u: N, v: N, edge_type: &str) -> MixGraphResult<bool> {
        if !self.graphs.contains_key(edge_type) {
            return Err(unknown_edge_type(edge_type));
        }
        for graph in self.graphs.values_mut() {
            graph.add_node(u.clone());
            graph.add_node(v.clone());
        }
        let graph = self.get_graph_mut(edge_type)?;
        Ok(graph.add_edge(u, v))
    }

    pub fn add_edges_from<I>(&mut self, edges: I, edge_type: &str) -> MixGraphResult<()>
    where
        I: IntoIterator<Item = (N, N)>,
    {
        for (u, v) in edges {
            self.add_edge(u, v, edge_type)?;
        }
        Ok(())
    }

    pub fn remove_edge(&mut self, u: &N, v: &N, edge_type: &str) -> MixGraphResult<()> {
        let graph = self.get_graph_mut(edge_type)?;
        if graph.remove_edge(u, v) {
            Ok(())
        } else {
            Err(MixGraphError::EdgeNotFound {
                tail: format!("{u:?}"),
                head: format!("{v:?}"),
                edge_type: edge_type.to_string(),
            })
        }
    }

    /// Whether the edge exists in `edge_type`, or in any edge type when `None`.
    pub fn has_edge(&self, u: &N, v: &N, edge_type: Option<&str>) -> bool {
        match edge_type {
            Some(name) => self.graphs.get(name).is_some_and(|g| g.has_edge(u, v)),
            None => self.graphs.values().any(|g| g.has_edge(u, v)),
        }
    }

    /// Borrowed edge view of one edge type.
    pub fn edges(&self, edge_type: &str) -> MixGraphResult<Box<dyn Iterator<Item = (&N, &N)> + '_>> {
        Ok(self.get_graph(edge_type)?.edges())
    }

    /// Edge count of one edge type, or of all edge types when `None`.
    pub fn number_of_edges(&self, edge_type: Option<&str>) -> MixGraphResult<usize> {
        match edge_type {
            Some(name) => Ok(self.get_graph(name)?.edge_count()),
            None => Ok(self.graphs.values().map(SubGraph::edge_count).sum()),
        }
    }

    /// Remove all nodes and edges, keeping the registered edge types.
    pub fn clear(&mut self) {
        for graph in self.graphs.values_mut() {
            graph.clear();
        }
    }

    pub fn clear_edges(&mut self) {
        for graph in self.graphs.values_mut() {
            graph.clear_edges();
        }
    }

    // ---------------------------------------------------------------------
    // Derived graphs
    // ---------------------------------------------------------------------

    /// Induced subgraph on `nodes`, as an independent copy.
    pub fn subgraph<I>(&self, nodes: I) -> Self
    where
        I: IntoIterator<Item = N>,
    {
        let keep: HashSet<N> = nodes.into_iter().collect();
        Self {
            graphs: self
                .graphs
                .iter()
                .map(|(name, g)| (name.clone(), g.subgraph(&keep)))
                .collect(),
            attrs: self.attrs.clone(),
            name: self.name.clone(),
        }
    }

    /// Every edge of every type, direction dropped, over the full node set.
    pub fn to_undirected(&self) -> UnEdgeGraph<N> {
        let mut graph = UnEdgeGraph::new();
        for node in self.nodes() {
            graph.add_node(node.clone());
        }
        for sub in self.graphs.values() {
            for (u, v) in sub.edges() {
                graph.add_edge(u.clone(), v.clone());
            }
        }
        graph
    }
}

impl<N: NodeId> Default for MixedEdgeGraph<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// De-duplicating iterator over the union node set.
pub struct Nodes<'a, N> {
    inner: Box<dyn Iterator<Item = &'a N> + 'a>,
    seen: HashSet<&'a N>,
}

impl<N: fmt::Debug> fmt::Debug for Nodes<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Nodes")
            .field("seen", &self.seen)
            .finish_non_exhaustive()
    }
}

impl<'a, N: NodeId> Iterator for Nodes<'a, N> {
    type Item = &'a N;

    fn next(&mut self) -> Option<Self::Item> {
        let seen = &mut self.seen;
        self.inner.find(|node| seen.insert(*node))
    }
}

fn unknown_edge_type(name: &str) -> MixGraphError {
    RegistryError::UnknownEdgeType {
        name: name.to_string(),
    }
    .into()
}

fn kind_mismatch(name: &str, expected: EdgeKind, found: EdgeKind) -> MixGraphError {
    RegistryError::EdgeKindMismatch {
        name: name.to_string(),
        expected,
        found,
    }
    .into()
}
