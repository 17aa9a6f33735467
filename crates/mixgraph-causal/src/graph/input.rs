//! Tagged construction input for single-edge-type graphs.
//! Each input shape has its own builder; `build` dispatches on the tag.

use mixgraph_core::NodeId;
use petgraph::EdgeType;

use super::edge_graph::EdgeGraph;

/// Which shape an [`EdgeInput`] carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Empty,
    EdgeList,
    Adjacency,
    Graph,
}

/// Data used to initialise one sub-graph.
#[derive(Debug, Clone)]
pub enum EdgeInput<N: NodeId, Ty: EdgeType> {
    /// No nodes, no edges.
    Empty,
    /// `(u, v)` pairs; endpoints are created as needed.
    EdgeList(Vec<(N, N)>),
    /// `node -> [neighbours]`; nodes with no neighbours are kept as isolated nodes.
    Adjacency(Vec<(N, Vec<N>)>),
    /// An owned graph, moved in as-is.
    Graph(EdgeGraph<N, Ty>),
}

impl<N: NodeId, Ty: EdgeType> EdgeInput<N, Ty> {
    pub fn edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (N, N)>,
    {
        Self::EdgeList(edges.into_iter().collect())
    }

    pub fn adjacency<I, V>(adjacency: I) -> Self
    where
        I: IntoIterator<Item = (N, V)>,
        V: IntoIterator<Item = N>,
    {
        Self::Adjacency(
            adjacency
                .into_iter()
                .map(|(node, nbrs)| (node, nbrs.into_iter().collect()))
                .collect(),
        )
    }

    pub fn kind(&self) -> InputKind {
        match self {
            Self::Empty => InputKind::Empty,
            Self::EdgeList(_) => InputKind::EdgeList,
            Self::Adjacency(_) => InputKind::Adjacency,
            Self::Graph(_) => InputKind::Graph,
        }
    }

    /// Build the edge graph for this input.
    pub fn build(self) -> EdgeGraph<N, Ty> {
        match self {
            Self::Empty => EdgeGraph::new(),
            Self::EdgeList(edges) => from_edge_list(edges),
            Self::Adjacency(adjacency) => from_adjacency(adjacency),
            Self::Graph(graph) => graph,
        }
    }
}

impl<N: NodeId, Ty: EdgeType> Default for EdgeInput<N, Ty> {
    fn default() -> Self {
        Self::Empty
    }
}

impl<N: NodeId, Ty: EdgeType> From<EdgeGraph<N, Ty>> for EdgeInput<N, Ty> {
    fn from(graph: EdgeGraph<N, Ty>) -> Self {
        Self::Graph(graph)
    }
}

impl<N: NodeId, Ty: EdgeType> From<Vec<(N, N)>> for EdgeInput<N, Ty> {
    fn from(edges: Vec<(N, N)>) -> Self {
        Self::EdgeList(edges)
    }
}

pub fn from_edge_list<N: NodeId, Ty: EdgeType>(edges: Vec<(N, N)>) -> EdgeGraph<N, Ty> {
    let mut graph = EdgeGraph::new();
    for (u, v) in edges {
        graph.add_edge(u, v);
    }
    graph
}

pub fn from_adjacency<N: NodeId, Ty: EdgeType>(adjacency: Vec<(N, Vec<N>)>) -> EdgeGraph<N, Ty> {
    let mut graph = EdgeGraph::new();
    for (node, nbrs) in adjacency {
        graph.add_node(node.clone());
        for nbr in nbrs {
            graph.add_edge(node.clone(), nbr);
        }
    }
    graph
}
