//! Chain graph: directed and undirected edges, no cycle through a directed edge.

use std::collections::HashSet;

use mixgraph_core::errors::{CausalError, RegistryError};
use mixgraph_core::{EdgeRole, EdgeRoleNames, MixGraphResult, NodeId};
use petgraph::{Directed, Undirected};
use tracing::{info, warn};

use crate::algorithms::{chain_graph, m_separation};
use crate::ancestral::HasDirectedRole;
use crate::graph::{Components, DiEdgeGraph, EdgeInput, Edges, MixedEdgeGraph, UnEdgeGraph};

/// A chain graph over node ids `N`.
///
/// Uses the directed and undirected role names of an [`EdgeRoleNames`];
/// the bidirected role is not registered.
#[derive(Debug, Clone)]
pub struct ChainGraph<N: NodeId> {
    graph: MixedEdgeGraph<N>,
    names: EdgeRoleNames,
}

impl<N: NodeId> ChainGraph<N> {
    /// Build with default role names.
    pub fn new(
        directed: impl Into<EdgeInput<N, Directed>>,
        undirected: impl Into<EdgeInput<N, Undirected>>,
    ) -> MixGraphResult<Self> {
        Self::with_names(directed, undirected, EdgeRoleNames::default())
    }

    pub fn with_names(
        directed: impl Into<EdgeInput<N, Directed>>,
        undirected: impl Into<EdgeInput<N, Undirected>>,
        names: EdgeRoleNames,
    ) -> MixGraphResult<Self> {
        names.validate()?;
        let directed = directed.into().build();
        let undirected = undirected.into().build();

        if let Err(err) = chain_graph::check_chain_graph(Some(&directed), Some(&undirected)) {
            warn!(%err, "rejecting chain graph");
            return Err(err);
        }

        let mut graph = MixedEdgeGraph::new();
        graph.add_edge_type(directed, names.directed.clone())?;
        graph.add_edge_type(undirected, names.undirected.clone())?;
        graph.synchronize_nodes();
        info!(nodes = graph.number_of_nodes(), "constructed chain graph");
        Ok(Self { graph, names })
    }

    pub fn mixed(&self) -> &MixedEdgeGraph<N> {
        &self.graph
    }

    pub fn edge_names(&self) -> &EdgeRoleNames {
        &self.names
    }

    pub fn sub_directed_graph(&self) -> MixGraphResult<&DiEdgeGraph<N>> {
        self.graph.get_directed(&self.names.directed)
    }

    pub fn sub_undirected_graph(&self) -> MixGraphResult<&UnEdgeGraph<N>> {
        self.graph.get_undirected(&self.names.undirected)
    }

    pub fn directed_edges(&self) -> MixGraphResult<Edges<'_, N, Directed>> {
        Ok(self.sub_directed_graph()?.edges())
    }

    pub fn undirected_edges(&self) -> MixGraphResult<Edges<'_, N, Undirected>> {
        Ok(self.sub_undirected_graph()?.edges())
    }

    /// Connected components of the undirected role.
    pub fn chain_components(&self) -> MixGraphResult<Components<'_, N>> {
        Ok(self.sub_undirected_graph()?.connected_components())
    }

    pub fn nodes(&self) -> crate::graph::Nodes<'_, N> {
        self.graph.nodes()
    }

    pub fn add_node(&mut self, node: N) -> MixGraphResult<()> {
        self.graph.add_node(node)
    }

    pub fn remove_node(&mut self, node: &N) -> MixGraphResult<()> {
        self.graph.remove_node(node)
    }

    /// Add a directed or undirected edge, keeping the graph a valid chain graph.
    ///
    /// On rejection the graph is left unchanged.
    pub fn add_edge(&mut self, u: N, v: N, role: EdgeRole) -> MixGraphResult<bool> {
        if role == EdgeRole::Bidirected {
            return Err(RegistryError::UnknownEdgeType {
                name: self.names.bidirected.clone(),
            }
            .into());
        }
        if role == EdgeRole::Undirected && u == v {
            return Err(CausalError::SelfLoop {
                node: format!("{u:?}"),
                edge_type: self.names.undirected.clone(),
            }
            .into());
        }

        let name = self.names.name_of(role).to_string();
        let mut candidate = self.graph.clone();
        let added = candidate.add_edge(u, v, &name)?;
        if added {
            let directed = candidate.get_directed(&self.names.directed)?;
            let undirected = candidate.get_undirected(&self.names.undirected)?;
            if let Err(err) = chain_graph::check_chain_graph(Some(directed), Some(undirected)) {
                warn!(%err, "rejecting edge");
                return Err(err);
            }
        }
        self.graph = candidate;
        Ok(added)
    }

    pub fn remove_edge(&mut self, u: &N, v: &N, role: EdgeRole) -> MixGraphResult<()> {
        let name = self.names.name_of(role).to_string();
        self.graph.remove_edge(u, v, &name)
    }

    /// Whether `x` and `y` are m-separated given `z`.
    pub fn m_separated(&self, x: &HashSet<N>, y: &HashSet<N>, z: &HashSet<N>) -> MixGraphResult<bool> {
        m_separation::m_separated(&self.graph, x, y, z, &self.names)
    }
}

impl<N: NodeId> HasDirectedRole<N> for ChainGraph<N> {
    fn sub_directed_graph(&self) -> MixGraphResult<&DiEdgeGraph<N>> {
        ChainGraph::sub_directed_graph(self)
    }
}
