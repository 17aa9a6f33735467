//! Acyclic directed mixed graph (ADMG).
//!
//! Three fixed roles share one node set:
//! - directed edges (`x -> y`): causal effects, must stay acyclic
//! - bidirected edges (`x <-> y`): latent confounders
//! - undirected edges (`x -- y`): selection bias
//!
//! Storage is a [`MixedEdgeGraph`]; ancestral queries come from
//! [`AncestralQueries`] through [`HasDirectedRole`].

use std::collections::HashSet;

use mixgraph_core::errors::{CausalError, RegistryError};
use mixgraph_core::{
    AcyclicityCheck, AdmgConfig, Attributes, EdgeRole, EdgeRoleNames, MixGraphResult, NodeId,
};
use petgraph::{Directed, Undirected};
use tracing::{info, warn};

use crate::algorithms::{dag_enforcement, m_separation};
use crate::ancestral::HasDirectedRole;
use crate::convert::{self, LabeledDiGraph};
use crate::graph::{
    Components, DiEdgeGraph, EdgeInput, Edges, MixedEdgeGraph, Nodes, SubGraph, UnEdgeGraph,
};

/// An ADMG over node ids `N`.
///
/// Construction either yields a graph whose directed role is acyclic or
/// fails without exposing a partial graph.
#[derive(Debug, Clone)]
pub struct Admg<N: NodeId> {
    graph: MixedEdgeGraph<N>,
    config: AdmgConfig,
}

/// Step-by-step ADMG construction.
#[derive(Debug, Clone)]
pub struct AdmgBuilder<N: NodeId> {
    directed: EdgeInput<N, Directed>,
    bidirected: EdgeInput<N, Undirected>,
    undirected: EdgeInput<N, Undirected>,
    config: AdmgConfig,
    name: String,
    attrs: Attributes,
}

impl<N: NodeId> AdmgBuilder<N> {
    pub fn new() -> Self {
        Self {
            directed: EdgeInput::Empty,
            bidirected: EdgeInput::Empty,
            undirected: EdgeInput::Empty,
            config: AdmgConfig::default(),
            name: String::new(),
            attrs: Attributes::new(),
        }
    }

    pub fn directed(mut self, input: impl Into<EdgeInput<N, Directed>>) -> Self {
        self.directed = input.into();
        self
    }

    pub fn bidirected(mut self, input: impl Into<EdgeInput<N, Undirected>>) -> Self {
        self.bidirected = input.into();
        self
    }

    pub fn undirected(mut self, input: impl Into<EdgeInput<N, Undirected>>) -> Self {
        self.undirected = input.into();
        self
    }

    pub fn config(mut self, config: AdmgConfig) -> Self {
        self.config = config;
        self
    }

    pub fn edge_names(mut self, names: EdgeRoleNames) -> Self {
        self.config.edge_names = names;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn attr(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }

    /// Build the three role graphs, register them, and validate.
    pub fn build(self) -> MixGraphResult<Admg<N>> {
        let names = &self.config.edge_names;
        names.validate()?;

        let directed = self.directed.build();
        let bidirected = self.bidirected.build();
        let undirected = self.undirected.build();

        ensure_simple(&bidirected, &names.bidirected)?;
        ensure_simple(&undirected, &names.undirected)?;
        if let Some(cycle) = dag_enforcement::find_cycles(&directed).first() {
            let cycle = dag_enforcement::describe_cycle(cycle);
            warn!(%cycle, "rejecting ADMG: directed edges contain a cycle");
            return Err(CausalError::NotADag { cycle }.into());
        }

        let mut graph = MixedEdgeGraph::new()
            .with_name(self.name)
            .with_attrs(self.attrs);
        graph.add_edge_type(directed, names.directed.clone())?;
        graph.add_edge_type(bidirected, names.bidirected.clone())?;
        graph.add_edge_type(undirected, names.undirected.clone())?;
        graph.synchronize_nodes();

        info!(
            nodes = graph.number_of_nodes(),
            edges = graph.number_of_edges(None)?,
            "constructed ADMG"
        );
        Ok(Admg {
            graph,
            config: self.config,
        })
    }
}

impl<N: NodeId> Default for AdmgBuilder<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: NodeId> Admg<N> {
    /// Empty ADMG with default role names.
    pub fn new() -> Self {
        let config = AdmgConfig::default();
        let graph = MixedEdgeGraph::from_registry(role_graphs(&config.edge_names).collect());
        Self { graph, config }
    }

    /// Empty ADMG with the role names and acyclicity policy from `config`.
    ///
    /// Fails with `InvalidEdgeNames` if the role names are empty or clash.
    pub fn with_config(config: AdmgConfig) -> MixGraphResult<Self> {
        config.edge_names.validate()?;
        let graph = MixedEdgeGraph::from_graphs(role_graphs(&config.edge_names))?;
        Ok(Self { graph, config })
    }

    pub fn builder() -> AdmgBuilder<N> {
        AdmgBuilder::new()
    }

    /// Build from plain edge lists with default names.
    pub fn from_edges(
        directed: Vec<(N, N)>,
        bidirected: Vec<(N, N)>,
        undirected: Vec<(N, N)>,
    ) -> MixGraphResult<Self> {
        Self::builder()
            .directed(directed)
            .bidirected(bidirected)
            .undirected(undirected)
            .build()
    }

    pub fn config(&self) -> &AdmgConfig {
        &self.config
    }

    pub fn edge_names(&self) -> &EdgeRoleNames {
        &self.config.edge_names
    }

    /// The underlying mixed-edge storage.
    pub fn mixed(&self) -> &MixedEdgeGraph<N> {
        &self.graph
    }

    pub fn into_mixed(self) -> MixedEdgeGraph<N> {
        self.graph
    }

    pub fn name(&self) -> &str {
        self.graph.name()
    }

    pub fn attrs(&self) -> &Attributes {
        self.graph.attrs()
    }

    pub fn attrs_mut(&mut self) -> &mut Attributes {
        self.graph.attrs_mut()
    }

    // ---------------------------------------------------------------------
    // Role sub-graphs
    // ---------------------------------------------------------------------

    pub fn sub_directed_graph(&self) -> MixGraphResult<&DiEdgeGraph<N>> {
        self.graph.get_directed(&self.config.edge_names.directed)
    }

    pub fn sub_bidirected_graph(&self) -> MixGraphResult<&UnEdgeGraph<N>> {
        self.graph.get_undirected(&self.config.edge_names.bidirected)
    }

    pub fn sub_undirected_graph(&self) -> MixGraphResult<&UnEdgeGraph<N>> {
        self.graph.get_undirected(&self.config.edge_names.undirected)
    }

    pub fn directed_edges(&self) -> MixGraphResult<Edges<'_, N, Directed>> {
        Ok(self.sub_directed_graph()?.edges())
    }

    pub fn bidirected_edges(&self) -> MixGraphResult<Edges<'_, N, Undirected>> {
        Ok(self.sub_bidirected_graph()?.edges())
    }

    pub fn undirected_edges(&self) -> MixGraphResult<Edges<'_, N, Undirected>> {
        Ok(self.sub_undirected_graph()?.edges())
    }

    /// Confounded components: connected components of the bidirected role.
    ///
    /// Nodes without bidirected edges come out as singletons.
    pub fn c_components(&self) -> MixGraphResult<Components<'_, N>> {
        Ok(self.sub_bidirected_graph()?.connected_components())
    }

    // ---------------------------------------------------------------------
    // Nodes
    // ---------------------------------------------------------------------

    pub fn nodes(&self) -> Nodes<'_, N> {
        self.graph.nodes()
    }

    pub fn has_node(&self, node: &N) -> bool {
        self.graph.has_node(node)
    }

    pub fn number_of_nodes(&self) -> usize {
        self.graph.number_of_nodes()
    }

    pub fn add_node(&mut self, node: N) -> MixGraphResult<()> {
        self.graph.add_node(node)
    }

    pub fn remove_node(&mut self, node: &N) -> MixGraphResult<()> {
        self.graph.remove_node(node)
    }

    pub fn neighbors(&self, node: &N) -> MixGraphResult<HashSet<&N>> {
        self.graph.neighbors(node)
    }

    // ---------------------------------------------------------------------
    // Edges
    // ---------------------------------------------------------------------

    /// Add an edge with the given role.
    ///
    /// Symmetric roles reject self-loops. Under
    /// [`AcyclicityCheck::OnMutation`] a directed edge that would close a
    /// cycle is rejected and the graph is left unchanged.
    pub fn add_edge(&mut self, u: N, v: N, role: EdgeRole) -> MixGraphResult<bool> {
        let name = self.config.edge_names.name_of(role).to_string();
        if role.is_symmetric() && u == v {
            return Err(CausalError::SelfLoop {
                node: format!("{u:?}"),
                edge_type: name,
            }
            .into());
        }
        if role == EdgeRole::Directed
            && self.config.acyclicity == AcyclicityCheck::OnMutation
            && dag_enforcement::would_create_cycle(self.sub_directed_graph()?, &u, &v)
        {
            warn!(source = ?u, target = ?v, "rejecting directed edge: would create cycle");
            return Err(CausalError::NotADag {
                cycle: format!("adding {u:?} -> {v:?} closes a directed cycle"),
            }
            .into());
        }
        self.graph.add_edge(u, v, &name)
    }

    /// Add an edge by edge-type name; role names route through [`Admg::add_edge`].
    pub fn add_edge_by_name(&mut self, u: N, v: N, edge_type: &str) -> MixGraphResult<bool> {
        match self.config.edge_names.role_of(edge_type) {
            Some(role) => self.add_edge(u, v, role),
            None => self.graph.add_edge(u, v, edge_type),
        }
    }

    pub fn remove_edge(&mut self, u: &N, v: &N, role: EdgeRole) -> MixGraphResult<()> {
        let name = self.config.edge_names.name_of(role).to_string();
        self.graph.remove_edge(u, v, &name)
    }

    pub fn has_edge(&self, u: &N, v: &N, role: EdgeRole) -> bool {
        self.graph
            .has_edge(u, v, Some(self.config.edge_names.name_of(role)))
    }

    /// Register an extra edge type. Role names are reserved.
    pub fn add_edge_type(
        &mut self,
        graph: impl Into<SubGraph<N>>,
        name: impl Into<String>,
    ) -> MixGraphResult<()> {
        let name = name.into();
        self.ensure_not_role(&name)?;
        self.graph.add_edge_type(graph, name)
    }

    /// Unregister an extra edge type. Role names are reserved.
    pub fn remove_edge_type(&mut self, name: &str) -> MixGraphResult<SubGraph<N>> {
        self.ensure_not_role(name)?;
        self.graph.remove_edge_type(name)
    }

    /// Re-check that the directed role is acyclic.
    ///
    /// Only needed under [`AcyclicityCheck::ConstructionOnly`].
    pub fn validate(&self) -> MixGraphResult<()> {
        match dag_enforcement::find_cycles(self.sub_directed_graph()?).first() {
            Some(cycle) => Err(CausalError::NotADag {
                cycle: dag_enforcement::describe_cycle(cycle),
            }
            .into()),
            None => Ok(()),
        }
    }

    /// Whether `x` and `y` are m-separated given `z`.
    pub fn m_separated(&self, x: &HashSet<N>, y: &HashSet<N>, z: &HashSet<N>) -> MixGraphResult<bool> {
        m_separation::m_separated(&self.graph, x, y, z, &self.config.edge_names)
    }

    /// Flatten into a labelled `DiGraph` tagged with graph type `ADMG`.
    pub fn to_multi_digraph(&self) -> LabeledDiGraph<N> {
        convert::to_multi_digraph(&self.graph, "ADMG")
    }

    fn ensure_not_role(&self, name: &str) -> MixGraphResult<()> {
        if self.config.edge_names.contains(name) {
            return Err(RegistryError::ReservedEdgeType {
                name: name.to_string(),
            }
            .into());
        }
        Ok(())
    }
}

impl<N: NodeId> Default for Admg<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: NodeId> HasDirectedRole<N> for Admg<N> {
    fn sub_directed_graph(&self) -> MixGraphResult<&DiEdgeGraph<N>> {
        Admg::sub_directed_graph(self)
    }
}

/// One empty sub-graph per role, keyed by its configured name.
fn role_graphs<N: NodeId>(
    names: &EdgeRoleNames,
) -> impl Iterator<Item = (String, SubGraph<N>)> + '_ {
    EdgeRole::ALL.into_iter().map(move |role| {
        let sub = match role {
            EdgeRole::Directed => SubGraph::directed(),
            EdgeRole::Bidirected | EdgeRole::Undirected => SubGraph::undirected(),
        };
        (names.name_of(role).to_string(), sub)
    })
}

fn ensure_simple<N: NodeId>(graph: &UnEdgeGraph<N>, edge_type: &str) -> MixGraphResult<()> {
    match graph.self_loop() {
        Some(node) => Err(CausalError::SelfLoop {
            node: format!("{node:?}"),
            edge_type: edge_type.to_string(),
        }
        .into()),
        None => Ok(()),
    }
}
