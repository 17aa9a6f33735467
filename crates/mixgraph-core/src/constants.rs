//! Default edge-type names and attribute keys.

/// Default name of the directed (causal) edge type.
pub const DEFAULT_DIRECTED_NAME: &str = "directed";

/// Default name of the bidirected (latent confounder) edge type.
pub const DEFAULT_BIDIRECTED_NAME: &str = "bidirected";

/// Default name of the undirected (selection bias) edge type.
pub const DEFAULT_UNDIRECTED_NAME: &str = "undirected";

/// Graph attribute recording the source graph's type on conversion.
pub const GRAPH_TYPE_KEY: &str = "graph_type";

/// Graph attribute holding a graph's name on conversion.
pub const GRAPH_NAME_KEY: &str = "name";
