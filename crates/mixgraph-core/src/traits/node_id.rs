use std::fmt::Debug;
use std::hash::Hash;

/// Opaque node identifier shared by every sub-graph of a mixed-edge graph.
///
/// Blanket-implemented for any cloneable, hashable, ordered type, so
/// integers, strings, and small enums all work as node ids.
pub trait NodeId: Clone + Eq + Hash + Ord + Debug {}

impl<T> NodeId for T where T: Clone + Eq + Hash + Ord + Debug {}
