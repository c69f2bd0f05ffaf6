//! Graph identifiers and dependency edges.

use serde::{Deserialize, Serialize};

/// Opaque identifier of a node within one graph snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub u32);

/// Opaque identifier of an edge within one graph snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EdgeId(pub u32);

/// A dependency edge: the source node consumes the target node's binding.
///
/// Subcomponent edges and other structural relationships are a different
/// edge kind and are never yielded by the dependency-edge query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyEdge {
    pub id: EdgeId,
    pub source: NodeId,
    pub target: NodeId,
}
