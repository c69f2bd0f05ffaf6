//! Read-only binding-graph model and query surface.

pub mod edge;
pub mod key;
pub mod node;

pub use edge::{DependencyEdge, EdgeId, NodeId};
pub use key::{
    view_model_map_qualifier, view_model_marker, AnnotationType, ContributionId, Key,
};
pub use node::{Binding, BindingKind, ComponentNode, Node};

/// Query surface of a fully-resolved, immutable binding graph.
///
/// The framework materializes one snapshot per validation run and hands it
/// to plugins by reference; plugins only read. `node` returns `None` for an
/// identifier the snapshot does not contain — callers are expected to treat
/// an unresolvable endpoint as unclassifiable rather than fail.
pub trait BindingGraph {
    /// The root component this graph was resolved from.
    fn root_component(&self) -> &ComponentNode;

    /// All dependency edges, in the snapshot's enumeration order.
    fn dependency_edges(&self) -> Vec<DependencyEdge>;

    /// Resolve a node identifier to its node.
    fn node(&self, id: NodeId) -> Option<&Node>;
}
