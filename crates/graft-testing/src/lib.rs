//! # graft-testing
//!
//! Hand-assembled in-memory binding graphs and a recording diagnostic sink,
//! for exercising validation passes without the framework's resolver.

use rustc_hash::FxHashMap;

use graft_spi::{
    Binding, BindingGraph, ComponentNode, DependencyEdge, Diagnostic, DiagnosticReporter,
    EdgeId, Node, NodeId, Severity,
};

/// Errors from assembling an in-memory graph.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("edge {edge:?} references unknown node {node:?}")]
    UnknownEndpoint { edge: EdgeId, node: NodeId },
}

/// An immutable in-memory binding graph.
///
/// Dependency edges are enumerated in insertion order.
pub struct MemoryBindingGraph {
    root: ComponentNode,
    nodes: FxHashMap<NodeId, Node>,
    edges: Vec<DependencyEdge>,
}

impl BindingGraph for MemoryBindingGraph {
    fn root_component(&self) -> &ComponentNode {
        &self.root
    }

    fn dependency_edges(&self) -> Vec<DependencyEdge> {
        self.edges.clone()
    }

    fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }
}

/// Fluent builder for [`MemoryBindingGraph`].
pub struct GraphBuilder {
    root: ComponentNode,
    nodes: FxHashMap<NodeId, Node>,
    edges: Vec<DependencyEdge>,
    next_node: u32,
    next_edge: u32,
}

impl GraphBuilder {
    /// Graph rooted at a full top-level component.
    pub fn new(root_path: impl Into<String>) -> Self {
        Self::with_root(ComponentNode::top_level(root_path))
    }

    /// Graph rooted at a nested subcomponent — a partial snapshot.
    pub fn subcomponent_root(root_path: impl Into<String>) -> Self {
        Self::with_root(ComponentNode::subcomponent(root_path))
    }

    fn with_root(root: ComponentNode) -> Self {
        Self {
            root,
            nodes: FxHashMap::default(),
            edges: Vec::new(),
            next_node: 0,
            next_edge: 0,
        }
    }

    /// Add a binding node, returning its identifier.
    pub fn add_binding(&mut self, binding: Binding) -> NodeId {
        self.add_node(Node::Binding(binding))
    }

    /// Add a non-root component node, returning its identifier.
    pub fn add_component(&mut self, component: ComponentNode) -> NodeId {
        self.add_node(Node::Component(component))
    }

    fn add_node(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.next_node);
        self.next_node += 1;
        self.nodes.insert(id, node);
        id
    }

    /// Add a dependency edge: `source` consumes `target`'s binding.
    pub fn depends(&mut self, source: NodeId, target: NodeId) -> EdgeId {
        let id = EdgeId(self.next_edge);
        self.next_edge += 1;
        self.edges.push(DependencyEdge { id, source, target });
        id
    }

    /// Finish, rejecting edges that reference nodes the graph does not hold.
    pub fn build(self) -> Result<MemoryBindingGraph, GraphError> {
        for edge in &self.edges {
            for endpoint in [edge.source, edge.target] {
                if !self.nodes.contains_key(&endpoint) {
                    return Err(GraphError::UnknownEndpoint {
                        edge: edge.id,
                        node: endpoint,
                    });
                }
            }
        }
        Ok(self.build_unchecked())
    }

    /// Finish without endpoint validation.
    ///
    /// Used to assemble deliberately inconsistent snapshots when testing
    /// defensive classification paths.
    pub fn build_unchecked(self) -> MemoryBindingGraph {
        MemoryBindingGraph {
            root: self.root,
            nodes: self.nodes,
            edges: self.edges,
        }
    }
}

/// Diagnostic sink that records everything it receives, in order.
#[derive(Default)]
pub struct RecordingReporter {
    diagnostics: Vec<Diagnostic>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// Recorded diagnostics at error severity.
    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
    }
}

impl DiagnosticReporter for RecordingReporter {
    fn report_dependency(&mut self, severity: Severity, edge: &DependencyEdge, message: &str) {
        self.diagnostics.push(Diagnostic {
            severity,
            edge: edge.id,
            message: message.to_string(),
        });
    }
}
