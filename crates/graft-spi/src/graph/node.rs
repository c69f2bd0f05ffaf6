//! Graph nodes — bindings and component roots as a tagged variant.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::key::{AnnotationType, Key};

/// How a binding satisfies its key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BindingKind {
    /// Synthesized from an `#[inject]` constructor.
    ConstructorInjection,
    /// Declared explicitly by a provision method in a module.
    ProvisionMethod,
    /// Exposed by a component dependency.
    ComponentProvision,
    /// One entry contributed into a map multibinding.
    MultibindingMap,
    /// One entry contributed into a set multibinding.
    MultibindingSet,
    /// Alias of another binding (`#[binds]`-style delegation).
    Delegate,
}

/// A resolved way to satisfy a dependency for a given key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Binding {
    pub key: Key,
    pub kind: BindingKind,
    /// Annotations carried by the bound type's declaration.
    pub type_annotations: SmallVec<[AnnotationType; 2]>,
}

impl Binding {
    pub fn new(key: Key, kind: BindingKind) -> Self {
        Self {
            key,
            kind,
            type_annotations: SmallVec::new(),
        }
    }

    /// Attach an annotation found on the bound type's declaration.
    pub fn with_type_annotation(mut self, annotation: AnnotationType) -> Self {
        self.type_annotations.push(annotation);
        self
    }

    /// Whether the bound type's declaration carries `annotation`.
    pub fn is_type_annotated(&self, annotation: &AnnotationType) -> bool {
        self.type_annotations.iter().any(|a| a == annotation)
    }
}

/// A component root in the graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentNode {
    /// Canonical path of the component declaration.
    pub path: String,
    /// True when this root is a nested subcomponent rather than the
    /// top-level component — the graph is then a partial snapshot.
    pub is_subcomponent: bool,
}

impl ComponentNode {
    pub fn top_level(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            is_subcomponent: false,
        }
    }

    pub fn subcomponent(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            is_subcomponent: true,
        }
    }
}

/// A node in the binding graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Node {
    Binding(Binding),
    Component(ComponentNode),
}

impl Node {
    /// The binding carried by this node, if it is one.
    pub fn as_binding(&self) -> Option<&Binding> {
        match self {
            Node::Binding(binding) => Some(binding),
            Node::Component(_) => None,
        }
    }
}
