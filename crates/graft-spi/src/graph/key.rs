//! Binding keys — bound type, optional qualifier, optional multibinding contribution.

use std::fmt;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Canonical identity of an annotation (attribute or derive macro).
///
/// Two annotation types are the same exactly when their canonical paths are
/// equal. No structural comparison of annotation members is ever performed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnnotationType {
    canonical_path: String,
}

impl AnnotationType {
    pub fn new(canonical_path: impl Into<String>) -> Self {
        Self {
            canonical_path: canonical_path.into(),
        }
    }

    pub fn canonical_path(&self) -> &str {
        &self.canonical_path
    }
}

impl fmt::Display for AnnotationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical_path)
    }
}

/// Marker annotation carried by view-model types.
///
/// Resolved once; every classification compares against this single instance.
pub fn view_model_marker() -> &'static AnnotationType {
    static MARKER: Lazy<AnnotationType> =
        Lazy::new(|| AnnotationType::new("graft::viewmodel::ViewModel"));
    &MARKER
}

/// Qualifier on the framework-internal view-model map multibinding.
///
/// The only sanctioned consumer of a view-model binding is a contribution
/// into the map this qualifier marks.
pub fn view_model_map_qualifier() -> &'static AnnotationType {
    static QUALIFIER: Lazy<AnnotationType> =
        Lazy::new(|| AnnotationType::new("graft::viewmodel::internal::ViewModelMap"));
    &QUALIFIER
}

/// Identifier of a single contribution into a map or set multibinding.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContributionId(String);

impl ContributionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// The identity of a dependency: a bound type plus an optional qualifier
/// plus an optional multibinding contribution.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Key {
    /// Canonical path of the bound type.
    pub ty: String,
    /// Qualifier distinguishing this key from other bindings of the same type.
    pub qualifier: Option<AnnotationType>,
    /// Present when this binding contributes one entry to a multibinding.
    pub contribution: Option<ContributionId>,
}

impl Key {
    /// Unqualified key for a type.
    pub fn for_type(ty: impl Into<String>) -> Self {
        Self {
            ty: ty.into(),
            qualifier: None,
            contribution: None,
        }
    }

    /// Key carrying a qualifier annotation.
    pub fn qualified(ty: impl Into<String>, qualifier: AnnotationType) -> Self {
        Self {
            ty: ty.into(),
            qualifier: Some(qualifier),
            contribution: None,
        }
    }

    /// Mark this key as a multibinding contribution.
    pub fn with_contribution(mut self, id: ContributionId) -> Self {
        self.contribution = Some(id);
        self
    }
}
