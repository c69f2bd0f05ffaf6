//! # graft-spi
//!
//! Service-provider interface for Graft binding-graph validation passes.
//! Exposes the read-only graph model and query trait, the diagnostic
//! reporting surface, and the plugin contract through which validation
//! passes are discovered and invoked by the host framework.
//!
//! This crate never builds or mutates graphs; the framework hands plugins a
//! fully-resolved immutable snapshot and collects whatever they report.

pub mod diagnostics;
pub mod graph;
pub mod plugin;

pub use diagnostics::{Diagnostic, DiagnosticReporter, Severity};
pub use graph::{
    AnnotationType, Binding, BindingGraph, BindingKind, ComponentNode, ContributionId,
    DependencyEdge, EdgeId, Key, Node, NodeId,
};
pub use plugin::{run_plugins, run_registered, BindingGraphPlugin, PLUGINS};
