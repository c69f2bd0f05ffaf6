//! Diagnostic reporting surface consumed by validation passes.

use serde::{Deserialize, Serialize};

use crate::graph::{DependencyEdge, EdgeId};

/// Severity of a reported diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    Error,
    Warning,
}

/// One recorded diagnostic, attributed to a dependency edge.
///
/// The host maps the edge back to its source location when rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub edge: EdgeId,
    pub message: String,
}

/// Append-only sink for diagnostics produced during one validation run.
///
/// Reporting never fails; the host decides how recorded diagnostics affect
/// its build.
pub trait DiagnosticReporter {
    /// Record a diagnostic against a dependency edge.
    fn report_dependency(&mut self, severity: Severity, edge: &DependencyEdge, message: &str);
}
