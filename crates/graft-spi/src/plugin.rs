//! Plugin contract and registry for binding-graph validation passes.

use linkme::distributed_slice;

use crate::diagnostics::DiagnosticReporter;
use crate::graph::BindingGraph;

/// A validation pass over a resolved binding graph.
///
/// Plugins only read the graph and only append diagnostics; they never fail
/// and never halt the host build themselves.
pub trait BindingGraphPlugin: Sync {
    /// Stable name, used for discovery and logging.
    fn name(&self) -> &'static str;

    /// Visit one immutable graph snapshot and report findings.
    fn visit_graph(&self, graph: &dyn BindingGraph, reporter: &mut dyn DiagnosticReporter);
}

/// Registry of discoverable plugins.
///
/// Plugin crates register with one static each:
///
/// ```ignore
/// #[distributed_slice(PLUGINS)]
/// static MY_PLUGIN: &'static dyn BindingGraphPlugin = &MyPlugin;
/// ```
#[distributed_slice]
pub static PLUGINS: [&'static dyn BindingGraphPlugin];

/// Run every registered plugin over one graph snapshot.
pub fn run_registered(graph: &dyn BindingGraph, reporter: &mut dyn DiagnosticReporter) {
    run_plugins(PLUGINS.iter().copied(), graph, reporter);
}

/// Run an explicit plugin table over one graph snapshot.
///
/// For hosts that assemble their own pass list instead of relying on
/// link-time discovery.
pub fn run_plugins<'a>(
    plugins: impl IntoIterator<Item = &'a dyn BindingGraphPlugin>,
    graph: &dyn BindingGraph,
    reporter: &mut dyn DiagnosticReporter,
) {
    for plugin in plugins {
        tracing::debug!(plugin = plugin.name(), "running binding-graph plugin");
        plugin.visit_graph(graph, reporter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{Diagnostic, Severity};
    use crate::graph::{ComponentNode, DependencyEdge, EdgeId, Node, NodeId};

    struct EmptyGraph {
        root: ComponentNode,
    }

    impl BindingGraph for EmptyGraph {
        fn root_component(&self) -> &ComponentNode {
            &self.root
        }

        fn dependency_edges(&self) -> Vec<DependencyEdge> {
            Vec::new()
        }

        fn node(&self, _id: NodeId) -> Option<&Node> {
            None
        }
    }

    struct CountingSink(Vec<Diagnostic>);

    impl DiagnosticReporter for CountingSink {
        fn report_dependency(
            &mut self,
            severity: Severity,
            edge: &DependencyEdge,
            message: &str,
        ) {
            self.0.push(Diagnostic {
                severity,
                edge: edge.id,
                message: message.to_string(),
            });
        }
    }

    struct AlwaysReports;

    impl BindingGraphPlugin for AlwaysReports {
        fn name(&self) -> &'static str {
            "always-reports"
        }

        fn visit_graph(&self, _graph: &dyn BindingGraph, reporter: &mut dyn DiagnosticReporter) {
            let edge = DependencyEdge {
                id: EdgeId(0),
                source: NodeId(0),
                target: NodeId(1),
            };
            reporter.report_dependency(Severity::Warning, &edge, "reported");
        }
    }

    #[test]
    fn explicit_table_runs_each_plugin_once() {
        let graph = EmptyGraph {
            root: ComponentNode::top_level("app::AppComponent"),
        };
        let mut sink = CountingSink(Vec::new());
        let plugins: [&dyn BindingGraphPlugin; 2] = [&AlwaysReports, &AlwaysReports];
        run_plugins(plugins, &graph, &mut sink);
        assert_eq!(sink.0.len(), 2);
        assert!(sink.0.iter().all(|d| d.severity == Severity::Warning));
    }
}
