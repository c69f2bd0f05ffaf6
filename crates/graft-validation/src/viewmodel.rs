//! View-model injection rule — view models must come from the lifecycle-aware provider.

use linkme::distributed_slice;

use graft_spi::graph::{view_model_map_qualifier, view_model_marker};
use graft_spi::{
    Binding, BindingGraph, BindingGraphPlugin, BindingKind, DiagnosticReporter, Node, Severity,
    PLUGINS,
};

/// Rejects direct injection of view-model types.
///
/// A view-model binding synthesized from an `#[inject]` constructor may only
/// be consumed by the framework-internal view-model map multibinding. Any
/// other consumer must go through the lifecycle-aware `ViewModelProvider`
/// API, which manages scoping and retention for it.
///
/// Exemptions: a view-model key carrying any qualifier is a deliberately
/// distinct binding, and an explicit provision method overriding the
/// constructor binding is assumed intentional. Neither is reported.
pub struct ViewModelGraphValidator;

#[distributed_slice(PLUGINS)]
static VIEW_MODEL_VALIDATION: &'static dyn BindingGraphPlugin = &ViewModelGraphValidator;

impl BindingGraphPlugin for ViewModelGraphValidator {
    fn name(&self) -> &'static str {
        "viewmodel-validation"
    }

    fn visit_graph(&self, graph: &dyn BindingGraph, reporter: &mut dyn DiagnosticReporter) {
        self.validate(graph, reporter);
    }
}

impl ViewModelGraphValidator {
    /// Scan every dependency edge and report each direct view-model injection.
    ///
    /// A pure read of the graph: the same snapshot always yields the same
    /// diagnostics, one per offending edge, in edge enumeration order.
    pub fn validate(&self, graph: &dyn BindingGraph, reporter: &mut dyn DiagnosticReporter) {
        let root = graph.root_component();
        if root.is_subcomponent {
            // Judging this rule needs the whole dependency tree from the
            // true root; a partial snapshot would misclassify edges.
            tracing::debug!(root = %root.path, "skipping subcomponent graph");
            return;
        }

        for edge in graph.dependency_edges() {
            let Some(target) = graph.node(edge.target).and_then(Node::as_binding) else {
                continue;
            };
            if !is_forbidden_view_model_binding(target) {
                continue;
            }
            let sanctioned = graph
                .node(edge.source)
                .and_then(Node::as_binding)
                .is_some_and(is_internal_view_model_map_binding);
            if sanctioned {
                continue;
            }
            tracing::trace!(ty = %target.key.ty, edge = ?edge.id, "direct view-model injection");
            reporter.report_dependency(
                Severity::Error,
                &edge,
                &direct_injection_message(&target.key.ty),
            );
        }
    }
}

/// An unqualified, constructor-injected binding of a view-model type.
fn is_forbidden_view_model_binding(binding: &Binding) -> bool {
    binding.key.qualifier.is_none()
        && binding.is_type_annotated(view_model_marker())
        && binding.kind == BindingKind::ConstructorInjection
}

/// A contribution into the framework-internal view-model map — the one
/// consumer allowed to depend on a view-model binding directly.
fn is_internal_view_model_map_binding(binding: &Binding) -> bool {
    binding.key.qualifier.as_ref() == Some(view_model_map_qualifier())
        && binding.key.contribution.is_some()
}

fn direct_injection_message(ty: &str) -> String {
    format!(
        "`{ty}` is a view model and cannot be requested as a regular dependency. \
         Obtain it through the lifecycle-aware `ViewModelProvider` API instead."
    )
}
