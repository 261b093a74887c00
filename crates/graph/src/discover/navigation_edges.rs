use crate::discover::EdgeDiscoverer;
use crate::resolver::resolve_local;
use crate::tables::NAV_CALLS;
use crate::types::PageGraph;
use pageflow_model::{ClassSignature, MethodModel, Project, Stmt, Value};
use std::collections::HashMap;

/// IR-based pass over navigation-stack calls (`pushPathByName` family).
///
/// The bound argument names the destination page by *alias*. Arguments held
/// in a local go through the backward value resolver; anything that does not
/// end in a string literal matching a known alias drops the candidate.
pub struct NavigationEdgeDiscoverer {
    calls: &'static HashMap<&'static str, usize>,
}

impl NavigationEdgeDiscoverer {
    #[must_use]
    pub fn new() -> Self {
        Self { calls: &NAV_CALLS }
    }

    fn scan(
        &self,
        stmt: &Stmt,
        caller: &ClassSignature,
        method: &MethodModel,
        graph: &mut PageGraph,
    ) {
        let Stmt::Invoke(call) = stmt else { return };
        let Some(&position) = self.calls.get(call.method.as_str()) else {
            return;
        };
        let Some(arg) = call.args.get(position) else {
            return;
        };
        let value = match arg {
            Value::Local(local) => resolve_local(method, local),
            literal => Some(literal.clone()),
        };
        let Some(Value::Str(alias)) = value else { return };
        let Some(dest) = graph.find_by_alias(&alias) else {
            log::debug!("no page aliased '{alias}', dropping candidate: {stmt}");
            return;
        };
        let dest_class = graph.node(dest).class.clone();
        graph.add_edge_by_class(caller, &dest_class, stmt);
    }
}

impl Default for NavigationEdgeDiscoverer {
    fn default() -> Self {
        Self::new()
    }
}

impl EdgeDiscoverer for NavigationEdgeDiscoverer {
    fn name(&self) -> &'static str {
        "navigation-ir"
    }

    fn discover(&self, project: &Project, graph: &mut PageGraph) {
        for idx in graph.node_indices() {
            let caller = graph.node(idx).class.clone();
            let Some(class) = project.class(&caller) else {
                continue;
            };
            for method in &class.methods {
                for stmt in method.cfg.stmts() {
                    self.scan(stmt, &caller, method, graph);
                }
            }
        }
    }
}
