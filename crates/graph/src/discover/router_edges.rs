use crate::discover::EdgeDiscoverer;
use crate::tables::ROUTER_CALLS;
use crate::types::PageGraph;
use pageflow_model::{ClassSignature, Project, Stmt, Value};
use std::collections::HashMap;

/// Pattern-based pass over router calls (`pushUrl` family).
///
/// The bound argument names the destination page by *path* and must be a
/// string literal at the call site; no value resolution is attempted.
pub struct RouterEdgeDiscoverer {
    calls: &'static HashMap<&'static str, usize>,
}

impl RouterEdgeDiscoverer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            calls: &ROUTER_CALLS,
        }
    }

    fn scan(&self, stmt: &Stmt, caller: &ClassSignature, graph: &mut PageGraph) {
        let Stmt::Invoke(call) = stmt else { return };
        let Some(&position) = self.calls.get(call.method.as_str()) else {
            return;
        };
        let Some(url) = call.args.get(position).and_then(Value::as_str) else {
            return;
        };
        let Some(dest) = graph.find_by_page(url) else {
            log::debug!("no page at '{url}', dropping candidate: {stmt}");
            return;
        };
        let dest_class = graph.node(dest).class.clone();
        graph.add_edge_by_class(caller, &dest_class, stmt);
    }
}

impl Default for RouterEdgeDiscoverer {
    fn default() -> Self {
        Self::new()
    }
}

impl EdgeDiscoverer for RouterEdgeDiscoverer {
    fn name(&self) -> &'static str {
        "router-pattern"
    }

    fn discover(&self, project: &Project, graph: &mut PageGraph) {
        for idx in graph.node_indices() {
            let caller = graph.node(idx).class.clone();
            let Some(class) = project.class(&caller) else {
                continue;
            };
            for method in &class.methods {
                for stmt in method.cfg.stmts() {
                    self.scan(stmt, &caller, graph);
                }
            }
        }
    }
}
