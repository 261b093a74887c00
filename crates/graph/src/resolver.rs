//! Backward value resolution over one method body.
//!
//! Navigation calls often receive their destination through a local rather
//! than a literal. The resolver chases the local backward through direct
//! reassignments until it reaches a literal, the chain breaks, or a cycle
//! closes. Only a value at the end of an unbroken direct-reassignment chain
//! is ever reported.

use pageflow_model::{Local, MethodModel, Stmt, Value};
use std::collections::HashSet;

/// Recover the literal ultimately assigned to `var` within `method`'s body.
///
/// Returns `None` when the chain is cyclic, leaves the function (no defining
/// assignment), or otherwise cannot be followed. Terminates in at most the
/// number of distinct locals in the body: each step either finishes or
/// consumes a never-before-visited variable.
#[must_use]
pub fn resolve_local(method: &MethodModel, var: &Local) -> Option<Value> {
    let mut visited = HashSet::new();
    chase(method, &var.name, &mut visited)
}

fn chase(method: &MethodModel, name: &str, visited: &mut HashSet<String>) -> Option<Value> {
    if !visited.insert(name.to_string()) {
        // Cycle: this variable is already on the chase path.
        return None;
    }
    for stmt in method.cfg.stmts() {
        let Stmt::Assign(assign) = stmt else { continue };
        if assign.lhs.name != name {
            continue;
        }
        // First defining assignment wins; a well-formed chase has one.
        return match &assign.rhs {
            Value::Local(next) => chase(method, &next.name, visited),
            literal => Some(literal.clone()),
        };
    }
    None
}
