use serde::{Deserialize, Serialize};
use std::fmt;

/// A named local variable slot in a method body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Local {
    pub name: String,
}

impl Local {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A value operand as the engine exports it.
///
/// Everything except `Local` is a literal known at analysis time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum Value {
    Local(Local),
    Str(String),
    Int(i64),
    Bool(bool),
    Null,
}

impl Value {
    #[must_use]
    pub fn is_literal(&self) -> bool {
        !matches!(self, Value::Local(_))
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Local(local) => f.write_str(&local.name),
            Value::Str(s) => write!(f, "'{s}'"),
            Value::Int(i) => write!(f, "{i}"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Null => f.write_str("null"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignStmt {
    pub lhs: Local,
    pub rhs: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvokeStmt {
    /// Simple name of the callee, as exposed by the engine's call decomposition.
    pub method: String,
    pub args: Vec<Value>,
}

/// One statement of a method body's control-flow representation.
///
/// Statements the core does not decompose arrive as `Other` and are carried
/// only for provenance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Stmt {
    Assign(AssignStmt),
    Invoke(InvokeStmt),
    Other { text: String },
}

impl fmt::Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stmt::Assign(assign) => write!(f, "{} = {}", assign.lhs.name, assign.rhs),
            Stmt::Invoke(invoke) => {
                let args = invoke
                    .args
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "{}({args})", invoke.method)
            }
            Stmt::Other { text } => f.write_str(text),
        }
    }
}

/// Enumerable statement list of one method body.
///
/// Statement order is whatever the engine exported; consumers must not rely
/// on a particular traversal order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cfg {
    pub stmts: Vec<Stmt>,
}

impl Cfg {
    #[must_use]
    pub fn stmts(&self) -> &[Stmt] {
        &self.stmts
    }
}
