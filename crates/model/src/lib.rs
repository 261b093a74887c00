//! # Pageflow Model
//!
//! Data model exported by the code-analysis engine, consumed as inert data.
//!
//! The extractor never parses application sources itself; it reads a JSON
//! export of the engine's project model (files, classes, method bodies as
//! statement lists, UI trees) together with the project's navigation
//! manifests. This crate holds those types and the lookup helpers the graph
//! core consumes:
//!
//! ```text
//! Project (engine export)
//!     ├─ FileModel ─ ClassModel ─ MethodModel ─ Cfg ─ Stmt
//!     │                  └─ UiTree (rooted element hierarchy)
//!     ├─ MainPages  (declared page manifest)
//!     └─ RouterMap  (page aliases for named navigation)
//! ```

mod error;
mod manifest;
mod project;
mod signatures;
mod stmt;
mod ui_tree;

pub use error::{ModelError, Result};
pub use manifest::{MainPages, RouterEntry, RouterMap, MAIN_PAGES_PROFILE, ROUTER_MAP_PROFILE};
pub use project::{ClassModel, FileModel, MethodModel, Project, PAGE_SOURCE_ROOT};
pub use signatures::{ClassSignature, FileSignature, MethodSignature};
pub use stmt::{AssignStmt, Cfg, InvokeStmt, Local, Stmt, Value};
pub use ui_tree::{UiElement, UiTree};
