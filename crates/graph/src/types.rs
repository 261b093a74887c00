use pageflow_model::{ClassSignature, Stmt, UiTree};
use petgraph::graph::{DiGraph, EdgeIndex, NodeIndex};
use std::collections::HashMap;

/// One page of the application: a screen backed by one UI-root class.
///
/// Immutable after creation; the alias is assigned at creation time or never.
#[derive(Debug, Clone)]
pub struct PageNode {
    /// Page path identifier, e.g. `pages/Home`.
    pub page: String,
    /// Alias navigation call sites use to reference the page; empty when the
    /// page has none.
    pub alias: String,
    pub class: ClassSignature,
    pub view_tree: Option<UiTree>,
}

impl PageNode {
    /// Navigation-facing name: the alias when one exists, else the page path.
    #[must_use]
    pub fn display_name(&self) -> &str {
        if self.alias.is_empty() {
            &self.page
        } else {
            &self.alias
        }
    }
}

/// A directed, statically-discovered navigation from one page to another.
#[derive(Debug, Clone)]
pub struct TransitionEdge {
    /// Call statement that caused discovery. Provenance only.
    pub cause: Stmt,
}

/// The page transition graph.
///
/// Nodes are created in insertion order and addressed by sequential
/// `NodeIndex`; at most one edge exists per ordered (source, destination)
/// pair. The class-signature index translates resolved navigation targets
/// into node ids without linear search.
#[derive(Debug, Default)]
pub struct PageGraph {
    pub(crate) graph: DiGraph<PageNode, TransitionEdge>,
    pair_index: HashMap<(NodeIndex, NodeIndex), EdgeIndex>,
    class_index: HashMap<ClassSignature, NodeIndex>,
}

impl PageGraph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a page node.
    ///
    /// A class signature registers at most one node: re-registering an
    /// already-indexed class returns the existing node's index unchanged
    /// (first registration wins; the later alias/view tree are discarded).
    pub fn add_node(
        &mut self,
        page: impl Into<String>,
        alias: impl Into<String>,
        class: ClassSignature,
        view_tree: Option<UiTree>,
    ) -> NodeIndex {
        if let Some(&existing) = self.class_index.get(&class) {
            log::warn!(
                "page class already registered, reusing node {}: {class}",
                existing.index()
            );
            return existing;
        }
        let node = PageNode {
            page: page.into(),
            alias: alias.into(),
            class: class.clone(),
            view_tree,
        };
        log::debug!("add page node {}: {}", self.graph.node_count(), node.page);
        let idx = self.graph.add_node(node);
        self.class_index.insert(class, idx);
        idx
    }

    /// Insert a transition between two pages identified by class signature.
    ///
    /// Navigation to an unmodeled destination (either class not indexed) is
    /// dropped silently.
    pub fn add_edge_by_class(&mut self, src: &ClassSignature, dst: &ClassSignature, cause: &Stmt) {
        let (Some(&src_idx), Some(&dst_idx)) =
            (self.class_index.get(src), self.class_index.get(dst))
        else {
            log::debug!("transition to unmodeled page dropped: {src} -> {dst}");
            return;
        };
        self.add_edge_by_id(src_idx, dst_idx, cause);
    }

    /// Insert a transition between two existing nodes. Idempotent:
    /// re-discovering the same ordered pair neither creates a duplicate nor
    /// mutates the stored cause.
    pub fn add_edge_by_id(&mut self, src: NodeIndex, dst: NodeIndex, cause: &Stmt) {
        if self.pair_index.contains_key(&(src, dst)) {
            return;
        }
        let edge = self.graph.add_edge(
            src,
            dst,
            TransitionEdge {
                cause: cause.clone(),
            },
        );
        self.pair_index.insert((src, dst), edge);
        log::debug!(
            "add transition: {} -> {}",
            self.graph[src].display_name(),
            self.graph[dst].display_name()
        );
    }

    #[must_use]
    pub fn edge_between(&self, src: NodeIndex, dst: NodeIndex) -> Option<EdgeIndex> {
        self.pair_index.get(&(src, dst)).copied()
    }

    #[must_use]
    pub fn find_by_class(&self, class: &ClassSignature) -> Option<NodeIndex> {
        self.class_index.get(class).copied()
    }
}
