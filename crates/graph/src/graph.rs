use crate::types::{PageGraph, PageNode, TransitionEdge};
use petgraph::graph::{EdgeIndex, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;

impl PageGraph {
    #[must_use]
    pub fn node(&self, idx: NodeIndex) -> &PageNode {
        &self.graph[idx]
    }

    #[must_use]
    pub fn get_node(&self, idx: NodeIndex) -> Option<&PageNode> {
        self.graph.node_weight(idx)
    }

    #[must_use]
    pub fn get_edge(&self, idx: EdgeIndex) -> Option<&TransitionEdge> {
        self.graph.edge_weight(idx)
    }

    /// All nodes in creation order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeIndex, &PageNode)> {
        self.graph.node_indices().map(|idx| (idx, &self.graph[idx]))
    }

    /// Snapshot of node indices, safe to hold while edges are inserted.
    #[must_use]
    pub fn node_indices(&self) -> Vec<NodeIndex> {
        self.graph.node_indices().collect()
    }

    /// First node whose alias equals `alias`. Pages without an alias never
    /// match, even against an empty search string.
    #[must_use]
    pub fn find_by_alias(&self, alias: &str) -> Option<NodeIndex> {
        self.graph
            .node_indices()
            .find(|&idx| !self.graph[idx].alias.is_empty() && self.graph[idx].alias == alias)
    }

    /// First node whose page path equals `page`.
    #[must_use]
    pub fn find_by_page(&self, page: &str) -> Option<NodeIndex> {
        self.graph
            .node_indices()
            .find(|&idx| self.graph[idx].page == page)
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Outgoing transitions of a node as `"source -> destination"` strings
    /// (display names), in edge insertion order.
    #[must_use]
    pub fn out_edges(&self, idx: NodeIndex) -> Vec<String> {
        self.edge_strings(idx, Direction::Outgoing)
    }

    /// Incoming transitions of a node, same format as [`Self::out_edges`].
    #[must_use]
    pub fn in_edges(&self, idx: NodeIndex) -> Vec<String> {
        self.edge_strings(idx, Direction::Incoming)
    }

    fn edge_strings(&self, idx: NodeIndex, direction: Direction) -> Vec<String> {
        let mut edges: Vec<_> = self.graph.edges_directed(idx, direction).collect();
        edges.sort_by_key(|e| e.id());
        edges
            .into_iter()
            .map(|e| {
                format!(
                    "{} -> {}",
                    self.graph[e.source()].display_name(),
                    self.graph[e.target()].display_name()
                )
            })
            .collect()
    }
}
