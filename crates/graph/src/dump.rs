//! Diagnostic views of a constructed graph: a Graphviz dot rendering and a
//! structured JSON dump. Both are best-effort artifacts; write failures are
//! surfaced as errors for the driver to log, never as pipeline aborts.

use crate::error::Result;
use crate::types::PageGraph;
use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;
use serde::Serialize;
use std::collections::{HashSet, VecDeque};
use std::fs;
use std::path::Path;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct NodeRecord {
    id: usize,
    page: String,
    page_alias: String,
    class: String,
    view_tree: Vec<String>,
    out_edges: Vec<String>,
    in_edges: Vec<String>,
}

fn records(graph: &PageGraph) -> Vec<NodeRecord> {
    graph
        .nodes()
        .map(|(idx, node)| NodeRecord {
            id: idx.index(),
            page: node.page.clone(),
            page_alias: node.alias.clone(),
            class: node.class.to_string(),
            view_tree: node
                .view_tree
                .as_ref()
                .map(|tree| tree.flatten())
                .unwrap_or_default(),
            out_edges: graph.out_edges(idx),
            in_edges: graph.in_edges(idx),
        })
        .collect()
}

/// Structured dump: one record per node in creation order.
pub fn dump_json(graph: &PageGraph) -> Result<String> {
    Ok(serde_json::to_string_pretty(&records(graph))?)
}

pub fn write_json(graph: &PageGraph, path: &Path) -> Result<()> {
    fs::write(path, dump_json(graph)?)?;
    Ok(())
}

/// Graphviz rendering. With `entry`, only nodes reachable from it (forward
/// BFS) are emitted.
#[must_use]
pub fn to_dot(graph: &PageGraph, name: &str, entry: Option<NodeIndex>) -> String {
    let keep = entry.map(|start| reachable_from(graph, start));
    let in_scope =
        |idx: NodeIndex| keep.as_ref().map_or(true, |reachable| reachable.contains(&idx));

    let mut out = String::new();
    out.push_str(&format!("digraph {name} {{\n"));
    for (idx, node) in graph.nodes() {
        if !in_scope(idx) {
            continue;
        }
        out.push_str(&format!(
            "    n{} [label=\"ID: {}\\n{}\"];\n",
            idx.index(),
            idx.index(),
            node.page
        ));
    }
    for edge in graph.graph.edge_references() {
        if !in_scope(edge.source()) || !in_scope(edge.target()) {
            continue;
        }
        out.push_str(&format!(
            "    n{} -> n{};\n",
            edge.source().index(),
            edge.target().index()
        ));
    }
    out.push_str("}\n");
    out
}

pub fn write_dot(graph: &PageGraph, name: &str, entry: Option<NodeIndex>, path: &Path) -> Result<()> {
    fs::write(path, to_dot(graph, name, entry))?;
    Ok(())
}

fn reachable_from(graph: &PageGraph, start: NodeIndex) -> HashSet<NodeIndex> {
    let mut seen = HashSet::from([start]);
    let mut queue = VecDeque::from([start]);
    while let Some(current) = queue.pop_front() {
        for next in graph.graph.neighbors(current) {
            if seen.insert(next) {
                queue.push_back(next);
            }
        }
    }
    seen
}
