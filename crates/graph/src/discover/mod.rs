//! Discovery passes over the project model.
//!
//! The set of discoverers is closed and known at build time; the pipeline
//! driver picks which instances run and in what order. All node discovery
//! must complete before any edge discovery starts — edge passes depend on
//! the class-signature index being populated.

mod main_pages;
mod navigation_edges;
mod router_edges;
mod router_pages;

pub use main_pages::MainPageDiscoverer;
pub use navigation_edges::NavigationEdgeDiscoverer;
pub use router_edges::RouterEdgeDiscoverer;
pub use router_pages::RouterPageDiscoverer;

use crate::types::PageGraph;
use pageflow_model::Project;

/// Seeds graph nodes from declared pages.
pub trait NodeDiscoverer {
    fn name(&self) -> &'static str;
    fn discover(&self, project: &Project, graph: &mut PageGraph);
}

/// Scans method bodies for recognized navigation calls and inserts edges.
pub trait EdgeDiscoverer {
    fn name(&self) -> &'static str;
    fn discover(&self, project: &Project, graph: &mut PageGraph);
}
