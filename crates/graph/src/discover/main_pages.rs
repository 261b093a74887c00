use crate::discover::NodeDiscoverer;
use crate::types::PageGraph;
use pageflow_model::{MainPages, Project};

/// Seeds one node per declared main page.
///
/// A declared page whose source file is missing or carries no UI-root class
/// is skipped silently; it is simply never represented in the graph.
pub struct MainPageDiscoverer {
    pages: MainPages,
}

impl MainPageDiscoverer {
    #[must_use]
    pub fn new(pages: MainPages) -> Self {
        Self { pages }
    }
}

impl NodeDiscoverer for MainPageDiscoverer {
    fn name(&self) -> &'static str {
        "main-pages"
    }

    fn discover(&self, project: &Project, graph: &mut PageGraph) {
        for page in &self.pages.src {
            let Some(class) = project.page_root_class(page) else {
                log::debug!("declared page has no UI-root class, skipping: {page}");
                continue;
            };
            graph.add_node(
                page.clone(),
                String::new(),
                class.signature.clone(),
                class.view_tree.clone(),
            );
        }
    }
}
