use crate::discover::NodeDiscoverer;
use crate::types::PageGraph;
use pageflow_model::{Project, RouterMap};

/// Seeds one aliased node per router-map entry.
///
/// This is the only pass that assigns aliases, so it must run before
/// [`super::MainPageDiscoverer`]: duplicate class registration keeps the
/// first node, and an unaliased registration would shadow the alias.
pub struct RouterPageDiscoverer {
    routes: RouterMap,
}

impl RouterPageDiscoverer {
    #[must_use]
    pub fn new(routes: RouterMap) -> Self {
        Self { routes }
    }
}

impl NodeDiscoverer for RouterPageDiscoverer {
    fn name(&self) -> &'static str {
        "router-pages"
    }

    fn discover(&self, project: &Project, graph: &mut PageGraph) {
        for entry in &self.routes.router_map {
            let page = entry.page();
            let Some(class) = project.page_root_class(page) else {
                log::debug!("router destination has no UI-root class, skipping: {page}");
                continue;
            };
            graph.add_node(
                page.to_string(),
                entry.name.clone(),
                class.signature.clone(),
                class.view_tree.clone(),
            );
        }
    }
}
