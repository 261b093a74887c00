//! Pipeline driver: load the project model and manifests, run the discovery
//! passes in sequence, dump the graph.

use anyhow::{Context, Result};
use pageflow_graph::{
    write_dot, write_json, EdgeDiscoverer, MainPageDiscoverer, NavigationEdgeDiscoverer,
    NodeDiscoverer, PageGraph, RouterEdgeDiscoverer, RouterPageDiscoverer,
};
use pageflow_model::{MainPages, Project, RouterMap, MAIN_PAGES_PROFILE, ROUTER_MAP_PROFILE};
use std::fs;
use std::path::PathBuf;

pub struct ExtractConfig {
    pub project: PathBuf,
    pub manifest_dir: Option<PathBuf>,
    pub out: PathBuf,
    pub name: String,
    pub dot_entry: Option<String>,
}

pub fn run(config: &ExtractConfig) -> Result<()> {
    let project = Project::load(&config.project)
        .with_context(|| format!("loading project model {}", config.project.display()))?;
    let manifest_root = config
        .manifest_dir
        .clone()
        .unwrap_or_else(|| project.root.clone());

    let mut graph = PageGraph::new();

    // Router pages first: duplicate class registration keeps the first node,
    // and only the router pass assigns aliases.
    let mut node_passes: Vec<Box<dyn NodeDiscoverer>> = Vec::new();
    match RouterMap::load(manifest_root.join(ROUTER_MAP_PROFILE)) {
        Ok(routes) => node_passes.push(Box::new(RouterPageDiscoverer::new(routes))),
        Err(err) => log::info!("router map not loaded: {err}"),
    }
    match MainPages::load(manifest_root.join(MAIN_PAGES_PROFILE)) {
        Ok(pages) => node_passes.push(Box::new(MainPageDiscoverer::new(pages))),
        Err(err) => log::info!("main-pages manifest not loaded: {err}"),
    }
    for pass in &node_passes {
        pass.discover(&project, &mut graph);
        log::info!("{}: {} nodes", pass.name(), graph.node_count());
    }

    let edge_passes: Vec<Box<dyn EdgeDiscoverer>> = vec![
        Box::new(RouterEdgeDiscoverer::new()),
        Box::new(NavigationEdgeDiscoverer::new()),
    ];
    for pass in &edge_passes {
        pass.discover(&project, &mut graph);
        log::info!("{}: {} edges", pass.name(), graph.edge_count());
    }

    fs::create_dir_all(&config.out)
        .with_context(|| format!("creating output directory {}", config.out.display()))?;

    let entry = config.dot_entry.as_deref().and_then(|page| {
        let found = graph.find_by_page(page);
        if found.is_none() {
            log::warn!("dot entry page not in graph, dumping unscoped: {page}");
        }
        found
    });

    // Dump failures are diagnostic, not fatal: the in-memory graph is already
    // built and the remaining outputs still get their chance.
    let dot_path = config.out.join(format!("{}.dot", config.name));
    if let Err(err) = write_dot(&graph, &config.name, entry, &dot_path) {
        log::error!("failed to write {}: {err}", dot_path.display());
    }
    let json_path = config.out.join(format!("{}.json", config.name));
    if let Err(err) = write_json(&graph, &json_path) {
        log::error!("failed to write {}: {err}", json_path.display());
    }

    log::info!(
        "page transition graph '{}': {} nodes, {} edges",
        config.name,
        graph.node_count(),
        graph.edge_count()
    );
    Ok(())
}
