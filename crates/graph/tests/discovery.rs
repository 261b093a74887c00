//! End-to-end discovery over an in-memory project model.

use pageflow_graph::{
    EdgeDiscoverer, MainPageDiscoverer, NavigationEdgeDiscoverer, NodeDiscoverer, PageGraph,
    RouterEdgeDiscoverer, RouterPageDiscoverer,
};
use pageflow_model::{
    AssignStmt, Cfg, ClassModel, ClassSignature, FileModel, FileSignature, InvokeStmt, Local,
    MainPages, MethodModel, Project, RouterEntry, RouterMap, Stmt, Value,
};
use std::path::PathBuf;

fn page_file(page: &str, class_name: &str, methods: Vec<MethodModel>) -> FileModel {
    let path = Project::page_source_path(page);
    let file_sig = FileSignature::new("demo", path);
    FileModel {
        signature: file_sig.clone(),
        classes: vec![ClassModel {
            signature: ClassSignature::new(file_sig, class_name),
            ui_root: true,
            methods,
            view_tree: None,
        }],
    }
}

fn build_method(stmts: Vec<Stmt>) -> MethodModel {
    MethodModel {
        name: "build".to_string(),
        cfg: Cfg { stmts },
    }
}

fn assign(lhs: &str, rhs: Value) -> Stmt {
    Stmt::Assign(AssignStmt {
        lhs: Local::new(lhs),
        rhs,
    })
}

fn invoke(method: &str, args: Vec<Value>) -> Stmt {
    Stmt::Invoke(InvokeStmt {
        method: method.to_string(),
        args,
    })
}

fn project(files: Vec<FileModel>) -> Project {
    Project {
        name: "demo".to_string(),
        root: PathBuf::new(),
        files,
    }
}

fn main_pages(pages: &[&str]) -> MainPages {
    MainPages {
        src: pages.iter().map(ToString::to_string).collect(),
    }
}

fn router_map(entries: &[(&str, &str)]) -> RouterMap {
    RouterMap {
        router_map: entries
            .iter()
            .map(|(name, page)| RouterEntry {
                name: name.to_string(),
                page_source_file: format!("src/main/ets/{page}.ets"),
            })
            .collect(),
    }
}

fn discover_nodes(project: &Project, graph: &mut PageGraph, routes: RouterMap, pages: MainPages) {
    RouterPageDiscoverer::new(routes).discover(project, graph);
    MainPageDiscoverer::new(pages).discover(project, graph);
}

#[test]
fn test_end_to_end_navigation_edge() {
    // Home's build method reaches pushPathByName through a local chain.
    let project = project(vec![
        page_file(
            "pages/Home",
            "Home",
            vec![build_method(vec![
                assign("name", Value::Local(Local::new("target"))),
                assign("target", Value::Str("detail".to_string())),
                invoke("pushPathByName", vec![Value::Local(Local::new("name"))]),
            ])],
        ),
        page_file("pages/Detail", "Detail", vec![]),
    ]);

    let mut graph = PageGraph::new();
    discover_nodes(
        &project,
        &mut graph,
        router_map(&[("detail", "pages/Detail")]),
        main_pages(&["pages/Home", "pages/Detail"]),
    );
    assert_eq!(graph.node_count(), 2);

    NavigationEdgeDiscoverer::new().discover(&project, &mut graph);

    assert_eq!(graph.edge_count(), 1);
    let home = graph.find_by_page("pages/Home").unwrap();
    let detail = graph.find_by_page("pages/Detail").unwrap();
    assert!(graph.edge_between(home, detail).is_some());
}

#[test]
fn test_navigation_with_literal_argument() {
    let project = project(vec![
        page_file(
            "pages/Home",
            "Home",
            vec![build_method(vec![invoke(
                "pushPath",
                vec![Value::Str("detail".to_string())],
            )])],
        ),
        page_file("pages/Detail", "Detail", vec![]),
    ]);

    let mut graph = PageGraph::new();
    discover_nodes(
        &project,
        &mut graph,
        router_map(&[("detail", "pages/Detail")]),
        main_pages(&["pages/Home"]),
    );
    NavigationEdgeDiscoverer::new().discover(&project, &mut graph);

    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn test_dangling_alias_produces_no_edge() {
    let project = project(vec![page_file(
        "pages/Home",
        "Home",
        vec![build_method(vec![invoke(
            "pushPathByName",
            vec![Value::Str("nowhere".to_string())],
        )])],
    )]);

    let mut graph = PageGraph::new();
    discover_nodes(
        &project,
        &mut graph,
        RouterMap::default(),
        main_pages(&["pages/Home"]),
    );
    NavigationEdgeDiscoverer::new().discover(&project, &mut graph);

    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_unresolved_local_is_dropped() {
    // `name` has no defining assignment in the body.
    let project = project(vec![
        page_file(
            "pages/Home",
            "Home",
            vec![build_method(vec![invoke(
                "pushPathByName",
                vec![Value::Local(Local::new("name"))],
            )])],
        ),
        page_file("pages/Detail", "Detail", vec![]),
    ]);

    let mut graph = PageGraph::new();
    discover_nodes(
        &project,
        &mut graph,
        router_map(&[("detail", "pages/Detail")]),
        main_pages(&["pages/Home"]),
    );
    NavigationEdgeDiscoverer::new().discover(&project, &mut graph);

    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_non_string_destination_is_dropped() {
    let project = project(vec![
        page_file(
            "pages/Home",
            "Home",
            vec![build_method(vec![invoke("pushPathByName", vec![Value::Int(7)])])],
        ),
        page_file("pages/Detail", "Detail", vec![]),
    ]);

    let mut graph = PageGraph::new();
    discover_nodes(
        &project,
        &mut graph,
        router_map(&[("detail", "pages/Detail")]),
        main_pages(&["pages/Home"]),
    );
    NavigationEdgeDiscoverer::new().discover(&project, &mut graph);

    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_router_edge_by_literal_url() {
    let project = project(vec![
        page_file(
            "pages/Home",
            "Home",
            vec![build_method(vec![invoke(
                "pushUrl",
                vec![Value::Str("pages/Detail".to_string())],
            )])],
        ),
        page_file("pages/Detail", "Detail", vec![]),
    ]);

    let mut graph = PageGraph::new();
    discover_nodes(
        &project,
        &mut graph,
        RouterMap::default(),
        main_pages(&["pages/Home", "pages/Detail"]),
    );
    RouterEdgeDiscoverer::new().discover(&project, &mut graph);

    assert_eq!(graph.edge_count(), 1);
    let home = graph.find_by_page("pages/Home").unwrap();
    let detail = graph.find_by_page("pages/Detail").unwrap();
    assert!(graph.edge_between(home, detail).is_some());
}

#[test]
fn test_router_pass_does_not_resolve_locals() {
    // Same chain the IR pass would resolve; the pattern pass must not.
    let project = project(vec![
        page_file(
            "pages/Home",
            "Home",
            vec![build_method(vec![
                assign("url", Value::Str("pages/Detail".to_string())),
                invoke("pushUrl", vec![Value::Local(Local::new("url"))]),
            ])],
        ),
        page_file("pages/Detail", "Detail", vec![]),
    ]);

    let mut graph = PageGraph::new();
    discover_nodes(
        &project,
        &mut graph,
        RouterMap::default(),
        main_pages(&["pages/Home", "pages/Detail"]),
    );
    RouterEdgeDiscoverer::new().discover(&project, &mut graph);

    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_missing_page_source_is_skipped() {
    let project = project(vec![page_file("pages/Home", "Home", vec![])]);

    let mut graph = PageGraph::new();
    discover_nodes(
        &project,
        &mut graph,
        RouterMap::default(),
        main_pages(&["pages/Home", "pages/Ghost"]),
    );

    assert_eq!(graph.node_count(), 1);
}

#[test]
fn test_rerunning_edge_discovery_is_idempotent() {
    let project = project(vec![
        page_file(
            "pages/Home",
            "Home",
            vec![build_method(vec![invoke(
                "pushPathByName",
                vec![Value::Str("detail".to_string())],
            )])],
        ),
        page_file("pages/Detail", "Detail", vec![]),
    ]);

    let mut graph = PageGraph::new();
    discover_nodes(
        &project,
        &mut graph,
        router_map(&[("detail", "pages/Detail")]),
        main_pages(&["pages/Home"]),
    );

    let pass = NavigationEdgeDiscoverer::new();
    pass.discover(&project, &mut graph);
    pass.discover(&project, &mut graph);

    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn test_page_in_both_manifests_keeps_alias() {
    // Router map runs first, so the aliased registration wins.
    let project = project(vec![page_file("pages/Detail", "Detail", vec![])]);

    let mut graph = PageGraph::new();
    discover_nodes(
        &project,
        &mut graph,
        router_map(&[("detail", "pages/Detail")]),
        main_pages(&["pages/Detail"]),
    );

    assert_eq!(graph.node_count(), 1);
    let detail = graph.find_by_page("pages/Detail").unwrap();
    assert_eq!(graph.node(detail).alias, "detail");
}
