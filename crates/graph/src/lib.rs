//! # Pageflow Graph
//!
//! Page transition graph extraction for compiled UI-application projects.
//!
//! ## Features
//!
//! - **Node discovery** - seed the graph from declared pages and router maps
//! - **Edge discovery** - statically resolve navigation call targets
//! - **Value resolution** - backward, cycle-safe chase of assignment chains
//! - **Dumps** - Graphviz dot and structured JSON views of the graph
//!
//! ## Architecture
//!
//! ```text
//! Project model (engine export)
//!     │
//!     ├──> Node discoverers
//!     │      ├─ RouterPageDiscoverer (router map, assigns aliases)
//!     │      └─ MainPageDiscoverer  (declared-page manifest)
//!     │
//!     ├──> Page Graph (petgraph)
//!     │      ├─ Nodes: pages (class-signature keyed, deduplicated)
//!     │      └─ Edges: transitions (ordered-pair keyed, idempotent)
//!     │
//!     ├──> Edge discoverers
//!     │      ├─ RouterEdgeDiscoverer     (push-by-URL family, literal args)
//!     │      └─ NavigationEdgeDiscoverer (push-by-name family, resolver-assisted)
//!     │
//!     └──> Dumps (dot / JSON)
//! ```
//!
//! Missed edges are an expected outcome of static approximation: every
//! failure to resolve a navigation target drops the candidate silently
//! rather than erroring.

mod discover;
mod dump;
mod error;
mod graph;
mod resolver;
mod tables;
mod types;

pub use discover::{
    EdgeDiscoverer, MainPageDiscoverer, NavigationEdgeDiscoverer, NodeDiscoverer,
    RouterEdgeDiscoverer, RouterPageDiscoverer,
};
pub use dump::{dump_json, to_dot, write_dot, write_json};
pub use error::{GraphError, Result};
pub use resolver::resolve_local;
pub use tables::{NAV_CALLS, ROUTER_CALLS};
pub use types::{PageGraph, PageNode, TransitionEdge};
