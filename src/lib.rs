//! Wayfind: In-Memory Route Graph Engine
//!
//! A small, synchronous engine that stores directed weighted edges
//! between string-labeled nodes and answers shortest-route queries by
//! breadth-first search. Routes are shortest by hop count; weights
//! are stored on edges but never steer the search.
//!
//! # Core Concepts
//!
//! - **Nodes**: uniquely labeled vertices, created implicitly when an
//!   edge names them
//! - **Edges**: directed and weighted; one edge per ordered pair,
//!   last write wins
//! - **Routes**: fewest-hop paths with an ordered visitation log for
//!   observability
//!
//! # Example
//!
//! ```
//! use wayfind::{PathQuery, RouteGraph};
//!
//! let mut graph = RouteGraph::new("campus");
//! graph.add_edge("Gate", "Quad", 1);
//! graph.add_edge("Quad", "Library", 1);
//! graph.add_edge("Gate", "Library", 5);
//!
//! let result = PathQuery::between("Gate", "Library")
//!     .execute(&graph)
//!     .unwrap();
//! // One heavy hop still beats two light ones
//! assert_eq!(result.path, ["Gate", "Library"]);
//! ```

mod graph;
pub mod query;
pub mod render;
pub mod shell;

pub use graph::{GraphId, GraphMetadata, RouteGraph, WayfindEngine, WayfindError, WayfindResult};
pub use query::{PathQuery, PathResult};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
