//! Core graph data structures

mod engine;
mod store;


pub use engine::{WayfindEngine, WayfindError, WayfindResult};
pub use store::{GraphId, GraphMetadata, RouteGraph};
