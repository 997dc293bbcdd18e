//! WayfindEngine: registry of route graphs and the main entry point

use super::store::{GraphId, RouteGraph};
use crate::query::{PathQuery, PathResult};
use dashmap::DashMap;
use std::collections::BTreeMap;
use thiserror::Error;

/// Errors that can occur in wayfind operations
#[derive(Debug, Error)]
pub enum WayfindError {
    #[error("Graph not found: {0}")]
    GraphNotFound(GraphId),

    #[error("Node not found: {0}")]
    NodeNotFound(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for wayfind operations
pub type WayfindResult<T> = Result<T, WayfindError>;

/// The main wayfind engine
///
/// Holds named graphs and provides operations for mutating and
/// querying them. Each graph is independent; the engine serializes
/// access per graph, while `RouteGraph` itself carries no internal
/// synchronization.
#[derive(Debug, Default)]
pub struct WayfindEngine {
    /// All graphs managed by this engine
    graphs: DashMap<GraphId, RouteGraph>,
}

impl WayfindEngine {
    /// Create a new WayfindEngine
    pub fn new() -> Self {
        Self {
            graphs: DashMap::new(),
        }
    }

    /// Create or replace a graph
    ///
    /// If a graph with the same ID already exists, it will be
    /// replaced. Returns the graph ID.
    pub fn upsert_graph(&self, graph: RouteGraph) -> GraphId {
        let id = graph.id.clone();
        tracing::debug!(graph = %id, "graph upserted");
        self.graphs.insert(id.clone(), graph);
        id
    }

    /// Get a graph by ID
    pub fn get_graph(&self, id: &GraphId) -> Option<RouteGraph> {
        self.graphs.get(id).map(|r| r.clone())
    }

    /// Remove a graph
    pub fn remove_graph(&self, id: &GraphId) -> Option<RouteGraph> {
        tracing::debug!(graph = %id, "graph removed");
        self.graphs.remove(id).map(|(_, graph)| graph)
    }

    /// List all graph IDs
    pub fn list_graphs(&self) -> Vec<GraphId> {
        self.graphs.iter().map(|r| r.key().clone()).collect()
    }

    /// Get the number of graphs
    pub fn graph_count(&self) -> usize {
        self.graphs.len()
    }

    /// Check if a graph exists
    pub fn has_graph(&self, id: &GraphId) -> bool {
        self.graphs.contains_key(id)
    }

    /// Add or overwrite a directed edge in a graph
    pub fn add_edge(
        &self,
        id: &GraphId,
        from: impl Into<String>,
        to: impl Into<String>,
        weight: i64,
    ) -> WayfindResult<()> {
        let mut graph = self
            .graphs
            .get_mut(id)
            .ok_or_else(|| WayfindError::GraphNotFound(id.clone()))?;
        graph.add_edge(from, to, weight);
        Ok(())
    }

    /// Delete a node (and its edges) from a graph
    ///
    /// Returns `false` when the node was already absent.
    pub fn delete_node(&self, id: &GraphId, label: &str) -> WayfindResult<bool> {
        let mut graph = self
            .graphs
            .get_mut(id)
            .ok_or_else(|| WayfindError::GraphNotFound(id.clone()))?;
        Ok(graph.delete_node(label))
    }

    /// Check if a node exists in a graph
    pub fn has_node(&self, id: &GraphId, label: &str) -> WayfindResult<bool> {
        let graph = self
            .graphs
            .get(id)
            .ok_or_else(|| WayfindError::GraphNotFound(id.clone()))?;
        Ok(graph.has_node(label))
    }

    /// Get the outgoing edges of a node in a graph
    ///
    /// Unlike [`RouteGraph::neighbors`], an absent node is a typed
    /// `NodeNotFound` error here.
    pub fn neighbors(&self, id: &GraphId, label: &str) -> WayfindResult<BTreeMap<String, i64>> {
        let graph = self
            .graphs
            .get(id)
            .ok_or_else(|| WayfindError::GraphNotFound(id.clone()))?;
        graph
            .neighbors(label)
            .cloned()
            .ok_or_else(|| WayfindError::NodeNotFound(label.to_string()))
    }

    /// Run a path query against a graph snapshot
    pub fn find_path(&self, id: &GraphId, query: &PathQuery) -> WayfindResult<PathResult> {
        let graph = self
            .graphs
            .get(id)
            .ok_or_else(|| WayfindError::GraphNotFound(id.clone()))?;
        query.execute(&graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_engine() {
        let engine = WayfindEngine::new();
        assert_eq!(engine.graph_count(), 0);
    }

    #[test]
    fn test_upsert_graph() {
        let engine = WayfindEngine::new();
        let graph = RouteGraph::new("test-graph");
        let id = graph.id.clone();

        let returned_id = engine.upsert_graph(graph);
        assert_eq!(id, returned_id);
        assert_eq!(engine.graph_count(), 1);
        assert!(engine.has_graph(&id));
    }

    #[test]
    fn test_get_graph() {
        let engine = WayfindEngine::new();
        let graph = RouteGraph::new("test-graph");
        let id = graph.id.clone();

        engine.upsert_graph(graph);

        let retrieved = engine.get_graph(&id);
        assert!(retrieved.is_some());
        assert_eq!(retrieved.map(|g| g.name).as_deref(), Some("test-graph"));
    }

    #[test]
    fn test_remove_graph() {
        let engine = WayfindEngine::new();
        let graph = RouteGraph::new("test-graph");
        let id = graph.id.clone();

        engine.upsert_graph(graph);
        assert_eq!(engine.graph_count(), 1);

        let removed = engine.remove_graph(&id);
        assert!(removed.is_some());
        assert_eq!(engine.graph_count(), 0);
    }

    #[test]
    fn test_mutation_on_unknown_graph_fails() {
        let engine = WayfindEngine::new();
        let id = GraphId::from_string("graph:absent");

        let err = engine.add_edge(&id, "A", "B", 1).unwrap_err();
        assert!(matches!(err, WayfindError::GraphNotFound(_)));
    }

    #[test]
    fn test_neighbors_of_missing_node_is_typed_error() {
        let engine = WayfindEngine::new();
        let id = engine.upsert_graph(RouteGraph::new("test"));
        engine.add_edge(&id, "A", "B", 1).unwrap();

        let err = engine.neighbors(&id, "Z").unwrap_err();
        assert!(matches!(err, WayfindError::NodeNotFound(label) if label == "Z"));
    }

    #[test]
    fn test_edges_survive_engine_round_trip() {
        let engine = WayfindEngine::new();
        let id = engine.upsert_graph(RouteGraph::new("test"));
        engine.add_edge(&id, "A", "B", 4).unwrap();
        engine.add_edge(&id, "B", "C", 2).unwrap();

        let graph = engine.get_graph(&id).unwrap();
        assert_eq!(graph.edge_weight("A", "B"), Some(4));
        assert_eq!(graph.edge_weight("B", "C"), Some(2));

        assert!(engine.delete_node(&id, "B").unwrap());
        let graph = engine.get_graph(&id).unwrap();
        assert!(!graph.has_node("B"));
        assert_eq!(graph.edge_count(), 0);
    }
}
