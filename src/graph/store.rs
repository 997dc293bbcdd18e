//! RouteGraph: a bounded set of labeled nodes and directed weighted edges

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// Unique identifier for a graph
///
/// Serializes as a plain string (UUID or semantic ID like "graph:campus")
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GraphId(String);

impl GraphId {
    /// Create a new random GraphId (UUID-based)
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Create a GraphId from a string (semantic ID)
    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for GraphId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for GraphId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for GraphId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for GraphId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Metadata about a graph
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GraphMetadata {
    /// When the graph was created
    pub created_at: Option<DateTime<Utc>>,
    /// When the graph was last updated
    pub updated_at: Option<DateTime<Utc>>,
}

/// A directed, weighted graph over string-labeled nodes
///
/// Edges live in a nested adjacency mapping: node label to
/// (neighbor label to weight). Both levels are ordered maps, so node
/// and neighbor iteration is lexicographic and queries over the same
/// graph are deterministic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteGraph {
    /// Unique identifier
    pub id: GraphId,
    /// Human-readable name
    pub name: String,
    /// Optional description
    pub description: Option<String>,
    /// Outgoing edges per node; a node with no outgoing edges has an
    /// empty entry
    pub adjacency: BTreeMap<String, BTreeMap<String, i64>>,
    /// Graph metadata
    pub metadata: GraphMetadata,
}

impl RouteGraph {
    /// Create a new empty graph with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: GraphId::new(),
            name: name.into(),
            description: None,
            adjacency: BTreeMap::new(),
            metadata: GraphMetadata {
                created_at: Some(Utc::now()),
                ..Default::default()
            },
        }
    }

    /// Create a new empty graph with a specific ID and name
    pub fn with_id(id: GraphId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: None,
            adjacency: BTreeMap::new(),
            metadata: GraphMetadata {
                created_at: Some(Utc::now()),
                ..Default::default()
            },
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Add or overwrite the directed edge `from -> to`
    ///
    /// Both endpoints are created as nodes if absent. A second edge
    /// between the same ordered pair replaces the previous weight.
    pub fn add_edge(&mut self, from: impl Into<String>, to: impl Into<String>, weight: i64) {
        let from = from.into();
        let to = to.into();
        self.adjacency.entry(to.clone()).or_default();
        self.adjacency.entry(from).or_default().insert(to, weight);
        self.touch();
    }

    /// Delete a node and every edge that references it
    ///
    /// Returns `false` (and changes nothing) when the node is absent.
    pub fn delete_node(&mut self, label: &str) -> bool {
        if self.adjacency.remove(label).is_none() {
            return false;
        }
        for targets in self.adjacency.values_mut() {
            targets.remove(label);
        }
        self.touch();
        true
    }

    /// Check if a node exists
    pub fn has_node(&self, label: &str) -> bool {
        self.adjacency.contains_key(label)
    }

    /// Get the outgoing edges of a node (neighbor label to weight)
    ///
    /// `None` means the node does not exist; an existing node with no
    /// outgoing edges yields an empty mapping. Iteration over the
    /// returned mapping is lexicographic by neighbor label.
    pub fn neighbors(&self, label: &str) -> Option<&BTreeMap<String, i64>> {
        self.adjacency.get(label)
    }

    /// Get the weight of the edge `from -> to`, if present
    pub fn edge_weight(&self, from: &str, to: &str) -> Option<i64> {
        self.adjacency.get(from)?.get(to).copied()
    }

    /// All node labels, in lexicographic order
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.adjacency.keys().map(|label| label.as_str())
    }

    /// All edges as (from, to, weight) triples
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str, i64)> {
        self.adjacency.iter().flat_map(|(from, targets)| {
            targets
                .iter()
                .map(move |(to, weight)| (from.as_str(), to.as_str(), *weight))
        })
    }

    /// Get the number of nodes
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Get the number of edges
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(|targets| targets.len()).sum()
    }

    /// Update the last modified timestamp
    fn touch(&mut self) {
        self.metadata.updated_at = Some(Utc::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_edge_creates_both_endpoints() {
        let mut graph = RouteGraph::new("test");
        graph.add_edge("A", "B", 3);

        assert!(graph.has_node("A"));
        assert!(graph.has_node("B"));
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_weight("A", "B"), Some(3));
        // B exists but has no outgoing edges
        assert!(graph.neighbors("B").is_some_and(|t| t.is_empty()));
    }

    #[test]
    fn test_add_edge_same_pair_overwrites_weight() {
        let mut graph = RouteGraph::new("test");
        graph.add_edge("A", "B", 1);
        graph.add_edge("A", "B", 9);

        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.edge_weight("A", "B"), Some(9));
    }

    #[test]
    fn test_self_loop_is_a_regular_edge() {
        let mut graph = RouteGraph::new("test");
        graph.add_edge("A", "A", 2);

        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.edge_weight("A", "A"), Some(2));
    }

    #[test]
    fn test_delete_node_purges_edges_in_both_directions() {
        let mut graph = RouteGraph::new("test");
        graph.add_edge("A", "B", 1);
        graph.add_edge("B", "C", 1);
        graph.add_edge("C", "B", 1);

        assert!(graph.delete_node("B"));
        assert!(!graph.has_node("B"));
        assert!(graph
            .edges()
            .all(|(from, to, _)| from != "B" && to != "B"));
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_delete_absent_node_is_a_noop() {
        let mut graph = RouteGraph::new("test");
        graph.add_edge("A", "B", 1);
        let updated_at = graph.metadata.updated_at;

        assert!(!graph.delete_node("Z"));
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.metadata.updated_at, updated_at);
    }

    #[test]
    fn test_neighbors_missing_node_is_none() {
        let graph = RouteGraph::new("test");
        assert!(graph.neighbors("A").is_none());
    }

    #[test]
    fn test_nodes_and_neighbors_iterate_lexicographically() {
        let mut graph = RouteGraph::new("test");
        graph.add_edge("B", "Z", 1);
        graph.add_edge("B", "A", 1);
        graph.add_edge("C", "B", 1);

        let nodes: Vec<&str> = graph.nodes().collect();
        assert_eq!(nodes, ["A", "B", "C", "Z"]);

        let targets: Vec<&str> = graph
            .neighbors("B")
            .map(|t| t.keys().map(|k| k.as_str()).collect())
            .unwrap_or_default();
        assert_eq!(targets, ["A", "Z"]);
    }
}
