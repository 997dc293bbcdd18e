//! Query result structures

use serde::{Deserialize, Serialize};

/// Result of a path query
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathResult {
    /// Whether a route was found
    pub found: bool,
    /// Node labels on the route, start first, goal last (empty when
    /// no route exists)
    pub path: Vec<String>,
    /// Node labels in the order BFS dequeued them; ends at the goal
    /// when one was reached, otherwise covers the whole reachable set
    pub visited: Vec<String>,
    /// Route length in edges
    pub hops: usize,
}

impl PathResult {
    pub fn not_found(visited: Vec<String>) -> Self {
        Self {
            found: false,
            path: Vec::new(),
            visited,
            hops: 0,
        }
    }

    pub fn found(path: Vec<String>, visited: Vec<String>) -> Self {
        let hops = path.len().saturating_sub(1);
        Self {
            found: true,
            path,
            visited,
            hops,
        }
    }
}
