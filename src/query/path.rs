//! Path finding algorithms

use std::collections::{HashMap, HashSet, VecDeque};

use crate::graph::{RouteGraph, WayfindError, WayfindResult};

use super::types::PathResult;

/// Query for the shortest route (fewest edges) between two nodes
///
/// Edge weights are stored on the graph but never steer this search;
/// a one-hop route always beats a two-hop route regardless of weight.
/// Neighbors expand in the store's lexicographic order, so the route
/// chosen among equal-length alternatives is deterministic.
#[derive(Debug, Clone)]
pub struct PathQuery {
    /// Start node label
    pub start: String,
    /// Goal node label
    pub goal: String,
    /// Maximum number of hops to search (unbounded by default)
    pub max_hops: Option<usize>,
}

impl PathQuery {
    /// Create a new path query between two nodes
    pub fn between(start: impl Into<String>, goal: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            goal: goal.into(),
            max_hops: None,
        }
    }

    /// Cap the search at a maximum number of hops
    pub fn max_hops(mut self, max_hops: usize) -> Self {
        self.max_hops = Some(max_hops);
        self
    }

    /// Execute the path query (BFS for shortest route)
    ///
    /// Fails with `NodeNotFound` before any traversal when either
    /// endpoint is absent. An existing but unreachable goal is a
    /// negative result, not an error: `found` is false and the
    /// visitation log covers everything reachable from the start.
    pub fn execute(&self, graph: &RouteGraph) -> WayfindResult<PathResult> {
        if !graph.has_node(&self.start) {
            return Err(WayfindError::NodeNotFound(self.start.clone()));
        }
        if !graph.has_node(&self.goal) {
            return Err(WayfindError::NodeNotFound(self.goal.clone()));
        }

        // BFS with a FIFO frontier; parent pointers double as the
        // reachability record for reconstruction.
        let mut queue: VecDeque<(&str, usize)> = VecDeque::new();
        let mut visited: HashSet<&str> = HashSet::new();
        let mut parent: HashMap<&str, Option<&str>> = HashMap::new();
        let mut visit_log: Vec<String> = Vec::new();

        queue.push_back((self.start.as_str(), 0));
        visited.insert(self.start.as_str());
        parent.insert(self.start.as_str(), None);

        while let Some((current, hops)) = queue.pop_front() {
            visit_log.push(current.to_string());
            tracing::trace!(node = current, hops, "visiting");

            // Stop once the goal is dequeued, so the log never
            // contains nodes expanded after it.
            if current == self.goal {
                break;
            }

            if self.max_hops.is_some_and(|max| hops >= max) {
                continue;
            }

            let Some(targets) = graph.neighbors(current) else {
                continue;
            };
            for neighbor in targets.keys() {
                if visited.insert(neighbor.as_str()) {
                    parent.insert(neighbor.as_str(), Some(current));
                    queue.push_back((neighbor.as_str(), hops + 1));
                }
            }
        }

        // The goal has a parent entry iff it was reached; the start's
        // entry of "none" covers the start == goal case.
        if !parent.contains_key(self.goal.as_str()) {
            return Ok(PathResult::not_found(visit_log));
        }

        // Walk parent pointers from goal back to start, then reverse
        let mut path: Vec<String> = Vec::new();
        let mut cursor: Option<&str> = Some(self.goal.as_str());
        while let Some(node) = cursor {
            path.push(node.to_string());
            cursor = parent.get(node).copied().flatten();
        }
        path.reverse();

        Ok(PathResult::found(path, visit_log))
    }
}
