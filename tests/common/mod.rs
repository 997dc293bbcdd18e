//! Shared helpers for wayfind integration tests

use wayfind::RouteGraph;

/// Build a graph from (from, to, weight) triples
pub fn graph_from_edges(name: &str, edges: &[(&str, &str, i64)]) -> RouteGraph {
    let mut graph = RouteGraph::new(name);
    for (from, to, weight) in edges {
        graph.add_edge(*from, *to, *weight);
    }
    graph
}
