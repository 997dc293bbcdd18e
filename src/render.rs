//! Graphviz DOT rendering of route graphs
//!
//! The renderer is a pure function of the graph and an optional
//! highlighted route: route edges come out red, all other edges gold,
//! nodes as filled light-blue circles with the edge weight as label.

use crate::graph::RouteGraph;

/// Render a graph as Graphviz DOT
///
/// When `route` is given, every edge that connects consecutive route
/// nodes is drawn red; the rest stay gold.
pub fn to_dot(graph: &RouteGraph, route: Option<&[String]>) -> String {
    let mut dot = String::new();
    dot.push_str(&format!("digraph {} {{\n", quote(&graph.name)));
    dot.push_str("    node [shape=circle style=filled fillcolor=lightblue];\n");

    for node in graph.nodes() {
        dot.push_str(&format!("    {};\n", quote(node)));
    }

    for (from, to, weight) in graph.edges() {
        let color = match route {
            Some(route) if on_route(route, from, to) => "red",
            _ => "gold",
        };
        dot.push_str(&format!(
            "    {} -> {} [label={} color={}];\n",
            quote(from),
            quote(to),
            weight,
            color
        ));
    }

    dot.push('}');
    dot
}

/// Check whether `from -> to` connects consecutive nodes of the route
fn on_route(route: &[String], from: &str, to: &str) -> bool {
    route
        .windows(2)
        .any(|pair| pair[0] == from && pair[1] == to)
}

/// Quote a label as a DOT string literal
fn quote(label: &str) -> String {
    let mut quoted = String::with_capacity(label.len() + 2);
    quoted.push('"');
    for ch in label.chars() {
        if ch == '"' || ch == '\\' {
            quoted.push('\\');
        }
        quoted.push(ch);
    }
    quoted.push('"');
    quoted
}
