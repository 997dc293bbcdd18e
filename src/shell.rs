//! Interactive session shell over a wayfind engine
//!
//! A line-oriented command language for building a graph and querying
//! routes within one process; nothing is persisted between sessions.
//! The shell runs over any `BufRead`/`Write` pair, so sessions are
//! scriptable and testable without a terminal.
//!
//! Input policy at this boundary: empty or missing labels are
//! rejected with a usage message, and a missing or non-integer weight
//! falls back to [`DEFAULT_EDGE_WEIGHT`] (with a printed notice for
//! the non-integer case). The graph API itself only ever takes a
//! well-formed `i64`.

use std::io::{self, BufRead, Write};
use std::path::Path;

use crate::graph::{GraphId, RouteGraph, WayfindEngine};
use crate::query::PathQuery;
use crate::render;

/// Weight applied when an edge command omits the weight or supplies a
/// non-integer
pub const DEFAULT_EDGE_WEIGHT: i64 = 1;

const HELP: &str = "commands:
  edge <from> <to> [weight]   add or overwrite a directed edge
  delete <node>               delete a node and every edge touching it
  neighbors <node>            list outgoing edges of a node
  nodes                       list all nodes
  route <start> <goal>        shortest route by hop count
  dot                         render the graph as Graphviz DOT
  open <name>                 switch to (or create) a named graph
  graphs                      list graphs in this session
  help                        show this message
  quit                        end the session";

/// Result of executing one command line
pub enum Outcome {
    /// Text to print (may span multiple lines)
    Output(String),
    /// Blank input, nothing to do
    Silent,
    /// The session was asked to end
    Quit,
}

/// One interactive session: an engine, the graph it is pointed at,
/// and the last found route (presentation state, cleared on any
/// mutation so a stale highlight is never rendered)
pub struct Session {
    engine: WayfindEngine,
    current: GraphId,
    last_route: Option<Vec<String>>,
}

impl Session {
    /// Create a session with a single empty scratch graph
    pub fn new() -> Self {
        let engine = WayfindEngine::new();
        let scratch = RouteGraph::with_id(GraphId::from_string("graph:scratch"), "scratch");
        let current = engine.upsert_graph(scratch);
        Self {
            engine,
            current,
            last_route: None,
        }
    }

    /// Execute a single command line
    pub fn execute(&mut self, line: &str) -> Outcome {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        match tokens.as_slice() {
            [] => Outcome::Silent,
            ["quit" | "exit"] => Outcome::Quit,
            ["help"] => Outcome::Output(HELP.to_string()),
            ["edge", from, to] => self.cmd_edge(from, to, None),
            ["edge", from, to, weight] => self.cmd_edge(from, to, Some(weight)),
            ["edge", ..] => usage("edge <from> <to> [weight]"),
            ["delete", node] => self.cmd_delete(node),
            ["delete", ..] => usage("delete <node>"),
            ["neighbors", node] => self.cmd_neighbors(node),
            ["neighbors", ..] => usage("neighbors <node>"),
            ["nodes"] => self.cmd_nodes(),
            ["route", start, goal] => self.cmd_route(start, goal),
            ["route", ..] => usage("route <start> <goal>"),
            ["dot"] => self.cmd_dot(),
            ["open", name] => self.cmd_open(name),
            ["open", ..] => usage("open <name>"),
            ["graphs"] => self.cmd_graphs(),
            [command, ..] => Outcome::Output(format!("unknown command '{command}' (try 'help')")),
        }
    }

    fn cmd_edge(&mut self, from: &str, to: &str, raw_weight: Option<&str>) -> Outcome {
        let (weight, notice) = parse_weight(raw_weight);
        let mut lines = Vec::new();
        if let Some(notice) = notice {
            lines.push(notice);
        }
        match self.engine.add_edge(&self.current, from, to, weight) {
            Ok(()) => {
                self.last_route = None;
                lines.push(format!("added {from} -> {to} ({weight})"));
            }
            Err(e) => lines.push(format!("error: {e}")),
        }
        Outcome::Output(lines.join("\n"))
    }

    fn cmd_delete(&mut self, node: &str) -> Outcome {
        match self.engine.delete_node(&self.current, node) {
            Ok(true) => {
                self.last_route = None;
                Outcome::Output(format!("deleted {node}"))
            }
            Ok(false) => Outcome::Output(format!("no such node '{node}'")),
            Err(e) => Outcome::Output(format!("error: {e}")),
        }
    }

    fn cmd_neighbors(&self, node: &str) -> Outcome {
        match self.engine.neighbors(&self.current, node) {
            Ok(targets) if targets.is_empty() => {
                Outcome::Output(format!("{node} has no outgoing edges"))
            }
            Ok(targets) => {
                let lines: Vec<String> = targets
                    .iter()
                    .map(|(to, weight)| format!("{node} -> {to} ({weight})"))
                    .collect();
                Outcome::Output(lines.join("\n"))
            }
            Err(e) => Outcome::Output(format!("error: {e}")),
        }
    }

    fn cmd_nodes(&self) -> Outcome {
        match self.engine.get_graph(&self.current) {
            Some(graph) if graph.node_count() == 0 => Outcome::Output("graph is empty".to_string()),
            Some(graph) => Outcome::Output(graph.nodes().collect::<Vec<_>>().join(", ")),
            None => Outcome::Output("error: current graph is gone".to_string()),
        }
    }

    fn cmd_route(&mut self, start: &str, goal: &str) -> Outcome {
        match self
            .engine
            .find_path(&self.current, &PathQuery::between(start, goal))
        {
            Ok(result) => {
                let mut lines: Vec<String> = result
                    .visited
                    .iter()
                    .map(|node| format!("visited {node}"))
                    .collect();
                if result.found {
                    lines.push(format!(
                        "route: {} ({} hops)",
                        result.path.join(" -> "),
                        result.hops
                    ));
                    self.last_route = Some(result.path);
                } else {
                    lines.push(format!("no route from {start} to {goal}"));
                    self.last_route = None;
                }
                Outcome::Output(lines.join("\n"))
            }
            Err(e) => Outcome::Output(format!("error: {e}")),
        }
    }

    fn cmd_dot(&self) -> Outcome {
        match self.engine.get_graph(&self.current) {
            Some(graph) => Outcome::Output(render::to_dot(&graph, self.last_route.as_deref())),
            None => Outcome::Output("error: current graph is gone".to_string()),
        }
    }

    fn cmd_open(&mut self, name: &str) -> Outcome {
        let id = match find_graph_by_name(&self.engine, name) {
            Some(id) => id,
            None => {
                let graph =
                    RouteGraph::with_id(GraphId::from_string(format!("graph:{name}")), name);
                self.engine.upsert_graph(graph)
            }
        };
        self.current = id;
        self.last_route = None;
        Outcome::Output(format!("using graph '{name}'"))
    }

    fn cmd_graphs(&self) -> Outcome {
        let mut graphs: Vec<RouteGraph> = self
            .engine
            .list_graphs()
            .iter()
            .filter_map(|id| self.engine.get_graph(id))
            .collect();
        graphs.sort_by(|a, b| a.name.cmp(&b.name));

        let lines: Vec<String> = graphs
            .iter()
            .map(|graph| {
                let marker = if graph.id == self.current { '*' } else { ' ' };
                format!(
                    "{marker} {} ({} nodes, {} edges)",
                    graph.name,
                    graph.node_count(),
                    graph.edge_count()
                )
            })
            .collect();
        Outcome::Output(lines.join("\n"))
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Parsed `FROM:TO[:WEIGHT]` edge spec
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeSpec {
    pub from: String,
    pub to: String,
    pub weight: i64,
    /// Notice to surface when the weight fell back to the default
    pub notice: Option<String>,
}

/// Parse a `FROM:TO[:WEIGHT]` edge spec as used by `wayfind route --edge`
pub fn parse_edge_spec(spec: &str) -> Result<EdgeSpec, String> {
    let mut parts = spec.splitn(3, ':');
    let from = parts.next().unwrap_or("");
    let to = parts.next().unwrap_or("");
    if from.is_empty() || to.is_empty() {
        return Err(format!("invalid edge spec '{spec}', expected FROM:TO[:WEIGHT]"));
    }
    let (weight, notice) = parse_weight(parts.next());
    Ok(EdgeSpec {
        from: from.to_string(),
        to: to.to_string(),
        weight,
        notice,
    })
}

/// Apply the documented weight policy: missing means the default,
/// non-integer means the default plus a notice
fn parse_weight(raw: Option<&str>) -> (i64, Option<String>) {
    match raw {
        None => (DEFAULT_EDGE_WEIGHT, None),
        Some(text) => match text.parse() {
            Ok(weight) => (weight, None),
            Err(_) => (
                DEFAULT_EDGE_WEIGHT,
                Some(format!(
                    "weight '{text}' is not an integer, using {DEFAULT_EDGE_WEIGHT}"
                )),
            ),
        },
    }
}

fn usage(expected: &str) -> Outcome {
    Outcome::Output(format!("usage: {expected}"))
}

/// Find a graph by name, returning its ID
fn find_graph_by_name(engine: &WayfindEngine, name: &str) -> Option<GraphId> {
    engine.list_graphs().into_iter().find(|id| {
        engine
            .get_graph(id)
            .map(|graph| graph.name == name)
            .unwrap_or(false)
    })
}

/// Run a session over the given reader/writer until EOF or `quit`
///
/// With `interactive` set, a prompt is written before each line.
pub fn run<R: BufRead, W: Write>(reader: R, mut writer: W, interactive: bool) -> io::Result<()> {
    let mut session = Session::new();
    if interactive {
        writeln!(writer, "wayfind {} (type 'help' for commands)", crate::VERSION)?;
        prompt(&mut writer)?;
    }
    for line in reader.lines() {
        let line = line?;
        match session.execute(&line) {
            Outcome::Output(text) => writeln!(writer, "{text}")?,
            Outcome::Silent => {}
            Outcome::Quit => return Ok(()),
        }
        if interactive {
            prompt(&mut writer)?;
        }
    }
    Ok(())
}

/// Replay a command script from a file, non-interactively
pub fn run_script<W: Write>(path: &Path, writer: W) -> io::Result<()> {
    let file = std::fs::File::open(path)?;
    run(io::BufReader::new(file), writer, false)
}

fn prompt<W: Write>(writer: &mut W) -> io::Result<()> {
    write!(writer, "wayfind> ")?;
    writer.flush()
}
