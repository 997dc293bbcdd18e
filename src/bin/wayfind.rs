//! Wayfind CLI: route graph shell and one-shot BFS queries.
//!
//! Usage:
//!   wayfind shell
//!   wayfind run <script>
//!   wayfind route --edge A:B:3 --edge B:C <start> <goal> [--json]

use clap::{Parser, Subcommand};
use std::io;
use std::path::{Path, PathBuf};
use wayfind::shell;
use wayfind::{PathQuery, RouteGraph};

#[derive(Parser)]
#[command(
    name = "wayfind",
    version,
    about = "In-memory route graph engine with breadth-first search"
)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive session
    Shell,
    /// Replay a command script, printing the session output
    Run {
        /// Path to the script file (one shell command per line)
        script: PathBuf,
    },
    /// Build a graph from edge specs and query one route
    Route {
        /// Directed edge spec, repeatable (weight defaults to 1)
        #[arg(long = "edge", value_name = "FROM:TO[:WEIGHT]")]
        edges: Vec<String>,
        /// Start node label
        start: String,
        /// Goal node label
        goal: String,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt().with_max_level(level).init();
}

fn cmd_shell() -> i32 {
    let stdin = io::stdin();
    match shell::run(stdin.lock(), io::stdout(), true) {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn cmd_run(script: &Path) -> i32 {
    match shell::run_script(script, io::stdout()) {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: cannot replay '{}': {}", script.display(), e);
            1
        }
    }
}

fn cmd_route(edges: &[String], start: &str, goal: &str, json: bool) -> i32 {
    let mut graph = RouteGraph::new("cli");
    for spec in edges {
        match shell::parse_edge_spec(spec) {
            Ok(edge) => {
                if let Some(notice) = &edge.notice {
                    eprintln!("warning: {}", notice);
                }
                graph.add_edge(edge.from, edge.to, edge.weight);
            }
            Err(message) => {
                eprintln!("Error: {}", message);
                return 1;
            }
        }
    }

    let result = match PathQuery::between(start, goal).execute(&graph) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };

    if json {
        return match serde_json::to_string_pretty(&result) {
            Ok(text) => {
                println!("{}", text);
                0
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                1
            }
        };
    }

    for node in &result.visited {
        println!("visited {}", node);
    }
    if result.found {
        println!("route: {} ({} hops)", result.path.join(" -> "), result.hops);
    } else {
        println!("no route from {} to {}", start, goal);
    }
    0
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let code = match cli.command {
        Commands::Shell => cmd_shell(),
        Commands::Run { script } => cmd_run(&script),
        Commands::Route {
            edges,
            start,
            goal,
            json,
        } => cmd_route(&edges, &start, &goal, json),
    };
    std::process::exit(code);
}
