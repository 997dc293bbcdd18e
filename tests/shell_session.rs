//! Script-driven shell sessions

use std::io::{Cursor, Write};
use wayfind::shell;

const SCRIPT: &str = "edge Gate Quad\n\
                      edge Quad Library 2\n\
                      edge Gate Library 9\n\
                      route Gate Library\n\
                      quit\n\
                      edge Never Lands\n";

fn run_lines(script: &str) -> String {
    let mut out: Vec<u8> = Vec::new();
    shell::run(Cursor::new(script), &mut out, false).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn session_builds_and_routes() {
    let output = run_lines(SCRIPT);

    assert!(output.contains("added Gate -> Quad (1)"));
    assert!(output.contains("added Quad -> Library (2)"));
    assert!(output.contains("route: Gate -> Library (1 hops)"));
}

#[test]
fn quit_stops_the_session() {
    let output = run_lines(SCRIPT);
    assert!(!output.contains("Never"));
}

#[test]
fn script_replay_matches_fed_lines() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{}", SCRIPT).unwrap();

    let mut replayed: Vec<u8> = Vec::new();
    shell::run_script(file.path(), &mut replayed).unwrap();

    assert_eq!(String::from_utf8(replayed).unwrap(), run_lines(SCRIPT));
}

#[test]
fn weight_policy_applies_at_the_boundary() {
    let output = run_lines("edge A B fast\nneighbors A\n");

    assert!(output.contains("weight 'fast' is not an integer, using 1"));
    assert!(output.contains("A -> B (1)"));
}

#[test]
fn no_route_is_reported_not_errored() {
    let output = run_lines("edge B A\nroute A B\n");

    assert!(output.contains("visited A"));
    assert!(output.contains("no route from A to B"));
}

#[test]
fn route_with_missing_endpoint_is_an_error_message() {
    let output = run_lines("edge A B\nroute A Z\n");
    assert!(output.contains("error: Node not found: Z"));
}

#[test]
fn dot_highlights_only_the_last_route() {
    let output = run_lines("edge A B\nedge B C\nroute A C\ndot\n");

    assert!(output.contains("\"A\" -> \"B\" [label=1 color=red];"));
    assert!(output.contains("\"B\" -> \"C\" [label=1 color=red];"));

    // A mutation invalidates the highlight
    let output = run_lines("edge A B\nroute A B\ndelete B\ndot\n");
    assert!(!output.contains("color=red"));
}
