//! Phase 2 tests: the numeric menu driven from scripted input.

use std::io::Cursor;

use station_graph::cli::menu::{self, MenuChoice};
use station_graph::cli::StreamConsole;
use station_graph::graph::{GraphBuilder, Limits, StationGraph};

/// Run a menu session over `script` and return the graph plus everything
/// written to the console.
fn session(graph: StationGraph, script: &str) -> (StationGraph, String) {
    session_bytes(graph, script.as_bytes())
}

/// Like [`session`], for input that is not valid UTF-8.
fn session_bytes(mut graph: StationGraph, script: &[u8]) -> (StationGraph, String) {
    let mut console = StreamConsole::new(Cursor::new(script.to_vec()), Vec::new(), false);
    menu::run(&mut graph, &mut console).unwrap();
    let output = String::from_utf8(console.into_output()).unwrap();
    (graph, output)
}

// ==================== Menu Parsing ====================

#[test]
fn test_menu_choice_numbers() {
    for n in 0..=5 {
        let choice = MenuChoice::from_number(n).unwrap();
        assert_eq!(i64::from(choice.number()), n);
    }
    assert!(MenuChoice::from_number(6).is_none());
    assert!(MenuChoice::from_number(-1).is_none());
}

#[test]
fn test_menu_text() {
    let (_, out) = session(StationGraph::default(), "0\n");
    assert!(out.contains("Please select an option"));
    assert!(out.contains(" 1) Create station"));
    assert!(out.contains(" 2) Create station connection"));
    assert!(out.contains(" 3) Print all station connections"));
    assert!(out.contains(" 4) Delete a station"));
    assert!(out.contains(" 5) Delete a station connection"));
    assert!(out.contains(" 0) Terminate program"));
    assert!(out.contains(&"-".repeat(50)));
    assert!(out.contains("5 stations, 6 connections"));
}

#[test]
fn test_banner_shows_unbounded_limits() {
    let (_, out) = session(StationGraph::unbounded(), "0\n");
    assert!(out.contains("unlimited stations, unlimited connections"));
}

#[test]
fn test_non_numeric_choice_reprompts() {
    let (_, out) = session(StationGraph::default(), "hello\n0\n");
    assert_eq!(out.matches("Choice: ").count(), 2);
    assert!(!out.contains("Please select a valid option."));
}

#[test]
fn test_out_of_range_choice_rejected() {
    let (_, out) = session(StationGraph::default(), "9\n0\n");
    assert!(out.contains("Please select a valid option."));
}

#[test]
fn test_eof_ends_session() {
    let (_, out) = session(StationGraph::default(), "");
    assert_eq!(out.matches("Choice: ").count(), 1);
}

#[test]
fn test_undecodable_choice_reprompts() {
    let (graph, out) = session_bytes(StationGraph::default(), b"\xff\n1\nBank\n0\n");
    assert_eq!(out.matches("Choice: ").count(), 3);
    assert!(graph.station_exists("bank"));
}

#[test]
fn test_commands_after_exit_are_ignored() {
    let (graph, _) = session(StationGraph::default(), "0\n1\nlate\n");
    assert_eq!(graph.station_count(), 0);
}

// ==================== Create Station ====================

#[test]
fn test_create_station() {
    let (graph, out) = session(StationGraph::default(), "1\nKing's Cross\n0\n");
    assert!(graph.station_exists("KING'S CROSS"));
    assert!(out.contains("Station name: "));
    assert!(out.contains("Station king'scross created"));
}

#[test]
fn test_create_station_duplicate_reprompts() {
    let (graph, out) = session(StationGraph::default(), "1\nBank\n1\n BANK \nMonument\n0\n");
    assert!(out.contains("Station name BANK already exists!"));
    assert!(out.contains("Station monument created"));
    assert_eq!(graph.station_count(), 2);
}

#[test]
fn test_create_station_blank_reprompts() {
    let (graph, out) = session(StationGraph::default(), "1\n   \nEuston\n0\n");
    assert!(out.contains("Station name cannot be empty"));
    assert!(out.contains("Station euston created"));
    assert_eq!(graph.station_count(), 1);
}

#[test]
fn test_create_station_undecodable_name_reprompts() {
    let (graph, out) = session_bytes(StationGraph::default(), b"1\n\xff\xfe\nBank\n0\n");
    assert!(out.contains("Station name cannot be empty"));
    assert!(out.contains("Station bank created"));
    assert_eq!(graph.station_count(), 1);
}

#[test]
fn test_create_station_when_full() {
    let graph = GraphBuilder::new()
        .limits(Limits::fixed(1, 1))
        .station("only")
        .build()
        .unwrap();
    let (graph, out) = session(graph, "1\n0\n");
    assert!(out.contains("Station list is full"));
    assert!(!out.contains("Station name: "));
    assert_eq!(graph.station_count(), 1);
}

#[test]
fn test_eof_during_station_prompt() {
    let (graph, out) = session(StationGraph::default(), "1\n");
    assert!(out.contains("Station name: "));
    assert_eq!(graph.station_count(), 0);
}

// ==================== Connect Stations ====================

#[test]
fn test_connect_stations() {
    let graph = GraphBuilder::new().stations(&["a", "b"]).build().unwrap();
    let (graph, out) = session(graph, "2\nA\nb\n0\n");
    assert!(out.contains("Connect which station? "));
    assert!(out.contains("Connect A to ...? "));
    assert!(out.contains("Connected a with b"));
    assert!(graph.connection_exists("a", "b"));
}

#[test]
fn test_connect_unknown_station_rejected() {
    let graph = GraphBuilder::new().station("a").build().unwrap();
    let (graph, out) = session(graph, "2\na\nnowhere\n0\n");
    assert!(out.contains("Station nowhere does not exist"));
    assert_eq!(graph.connection_count(), 0);
}

#[test]
fn test_connect_duplicate_rejected() {
    let graph = GraphBuilder::new()
        .stations(&["a", "b"])
        .link("a", "b")
        .build()
        .unwrap();
    let (graph, out) = session(graph, "2\nb\na\n0\n");
    assert!(out.contains("Connection b-a already exists"));
    assert_eq!(graph.connection_count(), 1);
}

#[test]
fn test_connect_when_full() {
    let graph = GraphBuilder::new()
        .limits(Limits::fixed(3, 1))
        .stations(&["a", "b", "c"])
        .link("a", "b")
        .build()
        .unwrap();
    let (graph, out) = session(graph, "2\n0\n");
    assert!(out.contains("The connections list is full!"));
    assert!(!out.contains("Connect which station? "));
    assert_eq!(graph.connection_count(), 1);
}

// ==================== Print Connections ====================

#[test]
fn test_print_connections() {
    let graph = GraphBuilder::new()
        .stations(&["a", "b", "c"])
        .link("a", "b")
        .link("c", "b")
        .build()
        .unwrap();
    let (_, out) = session(graph, "3\n0\n");
    assert!(out.contains("|Stations|\t|Connections|"));
    assert!(out.contains("0 a\t0 b"));
    assert!(out.contains("1 c\t1 b"));
}

#[test]
fn test_print_connections_empty() {
    let (_, out) = session(StationGraph::default(), "3\n0\n");
    assert!(out.contains("No connections yet."));
}

// ==================== Delete Station ====================

#[test]
fn test_delete_station_cascades() {
    let graph = GraphBuilder::new()
        .stations(&["a", "b", "c"])
        .link("a", "b")
        .link("b", "c")
        .build()
        .unwrap();
    let (graph, out) = session(graph, "4\n1\n0\n");
    assert!(out.contains("Which station to delete?"));
    assert!(out.contains("Station 1: b (2 connection(s), added "));
    assert!(out.contains("Deleted connection a-b from the connection list."));
    assert!(out.contains("Deleted connection b-c from the connection list."));
    assert!(out.contains("Deleted station b from entry position number : 1"));
    assert!(!graph.station_exists("b"));
    assert_eq!(graph.connection_count(), 0);
}

#[test]
fn test_delete_station_non_numeric_reprompts() {
    let graph = GraphBuilder::new().stations(&["a", "b"]).build().unwrap();
    let (graph, out) = session(graph, "4\nfirst\n0\n0\n");
    assert_eq!(out.matches("Which station to delete?").count(), 2);
    assert!(out.contains("Deleted station a from entry position number : 0"));
    assert_eq!(graph.station_count(), 1);
}

#[test]
fn test_delete_station_index_equal_to_len_is_out_of_bounds() {
    let graph = GraphBuilder::new().stations(&["a", "b"]).build().unwrap();
    let (graph, out) = session(graph, "4\n2\n0\n");
    assert!(out.contains("Given number is out of bounds."));
    assert_eq!(graph.station_count(), 2);
}

#[test]
fn test_delete_station_negative_index_is_out_of_bounds() {
    let graph = GraphBuilder::new().station("a").build().unwrap();
    let (graph, out) = session(graph, "4\n-1\n0\n");
    assert!(out.contains("Given number is out of bounds."));
    assert_eq!(graph.station_count(), 1);
}

#[test]
fn test_delete_station_when_empty() {
    let (_, out) = session(StationGraph::default(), "4\n0\n");
    assert!(out.contains("There are no stations to delete."));
    assert!(!out.contains("Which station to delete?"));
}

// ==================== Delete Connection ====================

#[test]
fn test_delete_connection() {
    let graph = GraphBuilder::new()
        .stations(&["a", "b", "c"])
        .link("a", "b")
        .link("b", "c")
        .build()
        .unwrap();
    let (graph, out) = session(graph, "5\n0\n0\n");
    assert!(out.contains("Which connection to delete?"));
    assert!(out.contains("Deleted connection a-b from entry position number : 0"));
    assert!(!graph.connection_exists("a", "b"));
    assert!(graph.connection_exists("b", "c"));
    assert_eq!(graph.station_count(), 3);
}

#[test]
fn test_delete_connection_out_of_bounds() {
    let graph = GraphBuilder::new()
        .stations(&["a", "b"])
        .link("a", "b")
        .build()
        .unwrap();
    let (graph, out) = session(graph, "5\n1\n0\n");
    assert!(out.contains("Given number is out of bounds."));
    assert_eq!(graph.connection_count(), 1);
}

#[test]
fn test_delete_connection_when_empty() {
    let (_, out) = session(StationGraph::default(), "5\n0\n");
    assert!(out.contains("There are no connections to delete."));
}

// ==================== Full Session ====================

#[test]
fn test_full_session() {
    let script = "\
1\nAlpha\n\
1\nBeta\n\
1\nGamma\n\
2\nalpha\nBETA\n\
2\ngamma\nbeta\n\
3\n\
4\n1\n\
3\n\
0\n";
    let (graph, out) = session(StationGraph::default(), script);
    assert!(out.contains("Connected alpha with beta"));
    assert!(out.contains("Connected gamma with beta"));
    assert!(out.contains("Deleted station beta from entry position number : 1"));
    assert_eq!(graph.station_count(), 2);
    assert_eq!(graph.connection_count(), 0);
    assert!(out.contains("No connections yet."));
}

#[test]
fn test_color_output_wraps_messages() {
    let mut graph = StationGraph::default();
    let mut console = StreamConsole::new(Cursor::new("9\n0\n"), Vec::new(), true);
    menu::run(&mut graph, &mut console).unwrap();
    let out = String::from_utf8(console.into_output()).unwrap();
    assert!(out.contains("\x1b[31mPlease select a valid option.\x1b[0m"));
}
