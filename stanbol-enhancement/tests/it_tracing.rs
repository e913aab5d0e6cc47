//! Spans and events emitted by a parse.

mod support;

use stanbol_enhancement::{create_annotation_graph, parse_enhancements, ParseOptions};
use support::trace_capture::capture_traces;
use support::{paris_fixture, Fixture};
use tracing::Level;

#[test]
fn parse_emits_nested_spans() {
    let (capture, _guard) = capture_traces();
    let store = paris_fixture().store();
    create_annotation_graph(&store).unwrap();

    assert_eq!(
        capture.span_names(),
        vec!["parse_enhancements", "resolve_relations"]
    );

    let parse = capture.span("parse_enhancements").unwrap();
    assert_eq!(parse.level, Level::DEBUG);
    assert_eq!(parse.parent, None);
    assert_eq!(parse.fields.get("enhancements").map(String::as_str), Some("2"));
    assert_eq!(parse.fields.get("entities").map(String::as_str), Some("1"));

    let resolve = capture.span("resolve_relations").unwrap();
    assert_eq!(resolve.parent, Some("parse_enhancements"));
    // ta1 was already discovered, so nothing is queued
    assert_eq!(resolve.fields.get("seeded").map(String::as_str), Some("0"));
    assert_eq!(resolve.fields.get("resolved").map(String::as_str), Some("0"));
}

#[test]
fn dropped_relations_are_logged() {
    let (capture, _guard) = capture_traces();
    let store = Fixture::new()
        .entity_annotation("ea1", 0.9)
        .relation("ea1", "gone")
        .store();
    parse_enhancements(&store, &ParseOptions::default()).unwrap();

    let warnings = capture.events_at(Level::WARN);
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].message, "dropping unresolved relation");
    assert_eq!(
        warnings[0].fields.get("to").map(String::as_str),
        Some(support::enh("gone").as_str())
    );

    let resolve = capture.span("resolve_relations").unwrap();
    assert_eq!(resolve.fields.get("seeded").map(String::as_str), Some("1"));
    assert_eq!(resolve.fields.get("resolved").map(String::as_str), Some("0"));
}

#[test]
fn clean_parse_logs_no_warnings() {
    let (capture, _guard) = capture_traces();
    let store = paris_fixture().store();
    create_annotation_graph(&store).unwrap();
    assert!(capture.events_at(Level::WARN).is_empty());
    assert!(!capture.events_at(Level::DEBUG).is_empty());
}
