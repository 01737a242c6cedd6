use std::path::PathBuf;

use super::*;
use crate::config::Config;
use crate::error::CompassError;
use tempfile::TempDir;

fn engine_for(root: &TempDir) -> ScanEngine {
    let roots = vec![root.path().to_path_buf()];
    ScanEngine::new(&Config::default(), &roots).unwrap()
}

fn write(root: &TempDir, rel: &str, content: &str) -> PathBuf {
    let path = root.path().join(rel);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn text_search_finds_line_with_query_as_match() {
    let temp = TempDir::new().unwrap();
    write(&temp, "a.py", "x = 1\n# TODO: fix this\ny = 2\n");

    let engine = engine_for(&temp);
    let hits = engine
        .search(&SearchQuery::new("TODO"), &CancelToken::new())
        .unwrap();

    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].line, 2);
    assert_eq!(hits[0].snippet, "# TODO: fix this");
    assert_eq!(hits[0].matched_text, "TODO");
}

#[test]
fn text_search_is_case_insensitive_by_default() {
    let temp = TempDir::new().unwrap();
    write(&temp, "a.py", "value = compute()\n");

    let engine = engine_for(&temp);
    let hits = engine
        .search(&SearchQuery::new("COMPUTE"), &CancelToken::new())
        .unwrap();
    assert_eq!(hits.len(), 1);
}

#[test]
fn case_sensitive_search_respects_case() {
    let temp = TempDir::new().unwrap();
    write(&temp, "a.py", "value = compute()\n");

    let engine = engine_for(&temp);
    let hits = engine
        .search(
            &SearchQuery::new("COMPUTE").case_sensitive(true),
            &CancelToken::new(),
        )
        .unwrap();
    assert!(hits.is_empty());
}

#[test]
fn one_hit_per_line_even_with_repeats() {
    let temp = TempDir::new().unwrap();
    write(&temp, "a.py", "foo foo foo\n");

    let engine = engine_for(&temp);
    let hits = engine
        .search(&SearchQuery::new("foo"), &CancelToken::new())
        .unwrap();
    assert_eq!(hits.len(), 1);
}

#[test]
fn regex_search_reports_first_match_span() {
    let temp = TempDir::new().unwrap();
    write(&temp, "a.py", "def alpha():\ndef beta():\n");

    let engine = engine_for(&temp);
    let hits = engine
        .search(
            &SearchQuery::new(r"def \w+").regex(true),
            &CancelToken::new(),
        )
        .unwrap();

    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0].matched_text, "def alpha");
    assert_eq!(hits[1].matched_text, "def beta");
}

#[test]
fn invalid_regex_is_a_query_level_error() {
    let temp = TempDir::new().unwrap();
    write(&temp, "a.py", "x = 1\n");

    let engine = engine_for(&temp);
    let err = engine
        .search(&SearchQuery::new("(unbalanced").regex(true), &CancelToken::new())
        .unwrap_err();
    assert!(matches!(err, CompassError::InvalidRegex { .. }));
}

#[test]
fn limit_truncates_mid_file() {
    let temp = TempDir::new().unwrap();
    write(&temp, "a.py", "hit\nhit\nhit\nhit\nhit\n");

    let engine = engine_for(&temp);
    let hits = engine
        .search(&SearchQuery::new("hit").limit(3), &CancelToken::new())
        .unwrap();
    assert_eq!(hits.len(), 3);
}

#[test]
fn path_prefix_narrows_the_walk() {
    let temp = TempDir::new().unwrap();
    write(&temp, "a.py", "eval(x)\n");
    write(&temp, "sub/b.py", "eval(y)\n");

    let engine = engine_for(&temp);
    let hits = engine
        .search(
            &SearchQuery::new("eval").path_prefix("sub"),
            &CancelToken::new(),
        )
        .unwrap();

    assert_eq!(hits.len(), 1);
    assert!(hits[0].path.ends_with("b.py"));
}

#[test]
fn non_source_files_are_not_searched() {
    let temp = TempDir::new().unwrap();
    write(&temp, "notes.md", "TODO everywhere\n");

    let engine = engine_for(&temp);
    let hits = engine
        .search(&SearchQuery::new("TODO"), &CancelToken::new())
        .unwrap();
    assert!(hits.is_empty());
}

#[test]
fn cancelled_token_stops_before_any_file() {
    let temp = TempDir::new().unwrap();
    write(&temp, "a.py", "needle\n");

    let engine = engine_for(&temp);
    let cancel = CancelToken::new();
    cancel.cancel();
    let hits = engine.search(&SearchQuery::new("needle"), &cancel).unwrap();
    assert!(hits.is_empty());
}

#[test]
fn find_todos_extracts_marker_and_text() {
    let temp = TempDir::new().unwrap();
    write(&temp, "a.js", "// FIXME: handle null case\n");

    let engine = engine_for(&temp);
    let todos = engine.find_todos("", &CancelToken::new());

    assert_eq!(todos.len(), 1);
    assert_eq!(todos[0].kind, "FIXME");
    assert_eq!(todos[0].text, "handle null case");
    assert_eq!(todos[0].snippet, "// FIXME: handle null case");
    assert_eq!(todos[0].line, 1);
}

#[test]
fn todo_markers_are_case_insensitive() {
    let temp = TempDir::new().unwrap();
    write(&temp, "a.py", "# todo clean up\n");

    let engine = engine_for(&temp);
    let todos = engine.find_todos("", &CancelToken::new());
    assert_eq!(todos.len(), 1);
    assert_eq!(todos[0].kind, "TODO");
    assert_eq!(todos[0].text, "clean up");
}

#[test]
fn one_line_can_yield_multiple_taxonomy_items() {
    let temp = TempDir::new().unwrap();
    write(&temp, "a.py", "# TODO: also a HACK: workaround\n");

    let engine = engine_for(&temp);
    let todos = engine.find_todos("", &CancelToken::new());

    let kinds: Vec<_> = todos.iter().map(|t| t.kind.as_str()).collect();
    assert!(kinds.contains(&"TODO"));
    assert!(kinds.contains(&"HACK"));
}

#[test]
fn scenario_search_and_todos_over_fixture_tree() {
    let temp = TempDir::new().unwrap();
    let mut a_content = String::from("# TODO: tighten validation\n");
    for i in 0..19 {
        a_content.push_str(&format!("x{i} = {i}\n"));
    }
    write(&temp, "a.py", &a_content);
    write(&temp, "sub/b.py", "result = eval(expr)\n");

    let engine = engine_for(&temp);

    let hits = engine
        .search(
            &SearchQuery::new("eval").path_prefix("sub"),
            &CancelToken::new(),
        )
        .unwrap();
    assert_eq!(hits.len(), 1);
    assert!(hits[0].path.ends_with("b.py"));

    let todos = engine.find_todos("", &CancelToken::new());
    assert_eq!(todos.len(), 1);
    assert!(todos[0].path.ends_with("a.py"));
}

#[test]
fn unreadable_files_are_skipped_not_fatal() {
    let temp = TempDir::new().unwrap();
    write(&temp, "good.py", "needle\n");
    // A file that fails the size gate mid-scan is skipped, not fatal.
    let big = temp.path().join("big.py");
    std::fs::write(&big, vec![b'x'; 11 * 1024 * 1024]).unwrap();

    let engine = engine_for(&temp);
    let hits = engine
        .search(&SearchQuery::new("needle"), &CancelToken::new())
        .unwrap();
    assert_eq!(hits.len(), 1);
}
