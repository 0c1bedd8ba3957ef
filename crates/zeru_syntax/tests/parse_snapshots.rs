//! Golden snapshot tests for the parser
//!
//! These tests parse `.zr` input files and compare the rendered syntax tree (plus any diagnostics) against stored
//! snapshots. This ensures parser changes are reviewed and intentional.
//!
//! Run with: `cargo test -p zeru_syntax --test parse_snapshots`
//! Review changes: `cargo insta review`

use std::fs;

use zeru_syntax::diagnostics::LineIndex;
use zeru_syntax::{parse_source, printer};

/// Load a test file from the fixtures directory
fn load_fixture(name: &str) -> String {
    let path = format!("tests/fixtures/{}.zr", name);
    fs::read_to_string(&path).unwrap_or_else(|_| panic!("Failed to read fixture: {}", path))
}

/// Render the tree, then every diagnostic as `line:col kind: message`.
fn render_fixture(name: &str) -> String {
    let source = load_fixture(name);
    let output = parse_source(&source);
    let mut out = printer::render(&output.program);
    if output.has_errors() {
        let index = LineIndex::new(&source);
        out.push_str("diagnostics:\n");
        for diag in &output.diagnostics {
            let (line, col) = index.line_col(diag.span.start);
            out.push_str(&format!("  {}:{} {}: {}\n", line, col, diag.kind, diag.message));
        }
    }
    out
}

#[test]
fn test_shapes_snapshot() {
    let out = render_fixture("shapes");
    insta::assert_snapshot!("shapes", out);
}

#[test]
fn test_control_flow_snapshot() {
    let out = render_fixture("control_flow");
    insta::assert_snapshot!("control_flow", out);
}

#[test]
fn test_recovery_snapshot() {
    let out = render_fixture("recovery");
    insta::assert_snapshot!("recovery", out);
}

#[test]
fn test_clean_fixtures_have_no_diagnostics() {
    for name in ["shapes", "control_flow"] {
        let output = parse_source(&load_fixture(name));
        assert!(output.diagnostics.is_empty(), "{}: {:?}", name, output.diagnostics);
    }
}
