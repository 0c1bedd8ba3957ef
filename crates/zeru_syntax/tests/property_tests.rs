//! Property-based tests for the Zeru syntax frontend
//!
//! These tests use proptest to verify invariants across many randomly
//! generated inputs, catching edge cases that hand-written tests might miss.

use std::time::{Duration, Instant};

use proptest::prelude::*;
use zeru_core::lang::operators;
use zeru_syntax::lexer::{Lexer, TokenKind};
use zeru_syntax::{parse_source, printer};

const BINARY_OPS: &[&str] = &[
    "||", "&&", "|", "^", "&", "==", "!=", "<", ">", "<=", ">=", "<<", ">>", ">>>", "+", "-", "*", "/", "%",
];

const RELATIONAL_OPS: &[&str] = &["<", ">", "<=", ">="];

/// Generous wall-clock ceiling for inputs a linear parser handles in well under a millisecond per kilobyte.
const PARSE_BUDGET: Duration = Duration::from_secs(2);

const SOUP: &[&str] = &[
    "fn", "struct", "enum", "trait", "import", "const", "var", "pub", "if", "else", "while", "for", "in", "return",
    "match", "default", "as", "x", "T", "i32", "Array", "1", "2.5", "\"s\"", "'c'", "(", ")", "{", "}", "[", "]",
    "<", ">", ">>", "=", "+=", "..", "::", ":", ";", ",", ".", "=>", "?", "!", "&", "*", "-",
];

// =============================================================================
// Strategies
// =============================================================================

fn leaf() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(vec!["a", "b", "count", "x1"]).prop_map(String::from),
        (0u32..1000).prop_map(|n| n.to_string()),
    ]
}

/// Well-formed expressions; every binary form is parenthesized so the source is unambiguous.
fn expr() -> impl Strategy<Value = String> {
    leaf().prop_recursive(4, 32, 3, |inner| {
        prop_oneof![
            (inner.clone(), prop::sample::select(BINARY_OPS), inner.clone())
                .prop_map(|(l, op, r)| format!("({} {} {})", l, op, r)),
            inner.clone().prop_map(|e| format!("-{}", e)),
            inner.clone().prop_map(|e| format!("!{}", e)),
            (inner.clone(), inner.clone()).prop_map(|(a, b)| format!("f({}, {})", a, b)),
            inner.clone().prop_map(|e| format!("v[{}]", e)),
            inner.prop_map(|e| format!("({}).len()", e)),
        ]
    })
}

fn program_for(expr: &str) -> String {
    format!("fn main() {{\n    r = {};\n}}\n", expr)
}

fn precedence(spelling: &str) -> u8 {
    let id = operators::from_str(spelling).expect("operator spelling");
    operators::info_for(id).precedence
}

/// Lex `source` and return every token's source text, excluding `Eof`.
fn token_texts(source: &str) -> Vec<String> {
    let (tokens, _) = Lexer::new(source).tokenize();
    tokens
        .iter()
        .filter(|t| !matches!(t.kind, TokenKind::Eof))
        .map(|t| t.text(source).to_string())
        .collect()
}

fn assert_well_formed_spans(source: &str) {
    let output = parse_source(source);
    assert_eq!(output.program.span.start, 0);
    assert_eq!(output.program.span.end, source.len());
    for diag in &output.diagnostics {
        assert!(diag.span.start <= diag.span.end, "{:?}", diag);
        assert!(diag.span.end <= source.len(), "{:?}", diag);
    }
}

fn nested_struct_literal(depth: usize) -> String {
    let mut literal = "1".to_string();
    for _ in 0..depth {
        literal = format!("P {{ f: {} }}", literal);
    }
    literal
}

fn nested_type_args(depth: usize) -> String {
    let mut ty = "i32".to_string();
    for _ in 0..depth {
        ty = format!("A<{}>", ty);
    }
    ty
}

/// Parse `source` and check it finishes inside [`PARSE_BUDGET`] without diagnostics.
fn assert_parses_quickly(source: &str) -> Result<zeru_syntax::ParseOutput, TestCaseError> {
    let started = Instant::now();
    let output = parse_source(source);
    let elapsed = started.elapsed();
    prop_assert!(elapsed < PARSE_BUDGET, "took {:?}", elapsed);
    prop_assert!(output.diagnostics.is_empty(), "{:?}", output.diagnostics);
    Ok(output)
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Generated well-formed programs parse without diagnostics.
    #[test]
    fn generated_programs_parse_cleanly(e in expr()) {
        let source = program_for(&e);
        let output = parse_source(&source);
        prop_assert!(output.diagnostics.is_empty(), "{}: {:?}", source, output.diagnostics);
    }

    /// Token texts cover the source exactly, apart from whitespace.
    #[test]
    fn tokens_cover_source(e in expr()) {
        let source = program_for(&e);
        let joined: String = token_texts(&source).concat();
        let stripped: String = source.chars().filter(|c| !c.is_whitespace()).collect();
        prop_assert_eq!(joined, stripped);
    }

    /// Re-spacing the token stream does not change the tree.
    #[test]
    fn respacing_preserves_tree(e in expr()) {
        let source = program_for(&e);
        let respaced = token_texts(&source).join(" ");
        let original = printer::render(&parse_source(&source).program);
        let reparsed = printer::render(&parse_source(&respaced).program);
        prop_assert_eq!(original, reparsed);
    }

    /// `a o1 b o2 c` groups by precedence, then to the left.
    #[test]
    fn binary_operators_group_by_precedence(
        o1 in prop::sample::select(BINARY_OPS),
        o2 in prop::sample::select(BINARY_OPS),
    ) {
        let source = format!("fn main() {{ r = a {} b {} c; }}", o1, o2);
        let output = parse_source(&source);
        prop_assert!(output.diagnostics.is_empty(), "{}: {:?}", source, output.diagnostics);

        let expected = if precedence(o2) > precedence(o1) {
            format!("(= r ({} a ({} b c)))", o1, o2)
        } else {
            format!("(= r ({} ({} a b) c))", o2, o1)
        };
        let rendered = printer::render(&output.program);
        let line = rendered.lines().nth(2).unwrap_or_default().trim().to_string();
        let actual = line.strip_prefix("assign r = ").map(|rhs| format!("(= r {})", rhs));
        prop_assert_eq!(actual, Some(expected));
    }

    /// Arbitrary text never panics and always yields in-bounds spans.
    #[test]
    fn arbitrary_input_is_total(source in "\\PC{0,256}") {
        assert_well_formed_spans(&source);
    }

    /// Shuffled vocabulary exercises every recovery path without panicking.
    #[test]
    fn token_soup_is_total(words in prop::collection::vec(prop::sample::select(SOUP), 0..64)) {
        let source = words.join(" ");
        assert_well_formed_spans(&source);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Long chains of relational operators parse as left-nested comparisons in linear time.
    #[test]
    fn relational_chains_parse_in_linear_time(
        ops in prop::collection::vec(prop::sample::select(RELATIONAL_OPS), 200..2000),
    ) {
        let mut chain = String::from("a0");
        for (i, op) in ops.iter().enumerate() {
            chain.push_str(&format!(" {} a{}", op, i + 1));
        }
        let output = assert_parses_quickly(&program_for(&chain))?;
        prop_assert_eq!(output.program.declarations.len(), 1);
    }

    /// Nested struct literals and nested generic calls each resolve with a single speculative parse per level.
    #[test]
    fn nested_speculation_is_bounded(depth in 1usize..32) {
        let literal = nested_struct_literal(depth);
        let output = assert_parses_quickly(&program_for(&literal))?;
        let rendered = printer::render(&output.program);
        prop_assert_eq!(rendered.matches("struct-lit P").count(), depth);

        let call = format!("f<{}>(x) < g", nested_type_args(depth));
        let output = assert_parses_quickly(&program_for(&call))?;
        let rendered = printer::render(&output.program);
        prop_assert!(rendered.contains("(call f (type-args A<"), "{}", rendered);
    }
}
