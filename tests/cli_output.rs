//! Output tests for the `zeru` command implementations
//!
//! Run with: `cargo test --test cli_output`
//! Review changes: `cargo insta review`

use proptest::prelude::*;
use zeru::cli::commands::{check_source, dump_tokens};
use zeru::lexer::Lexer;

#[test]
fn test_lex_dump_snapshot() {
    let source = "fn add(a: i32) i32 {\n    return a + 1;\n}\n";
    let (tokens, errors) = Lexer::new(source).tokenize();
    assert!(errors.is_empty());
    insta::assert_snapshot!("lex_dump", dump_tokens(source, &tokens));
}

#[test]
fn test_check_source_error_lists_every_diagnostic() {
    let source = "fn main() {\n    var x\n    y = = 2;\n}\n";
    let err = check_source("broken.zr", source, None).unwrap_err();
    assert!(err.message.contains("broken.zr"));
    assert!(err.message.contains("needs a type annotation or an initial value"));
    assert!(err.message.contains("error(s) in broken.zr"));
}

proptest! {
    /// The driver never panics, whatever the input.
    #[test]
    fn check_source_is_total(source in "\\PC{0,128}") {
        match check_source("fuzz.zr", &source, Some(2)) {
            Ok(()) => {}
            Err(err) => prop_assert!(err.message.ends_with("fuzz.zr")),
        }
    }
}
