#![forbid(unsafe_code)]
//! Zeru Programming Language Frontend
//!
//! Zeru is a small systems language with C/Rust-like syntax. This crate bundles the `zeru` command-line driver and
//! re-exports the syntax frontend: scanner, parser, AST and diagnostics live in `zeru_syntax`, and the canonical
//! vocabulary (keywords, operators, punctuation, primitive types) lives in `zeru_core`.
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **User input**: Malformed source never panics; it produces diagnostics and a partial tree.

pub mod cli;

pub use zeru_core::lang;
pub use zeru_syntax::{ast, diagnostics, lexer, parser, printer};
pub use zeru_syntax::{ParseOutput, parse_source, parse_source_cancellable};
