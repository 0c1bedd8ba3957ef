//! Syntax frontend for the Zeru language: scanner, parser, AST, diagnostics.
//!
//! This crate turns one UTF-8 source unit into a spanned syntax tree plus an ordered list of diagnostics. It is the
//! whole contract with downstream tooling; name resolution, type checking and code generation live elsewhere.
//!
//! ## Notes
//! - This crate is intentionally “syntax-only”: it does not do name resolution, type checking, or IR lowering.
//! - Vocabulary identity (keywords/operators/punctuation/primitive types) comes from `zeru_core::lang` registries.
//! - Parsing never aborts: [`parse_source`] always returns a (possibly partial) tree.
//!
//! ## Examples
//! ```rust
//! use zeru_syntax::parse_source;
//!
//! let output = parse_source("enum Shape { Circle(f64), Square(f64) }");
//! assert!(!output.has_errors());
//! assert_eq!(output.program.declarations.len(), 1);
//! ```
//!
//! ## See also
//! - `zeru_core::lang` for registry-backed language vocabulary.

pub mod ast;
pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod printer;
pub mod token_helpers;

pub use parser::{ParseOutput, parse_source, parse_source_cancellable};
