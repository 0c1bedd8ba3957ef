//! Parser for the Zeru programming language
//!
//! Converts a token stream into an AST. The parser is hand-written recursive descent with precedence climbing for
//! binary expressions and bounded speculation (checkpoint + restore) for the grammar's local ambiguities:
//! generic type vs. plain name, generic call vs. comparison, and struct literal vs. identifier.
//!
//! ## Examples
//!
//! ```rust
//! use zeru_syntax::{lexer, parser};
//!
//! let source = "fn add(a: i32, b: i32) i32 { return a + b; }";
//! let tokens = lexer::lex(source).unwrap();
//! let ast = parser::parse(&tokens).unwrap();
//! assert_eq!(ast.declarations.len(), 1);
//! ```

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::ast::*;
use crate::diagnostics::{self, CompileError};
use crate::lexer::{Lexer, Token, TokenKind};
use zeru_core::lang::keywords::{self, KeywordId};
use zeru_core::lang::operators::{self, Associativity, Fixity, OperatorId, OperatorInfo};
use zeru_core::lang::punctuation::PunctuationId;
use zeru_core::lang::types as primitive_types;

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module (preserving privacy + call patterns) while avoiding
// a single large source file.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/decl.rs");
include!("parser/types.rs");
include!("parser/stmts.rs");
include!("parser/expr.rs");
include!("parser/util.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
