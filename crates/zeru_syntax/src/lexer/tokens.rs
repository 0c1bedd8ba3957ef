//! Token types for the Zeru scanner.
//!
//! The scanner uses **registry-backed IDs** for language vocabulary:
//! - `Keyword(KeywordId)` for reserved words (including `true`, `false`, `None`)
//! - `Operator(OperatorId)` for operators
//! - `Punctuation(PunctuationId)` for punctuation tokens
//!
//! ## Notes
//! - ID-bearing tokens avoid stringly-typed checks in the parser.
//! - Use `crate::token_helpers` for ergonomic token matching at call sites.

use std::fmt;

use crate::ast::Span;
use zeru_core::lang::keywords::{self, KeywordId};
use zeru_core::lang::operators::{self, OperatorId};
use zeru_core::lang::punctuation::{self, PunctuationId};

// ============================================================================
// TOKEN TYPES
// ============================================================================

/// Kind of token produced by the scanner.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    // ========== Keyword / operator / punctuation (ID-based) ==========
    Keyword(KeywordId),
    Operator(OperatorId),
    Punctuation(PunctuationId),

    // ========== Identifiers and Literals ==========
    Ident(String),
    Int(u64),
    Float(f64),
    String(String),
    Char(char),

    // ========== Special ==========
    Eof,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Keyword(id) => write!(f, "keyword `{}`", keywords::as_str(*id)),
            TokenKind::Operator(id) => write!(f, "`{}`", operators::as_str(*id)),
            TokenKind::Punctuation(id) => write!(f, "`{}`", punctuation::as_str(*id)),
            TokenKind::Ident(name) => write!(f, "identifier `{}`", name),
            TokenKind::Int(n) => write!(f, "integer `{}`", n),
            TokenKind::Float(n) => write!(f, "float `{}`", n),
            TokenKind::String(s) => write!(f, "string {:?}", s),
            TokenKind::Char(c) => write!(f, "char {:?}", c),
            TokenKind::Eof => write!(f, "end of input"),
        }
    }
}

/// A token with its kind and source span.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    /// Construct a new token.
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Return the exact source text of this token.
    pub fn text<'s>(&self, source: &'s str) -> &'s str {
        self.span.slice(source)
    }
}

/// Resolve an identifier spelling to a keyword id, if reserved.
pub fn keyword_id(name: &str) -> Option<KeywordId> {
    keywords::from_str(name)
}
