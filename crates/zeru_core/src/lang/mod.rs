//! Zeru language vocabulary registries.
//!
//! This module is the "front door" for language-level vocabulary: reserved keywords, operators, punctuation,
//! primitive type names, and string escape sequences.
//!
//! The design goal is to avoid stringly-typed checks scattered across the scanner and parser. Callers work with
//! **stable IDs** (e.g. `KeywordId`, `OperatorId`) and look up spellings/metadata via registry tables.
//!
//! ## Notes
//! - Registries are **pure**: no AST types, no IO, no side effects.
//! - Each table is ordered by its ID's discriminant, so `info_for` is a direct index. The guardrail tests in
//!   `tests/lang_registry_guardrails.rs` keep that ordering honest.
//!
//! ## Examples
//! ```rust
//! use zeru_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("fn"), Some(KeywordId::Fn));
//! assert_eq!(keywords::as_str(KeywordId::Fn), "fn");
//! ```

pub mod escapes;
pub mod keywords;
pub mod operators;
pub mod punctuation;
pub mod registry;
pub mod types;
