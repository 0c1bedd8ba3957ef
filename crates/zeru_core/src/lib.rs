//! Provide the canonical language vocabulary for the Zeru toolchain.
//!
//! This crate is intentionally small and dependency-free. It holds registry tables that both the scanner and the
//! parser consult, so that keyword, operator, punctuation, and primitive-type spellings live in exactly one place.
//!
//! ## Notes
//!
//! - This is a "vocabulary core" crate: **no IO**, no global mutable state, and no syntax-tree types.
//! - Operator precedence and associativity are data here; the expression parser receives the table explicitly.

pub mod lang;
