//! Punctuation vocabulary.
//!
//! This module defines the canonical set of non-operator punctuation tokens used by the scanner/parser: delimiters,
//! separators, access/path markers and type suffix markers.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**.
//! - `!` is an operator ([`crate::lang::operators::OperatorId::Bang`]) even when it is used as the result-type
//!   suffix; `?` is punctuation because it only ever appears in types.
//!
//! ## Examples
//! ```rust
//! use zeru_core::lang::punctuation::{self, PunctuationId};
//!
//! assert_eq!(punctuation::from_str("::"), Some(PunctuationId::ColonColon));
//! assert_eq!(punctuation::as_str(PunctuationId::FatArrow), "=>");
//! ```

use super::registry::{Since, Stability};

/// Broad syntactic grouping for punctuation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunctuationCategory {
    /// Brackets and braces.
    Delimiter,
    /// Separators like `,`, `;` and `:`.
    Separator,
    /// Access/path markers like `.` and `::`.
    Access,
    /// Arrow markers like `=>`.
    Arrow,
    /// Type suffix markers like `?`.
    Marker,
}

/// Stable identifier for punctuation tokens.
///
/// ## Notes
/// - The discriminant order matches [`PUNCTUATION`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunctuationId {
    // Separators
    Comma,
    Semicolon,
    Colon,

    // Access / path
    Dot,
    ColonColon,

    // Arrows
    FatArrow,

    // Markers
    Question,

    // Delimiters
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
}

/// Metadata for a punctuation token.
#[derive(Debug, Clone, Copy)]
pub struct PunctuationInfo {
    pub id: PunctuationId,
    pub canonical: &'static str,
    pub category: PunctuationCategory,
    pub since: Since,
    pub stability: Stability,
}

/// Registry of all punctuation tokens, ordered by [`PunctuationId`] discriminant.
pub const PUNCTUATION: &[PunctuationInfo] = &[
    info(PunctuationId::Comma, ",", PunctuationCategory::Separator),
    info(PunctuationId::Semicolon, ";", PunctuationCategory::Separator),
    info(PunctuationId::Colon, ":", PunctuationCategory::Separator),
    info(PunctuationId::Dot, ".", PunctuationCategory::Access),
    info(PunctuationId::ColonColon, "::", PunctuationCategory::Access),
    info(PunctuationId::FatArrow, "=>", PunctuationCategory::Arrow),
    info(PunctuationId::Question, "?", PunctuationCategory::Marker),
    info(PunctuationId::LParen, "(", PunctuationCategory::Delimiter),
    info(PunctuationId::RParen, ")", PunctuationCategory::Delimiter),
    info(PunctuationId::LBracket, "[", PunctuationCategory::Delimiter),
    info(PunctuationId::RBracket, "]", PunctuationCategory::Delimiter),
    info(PunctuationId::LBrace, "{", PunctuationCategory::Delimiter),
    info(PunctuationId::RBrace, "}", PunctuationCategory::Delimiter),
];

/// Return the canonical spelling for a punctuation token.
pub fn as_str(id: PunctuationId) -> &'static str {
    info_for(id).canonical
}

/// Return the category for a punctuation token.
pub fn category(id: PunctuationId) -> PunctuationCategory {
    info_for(id).category
}

/// Return the full metadata entry for a punctuation token.
pub fn info_for(id: PunctuationId) -> &'static PunctuationInfo {
    &PUNCTUATION[id as usize]
}

/// Resolve a punctuation spelling to its identifier.
pub fn from_str(s: &str) -> Option<PunctuationId> {
    PUNCTUATION.iter().find(|p| p.canonical == s).map(|p| p.id)
}

const fn info(id: PunctuationId, canonical: &'static str, category: PunctuationCategory) -> PunctuationInfo {
    PunctuationInfo {
        id,
        canonical,
        category,
        since: Since(0, 1),
        stability: Stability::Stable,
    }
}
