//! Define the reserved keyword vocabulary for the Zeru language.
//!
//! This module is the single source of truth for reserved words: a stable identifier ([`KeywordId`]) plus a const
//! metadata table ([`KEYWORDS`]) that records canonical spellings, categories and provenance.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive** and exact: `Fn` and `fn_` are identifiers.
//! - Primitive type names (`i32`, `bool`, ...) are *not* keywords; see [`crate::lang::types`].
//! - `as` is both a keyword and the cast operator. If you need its precedence, use [`crate::lang::operators`].
//!
//! ## Examples
//! ```rust
//! use zeru_core::lang::keywords::{self, KeywordCategory, KeywordId};
//!
//! assert_eq!(keywords::from_str("match"), Some(KeywordId::Match));
//! assert_eq!(keywords::from_str("Match"), None);
//! assert_eq!(keywords::category(KeywordId::None), KeywordCategory::Literal);
//! ```

use super::registry::{Since, Stability};

/// Stable identifier for every reserved keyword.
///
/// ## Notes
/// - The discriminant order matches [`KEYWORDS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordId {
    // Declarations
    Fn,
    Struct,
    Enum,
    Trait,
    Import,
    Const,
    Var,
    Pub,

    // Receivers
    SelfKw,

    // Control flow
    If,
    Else,
    While,
    For,
    In,
    Return,
    Break,
    Continue,
    Match,
    Default,

    // Operators
    As,

    // Literals
    True,
    False,
    None,
}

/// High-level grouping for documentation and tooling.
///
/// ## Notes
/// - Categories are metadata only; they do not enforce parsing context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordCategory {
    Declaration,
    Receiver,
    ControlFlow,
    Operator,
    Literal,
}

/// Metadata for a keyword.
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub id: KeywordId,
    pub canonical: &'static str,
    pub category: KeywordCategory,
    /// `true` for keywords that may begin a top-level declaration (used by error recovery).
    pub starts_declaration: bool,
    pub since: Since,
    pub stability: Stability,
}

/// Registry of all keywords, ordered by [`KeywordId`] discriminant.
pub const KEYWORDS: &[KeywordInfo] = &[
    // Declarations
    info(KeywordId::Fn, "fn", KeywordCategory::Declaration, true),
    info(KeywordId::Struct, "struct", KeywordCategory::Declaration, true),
    info(KeywordId::Enum, "enum", KeywordCategory::Declaration, true),
    info(KeywordId::Trait, "trait", KeywordCategory::Declaration, true),
    info(KeywordId::Import, "import", KeywordCategory::Declaration, true),
    info(KeywordId::Const, "const", KeywordCategory::Declaration, true),
    info(KeywordId::Var, "var", KeywordCategory::Declaration, false),
    info(KeywordId::Pub, "pub", KeywordCategory::Declaration, true),
    // Receivers
    info(KeywordId::SelfKw, "self", KeywordCategory::Receiver, false),
    // Control flow
    info(KeywordId::If, "if", KeywordCategory::ControlFlow, false),
    info(KeywordId::Else, "else", KeywordCategory::ControlFlow, false),
    info(KeywordId::While, "while", KeywordCategory::ControlFlow, false),
    info(KeywordId::For, "for", KeywordCategory::ControlFlow, false),
    info(KeywordId::In, "in", KeywordCategory::ControlFlow, false),
    info(KeywordId::Return, "return", KeywordCategory::ControlFlow, false),
    info(KeywordId::Break, "break", KeywordCategory::ControlFlow, false),
    info(KeywordId::Continue, "continue", KeywordCategory::ControlFlow, false),
    info(KeywordId::Match, "match", KeywordCategory::ControlFlow, false),
    info(KeywordId::Default, "default", KeywordCategory::ControlFlow, false),
    // Operators
    info(KeywordId::As, "as", KeywordCategory::Operator, false),
    // Literals
    info(KeywordId::True, "true", KeywordCategory::Literal, false),
    info(KeywordId::False, "false", KeywordCategory::Literal, false),
    info(KeywordId::None, "None", KeywordCategory::Literal, false),
];

/// Canonical spelling.
pub fn as_str(id: KeywordId) -> &'static str {
    info_for(id).canonical
}

/// Category.
pub fn category(id: KeywordId) -> KeywordCategory {
    info_for(id).category
}

/// Return `true` if `id` may begin a top-level declaration.
pub fn starts_declaration(id: KeywordId) -> bool {
    info_for(id).starts_declaration
}

/// Full metadata.
///
/// ## Returns
/// - The associated [`KeywordInfo`] from [`KEYWORDS`].
pub fn info_for(id: KeywordId) -> &'static KeywordInfo {
    &KEYWORDS[id as usize]
}

/// Lookup by exact spelling.
///
/// ## Returns
/// - `Some(KeywordId)` if the spelling is reserved.
/// - `None` otherwise.
pub fn from_str(s: &str) -> Option<KeywordId> {
    KEYWORDS.iter().find(|k| k.canonical == s).map(|k| k.id)
}

// --- helpers -----------------------------------------------------------------

const fn info(id: KeywordId, canonical: &'static str, category: KeywordCategory, starts_declaration: bool) -> KeywordInfo {
    KeywordInfo {
        id,
        canonical,
        category,
        starts_declaration,
        since: Since(0, 1),
        stability: Stability::Stable,
    }
}
