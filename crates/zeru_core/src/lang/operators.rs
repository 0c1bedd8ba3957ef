//! Operator vocabulary.
//!
//! This module defines the canonical operator set (symbol operators like `+` and the word operator `as`) along with
//! the metadata the expression parser needs: precedence, associativity and fixity.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**.
//! - `precedence` is a relative ordering where higher binds tighter. The expression parser does not hard-code these
//!   numbers; it is handed [`OPERATORS`] (or a caller-provided table of the same shape) and climbs over it.
//! - `-`, `*` and `&` are infix operators that can also appear in prefix position (negation, dereference,
//!   reference); `!` is prefix-only. Prefix operators all bind at [`PREFIX_PRECEDENCE`].
//!
//! ## Examples
//! ```rust
//! use zeru_core::lang::operators::{self, Associativity, OperatorId};
//!
//! assert_eq!(operators::from_str("<<="), Some(OperatorId::ShlEq));
//! let star = operators::info_for(OperatorId::Star);
//! let plus = operators::info_for(OperatorId::Plus);
//! assert!(star.precedence > plus.precedence);
//! assert_eq!(operators::info_for(OperatorId::DotDot).associativity, Associativity::None);
//! ```

use super::registry::{Since, Stability};

/// Define how operators associate when chained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Associativity {
    Left,
    Right,
    /// Chaining at the same level is rejected (`a..b..c`).
    None,
}

/// Define the syntactic role of an operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fixity {
    /// Binary operator inside an expression.
    Infix,
    /// Prefix-only operator (`!`).
    Prefix,
    /// Statement-level assignment operator (`=`, `+=`, ...). Never part of an expression.
    Assignment,
}

/// Stable identifier for every operator.
///
/// ## Notes
/// - The discriminant order matches [`OPERATORS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorId {
    // Range
    DotDot,

    // Logical
    OrOr,
    AndAnd,

    // Bitwise
    Pipe,
    Caret,
    Amp,

    // Equality / relational
    EqEq,
    NotEq,
    Lt,
    Gt,
    LtEq,
    GtEq,

    // Shifts
    Shl,
    Shr,
    UShr,

    // Arithmetic
    Plus,
    Minus,
    Star,
    Slash,
    Percent,

    // Cast
    As,

    // Prefix-only
    Bang,

    // Assignment
    Eq,
    PlusEq,
    MinusEq,
    StarEq,
    SlashEq,
    PercentEq,
    AmpEq,
    PipeEq,
    CaretEq,
    ShlEq,
    ShrEq,
}

/// Binding strength shared by all prefix operators (`-x`, `!x`, `*p`, `&v`).
pub const PREFIX_PRECEDENCE: u8 = 130;

/// Metadata for an operator.
///
/// ## Notes
/// - `precedence` describes the infix role. Prefix uses of `-`, `*`, `&` bind at [`PREFIX_PRECEDENCE`].
#[derive(Debug, Clone, Copy)]
pub struct OperatorInfo {
    pub id: OperatorId,
    pub spelling: &'static str,
    pub precedence: u8,
    pub associativity: Associativity,
    pub fixity: Fixity,
    /// `true` when the operator also has a prefix (unary) meaning.
    pub has_prefix_form: bool,
    /// `true` when the operator is spelled with a reserved word (`as`).
    pub is_keyword_spelling: bool,
    pub since: Since,
    pub stability: Stability,
}

/// Registry of all operators, ordered by [`OperatorId`] discriminant.
pub const OPERATORS: &[OperatorInfo] = &[
    // Range
    infix(OperatorId::DotDot, "..", 10, Associativity::None),
    // Logical
    infix(OperatorId::OrOr, "||", 20, Associativity::Left),
    infix(OperatorId::AndAnd, "&&", 30, Associativity::Left),
    // Bitwise
    infix(OperatorId::Pipe, "|", 40, Associativity::Left),
    infix(OperatorId::Caret, "^", 50, Associativity::Left),
    with_prefix(infix(OperatorId::Amp, "&", 60, Associativity::Left)),
    // Equality / relational
    infix(OperatorId::EqEq, "==", 70, Associativity::Left),
    infix(OperatorId::NotEq, "!=", 70, Associativity::Left),
    infix(OperatorId::Lt, "<", 80, Associativity::Left),
    infix(OperatorId::Gt, ">", 80, Associativity::Left),
    infix(OperatorId::LtEq, "<=", 80, Associativity::Left),
    infix(OperatorId::GtEq, ">=", 80, Associativity::Left),
    // Shifts
    infix(OperatorId::Shl, "<<", 90, Associativity::Left),
    infix(OperatorId::Shr, ">>", 90, Associativity::Left),
    infix(OperatorId::UShr, ">>>", 90, Associativity::Left),
    // Arithmetic
    infix(OperatorId::Plus, "+", 100, Associativity::Left),
    with_prefix(infix(OperatorId::Minus, "-", 100, Associativity::Left)),
    with_prefix(infix(OperatorId::Star, "*", 110, Associativity::Left)),
    infix(OperatorId::Slash, "/", 110, Associativity::Left),
    infix(OperatorId::Percent, "%", 110, Associativity::Left),
    // Cast
    keyword_spelled(infix(OperatorId::As, "as", 120, Associativity::Left)),
    // Prefix-only
    op(OperatorId::Bang, "!", PREFIX_PRECEDENCE, Associativity::Right, Fixity::Prefix),
    // Assignment
    assignment(OperatorId::Eq, "="),
    assignment(OperatorId::PlusEq, "+="),
    assignment(OperatorId::MinusEq, "-="),
    assignment(OperatorId::StarEq, "*="),
    assignment(OperatorId::SlashEq, "/="),
    assignment(OperatorId::PercentEq, "%="),
    assignment(OperatorId::AmpEq, "&="),
    assignment(OperatorId::PipeEq, "|="),
    assignment(OperatorId::CaretEq, "^="),
    assignment(OperatorId::ShlEq, "<<="),
    assignment(OperatorId::ShrEq, ">>="),
];

/// Return the full metadata entry for an operator in the standard table.
pub fn info_for(id: OperatorId) -> &'static OperatorInfo {
    &OPERATORS[id as usize]
}

/// Canonical spelling.
pub fn as_str(id: OperatorId) -> &'static str {
    info_for(id).spelling
}

/// Resolve an operator spelling to its identifier.
///
/// ## Returns
/// - `Some(OperatorId)` if the spelling exists in [`OPERATORS`].
/// - `None` otherwise.
pub fn from_str(spelling: &str) -> Option<OperatorId> {
    OPERATORS.iter().find(|o| o.spelling == spelling).map(|o| o.id)
}

/// Look up the infix entry for `id` in an explicitly provided operator table.
///
/// ## Parameters
/// - `table`: Operator table the parser was configured with (usually [`OPERATORS`]).
/// - `id`: Operator found in infix position.
///
/// ## Returns
/// - `Some(&OperatorInfo)` if `table` lists `id` as an infix operator.
/// - `None` if `id` is prefix-only, an assignment operator, or missing from `table`.
pub fn infix_in(table: &[OperatorInfo], id: OperatorId) -> Option<&OperatorInfo> {
    table.iter().find(|o| o.id == id && o.fixity == Fixity::Infix)
}

/// Return `true` if `id` is a statement-level assignment operator.
pub fn is_assignment(id: OperatorId) -> bool {
    info_for(id).fixity == Fixity::Assignment
}

// --- helpers -----------------------------------------------------------------

const fn op(
    id: OperatorId,
    spelling: &'static str,
    precedence: u8,
    associativity: Associativity,
    fixity: Fixity,
) -> OperatorInfo {
    OperatorInfo {
        id,
        spelling,
        precedence,
        associativity,
        fixity,
        has_prefix_form: false,
        is_keyword_spelling: false,
        since: Since(0, 1),
        stability: Stability::Stable,
    }
}

const fn infix(id: OperatorId, spelling: &'static str, precedence: u8, associativity: Associativity) -> OperatorInfo {
    op(id, spelling, precedence, associativity, Fixity::Infix)
}

const fn assignment(id: OperatorId, spelling: &'static str) -> OperatorInfo {
    op(id, spelling, 0, Associativity::None, Fixity::Assignment)
}

const fn with_prefix(mut info: OperatorInfo) -> OperatorInfo {
    info.has_prefix_form = true;
    info
}

const fn keyword_spelled(mut info: OperatorInfo) -> OperatorInfo {
    info.is_keyword_spelling = true;
    info
}
