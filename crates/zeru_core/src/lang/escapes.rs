//! String and char escape-sequence vocabulary.
//!
//! Zeru accepts a small, fixed set of backslash escapes inside `"..."` and `'...'` literals:
//! `\n \t \r \\ \" \0` and the two-digit hex form `\xNN`.
//!
//! ## Notes
//! - `\'` is **not** an escape; a char literal holding a quote is written `'\x27'`.
//! - `\xNN` decodes to the Unicode scalar `U+00NN`.
//!
//! ## Examples
//! ```rust
//! use zeru_core::lang::escapes::{self, EscapeKind};
//!
//! assert_eq!(escapes::lookup('n').map(|e| e.kind), Some(EscapeKind::Simple('\n')));
//! assert_eq!(escapes::lookup('x').map(|e| e.kind), Some(EscapeKind::Hex));
//! assert!(escapes::lookup('q').is_none());
//! assert_eq!(escapes::decode_hex_pair('4', '1'), Some('A'));
//! ```

/// What an escape marker expands to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EscapeKind {
    /// A fixed replacement character.
    Simple(char),
    /// `\x` followed by exactly two hex digits.
    Hex,
}

/// Metadata for one escape marker (the character after the backslash).
#[derive(Debug, Clone, Copy)]
pub struct EscapeInfo {
    pub marker: char,
    pub kind: EscapeKind,
}

/// Registry of all escape markers.
pub const ESCAPES: &[EscapeInfo] = &[
    EscapeInfo { marker: 'n', kind: EscapeKind::Simple('\n') },
    EscapeInfo { marker: 't', kind: EscapeKind::Simple('\t') },
    EscapeInfo { marker: 'r', kind: EscapeKind::Simple('\r') },
    EscapeInfo { marker: '\\', kind: EscapeKind::Simple('\\') },
    EscapeInfo { marker: '"', kind: EscapeKind::Simple('"') },
    EscapeInfo { marker: '0', kind: EscapeKind::Simple('\0') },
    EscapeInfo { marker: 'x', kind: EscapeKind::Hex },
];

/// Look up the escape introduced by `marker`.
pub fn lookup(marker: char) -> Option<&'static EscapeInfo> {
    ESCAPES.iter().find(|e| e.marker == marker)
}

/// Decode the two hex digits of a `\xNN` escape.
///
/// ## Returns
/// - `None` if either character is not an ASCII hex digit.
pub fn decode_hex_pair(hi: char, lo: char) -> Option<char> {
    let hi = hi.to_digit(16)?;
    let lo = lo.to_digit(16)?;
    char::from_u32(hi * 16 + lo)
}
