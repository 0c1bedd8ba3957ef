//! String and char literal scanning.
//!
//! Escapes are resolved through `zeru_core::lang::escapes`. A malformed literal still produces a token (with the
//! characters that could be decoded) so that one bad literal yields one lexical error and no parser follow-ups.

use super::{Lexer, TokenKind};
use crate::ast::Span;
use crate::diagnostics::CompileError;
use zeru_core::lang::escapes::{self, EscapeKind};

impl<'a> Lexer<'a> {
    /// Scan a `"..."` literal. The opening quote is already consumed.
    ///
    /// Raw newlines are part of the value; only end of input leaves a string unterminated.
    pub(super) fn scan_string(&mut self, start: usize) {
        let mut value = String::new();
        loop {
            match self.peek() {
                None => {
                    self.errors.push(CompileError::lexical(
                        "Unterminated string literal".to_string(),
                        Span::new(start, start + 1),
                    ));
                    break;
                }
                Some('"') => {
                    self.advance();
                    break;
                }
                Some('\\') => {
                    self.advance();
                    if let Some(c) = self.scan_escape() {
                        value.push(c);
                    }
                }
                Some(c) => {
                    self.advance();
                    value.push(c);
                }
            }
        }
        self.add_token(TokenKind::String(value), start);
    }

    /// Scan a `'c'` literal. The opening quote is already consumed.
    pub(super) fn scan_char(&mut self, start: usize) {
        let mut chars = Vec::new();
        let mut had_escape_error = false;
        loop {
            match self.peek() {
                None | Some('\n') => {
                    self.errors.push(CompileError::lexical(
                        "Unterminated char literal".to_string(),
                        Span::new(start, start + 1),
                    ));
                    self.add_token(TokenKind::Char('\0'), start);
                    return;
                }
                Some('\'') => {
                    self.advance();
                    break;
                }
                Some('\\') => {
                    self.advance();
                    match self.scan_escape() {
                        Some(c) => chars.push(c),
                        None => had_escape_error = true,
                    }
                }
                Some(c) => {
                    self.advance();
                    chars.push(c);
                }
            }
        }

        let span = Span::new(start, self.current_pos);
        match chars.as_slice() {
            [c] if !had_escape_error => {
                let c = *c;
                self.add_token(TokenKind::Char(c), start);
                return;
            }
            [] if !had_escape_error => {
                self.errors.push(
                    CompileError::lexical("Empty char literal".to_string(), span)
                        .with_hint("a char literal holds exactly one character, e.g. 'a'"),
                );
            }
            [] | [_] => {}
            _ => {
                self.errors.push(
                    CompileError::lexical("Char literal must contain exactly one character".to_string(), span)
                        .with_hint("use double quotes for a string literal"),
                );
            }
        }
        self.add_token(TokenKind::Char(chars.first().copied().unwrap_or('\0')), start);
    }

    /// Decode one escape sequence. The backslash is already consumed.
    ///
    /// Returns `None` after reporting an error, or when the literal ends right after the backslash.
    fn scan_escape(&mut self) -> Option<char> {
        let escape_start = self.current_pos - 1;
        let marker = match self.peek() {
            None | Some('\n') => return None,
            Some(c) => c,
        };

        let Some(info) = escapes::lookup(marker) else {
            self.advance();
            self.errors.push(
                CompileError::lexical(
                    format!("Unknown escape sequence '\\{}'", marker),
                    Span::new(escape_start, self.current_pos),
                )
                .with_hint("supported escapes are \\n \\t \\r \\\\ \\\" \\0 and \\xNN"),
            );
            return None;
        };

        self.advance();
        match info.kind {
            EscapeKind::Simple(value) => Some(value),
            EscapeKind::Hex => {
                let hi = self.hex_digit();
                let lo = hi.and_then(|_| self.hex_digit());
                match (hi, lo) {
                    (Some(hi), Some(lo)) => escapes::decode_hex_pair(hi, lo),
                    _ => {
                        self.errors.push(CompileError::lexical(
                            "Invalid hex escape: expected two hex digits after '\\x'".to_string(),
                            Span::new(escape_start, self.current_pos),
                        ));
                        None
                    }
                }
            }
        }
    }

    fn hex_digit(&mut self) -> Option<char> {
        match self.peek() {
            Some(c) if c.is_ascii_hexdigit() => {
                self.advance();
                Some(c)
            }
            _ => None,
        }
    }
}
