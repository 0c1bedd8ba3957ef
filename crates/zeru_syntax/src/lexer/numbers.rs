//! Numeric literal scanning.
//!
//! Integers are decimal, `0x` hex, `0b` binary or `0o` octal and must fit in a `u64`. Floats are
//! `digits.digits` only: there is no exponent form and no leading or trailing dot, so `1..2` and `t.0` keep their
//! integer tokens.

use super::{Lexer, TokenKind};
use crate::ast::Span;
use crate::diagnostics::CompileError;

impl<'a> Lexer<'a> {
    pub(super) fn scan_number(&mut self, start: usize, first: char) {
        if first == '0' {
            let prefixed = match self.peek() {
                Some('x') => Some((16, "hexadecimal")),
                Some('b') => Some((2, "binary")),
                Some('o') => Some((8, "octal")),
                _ => None,
            };
            if let Some((radix, name)) = prefixed {
                self.advance();
                self.scan_prefixed_int(start, radix, name);
                return;
            }
        }

        self.consume_digits(10);

        if self.peek() == Some('.') && self.peek_next().is_some_and(|c| c.is_ascii_digit()) {
            self.advance(); // '.'
            self.consume_digits(10);
            let text = &self.source[start..self.current_pos];
            match text.parse::<f64>() {
                Ok(value) => self.add_token(TokenKind::Float(value), start),
                Err(_) => {
                    self.errors.push(CompileError::lexical(
                        format!("Invalid float literal '{}'", text),
                        Span::new(start, self.current_pos),
                    ));
                    self.add_token(TokenKind::Float(0.0), start);
                }
            }
            return;
        }

        self.finish_int(start, start, 10);
    }

    /// Scan the digits after a `0x` / `0b` / `0o` prefix.
    fn scan_prefixed_int(&mut self, start: usize, radix: u32, name: &str) {
        let digits_start = self.current_pos;
        self.consume_digits(radix);
        if self.current_pos == digits_start {
            let prefix = &self.source[start..self.current_pos];
            self.errors.push(CompileError::lexical(
                format!("Expected {} digits after '{}'", name, prefix),
                Span::new(start, self.current_pos),
            ));
            self.add_token(TokenKind::Int(0), start);
            return;
        }
        self.finish_int(start, digits_start, radix);
    }

    fn consume_digits(&mut self, radix: u32) {
        while let Some(c) = self.peek() {
            if c.is_digit(radix) {
                self.advance();
            } else {
                break;
            }
        }
    }

    fn finish_int(&mut self, start: usize, digits_start: usize, radix: u32) {
        let digits = &self.source[digits_start..self.current_pos];
        match u64::from_str_radix(digits, radix) {
            Ok(value) => self.add_token(TokenKind::Int(value), start),
            Err(_) => {
                self.errors.push(
                    CompileError::lexical(
                        format!(
                            "Integer literal '{}' is out of range",
                            &self.source[start..self.current_pos]
                        ),
                        Span::new(start, self.current_pos),
                    )
                    .with_note(format!("the largest integer literal is {}", u64::MAX)),
                );
                self.add_token(TokenKind::Int(0), start);
            }
        }
    }
}
