//! Scanner for the Zeru programming language
//!
//! Handles tokenization including:
//! - Keywords and identifiers (ASCII only)
//! - Integer literals (decimal, `0x`, `0b`, `0o`), float literals, strings and chars
//! - Operators and punctuation, always taking the longest match
//! - Line (`//`) and block (`/* */`, non-nesting) comments, which never reach the parser
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (TokenKind, Token)
//! - `strings` - String/char literal scanning and escape decoding
//! - `numbers` - Numeric literal scanning
//!
//! ## Notes
//! - [`Lexer`] is a lazy [`Iterator`] over tokens. It always ends with exactly one [`TokenKind::Eof`].
//! - Lexical errors never stop the scan: the bad character is skipped (or the malformed literal still yields a
//!   token) and scanning resumes. Errors are collected and handed back by [`Lexer::tokenize`].

mod numbers;
mod strings;
pub mod tokens;

pub use tokens::{Token, TokenKind, keyword_id};

use crate::ast::Span;
use crate::diagnostics::CompileError;
use zeru_core::lang::operators::OperatorId;
use zeru_core::lang::punctuation::PunctuationId;

/// Scanner for Zeru source code.
///
/// Produces tokens on demand. Construct a new `Lexer` over the same source to restart from the beginning.
pub struct Lexer<'a> {
    source: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    current_pos: usize,
    /// Token produced by the last `scan_token` call, if any.
    pending: Option<Token>,
    emitted_eof: bool,
    errors: Vec<CompileError>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source code.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            current_pos: 0,
            pending: None,
            emitted_eof: false,
            errors: Vec::new(),
        }
    }

    /// Tokenize the entire source code.
    ///
    /// Returns every token (ending with `Eof`) together with all lexical errors, in source order.
    pub fn tokenize(mut self) -> (Vec<Token>, Vec<CompileError>) {
        let tokens: Vec<Token> = self.by_ref().collect();
        (tokens, self.errors)
    }

    // ========================================================================
    // Core character handling
    // ========================================================================

    fn is_at_end(&mut self) -> bool {
        self.chars.peek().is_none()
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    fn peek_next(&self) -> Option<char> {
        let mut iter = self.source[self.current_pos..].chars();
        iter.next(); // skip current
        iter.next()
    }

    fn advance(&mut self) -> Option<char> {
        if let Some((pos, c)) = self.chars.next() {
            self.current_pos = pos + c.len_utf8();
            Some(c)
        } else {
            None
        }
    }

    // ========================================================================
    // Trivia
    // ========================================================================

    /// Skip whitespace and comments up to the next significant character.
    fn skip_trivia(&mut self) {
        while let Some(c) = self.peek() {
            match c {
                ' ' | '\t' | '\r' | '\n' => {
                    self.advance();
                }
                '/' if self.peek_next() == Some('/') => {
                    while let Some(c) = self.peek() {
                        if c == '\n' {
                            break;
                        }
                        self.advance();
                    }
                }
                '/' if self.peek_next() == Some('*') => self.skip_block_comment(),
                _ => break,
            }
        }
    }

    /// Skip a `/* ... */` comment. The first `*/` closes it; comments do not nest.
    fn skip_block_comment(&mut self) {
        let start = self.current_pos;
        self.advance(); // '/'
        self.advance(); // '*'
        loop {
            match self.advance() {
                Some('*') if self.peek() == Some('/') => {
                    self.advance();
                    return;
                }
                Some(_) => {}
                None => {
                    self.errors.push(CompileError::lexical(
                        "Unterminated block comment".to_string(),
                        Span::new(start, start + 2),
                    ));
                    return;
                }
            }
        }
    }

    // ========================================================================
    // Main scanning dispatch
    // ========================================================================

    fn scan_token(&mut self) {
        let start = self.current_pos;

        let Some(c) = self.advance() else {
            return;
        };

        match c {
            // Operators
            '+' => self.operator(start, OperatorId::Plus, &[('=', OperatorId::PlusEq)]),
            '-' => self.operator(start, OperatorId::Minus, &[('=', OperatorId::MinusEq)]),
            '*' => self.operator(start, OperatorId::Star, &[('=', OperatorId::StarEq)]),
            '/' => self.operator(start, OperatorId::Slash, &[('=', OperatorId::SlashEq)]),
            '%' => self.operator(start, OperatorId::Percent, &[('=', OperatorId::PercentEq)]),
            '^' => self.operator(start, OperatorId::Caret, &[('=', OperatorId::CaretEq)]),
            '!' => self.operator(start, OperatorId::Bang, &[('=', OperatorId::NotEq)]),
            '&' => self.operator(
                start,
                OperatorId::Amp,
                &[('&', OperatorId::AndAnd), ('=', OperatorId::AmpEq)],
            ),
            '|' => self.operator(
                start,
                OperatorId::Pipe,
                &[('|', OperatorId::OrOr), ('=', OperatorId::PipeEq)],
            ),
            '=' => {
                if self.match_char('=') {
                    self.add_op(OperatorId::EqEq, start);
                } else if self.match_char('>') {
                    self.add_punct(PunctuationId::FatArrow, start);
                } else {
                    self.add_op(OperatorId::Eq, start);
                }
            }
            '<' => {
                if self.match_char('<') {
                    self.operator(start, OperatorId::Shl, &[('=', OperatorId::ShlEq)]);
                } else {
                    self.operator(start, OperatorId::Lt, &[('=', OperatorId::LtEq)]);
                }
            }
            '>' => self.scan_greater(start),
            '.' => {
                if self.match_char('.') {
                    self.add_op(OperatorId::DotDot, start);
                } else {
                    self.add_punct(PunctuationId::Dot, start);
                }
            }

            // Punctuation
            ':' => {
                if self.match_char(':') {
                    self.add_punct(PunctuationId::ColonColon, start);
                } else {
                    self.add_punct(PunctuationId::Colon, start);
                }
            }
            ',' => self.add_punct(PunctuationId::Comma, start),
            ';' => self.add_punct(PunctuationId::Semicolon, start),
            '?' => self.add_punct(PunctuationId::Question, start),
            '(' => self.add_punct(PunctuationId::LParen, start),
            ')' => self.add_punct(PunctuationId::RParen, start),
            '[' => self.add_punct(PunctuationId::LBracket, start),
            ']' => self.add_punct(PunctuationId::RBracket, start),
            '{' => self.add_punct(PunctuationId::LBrace, start),
            '}' => self.add_punct(PunctuationId::RBrace, start),

            // Strings and chars
            '"' => self.scan_string(start),
            '\'' => self.scan_char(start),

            // Numbers
            '0'..='9' => self.scan_number(start, c),

            // Identifiers and keywords
            _ if is_ident_start(c) => self.scan_identifier(start),

            _ => {
                self.errors.push(CompileError::lexical(
                    format!("Unexpected character '{}'", c),
                    Span::new(start, self.current_pos),
                ));
            }
        }
    }

    // ========================================================================
    // Operator helpers
    // ========================================================================

    fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn add_token(&mut self, kind: TokenKind, start: usize) {
        self.pending = Some(Token::new(kind, Span::new(start, self.current_pos)));
    }

    fn add_op(&mut self, id: OperatorId, start: usize) {
        self.add_token(TokenKind::Operator(id), start);
    }

    fn add_punct(&mut self, id: PunctuationId, start: usize) {
        self.add_token(TokenKind::Punctuation(id), start);
    }

    /// Try to match compound operator, fallback to simple.
    fn operator(&mut self, start: usize, simple: OperatorId, compounds: &[(char, OperatorId)]) {
        for (c, id) in compounds {
            if self.match_char(*c) {
                self.add_op(*id, start);
                return;
            }
        }
        self.add_op(simple, start);
    }

    /// Scan `>`, `>=`, `>>`, `>>=`, `>>>`.
    fn scan_greater(&mut self, start: usize) {
        if self.match_char('>') {
            self.operator(
                start,
                OperatorId::Shr,
                &[('>', OperatorId::UShr), ('=', OperatorId::ShrEq)],
            );
        } else {
            self.operator(start, OperatorId::Gt, &[('=', OperatorId::GtEq)]);
        }
    }

    // ========================================================================
    // Identifier scanning
    // ========================================================================

    fn scan_identifier(&mut self, start: usize) {
        while let Some(c) = self.peek() {
            if is_ident_continue(c) {
                self.advance();
            } else {
                break;
            }
        }

        let spelling = &self.source[start..self.current_pos];

        if let Some(id) = keyword_id(spelling) {
            self.add_token(TokenKind::Keyword(id), start);
        } else {
            self.add_token(TokenKind::Ident(spelling.to_string()), start);
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.emitted_eof {
            return None;
        }
        loop {
            self.skip_trivia();
            if self.is_at_end() {
                self.emitted_eof = true;
                return Some(Token::new(
                    TokenKind::Eof,
                    Span::new(self.current_pos, self.current_pos),
                ));
            }
            self.scan_token();
            if let Some(token) = self.pending.take() {
                return Some(token);
            }
        }
    }
}

impl std::iter::FusedIterator for Lexer<'_> {}

// ============================================================================
// Helper functions
// ============================================================================

/// Check if a character can start an identifier (ASCII-only).
fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Check if a character can continue an identifier (ASCII-only).
fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Convenience function to lex a source string.
///
/// Strict form of [`Lexer::tokenize`]: any lexical error fails the whole call.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex(source: &str) -> Result<Vec<Token>, Vec<CompileError>> {
    let (tokens, errors) = Lexer::new(source).tokenize();
    if errors.is_empty() {
        Ok(tokens)
    } else {
        tracing::debug!(error_count = errors.len(), "lexing failed");
        Err(errors)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use zeru_core::lang::keywords::KeywordId;

    fn kinds(source: &str) -> Vec<TokenKind> {
        lex(source)
            .unwrap_or_else(|errs| panic!("lex({:?}) failed: {:?}", source, errs))
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn test_punctuation_registry_parity() {
        use zeru_core::lang::punctuation;

        for p in punctuation::PUNCTUATION {
            let tokens = lex(p.canonical).unwrap_or_else(|errs| {
                panic!("lex({:?}) failed: {:?}", p.canonical, errs);
            });
            assert_eq!(tokens.len(), 2, "expected token + EOF for {:?}, got {:?}", p.canonical, tokens);
            assert!(tokens[0].kind.is_punctuation(p.id), "{:?} lexed as {:?}", p.canonical, tokens[0].kind);
        }
    }

    #[test]
    fn test_keyword_registry_parity() {
        use zeru_core::lang::keywords;

        for k in keywords::KEYWORDS {
            let tokens = lex(k.canonical).unwrap_or_else(|errs| panic!("lex({:?}) failed: {:?}", k.canonical, errs));
            assert!(matches!(tokens.last().map(|t| &t.kind), Some(TokenKind::Eof)));

            let tokens = &tokens[..tokens.len() - 1];
            assert_eq!(
                tokens.len(),
                1,
                "expected single non-EOF token for keyword {:?}, got {:?}",
                k.id,
                tokens
            );
            assert!(tokens[0].kind.is_keyword(k.id));
        }
    }

    #[test]
    fn test_operator_registry_parity() {
        use zeru_core::lang::operators;

        for o in operators::OPERATORS {
            let tokens = lex(o.spelling).unwrap_or_else(|errs| panic!("lex({:?}) failed: {:?}", o.spelling, errs));
            let tokens = &tokens[..tokens.len() - 1];
            assert_eq!(
                tokens.len(),
                1,
                "expected single non-EOF token for operator spelling {:?}, got {:?}",
                o.spelling,
                tokens
            );

            if o.is_keyword_spelling {
                // Word operators are lexed as keywords.
                assert!(tokens[0].kind.is_keyword(KeywordId::As), "unexpected word operator {:?}", o.id);
            } else {
                assert!(tokens[0].kind.is_operator(o.id));
            }
        }
    }

    #[test]
    fn test_keywords_are_exact() {
        let k = kinds("fn Fn fn_ self None none");
        assert_eq!(k[0], TokenKind::Keyword(KeywordId::Fn));
        assert_eq!(k[1], TokenKind::Ident("Fn".to_string()));
        assert_eq!(k[2], TokenKind::Ident("fn_".to_string()));
        assert_eq!(k[3], TokenKind::Keyword(KeywordId::SelfKw));
        assert_eq!(k[4], TokenKind::Keyword(KeywordId::None));
        assert_eq!(k[5], TokenKind::Ident("none".to_string()));
    }

    #[test]
    fn test_longest_match_operators() {
        let k = kinds(">>>= <<= >>= >> => ::");
        assert_eq!(k[0], TokenKind::Operator(OperatorId::UShr));
        assert_eq!(k[1], TokenKind::Operator(OperatorId::Eq));
        assert_eq!(k[2], TokenKind::Operator(OperatorId::ShlEq));
        assert_eq!(k[3], TokenKind::Operator(OperatorId::ShrEq));
        assert_eq!(k[4], TokenKind::Operator(OperatorId::Shr));
        assert_eq!(k[5], TokenKind::Punctuation(PunctuationId::FatArrow));
        assert_eq!(k[6], TokenKind::Punctuation(PunctuationId::ColonColon));
    }

    #[test]
    #[allow(clippy::approx_constant)]
    fn test_numbers() {
        let k = kinds("42 3.14 0xFF 0b101 0o17 0");
        assert_eq!(k[0], TokenKind::Int(42));
        assert!(matches!(k[1], TokenKind::Float(f) if (f - 3.14).abs() < 0.001));
        assert_eq!(k[2], TokenKind::Int(255));
        assert_eq!(k[3], TokenKind::Int(5));
        assert_eq!(k[4], TokenKind::Int(15));
        assert_eq!(k[5], TokenKind::Int(0));
    }

    #[test]
    fn test_range_not_float() {
        // 1..2 should be Int, DotDot, Int - not a float
        let k = kinds("1..2");
        assert_eq!(k[0], TokenKind::Int(1));
        assert_eq!(k[1], TokenKind::Operator(OperatorId::DotDot));
        assert_eq!(k[2], TokenKind::Int(2));
    }

    #[test]
    fn test_tuple_index_not_float() {
        let k = kinds("1.foo t.0");
        assert_eq!(k[0], TokenKind::Int(1));
        assert_eq!(k[1], TokenKind::Punctuation(PunctuationId::Dot));
        assert_eq!(k[2], TokenKind::Ident("foo".to_string()));
        assert_eq!(k[5], TokenKind::Int(0));
    }

    #[test]
    fn test_integer_errors() {
        let (tokens, errors) = Lexer::new("0x 99999999999999999999").tokenize();
        assert_eq!(errors.len(), 2);
        assert!(errors[0].message.contains("hexadecimal"));
        assert!(errors[1].message.contains("out of range"));
        // Both literals still produce a token.
        assert_eq!(tokens.len(), 3);
    }

    #[test]
    fn test_strings_and_escapes() {
        let k = kinds(r#""hello" "a\tb\n" "\x41\0" "q\"\\""#);
        assert_eq!(k[0], TokenKind::String("hello".to_string()));
        assert_eq!(k[1], TokenKind::String("a\tb\n".to_string()));
        assert_eq!(k[2], TokenKind::String("A\0".to_string()));
        assert_eq!(k[3], TokenKind::String("q\"\\".to_string()));
    }

    #[test]
    fn test_chars() {
        let k = kinds(r"'a' '\n' '\x27' 'é'");
        assert_eq!(k[0], TokenKind::Char('a'));
        assert_eq!(k[1], TokenKind::Char('\n'));
        assert_eq!(k[2], TokenKind::Char('\''));
        assert_eq!(k[3], TokenKind::Char('é'));
    }

    #[test]
    fn test_bad_literals() {
        let cases = [
            (r#""abc"#, "Unterminated string"),
            ("'ab'", "exactly one character"),
            ("''", "Empty char literal"),
            (r"'\q'", "Unknown escape"),
            (r#""\xZZ""#, "hex escape"),
            (r"'\''", "Unknown escape"),
        ];
        for (source, needle) in cases {
            let (_, errors) = Lexer::new(source).tokenize();
            assert!(!errors.is_empty(), "{:?} should fail", source);
            assert!(
                errors[0].message.contains(needle),
                "{:?}: expected {:?} in {:?}",
                source,
                needle,
                errors[0].message
            );
        }
    }

    #[test]
    fn test_strings_may_span_lines() {
        let (tokens, errors) = Lexer::new("\"line one\nline two\" var").tokenize();
        assert!(errors.is_empty(), "{:?}", errors);
        assert_eq!(tokens[0].kind, TokenKind::String("line one\nline two".to_string()));
        assert!(tokens[1].kind.is_keyword(KeywordId::Var));
    }

    #[test]
    fn test_unterminated_string_runs_to_end_of_input() {
        let source = "\"abc\nvar";
        let (tokens, errors) = Lexer::new(source).tokenize();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].span, Span::new(0, 1));
        assert_eq!(tokens[0].kind, TokenKind::String("abc\nvar".to_string()));
        assert_eq!(tokens[0].span, Span::new(0, source.len()));
        assert_eq!(tokens.len(), 2);
    }

    #[test]
    fn test_char_literal_stops_at_newline() {
        let (tokens, errors) = Lexer::new("'a\nvar").tokenize();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("Unterminated char"));
        assert!(tokens.iter().any(|t| t.kind.is_keyword(KeywordId::Var)));
    }

    #[test]
    fn test_comments_are_trivia() {
        let k = kinds("a // line\n/* block * / still */ b /**/c");
        assert_eq!(
            k,
            vec![
                TokenKind::Ident("a".to_string()),
                TokenKind::Ident("b".to_string()),
                TokenKind::Ident("c".to_string()),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_block_comments_do_not_nest() {
        // The first `*/` closes the comment, leaving `*/` behind as tokens.
        let k = kinds("/* a /* b */ c */");
        assert_eq!(k[0], TokenKind::Ident("c".to_string()));
        assert_eq!(k[1], TokenKind::Operator(OperatorId::Star));
        assert_eq!(k[2], TokenKind::Operator(OperatorId::Slash));
    }

    #[test]
    fn test_unterminated_block_comment() {
        let (tokens, errors) = Lexer::new("a /* never closed").tokenize();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("Unterminated block comment"));
        assert_eq!(tokens.len(), 2);
    }

    #[test]
    fn test_unexpected_character_is_skipped() {
        let (tokens, errors) = Lexer::new("a @ b π c").tokenize();
        assert_eq!(errors.len(), 2);
        assert!(errors[0].message.contains("Unexpected character '@'"));
        assert_eq!(errors[0].span, Span::new(2, 3));
        assert_eq!(errors[1].span.len(), 'π'.len_utf8());
        let idents = tokens.iter().filter(|t| matches!(t.kind, TokenKind::Ident(_))).count();
        assert_eq!(idents, 3);
    }

    #[test]
    fn test_lexer_is_lazy_and_restartable() {
        let source = "fn main() {}";
        let mut lexer = Lexer::new(source);
        assert!(lexer.next().is_some_and(|t| t.kind.is_keyword(KeywordId::Fn)));
        let first: Vec<Token> = Lexer::new(source).collect();
        let second: Vec<Token> = Lexer::new(source).collect();
        assert_eq!(first, second);
        assert_eq!(first.iter().filter(|t| t.kind == TokenKind::Eof).count(), 1);

        let mut drained = Lexer::new("");
        assert_eq!(drained.next().map(|t| t.kind), Some(TokenKind::Eof));
        assert_eq!(drained.next(), None);
    }

    #[test]
    fn test_token_text() {
        let source = "var total = 0x1F;";
        let tokens = lex(source).unwrap();
        let texts: Vec<&str> = tokens.iter().map(|t| t.text(source)).collect();
        assert_eq!(texts, vec!["var", "total", "=", "0x1F", ";", ""]);
    }
}
