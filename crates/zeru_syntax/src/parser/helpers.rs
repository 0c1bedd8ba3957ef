/// Token-stream helpers and error recovery.
///
/// This chunk contains the low-level primitives used throughout parsing:
/// - Peeking/consuming tokens (`peek`, `advance`)
/// - Matching / expecting keywords, operators, and punctuation
/// - Splitting `>>` / `>>>` when they close nested generic argument lists (`close_angle`)
/// - Error recovery (`synchronize_declaration`, `synchronize_statement`, `synchronize_member`)
///
/// Most functions in this file are internal (`fn`) and are documented primarily
/// to aid maintenance and onboarding.
impl<'a> Parser<'a> {
    // ========================================================================
    // Helpers
    // ========================================================================

    /// Return `true` if the current token is [`TokenKind::Eof`].
    fn is_at_end(&self) -> bool {
        matches!(self.peek().kind, TokenKind::Eof)
    }

    /// Return the current token without consuming it.
    fn peek(&self) -> &Token {
        match &self.split {
            Some(token) => token,
            None => self.tokens.get(self.pos).unwrap_or(&EOF_TOKEN),
        }
    }

    /// Return the token after the current token without consuming it.
    fn peek_next(&self) -> &Token {
        self.tokens
            .get(self.pos + 1)
            .or_else(|| self.tokens.last())
            .unwrap_or(&EOF_TOKEN)
    }

    /// Advance to the next token and return the token we just consumed.
    fn advance(&mut self) -> &Token {
        let tokens = self.tokens;
        let idx = self.pos;
        self.split = None;
        let token = tokens.get(idx).unwrap_or(&EOF_TOKEN);
        if !matches!(token.kind, TokenKind::Eof) {
            self.pos += 1;
        }
        self.prev_end = token.span.end;
        token
    }

    /// Return `true` if the current token is the given keyword.
    fn check_keyword(&self, id: KeywordId) -> bool {
        self.peek().kind.is_keyword(id)
    }

    /// Return `true` if the current token is the given punctuation.
    fn check_punct(&self, id: PunctuationId) -> bool {
        self.peek().kind.is_punctuation(id)
    }

    /// Return `true` if the current token is the given operator.
    fn check_op(&self, id: OperatorId) -> bool {
        self.peek().kind.is_operator(id)
    }

    fn match_keyword(&mut self, id: KeywordId) -> bool {
        if self.check_keyword(id) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn match_punct(&mut self, id: PunctuationId) -> bool {
        if self.check_punct(id) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn match_op(&mut self, id: OperatorId) -> bool {
        if self.check_op(id) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn expect_keyword(&mut self, id: KeywordId, msg: &str) -> Result<&Token, CompileError> {
        if self.check_keyword(id) {
            Ok(self.advance())
        } else {
            Err(self.error_here(msg))
        }
    }

    fn expect_punct(&mut self, id: PunctuationId, msg: &str) -> Result<&Token, CompileError> {
        if self.check_punct(id) {
            Ok(self.advance())
        } else {
            Err(self.error_here(msg))
        }
    }

    fn expect_op(&mut self, id: OperatorId, msg: &str) -> Result<&Token, CompileError> {
        if self.check_op(id) {
            Ok(self.advance())
        } else {
            Err(self.error_here(msg))
        }
    }

    /// Build a syntax error at the current token: `"{msg}, found {token}"`.
    fn error_here(&self, msg: &str) -> CompileError {
        CompileError::syntax(format!("{}, found {}", msg, self.peek().kind), self.current_span())
    }

    /// Consume a terminating `;`.
    ///
    /// A missing `;` is reported once and parsing continues as if it were present.
    fn expect_semicolon(&mut self, after: &str) {
        if self.match_punct(PunctuationId::Semicolon) {
            return;
        }
        let err = self
            .error_here(&format!("Expected ';' after {}", after))
            .with_hint("add ';' at the end of the previous line");
        tracing::debug!(pos = self.pos, "recovered from missing ';'");
        self.errors.push(err);
    }

    /// Consume one `>` that closes a generic argument list.
    ///
    /// A `>>` or `>>>` token is split: one `>` is consumed and the rest stays as the current token, so `A<B<C>>`
    /// closes both lists.
    fn close_angle(&mut self, msg: &str) -> Result<(), CompileError> {
        let token = self.peek().clone();
        let rest = match token.kind {
            TokenKind::Operator(OperatorId::Gt) => {
                self.advance();
                return Ok(());
            }
            TokenKind::Operator(OperatorId::Shr) => OperatorId::Gt,
            TokenKind::Operator(OperatorId::UShr) => OperatorId::Shr,
            _ => return Err(self.error_here(msg)),
        };
        let split_at = token.span.start + 1;
        self.split = Some(Token::new(
            TokenKind::Operator(rest),
            Span::new(split_at, token.span.end),
        ));
        self.prev_end = split_at;
        Ok(())
    }

    /// Where the current `<` closes, or `None` if it cannot open a type-argument list.
    fn current_angle_close(&self) -> Option<AngleClose> {
        if self.split.is_some() {
            return None;
        }
        self.angle_closes.get(&self.pos).copied()
    }

    fn current_span(&self) -> Span {
        self.peek().span
    }

    // ========================================================================
    // Error recovery
    // ========================================================================

    /// Recover from a failed top-level declaration that started at token index `decl_start`.
    ///
    /// Brace depth is counted from the start of the broken item; scanning resumes at or after the failure point and
    /// stops at a declaration keyword at depth 0, or just past a `;` / `}` that brings the item back to depth 0.
    fn synchronize_declaration(&mut self, decl_start: usize) {
        let failed_at = self.pos;
        self.pos = decl_start;
        self.split = None;
        let mut depth = 0usize;

        while !self.is_at_end() {
            let past_failure = self.pos >= failed_at;
            let starts_decl = self.peek().kind.starts_declaration();
            if past_failure && self.pos > decl_start && starts_decl && (depth == 0 || self.pos == failed_at) {
                break;
            }
            match self.peek().punctuation_id() {
                Some(PunctuationId::LBrace) => depth += 1,
                Some(PunctuationId::RBrace) => {
                    depth = depth.saturating_sub(1);
                    if depth == 0 && past_failure {
                        self.advance();
                        break;
                    }
                }
                Some(PunctuationId::Semicolon) if depth == 0 && past_failure => {
                    self.advance();
                    break;
                }
                _ => {}
            }
            self.advance();
        }
        tracing::debug!(resume = self.pos, "synchronized at declaration boundary");
    }

    /// Recover from a failed statement.
    ///
    /// Skips to the next `;` (consumed), `}` (not consumed) or statement keyword at the same nesting depth.
    fn synchronize_statement(&mut self) {
        let mut depth = 0usize;
        while !self.is_at_end() {
            if depth == 0 && (self.at_statement_keyword() || self.peek().kind.starts_declaration()) {
                break;
            }
            match self.peek().punctuation_id() {
                Some(PunctuationId::LBrace) => depth += 1,
                Some(PunctuationId::RBrace) => {
                    if depth == 0 {
                        break;
                    }
                    depth -= 1;
                }
                Some(PunctuationId::Semicolon) if depth == 0 => {
                    self.advance();
                    break;
                }
                _ => {}
            }
            self.advance();
        }
        tracing::debug!(resume = self.pos, "synchronized at statement boundary");
    }

    /// Recover from a failed member of a struct, enum or trait body.
    ///
    /// Skips to the next `,` or `;` (consumed), `fn` / `pub` (not consumed) or the `}` closing the body
    /// (not consumed).
    fn synchronize_member(&mut self) {
        let mut depth = 0usize;
        while !self.is_at_end() {
            if depth == 0 && (self.check_keyword(KeywordId::Fn) || self.check_keyword(KeywordId::Pub)) {
                break;
            }
            match self.peek().punctuation_id() {
                Some(PunctuationId::LBrace) => depth += 1,
                Some(PunctuationId::RBrace) => {
                    if depth == 0 {
                        break;
                    }
                    depth -= 1;
                }
                Some(PunctuationId::Comma | PunctuationId::Semicolon) if depth == 0 => {
                    self.advance();
                    break;
                }
                _ => {}
            }
            self.advance();
        }
        tracing::debug!(resume = self.pos, "synchronized at member boundary");
    }

    /// Return `true` if the current token begins a keyword-introduced statement.
    fn at_statement_keyword(&self) -> bool {
        matches!(
            self.peek().keyword_id(),
            Some(
                KeywordId::Var
                    | KeywordId::Const
                    | KeywordId::Return
                    | KeywordId::If
                    | KeywordId::While
                    | KeywordId::For
                    | KeywordId::Break
                    | KeywordId::Continue
            )
        )
    }
}
