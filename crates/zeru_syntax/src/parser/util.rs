/// Miscellaneous parser utilities.
///
/// This chunk contains small shared parsing helpers that don’t cleanly fit into
/// “decl”, “stmt”, “expr”, or “types” (identifier lists, comma-separated expressions, integer literals).
impl<'a> Parser<'a> {
    // ========================================================================
    // Utilities
    // ========================================================================

    fn identifier(&mut self) -> Result<Ident, CompileError> {
        self.identifier_spanned().map(|ident| ident.node)
    }

    fn identifier_spanned(&mut self) -> Result<Spanned<Ident>, CompileError> {
        match &self.peek().kind {
            TokenKind::Ident(name) => {
                let span = self.current_span();
                let name = name.clone();
                self.advance();
                Ok(Spanned::new(name, span))
            }
            _ => Err(self.error_here("Expected identifier")),
        }
    }

    /// Parse `a, b, c` (at least one name, no trailing comma).
    fn identifier_list_spanned(&mut self) -> Result<Vec<Spanned<Ident>>, CompileError> {
        let mut idents = vec![self.identifier_spanned()?];
        while self.match_punct(PunctuationId::Comma) {
            idents.push(self.identifier_spanned()?);
        }
        Ok(idents)
    }

    /// Parse zero or more comma-separated expressions up to (not including) `close`.
    fn expression_list(&mut self, close: PunctuationId) -> Result<Vec<Spanned<Expr>>, CompileError> {
        let mut items = Vec::new();
        if self.check_punct(close) {
            return Ok(items);
        }
        loop {
            items.push(self.expression()?);
            if !self.match_punct(PunctuationId::Comma) {
                break;
            }
        }
        Ok(items)
    }

    fn int_literal(&mut self, msg: &str) -> Result<u64, CompileError> {
        match self.peek().kind {
            TokenKind::Int(value) => {
                self.advance();
                Ok(value)
            }
            _ => Err(self.error_here(msg)),
        }
    }
}
