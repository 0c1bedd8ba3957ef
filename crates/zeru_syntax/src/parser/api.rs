/// Parse a token stream into an AST [`Program`].
///
/// This is the main public entrypoint for parsing an already-scanned token stream.
///
/// ## Parameters
/// - `tokens`: Token stream produced by `zeru_syntax::lexer`.
///
/// ## Errors
/// Returns `Err(Vec<CompileError>)` if parsing fails.
#[tracing::instrument(skip_all, fields(token_count = tokens.len()))]
pub fn parse(tokens: &[Token]) -> Result<Program, Vec<CompileError>> {
    Parser::new(tokens).parse()
}

/// Output of [`parse_source`]: a (possibly partial) program and every lexical and syntax diagnostic.
#[derive(Debug, Clone)]
pub struct ParseOutput {
    pub program: Program,
    /// Sorted by source position.
    pub diagnostics: Vec<CompileError>,
}

impl ParseOutput {
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

/// Scan and parse one source unit.
///
/// Never fails: lexical errors are recovered by the scanner, syntax errors by the parser, and all of them are
/// returned in source order alongside the partial tree.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn parse_source(source: &str) -> ParseOutput {
    parse_source_with(source, None)
}

/// Like [`parse_source`], but stops between top-level declarations once `cancel` is set.
pub fn parse_source_cancellable(source: &str, cancel: &AtomicBool) -> ParseOutput {
    parse_source_with(source, Some(cancel))
}

fn parse_source_with(source: &str, cancel: Option<&AtomicBool>) -> ParseOutput {
    let (tokens, mut diagnostics) = Lexer::new(source).tokenize();
    tracing::debug!(tokens = tokens.len(), lexical_errors = diagnostics.len(), "scanned source");

    let mut parser = Parser::new(&tokens);
    if let Some(flag) = cancel {
        parser = parser.with_cancellation(flag);
    }
    let (program, syntax_errors) = parser.parse_recovering();
    diagnostics.extend(syntax_errors);
    diagnostics::sort_by_position(&mut diagnostics);

    ParseOutput { program, diagnostics }
}
