/// Parser core types and entrypoints.
///
/// This chunk defines the [`Parser`] type, its configuration (`with_operators`, `with_cancellation`) and the
/// top-level `parse()` / `parse_recovering()` loops. It also holds [`Checkpoint`], the snapshot used by every
/// speculative parse.
///
/// ## Notes
/// - This file is `include!`'d into `crate::parser` to keep all parser methods in a
///   single module while avoiding a single “god file”.

/// End-of-input stand-in for token slices that do not end with `Eof`.
static EOF_TOKEN: Token = Token {
    kind: TokenKind::Eof,
    span: Span { start: 0, end: 0 },
};

/// Snapshot of the parser cursor for bounded speculation.
///
/// Restoring a checkpoint rewinds the token position and drops every diagnostic recorded after it was taken, so a
/// failed speculative parse leaves no trace.
#[derive(Debug, Clone)]
struct Checkpoint {
    pos: usize,
    split: Option<Token>,
    prev_end: usize,
    error_count: usize,
}

/// Where a `<` is closed, found by [`angle_closes`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct AngleClose {
    /// Index of the `>` / `>>` / `>>>` token holding the matching close.
    index: usize,
    /// `true` when the match is the last `>` of that token, so nothing of it is left over.
    exact: bool,
}

/// Match every `<` with its closing angle in one pass over the token stream.
///
/// Only tokens that can appear inside a type keep a group open; any other token drops every open `<` unmatched.
/// Speculative `Name<...>` parses consult this table first, so a `<` that cannot start a type-argument list never
/// triggers a re-parse.
fn angle_closes(tokens: &[Token]) -> HashMap<usize, AngleClose> {
    let mut closes = HashMap::new();
    let mut open: Vec<usize> = Vec::new();
    for (index, token) in tokens.iter().enumerate() {
        let width = match &token.kind {
            TokenKind::Operator(OperatorId::Lt) => {
                open.push(index);
                continue;
            }
            TokenKind::Operator(OperatorId::Gt) => 1,
            TokenKind::Operator(OperatorId::Shr) => 2,
            TokenKind::Operator(OperatorId::UShr) => 3,
            TokenKind::Ident(_)
            | TokenKind::Int(_)
            | TokenKind::Operator(OperatorId::Star | OperatorId::Amp | OperatorId::Bang)
            | TokenKind::Punctuation(
                PunctuationId::Comma
                | PunctuationId::LBracket
                | PunctuationId::RBracket
                | PunctuationId::LParen
                | PunctuationId::RParen
                | PunctuationId::Question,
            ) => continue,
            _ => {
                open.clear();
                continue;
            }
        };
        for n in 1..=width {
            match open.pop() {
                Some(lt) => {
                    closes.insert(lt, AngleClose { index, exact: n == width });
                }
                None => break,
            }
        }
    }
    closes
}

/// Parser state.
///
/// ## Notes
/// - The parser is single-pass apart from bounded speculation, and recovers from errors by synchronizing at
///   statement/declaration/member boundaries.
/// - Most parsing helpers are implemented on `Parser` but split across multiple files.
pub struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    /// Unconsumed remainder of a `>>` / `>>>` token that closed a generic argument list.
    split: Option<Token>,
    /// End offset of the last consumed token.
    prev_end: usize,
    errors: Vec<CompileError>,
    /// Operator table consulted for infix/prefix parsing.
    operators: &'a [OperatorInfo],
    /// `false` inside `if`/`while` conditions, `for` iterables and `match` subjects.
    struct_literals_allowed: bool,
    cancel: Option<&'a AtomicBool>,
    /// Matching close for every `<` that can open a type-argument list, keyed by token index.
    angle_closes: HashMap<usize, AngleClose>,
}

impl<'a> Parser<'a> {
    /// Create a new parser for a token stream.
    ///
    /// ## Parameters
    /// - `tokens`: Token stream produced by `zeru_syntax::lexer` (ending with `Eof`).
    pub fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            pos: 0,
            split: None,
            prev_end: 0,
            errors: Vec::new(),
            operators: operators::OPERATORS,
            struct_literals_allowed: true,
            cancel: None,
            angle_closes: angle_closes(tokens),
        }
    }

    /// Use a custom operator table instead of [`operators::OPERATORS`].
    ///
    /// Operators missing from `table` are not recognized in infix or prefix position.
    pub fn with_operators(mut self, table: &'a [OperatorInfo]) -> Self {
        self.operators = table;
        self
    }

    /// Stop parsing once `flag` is set. The flag is checked between top-level declarations.
    pub fn with_cancellation(mut self, flag: &'a AtomicBool) -> Self {
        self.cancel = Some(flag);
        self
    }

    /// Parse the entire token stream into a [`Program`].
    ///
    /// ## Errors
    /// Returns a list of [`CompileError`]s if parsing fails. The parser attempts
    /// to recover and continue after an error to report multiple issues in one pass.
    pub fn parse(self) -> Result<Program, Vec<CompileError>> {
        let (program, errors) = self.parse_recovering();
        if errors.is_empty() {
            Ok(program)
        } else {
            Err(errors)
        }
    }

    /// Parse the entire token stream, always returning a (possibly partial) [`Program`] plus every syntax error.
    pub fn parse_recovering(mut self) -> (Program, Vec<CompileError>) {
        let mut declarations = Vec::new();

        while !self.is_at_end() {
            if self.is_cancelled() {
                tracing::debug!(pos = self.pos, "parse cancelled");
                self.errors.push(CompileError::cancelled(self.current_span()));
                break;
            }

            let decl_start = self.pos;
            match self.declaration() {
                Ok(decl) => {
                    tracing::trace!(start = decl.span.start, end = decl.span.end, "parsed declaration");
                    declarations.push(decl);
                }
                Err(e) => {
                    self.errors.push(e);
                    self.synchronize_declaration(decl_start);
                }
            }
        }

        let end = self.tokens.last().map(|t| t.span.end).unwrap_or(0);
        let program = Program {
            declarations,
            span: Span::new(0, end),
        };
        (program, self.errors)
    }

    fn is_cancelled(&self) -> bool {
        self.cancel.is_some_and(|flag| flag.load(Ordering::Relaxed))
    }

    // ========================================================================
    // Speculation
    // ========================================================================

    fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            pos: self.pos,
            split: self.split.clone(),
            prev_end: self.prev_end,
            error_count: self.errors.len(),
        }
    }

    fn restore(&mut self, checkpoint: Checkpoint) {
        self.pos = checkpoint.pos;
        self.split = checkpoint.split;
        self.prev_end = checkpoint.prev_end;
        self.errors.truncate(checkpoint.error_count);
    }

    /// Run `f` speculatively: keep its result on success, rewind and return `None` on failure.
    fn speculate<T>(&mut self, f: impl FnOnce(&mut Self) -> Result<T, CompileError>) -> Option<T> {
        let checkpoint = self.checkpoint();
        match f(self) {
            Ok(value) => Some(value),
            Err(_) => {
                self.restore(checkpoint);
                None
            }
        }
    }

    /// Parse with struct literals enabled or disabled, restoring the previous setting afterwards.
    fn with_struct_literals<T>(&mut self, allowed: bool, f: impl FnOnce(&mut Self) -> T) -> T {
        let saved = std::mem::replace(&mut self.struct_literals_allowed, allowed);
        let result = f(self);
        self.struct_literals_allowed = saved;
        result
    }
}
