/// Type-expression parsing methods.
///
/// This chunk parses syntactic type expressions (annotations), including:
/// - Primitives (`i32`, `bool`, `void`) and named types (`Point`)
/// - Generic applications (`Map<K, V>`) and fixed-size arrays (`Array<T, N>`)
/// - Prefix wrappers on a simple type (`*T`) and slices (`&[T]`)
/// - Tuple types (`(A, B)`, `(T,)`)
/// - One optional suffix: `T?` (optional) or `T!` (result)
///
/// ## Notes
/// - `Type` parsing is purely syntactic; semantic meaning is handled by later compiler phases.
/// - `Name<...>` is parsed speculatively and falls back to a plain named type when the argument list does not close.
///   The speculation only starts when the parser's angle table shows a matching close.
impl<'a> Parser<'a> {
    // ========================================================================
    // Types
    // ========================================================================

    /// Parse an optional `<T, U>` type-parameter list (bare identifiers, no bounds).
    fn type_params(&mut self) -> Result<Vec<Spanned<Ident>>, CompileError> {
        if !self.match_op(OperatorId::Lt) {
            return Ok(Vec::new());
        }
        let params = self.identifier_list_spanned()?;
        self.close_angle("Expected '>' after type parameters")?;
        Ok(params)
    }

    fn type_expr(&mut self) -> Result<Spanned<Type>, CompileError> {
        let start = self.current_span().start;

        let base = if self.match_op(OperatorId::Star) {
            // Pointers wrap simple types only; `*T?` is an optional pointer.
            let inner = self.simple_type()?;
            Spanned::new(Type::Pointer(Box::new(inner)), Span::new(start, self.prev_end))
        } else if self.match_op(OperatorId::Amp) {
            self.expect_punct(PunctuationId::LBracket, "Expected '[' after '&' in slice type")?;
            let elem = self.type_expr()?;
            self.expect_punct(PunctuationId::RBracket, "Expected ']' after slice element type")?;
            Spanned::new(Type::Slice(Box::new(elem)), Span::new(start, self.prev_end))
        } else if self.check_punct(PunctuationId::LParen) {
            self.tuple_type()?
        } else {
            self.simple_type()?
        };

        self.type_suffix(base)
    }

    /// Apply at most one `?` / `!` suffix.
    fn type_suffix(&mut self, base: Spanned<Type>) -> Result<Spanned<Type>, CompileError> {
        let start = base.span.start;
        let wrapped = if self.match_punct(PunctuationId::Question) {
            Type::Optional(Box::new(base))
        } else if self.match_op(OperatorId::Bang) {
            Type::Result(Box::new(base))
        } else {
            return Ok(base);
        };

        if self.check_punct(PunctuationId::Question) || self.check_op(OperatorId::Bang) {
            return Err(CompileError::syntax(
                "A type can carry only one '?' or '!' suffix".to_string(),
                self.current_span(),
            )
            .with_hint("wrap the inner type in a named type instead of stacking suffixes"));
        }
        Ok(Spanned::new(wrapped, Span::new(start, self.prev_end)))
    }

    fn tuple_type(&mut self) -> Result<Spanned<Type>, CompileError> {
        let start = self.current_span().start;
        self.expect_punct(PunctuationId::LParen, "Expected '('")?;
        let first = self.type_expr()?;

        if !self.check_punct(PunctuationId::Comma) {
            return Err(CompileError::syntax(
                "A tuple type needs at least one comma; write `(T,)`".to_string(),
                Span::new(start, self.current_span().end),
            )
            .with_note("parentheses alone do not group types".to_string()));
        }

        let mut elems = vec![first];
        while self.match_punct(PunctuationId::Comma) {
            if self.check_punct(PunctuationId::RParen) {
                break;
            }
            elems.push(self.type_expr()?);
        }
        self.expect_punct(PunctuationId::RParen, "Expected ')' after tuple type")?;
        Ok(Spanned::new(Type::Tuple(elems), Span::new(start, self.prev_end)))
    }

    /// Parse a simple type: primitive, named, generic or `Array<T, N>`.
    fn simple_type(&mut self) -> Result<Spanned<Type>, CompileError> {
        let span = self.current_span();
        let name = match &self.peek().kind {
            TokenKind::Ident(name) => name.clone(),
            _ => return Err(self.error_here("Expected type")),
        };
        self.advance();

        if let Some(id) = primitive_types::from_str(&name) {
            return Ok(Spanned::new(Type::Primitive(id), span));
        }

        if !self.check_op(OperatorId::Lt) {
            return Ok(Spanned::new(Type::Named(name), span));
        }

        if name == primitive_types::ARRAY_TYPE_NAME {
            return self.array_type(span.start);
        }

        if self.current_angle_close().is_none() {
            return Ok(Spanned::new(Type::Named(name), span));
        }

        match self.speculate(|p| p.type_args()) {
            Some(args) => Ok(Spanned::new(Type::Generic(name, args), Span::new(span.start, self.prev_end))),
            None => Ok(Spanned::new(Type::Named(name), span)),
        }
    }

    /// Parse `<T, N>` after `Array`.
    fn array_type(&mut self, start: usize) -> Result<Spanned<Type>, CompileError> {
        self.expect_op(OperatorId::Lt, "Expected '<' after 'Array'")?;
        let elem = self.type_expr()?;
        self.expect_punct(PunctuationId::Comma, "Expected ',' and a size in 'Array<T, N>'")?;
        let size = self.int_literal("Expected integer size in 'Array<T, N>'")?;
        self.close_angle("Expected '>' after array size")?;
        Ok(Spanned::new(Type::Array(Box::new(elem), size), Span::new(start, self.prev_end)))
    }

    /// Parse a non-empty `<T, U>` type-argument list.
    fn type_args(&mut self) -> Result<Vec<Spanned<Type>>, CompileError> {
        self.expect_op(OperatorId::Lt, "Expected '<'")?;
        let mut args = vec![self.type_expr()?];
        while self.match_punct(PunctuationId::Comma) {
            args.push(self.type_expr()?);
        }
        self.close_angle("Expected '>' after type arguments")?;
        Ok(args)
    }
}
