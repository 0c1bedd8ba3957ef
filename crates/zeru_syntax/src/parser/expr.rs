/// Expression parsing methods.
///
/// This chunk implements expression parsing with precedence climbing, including:
/// - Binary operators, driven by the parser's operator table (`self.operators`)
/// - Casts (`x as T`) and non-chaining ranges (`a..b`)
/// - Prefix operators (`-x`, `!x`, `*p`, `&v`)
/// - Postfix chains: calls, method calls, field / tuple-index access, indexing
/// - Primary expressions: literals, identifiers, scoped names, generic calls, struct literals, tuples, arrays,
///   and `match`
///
/// ## Notes
/// - Binding strength and associativity are never hard-coded here; they are read from the operator table.
/// - `name<T>(args)` and `Name { ... }` are parsed speculatively and fall back to the plain identifier.
impl<'a> Parser<'a> {
    // ========================================================================
    // Expressions
    // ========================================================================

    fn expression(&mut self) -> Result<Spanned<Expr>, CompileError> {
        self.binary_expr(0)
    }

    /// Precedence climbing over infix operators binding at least as tightly as `min_prec`.
    fn binary_expr(&mut self, min_prec: u8) -> Result<Spanned<Expr>, CompileError> {
        let mut left = self.unary_expr()?;
        let mut last_non_assoc: Option<u8> = None;

        loop {
            let Some(id) = self.infix_operator() else {
                break;
            };
            let Some(info) = operators::infix_in(self.operators, id).copied() else {
                break;
            };
            if info.precedence < min_prec {
                break;
            }

            if info.associativity == Associativity::None && last_non_assoc == Some(info.precedence) {
                let message = if id == OperatorId::DotDot {
                    "Range expressions cannot be chained".to_string()
                } else {
                    format!("Operator '{}' cannot be chained", info.spelling)
                };
                return Err(CompileError::syntax(message, self.current_span())
                    .with_hint("add parentheses to make the grouping explicit, e.g. `(a..b)`"));
            }

            self.advance();

            if id == OperatorId::As {
                let ty = self.type_expr()?;
                let span = left.span.merge(ty.span);
                left = Spanned::new(Expr::Cast(Box::new(left), ty), span);
                continue;
            }

            let next_min = match info.associativity {
                Associativity::Right => info.precedence,
                Associativity::Left | Associativity::None => info.precedence.saturating_add(1),
            };
            let right = self.binary_expr(next_min)?;
            let span = left.span.merge(right.span);

            let node = if id == OperatorId::DotDot {
                Expr::Range(Box::new(left), Box::new(right))
            } else {
                match BinaryOp::from_operator(id) {
                    Some(op) => Expr::Binary(Box::new(left), op, Box::new(right)),
                    None => {
                        return Err(CompileError::syntax(
                            format!("Operator '{}' cannot be used between two expressions", info.spelling),
                            span,
                        ));
                    }
                }
            };
            left = Spanned::new(node, span);
            last_non_assoc = (info.associativity == Associativity::None).then_some(info.precedence);
        }

        Ok(left)
    }

    /// Return the operator id for the current token if it could continue an expression in infix position.
    fn infix_operator(&self) -> Option<OperatorId> {
        match &self.peek().kind {
            TokenKind::Operator(id) => Some(*id),
            TokenKind::Keyword(KeywordId::As) => Some(OperatorId::As),
            _ => None,
        }
    }

    /// Return `true` if the operator table gives `id` a prefix meaning.
    fn prefix_enabled(&self, id: OperatorId) -> bool {
        self.operators
            .iter()
            .any(|o| o.id == id && (o.has_prefix_form || o.fixity == Fixity::Prefix))
    }

    fn unary_expr(&mut self) -> Result<Spanned<Expr>, CompileError> {
        let start = self.current_span().start;
        let Some(id) = self.peek().operator_id() else {
            return self.postfix_expr();
        };

        // `&&x` lexes as one token but means `&(&x)`.
        if id == OperatorId::AndAnd && self.prefix_enabled(OperatorId::Amp) {
            self.advance();
            let operand = self.unary_expr()?;
            let end = operand.span.end;
            let inner = Spanned::new(Expr::Unary(UnaryOp::Ref, Box::new(operand)), Span::new(start + 1, end));
            return Ok(Spanned::new(
                Expr::Unary(UnaryOp::Ref, Box::new(inner)),
                Span::new(start, end),
            ));
        }

        let op = match id {
            OperatorId::Minus => UnaryOp::Neg,
            OperatorId::Bang => UnaryOp::Not,
            OperatorId::Star => UnaryOp::Deref,
            OperatorId::Amp => UnaryOp::Ref,
            _ => return self.postfix_expr(),
        };
        if !self.prefix_enabled(id) {
            return self.postfix_expr();
        }

        self.advance();
        let operand = self.unary_expr()?;
        let end = operand.span.end;
        Ok(Spanned::new(Expr::Unary(op, Box::new(operand)), Span::new(start, end)))
    }

    fn postfix_expr(&mut self) -> Result<Spanned<Expr>, CompileError> {
        let mut expr = self.primary()?;
        let start = expr.span.start;

        loop {
            if self.check_punct(PunctuationId::LParen) {
                let args = self.call_args()?;
                expr = Spanned::new(
                    Expr::Call {
                        callee: Box::new(expr),
                        type_args: Vec::new(),
                        args,
                    },
                    Span::new(start, self.prev_end),
                );
            } else if self.match_punct(PunctuationId::Dot) {
                let member_span = self.current_span();
                match &self.peek().kind {
                    TokenKind::Int(index) => {
                        let index = *index;
                        self.advance();
                        let field = Spanned::new(FieldName::Index(index), member_span);
                        expr = Spanned::new(Expr::Field(Box::new(expr), field), Span::new(start, self.prev_end));
                    }
                    TokenKind::Ident(name) => {
                        let name = name.clone();
                        self.advance();
                        if self.check_punct(PunctuationId::LParen) {
                            let args = self.call_args()?;
                            let method = Spanned::new(name, member_span);
                            expr = Spanned::new(
                                Expr::MethodCall(Box::new(expr), method, args),
                                Span::new(start, self.prev_end),
                            );
                        } else {
                            let field = Spanned::new(FieldName::Named(name), member_span);
                            expr = Spanned::new(Expr::Field(Box::new(expr), field), Span::new(start, self.prev_end));
                        }
                    }
                    _ => return Err(self.error_here("Expected field name, method name or tuple index after '.'")),
                }
            } else if self.match_punct(PunctuationId::LBracket) {
                let index = self.with_struct_literals(true, |p| p.expression())?;
                self.expect_punct(PunctuationId::RBracket, "Expected ']' after index")?;
                expr = Spanned::new(
                    Expr::Index(Box::new(expr), Box::new(index)),
                    Span::new(start, self.prev_end),
                );
            } else {
                break;
            }
        }

        Ok(expr)
    }

    /// Parse `( [expr {, expr}] )`.
    fn call_args(&mut self) -> Result<Vec<Spanned<Expr>>, CompileError> {
        self.expect_punct(PunctuationId::LParen, "Expected '(' before arguments")?;
        let args = self.with_struct_literals(true, |p| p.expression_list(PunctuationId::RParen))?;
        self.expect_punct(PunctuationId::RParen, "Expected ')' after arguments")?;
        Ok(args)
    }

    fn primary(&mut self) -> Result<Spanned<Expr>, CompileError> {
        let span = self.current_span();

        let literal = match &self.peek().kind {
            TokenKind::Int(n) => Some(Literal::Int(*n)),
            TokenKind::Float(n) => Some(Literal::Float(*n)),
            TokenKind::String(s) => Some(Literal::String(s.clone())),
            TokenKind::Char(c) => Some(Literal::Char(*c)),
            TokenKind::Keyword(KeywordId::True) => Some(Literal::Bool(true)),
            TokenKind::Keyword(KeywordId::False) => Some(Literal::Bool(false)),
            TokenKind::Keyword(KeywordId::None) => Some(Literal::None),
            _ => None,
        };
        if let Some(literal) = literal {
            self.advance();
            return Ok(Spanned::new(Expr::Literal(literal), span));
        }

        if self.match_keyword(KeywordId::SelfKw) {
            return Ok(Spanned::new(Expr::SelfValue, span));
        }
        if self.check_keyword(KeywordId::Match) {
            return self.match_expr();
        }
        if self.check_punct(PunctuationId::LParen) {
            return self.paren_or_tuple();
        }
        if self.check_punct(PunctuationId::LBracket) {
            return self.array_literal();
        }
        if let TokenKind::Ident(name) = &self.peek().kind {
            let name = name.clone();
            self.advance();
            return self.identifier_expr(name, span);
        }

        Err(self.error_here("Expected expression"))
    }

    /// Continue after an identifier in expression position.
    ///
    /// Handles `name::<T>(..)`, `A::B`, `A::B::<T>(..)`, the speculative generic call `name<T>(..)` and the
    /// speculative struct literal `Name { field: value }`.
    fn identifier_expr(&mut self, name: Ident, span: Span) -> Result<Spanned<Expr>, CompileError> {
        if self.check_punct(PunctuationId::ColonColon) {
            if self.peek_next().kind.is_operator(OperatorId::Lt) {
                self.advance();
                let type_args = self.type_args()?;
                return self.generic_call(Spanned::new(Expr::Ident(name), span), type_args);
            }

            self.advance();
            let member = self.identifier_spanned()?;
            let scoped = Spanned::new(Expr::Scoped(name, member.node), span.merge(member.span));
            if self.check_punct(PunctuationId::ColonColon) && self.peek_next().kind.is_operator(OperatorId::Lt) {
                self.advance();
                let type_args = self.type_args()?;
                return self.generic_call(scoped, type_args);
            }
            return Ok(scoped);
        }

        // `a<b>(c)` is a generic call only when `(` directly follows the closing `>`.
        if self.check_op(OperatorId::Lt) && self.type_args_then_call() {
            let type_args = self.speculate(|p| {
                let args = p.type_args()?;
                if p.check_punct(PunctuationId::LParen) {
                    Ok(args)
                } else {
                    Err(p.error_here("Expected '(' after explicit type arguments"))
                }
            });
            if let Some(type_args) = type_args {
                tracing::trace!(name = %name, "resolved `<` as explicit type arguments");
                return self.generic_call(Spanned::new(Expr::Ident(name), span), type_args);
            }
        }

        if self.struct_literals_allowed && self.check_punct(PunctuationId::LBrace) {
            if let Some(fields) = self.speculate(|p| p.struct_literal_fields()) {
                let literal = Expr::StructLiteral(Spanned::new(name, span), fields);
                return Ok(Spanned::new(literal, Span::new(span.start, self.prev_end)));
            }
        }

        Ok(Spanned::new(Expr::Ident(name), span))
    }

    /// Return `true` if the current `<` closes exactly and the next token after the close is `(`.
    fn type_args_then_call(&self) -> bool {
        self.current_angle_close().is_some_and(|close| {
            close.exact
                && self
                    .tokens
                    .get(close.index + 1)
                    .is_some_and(|t| t.kind.is_punctuation(PunctuationId::LParen))
        })
    }

    fn generic_call(
        &mut self,
        callee: Spanned<Expr>,
        type_args: Vec<Spanned<Type>>,
    ) -> Result<Spanned<Expr>, CompileError> {
        let start = callee.span.start;
        let args = self.call_args()?;
        Ok(Spanned::new(
            Expr::Call {
                callee: Box::new(callee),
                type_args,
                args,
            },
            Span::new(start, self.prev_end),
        ))
    }

    /// Parse `{ name: value, ... }` after a struct name. A trailing comma is accepted.
    fn struct_literal_fields(&mut self) -> Result<Vec<Spanned<FieldInit>>, CompileError> {
        self.expect_punct(PunctuationId::LBrace, "Expected '{'")?;
        let mut fields = Vec::new();
        while !self.check_punct(PunctuationId::RBrace) {
            let name = self.identifier_spanned()?;
            self.expect_punct(PunctuationId::Colon, "Expected ':' after field name")?;
            let value = self.with_struct_literals(true, |p| p.expression())?;
            let span = name.span.merge(value.span);
            fields.push(Spanned::new(FieldInit { name, value }, span));
            if !self.match_punct(PunctuationId::Comma) {
                break;
            }
        }
        self.expect_punct(PunctuationId::RBrace, "Expected '}' after struct literal fields")?;
        Ok(fields)
    }

    /// Parse `(expr)`, `(expr,)` or `(a, b, ...)`.
    fn paren_or_tuple(&mut self) -> Result<Spanned<Expr>, CompileError> {
        let start = self.current_span().start;
        self.expect_punct(PunctuationId::LParen, "Expected '('")?;
        let first = self.with_struct_literals(true, |p| p.expression())?;

        if !self.match_punct(PunctuationId::Comma) {
            self.expect_punct(PunctuationId::RParen, "Expected ')'")?;
            return Ok(Spanned::new(Expr::Paren(Box::new(first)), Span::new(start, self.prev_end)));
        }

        let mut elems = vec![first];
        if !self.check_punct(PunctuationId::RParen) {
            let rest = self.with_struct_literals(true, |p| p.expression_list(PunctuationId::RParen))?;
            elems.extend(rest);
        }
        self.expect_punct(PunctuationId::RParen, "Expected ')' after tuple elements")?;
        Ok(Spanned::new(Expr::Tuple(elems), Span::new(start, self.prev_end)))
    }

    /// Parse `[a, b, c]` or `[value; N]`.
    fn array_literal(&mut self) -> Result<Spanned<Expr>, CompileError> {
        let start = self.current_span().start;
        self.expect_punct(PunctuationId::LBracket, "Expected '['")?;

        if self.match_punct(PunctuationId::RBracket) {
            return Ok(Spanned::new(Expr::Array(Vec::new()), Span::new(start, self.prev_end)));
        }

        let first = self.with_struct_literals(true, |p| p.expression())?;
        if self.match_punct(PunctuationId::Semicolon) {
            let count = self.int_literal("Expected integer repeat count in array literal")?;
            self.expect_punct(PunctuationId::RBracket, "Expected ']' after array repeat count")?;
            return Ok(Spanned::new(
                Expr::ArrayRepeat(Box::new(first), count),
                Span::new(start, self.prev_end),
            ));
        }

        let mut elems = vec![first];
        while self.match_punct(PunctuationId::Comma) {
            elems.push(self.with_struct_literals(true, |p| p.expression())?);
        }
        self.expect_punct(PunctuationId::RBracket, "Expected ']' after array elements")?;
        Ok(Spanned::new(Expr::Array(elems), Span::new(start, self.prev_end)))
    }

    // ========================================================================
    // Match
    // ========================================================================

    fn match_expr(&mut self) -> Result<Spanned<Expr>, CompileError> {
        let start = self.current_span().start;
        self.expect_keyword(KeywordId::Match, "Expected 'match'")?;
        let subject = self.with_struct_literals(false, |p| p.expression())?;
        self.expect_punct(PunctuationId::LBrace, "Expected '{' after match subject")?;

        let mut arms = Vec::new();
        while !self.check_punct(PunctuationId::RBrace) && !self.is_at_end() {
            let pattern = self.pattern()?;
            self.expect_punct(PunctuationId::FatArrow, "Expected '=>' after match pattern")?;
            let value = self.with_struct_literals(true, |p| p.expression())?;
            let span = pattern.span.merge(value.span);
            arms.push(Spanned::new(MatchArm { pattern, value }, span));
            self.match_punct(PunctuationId::Comma);
        }

        self.expect_punct(PunctuationId::RBrace, "Expected '}' after match arms")?;
        Ok(Spanned::new(
            Expr::Match(Box::new(subject), arms),
            Span::new(start, self.prev_end),
        ))
    }

    /// Parse a match pattern: `_`, `default`, an int/string/bool literal, or `[Scope::]Name[(a, b)]`.
    fn pattern(&mut self) -> Result<Spanned<Pattern>, CompileError> {
        let span = self.current_span();

        let literal = match &self.peek().kind {
            TokenKind::Int(n) => Some(Literal::Int(*n)),
            TokenKind::String(s) => Some(Literal::String(s.clone())),
            TokenKind::Keyword(KeywordId::True) => Some(Literal::Bool(true)),
            TokenKind::Keyword(KeywordId::False) => Some(Literal::Bool(false)),
            _ => None,
        };
        if let Some(literal) = literal {
            self.advance();
            return Ok(Spanned::new(Pattern::Literal(literal), span));
        }

        if self.match_keyword(KeywordId::Default) {
            return Ok(Spanned::new(Pattern::Default, span));
        }

        let first = match &self.peek().kind {
            TokenKind::Ident(name) => name.clone(),
            _ => return Err(self.error_here("Expected pattern")),
        };
        self.advance();
        if first == "_" {
            return Ok(Spanned::new(Pattern::Wildcard, span));
        }

        let (scope, name) = if self.match_punct(PunctuationId::ColonColon) {
            (Some(first), self.identifier()?)
        } else {
            (None, first)
        };

        let bindings = if self.match_punct(PunctuationId::LParen) {
            let names = if self.check_punct(PunctuationId::RParen) {
                Vec::new()
            } else {
                self.identifier_list_spanned()?
            };
            self.expect_punct(PunctuationId::RParen, "Expected ')' after pattern bindings")?;
            Some(names)
        } else {
            None
        };

        Ok(Spanned::new(
            Pattern::Variant { scope, name, bindings },
            Span::new(span.start, self.prev_end),
        ))
    }
}
