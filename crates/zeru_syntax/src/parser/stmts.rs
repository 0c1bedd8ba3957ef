/// Statement parsing methods.
///
/// This chunk parses blocks and the statements inside them: `var`/`const` declarations, assignments, `return`,
/// `break`, `continue`, `if`/`else` chains, `while` and `for` loops, and expression statements.
///
/// ## Notes
/// - Assignment is a statement: exactly one assignment operator per statement, never inside an expression.
/// - `if`/`while` conditions and `for` iterables are parsed with struct literals disabled, so the following `{`
///   always opens the body.
/// - Statement-level recovery happens in [`Parser::block`], which keeps going after a failed statement.
impl<'a> Parser<'a> {
    // ========================================================================
    // Statements
    // ========================================================================

    fn block(&mut self) -> Result<Spanned<Block>, CompileError> {
        let start = self.current_span().start;
        self.expect_punct(PunctuationId::LBrace, "Expected '{'")?;

        let mut statements = Vec::new();
        while !self.check_punct(PunctuationId::RBrace) && !self.is_at_end() {
            // A declaration keyword here almost always means the block was never closed.
            if self.peek().kind.starts_declaration() && !self.check_keyword(KeywordId::Const) {
                break;
            }

            let before = self.pos;
            match self.statement() {
                Ok(stmt) => statements.push(stmt),
                Err(e) => {
                    self.errors.push(e);
                    self.synchronize_statement();
                    if self.pos == before {
                        self.advance();
                    }
                }
            }
        }

        self.expect_punct(PunctuationId::RBrace, "Expected '}' to close block")?;
        Ok(Spanned::new(Block { statements }, Span::new(start, self.prev_end)))
    }

    fn statement(&mut self) -> Result<Spanned<Statement>, CompileError> {
        let start = self.current_span().start;

        let stmt = match self.peek().keyword_id() {
            Some(KeywordId::Var) => self.var_stmt()?,
            Some(KeywordId::Const) => Statement::Const(self.const_decl()?),
            Some(KeywordId::Return) => self.return_stmt()?,
            Some(KeywordId::Break) => {
                self.advance();
                self.expect_semicolon("'break'");
                Statement::Break
            }
            Some(KeywordId::Continue) => {
                self.advance();
                self.expect_semicolon("'continue'");
                Statement::Continue
            }
            Some(KeywordId::If) => Statement::If(self.if_stmt()?),
            Some(KeywordId::While) => self.while_stmt()?,
            Some(KeywordId::For) => self.for_stmt()?,
            _ => self.assignment_or_expr_stmt()?,
        };

        Ok(Spanned::new(stmt, Span::new(start, self.prev_end)))
    }

    /// Parse `var name [: Type] [= value];`. At least one of the type and the value must be present.
    fn var_stmt(&mut self) -> Result<Statement, CompileError> {
        self.expect_keyword(KeywordId::Var, "Expected 'var'")?;
        let name = self.identifier_spanned()?;
        let ty = if self.match_punct(PunctuationId::Colon) {
            Some(self.type_expr()?)
        } else {
            None
        };
        let value = if self.match_op(OperatorId::Eq) {
            Some(self.expression()?)
        } else {
            None
        };

        if ty.is_none() && value.is_none() {
            self.errors.push(
                CompileError::syntax(
                    format!("Variable '{}' needs a type annotation or an initial value", name.node),
                    name.span,
                )
                .with_hint(format!("write `var {}: T;` or `var {} = value;`", name.node, name.node)),
            );
        }

        self.expect_semicolon("variable declaration");
        Ok(Statement::Var(VarDecl { name, ty, value }))
    }

    fn return_stmt(&mut self) -> Result<Statement, CompileError> {
        self.expect_keyword(KeywordId::Return, "Expected 'return'")?;
        let value = if self.check_punct(PunctuationId::Semicolon) || self.check_punct(PunctuationId::RBrace) {
            None
        } else {
            Some(self.expression()?)
        };
        self.expect_semicolon("return statement");
        Ok(Statement::Return(value))
    }

    fn if_stmt(&mut self) -> Result<IfStmt, CompileError> {
        self.expect_keyword(KeywordId::If, "Expected 'if'")?;
        let condition = self.condition()?;
        let then_block = self.block()?;

        let mut else_ifs = Vec::new();
        let mut else_block = None;
        while self.match_keyword(KeywordId::Else) {
            if self.match_keyword(KeywordId::If) {
                let cond = self.condition()?;
                let body = self.block()?;
                else_ifs.push((cond, body));
            } else {
                else_block = Some(self.block()?);
                break;
            }
        }

        Ok(IfStmt {
            condition,
            then_block,
            else_ifs,
            else_block,
        })
    }

    fn while_stmt(&mut self) -> Result<Statement, CompileError> {
        self.expect_keyword(KeywordId::While, "Expected 'while'")?;
        let condition = self.condition()?;
        let body = self.block()?;
        Ok(Statement::While(WhileStmt { condition, body }))
    }

    /// Parse `for name in iterable { ... }`.
    fn for_stmt(&mut self) -> Result<Statement, CompileError> {
        self.expect_keyword(KeywordId::For, "Expected 'for'")?;
        let var = self.identifier_spanned()?;
        self.expect_keyword(KeywordId::In, "Expected 'in' after loop variable")?;
        let iter = self.condition()?;
        let body = self.block()?;
        Ok(Statement::For(ForStmt { var, iter, body }))
    }

    /// Parse an expression that is directly followed by a block body.
    fn condition(&mut self) -> Result<Spanned<Expr>, CompileError> {
        self.with_struct_literals(false, |p| p.expression())
    }

    fn assignment_or_expr_stmt(&mut self) -> Result<Statement, CompileError> {
        let expr = self.expression()?;

        let Some(op) = self.peek().operator_id().and_then(AssignOp::from_operator) else {
            self.expect_semicolon("expression");
            return Ok(Statement::Expr(expr));
        };

        if !is_assignable(&expr.node) {
            return Err(CompileError::syntax("Invalid assignment target".to_string(), expr.span)
                .with_hint("only variables, fields, index expressions and dereferences can be assigned to"));
        }
        self.advance();
        let value = self.expression()?;

        if self.peek().operator_id().is_some_and(operators::is_assignment) {
            return Err(CompileError::syntax(
                "Only one assignment operator is allowed per statement".to_string(),
                self.current_span(),
            )
            .with_note("assignment is a statement, not an expression"));
        }

        self.expect_semicolon("assignment");
        Ok(Statement::Assign(AssignStmt {
            target: expr,
            op,
            value,
        }))
    }
}

/// Return `true` if `expr` may appear on the left of an assignment operator.
fn is_assignable(expr: &Expr) -> bool {
    matches!(
        expr,
        Expr::Ident(_) | Expr::Field(..) | Expr::Index(..) | Expr::Unary(UnaryOp::Deref, _)
    )
}
