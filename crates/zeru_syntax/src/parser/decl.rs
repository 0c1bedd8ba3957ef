/// Declaration parsing methods.
///
/// This chunk is responsible for parsing top-level declarations: functions, structs (fields and methods), enums,
/// traits, imports and constants.
///
/// ## Notes
/// - Most entrypoints in this file return [`Spanned<T>`] to preserve source locations.
/// - Member-level recovery inside `{ ... }` bodies uses `synchronize_member()` (in `helpers.rs`); top-level
///   recovery is driven by `parse_recovering()`.
impl<'a> Parser<'a> {
    // ========================================================================
    // Declarations
    // ========================================================================

    fn declaration(&mut self) -> Result<Spanned<Declaration>, CompileError> {
        let start = self.current_span().start;

        let mut visibility = Visibility::Private;
        let pub_span = self.current_span();
        if self.match_keyword(KeywordId::Pub) {
            visibility = Visibility::Public;
        }

        let decl = match self.peek().keyword_id() {
            Some(KeywordId::Fn) => Declaration::Function(self.function_decl(visibility)?),
            Some(KeywordId::Struct) => Declaration::Struct(self.struct_decl(visibility)?),
            Some(KeywordId::Enum) => Declaration::Enum(self.enum_decl(visibility)?),
            Some(id @ (KeywordId::Trait | KeywordId::Import | KeywordId::Const)) => {
                if visibility == Visibility::Public {
                    self.errors.push(
                        CompileError::syntax(
                            format!("The 'pub' modifier is not supported on {}", keyword_noun(id)),
                            pub_span,
                        )
                        .with_hint("remove `pub`"),
                    );
                }
                match id {
                    KeywordId::Trait => Declaration::Trait(self.trait_decl()?),
                    KeywordId::Import => Declaration::Import(self.import_decl()?),
                    _ => Declaration::Const(self.const_decl()?),
                }
            }
            _ => {
                return Err(self.error_here("Expected declaration"));
            }
        };

        Ok(Spanned::new(decl, Span::new(start, self.prev_end)))
    }

    fn function_decl(&mut self, visibility: Visibility) -> Result<FunctionDecl, CompileError> {
        self.expect_keyword(KeywordId::Fn, "Expected 'fn'")?;
        let name = self.identifier_spanned()?;
        let type_params = self.type_params()?;
        let params = self.params()?;
        let return_type = if self.check_punct(PunctuationId::LBrace) {
            None
        } else {
            Some(self.type_expr()?)
        };
        let body = self.block()?;
        Ok(FunctionDecl {
            visibility,
            name,
            type_params,
            params,
            return_type,
            body,
        })
    }

    /// Parse `( [param {, param}] )`.
    fn params(&mut self) -> Result<Vec<Spanned<Param>>, CompileError> {
        self.expect_punct(PunctuationId::LParen, "Expected '(' after function name")?;
        let mut params = Vec::new();
        if !self.check_punct(PunctuationId::RParen) {
            loop {
                params.push(self.param()?);
                if !self.match_punct(PunctuationId::Comma) {
                    break;
                }
            }
        }
        self.expect_punct(PunctuationId::RParen, "Expected ')' after parameters")?;
        Ok(params)
    }

    fn param(&mut self) -> Result<Spanned<Param>, CompileError> {
        let start = self.current_span().start;
        let is_var = self.match_keyword(KeywordId::Var);
        let name = if self.match_keyword(KeywordId::SelfKw) {
            ParamName::SelfParam
        } else {
            match &self.peek().kind {
                TokenKind::Ident(name) => {
                    let name = name.clone();
                    self.advance();
                    ParamName::Named(name)
                }
                _ => return Err(self.error_here("Expected parameter name")),
            }
        };
        let ty = if self.match_punct(PunctuationId::Colon) {
            Some(self.type_expr()?)
        } else {
            None
        };
        Ok(Spanned::new(Param { is_var, name, ty }, Span::new(start, self.prev_end)))
    }

    fn struct_decl(&mut self, visibility: Visibility) -> Result<StructDecl, CompileError> {
        self.expect_keyword(KeywordId::Struct, "Expected 'struct'")?;
        let name = self.identifier_spanned()?;
        let type_params = self.type_params()?;
        self.expect_punct(PunctuationId::LBrace, "Expected '{' after struct name")?;

        let mut members = Vec::new();
        while !self.check_punct(PunctuationId::RBrace) && !self.is_at_end() {
            let before = self.pos;
            match self.struct_member() {
                Ok(member) => members.push(member),
                Err(e) => {
                    self.errors.push(e);
                    self.synchronize_member();
                    if self.pos == before {
                        self.advance();
                    }
                }
            }
        }

        self.expect_punct(PunctuationId::RBrace, "Expected '}' after struct body")?;
        Ok(StructDecl {
            visibility,
            name,
            type_params,
            members,
        })
    }

    /// Parse one struct member: `[pub] fn ...` or `name: Type [,]`.
    fn struct_member(&mut self) -> Result<Spanned<StructMember>, CompileError> {
        let start = self.current_span().start;

        if self.check_keyword(KeywordId::Pub) || self.check_keyword(KeywordId::Fn) {
            let visibility = if self.match_keyword(KeywordId::Pub) {
                Visibility::Public
            } else {
                Visibility::Private
            };
            let method = self.function_decl(visibility)?;
            return Ok(Spanned::new(StructMember::Method(method), Span::new(start, self.prev_end)));
        }

        if !matches!(self.peek().kind, TokenKind::Ident(_)) {
            return Err(self.error_here("Expected field or method in struct body"));
        }
        let name = self.identifier_spanned()?;
        self.expect_punct(PunctuationId::Colon, "Expected ':' after field name")?;
        let ty = self.type_expr()?;
        let end = self.prev_end;
        self.match_punct(PunctuationId::Comma);
        Ok(Spanned::new(StructMember::Field(FieldDecl { name, ty }), Span::new(start, end)))
    }

    fn enum_decl(&mut self, visibility: Visibility) -> Result<EnumDecl, CompileError> {
        self.expect_keyword(KeywordId::Enum, "Expected 'enum'")?;
        let name = self.identifier_spanned()?;
        self.expect_punct(PunctuationId::LBrace, "Expected '{' after enum name")?;

        let mut variants = Vec::new();
        while !self.check_punct(PunctuationId::RBrace) && !self.is_at_end() {
            let before = self.pos;
            match self.variant_decl() {
                Ok(variant) => {
                    variants.push(variant);
                    if !self.match_punct(PunctuationId::Comma) {
                        break;
                    }
                }
                Err(e) => {
                    self.errors.push(e);
                    self.synchronize_member();
                    if self.pos == before {
                        self.advance();
                    }
                }
            }
        }

        self.expect_punct(PunctuationId::RBrace, "Expected ',' or '}' after enum variant")?;
        Ok(EnumDecl {
            visibility,
            name,
            variants,
        })
    }

    /// Parse `Name` or `Name(T, ...)`. An empty payload `Name()` is accepted.
    fn variant_decl(&mut self) -> Result<Spanned<VariantDecl>, CompileError> {
        let start = self.current_span().start;
        let name = self.identifier_spanned()?;
        let mut fields = Vec::new();
        if self.match_punct(PunctuationId::LParen) {
            if !self.check_punct(PunctuationId::RParen) {
                loop {
                    fields.push(self.type_expr()?);
                    if !self.match_punct(PunctuationId::Comma) {
                        break;
                    }
                }
            }
            self.expect_punct(PunctuationId::RParen, "Expected ')' after variant payload types")?;
        }
        Ok(Spanned::new(VariantDecl { name, fields }, Span::new(start, self.prev_end)))
    }

    fn trait_decl(&mut self) -> Result<TraitDecl, CompileError> {
        self.expect_keyword(KeywordId::Trait, "Expected 'trait'")?;
        let name = self.identifier_spanned()?;
        self.expect_punct(PunctuationId::LBrace, "Expected '{' after trait name")?;

        let mut methods = Vec::new();
        while !self.check_punct(PunctuationId::RBrace) && !self.is_at_end() {
            let before = self.pos;
            match self.trait_method() {
                Ok(method) => methods.push(method),
                Err(e) => {
                    self.errors.push(e);
                    self.synchronize_member();
                    if self.pos == before {
                        self.advance();
                    }
                }
            }
        }

        self.expect_punct(PunctuationId::RBrace, "Expected '}' after trait body")?;
        Ok(TraitDecl { name, methods })
    }

    /// Parse `fn name(params) [Type] { ... }` or the abstract form ending in `;`.
    fn trait_method(&mut self) -> Result<Spanned<TraitMethod>, CompileError> {
        let start = self.current_span().start;
        if self.check_keyword(KeywordId::Pub) {
            return Err(CompileError::syntax(
                "Trait methods cannot be marked 'pub'".to_string(),
                self.current_span(),
            )
            .with_hint("remove `pub`"));
        }
        self.expect_keyword(KeywordId::Fn, "Expected 'fn' in trait body")?;
        let name = self.identifier_spanned()?;
        let params = self.params()?;
        let return_type = if self.check_punct(PunctuationId::LBrace) || self.check_punct(PunctuationId::Semicolon) {
            None
        } else {
            Some(self.type_expr()?)
        };
        let body = if self.match_punct(PunctuationId::Semicolon) {
            None
        } else {
            Some(self.block()?)
        };
        Ok(Spanned::new(
            TraitMethod {
                name,
                params,
                return_type,
                body,
            },
            Span::new(start, self.prev_end),
        ))
    }

    /// Parse `import a.b.c [::{x, y}] [;]`.
    fn import_decl(&mut self) -> Result<ImportDecl, CompileError> {
        self.expect_keyword(KeywordId::Import, "Expected 'import'")?;

        let mut path = vec![self.identifier_spanned()?];
        while self.match_punct(PunctuationId::Dot) {
            path.push(self.identifier_spanned()?);
        }

        let items = if self.match_punct(PunctuationId::ColonColon) {
            self.expect_punct(PunctuationId::LBrace, "Expected '{' after '::' in import")?;
            let items = self.identifier_list_spanned()?;
            self.expect_punct(PunctuationId::RBrace, "Expected '}' after imported names")?;
            Some(items)
        } else {
            None
        };

        self.match_punct(PunctuationId::Semicolon);
        Ok(ImportDecl { path, items })
    }

    /// Parse `const NAME: Type = value;`. Shared by top-level and block-level constants.
    fn const_decl(&mut self) -> Result<ConstDecl, CompileError> {
        self.expect_keyword(KeywordId::Const, "Expected 'const'")?;
        let name = self.identifier_spanned()?;
        self.expect_punct(PunctuationId::Colon, "Expected ':' and a type after constant name")?;
        let ty = self.type_expr()?;
        self.expect_op(OperatorId::Eq, "Expected '=' after constant type")?;
        let value = self.expression()?;
        self.expect_semicolon("constant declaration");
        Ok(ConstDecl { name, ty, value })
    }
}

/// Plural noun used in "not supported on ..." diagnostics.
fn keyword_noun(id: KeywordId) -> &'static str {
    match id {
        KeywordId::Trait => "traits",
        KeywordId::Import => "imports",
        KeywordId::Const => "constants",
        _ => keywords::as_str(id),
    }
}
