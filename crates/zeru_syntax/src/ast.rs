//! Abstract Syntax Tree definitions for Zeru
//!
//! This module defines all AST node types for the Zeru language. Every node that a diagnostic or a downstream pass
//! may need to point at is wrapped in [`Spanned`], so the exact source text of any node can be recovered with
//! [`Span::slice`].

use std::fmt;

use zeru_core::lang::operators::OperatorId;
use zeru_core::lang::types::{self as primitive_types, PrimitiveTypeId};

/// Source location span (byte offsets, end exclusive)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Return `true` if `other` lies entirely within `self`.
    pub fn contains(&self, other: Span) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Re-extract the source text this span covers.
    ///
    /// Returns an empty string if the span does not fall on valid char boundaries of `source`.
    pub fn slice<'s>(&self, source: &'s str) -> &'s str {
        source.get(self.start..self.end).unwrap_or("")
    }
}

/// A node with source location
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned<T> {
    pub node: T,
    pub span: Span,
}

impl<T> Spanned<T> {
    pub fn new(node: T, span: Span) -> Self {
        Self { node, span }
    }
}

pub type Ident = String;

/// A program is a sequence of declarations.
///
/// `span` always covers the whole input, including leading and trailing trivia.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub declarations: Vec<Spanned<Declaration>>,
    pub span: Span,
}

/// Top-level declarations
#[derive(Debug, Clone, PartialEq)]
pub enum Declaration {
    Function(FunctionDecl),
    Struct(StructDecl),
    Enum(EnumDecl),
    Trait(TraitDecl),
    Import(ImportDecl),
    Const(ConstDecl),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Private,
    Public,
}

// ============================================================================
// Functions
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDecl {
    pub visibility: Visibility,
    pub name: Spanned<Ident>,
    pub type_params: Vec<Spanned<Ident>>,
    pub params: Vec<Spanned<Param>>,
    pub return_type: Option<Spanned<Type>>,
    pub body: Spanned<Block>,
}

/// A function parameter: `[var] (name | self) [: Type]`
#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    pub is_var: bool,
    pub name: ParamName,
    pub ty: Option<Spanned<Type>>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ParamName {
    SelfParam,
    Named(Ident),
}

// ============================================================================
// Structs, enums, traits
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct StructDecl {
    pub visibility: Visibility,
    pub name: Spanned<Ident>,
    pub type_params: Vec<Spanned<Ident>>,
    /// Fields and methods in source order.
    pub members: Vec<Spanned<StructMember>>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum StructMember {
    Field(FieldDecl),
    Method(FunctionDecl),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldDecl {
    pub name: Spanned<Ident>,
    pub ty: Spanned<Type>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnumDecl {
    pub visibility: Visibility,
    pub name: Spanned<Ident>,
    pub variants: Vec<Spanned<VariantDecl>>,
}

/// `Name` or `Name(T, ...)`
#[derive(Debug, Clone, PartialEq)]
pub struct VariantDecl {
    pub name: Spanned<Ident>,
    pub fields: Vec<Spanned<Type>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TraitDecl {
    pub name: Spanned<Ident>,
    pub methods: Vec<Spanned<TraitMethod>>,
}

/// A trait method; `body` is `None` for an abstract signature ending in `;`.
#[derive(Debug, Clone, PartialEq)]
pub struct TraitMethod {
    pub name: Spanned<Ident>,
    pub params: Vec<Spanned<Param>>,
    pub return_type: Option<Spanned<Type>>,
    pub body: Option<Spanned<Block>>,
}

// ============================================================================
// Imports and constants
// ============================================================================

/// `import a.b.c [::{x, y}] [;]`
#[derive(Debug, Clone, PartialEq)]
pub struct ImportDecl {
    pub path: Vec<Spanned<Ident>>,
    /// Selective import list; `None` imports the module itself.
    pub items: Option<Vec<Spanned<Ident>>>,
}

/// `const NAME: Type = value;` (top level and statement level)
#[derive(Debug, Clone, PartialEq)]
pub struct ConstDecl {
    pub name: Spanned<Ident>,
    pub ty: Spanned<Type>,
    pub value: Spanned<Expr>,
}

// ============================================================================
// Types
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Type {
    /// `i32`, `bool`, `void`, ...
    Primitive(PrimitiveTypeId),
    /// `Point`
    Named(Ident),
    /// `Map<K, V>`
    Generic(Ident, Vec<Spanned<Type>>),
    /// `Array<T, N>`
    Array(Box<Spanned<Type>>, u64),
    /// `*T`
    Pointer(Box<Spanned<Type>>),
    /// `&[T]`
    Slice(Box<Spanned<Type>>),
    /// `T?`
    Optional(Box<Spanned<Type>>),
    /// `T!`
    Result(Box<Spanned<Type>>),
    /// `(A, B)`
    Tuple(Vec<Spanned<Type>>),
}

fn write_comma_list<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[Spanned<T>]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", item.node)?;
    }
    Ok(())
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Primitive(id) => write!(f, "{}", primitive_types::as_str(*id)),
            Type::Named(name) => write!(f, "{}", name),
            Type::Generic(name, args) => {
                write!(f, "{}<", name)?;
                write_comma_list(f, args)?;
                write!(f, ">")
            }
            Type::Array(elem, size) => write!(f, "{}<{}, {}>", primitive_types::ARRAY_TYPE_NAME, elem.node, size),
            Type::Pointer(inner) => write!(f, "*{}", inner.node),
            Type::Slice(inner) => write!(f, "&[{}]", inner.node),
            Type::Optional(inner) => write!(f, "{}?", inner.node),
            Type::Result(inner) => write!(f, "{}!", inner.node),
            Type::Tuple(elems) => {
                write!(f, "(")?;
                write_comma_list(f, elems)?;
                if elems.len() == 1 {
                    write!(f, ",")?;
                }
                write!(f, ")")
            }
        }
    }
}

// ============================================================================
// Statements
// ============================================================================

/// A brace-delimited statement list.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Block {
    pub statements: Vec<Spanned<Statement>>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `var x: T = value;`
    Var(VarDecl),
    /// `const X: T = value;`
    Const(ConstDecl),
    /// `target op= value;`
    Assign(AssignStmt),
    /// `return [expr];`
    Return(Option<Spanned<Expr>>),
    Break,
    Continue,
    If(IfStmt),
    While(WhileStmt),
    For(ForStmt),
    /// `expr;`
    Expr(Spanned<Expr>),
}

/// `var name [: Type] [= value];` (at least one of `ty`/`value` is present)
#[derive(Debug, Clone, PartialEq)]
pub struct VarDecl {
    pub name: Spanned<Ident>,
    pub ty: Option<Spanned<Type>>,
    pub value: Option<Spanned<Expr>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssignStmt {
    pub target: Spanned<Expr>,
    pub op: AssignOp,
    pub value: Spanned<Expr>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignOp {
    Assign, // =
    Add,    // +=
    Sub,    // -=
    Mul,    // *=
    Div,    // /=
    Mod,    // %=
    BitAnd, // &=
    BitOr,  // |=
    BitXor, // ^=
    Shl,    // <<=
    Shr,    // >>=
}

impl AssignOp {
    pub fn from_operator(id: OperatorId) -> Option<Self> {
        Some(match id {
            OperatorId::Eq => AssignOp::Assign,
            OperatorId::PlusEq => AssignOp::Add,
            OperatorId::MinusEq => AssignOp::Sub,
            OperatorId::StarEq => AssignOp::Mul,
            OperatorId::SlashEq => AssignOp::Div,
            OperatorId::PercentEq => AssignOp::Mod,
            OperatorId::AmpEq => AssignOp::BitAnd,
            OperatorId::PipeEq => AssignOp::BitOr,
            OperatorId::CaretEq => AssignOp::BitXor,
            OperatorId::ShlEq => AssignOp::Shl,
            OperatorId::ShrEq => AssignOp::Shr,
            _ => return None,
        })
    }
}

impl fmt::Display for AssignOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AssignOp::Assign => "=",
            AssignOp::Add => "+=",
            AssignOp::Sub => "-=",
            AssignOp::Mul => "*=",
            AssignOp::Div => "/=",
            AssignOp::Mod => "%=",
            AssignOp::BitAnd => "&=",
            AssignOp::BitOr => "|=",
            AssignOp::BitXor => "^=",
            AssignOp::Shl => "<<=",
            AssignOp::Shr => ">>=",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt {
    pub condition: Spanned<Expr>,
    pub then_block: Spanned<Block>,
    pub else_ifs: Vec<(Spanned<Expr>, Spanned<Block>)>,
    pub else_block: Option<Spanned<Block>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WhileStmt {
    pub condition: Spanned<Expr>,
    pub body: Spanned<Block>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForStmt {
    pub var: Spanned<Ident>,
    pub iter: Spanned<Expr>,
    pub body: Spanned<Block>,
}

// ============================================================================
// Expressions
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Identifier
    Ident(Ident),
    /// `self`
    SelfValue,
    /// Scoped identifier: `Shape::Circle`
    Scoped(Ident, Ident),
    /// Literal
    Literal(Literal),
    /// Array literal: `[a, b, c]`
    Array(Vec<Spanned<Expr>>),
    /// Array repeat literal: `[value; N]`
    ArrayRepeat(Box<Spanned<Expr>>, u64),
    /// Tuple: `(a, b)` or `(a,)`
    Tuple(Vec<Spanned<Expr>>),
    /// Struct literal: `Point { x: 1, y: 2 }`
    StructLiteral(Spanned<Ident>, Vec<Spanned<FieldInit>>),
    /// Binary operation: `a + b`
    Binary(Box<Spanned<Expr>>, BinaryOp, Box<Spanned<Expr>>),
    /// Prefix operation: `-x`, `!x`, `*p`, `&v`
    Unary(UnaryOp, Box<Spanned<Expr>>),
    /// Cast: `x as T`
    Cast(Box<Spanned<Expr>>, Spanned<Type>),
    /// Call with optional explicit type arguments: `f(a)`, `f::<T>(a)`, `f<T>(a)`
    Call {
        callee: Box<Spanned<Expr>>,
        type_args: Vec<Spanned<Type>>,
        args: Vec<Spanned<Expr>>,
    },
    /// Method call: `x.method(args)`
    MethodCall(Box<Spanned<Expr>>, Spanned<Ident>, Vec<Spanned<Expr>>),
    /// Field access: `x.field` or tuple index `x.0`
    Field(Box<Spanned<Expr>>, Spanned<FieldName>),
    /// Index: `x[i]`
    Index(Box<Spanned<Expr>>, Box<Spanned<Expr>>),
    /// Range: `start..end`
    Range(Box<Spanned<Expr>>, Box<Spanned<Expr>>),
    /// Match expression
    Match(Box<Spanned<Expr>>, Vec<Spanned<MatchArm>>),
    /// Parenthesized expression
    Paren(Box<Spanned<Expr>>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Int(u64),
    Float(f64),
    String(String),
    Char(char),
    Bool(bool),
    None,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldInit {
    pub name: Spanned<Ident>,
    pub value: Spanned<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FieldName {
    Named(Ident),
    Index(u64),
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldName::Named(name) => write!(f, "{}", name),
            FieldName::Index(idx) => write!(f, "{}", idx),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Or,
    And,
    BitOr,
    BitXor,
    BitAnd,
    Eq,
    NotEq,
    Lt,
    Gt,
    LtEq,
    GtEq,
    Shl,
    Shr,
    UShr, // >>> (logical shift right)
    Add,
    Sub,
    Mul,
    Div,
    Mod,
}

impl BinaryOp {
    /// Map an infix operator token to its AST operator.
    ///
    /// `..` and `as` are not binary operators in the tree; they build [`Expr::Range`] and [`Expr::Cast`].
    pub fn from_operator(id: OperatorId) -> Option<Self> {
        Some(match id {
            OperatorId::OrOr => BinaryOp::Or,
            OperatorId::AndAnd => BinaryOp::And,
            OperatorId::Pipe => BinaryOp::BitOr,
            OperatorId::Caret => BinaryOp::BitXor,
            OperatorId::Amp => BinaryOp::BitAnd,
            OperatorId::EqEq => BinaryOp::Eq,
            OperatorId::NotEq => BinaryOp::NotEq,
            OperatorId::Lt => BinaryOp::Lt,
            OperatorId::Gt => BinaryOp::Gt,
            OperatorId::LtEq => BinaryOp::LtEq,
            OperatorId::GtEq => BinaryOp::GtEq,
            OperatorId::Shl => BinaryOp::Shl,
            OperatorId::Shr => BinaryOp::Shr,
            OperatorId::UShr => BinaryOp::UShr,
            OperatorId::Plus => BinaryOp::Add,
            OperatorId::Minus => BinaryOp::Sub,
            OperatorId::Star => BinaryOp::Mul,
            OperatorId::Slash => BinaryOp::Div,
            OperatorId::Percent => BinaryOp::Mod,
            _ => return None,
        })
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BinaryOp::Or => write!(f, "||"),
            BinaryOp::And => write!(f, "&&"),
            BinaryOp::BitOr => write!(f, "|"),
            BinaryOp::BitXor => write!(f, "^"),
            BinaryOp::BitAnd => write!(f, "&"),
            BinaryOp::Eq => write!(f, "=="),
            BinaryOp::NotEq => write!(f, "!="),
            BinaryOp::Lt => write!(f, "<"),
            BinaryOp::Gt => write!(f, ">"),
            BinaryOp::LtEq => write!(f, "<="),
            BinaryOp::GtEq => write!(f, ">="),
            BinaryOp::Shl => write!(f, "<<"),
            BinaryOp::Shr => write!(f, ">>"),
            BinaryOp::UShr => write!(f, ">>>"),
            BinaryOp::Add => write!(f, "+"),
            BinaryOp::Sub => write!(f, "-"),
            BinaryOp::Mul => write!(f, "*"),
            BinaryOp::Div => write!(f, "/"),
            BinaryOp::Mod => write!(f, "%"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Neg,
    Not,
    Deref,
    Ref,
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnaryOp::Neg => write!(f, "-"),
            UnaryOp::Not => write!(f, "!"),
            UnaryOp::Deref => write!(f, "*"),
            UnaryOp::Ref => write!(f, "&"),
        }
    }
}

/// `pattern => value`
#[derive(Debug, Clone, PartialEq)]
pub struct MatchArm {
    pub pattern: Spanned<Pattern>,
    pub value: Spanned<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Pattern {
    /// `_`
    Wildcard,
    /// `default`
    Default,
    /// `42`, `"text"`, `true`
    Literal(Literal),
    /// `Name`, `Enum::Variant`, optionally destructuring `(a, b)`
    Variant {
        scope: Option<Ident>,
        name: Ident,
        bindings: Option<Vec<Spanned<Ident>>>,
    },
}

// ============================================================================
// Visitor trait for AST traversal
// ============================================================================

/// AST visitor.
///
/// Every method defaults to walking its children through the matching `walk_*` function, so an implementor only
/// overrides the nodes it cares about and calls `walk_*` itself to keep descending.
pub trait Visitor {
    fn visit_program(&mut self, program: &Program) {
        walk_program(self, program);
    }

    fn visit_declaration(&mut self, decl: &Spanned<Declaration>) {
        walk_declaration(self, decl);
    }

    fn visit_function(&mut self, func: &FunctionDecl) {
        walk_function(self, func);
    }

    fn visit_param(&mut self, param: &Spanned<Param>) {
        if let Some(ty) = &param.node.ty {
            self.visit_type(ty);
        }
    }

    fn visit_block(&mut self, block: &Spanned<Block>) {
        for stmt in &block.node.statements {
            self.visit_statement(stmt);
        }
    }

    fn visit_statement(&mut self, stmt: &Spanned<Statement>) {
        walk_statement(self, stmt);
    }

    fn visit_expr(&mut self, expr: &Spanned<Expr>) {
        walk_expr(self, expr);
    }

    fn visit_type(&mut self, ty: &Spanned<Type>) {
        walk_type(self, ty);
    }

    fn visit_pattern(&mut self, _pat: &Spanned<Pattern>) {}

    fn visit_ident(&mut self, _ident: &Spanned<Ident>) {}
}

pub fn walk_program<V: Visitor + ?Sized>(v: &mut V, program: &Program) {
    for decl in &program.declarations {
        v.visit_declaration(decl);
    }
}

pub fn walk_declaration<V: Visitor + ?Sized>(v: &mut V, decl: &Spanned<Declaration>) {
    match &decl.node {
        Declaration::Function(f) => v.visit_function(f),
        Declaration::Struct(s) => {
            v.visit_ident(&s.name);
            for tp in &s.type_params {
                v.visit_ident(tp);
            }
            for member in &s.members {
                match &member.node {
                    StructMember::Field(field) => {
                        v.visit_ident(&field.name);
                        v.visit_type(&field.ty);
                    }
                    StructMember::Method(method) => v.visit_function(method),
                }
            }
        }
        Declaration::Enum(e) => {
            v.visit_ident(&e.name);
            for variant in &e.variants {
                v.visit_ident(&variant.node.name);
                for ty in &variant.node.fields {
                    v.visit_type(ty);
                }
            }
        }
        Declaration::Trait(t) => {
            v.visit_ident(&t.name);
            for method in &t.methods {
                v.visit_ident(&method.node.name);
                for param in &method.node.params {
                    v.visit_param(param);
                }
                if let Some(ret) = &method.node.return_type {
                    v.visit_type(ret);
                }
                if let Some(body) = &method.node.body {
                    v.visit_block(body);
                }
            }
        }
        Declaration::Import(i) => {
            for segment in &i.path {
                v.visit_ident(segment);
            }
            for item in i.items.iter().flatten() {
                v.visit_ident(item);
            }
        }
        Declaration::Const(c) => walk_const(v, c),
    }
}

pub fn walk_function<V: Visitor + ?Sized>(v: &mut V, func: &FunctionDecl) {
    v.visit_ident(&func.name);
    for tp in &func.type_params {
        v.visit_ident(tp);
    }
    for param in &func.params {
        v.visit_param(param);
    }
    if let Some(ret) = &func.return_type {
        v.visit_type(ret);
    }
    v.visit_block(&func.body);
}

fn walk_const<V: Visitor + ?Sized>(v: &mut V, c: &ConstDecl) {
    v.visit_ident(&c.name);
    v.visit_type(&c.ty);
    v.visit_expr(&c.value);
}

pub fn walk_statement<V: Visitor + ?Sized>(v: &mut V, stmt: &Spanned<Statement>) {
    match &stmt.node {
        Statement::Var(var) => {
            v.visit_ident(&var.name);
            if let Some(ty) = &var.ty {
                v.visit_type(ty);
            }
            if let Some(value) = &var.value {
                v.visit_expr(value);
            }
        }
        Statement::Const(c) => walk_const(v, c),
        Statement::Assign(assign) => {
            v.visit_expr(&assign.target);
            v.visit_expr(&assign.value);
        }
        Statement::Return(value) => {
            if let Some(value) = value {
                v.visit_expr(value);
            }
        }
        Statement::Break | Statement::Continue => {}
        Statement::If(if_stmt) => {
            v.visit_expr(&if_stmt.condition);
            v.visit_block(&if_stmt.then_block);
            for (cond, block) in &if_stmt.else_ifs {
                v.visit_expr(cond);
                v.visit_block(block);
            }
            if let Some(block) = &if_stmt.else_block {
                v.visit_block(block);
            }
        }
        Statement::While(w) => {
            v.visit_expr(&w.condition);
            v.visit_block(&w.body);
        }
        Statement::For(f) => {
            v.visit_ident(&f.var);
            v.visit_expr(&f.iter);
            v.visit_block(&f.body);
        }
        Statement::Expr(expr) => v.visit_expr(expr),
    }
}

pub fn walk_expr<V: Visitor + ?Sized>(v: &mut V, expr: &Spanned<Expr>) {
    match &expr.node {
        Expr::Ident(_) | Expr::SelfValue | Expr::Scoped(..) | Expr::Literal(_) => {}
        Expr::Array(items) | Expr::Tuple(items) => {
            for item in items {
                v.visit_expr(item);
            }
        }
        Expr::ArrayRepeat(value, _) => v.visit_expr(value),
        Expr::StructLiteral(name, fields) => {
            v.visit_ident(name);
            for field in fields {
                v.visit_ident(&field.node.name);
                v.visit_expr(&field.node.value);
            }
        }
        Expr::Binary(left, _, right) | Expr::Index(left, right) | Expr::Range(left, right) => {
            v.visit_expr(left);
            v.visit_expr(right);
        }
        Expr::Unary(_, operand) | Expr::Paren(operand) => v.visit_expr(operand),
        Expr::Cast(value, ty) => {
            v.visit_expr(value);
            v.visit_type(ty);
        }
        Expr::Call { callee, type_args, args } => {
            v.visit_expr(callee);
            for ty in type_args {
                v.visit_type(ty);
            }
            for arg in args {
                v.visit_expr(arg);
            }
        }
        Expr::MethodCall(receiver, method, args) => {
            v.visit_expr(receiver);
            v.visit_ident(method);
            for arg in args {
                v.visit_expr(arg);
            }
        }
        Expr::Field(receiver, _) => v.visit_expr(receiver),
        Expr::Match(subject, arms) => {
            v.visit_expr(subject);
            for arm in arms {
                v.visit_pattern(&arm.node.pattern);
                v.visit_expr(&arm.node.value);
            }
        }
    }
}

pub fn walk_type<V: Visitor + ?Sized>(v: &mut V, ty: &Spanned<Type>) {
    match &ty.node {
        Type::Primitive(_) | Type::Named(_) => {}
        Type::Generic(_, args) | Type::Tuple(args) => {
            for arg in args {
                v.visit_type(arg);
            }
        }
        Type::Array(inner, _)
        | Type::Pointer(inner)
        | Type::Slice(inner)
        | Type::Optional(inner)
        | Type::Result(inner) => v.visit_type(inner),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_merge_and_slice() {
        let source = "fn main() {}";
        let name = Span::new(3, 7);
        let body = Span::new(10, 12);
        let merged = name.merge(body);
        assert_eq!(merged, Span::new(3, 12));
        assert_eq!(name.slice(source), "main");
        assert!(merged.contains(name));
        assert!(!name.contains(merged));
    }

    #[test]
    fn test_span_slice_out_of_bounds_is_empty() {
        assert_eq!(Span::new(5, 50).slice("short"), "");
    }

    #[test]
    fn test_type_display() {
        let i32_ty = Spanned::new(Type::Primitive(PrimitiveTypeId::I32), Span::default());
        let ptr = Type::Optional(Box::new(Spanned::new(Type::Pointer(Box::new(i32_ty.clone())), Span::default())));
        assert_eq!(ptr.to_string(), "*i32?");

        let array = Type::Array(Box::new(i32_ty.clone()), 4);
        assert_eq!(array.to_string(), "Array<i32, 4>");

        let single = Type::Tuple(vec![i32_ty]);
        assert_eq!(single.to_string(), "(i32,)");
    }

    #[test]
    fn test_operator_mapping() {
        assert_eq!(BinaryOp::from_operator(OperatorId::UShr), Some(BinaryOp::UShr));
        assert_eq!(BinaryOp::from_operator(OperatorId::DotDot), None);
        assert_eq!(BinaryOp::from_operator(OperatorId::PlusEq), None);
        assert_eq!(AssignOp::from_operator(OperatorId::ShlEq), Some(AssignOp::Shl));
        assert_eq!(AssignOp::from_operator(OperatorId::Plus), None);
    }
}
