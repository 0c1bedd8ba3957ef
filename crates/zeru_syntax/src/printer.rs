//! Human-readable dump of the syntax tree.
//!
//! Declarations and statements are rendered one per line as an indented outline; expressions render inline as
//! S-expressions (`(+ 1 (* 2 3))`), which makes grouping explicit. Types and patterns use their source-like form.
//!
//! ## Examples
//!
//! ```rust
//! use zeru_syntax::{parse_source, printer};
//!
//! let output = parse_source("fn main() { return 1 + 2 * 3; }");
//! assert_eq!(printer::render(&output.program), "fn main\n  body\n    return (+ 1 (* 2 3))\n");
//! ```

use crate::ast::*;

/// Render a whole program as an indented outline.
pub fn render(program: &Program) -> String {
    let mut printer = Printer::default();
    for decl in &program.declarations {
        printer.declaration(&decl.node);
    }
    printer.out
}

/// Render one expression as an S-expression.
pub fn expr_to_sexpr(expr: &Expr) -> String {
    let mut out = String::new();
    write_expr(&mut out, expr);
    out
}

/// Render one match pattern.
pub fn pattern_to_string(pattern: &Pattern) -> String {
    match pattern {
        Pattern::Wildcard => "_".to_string(),
        Pattern::Default => "default".to_string(),
        Pattern::Literal(lit) => literal_to_string(lit),
        Pattern::Variant { scope, name, bindings } => {
            let mut out = match scope {
                Some(scope) => format!("{}::{}", scope, name),
                None => name.clone(),
            };
            if let Some(bindings) = bindings {
                let names: Vec<&str> = bindings.iter().map(|b| b.node.as_str()).collect();
                out.push_str(&format!("({})", names.join(", ")));
            }
            out
        }
    }
}

#[derive(Default)]
struct Printer {
    out: String,
    depth: usize,
}

impl Printer {
    fn line(&mut self, text: &str) {
        for _ in 0..self.depth {
            self.out.push_str("  ");
        }
        self.out.push_str(text);
        self.out.push('\n');
    }

    fn nested(&mut self, f: impl FnOnce(&mut Self)) {
        self.depth += 1;
        f(self);
        self.depth -= 1;
    }

    fn declaration(&mut self, decl: &Declaration) {
        match decl {
            Declaration::Function(func) => self.function(func),
            Declaration::Struct(s) => {
                self.line(&format!(
                    "{}struct {}{}",
                    visibility_prefix(s.visibility),
                    s.name.node,
                    type_params(&s.type_params)
                ));
                self.nested(|p| {
                    for member in &s.members {
                        match &member.node {
                            StructMember::Field(field) => {
                                p.line(&format!("field {}: {}", field.name.node, field.ty.node));
                            }
                            StructMember::Method(method) => p.function(method),
                        }
                    }
                });
            }
            Declaration::Enum(e) => {
                self.line(&format!("{}enum {}", visibility_prefix(e.visibility), e.name.node));
                self.nested(|p| {
                    for variant in &e.variants {
                        let mut text = format!("variant {}", variant.node.name.node);
                        if !variant.node.fields.is_empty() {
                            let fields: Vec<String> = variant.node.fields.iter().map(|t| t.node.to_string()).collect();
                            text.push_str(&format!("({})", fields.join(", ")));
                        }
                        p.line(&text);
                    }
                });
            }
            Declaration::Trait(t) => {
                self.line(&format!("trait {}", t.name.node));
                self.nested(|p| {
                    for method in &t.methods {
                        let m = &method.node;
                        p.line(&format!("fn {}", m.name.node));
                        p.nested(|p| {
                            p.signature(&m.params, m.return_type.as_ref());
                            match &m.body {
                                Some(body) => p.body(body),
                                None => p.line("abstract"),
                            }
                        });
                    }
                });
            }
            Declaration::Import(import) => {
                let path: Vec<&str> = import.path.iter().map(|seg| seg.node.as_str()).collect();
                let mut text = format!("import {}", path.join("."));
                if let Some(items) = &import.items {
                    let items: Vec<&str> = items.iter().map(|item| item.node.as_str()).collect();
                    text.push_str(&format!("::{{{}}}", items.join(", ")));
                }
                self.line(&text);
            }
            Declaration::Const(c) => self.line(&const_line(c)),
        }
    }

    fn function(&mut self, func: &FunctionDecl) {
        self.line(&format!(
            "{}fn {}{}",
            visibility_prefix(func.visibility),
            func.name.node,
            type_params(&func.type_params)
        ));
        self.nested(|p| {
            p.signature(&func.params, func.return_type.as_ref());
            p.body(&func.body);
        });
    }

    fn signature(&mut self, params: &[Spanned<Param>], return_type: Option<&Spanned<Type>>) {
        for param in params {
            let param = &param.node;
            let mut text = String::from("param ");
            if param.is_var {
                text.push_str("var ");
            }
            match &param.name {
                ParamName::SelfParam => text.push_str("self"),
                ParamName::Named(name) => text.push_str(name),
            }
            if let Some(ty) = &param.ty {
                text.push_str(&format!(": {}", ty.node));
            }
            self.line(&text);
        }
        if let Some(ret) = return_type {
            self.line(&format!("ret {}", ret.node));
        }
    }

    fn body(&mut self, block: &Spanned<Block>) {
        self.line("body");
        self.nested(|p| p.statements(&block.node));
    }

    fn statements(&mut self, block: &Block) {
        for stmt in &block.statements {
            self.statement(&stmt.node);
        }
    }

    fn statement(&mut self, stmt: &Statement) {
        match stmt {
            Statement::Var(var) => {
                let mut text = format!("var {}", var.name.node);
                if let Some(ty) = &var.ty {
                    text.push_str(&format!(": {}", ty.node));
                }
                if let Some(value) = &var.value {
                    text.push_str(&format!(" = {}", expr_to_sexpr(&value.node)));
                }
                self.line(&text);
            }
            Statement::Const(c) => self.line(&const_line(c)),
            Statement::Assign(assign) => self.line(&format!(
                "assign {} {} {}",
                expr_to_sexpr(&assign.target.node),
                assign.op,
                expr_to_sexpr(&assign.value.node)
            )),
            Statement::Return(Some(value)) => self.line(&format!("return {}", expr_to_sexpr(&value.node))),
            Statement::Return(None) => self.line("return"),
            Statement::Break => self.line("break"),
            Statement::Continue => self.line("continue"),
            Statement::If(if_stmt) => {
                self.line(&format!("if {}", expr_to_sexpr(&if_stmt.condition.node)));
                self.nested(|p| p.statements(&if_stmt.then_block.node));
                for (cond, block) in &if_stmt.else_ifs {
                    self.line(&format!("else if {}", expr_to_sexpr(&cond.node)));
                    self.nested(|p| p.statements(&block.node));
                }
                if let Some(block) = &if_stmt.else_block {
                    self.line("else");
                    self.nested(|p| p.statements(&block.node));
                }
            }
            Statement::While(w) => {
                self.line(&format!("while {}", expr_to_sexpr(&w.condition.node)));
                self.nested(|p| p.statements(&w.body.node));
            }
            Statement::For(f) => {
                self.line(&format!("for {} in {}", f.var.node, expr_to_sexpr(&f.iter.node)));
                self.nested(|p| p.statements(&f.body.node));
            }
            Statement::Expr(expr) => self.line(&format!("expr {}", expr_to_sexpr(&expr.node))),
        }
    }
}

fn visibility_prefix(visibility: Visibility) -> &'static str {
    match visibility {
        Visibility::Public => "pub ",
        Visibility::Private => "",
    }
}

fn type_params(params: &[Spanned<Ident>]) -> String {
    if params.is_empty() {
        return String::new();
    }
    let names: Vec<&str> = params.iter().map(|p| p.node.as_str()).collect();
    format!("<{}>", names.join(", "))
}

fn const_line(c: &ConstDecl) -> String {
    format!("const {}: {} = {}", c.name.node, c.ty.node, expr_to_sexpr(&c.value.node))
}

fn literal_to_string(lit: &Literal) -> String {
    match lit {
        Literal::Int(n) => n.to_string(),
        Literal::Float(n) => format!("{:?}", n),
        Literal::String(s) => format!("{:?}", s),
        Literal::Char(c) => format!("{:?}", c),
        Literal::Bool(b) => b.to_string(),
        Literal::None => "None".to_string(),
    }
}

fn write_list(out: &mut String, items: &[Spanned<Expr>]) {
    for item in items {
        out.push(' ');
        write_expr(out, &item.node);
    }
}

fn write_expr(out: &mut String, expr: &Expr) {
    match expr {
        Expr::Ident(name) => out.push_str(name),
        Expr::SelfValue => out.push_str("self"),
        Expr::Scoped(scope, name) => {
            out.push_str(&format!("{}::{}", scope, name));
        }
        Expr::Literal(lit) => out.push_str(&literal_to_string(lit)),
        Expr::Array(items) => {
            out.push_str("(array");
            write_list(out, items);
            out.push(')');
        }
        Expr::ArrayRepeat(value, count) => {
            out.push_str("(array-repeat ");
            write_expr(out, &value.node);
            out.push_str(&format!(" {})", count));
        }
        Expr::Tuple(items) => {
            out.push_str("(tuple");
            write_list(out, items);
            out.push(')');
        }
        Expr::StructLiteral(name, fields) => {
            out.push_str(&format!("(struct-lit {}", name.node));
            for field in fields {
                out.push_str(&format!(" ({} ", field.node.name.node));
                write_expr(out, &field.node.value.node);
                out.push(')');
            }
            out.push(')');
        }
        Expr::Binary(left, op, right) => {
            out.push_str(&format!("({} ", op));
            write_expr(out, &left.node);
            out.push(' ');
            write_expr(out, &right.node);
            out.push(')');
        }
        Expr::Unary(op, operand) => {
            let name = match op {
                UnaryOp::Neg => "neg",
                UnaryOp::Not => "not",
                UnaryOp::Deref => "deref",
                UnaryOp::Ref => "ref",
            };
            out.push_str(&format!("({} ", name));
            write_expr(out, &operand.node);
            out.push(')');
        }
        Expr::Cast(value, ty) => {
            out.push_str("(as ");
            write_expr(out, &value.node);
            out.push_str(&format!(" {})", ty.node));
        }
        Expr::Call { callee, type_args, args } => {
            out.push_str("(call ");
            write_expr(out, &callee.node);
            if !type_args.is_empty() {
                let types: Vec<String> = type_args.iter().map(|t| t.node.to_string()).collect();
                out.push_str(&format!(" (type-args {})", types.join(" ")));
            }
            write_list(out, args);
            out.push(')');
        }
        Expr::MethodCall(receiver, method, args) => {
            out.push_str("(method-call ");
            write_expr(out, &receiver.node);
            out.push_str(&format!(" {}", method.node));
            write_list(out, args);
            out.push(')');
        }
        Expr::Field(base, field) => {
            out.push_str("(field ");
            write_expr(out, &base.node);
            out.push_str(&format!(" {})", field.node));
        }
        Expr::Index(base, index) => {
            out.push_str("(index ");
            write_expr(out, &base.node);
            out.push(' ');
            write_expr(out, &index.node);
            out.push(')');
        }
        Expr::Range(start, end) => {
            out.push_str("(range ");
            write_expr(out, &start.node);
            out.push(' ');
            write_expr(out, &end.node);
            out.push(')');
        }
        Expr::Match(subject, arms) => {
            out.push_str("(match ");
            write_expr(out, &subject.node);
            for arm in arms {
                out.push_str(&format!(" (arm {} ", pattern_to_string(&arm.node.pattern.node)));
                write_expr(out, &arm.node.value.node);
                out.push(')');
            }
            out.push(')');
        }
        Expr::Paren(inner) => {
            out.push_str("(paren ");
            write_expr(out, &inner.node);
            out.push(')');
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literals_render_unambiguously() {
        assert_eq!(literal_to_string(&Literal::Float(2.0)), "2.0");
        assert_eq!(literal_to_string(&Literal::String("a\"b".into())), "\"a\\\"b\"");
        assert_eq!(literal_to_string(&Literal::Char('\n')), "'\\n'");
        assert_eq!(literal_to_string(&Literal::None), "None");
    }

    #[test]
    fn test_pattern_rendering() {
        let pattern = Pattern::Variant {
            scope: Some("Shape".into()),
            name: "Circle".into(),
            bindings: Some(vec![Spanned::new("r".to_string(), Span::default())]),
        };
        assert_eq!(pattern_to_string(&pattern), "Shape::Circle(r)");
        assert_eq!(pattern_to_string(&Pattern::Wildcard), "_");
        let bare = Pattern::Variant {
            scope: None,
            name: "Empty".into(),
            bindings: Some(Vec::new()),
        };
        assert_eq!(pattern_to_string(&bare), "Empty()");
    }

    #[test]
    fn test_visibility_and_type_params() {
        assert_eq!(visibility_prefix(Visibility::Public), "pub ");
        let params = vec![
            Spanned::new("K".to_string(), Span::default()),
            Spanned::new("V".to_string(), Span::default()),
        ];
        assert_eq!(type_params(&params), "<K, V>");
        assert_eq!(type_params(&[]), "");
    }
}
