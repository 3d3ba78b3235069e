//! Hand-built AST fixtures standing in for what a parser would hand the
//! checker. Kept intentionally minimal — just enough shape per node to
//! drive each layer of the checker under test.

use ravenc_ast::{
    AddOp, AdditiveExpression, ClassDecl, CompareOp, Expression, Ident, MethodDecl,
    MultiplicativeExpression, NegatableExpression, NegatableKind, PrimaryExpression, PrimaryKind,
    Program, SymbolTable, VariableAccess,
};
use ravenc_util::{Handler, Span};

use crate::context::CheckCtx;

pub fn ident(name: &str) -> Ident {
    Ident::new(name, Span::DUMMY)
}

pub fn primary_int(v: i64) -> PrimaryExpression {
    PrimaryExpression {
        kind: PrimaryKind::IntegerLit(v),
        span: Span::DUMMY,
        ty: None,
    }
}

pub fn primary_bool(v: bool) -> PrimaryExpression {
    PrimaryExpression {
        kind: PrimaryKind::BooleanLit(v),
        span: Span::DUMMY,
        ty: None,
    }
}

pub fn primary_string(s: &str) -> PrimaryExpression {
    PrimaryExpression {
        kind: PrimaryKind::StringLit(s.to_string()),
        span: Span::DUMMY,
        ty: None,
    }
}

pub fn primary_var(access: VariableAccess) -> PrimaryExpression {
    PrimaryExpression {
        kind: PrimaryKind::Variable(access),
        span: Span::DUMMY,
        ty: None,
    }
}

pub fn negatable_from(p: PrimaryExpression) -> NegatableExpression {
    NegatableExpression {
        kind: NegatableKind::Primary(Box::new(p)),
        span: Span::DUMMY,
        ty: None,
    }
}

pub fn multiplicative_from(p: PrimaryExpression) -> MultiplicativeExpression {
    MultiplicativeExpression {
        left: None,
        op: None,
        right: Box::new(negatable_from(p)),
        span: Span::DUMMY,
        ty: None,
    }
}

pub fn additive_from(p: PrimaryExpression) -> AdditiveExpression {
    AdditiveExpression {
        left: None,
        op: None,
        right: Box::new(multiplicative_from(p)),
        span: Span::DUMMY,
        ty: None,
    }
}

/// `left + right`, as a two-term additive expression.
pub fn additive(left: PrimaryExpression, right: PrimaryExpression) -> AdditiveExpression {
    AdditiveExpression {
        left: Some(Box::new(additive_from(left))),
        op: Some(AddOp::Add),
        right: Box::new(multiplicative_from(right)),
        span: Span::DUMMY,
        ty: None,
    }
}

pub fn expr_from(p: PrimaryExpression) -> Expression {
    Expression {
        left: Box::new(additive_from(p)),
        op: None,
        right: None,
        span: Span::DUMMY,
        ty: None,
    }
}

/// `left = right`, as a comparison expression.
pub fn comparison(left: PrimaryExpression, right: PrimaryExpression) -> Expression {
    Expression {
        left: Box::new(additive_from(left)),
        op: Some((CompareOp::Eq, Span::DUMMY)),
        right: Some(Box::new(additive_from(right))),
        span: Span::DUMMY,
        ty: None,
    }
}

/// Builds a one-class, one-method program and symbol table, then hands
/// a [`CheckCtx`] pointed at that method to `f`.
pub fn with_ctx<F: FnOnce(&CheckCtx)>(f: F) {
    with_ctx_named("TestClass", "testMethod", f)
}

pub fn with_ctx_named<F: FnOnce(&CheckCtx)>(class_name: &str, method_name: &str, f: F) {
    let program = Program {
        main_class: ident(class_name),
        classes: vec![ClassDecl {
            name: ident(class_name),
            parent: None,
            fields: Vec::new(),
            methods: vec![MethodDecl {
                name: ident(method_name),
                params: Vec::new(),
                ret_type: None,
                locals: Vec::new(),
                body: Vec::new(),
                span: Span::DUMMY,
            }],
            span: Span::DUMMY,
        }],
    };
    with_ctx_for_program(&program, class_name, method_name, f);
}

pub fn with_ctx_for_program<F: FnOnce(&CheckCtx)>(
    program: &Program,
    class_name: &str,
    method_name: &str,
    f: F,
) {
    let table = SymbolTable::build(program);
    let handler = Handler::new();
    let class = table.get(class_name).expect("fixture class must exist");
    let method = class
        .methods
        .get(method_name)
        .expect("fixture method must exist");
    let ctx = CheckCtx::new(&table, &handler, class, method);
    f(&ctx);
}
