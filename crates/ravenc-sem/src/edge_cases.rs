//! Regression tests for the corner cases the checker this pass is
//! grounded in handles in slightly surprising ways.

use ravenc_ast::{
    ClassDecl, IndexedVariable, MethodDecl, Program, Statement, SymbolTable, Type, VariableAccess,
    VariableDecl,
};
use ravenc_util::{Handler, Span};

use crate::check;
use crate::tests::support::*;

fn single_method_program(method: MethodDecl) -> Program {
    Program {
        main_class: ident("Main"),
        classes: vec![ClassDecl {
            name: ident("Main"),
            parent: None,
            fields: Vec::new(),
            methods: vec![
                MethodDecl {
                    name: ident("Main"),
                    params: Vec::new(),
                    ret_type: None,
                    locals: Vec::new(),
                    body: Vec::new(),
                    span: Span::DUMMY,
                },
                method,
            ],
            span: Span::DUMMY,
        }],
    }
}

#[test]
fn main_class_existence_check_is_case_insensitive() {
    // the program header names "MAIN" but the class is declared "Main":
    // the class *exists* check must not fire "missing program class".
    // Its constructor is still looked up under the exact header text,
    // so a case mismatch there surfaces as a separate, distinct error.
    let mut program = single_method_program(MethodDecl {
        name: ident("run"),
        params: Vec::new(),
        ret_type: None,
        locals: Vec::new(),
        body: Vec::new(),
        span: Span::DUMMY,
    });
    program.main_class = ident("MAIN");
    let table = SymbolTable::build(&program);
    let handler = Handler::new();
    check(&mut program, &table, &handler);
    let rendered = handler.render();
    assert!(!rendered.contains("missing program class"));
}

#[test]
fn field_type_referencing_a_class_is_resolved_case_insensitively() {
    let table = SymbolTable::build(&single_method_program(MethodDecl {
        name: ident("run"),
        params: Vec::new(),
        ret_type: None,
        locals: Vec::new(),
        body: Vec::new(),
        span: Span::DUMMY,
    }));
    let handler = Handler::new();
    crate::driver::check_type(&table, &handler, &Type::class("MAIN", Span::DUMMY), true);
    assert!(!handler.has_errors());
}

#[test]
fn empty_string_literal_is_a_zero_length_char_array() {
    with_ctx(|ctx| {
        let mut e = primary_string("");
        let ty = crate::expr::check_primary_expression(ctx, &mut e).unwrap();
        match ty {
            Type::Array(arr) => {
                assert_eq!((arr.min, arr.max), (0, -1));
                assert_eq!(*arr.element, Type::Char);
            }
            other => panic!("expected array, got {:?}", other),
        }
    });
}

#[test]
fn non_integer_index_still_advances_through_nested_array_dimensions() {
    // grid: array[0..1] of array[0..1] of integer; grid[true][0] should
    // still report the first index as non-integer *and* type-check the
    // second index against the inner array, rather than bailing out.
    let inner = Type::array(0, 1, Type::Integer, Span::DUMMY);
    let grid_ty = Type::array(0, 1, inner, Span::DUMMY);
    let method = MethodDecl {
        name: ident("run"),
        params: Vec::new(),
        ret_type: None,
        locals: vec![VariableDecl {
            name: ident("grid"),
            ty: grid_ty,
        }],
        body: Vec::new(),
        span: Span::DUMMY,
    };
    let program = single_method_program(method);
    with_ctx_for_program(&program, "Main", "run", |ctx| {
        let mut indexed = IndexedVariable {
            variable: VariableAccess::Identifier(ident("grid")),
            indices: vec![expr_from(primary_bool(true)), expr_from(primary_int(0))],
            span: Span::DUMMY,
        };
        let ty = crate::var_access::check_indexed_variable(ctx, &mut indexed);
        assert_eq!(ty, Some(Type::Integer));
        assert!(ctx.handler.render().contains("array index not an integer"));
    });
}

#[test]
fn constant_index_out_of_range_is_reported_with_the_declared_bounds() {
    let method = MethodDecl {
        name: ident("run"),
        params: Vec::new(),
        ret_type: None,
        locals: vec![VariableDecl {
            name: ident("buf"),
            ty: Type::array(0, 2, Type::Integer, Span::DUMMY),
        }],
        body: Vec::new(),
        span: Span::DUMMY,
    };
    let program = single_method_program(method);
    with_ctx_for_program(&program, "Main", "run", |ctx| {
        let mut indexed = IndexedVariable {
            variable: VariableAccess::Identifier(ident("buf")),
            indices: vec![expr_from(primary_int(9))],
            span: Span::DUMMY,
        };
        crate::var_access::check_indexed_variable(ctx, &mut indexed);
        assert!(ctx
            .handler
            .render()
            .contains("array index 9 is out of the range [0..2]"));
    });
}

#[test]
fn indexing_a_non_array_reports_the_variable_name() {
    let method = MethodDecl {
        name: ident("run"),
        params: Vec::new(),
        ret_type: None,
        locals: vec![VariableDecl {
            name: ident("flag"),
            ty: Type::Boolean,
        }],
        body: Vec::new(),
        span: Span::DUMMY,
    };
    let program = single_method_program(method);
    with_ctx_for_program(&program, "Main", "run", |ctx| {
        let mut indexed = IndexedVariable {
            variable: VariableAccess::Identifier(ident("flag")),
            indices: vec![expr_from(primary_int(0))],
            span: Span::DUMMY,
        };
        let ty = crate::var_access::check_indexed_variable(ctx, &mut indexed);
        assert_eq!(ty, None);
        assert!(ctx
            .handler
            .render()
            .contains("indexed variable \"flag\" is not an array"));
    });
}

#[test]
fn cyclic_parent_chain_does_not_hang_assignment_checks() {
    // A and B are each other's parent (malformed, but the checker must
    // still terminate); C is unrelated to both.
    let a = ClassDecl {
        name: ident("A"),
        parent: Some(ident("B")),
        fields: Vec::new(),
        methods: Vec::new(),
        span: Span::DUMMY,
    };
    let b = ClassDecl {
        name: ident("B"),
        parent: Some(ident("A")),
        fields: Vec::new(),
        methods: Vec::new(),
        span: Span::DUMMY,
    };
    let c = ClassDecl {
        name: ident("C"),
        parent: None,
        // a differing field count forces structural equivalence to
        // fail rather than succeed vacuously, so this actually
        // exercises the is_ancestor cycle guard.
        fields: vec![VariableDecl {
            name: ident("extra"),
            ty: Type::Integer,
        }],
        methods: Vec::new(),
        span: Span::DUMMY,
    };
    let table = SymbolTable::build(&Program {
        main_class: ident("A"),
        classes: vec![a, b, c],
    });
    let a_ty = Type::class("A", Span::DUMMY);
    let c_ty = Type::class("C", Span::DUMMY);
    assert!(!crate::types::assignment_valid(&a_ty, &c_ty, &table));
}

#[test]
fn owner_of_an_attribute_access_that_is_not_a_class_degrades_gracefully() {
    let method = MethodDecl {
        name: ident("run"),
        params: Vec::new(),
        ret_type: None,
        locals: vec![VariableDecl {
            name: ident("n"),
            ty: Type::Integer,
        }],
        body: Vec::new(),
        span: Span::DUMMY,
    };
    let program = single_method_program(method);
    with_ctx_for_program(&program, "Main", "run", |ctx| {
        let mut attr = ravenc_ast::AttributeDesignator {
            owner: VariableAccess::Identifier(ident("n")),
            field: ident("whatever"),
            span: Span::DUMMY,
        };
        let ty = crate::var_access::check_attribute_designator(ctx, &mut attr);
        assert_eq!(ty, None);
        assert!(ctx.handler.has_errors());
    });
}

#[test]
fn object_instantiation_wording_differs_from_check_type_wording() {
    // `new Ghost()` says "not declared"; a field typed `Ghost` says
    // "is not defined" — distinct phrasing carried over deliberately.
    with_ctx(|ctx| {
        let mut inst = ravenc_ast::ObjectInstantiation {
            class_name: ident("Ghost"),
            args: Vec::new(),
        };
        crate::stmt::check_object_instantiation(ctx, &mut inst);
        assert!(ctx.handler.render().contains("class \"Ghost\" not declared"));
    });

    let table = SymbolTable::new();
    let handler = Handler::new();
    crate::driver::check_type(&table, &handler, &Type::class("Ghost", Span::DUMMY), false);
    assert!(handler.render().contains("class \"Ghost\" is not defined"));
}

#[test]
fn method_call_statement_position_is_checked_like_any_other_statement() {
    let mut program = single_method_program(MethodDecl {
        name: ident("run"),
        params: Vec::new(),
        ret_type: None,
        locals: Vec::new(),
        body: vec![Statement::Method(ravenc_ast::MethodDesignator {
            owner: Box::new(VariableAccess::This(Span::DUMMY)),
            call: ravenc_ast::FunctionDesignator {
                name: ident("missing"),
                args: Vec::new(),
            },
            span: Span::DUMMY,
        })],
        span: Span::DUMMY,
    });
    let table = SymbolTable::build(&program);
    let handler = Handler::new();
    assert!(!check(&mut program, &table, &handler));
    assert!(handler.render().contains("has no method \"missing\""));
}
