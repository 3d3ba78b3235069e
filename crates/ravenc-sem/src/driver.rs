//! Top-level driver (C6): validates the main class and its constructor,
//! walks declared types for every field/parameter/local/return type,
//! then checks every method body.

use ravenc_ast::{Program, SymbolTable, Type, VariableDecl};
use ravenc_util::Handler;

use crate::context::CheckCtx;
use crate::stmt::check_statement_list;

/// Runs the semantic pass over `program`, mutating cached type slots
/// and rewriting bare field identifiers into `this.field` in place.
/// Returns whether the program is well-typed; every failure reason was
/// already streamed to `handler`.
pub fn run(program: &mut Program, symbol_table: &SymbolTable, handler: &Handler) -> bool {
    check_main_class(program, symbol_table, handler);

    for class in &mut program.classes {
        let Some(class_symbols) = symbol_table.get(class.name.text()) else {
            continue;
        };

        check_variable_declaration_list(symbol_table, handler, &class.fields, true);

        for method in &mut class.methods {
            let Some(method_symbols) = class_symbols.methods.get(method.name.text()) else {
                continue;
            };

            check_variable_declaration_list(symbol_table, handler, &method.params, false);
            check_variable_declaration_list(symbol_table, handler, &method.locals, true);
            if let Some(ret) = &method.ret_type {
                check_type(symbol_table, handler, ret, false);
            }

            let ctx = CheckCtx::new(symbol_table, handler, class_symbols, method_symbols);
            check_statement_list(&ctx, &mut method.body);
        }
    }

    !handler.has_errors()
}

fn check_main_class(program: &Program, symbol_table: &SymbolTable, handler: &Handler) {
    let main_name = program.main_class.text();
    match symbol_table.get(main_name) {
        Some(class_symbols) => match class_symbols.methods.get(main_name) {
            Some(constructor) => {
                if !constructor.params.is_empty() {
                    handler.error(
                        constructor.name.span,
                        format!(
                            "constructor for main class \"{}\" must have no parameters",
                            class_symbols.name.text()
                        ),
                    );
                }
            }
            None => {
                handler.error(
                    class_symbols.name.span,
                    format!(
                        "main class \"{}\" must have a parameterless constructor",
                        class_symbols.name.text()
                    ),
                );
            }
        },
        None => {
            handler.error(program.main_class.span, "missing program class".to_string());
        }
    }
}

fn check_variable_declaration_list(
    table: &SymbolTable,
    handler: &Handler,
    decls: &[VariableDecl],
    allow_arrays: bool,
) {
    for decl in decls {
        check_type(table, handler, &decl.ty, allow_arrays);
    }
}

/// Validates a declared type: a class type must name a declared class;
/// an array's bounds must be non-decreasing, and arrays aren't allowed
/// in parameter/return-type position. Doesn't recurse into an array's
/// element type, matching the checker this was distilled from.
pub fn check_type(table: &SymbolTable, handler: &Handler, ty: &Type, allow_arrays: bool) {
    match ty {
        Type::Integer | Type::Real | Type::Char | Type::Boolean => {}
        Type::Class(c) => {
            if !table.contains(c.name.as_str()) {
                handler.error(c.span, format!("class \"{}\" is not defined", c.name));
            }
        }
        Type::Array(arr) => {
            if !allow_arrays {
                handler.error(
                    arr.span,
                    "parameters and return values are not allowed to be arrays".to_string(),
                );
                return;
            }
            if !(arr.max >= arr.min) {
                handler.error(
                    arr.span,
                    format!("invalid array range: [{}..{}]", arr.min, arr.max),
                );
            }
        }
    }
}
