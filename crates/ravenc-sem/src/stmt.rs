//! Statement checker (C5) plus the designator-checking logic shared by
//! statement-position method calls and method calls used as a primary
//! expression.

use ravenc_ast::{MethodDesignator, ObjectInstantiation, Statement, Type};

use crate::context::CheckCtx;
use crate::expr::check_expression;
use crate::resolve::class_method;
use crate::types::{assignment_valid, type_to_string};
use crate::var_access::{check_variable_access, find_identifier};

pub fn check_statement_list(ctx: &CheckCtx, statements: &mut [Statement]) {
    for statement in statements {
        check_statement(ctx, statement);
    }
}

pub fn check_statement(ctx: &CheckCtx, statement: &mut Statement) {
    match statement {
        Statement::Assignment { variable, expr, span } => {
            let left_ty = check_variable_access(ctx, variable, true);
            let right_ty = check_expression(ctx, expr);
            let (Some(left_ty), Some(right_ty)) = (left_ty, right_ty) else {
                return;
            };
            if !assignment_valid(&left_ty, &right_ty, ctx.symbol_table) {
                let error_span = find_identifier(variable).map(|id| id.span).unwrap_or(*span);
                if matches!(left_ty, Type::Class(_)) && matches!(right_ty, Type::Class(_)) {
                    ctx.handler.error(
                        error_span,
                        format!(
                            "class \"{}\" is not a base class of \"{}\" in the assignment",
                            type_to_string(&right_ty),
                            type_to_string(&left_ty)
                        ),
                    );
                } else {
                    ctx.handler.error(
                        error_span,
                        format!(
                            "cannot assign \"{}\" to \"{}\"",
                            type_to_string(&right_ty),
                            type_to_string(&left_ty)
                        ),
                    );
                }
            }
        }
        Statement::If {
            cond,
            then_branch,
            else_branch,
            ..
        } => {
            check_expression(ctx, cond);
            check_statement(ctx, then_branch);
            if let Some(else_branch) = else_branch {
                check_statement(ctx, else_branch);
            }
        }
        Statement::While { cond, body, .. } => {
            check_expression(ctx, cond);
            check_statement(ctx, body);
        }
        Statement::Print { expr, .. } => {
            check_expression(ctx, expr);
        }
        Statement::Compound(statements) => check_statement_list(ctx, statements),
        Statement::Method(designator) => {
            check_method_designator(ctx, designator);
        }
    }
}

pub fn check_method_designator(ctx: &CheckCtx, designator: &mut MethodDesignator) -> Option<Type> {
    let owner_type = check_variable_access(ctx, &mut designator.owner, false)?;
    let Some(class_name) = owner_type.class_name() else {
        ctx.handler.error(
            designator.span,
            format!(
                "cannot access a member of a non-class type \"{}\"",
                type_to_string(&owner_type)
            ),
        );
        return None;
    };

    let Some(method) = class_method(class_name.as_str(), designator.call.name.text(), ctx.symbol_table)
    else {
        ctx.handler.error(
            designator.call.name.span,
            format!(
                "class \"{}\" has no method \"{}\"",
                class_name,
                designator.call.name.text()
            ),
        );
        return None;
    };

    let formal = method.params.clone();
    let ret_type = method.ret_type.clone();
    let name_span = designator.call.name.span;
    let method_name = designator.call.name.text().to_string();

    let max_len = formal.len().max(designator.call.args.len());
    for i in 0..max_len {
        match (designator.call.args.get_mut(i), formal.get(i)) {
            (None, Some(_)) => {
                ctx.handler.error(
                    name_span,
                    format!("too few arguments to function \"{}\"", method_name),
                );
                break;
            }
            (Some(_), None) => {
                ctx.handler.error(
                    name_span,
                    format!("too many arguments to function \"{}\"", method_name),
                );
                break;
            }
            (Some(actual_expr), Some(formal_decl)) => {
                if let Some(actual_ty) = check_expression(ctx, actual_expr) {
                    if !assignment_valid(&formal_decl.ty, &actual_ty, ctx.symbol_table) {
                        ctx.handler.error(
                            name_span,
                            format!(
                                "function \"{}\": parameter index {}: cannot convert \"{}\" to \"{}\"",
                                method_name,
                                i,
                                type_to_string(&actual_ty),
                                type_to_string(&formal_decl.ty)
                            ),
                        );
                    }
                }
            }
            (None, None) => unreachable!(),
        }
    }

    ret_type
}

pub fn check_object_instantiation(ctx: &CheckCtx, inst: &mut ObjectInstantiation) -> Option<Type> {
    if !ctx.symbol_table.contains(inst.class_name.text()) {
        ctx.handler.error(
            inst.class_name.span,
            format!("class \"{}\" not declared", inst.class_name.text()),
        );
        return None;
    }

    for arg in &mut inst.args {
        check_expression(ctx, arg);
    }

    Some(Type::class(inst.class_name.text(), inst.class_name.span))
}
