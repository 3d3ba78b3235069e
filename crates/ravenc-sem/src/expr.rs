//! Expression typer (C3): the four left-linear precedence levels
//! (comparison, additive, multiplicative, negatable) down to a primary
//! expression.
//!
//! Every level caches the type it computes on the node's `ty` slot and
//! returns it by value so the caller one level up can combine it with
//! its sibling without re-walking the tree.

use ravenc_ast::{
    AdditiveExpression, Expression, MultiplicativeExpression, NegatableExpression, NegatableKind,
    PrimaryExpression, PrimaryKind, Type,
};

use crate::context::CheckCtx;
use crate::stmt::{check_method_designator, check_object_instantiation};
use crate::types::{assignment_valid, combined_type, type_to_string};
use crate::var_access::check_variable_access;

pub fn check_expression(ctx: &CheckCtx, expr: &mut Expression) -> Option<Type> {
    let ty = if let Some(right) = &mut expr.right {
        let left_ty = check_additive_expression(ctx, &mut expr.left);
        let right_ty = check_additive_expression(ctx, right);
        let (Some(left_ty), Some(right_ty)) = (left_ty, right_ty) else {
            return None;
        };
        if !assignment_valid(&left_ty, &right_ty, ctx.symbol_table)
            && !assignment_valid(&right_ty, &left_ty, ctx.symbol_table)
        {
            let error_span = expr.op.map(|(_, span)| span).unwrap_or(expr.span);
            ctx.handler.error(
                error_span,
                format!(
                    "{} and {} are not comparable.",
                    type_to_string(&left_ty),
                    type_to_string(&right_ty)
                ),
            );
            return None;
        }
        Some(Type::Boolean)
    } else {
        check_additive_expression(ctx, &mut expr.left)
    };
    expr.ty = ty.clone();
    ty
}

pub fn check_additive_expression(ctx: &CheckCtx, expr: &mut AdditiveExpression) -> Option<Type> {
    let right_ty = check_multiplicative_expression(ctx, &mut expr.right);
    let ty = match &mut expr.left {
        None => right_ty,
        Some(left) => {
            let left_ty = check_additive_expression(ctx, left)?;
            combined_type(&left_ty, &right_ty?)
        }
    };
    expr.ty = ty.clone();
    ty
}

pub fn check_multiplicative_expression(
    ctx: &CheckCtx,
    expr: &mut MultiplicativeExpression,
) -> Option<Type> {
    let right_ty = check_negatable_expression(ctx, &mut expr.right);
    let ty = match &mut expr.left {
        None => right_ty,
        Some(left) => {
            let left_ty = check_multiplicative_expression(ctx, left)?;
            combined_type(&left_ty, &right_ty?)
        }
    };
    expr.ty = ty.clone();
    ty
}

pub fn check_negatable_expression(ctx: &CheckCtx, expr: &mut NegatableExpression) -> Option<Type> {
    let ty = match &mut expr.kind {
        NegatableKind::Signed(_, inner) => check_negatable_expression(ctx, inner),
        NegatableKind::Primary(primary) => check_primary_expression(ctx, primary),
    };
    expr.ty = ty.clone();
    ty
}

pub fn check_primary_expression(ctx: &CheckCtx, expr: &mut PrimaryExpression) -> Option<Type> {
    let ty = match &mut expr.kind {
        PrimaryKind::Variable(variable) => check_variable_access(ctx, variable, false),
        PrimaryKind::IntegerLit(_) => Some(Type::Integer),
        PrimaryKind::RealLit(_) => Some(Type::Real),
        PrimaryKind::BooleanLit(_) => Some(Type::Boolean),
        PrimaryKind::StringLit(s) => {
            if s.chars().count() == 1 {
                Some(Type::Char)
            } else {
                let len = s.chars().count() as i64;
                Some(Type::array(0, len - 1, Type::Char, expr.span))
            }
        }
        PrimaryKind::Method(designator) => check_method_designator(ctx, designator),
        PrimaryKind::ObjectInstantiation(inst) => check_object_instantiation(ctx, inst),
        PrimaryKind::Parens(inner) => check_expression(ctx, inner),
        PrimaryKind::Not(inner) => check_primary_expression(ctx, inner),
    };
    expr.ty = ty.clone();
    ty
}
