//! Variable-access typer (C4): bare identifiers, indexed access,
//! attribute designators, and `this`.
//!
//! The bare-identifier case performs the "is this a local or a field"
//! resolution and, when it's a field, rewrites the node in place into
//! an explicit `this.field` attribute designator — the checker never
//! sees a bare field identifier again after this runs once.

use ravenc_ast::{AttributeDesignator, Ident, IndexedVariable, VariableAccess, Type};
use ravenc_util::Span;

use crate::context::CheckCtx;
use crate::expr::check_expression;
use crate::fold::constant_integer;
use crate::resolve::class_variable_type;
use crate::types::type_to_string;

/// The leaf identifier of a variable access, for pointing a diagnostic
/// at the right place. `this` has no identifier of its own; callers
/// fall back to the span of the statement/expression they already had.
pub fn find_identifier(access: &VariableAccess) -> Option<Ident> {
    match access {
        VariableAccess::Identifier(id) => Some(*id),
        VariableAccess::Indexed(indexed) => find_identifier(&indexed.variable),
        VariableAccess::Attribute(attr) => Some(attr.field),
        VariableAccess::This(_) => None,
    }
}

pub fn check_variable_access(
    ctx: &CheckCtx,
    access: &mut VariableAccess,
    allow_function_return_value: bool,
) -> Option<Type> {
    match access {
        VariableAccess::Identifier(id) => check_identifier(ctx, *id, access, allow_function_return_value),
        VariableAccess::Indexed(indexed) => check_indexed_variable(ctx, indexed),
        VariableAccess::Attribute(attr) => check_attribute_designator(ctx, attr),
        VariableAccess::This(span) => Some(Type::class(ctx.class_name().as_str(), *span)),
    }
}

fn check_identifier(
    ctx: &CheckCtx,
    id: Ident,
    access: &mut VariableAccess,
    allow_function_return_value: bool,
) -> Option<Type> {
    let local = ctx
        .method
        .params
        .iter()
        .chain(ctx.method.locals.iter())
        .find(|decl| decl.name.name == id.name);

    if let Some(decl) = local {
        if !allow_function_return_value && ctx.method.name.name.eq_insensitive(id.name) {
            ctx.handler.error(
                id.span,
                format!(
                    "cannot read from \"{}\" because it is reserved for use as the function return value",
                    id.text()
                ),
            );
        }
        return Some(decl.ty.clone());
    }

    if let Some(ty) = class_variable_type(ctx.class_name().as_str(), id.text(), ctx.symbol_table) {
        *access = VariableAccess::Attribute(Box::new(AttributeDesignator {
            owner: VariableAccess::This(id.span),
            field: id,
            span: id.span,
        }));
        return Some(ty);
    }

    ctx.handler.error(
        id.span,
        format!("variable \"{}\" not declared", id.text()),
    );
    None
}

pub fn check_indexed_variable(ctx: &CheckCtx, indexed: &mut IndexedVariable) -> Option<Type> {
    let array_type = check_variable_access(ctx, &mut indexed.variable, false)?;
    if !matches!(array_type, Type::Array(_)) {
        let span = find_identifier(&indexed.variable)
            .map(|id| id.span)
            .unwrap_or(indexed.span);
        let name = find_identifier(&indexed.variable)
            .map(|id| id.text().to_string())
            .unwrap_or_else(|| "this".to_string());
        ctx.handler.error(
            span,
            format!("indexed variable \"{}\" is not an array", name),
        );
        return None;
    }

    let mut current = array_type;
    for index_expr in &mut indexed.indices {
        let index_type = match check_expression(ctx, index_expr) {
            Some(t) => t,
            None => continue,
        };

        if index_type != Type::Integer {
            let span = find_identifier(&indexed.variable)
                .map(|id| id.span)
                .unwrap_or(indexed.span);
            let name = find_identifier(&indexed.variable)
                .map(|id| id.text().to_string())
                .unwrap_or_else(|| "this".to_string());
            ctx.handler.error(
                span,
                format!("array index not an integer for variable \"{}\"", name),
            );
        } else if let Some((value, lit_span)) = constant_integer(index_expr) {
            if let Type::Array(arr) = &current {
                if !(value >= arr.min && value <= arr.max) {
                    ctx.handler.error(
                        lit_span,
                        format!(
                            "array index {} is out of the range [{}..{}]",
                            value, arr.min, arr.max
                        ),
                    );
                }
            }
        }

        current = match current {
            Type::Array(arr) => arr.element,
            other => {
                // more index expressions than array dimensions: nothing
                // further to descend into.
                return Some(other);
            }
        };
    }

    Some(current)
}

pub fn check_attribute_designator(ctx: &CheckCtx, attr: &mut AttributeDesignator) -> Option<Type> {
    let owner_type = check_variable_access(ctx, &mut attr.owner, false)?;
    let Some(class_name) = owner_type.class_name() else {
        ctx.handler.error(
            attr.span,
            format!(
                "cannot access a member of a non-class type \"{}\"",
                type_to_string(&owner_type)
            ),
        );
        return None;
    };

    match class_variable_type(class_name.as_str(), attr.field.text(), ctx.symbol_table) {
        Some(ty) => Some(ty),
        None => {
            ctx.handler.error(
                attr.field.span,
                format!(
                    "class \"{}\" has no attribute \"{}\"",
                    class_name,
                    attr.field.text()
                ),
            );
            None
        }
    }
}
