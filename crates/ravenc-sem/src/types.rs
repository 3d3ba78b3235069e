//! Type algebra (C1): equivalence, ancestry, assignment compatibility,
//! the combined type of an arithmetic operation, and display.
//!
//! `types_equal` is `ravenc_ast::Type`'s `PartialEq` impl directly — see
//! the doc comment there. Everything else here builds on top of it.

use std::collections::HashSet;

use ravenc_ast::{SymbolTable, Type};
use ravenc_util::Symbol;

/// Walks `child`'s own ancestor chain (including itself) looking for
/// `ancestor`. Both arguments must be `Type::Class`; callers are
/// expected to have already established that via a prior
/// `check_variable_access`/`check_type` call.
///
/// Guards against a cyclic class graph with a visited-name set rather
/// than the unbounded recursion the original relied on the parser
/// having already rejected.
pub fn is_ancestor(child: &Type, ancestor: &Type, table: &SymbolTable) -> bool {
    let (Some(child_name), Some(ancestor_name)) = (child.class_name(), ancestor.class_name())
    else {
        return false;
    };

    let mut visited = HashSet::new();
    let mut current = child_name;
    loop {
        if current == ancestor_name {
            return true;
        }
        if !visited.insert(current) {
            // cycle in the class graph; already failed to find a match
            return false;
        }
        let Some(symbols) = table.get(current.as_str()) else {
            return false;
        };
        match symbols.parent {
            Some(parent) => current = parent.name,
            None => return false,
        }
    }
}

/// Structural subtyping for two class types neither of which is an
/// ancestor of the other: same number of fields, each respectively
/// assignment-compatible, in declaration order.
///
/// Guards mutual recursion (two classes whose fields reference each
/// other) with a visited-pair set, replacing the original's one-shot
/// process-wide `m_recursive_error` flag.
pub fn structurally_equivalent(left: &Type, right: &Type, table: &SymbolTable) -> bool {
    structurally_equivalent_inner(left, right, table, &mut HashSet::new())
}

fn structurally_equivalent_inner(
    left: &Type,
    right: &Type,
    table: &SymbolTable,
    visited: &mut HashSet<(Symbol, Symbol)>,
) -> bool {
    let (Some(left_name), Some(right_name)) = (left.class_name(), right.class_name()) else {
        return false;
    };

    let pair = (left_name, right_name);
    if !visited.insert(pair) {
        // already comparing this pair further up the call stack
        return false;
    }

    let (Some(left_symbols), Some(right_symbols)) =
        (table.get(left_name.as_str()), table.get(right_name.as_str()))
    else {
        return false;
    };

    if left_symbols.variables.len() != right_symbols.variables.len() {
        return false;
    }

    for (left_field, right_field) in left_symbols
        .variables
        .values()
        .zip(right_symbols.variables.values())
    {
        if !assignment_valid_inner(&left_field.ty, &right_field.ty, table, visited) {
            return false;
        }
    }

    true
}

/// Is it valid to assign a value of type `right` to a variable of type
/// `left`? Mirrors the original's rule set exactly, including the
/// asymmetric class rule: `right` must be an ancestor of `left` (or the
/// two must be structurally equivalent), not the other way around.
pub fn assignment_valid(left: &Type, right: &Type, table: &SymbolTable) -> bool {
    assignment_valid_inner(left, right, table, &mut HashSet::new())
}

fn assignment_valid_inner(
    left: &Type,
    right: &Type,
    table: &SymbolTable,
    visited: &mut HashSet<(Symbol, Symbol)>,
) -> bool {
    match (left, right) {
        (Type::Array(l), Type::Array(r)) => {
            (l.max - l.min) == (r.max - r.min)
                && assignment_valid_inner(&l.element, &r.element, table, visited)
        }
        (Type::Class(_), Type::Class(_)) => {
            is_ancestor(left, right, table)
                || structurally_equivalent_inner(left, right, table, visited)
        }
        (Type::Integer, Type::Integer)
        | (Type::Real, Type::Real)
        | (Type::Char, Type::Char)
        | (Type::Boolean, Type::Boolean) => true,
        (Type::Integer, Type::Char) => true,
        (Type::Real, Type::Integer) | (Type::Real, Type::Char) => true,
        _ => false,
    }
}

/// What does adding/subtracting/or-ing (or multiplying/dividing/
/// and-ing) two operand types produce? `None` when the combination is
/// invalid — callers propagate that silently, same as the original.
pub fn combined_type(left: &Type, right: &Type) -> Option<Type> {
    match (left, right) {
        (Type::Char, Type::Char) => Some(Type::Char),
        (Type::Integer, Type::Integer) => Some(Type::Integer),
        (Type::Real, Type::Real) => Some(Type::Real),
        (Type::Integer, Type::Char) | (Type::Char, Type::Integer) => Some(Type::Integer),
        (Type::Real, Type::Integer) | (Type::Integer, Type::Real) => Some(Type::Real),
        (Type::Real, Type::Char) | (Type::Char, Type::Real) => Some(Type::Real),
        (Type::Boolean, Type::Boolean) => Some(Type::Boolean),
        _ => None,
    }
}

/// Renders a type the way diagnostics quote it: `"integer"`, `"Foo"`,
/// `"array[0..3] of char"`.
pub fn type_to_string(ty: &Type) -> String {
    match ty {
        Type::Integer => "integer".to_string(),
        Type::Real => "real".to_string(),
        Type::Char => "char".to_string(),
        Type::Boolean => "boolean".to_string(),
        Type::Class(c) => c.name.to_string(),
        Type::Array(arr) => format!(
            "array[{}..{}] of {}",
            arr.min,
            arr.max,
            type_to_string(&arr.element)
        ),
    }
}
