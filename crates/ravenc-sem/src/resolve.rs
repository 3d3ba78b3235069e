//! Symbol resolution (C2): walking a class's ancestor chain to find an
//! inherited field or method.

use std::collections::HashSet;

use ravenc_ast::{MethodSymbols, SymbolTable, Type};

/// The declared type of `field_name` as seen from `class_name`,
/// searching up the ancestor chain. `None` if no class in the chain
/// declares it.
pub fn class_variable_type(class_name: &str, field_name: &str, table: &SymbolTable) -> Option<Type> {
    let mut visited = HashSet::new();
    let mut current = class_name.to_string();
    loop {
        let symbols = table.get(&current)?;
        if let Some(var) = symbols.variables.get(field_name) {
            return Some(var.ty.clone());
        }
        if !visited.insert(current.to_lowercase()) {
            return None;
        }
        current = symbols.parent?.text().to_string();
    }
}

/// The declared signature of `method_name` as seen from `class_name`,
/// searching up the ancestor chain.
pub fn class_method<'a>(
    class_name: &str,
    method_name: &str,
    table: &'a SymbolTable,
) -> Option<&'a MethodSymbols> {
    let mut visited = HashSet::new();
    let mut current = class_name.to_string();
    loop {
        let symbols = table.get(&current)?;
        if let Some(method) = symbols.methods.get(method_name) {
            return Some(method);
        }
        if !visited.insert(current.to_lowercase()) {
            return None;
        }
        current = symbols.parent?.text().to_string();
    }
}
