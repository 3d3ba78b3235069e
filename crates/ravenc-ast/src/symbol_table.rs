//! Declaration-level symbol table.
//!
//! A prior pass is assumed to have already built this table from the
//! declaration headers (class names, field types, method signatures)
//! before the semantic checker runs; the checker only ever
//! reads it. `build` is provided so tests and callers that don't have
//! such a pass handy can construct one directly from a [`Program`] —
//! it copies declaration shape only, never the statement bodies the
//! checker mutates in place.

use std::collections::HashMap;

use indexmap::IndexMap;

use crate::ast::{ClassDecl, Ident, MethodDecl, Program, Type, VariableDecl};

#[derive(Clone, Debug)]
pub struct VariableSymbol {
    pub name: Ident,
    pub ty: Type,
}

#[derive(Clone, Debug)]
pub struct MethodSymbols {
    pub name: Ident,
    pub params: Vec<VariableDecl>,
    pub ret_type: Option<Type>,
    pub locals: Vec<VariableDecl>,
}

#[derive(Clone, Debug)]
pub struct ClassSymbols {
    pub name: Ident,
    pub parent: Option<Ident>,
    /// Field declarations in source order: structural-equivalence
    /// comparisons walk arrays by declared field order.
    pub variables: IndexMap<String, VariableSymbol>,
    pub methods: HashMap<String, MethodSymbols>,
}

impl ClassSymbols {
    fn from_decl(decl: &ClassDecl) -> Self {
        let mut variables = IndexMap::new();
        for field in &decl.fields {
            variables.insert(
                field.name.text().to_string(),
                VariableSymbol {
                    name: field.name,
                    ty: field.ty.clone(),
                },
            );
        }

        let mut methods = HashMap::new();
        for method in &decl.methods {
            methods.insert(
                method.name.text().to_string(),
                MethodSymbols {
                    name: method.name,
                    params: method.params.clone(),
                    ret_type: method.ret_type.clone(),
                    locals: method.locals.clone(),
                },
            );
        }

        Self {
            name: decl.name,
            parent: decl.parent,
            variables,
            methods,
        }
    }
}

/// Class table keyed case-insensitively by lowercased class name, the
/// way every class-name lookup in the language is insensitive.
#[derive(Clone, Debug, Default)]
pub struct SymbolTable {
    classes: HashMap<String, ClassSymbols>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn build(program: &Program) -> Self {
        let mut table = Self::new();
        for class in &program.classes {
            table
                .classes
                .insert(class.name.text().to_lowercase(), ClassSymbols::from_decl(class));
        }
        table
    }

    pub fn get(&self, name: &str) -> Option<&ClassSymbols> {
        self.classes.get(&name.to_lowercase())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.classes.contains_key(&name.to_lowercase())
    }

    pub fn insert(&mut self, symbols: ClassSymbols) {
        let key = symbols.name.text().to_lowercase();
        self.classes.insert(key, symbols);
    }

    pub fn classes(&self) -> impl Iterator<Item = &ClassSymbols> {
        self.classes.values()
    }
}
