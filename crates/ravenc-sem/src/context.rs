//! Per-check context threaded explicitly through the pass.
//!
//! The original checker kept "which class/method am I currently inside"
//! in two mutable fields on the checker object (`m_class_id`,
//! `m_function_id`), set once per method and read by every helper
//! reached from it. Threading it as a borrowed struct instead means the
//! borrow checker enforces that nothing can see a stale class/method
//! once the driver moves on to the next one.

use ravenc_ast::{ClassSymbols, MethodSymbols, SymbolTable};
use ravenc_util::{Handler, Symbol};

/// Everything a helper needs to know about where in the tree the driver
/// currently is.
pub struct CheckCtx<'a> {
    pub symbol_table: &'a SymbolTable,
    pub handler: &'a Handler,
    pub class: &'a ClassSymbols,
    pub method: &'a MethodSymbols,
}

impl<'a> CheckCtx<'a> {
    pub fn new(
        symbol_table: &'a SymbolTable,
        handler: &'a Handler,
        class: &'a ClassSymbols,
        method: &'a MethodSymbols,
    ) -> Self {
        Self {
            symbol_table,
            handler,
            class,
            method,
        }
    }

    pub fn class_name(&self) -> Symbol {
        self.class.name.name
    }
}
