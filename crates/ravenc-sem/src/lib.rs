//! ravenc-sem - the semantic analysis pass.
//!
//! Walks a parsed `Program` against its (externally built) symbol
//! table: resolves names, infers and caches expression types, rewrites
//! bare field identifiers into explicit `this.field` accesses, and
//! validates the handful of structural invariants (a parameterless
//! main-class constructor, well-formed array bounds, declared class
//! references) the grammar alone can't enforce.
//!
//! Like the checker this pass's design is grounded in, it never returns
//! a `Result`: every failure is streamed to a [`Handler`] as it's
//! found, and [`check`] reports overall success as a single boolean.

pub mod context;
pub mod driver;
pub mod expr;
pub mod fold;
pub mod resolve;
pub mod stmt;
pub mod types;
pub mod var_access;

#[cfg(test)]
mod edge_cases;
#[cfg(test)]
mod tests;

pub use types::{assignment_valid, combined_type, is_ancestor, structurally_equivalent, type_to_string};

use ravenc_ast::{Program, SymbolTable};
use ravenc_util::Handler;

/// Runs the semantic pass over `program`, using `symbol_table` (built
/// ahead of time from the same declarations) to resolve names, and
/// streaming diagnostics to `handler`. Returns whether the program is
/// well-typed.
#[tracing::instrument(skip_all, fields(main_class = %program.main_class.text()))]
pub fn check(program: &mut Program, symbol_table: &SymbolTable, handler: &Handler) -> bool {
    tracing::debug!("starting semantic check");
    let ok = driver::run(program, symbol_table, handler);
    if ok {
        tracing::info!("semantic check passed");
    } else {
        tracing::warn!(errors = handler.error_count(), "semantic check failed");
    }
    ok
}
