//! Constant folding (C7): recognizing an expression that is nothing but
//! a (possibly sign-prefixed) integer literal, for compile-time array
//! index bounds checking.
//!
//! Deliberately narrow: only the exact shape `<sign>* integer-literal`
//! with no surrounding comparison or left-recursive addition/
//! multiplication folds. Anything else — `1+1`, a parenthesized
//! literal, a variable — is not a compile-time constant here, even
//! though a fuller constant-folding pass could evaluate it.

use ravenc_ast::{Expression, NegatableExpression, NegatableKind, PrimaryKind};
use ravenc_util::Span;

/// The literal value and span of `expr` if it is exactly a sign-
/// prefixed integer literal, `None` otherwise. The accumulated sign is
/// intentionally discarded: the face value of the literal is what's
/// returned, matching the source this was distilled from.
pub fn constant_integer(expr: &Expression) -> Option<(i64, Span)> {
    if expr.right.is_some() {
        return None;
    }
    if expr.left.left.is_some() {
        return None;
    }
    if expr.left.right.left.is_some() {
        return None;
    }

    let mut negatable: &NegatableExpression = &expr.left.right.right;
    loop {
        match &negatable.kind {
            NegatableKind::Signed(_, inner) => negatable = inner,
            NegatableKind::Primary(primary) => {
                return match primary.kind {
                    PrimaryKind::IntegerLit(value) => Some((value, primary.span)),
                    _ => None,
                };
            }
        }
    }
}
