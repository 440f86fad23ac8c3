//! Turning parenthesized lists into patterns.
//!
//! `(x)` only groups and yields `x` itself. Every other shape, `()`,
//! `(x,)` and `(x, y)` included, is a tuple pattern.

use ori_ir::{ExprId, ParenContents, PatternId, Span};

use crate::{PatternArena, TuplePatternId};

/// The pattern written as `( contents )` spanning `span`.
pub fn pattern_from_paren_contents(
    arena: &mut PatternArena,
    span: Span,
    contents: &ParenContents<PatternId>,
) -> PatternId {
    match contents.grouped() {
        Some(&inner) => inner,
        None => tuple_pattern_from_paren_contents(arena, span, contents).pattern(),
    }
}

/// Always a tuple, even for `(x)`; used where the grammar demands one,
/// such as the arguments of an alternative pattern.
pub fn tuple_pattern_from_paren_contents(
    arena: &mut PatternArena,
    span: Span,
    contents: &ParenContents<PatternId>,
) -> TuplePatternId {
    arena.alloc_tuple(span, contents.elements.iter().copied())
}

/// Reinterpret parenthesized expressions as parenthesized patterns, one
/// expression pattern per element.
///
/// The parser uses this when what it took for an expression list turns out
/// to be a pattern, e.g. the arguments of `Choice.Alt(1, 2)`.
pub fn paren_expression_to_paren_pattern(
    arena: &mut PatternArena,
    contents: &ParenContents<ExprId>,
) -> ParenContents<PatternId> {
    contents.map(|&expr| arena.alloc_expression(expr))
}
