//! Preorder traversal of nested patterns.
//!
//! Children of each kind, in order:
//!
//! | Kind        | Children                   |
//! |-------------|----------------------------|
//! | `var P`     | `P`                        |
//! | `x: T`      | the type pattern `T`       |
//! | `addr B`    | the binding pattern `B`    |
//! | tuple       | each field, left to right  |
//! | alternative | the arguments tuple        |
//!
//! `auto`, expression patterns and generic bindings are leaves: expressions
//! are not patterns, so a generic binding's bound is not visited.

use ori_ir::PatternId;

use crate::stack::ensure_sufficient_stack;
use crate::{Pattern, PatternArena, PatternKind};

/// Visit `root` and every pattern nested in it, parents before children.
///
/// The visitor returns `false` to stop; nothing is visited after that.
/// Returns `true` if the traversal ran to completion.
pub fn visit_nested_patterns<F>(arena: &PatternArena, root: PatternId, mut visitor: F) -> bool
where
    F: FnMut(PatternId, &Pattern) -> bool,
{
    walk(arena, root, &mut visitor)
}

fn walk<F>(arena: &PatternArena, id: PatternId, visitor: &mut F) -> bool
where
    F: FnMut(PatternId, &Pattern) -> bool,
{
    ensure_sufficient_stack(|| {
        let node = arena.get(id);
        if !visitor(id, node) {
            return false;
        }
        match &node.kind {
            PatternKind::Auto | PatternKind::GenericBinding(_) | PatternKind::Expression(_) => true,
            PatternKind::Var(inner) => walk(arena, *inner, visitor),
            PatternKind::Binding(binding) => walk(arena, binding.type_pattern(), visitor),
            PatternKind::Addr(binding) => walk(arena, binding.pattern(), visitor),
            PatternKind::Tuple(fields) => arena
                .pattern_list(*fields)
                .iter()
                .all(|&field| walk(arena, field, visitor)),
            PatternKind::Alternative(alternative) => {
                walk(arena, alternative.arguments().pattern(), visitor)
            }
        }
    })
}

/// Mutable counterpart of [`visit_nested_patterns`].
///
/// The set of nodes is fixed before the first call, so the visitor may
/// decorate nodes (or allocate new ones, which are not visited) freely.
pub fn visit_nested_patterns_mut<F>(arena: &mut PatternArena, root: PatternId, mut visitor: F) -> bool
where
    F: FnMut(PatternId, &mut PatternArena) -> bool,
{
    nested_patterns(arena, root)
        .into_iter()
        .all(|id| visitor(id, arena))
}

/// Every pattern nested in `root`, in preorder.
pub fn nested_patterns(arena: &PatternArena, root: PatternId) -> Vec<PatternId> {
    let mut order = Vec::new();
    visit_nested_patterns(arena, root, |id, _| {
        order.push(id);
        true
    });
    order
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
mod tests;
