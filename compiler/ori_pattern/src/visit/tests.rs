use super::*;
use ori_ir::{ExprKind, Name, Span, StringInterner, ValueId};
use pretty_assertions::assert_eq;

use crate::{BindingKind, PatternTag};

fn span() -> Span {
    Span::new(0, 1)
}

/// `(var x: auto, Choice.Alt(T:! type, 3))`
struct Tree {
    arena: PatternArena,
    root: PatternId,
    order: Vec<PatternId>,
}

fn tree() -> Tree {
    let interner = StringInterner::new();
    let mut arena = PatternArena::new();

    let auto = arena.alloc_auto(span());
    let x = arena.alloc_binding(span(), interner.intern("x"), auto, None);
    let var = arena.alloc_var(span(), x.pattern());

    let ty = arena.exprs_mut().alloc(ExprKind::TypeType, span());
    let t = arena.alloc_generic_binding(span(), interner.intern("T"), ty, BindingKind::Checked);
    let three = arena.exprs_mut().alloc(ExprKind::Int(3), span());
    let lit = arena.alloc_expression(three);
    let args = arena.alloc_tuple(span(), [t.pattern(), lit]);

    let choice = arena.exprs_mut().alloc(ExprKind::Ident(interner.intern("Choice")), span());
    let callee = arena.exprs_mut().alloc(
        ExprKind::MemberAccess {
            object: choice,
            member: interner.intern("Alt"),
        },
        span(),
    );
    let alt = crate::AlternativePattern::create(&mut arena, span(), callee, args).unwrap();
    let root = arena.alloc_tuple(span(), [var, alt]).pattern();

    let order = vec![root, var, x.pattern(), auto, alt, args.pattern(), t.pattern(), lit];
    Tree { arena, root, order }
}

#[test]
fn test_preorder() {
    let Tree { arena, root, order } = tree();
    let mut seen = Vec::new();
    let completed = visit_nested_patterns(&arena, root, |id, _| {
        seen.push(id);
        true
    });
    assert!(completed);
    assert_eq!(seen, order);
    assert_eq!(nested_patterns(&arena, root), order);
}

#[test]
fn test_visitor_sees_node() {
    let Tree { arena, root, .. } = tree();
    let mut tags = Vec::new();
    visit_nested_patterns(&arena, root, |_, node| {
        tags.push(node.tag());
        true
    });
    assert_eq!(
        tags,
        vec![
            PatternTag::Tuple,
            PatternTag::Var,
            PatternTag::Binding,
            PatternTag::Auto,
            PatternTag::Alternative,
            PatternTag::Tuple,
            PatternTag::GenericBinding,
            PatternTag::Expression,
        ]
    );
}

#[test]
fn test_abort_stops_everywhere() {
    let Tree { arena, root, order } = tree();
    // Stop at the binding `x`, deep inside the first field.
    let stop_at = order[2];
    let mut seen = Vec::new();
    let completed = visit_nested_patterns(&arena, root, |id, _| {
        seen.push(id);
        id != stop_at
    });
    assert!(!completed);
    assert_eq!(seen, order[..3].to_vec());
}

#[test]
fn test_abort_at_root() {
    let Tree { arena, root, .. } = tree();
    let mut calls = 0;
    assert!(!visit_nested_patterns(&arena, root, |_, _| {
        calls += 1;
        false
    }));
    assert_eq!(calls, 1);
}

#[test]
fn test_leaf_visits_once() {
    let mut arena = PatternArena::new();
    let auto = arena.alloc_auto(span());
    assert_eq!(nested_patterns(&arena, auto), vec![auto]);
}

#[test]
fn test_generic_bound_not_visited() {
    let mut arena = PatternArena::new();
    let inner = arena.alloc_auto(span());
    // A bound referring back to a pattern is still an expression.
    let bound = arena.exprs_mut().alloc(
        ExprKind::BindingRef {
            pattern: inner,
            name: Name::ANONYMOUS,
        },
        span(),
    );
    let generic = arena.alloc_generic_binding(span(), Name::ANONYMOUS, bound, BindingKind::Checked);
    assert_eq!(nested_patterns(&arena, generic.pattern()), vec![generic.pattern()]);
}

#[test]
fn test_mut_visitor_decorates() {
    let Tree { mut arena, root, order } = tree();
    let completed = visit_nested_patterns_mut(&mut arena, root, |id, arena| {
        arena.decoration_mut(id).set_static_type(ValueId::new(id.raw()));
        true
    });
    assert!(completed);
    for id in order {
        assert_eq!(arena.decoration(id).static_type(), ValueId::new(id.raw()));
    }
}

#[test]
fn test_mut_visitor_abort() {
    let Tree { mut arena, root, order } = tree();
    let mut visited = 0;
    let completed = visit_nested_patterns_mut(&mut arena, root, |_, _| {
        visited += 1;
        visited < 4
    });
    assert!(!completed);
    assert_eq!(visited, 4);
    assert!(order.len() > 4);
}

#[test]
fn test_deep_nesting_does_not_overflow() {
    let mut arena = PatternArena::new();
    let mut id = arena.alloc_auto(span());
    for _ in 0..50_000 {
        id = arena.alloc_var(span(), id);
    }
    assert_eq!(nested_patterns(&arena, id).len(), 50_001);
}
