use super::*;
use ori_ir::{ExprKind, Span, StringInterner};
use pretty_assertions::assert_eq;

use crate::{BindingKind, CloneFields, GenericScope};

fn span() -> Span {
    Span::new(0, 1)
}

/// `(T:! type, template U:! type)`, indexed 0 and 1.
fn parameters(
    arena: &mut PatternArena,
    interner: &StringInterner,
) -> (PatternId, GenericBindingId, GenericBindingId) {
    let ty = arena.exprs_mut().alloc(ExprKind::TypeType, span());
    let t = arena.alloc_generic_binding(span(), interner.intern("T"), ty, BindingKind::Checked);
    let u = arena.alloc_generic_binding(span(), interner.intern("U"), ty, BindingKind::Template);
    let root = arena.alloc_tuple(span(), [t.pattern(), u.pattern()]).pattern();
    let mut scope = GenericScope::new();
    scope.enter();
    scope.declare_nested(arena, root);
    (root, t, u)
}

#[test]
fn test_from_arguments_by_index() {
    let interner = StringInterner::new();
    let mut arena = PatternArena::new();
    let (_, t, u) = parameters(&mut arena, &interner);

    let map = BindingMap::from_arguments(&arena, &[u, t], &[ValueId::new(10), ValueId::new(11)]);

    assert_eq!(map.len(), 2);
    assert_eq!(map.get(&arena, t), Some(ValueId::new(10)));
    assert_eq!(map.get(&arena, u), Some(ValueId::new(11)));
}

#[test]
fn test_lookup_through_clone() {
    let interner = StringInterner::new();
    let mut arena = PatternArena::new();
    let (root, t, _) = parameters(&mut arena, &interner);
    let mut map = BindingMap::new();
    assert!(map.is_empty());
    assert_eq!(map.insert(&arena, t, ValueId::new(5)), None);

    let clone = arena.clone_pattern(root, CloneFields::STRUCTURAL);
    let t_clone = arena
        .generic_binding_id(arena.as_tuple(clone).unwrap()[0])
        .unwrap();

    assert_eq!(map.get(&arena, t_clone), Some(ValueId::new(5)));
    // Inserting through the clone replaces the declaration's entry.
    assert_eq!(map.insert(&arena, t_clone, ValueId::new(6)), Some(ValueId::new(5)));
    assert_eq!(map.get(&arena, t), Some(ValueId::new(6)));
}

#[test]
#[should_panic(expected = "instantiation expects 2 arguments, found 1")]
fn test_from_arguments_arity() {
    let interner = StringInterner::new();
    let mut arena = PatternArena::new();
    let (_, t, u) = parameters(&mut arena, &interner);
    let _ = BindingMap::from_arguments(&arena, &[t, u], &[ValueId::new(1)]);
}

#[test]
#[should_panic(expected = "generic binding index 1 out of range for 1 arguments")]
fn test_from_arguments_index_out_of_range() {
    let interner = StringInterner::new();
    let mut arena = PatternArena::new();
    let (_, _, u) = parameters(&mut arena, &interner);
    let _ = BindingMap::from_arguments(&arena, &[u], &[ValueId::new(1)]);
}

#[test]
#[should_panic(expected = "generic binding index 0 bound twice")]
fn test_from_arguments_duplicate_index() {
    let interner = StringInterner::new();
    let mut arena = PatternArena::new();
    // Two independent parameter lists each number their first binding 0.
    let (_, first, _) = parameters(&mut arena, &interner);
    let (_, second, _) = parameters(&mut arena, &interner);
    let _ = BindingMap::from_arguments(&arena, &[first, second], &[ValueId::new(1), ValueId::new(2)]);
}

#[test]
fn test_apply_sets_only_template_bindings() {
    let interner = StringInterner::new();
    let mut arena = PatternArena::new();
    let (root, t, u) = parameters(&mut arena, &interner);
    let map = BindingMap::from_arguments(&arena, &[t, u], &[ValueId::new(1), ValueId::new(2)]);

    let instance = arena.clone_pattern(root, CloneFields::TEMPLATE_INSTANTIATION);
    assert_eq!(apply_template_values(&mut arena, instance, &map), 1);

    let fields = arena.as_tuple(instance).unwrap();
    let t_instance = arena.as_generic_binding(fields[0]).unwrap();
    let u_instance = arena.as_generic_binding(fields[1]).unwrap();
    assert_eq!(t_instance.constant_value(), None);
    assert_eq!(u_instance.template_value(), ValueId::new(2));
    // The declaration is untouched.
    assert!(!arena.generic_binding(u).has_template_value());
}

#[test]
fn test_apply_skips_unbound() {
    let interner = StringInterner::new();
    let mut arena = PatternArena::new();
    let (root, _, _) = parameters(&mut arena, &interner);
    assert_eq!(apply_template_values(&mut arena, root, &BindingMap::new()), 0);
}
