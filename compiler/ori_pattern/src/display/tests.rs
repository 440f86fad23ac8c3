use super::*;
use ori_ir::{ExprKind, Span};
use pretty_assertions::assert_eq;

use crate::{AlternativePattern, BindingKind, ExpressionCategory};

fn span() -> Span {
    Span::new(0, 1)
}

fn ident(arena: &mut PatternArena, interner: &StringInterner, name: &str) -> ori_ir::ExprId {
    let name = interner.intern(name);
    arena.exprs_mut().alloc(ExprKind::Ident(name), span())
}

#[test]
fn test_leaves() {
    let interner = StringInterner::new();
    let mut arena = PatternArena::new();
    let auto = arena.alloc_auto(span());
    let expr = arena.exprs_mut().alloc(ExprKind::Int(42), span());
    let lit = arena.alloc_expression(expr);
    assert_eq!(arena.display(auto, &interner).to_string(), "auto");
    assert_eq!(arena.display(lit, &interner).to_string(), "42");
}

#[test]
fn test_binding_var_addr() {
    let interner = StringInterner::new();
    let mut arena = PatternArena::new();
    let i32_expr = ident(&mut arena, &interner, "i32");
    let ty = arena.alloc_expression(i32_expr);
    let x = arena.alloc_binding(span(), interner.intern("x"), ty, None);
    let var = arena.alloc_var(span(), x.pattern());

    let self_ty = ident(&mut arena, &interner, "Self");
    let self_ty = arena.alloc_expression(self_ty);
    let receiver = arena.alloc_binding(
        span(),
        interner.intern("self"),
        self_ty,
        Some(ExpressionCategory::Reference),
    );
    let addr = arena.alloc_addr(span(), receiver);

    assert_eq!(arena.display(x.pattern(), &interner).to_string(), "x: i32");
    assert_eq!(arena.display(var, &interner).to_string(), "var x: i32");
    assert_eq!(arena.display(addr, &interner).to_string(), "addr self: Self");
}

#[test]
fn test_tuples() {
    let interner = StringInterner::new();
    let mut arena = PatternArena::new();
    let a = arena.alloc_auto(span());
    let b = arena.alloc_auto(span());
    let pair = arena.alloc_tuple(span(), [a, b]);
    let single = arena.alloc_tuple(span(), [a]);
    let unit = arena.alloc_tuple(span(), []);
    assert_eq!(arena.display(pair.pattern(), &interner).to_string(), "(auto, auto)");
    assert_eq!(arena.display(single.pattern(), &interner).to_string(), "(auto,)");
    assert_eq!(arena.display(unit.pattern(), &interner).to_string(), "()");
}

#[test]
fn test_generic_bindings() {
    let interner = StringInterner::new();
    let mut arena = PatternArena::new();
    let ty = arena.exprs_mut().alloc(ExprKind::TypeType, span());
    let t = arena.alloc_generic_binding(span(), interner.intern("T"), ty, BindingKind::Checked);
    let u = arena.alloc_generic_binding(span(), interner.intern("U"), ty, BindingKind::Template);
    assert_eq!(arena.display(t.pattern(), &interner).to_string(), "T:! type");
    assert_eq!(arena.display(u.pattern(), &interner).to_string(), "template U:! type");
}

#[test]
fn test_display_id_uses_names() {
    let interner = StringInterner::new();
    let mut arena = PatternArena::new();
    let ty = arena.exprs_mut().alloc(ExprKind::TypeType, span());
    let t = arena.alloc_generic_binding(span(), interner.intern("T"), ty, BindingKind::Template);
    let auto = arena.alloc_auto(span());
    let x = arena.alloc_binding(span(), interner.intern("x"), auto, None);
    let pair = arena.alloc_tuple(span(), [t.pattern(), x.pattern()]);

    assert_eq!(arena.display_id(t.pattern(), &interner).to_string(), "T");
    assert_eq!(arena.display_id(x.pattern(), &interner).to_string(), "x");
    // Only the outermost node is abbreviated.
    assert_eq!(
        arena.display_id(pair.pattern(), &interner).to_string(),
        "(template T:! type, x: auto)"
    );
}

#[test]
fn test_alternative() {
    let interner = StringInterner::new();
    let mut arena = PatternArena::new();
    let choice = ident(&mut arena, &interner, "Shape");
    let callee = arena.exprs_mut().alloc(
        ExprKind::MemberAccess {
            object: choice,
            member: interner.intern("Rect"),
        },
        span(),
    );
    let auto = arena.alloc_auto(span());
    let w = arena.alloc_binding(span(), interner.intern("w"), auto, None);
    let args = arena.alloc_tuple(span(), [w.pattern()]);
    let id = AlternativePattern::create(&mut arena, span(), callee, args).unwrap();
    assert_eq!(arena.display(id, &interner).to_string(), "Shape.Rect(w: auto)");
}

#[test]
fn test_debug_includes_id() {
    let interner = StringInterner::new();
    let mut arena = PatternArena::new();
    let auto = arena.alloc_auto(span());
    assert_eq!(format!("{:?}", arena.display(auto, &interner)), "PatternId(0) `auto`");
}
