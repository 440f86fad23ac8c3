use super::*;

#[test]
fn test_fresh_decoration_is_unchecked() {
    let decoration = Decoration::default();
    assert!(!decoration.has_static_type());
    assert!(!decoration.has_value());
    assert!(!decoration.is_type_checked());
}

#[test]
fn test_static_type_alone_is_not_checked() {
    let mut decoration = Decoration::default();
    decoration.set_static_type(ValueId::new(7));
    assert!(decoration.has_static_type());
    assert_eq!(decoration.static_type(), ValueId::new(7));
    assert!(!decoration.has_value());
    assert!(!decoration.is_type_checked());
}

#[test]
fn test_value_alone_is_not_checked() {
    let mut decoration = Decoration::default();
    decoration.set_value(ValueId::new(3));
    assert!(decoration.has_value());
    assert_eq!(decoration.value(), ValueId::new(3));
    assert!(!decoration.is_type_checked());
}

#[test]
fn test_both_slots_mark_checked() {
    let mut decoration = Decoration::default();
    decoration.set_static_type(ValueId::new(7));
    decoration.set_value(ValueId::new(3));
    assert!(decoration.is_type_checked());
}

#[test]
#[should_panic(expected = "static type set more than once")]
fn test_static_type_write_once() {
    let mut decoration = Decoration::default();
    decoration.set_static_type(ValueId::new(1));
    decoration.set_static_type(ValueId::new(1));
}

#[test]
#[should_panic(expected = "static type read before it was set")]
fn test_static_type_read_unset() {
    let _ = Decoration::default().static_type();
}

#[test]
#[should_panic(expected = "pattern value set more than once")]
fn test_value_write_once() {
    let mut decoration = Decoration::default();
    decoration.set_value(ValueId::new(1));
    decoration.set_value(ValueId::new(2));
}

#[test]
#[should_panic(expected = "pattern value read before it was set")]
fn test_value_read_unset() {
    let _ = Decoration::default().value();
}

#[test]
fn test_kind_tags() {
    let span = Span::new(0, 4);
    assert_eq!(Pattern::new(PatternKind::Auto, span).tag(), PatternTag::Auto);
    assert_eq!(
        Pattern::new(PatternKind::Var(PatternId::new(0)), span).tag(),
        PatternTag::Var
    );
    assert_eq!(
        Pattern::new(PatternKind::Tuple(PatternRange::EMPTY), span).tag(),
        PatternTag::Tuple
    );
    assert_eq!(
        Pattern::new(PatternKind::Expression(ExprId::new(0)), span).tag(),
        PatternTag::Expression
    );
}
