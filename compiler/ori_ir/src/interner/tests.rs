use super::*;

#[test]
fn test_intern_is_idempotent() {
    let interner = StringInterner::new();
    let a = interner.intern("Color");
    let b = interner.intern("Color");
    assert_eq!(a, b);
    assert_eq!(interner.lookup(a), "Color");
}

#[test]
fn test_distinct_strings_get_distinct_names() {
    let interner = StringInterner::new();
    let red = interner.intern("Red");
    let green = interner.intern("Green");
    assert_ne!(red, green);
    assert_eq!(interner.lookup(green), "Green");
}

#[test]
fn test_reserved_names() {
    let interner = StringInterner::new();
    assert_eq!(interner.intern(""), Name::EMPTY);
    assert_eq!(interner.intern("_"), Name::ANONYMOUS);
    assert_eq!(interner.lookup(Name::ANONYMOUS), "_");
    assert_eq!(interner.len(), 2);
    assert!(!interner.is_empty());
}

#[test]
fn test_intern_error_display() {
    let err = InternError::Overflow { count: 7 };
    assert!(err.to_string().starts_with("interner exceeded capacity: 7 strings"));
}
