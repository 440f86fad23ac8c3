use super::*;

#[test]
fn test_pattern_id_valid() {
    let id = PatternId::new(42);
    assert!(id.is_valid());
    assert_eq!(id.index(), 42);
    assert_eq!(id.raw(), 42);
}

#[test]
fn test_ids_default_to_invalid() {
    assert!(!ExprId::default().is_valid());
    assert!(!PatternId::default().is_valid());
    assert!(!ValueId::INVALID.is_valid());
}

#[test]
fn test_id_debug() {
    assert_eq!(format!("{:?}", ExprId::new(3)), "ExprId(3)");
    assert_eq!(format!("{:?}", PatternId::INVALID), "PatternId::INVALID");
}

#[test]
fn test_range_indices() {
    let range = PatternRange::new(10, 3);
    assert!(!range.is_empty());
    assert_eq!(range.len(), 3);
    assert_eq!(range.indices().collect::<Vec<_>>(), vec![10, 11, 12]);
    assert_eq!(format!("{range:?}"), "PatternRange(10..13)");
}

#[test]
fn test_range_empty() {
    assert!(ExprRange::EMPTY.is_empty());
    assert!(ExprRange::default().is_empty());
    assert_eq!(PatternRange::EMPTY.indices().count(), 0);
}

#[test]
fn test_handles_are_distinct_by_index() {
    use std::collections::HashSet;
    let mut set = HashSet::new();
    set.insert(ValueId::new(1));
    set.insert(ValueId::new(1)); // duplicate
    set.insert(ValueId::new(2));
    assert_eq!(set.len(), 2);
    assert!(ImplBindingId::new(0) < ImplBindingId::new(1));
}
