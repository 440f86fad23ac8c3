use super::*;
use pretty_assertions::assert_eq;

fn malformed_at(start: u32) -> Diagnostic {
    Diagnostic::error(ErrorCode::E1008).with_label(Span::new(start, start + 1), "here")
}

fn codes(diagnostics: &[Diagnostic]) -> Vec<ErrorCode> {
    diagnostics.iter().map(|diagnostic| diagnostic.code).collect()
}

#[test]
fn test_emit_error_proves_errors() {
    let mut queue = DiagnosticQueue::new();
    assert!(queue.has_errors().is_none());
    let _guarantee = queue.emit_error(malformed_at(0));
    assert!(queue.has_errors().is_some());
}

#[test]
fn test_repeat_at_same_span_is_dropped() {
    let mut queue = DiagnosticQueue::new();
    assert!(queue.add(malformed_at(4)));
    assert!(!queue.add(malformed_at(4)));
    assert!(queue.add(malformed_at(9)));
    assert!(queue.add(malformed_at(4)));
    assert_eq!(queue.flush().len(), 3);
}

#[test]
fn test_repeats_kept_without_deduplication() {
    let mut queue = DiagnosticQueue::with_config(DiagnosticConfig {
        error_limit: 0,
        deduplicate: false,
    });
    for _ in 0..20 {
        assert!(queue.add(malformed_at(4)));
    }
    assert_eq!(queue.flush().len(), 20);
}

#[test]
fn test_limit_reports_too_many_errors_once() {
    let mut queue = DiagnosticQueue::with_config(DiagnosticConfig {
        error_limit: 2,
        deduplicate: false,
    });
    assert!(queue.add(malformed_at(0)));
    assert!(queue.add(malformed_at(1)));
    assert!(!queue.add(malformed_at(2)));
    assert!(!queue.add(malformed_at(3)));

    let diagnostics = queue.flush();
    assert_eq!(
        codes(&diagnostics),
        vec![ErrorCode::E1008, ErrorCode::E1008, ErrorCode::E9002]
    );
    let marker = &diagnostics[2];
    assert_eq!(marker.message, "stopped after 2 errors");
    assert_eq!(marker.span(), Some(Span::new(2, 3)));
}

#[test]
fn test_limit_marker_without_span() {
    let mut queue = DiagnosticQueue::with_config(DiagnosticConfig {
        error_limit: 1,
        deduplicate: true,
    });
    queue.add(malformed_at(0));
    queue.add(Diagnostic::error(ErrorCode::E1008));

    let diagnostics = queue.flush();
    assert_eq!(diagnostics.len(), 2);
    assert_eq!(diagnostics[1].code, ErrorCode::E9002);
    assert_eq!(diagnostics[1].span(), None);
}

#[test]
fn test_flush_reopens_queue() {
    let mut queue = DiagnosticQueue::with_config(DiagnosticConfig {
        error_limit: 1,
        deduplicate: true,
    });
    queue.add(malformed_at(0));
    queue.add(malformed_at(1));
    assert_eq!(queue.flush().len(), 2);

    assert!(queue.has_errors().is_none());
    assert!(queue.add(malformed_at(0)));
    assert!(!queue.add(malformed_at(1)));
    assert_eq!(codes(&queue.flush()), vec![ErrorCode::E1008, ErrorCode::E9002]);
}
