//! Collects errors in emission order, with a cap and repeat suppression.

use ori_ir::Span;

use crate::{Diagnostic, ErrorCode, ErrorGuaranteed};

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct DiagnosticConfig {
    /// Errors accepted before the queue closes; 0 means no cap.
    pub error_limit: usize,
    /// Drop an error repeating the code and span of the one before it.
    pub deduplicate: bool,
}

impl Default for DiagnosticConfig {
    fn default() -> Self {
        DiagnosticConfig {
            error_limit: 10,
            deduplicate: true,
        }
    }
}

/// Errors reported so far.
///
/// Once `error_limit` errors are accepted, the next error is replaced by a
/// single E9002 at its location and everything after that is dropped.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct DiagnosticQueue {
    diagnostics: Vec<Diagnostic>,
    /// Accepted errors; the E9002 marker is not counted.
    error_count: usize,
    last_error: Option<(ErrorCode, Option<Span>)>,
    limit_reported: bool,
    config: DiagnosticConfig,
}

impl DiagnosticQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: DiagnosticConfig) -> Self {
        DiagnosticQueue {
            config,
            ..Self::default()
        }
    }

    /// Whether `diagnostic` was kept.
    pub fn add(&mut self, diagnostic: Diagnostic) -> bool {
        if self.limit_reached() {
            if !self.limit_reported {
                self.limit_reported = true;
                let marker = too_many_errors(self.config.error_limit, diagnostic.span());
                self.diagnostics.push(marker);
            }
            return false;
        }

        let key = (diagnostic.code, diagnostic.span());
        if self.config.deduplicate && self.last_error == Some(key) {
            return false;
        }
        self.last_error = Some(key);
        self.error_count += 1;
        self.diagnostics.push(diagnostic);
        true
    }

    /// Report `diagnostic`. A dropped diagnostic still leaves an earlier
    /// error behind, so the proof holds either way.
    pub fn emit_error(&mut self, diagnostic: Diagnostic) -> ErrorGuaranteed {
        self.add(diagnostic);
        ErrorGuaranteed::new()
    }

    fn limit_reached(&self) -> bool {
        self.config.error_limit > 0 && self.error_count >= self.config.error_limit
    }

    pub fn has_errors(&self) -> Option<ErrorGuaranteed> {
        ErrorGuaranteed::from_error_count(self.error_count)
    }

    /// Take everything reported, in order, and reopen the queue.
    pub fn flush(&mut self) -> Vec<Diagnostic> {
        let config = self.config.clone();
        std::mem::replace(self, Self::with_config(config)).diagnostics
    }
}

#[cold]
fn too_many_errors(limit: usize, span: Option<Span>) -> Diagnostic {
    let diagnostic = Diagnostic::error(ErrorCode::E9002)
        .with_message(format!("stopped after {limit} errors"));
    match span {
        Some(span) => diagnostic.with_label(span, "further errors from here on are not reported"),
        None => diagnostic,
    }
}

#[cfg(test)]
mod tests;
