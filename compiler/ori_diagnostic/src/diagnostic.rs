//! A single reported error.

use std::fmt;

use ori_ir::Span;

use crate::ErrorCode;

/// Source location a diagnostic points at, with a short explanation.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Label {
    pub span: Span,
    pub message: String,
}

/// A user-facing error.
///
/// Rendered as
///
/// ```text
/// error[E1008]: message
///   --> 0..4: label
///   = help: how to fix it
/// ```
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[must_use]
pub struct Diagnostic {
    pub code: ErrorCode,
    pub message: String,
    pub label: Option<Label>,
    pub help: Option<String>,
}

impl Diagnostic {
    /// An error carrying the code's summary as its message.
    pub fn error(code: ErrorCode) -> Self {
        Diagnostic {
            code,
            message: code.summary().to_owned(),
            label: None,
            help: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Point at `span`. A later call replaces the location.
    pub fn with_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.label = Some(Label {
            span,
            message: message.into(),
        });
        self
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    pub fn span(&self) -> Option<Span> {
        self.label.as_ref().map(|label| label.span)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error[{}]: {}", self.code, self.message)?;
        if let Some(label) = &self.label {
            write!(f, "\n  --> {}: {}", label.span, label.message)?;
        }
        if let Some(help) = &self.help {
            write!(f, "\n  = help: {help}")?;
        }
        Ok(())
    }
}
