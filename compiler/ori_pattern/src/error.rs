//! Recoverable pattern construction errors.
//!
//! Contract violations (reading an unset decoration, writing one twice)
//! panic; only malformed user syntax surfaces as a `PatternError`.

use std::fmt;

use ori_diagnostic::{Diagnostic, ErrorCode};
use ori_ir::{ExprId, Span};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PatternError {
    /// The callee of an alternative pattern is not `Choice.Alternative`.
    ExpectedAlternativeName {
        /// Span of the offending callee expression.
        span: Span,
        expr: ExprId,
        /// Description of what was found instead.
        found: &'static str,
    },
}

impl PatternError {
    pub fn span(&self) -> Span {
        match self {
            PatternError::ExpectedAlternativeName { span, .. } => *span,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            PatternError::ExpectedAlternativeName { .. } => ErrorCode::E1008,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            PatternError::ExpectedAlternativeName { span, found, .. } => Diagnostic::error(self.code())
                .with_message(self.to_string())
                .with_label(*span, format!("expected `Choice.Alternative`, found {found}"))
                .with_help("name the alternative through its choice type, as in `Color.Red(x)`"),
        }
    }
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternError::ExpectedAlternativeName { found, .. } => write!(
                f,
                "alternative pattern must name an alternative of a choice type, found {found}"
            ),
        }
    }
}

impl std::error::Error for PatternError {}
