//! `Choice.Alternative(args)` patterns.

use ori_ir::{ExprId, Name, PatternId, Span};

use crate::{PatternArena, PatternError, TuplePatternId};

/// Matches one alternative of a choice type and destructures its arguments.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct AlternativePattern {
    choice_type: ExprId,
    alternative_name: Name,
    arguments: TuplePatternId,
}

impl AlternativePattern {
    pub(crate) const fn new(
        choice_type: ExprId,
        alternative_name: Name,
        arguments: TuplePatternId,
    ) -> Self {
        AlternativePattern {
            choice_type,
            alternative_name,
            arguments,
        }
    }

    /// Build an alternative pattern from the callee of `callee(args)`.
    ///
    /// The callee must be a simple member access `Choice.Alternative`; the
    /// object becomes the choice type and the member the alternative name.
    /// Anything else is a user error, reported as [`PatternError`] with
    /// nothing allocated for the alternative itself.
    #[tracing::instrument(level = "debug", skip_all, fields(alternative = ?alternative))]
    pub fn create(
        arena: &mut PatternArena,
        span: Span,
        alternative: ExprId,
        arguments: TuplePatternId,
    ) -> Result<PatternId, PatternError> {
        let Some((choice_type, alternative_name)) = arena.exprs().simple_member_access(alternative)
        else {
            let found = arena.exprs().kind(alternative).description();
            tracing::debug!(found, "alternative pattern rejected");
            return Err(PatternError::ExpectedAlternativeName {
                span: arena.exprs().span(alternative),
                expr: alternative,
                found,
            });
        };
        Ok(arena.alloc_alternative(span, choice_type, alternative_name, arguments))
    }

    /// The choice type expression, e.g. `Color` in `Color.Red(x)`.
    #[inline]
    pub fn choice_type(&self) -> ExprId {
        self.choice_type
    }

    #[inline]
    pub fn alternative_name(&self) -> Name {
        self.alternative_name
    }

    #[inline]
    pub fn arguments(&self) -> TuplePatternId {
        self.arguments
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
