//! Flat expression model.
//!
//! Only the slice of the expression language that patterns own: the type
//! expression of a generic binding, the value of an expression pattern and
//! the choice type of an alternative pattern. Children are `ExprId`s into the
//! same [`ExprArena`](crate::ExprArena).

use crate::{ExprId, ExprRange, Name, PatternId, Span, Spanned};

/// Expression node.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    #[inline]
    pub const fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }
}

impl Spanned for Expr {
    fn span(&self) -> Span {
        self.span
    }
}

/// Expression variants.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ExprKind {
    /// Unresolved identifier: `Color`
    Ident(Name),
    /// Simple member access: `object.member`
    MemberAccess { object: ExprId, member: Name },
    /// Integer literal: `42`
    Int(i64),
    /// Boolean literal: `true`, `false`
    Bool(bool),
    /// The `type` keyword, the type of all types.
    TypeType,
    /// `.Self` inside a generic binding's own bound.
    DotSelf,
    /// Tuple literal: `(a, b)`
    Tuple(ExprRange),
    /// Call: `callee(a, b)`
    Call { callee: ExprId, args: ExprRange },
    /// Identifier resolved to the binding declared by a pattern.
    ///
    /// Cloning rewrites `pattern` when the binding is part of the cloned tree.
    BindingRef { pattern: PatternId, name: Name },
}

impl ExprKind {
    /// Short description for diagnostics ("found a call expression").
    pub const fn description(&self) -> &'static str {
        match self {
            ExprKind::Ident(_) => "an identifier",
            ExprKind::MemberAccess { .. } => "a member access",
            ExprKind::Int(_) => "an integer literal",
            ExprKind::Bool(_) => "a boolean literal",
            ExprKind::TypeType => "`type`",
            ExprKind::DotSelf => "`.Self`",
            ExprKind::Tuple(_) => "a tuple literal",
            ExprKind::Call { .. } => "a call expression",
            ExprKind::BindingRef { .. } => "a binding name",
        }
    }
}
