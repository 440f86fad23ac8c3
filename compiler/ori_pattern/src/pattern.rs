//! Pattern nodes and their type decorations.
//!
//! A pattern's structure is fixed at construction. What the checker learns
//! about it afterwards (its static type, the value it matches) is written
//! once into a [`Decoration`] stored alongside the node.

use ori_ir::{ExprId, PatternId, PatternRange, Span, Spanned, ValueId};

use crate::write_once::WriteOnce;
use crate::{AlternativePattern, BindingPattern, BindingPatternId, GenericBinding, PatternTag};

/// A pattern node in the arena.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Pattern {
    pub kind: PatternKind,
    pub span: Span,
}

impl Pattern {
    #[inline]
    pub const fn new(kind: PatternKind, span: Span) -> Self {
        Pattern { kind, span }
    }

    #[inline]
    pub fn tag(&self) -> PatternTag {
        self.kind.tag()
    }
}

impl Spanned for Pattern {
    fn span(&self) -> Span {
        self.span
    }
}

/// Pattern variants.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum PatternKind {
    /// `auto`: type to be deduced.
    Auto,
    /// `var P`: bindings in `P` refer to mutable storage.
    Var(PatternId),
    /// `name: T`, where `T` is the type pattern.
    Binding(BindingPattern),
    /// `addr self: T`: binds the address of the receiver.
    Addr(BindingPatternId),
    /// `(a, b)` or `(a,)`.
    Tuple(PatternRange),
    /// `T:! type` or `template T:! type`.
    GenericBinding(GenericBinding),
    /// `Choice.Alt(args)`.
    Alternative(AlternativePattern),
    /// Any expression used as a pattern; matches values equal to it.
    Expression(ExprId),
}

impl PatternKind {
    pub fn tag(&self) -> PatternTag {
        match self {
            PatternKind::Auto => PatternTag::Auto,
            PatternKind::Var(_) => PatternTag::Var,
            PatternKind::Binding(_) => PatternTag::Binding,
            PatternKind::Addr(_) => PatternTag::Addr,
            PatternKind::Tuple(_) => PatternTag::Tuple,
            PatternKind::GenericBinding(_) => PatternTag::GenericBinding,
            PatternKind::Alternative(_) => PatternTag::Alternative,
            PatternKind::Expression(_) => PatternTag::Expression,
        }
    }
}

/// Checker-supplied facts common to every pattern.
///
/// Both slots are write-once. A pattern is type-checked once both are set.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Decoration {
    static_type: WriteOnce<ValueId>,
    value: WriteOnce<ValueId>,
}

impl Decoration {
    #[inline]
    pub fn has_static_type(&self) -> bool {
        self.static_type.is_set()
    }

    /// # Panics
    /// Panics if the static type has not been set.
    #[track_caller]
    pub fn static_type(&self) -> ValueId {
        self.static_type.read("static type")
    }

    /// # Panics
    /// Panics if the static type was already set.
    #[track_caller]
    pub fn set_static_type(&mut self, ty: ValueId) {
        self.static_type.set(ty, "static type");
    }

    #[inline]
    pub fn has_value(&self) -> bool {
        self.value.is_set()
    }

    /// # Panics
    /// Panics if the value has not been set.
    #[track_caller]
    pub fn value(&self) -> ValueId {
        self.value.read("pattern value")
    }

    /// # Panics
    /// Panics if the value was already set.
    #[track_caller]
    pub fn set_value(&mut self, value: ValueId) {
        self.value.set(value, "pattern value");
    }

    #[inline]
    pub fn is_type_checked(&self) -> bool {
        self.has_static_type() && self.has_value()
    }
}

#[cfg(test)]
mod tests;
