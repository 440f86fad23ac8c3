//! Pattern kind tags.

use std::fmt;

/// The concrete kind of a pattern node, without its payload.
///
/// The set is closed: every pattern is exactly one of these.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum PatternTag {
    Auto,
    Var,
    Binding,
    Addr,
    Tuple,
    GenericBinding,
    Alternative,
    Expression,
}

impl PatternTag {
    pub const ALL: [PatternTag; 8] = [
        Self::Auto,
        Self::Var,
        Self::Binding,
        Self::Addr,
        Self::Tuple,
        Self::GenericBinding,
        Self::Alternative,
        Self::Expression,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Auto => "auto pattern",
            Self::Var => "var pattern",
            Self::Binding => "binding pattern",
            Self::Addr => "addr pattern",
            Self::Tuple => "tuple pattern",
            Self::GenericBinding => "generic binding",
            Self::Alternative => "alternative pattern",
            Self::Expression => "expression pattern",
        }
    }

    /// Whether a node of this kind can be used where `ancestor` is asked for.
    ///
    /// Every tag is currently a leaf, so this is reflexive only.
    #[inline]
    pub fn inherits_from(self, ancestor: PatternTag) -> bool {
        self == ancestor
    }

    /// Kinds that stand for a named value (see [`ValueNode`](crate::ValueNode)).
    #[inline]
    pub const fn is_value_node(self) -> bool {
        matches!(self, Self::Binding | Self::GenericBinding)
    }
}

impl fmt::Display for PatternTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
