//! Expression categories.

use std::fmt;

/// What a successful match against a pattern yields.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ExpressionCategory {
    /// A value, copied or moved out of the scrutinee.
    Value,
    /// A reference that aliases mutable storage (`var`, `addr`).
    Reference,
    /// An expression that initializes storage in place.
    Initializing,
}

impl ExpressionCategory {
    #[inline]
    pub const fn is_reference(self) -> bool {
        matches!(self, Self::Reference)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Value => "value",
            Self::Reference => "reference",
            Self::Initializing => "initializing",
        }
    }
}

impl fmt::Display for ExpressionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
