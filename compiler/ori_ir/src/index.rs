//! Index newtypes for the flat AST.
//!
//! Every node kind gets its own `u32` index space so an `ExprId` can never
//! be used where a `PatternId` is expected. Ranges (`start: u32, len: u16`)
//! address flattened child lists, 8 bytes instead of 24+ for a `Vec`.

/// Declares a `u32` index newtype with an `INVALID` sentinel.
macro_rules! index_newtype {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
        #[repr(transparent)]
        pub struct $name(u32);

        impl $name {
            /// Sentinel for "no node".
            pub const INVALID: $name = $name(u32::MAX);

            #[inline]
            pub const fn new(index: u32) -> Self {
                $name(index)
            }

            /// Index into the owning arena.
            #[inline]
            pub const fn index(self) -> usize {
                self.0 as usize
            }

            #[inline]
            pub const fn raw(self) -> u32 {
                self.0
            }

            #[inline]
            pub const fn is_valid(self) -> bool {
                self.0 != u32::MAX
            }
        }

        impl std::fmt::Debug for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                if self.is_valid() {
                    write!(f, "{}({})", stringify!($name), self.0)
                } else {
                    write!(f, "{}::INVALID", stringify!($name))
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::INVALID
            }
        }
    };
}

/// Declares a `(start, len)` range over a flattened list of indices.
macro_rules! index_range {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
        #[repr(C)]
        pub struct $name {
            pub start: u32,
            pub len: u16,
        }

        impl $name {
            pub const EMPTY: $name = $name { start: 0, len: 0 };

            #[inline]
            pub const fn new(start: u32, len: u16) -> Self {
                $name { start, len }
            }

            #[inline]
            pub const fn is_empty(&self) -> bool {
                self.len == 0
            }

            #[inline]
            pub const fn len(&self) -> usize {
                self.len as usize
            }

            /// Positions in the flattened list covered by this range.
            #[inline]
            pub fn indices(&self) -> std::ops::Range<usize> {
                let start = self.start as usize;
                start..start + self.len()
            }
        }

        impl std::fmt::Debug for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(
                    f,
                    "{}({}..{})",
                    stringify!($name),
                    self.start,
                    self.start + u32::from(self.len)
                )
            }
        }
    };
}

index_newtype!(
    /// Index into an [`ExprArena`](crate::ExprArena).
    ExprId
);

index_range!(
    /// Run of expression IDs (tuple elements, call arguments).
    ExprRange
);

index_newtype!(
    /// Index of a pattern node in its pattern arena.
    ///
    /// Lives here rather than next to the arena so that expressions can
    /// refer back to the binding a pattern declares.
    PatternId
);

index_range!(
    /// Run of pattern IDs (tuple fields).
    PatternRange
);

index_newtype!(
    /// Non-owning handle to a value in the checker's value universe.
    ///
    /// Static types, matched values, template values and symbolic
    /// identities are all values; the pattern model stores and returns
    /// these handles but never interprets them.
    ValueId
);

index_newtype!(
    /// Non-owning handle to an interface-witness binding synthesized for a
    /// generic parameter's bound.
    ImplBindingId
);

crate::static_assert_size!(ExprId, 4);
crate::static_assert_size!(PatternId, 4);
crate::static_assert_size!(PatternRange, 8);

#[cfg(test)]
mod tests;
