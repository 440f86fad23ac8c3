//! Typed pattern handles.
//!
//! A `BindingPatternId` is a `PatternId` that is known to name a binding
//! pattern, and so on. They are only minted by the arena's allocators and by
//! its checked downcasts, so holding one is proof of the node's kind.

use ori_ir::PatternId;

macro_rules! typed_pattern_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
        #[repr(transparent)]
        pub struct $name(PatternId);

        impl $name {
            /// Caller guarantees `id` names a node of the right kind.
            #[inline]
            pub(crate) const fn new_unchecked(id: PatternId) -> Self {
                $name(id)
            }

            /// The untyped pattern ID.
            #[inline]
            pub const fn pattern(self) -> PatternId {
                self.0
            }
        }

        impl From<$name> for PatternId {
            #[inline]
            fn from(id: $name) -> PatternId {
                id.0
            }
        }
    };
}

typed_pattern_id!(
    /// A pattern known to be a [`BindingPattern`](crate::BindingPattern).
    BindingPatternId
);

typed_pattern_id!(
    /// A pattern known to be a tuple pattern.
    TuplePatternId
);

typed_pattern_id!(
    /// A pattern known to be a [`GenericBinding`](crate::GenericBinding).
    GenericBindingId
);
