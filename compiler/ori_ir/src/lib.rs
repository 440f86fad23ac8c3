//! Ori IR - collaborator types for the pattern model
//!
//! This crate holds everything the pattern core consumes but does not own
//! the semantics of:
//! - Spans for source locations
//! - Names for interned identifiers
//! - The flat expression model (`Expr`, `ExprKind`, `ExprArena`)
//! - `ParenContents` produced by the parser for parenthesized lists
//! - Index spaces for patterns (`PatternId`, `PatternRange`)
//! - Opaque handles into the value universe (`ValueId`) and the
//!   interface-witness model (`ImplBindingId`)
//!
//! # Design Philosophy
//!
//! - **Intern Everything**: Strings → Name(u32)
//! - **Flatten Everything**: No Box<Expr>, use ExprId(u32) indices
//! - **Handles, not references**: values and witnesses live elsewhere; this
//!   crate only names them

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod index;
pub mod arena;
mod expr;
mod interner;
mod name;
mod paren;
mod span;
mod traits;

pub use arena::{ExprArena, ExprDisplay};
pub use expr::{Expr, ExprKind};
pub use index::{ExprId, ExprRange, ImplBindingId, PatternId, PatternRange, ValueId};
pub use interner::{InternError, StringInterner};
pub use name::Name;
pub use paren::ParenContents;
pub use span::Span;
pub use traits::{Named, Spanned};
