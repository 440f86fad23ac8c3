//! Ori Patterns - pattern AST and the type-decoration protocol.
//!
//! Patterns appear on the left of `let`, in parameter lists, in `match`
//! cases and in generic parameter lists. This crate provides:
//!
//! - **Pattern nodes** (`PatternKind`): `auto`, `var`, bindings, `addr`,
//!   tuples, generic bindings, alternatives and expression patterns, stored
//!   in a [`PatternArena`]
//! - **Decorations**: write-once slots the type checker fills in after
//!   construction (static type, value, and the identity of compile-time
//!   parameters)
//! - **Traversal** ([`visit_nested_patterns`]): preorder, with early exit
//! - **Cloning** ([`CloneContext`]): fresh copies for instantiation that
//!   keep pointing at their canonical generic declarations
//! - **Parenthesized lists** ([`pattern_from_paren_contents`]): grouping
//!   versus tuple construction
//!
//! # Identity of generic bindings
//!
//! Cloning a signature produces new `GenericBinding` nodes, but they stand
//! for the same parameter. [`PatternArena::original`] maps any clone back to
//! the canonical declaration, and [`BindingMap`] keys arguments by it.
//!
//! # Contracts
//!
//! Reading a decoration that was never written, or writing one twice, is a
//! bug in the caller and panics. The one recoverable failure is malformed
//! user syntax, reported as [`PatternError`].

mod alternative;
mod arena;
mod binding;
mod binding_map;
mod category;
mod clone;
mod display;
mod error;
mod generic;
mod ids;
mod paren;
mod pattern;
mod scope;
mod stack;
mod tag;
mod value_node;
mod visit;
mod write_once;

pub use alternative::AlternativePattern;
pub use arena::PatternArena;
pub use binding::BindingPattern;
pub use binding_map::{apply_template_values, BindingMap};
pub use category::ExpressionCategory;
pub use clone::{CloneContext, CloneFields};
pub use display::PatternDisplay;
pub use error::PatternError;
pub use generic::{BindingKind, GenericBinding};
pub use ids::{BindingPatternId, GenericBindingId, TuplePatternId};
pub use paren::{
    paren_expression_to_paren_pattern, pattern_from_paren_contents,
    tuple_pattern_from_paren_contents,
};
pub use pattern::{Decoration, Pattern, PatternKind};
pub use scope::GenericScope;
pub use tag::PatternTag;
pub use value_node::ValueNode;
pub use visit::{nested_patterns, visit_nested_patterns, visit_nested_patterns_mut};
