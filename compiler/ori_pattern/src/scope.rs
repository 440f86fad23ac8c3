//! Assigning generic binding indices.
//!
//! Compile-time parameters are numbered in declaration order across all
//! enclosing declarations: in `class C(T:! type) { fn F(U:! type) }`, `T` is
//! 0 and `U` is 1. The index addresses the argument vector of an
//! instantiation; see [`BindingMap`](crate::BindingMap).

use ori_ir::{Name, Named, PatternId};
use tracing::trace;

use crate::visit::nested_patterns;
use crate::{GenericBindingId, PatternArena};

/// Generic bindings in scope, with a frame per enclosing declaration.
#[derive(Clone, Debug, Default)]
pub struct GenericScope {
    bindings: Vec<GenericBindingId>,
    /// Length of `bindings` when each frame was entered.
    frames: Vec<usize>,
}

impl GenericScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a declaration's parameter list.
    pub fn enter(&mut self) {
        self.frames.push(self.bindings.len());
    }

    /// End the innermost declaration, dropping its bindings.
    ///
    /// # Panics
    /// Panics without a matching [`enter`](Self::enter).
    #[track_caller]
    pub fn exit(&mut self) {
        let Some(mark) = self.frames.pop() else {
            panic!("GenericScope::exit without a matching enter");
        };
        self.bindings.truncate(mark);
    }

    /// Number of open frames.
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Bindings in scope, outermost first.
    pub fn bindings(&self) -> &[GenericBindingId] {
        &self.bindings
    }

    /// Give `binding` the next index and bring it into scope.
    ///
    /// # Panics
    /// Panics if `binding` already has an index.
    #[track_caller]
    pub fn declare(&mut self, arena: &mut PatternArena, binding: GenericBindingId) -> usize {
        let index = self.bindings.len();
        arena.generic_binding_mut(binding).set_index(index);
        self.bindings.push(binding);
        trace!(?binding, index, "declare generic binding");
        index
    }

    /// Declare every generic binding nested in `root`, in preorder.
    /// Returns how many were declared.
    pub fn declare_nested(&mut self, arena: &mut PatternArena, root: PatternId) -> usize {
        let generics: Vec<GenericBindingId> = nested_patterns(arena, root)
            .into_iter()
            .filter_map(|id| arena.generic_binding_id(id))
            .collect();
        for &binding in &generics {
            self.declare(arena, binding);
        }
        generics.len()
    }

    /// The innermost binding in scope named `name`.
    pub fn lookup(&self, arena: &PatternArena, name: Name) -> Option<GenericBindingId> {
        self.bindings
            .iter()
            .rev()
            .copied()
            .find(|&binding| arena.generic_binding(binding).name() == name)
    }
}
