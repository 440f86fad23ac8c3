//! Arguments of one instantiation, keyed by generic binding identity.
//!
//! Lookups canonicalize through `original`, so a clone of a parameter
//! finds the argument supplied for its declaration.

use ori_ir::{PatternId, ValueId};
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::visit::visit_nested_patterns_mut;
use crate::{GenericBindingId, PatternArena};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BindingMap {
    /// Keyed by canonical declaration.
    arguments: FxHashMap<GenericBindingId, ValueId>,
}

impl BindingMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind each parameter to the argument at its index.
    ///
    /// # Panics
    /// Panics on an arity mismatch, or if a parameter has no index, its
    /// index is out of range, or another parameter already took it.
    #[track_caller]
    pub fn from_arguments(
        arena: &PatternArena,
        parameters: &[GenericBindingId],
        arguments: &[ValueId],
    ) -> Self {
        if parameters.len() != arguments.len() {
            panic!(
                "instantiation expects {} arguments, found {}",
                parameters.len(),
                arguments.len()
            );
        }
        let mut map = Self::new();
        let mut bound = vec![false; arguments.len()];
        for &parameter in parameters {
            let index = arena.generic_binding(parameter).index();
            let Some(&argument) = arguments.get(index) else {
                panic!(
                    "generic binding index {index} out of range for {} arguments",
                    arguments.len()
                );
            };
            if std::mem::replace(&mut bound[index], true) {
                panic!("generic binding index {index} bound twice");
            }
            map.insert(arena, parameter, argument);
        }
        debug!(arguments = map.len(), "built binding map");
        map
    }

    /// Returns the argument previously bound to the same declaration.
    pub fn insert(
        &mut self,
        arena: &PatternArena,
        binding: GenericBindingId,
        argument: ValueId,
    ) -> Option<ValueId> {
        self.arguments.insert(arena.original(binding), argument)
    }

    pub fn get(&self, arena: &PatternArena, binding: GenericBindingId) -> Option<ValueId> {
        self.arguments.get(&arena.original(binding)).copied()
    }

    pub fn len(&self) -> usize {
        self.arguments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arguments.is_empty()
    }
}

/// Set the template value of every template binding under `root` that has
/// an argument in `map`. Returns how many were set.
///
/// # Panics
/// Panics if one of those bindings already has a template value.
pub fn apply_template_values(arena: &mut PatternArena, root: PatternId, map: &BindingMap) -> usize {
    let mut applied = 0;
    visit_nested_patterns_mut(arena, root, |id, arena| {
        let Some(binding) = arena.generic_binding_id(id) else {
            return true;
        };
        if !arena.generic_binding(binding).is_template() {
            return true;
        }
        if let Some(argument) = map.get(arena, binding) {
            arena.generic_binding_mut(binding).set_template_value(argument);
            applied += 1;
        }
        true
    });
    debug!(?root, applied, "applied template values");
    applied
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
mod tests;
