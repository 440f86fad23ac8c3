//! Cloning pattern trees for instantiation.
//!
//! A clone is a fresh, structurally identical subtree in the same arena.
//! Which checker facts travel with it is chosen per clone with
//! [`CloneFields`]; the link from a cloned generic binding back to its
//! canonical declaration is always kept, so identity survives any number of
//! clone generations.
//!
//! Expressions reachable from the tree are cloned too. A
//! [`ExprKind::BindingRef`] to a binding inside the cloned tree is rewritten
//! to the binding's clone; references to bindings outside it are kept.

use bitflags::bitflags;
use ori_ir::{Expr, ExprId, ExprKind, ExprRange, PatternId};
use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use crate::stack::ensure_sufficient_stack;
use crate::{
    AlternativePattern, BindingPatternId, Decoration, GenericBindingId, Pattern, PatternArena,
    PatternKind, TuplePatternId,
};

bitflags! {
    /// Checker facts to copy onto a clone.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct CloneFields: u8 {
        /// Every node's static type and value.
        const DECORATIONS = 1 << 0;
        /// Checker-assigned expression categories of binding patterns.
        const EXPRESSION_CATEGORY = 1 << 1;
        const BINDING_INDEX = 1 << 2;
        const TEMPLATE_VALUE = 1 << 3;
        const SYMBOLIC_IDENTITY = 1 << 4;
        const IMPL_BINDING = 1 << 5;
        /// The named-as-type-via-`.Self` flag.
        const DOT_SELF = 1 << 6;
    }
}

impl CloneFields {
    /// Structure only; the clone is checked from scratch.
    pub const STRUCTURAL: Self = Self::empty();

    /// A template body about to be re-checked with concrete arguments: it
    /// keeps its parameter positions and any argument values, but every
    /// type is recomputed.
    pub const TEMPLATE_INSTANTIATION: Self = Self::BINDING_INDEX
        .union(Self::TEMPLATE_VALUE)
        .union(Self::DOT_SELF);

    /// A checked signature rebound for a new caller: positions and witnesses
    /// carry over, symbolic identities are replaced.
    pub const CHECKED_REBINDING: Self = Self::BINDING_INDEX
        .union(Self::IMPL_BINDING)
        .union(Self::EXPRESSION_CATEGORY)
        .union(Self::DOT_SELF);

    /// An exact copy.
    pub const VERBATIM: Self = Self::all();
}

impl Default for CloneFields {
    fn default() -> Self {
        Self::STRUCTURAL
    }
}

/// State of one clone operation: the fields to copy and the mapping from
/// source patterns to their clones.
pub struct CloneContext<'a> {
    arena: &'a mut PatternArena,
    fields: CloneFields,
    patterns: FxHashMap<PatternId, PatternId>,
}

impl<'a> CloneContext<'a> {
    pub fn new(arena: &'a mut PatternArena, fields: CloneFields) -> Self {
        CloneContext {
            arena,
            fields,
            patterns: FxHashMap::default(),
        }
    }

    #[inline]
    pub fn fields(&self) -> CloneFields {
        self.fields
    }

    /// The clone of `source`, if it has been cloned in this context.
    pub fn remapped(&self, source: PatternId) -> Option<PatternId> {
        self.patterns.get(&source).copied()
    }

    /// Number of patterns cloned so far.
    pub fn cloned_count(&self) -> usize {
        self.patterns.len()
    }

    pub fn clone_pattern(&mut self, source: PatternId) -> PatternId {
        ensure_sufficient_stack(|| self.clone_node(source))
    }

    pub fn clone_binding(&mut self, source: BindingPatternId) -> BindingPatternId {
        BindingPatternId::new_unchecked(self.clone_pattern(source.pattern()))
    }

    pub fn clone_tuple(&mut self, source: TuplePatternId) -> TuplePatternId {
        TuplePatternId::new_unchecked(self.clone_pattern(source.pattern()))
    }

    pub fn clone_generic_binding(&mut self, source: GenericBindingId) -> GenericBindingId {
        GenericBindingId::new_unchecked(self.clone_pattern(source.pattern()))
    }

    fn clone_node(&mut self, source: PatternId) -> PatternId {
        let Pattern { kind, span } = self.arena.get(source).clone();
        let kind = match kind {
            PatternKind::Auto => PatternKind::Auto,
            PatternKind::Var(inner) => PatternKind::Var(self.clone_pattern(inner)),
            PatternKind::Binding(binding) => {
                let type_pattern = self.clone_pattern(binding.type_pattern());
                PatternKind::Binding(
                    binding.instantiate(type_pattern, self.fields.contains(CloneFields::EXPRESSION_CATEGORY)),
                )
            }
            PatternKind::Addr(binding) => PatternKind::Addr(self.clone_binding(binding)),
            PatternKind::Tuple(fields) => {
                let fields = self.arena.pattern_list(fields).to_vec();
                let cloned: Vec<PatternId> =
                    fields.into_iter().map(|field| self.clone_pattern(field)).collect();
                PatternKind::Tuple(self.arena.alloc_pattern_list(cloned))
            }
            PatternKind::GenericBinding(generic) => {
                let type_expr = self.clone_expr(generic.type_expr());
                let original = generic
                    .original_link()
                    .unwrap_or(GenericBindingId::new_unchecked(source));
                PatternKind::GenericBinding(generic.instantiate(type_expr, original, self.fields))
            }
            PatternKind::Alternative(alternative) => {
                let choice_type = self.clone_expr(alternative.choice_type());
                let arguments = self.clone_tuple(alternative.arguments());
                PatternKind::Alternative(AlternativePattern::new(
                    choice_type,
                    alternative.alternative_name(),
                    arguments,
                ))
            }
            PatternKind::Expression(expr) => PatternKind::Expression(self.clone_expr(expr)),
        };

        let decoration = if self.fields.contains(CloneFields::DECORATIONS) {
            *self.arena.decoration(source)
        } else {
            Decoration::default()
        };
        let clone = self.arena.push(kind, span, decoration);
        trace!(?source, ?clone, "cloned pattern");
        self.patterns.insert(source, clone);
        clone
    }

    pub fn clone_expr(&mut self, source: ExprId) -> ExprId {
        ensure_sufficient_stack(|| {
            let Expr { kind, span } = *self.arena.exprs().get_expr(source);
            let kind = match kind {
                ExprKind::MemberAccess { object, member } => ExprKind::MemberAccess {
                    object: self.clone_expr(object),
                    member,
                },
                ExprKind::Tuple(elements) => ExprKind::Tuple(self.clone_expr_list(elements)),
                ExprKind::Call { callee, args } => ExprKind::Call {
                    callee: self.clone_expr(callee),
                    args: self.clone_expr_list(args),
                },
                ExprKind::BindingRef { pattern, name } => ExprKind::BindingRef {
                    pattern: self.remapped(pattern).unwrap_or(pattern),
                    name,
                },
                leaf @ (ExprKind::Ident(_)
                | ExprKind::Int(_)
                | ExprKind::Bool(_)
                | ExprKind::TypeType
                | ExprKind::DotSelf) => leaf,
            };
            self.arena.exprs_mut().alloc(kind, span)
        })
    }

    fn clone_expr_list(&mut self, range: ExprRange) -> ExprRange {
        let exprs = self.arena.exprs().get_expr_list(range).to_vec();
        let cloned: Vec<ExprId> = exprs.into_iter().map(|expr| self.clone_expr(expr)).collect();
        self.arena.exprs_mut().alloc_expr_list(cloned)
    }
}

impl PatternArena {
    /// Clone the tree rooted at `source`, copying the facts in `fields`.
    ///
    /// Every generic binding in the clone has its original set to the
    /// canonical declaration of the binding it was cloned from.
    #[tracing::instrument(level = "debug", skip_all, fields(source = ?source, clone_fields = ?fields))]
    pub fn clone_pattern(&mut self, source: PatternId, fields: CloneFields) -> PatternId {
        let mut context = CloneContext::new(self, fields);
        let clone = context.clone_pattern(source);
        debug!(?clone, nodes = context.cloned_count(), "clone complete");
        clone
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
