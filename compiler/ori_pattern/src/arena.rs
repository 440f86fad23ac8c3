//! Arena storage for pattern trees.
//!
//! Patterns are allocated bottom-up: children before the parent that refers
//! to them. Nodes are never freed or restructured; after construction only
//! their write-once decorations change. Each node's [`Decoration`] lives in a
//! side table indexed by the same `PatternId`.
//!
//! The arena also owns the [`ExprArena`] holding every expression the
//! patterns refer to (type expressions, generic bounds, choice types).

use ori_ir::arena::{to_u16, to_u32};
use ori_ir::{ExprArena, ExprId, Name, PatternId, PatternRange, Span};
use tracing::trace;

use crate::{
    AlternativePattern, BindingKind, BindingPattern, BindingPatternId, Decoration,
    ExpressionCategory, GenericBinding, GenericBindingId, Pattern, PatternKind, PatternTag,
    TuplePatternId, ValueNode,
};

/// Contiguous storage for patterns, their decorations and their expressions.
#[derive(Clone, Debug, Default)]
pub struct PatternArena {
    /// All pattern nodes (indexed by `PatternId`).
    nodes: Vec<Pattern>,
    /// Decoration of each node, parallel to `nodes`.
    decorations: Vec<Decoration>,
    /// Flattened tuple field lists.
    pattern_lists: Vec<PatternId>,
    exprs: ExprArena,
}

impl PatternArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing expression arena, e.g. the parser's.
    pub fn with_exprs(exprs: ExprArena) -> Self {
        PatternArena {
            exprs,
            ..Self::default()
        }
    }

    #[inline]
    pub fn exprs(&self) -> &ExprArena {
        &self.exprs
    }

    #[inline]
    pub fn exprs_mut(&mut self) -> &mut ExprArena {
        &mut self.exprs
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub(crate) fn push(&mut self, kind: PatternKind, span: Span, decoration: Decoration) -> PatternId {
        let id = PatternId::new(to_u32(self.nodes.len(), "patterns"));
        trace!(?id, tag = %kind.tag(), "alloc pattern");
        self.nodes.push(Pattern::new(kind, span));
        self.decorations.push(decoration);
        id
    }

    fn alloc(&mut self, kind: PatternKind, span: Span) -> PatternId {
        self.push(kind, span, Decoration::default())
    }

    pub(crate) fn alloc_pattern_list(
        &mut self,
        patterns: impl IntoIterator<Item = PatternId>,
    ) -> PatternRange {
        let start = to_u32(self.pattern_lists.len(), "pattern list entries");
        self.pattern_lists.extend(patterns);
        let len = to_u16(self.pattern_lists.len() - start as usize, "tuple pattern");
        if len == 0 {
            return PatternRange::EMPTY;
        }
        PatternRange::new(start, len)
    }

    // Allocation

    /// `auto`
    pub fn alloc_auto(&mut self, span: Span) -> PatternId {
        self.alloc(PatternKind::Auto, span)
    }

    /// `var inner`
    pub fn alloc_var(&mut self, span: Span, inner: PatternId) -> PatternId {
        self.alloc(PatternKind::Var(inner), span)
    }

    /// `name: type_pattern`. Pass the category when the syntax fixes it.
    pub fn alloc_binding(
        &mut self,
        span: Span,
        name: Name,
        type_pattern: PatternId,
        expression_category: Option<ExpressionCategory>,
    ) -> BindingPatternId {
        let binding = BindingPattern::new(name, type_pattern, expression_category);
        BindingPatternId::new_unchecked(self.alloc(PatternKind::Binding(binding), span))
    }

    /// `addr binding`
    pub fn alloc_addr(&mut self, span: Span, binding: BindingPatternId) -> PatternId {
        self.alloc(PatternKind::Addr(binding), span)
    }

    pub fn alloc_tuple(
        &mut self,
        span: Span,
        fields: impl IntoIterator<Item = PatternId>,
    ) -> TuplePatternId {
        let fields = self.alloc_pattern_list(fields);
        TuplePatternId::new_unchecked(self.alloc(PatternKind::Tuple(fields), span))
    }

    /// `name:! type_expr`, or `template name:! type_expr`.
    pub fn alloc_generic_binding(
        &mut self,
        span: Span,
        name: Name,
        type_expr: ExprId,
        binding_kind: BindingKind,
    ) -> GenericBindingId {
        let binding = GenericBinding::new(name, type_expr, binding_kind);
        GenericBindingId::new_unchecked(self.alloc(PatternKind::GenericBinding(binding), span))
    }

    /// `choice_type.alternative_name(arguments)` from already-split parts.
    /// [`AlternativePattern::create`] splits a parsed callee instead.
    pub fn alloc_alternative(
        &mut self,
        span: Span,
        choice_type: ExprId,
        alternative_name: Name,
        arguments: TuplePatternId,
    ) -> PatternId {
        let alternative = AlternativePattern::new(choice_type, alternative_name, arguments);
        self.alloc(PatternKind::Alternative(alternative), span)
    }

    /// An expression used as a pattern; the span is the expression's.
    pub fn alloc_expression(&mut self, expr: ExprId) -> PatternId {
        let span = self.exprs.span(expr);
        self.alloc(PatternKind::Expression(expr), span)
    }

    // Access

    #[inline]
    #[track_caller]
    pub fn get(&self, id: PatternId) -> &Pattern {
        &self.nodes[id.index()]
    }

    #[inline]
    #[track_caller]
    pub fn kind(&self, id: PatternId) -> &PatternKind {
        &self.get(id).kind
    }

    #[inline]
    #[track_caller]
    pub fn span(&self, id: PatternId) -> Span {
        self.get(id).span
    }

    #[inline]
    #[track_caller]
    pub fn tag(&self, id: PatternId) -> PatternTag {
        self.kind(id).tag()
    }

    /// Whether `id` can be viewed as a `tag` node.
    #[inline]
    pub fn is(&self, id: PatternId, tag: PatternTag) -> bool {
        self.tag(id).inherits_from(tag)
    }

    /// Patterns in a flattened list.
    #[inline]
    pub fn pattern_list(&self, range: PatternRange) -> &[PatternId] {
        &self.pattern_lists[range.indices()]
    }

    #[inline]
    #[track_caller]
    pub fn decoration(&self, id: PatternId) -> &Decoration {
        &self.decorations[id.index()]
    }

    #[inline]
    #[track_caller]
    pub fn decoration_mut(&mut self, id: PatternId) -> &mut Decoration {
        &mut self.decorations[id.index()]
    }

    // Checked downcasts

    pub fn binding_id(&self, id: PatternId) -> Option<BindingPatternId> {
        matches!(self.kind(id), PatternKind::Binding(_))
            .then_some(BindingPatternId::new_unchecked(id))
    }

    pub fn tuple_id(&self, id: PatternId) -> Option<TuplePatternId> {
        matches!(self.kind(id), PatternKind::Tuple(_)).then_some(TuplePatternId::new_unchecked(id))
    }

    pub fn generic_binding_id(&self, id: PatternId) -> Option<GenericBindingId> {
        matches!(self.kind(id), PatternKind::GenericBinding(_))
            .then_some(GenericBindingId::new_unchecked(id))
    }

    pub fn as_binding(&self, id: PatternId) -> Option<&BindingPattern> {
        match self.kind(id) {
            PatternKind::Binding(binding) => Some(binding),
            _ => None,
        }
    }

    /// Fields of a tuple pattern.
    pub fn as_tuple(&self, id: PatternId) -> Option<&[PatternId]> {
        match self.kind(id) {
            PatternKind::Tuple(fields) => Some(self.pattern_list(*fields)),
            _ => None,
        }
    }

    pub fn as_generic_binding(&self, id: PatternId) -> Option<&GenericBinding> {
        match self.kind(id) {
            PatternKind::GenericBinding(binding) => Some(binding),
            _ => None,
        }
    }

    pub fn as_alternative(&self, id: PatternId) -> Option<&AlternativePattern> {
        match self.kind(id) {
            PatternKind::Alternative(alternative) => Some(alternative),
            _ => None,
        }
    }

    pub fn value_node(&self, id: PatternId) -> Option<ValueNode<'_>> {
        match self.kind(id) {
            PatternKind::Binding(binding) => Some(ValueNode::Binding(binding)),
            PatternKind::GenericBinding(generic) => Some(ValueNode::Generic(generic)),
            _ => None,
        }
    }

    // Typed access

    #[track_caller]
    pub fn binding(&self, id: BindingPatternId) -> &BindingPattern {
        match self.kind(id.pattern()) {
            PatternKind::Binding(binding) => binding,
            other => panic!("{id:?} names a {}, not a binding pattern", other.tag()),
        }
    }

    #[track_caller]
    pub fn binding_mut(&mut self, id: BindingPatternId) -> &mut BindingPattern {
        match &mut self.nodes[id.pattern().index()].kind {
            PatternKind::Binding(binding) => binding,
            other => panic!("{id:?} names a {}, not a binding pattern", other.tag()),
        }
    }

    #[track_caller]
    pub fn tuple_fields(&self, id: TuplePatternId) -> &[PatternId] {
        match self.kind(id.pattern()) {
            PatternKind::Tuple(fields) => self.pattern_list(*fields),
            other => panic!("{id:?} names a {}, not a tuple pattern", other.tag()),
        }
    }

    #[track_caller]
    pub fn generic_binding(&self, id: GenericBindingId) -> &GenericBinding {
        match self.kind(id.pattern()) {
            PatternKind::GenericBinding(binding) => binding,
            other => panic!("{id:?} names a {}, not a generic binding", other.tag()),
        }
    }

    #[track_caller]
    pub fn generic_binding_mut(&mut self, id: GenericBindingId) -> &mut GenericBinding {
        match &mut self.nodes[id.pattern().index()].kind {
            PatternKind::GenericBinding(binding) => binding,
            other => panic!("{id:?} names a {}, not a generic binding", other.tag()),
        }
    }

    // Classification

    /// What matching `id` yields, where the node kind determines it.
    ///
    /// `var` and `addr` yield references, generic bindings values, and a
    /// binding pattern whatever category it was given. Other kinds have no
    /// intrinsic category.
    pub fn expression_category(&self, id: PatternId) -> Option<ExpressionCategory> {
        match self.kind(id) {
            PatternKind::Var(_) | PatternKind::Addr(_) => Some(ExpressionCategory::Reference),
            PatternKind::Binding(binding) => binding.try_expression_category(),
            PatternKind::GenericBinding(generic) => Some(generic.expression_category()),
            PatternKind::Auto
            | PatternKind::Tuple(_)
            | PatternKind::Alternative(_)
            | PatternKind::Expression(_) => None,
        }
    }

    // Generic binding identity

    /// The canonical declaration `id` stands for, found by following
    /// original links until a binding without one. `id` itself when it was
    /// never cloned.
    pub fn original(&self, id: GenericBindingId) -> GenericBindingId {
        let mut current = id;
        while let Some(next) = self.generic_binding(current).original_link() {
            // A binding linked to itself ends the chain.
            if next == current {
                break;
            }
            current = next;
        }
        current
    }

    /// Record that `id` is an instance of `original`.
    ///
    /// `original` is resolved to its canonical declaration first. Clones
    /// taken from `id` before this call still reach the new canonical
    /// declaration through `id`.
    ///
    /// # Panics
    /// Panics if `id` already has an original.
    #[track_caller]
    pub fn set_original(&mut self, id: GenericBindingId, original: GenericBindingId) {
        let canonical = self.original(original);
        trace!(?id, ?canonical, "link generic binding to original");
        self.generic_binding_mut(id).link_original(canonical);
    }

    /// Whether two generic bindings denote the same declaration.
    pub fn same_generic_binding(&self, a: GenericBindingId, b: GenericBindingId) -> bool {
        self.original(a) == self.original(b)
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
