//! Generic bindings: `T:! type` and `template T:! type`.
//!
//! A generic binding carries, besides its decoration, the checker facts
//! that give a compile-time parameter its identity:
//!
//! - `index`: position in the per-instantiation argument vector
//! - `template_value`: the argument a template parameter was instantiated with
//! - `symbolic_identity`: the opaque value standing for the parameter while
//!   the generic body is checked
//! - `impl_binding`: the witness synthesized for the parameter's bound
//! - `original`: the canonical declaration this binding was cloned from
//!
//! Every slot is write-once.

use ori_ir::{ExprId, ImplBindingId, Name, Named, ValueId};

use crate::write_once::WriteOnce;
use crate::{CloneFields, ExpressionCategory, GenericBindingId};

/// Whether a compile-time parameter is checked generically or per instantiation.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BindingKind {
    /// `T:! type`: the body is checked once against the symbolic parameter.
    Checked,
    /// `template T:! type`: the body is re-checked for each argument.
    Template,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct GenericBinding {
    name: Name,
    type_expr: ExprId,
    binding_kind: BindingKind,
    index: WriteOnce<usize>,
    template_value: WriteOnce<ValueId>,
    symbolic_identity: WriteOnce<ValueId>,
    impl_binding: WriteOnce<ImplBindingId>,
    original: WriteOnce<GenericBindingId>,
    named_as_type_via_dot_self: bool,
}

impl GenericBinding {
    pub(crate) fn new(name: Name, type_expr: ExprId, binding_kind: BindingKind) -> Self {
        GenericBinding {
            name,
            type_expr,
            binding_kind,
            index: WriteOnce::default(),
            template_value: WriteOnce::default(),
            symbolic_identity: WriteOnce::default(),
            impl_binding: WriteOnce::default(),
            original: WriteOnce::default(),
            named_as_type_via_dot_self: false,
        }
    }

    /// The bound after `:!`, e.g. `type` or `Interface`.
    #[inline]
    pub fn type_expr(&self) -> ExprId {
        self.type_expr
    }

    #[inline]
    pub fn binding_kind(&self) -> BindingKind {
        self.binding_kind
    }

    #[inline]
    pub fn is_template(&self) -> bool {
        self.binding_kind == BindingKind::Template
    }

    /// Generic bindings always bind values.
    #[inline]
    pub fn expression_category(&self) -> ExpressionCategory {
        ExpressionCategory::Value
    }

    #[inline]
    pub fn has_index(&self) -> bool {
        self.index.is_set()
    }

    /// # Panics
    /// Panics if no index has been assigned.
    #[track_caller]
    pub fn index(&self) -> usize {
        self.index.read("generic binding index")
    }

    /// # Panics
    /// Panics if an index was already assigned.
    #[track_caller]
    pub fn set_index(&mut self, index: usize) {
        self.index.set(index, "generic binding index");
    }

    #[track_caller]
    fn assert_template(&self, operation: &str) {
        if !self.is_template() {
            panic!("{operation} on a checked generic binding; only template bindings have template values");
        }
    }

    /// # Panics
    /// Panics if this is a checked binding.
    #[track_caller]
    pub fn has_template_value(&self) -> bool {
        self.assert_template("has_template_value");
        self.template_value.is_set()
    }

    /// # Panics
    /// Panics if this is a checked binding or no template value is set.
    #[track_caller]
    pub fn template_value(&self) -> ValueId {
        self.assert_template("template_value");
        self.template_value.read("template value")
    }

    /// # Panics
    /// Panics if this is a checked binding or a template value is already set.
    #[track_caller]
    pub fn set_template_value(&mut self, value: ValueId) {
        self.assert_template("set_template_value");
        self.template_value.set(value, "template value");
    }

    /// The template value, if one is known. Checked bindings have none.
    #[inline]
    pub fn constant_value(&self) -> Option<ValueId> {
        self.template_value.get()
    }

    #[inline]
    pub fn symbolic_identity(&self) -> Option<ValueId> {
        self.symbolic_identity.get()
    }

    /// # Panics
    /// Panics if a symbolic identity is already set.
    #[track_caller]
    pub fn set_symbolic_identity(&mut self, value: ValueId) {
        self.symbolic_identity.set(value, "symbolic identity");
    }

    #[inline]
    pub fn impl_binding(&self) -> Option<ImplBindingId> {
        self.impl_binding.get()
    }

    /// # Panics
    /// Panics if an impl binding is already set.
    #[track_caller]
    pub fn set_impl_binding(&mut self, binding: ImplBindingId) {
        self.impl_binding.set(binding, "impl binding");
    }

    /// Whether the binding's own bound names it as `.Self`.
    #[inline]
    pub fn named_as_type_via_dot_self(&self) -> bool {
        self.named_as_type_via_dot_self
    }

    /// # Panics
    /// Panics if the flag is already set.
    #[track_caller]
    pub fn set_named_as_type_via_dot_self(&mut self) {
        if self.named_as_type_via_dot_self {
            panic!("named-as-type-via-.Self flag set more than once");
        }
        self.named_as_type_via_dot_self = true;
    }

    /// The stored link to the canonical declaration; `None` means this
    /// binding is canonical. Use `PatternArena::original` to resolve.
    #[inline]
    pub(crate) fn original_link(&self) -> Option<GenericBindingId> {
        self.original.get()
    }

    /// Caller must pass a canonical binding.
    #[track_caller]
    pub(crate) fn link_original(&mut self, original: GenericBindingId) {
        self.original.set(original, "original generic binding");
    }

    /// A new binding sharing this one's name and kind, bound by `type_expr`
    /// and linked to `original`. Facts listed in `fields` are carried over.
    pub(crate) fn instantiate(
        &self,
        type_expr: ExprId,
        original: GenericBindingId,
        fields: CloneFields,
    ) -> GenericBinding {
        let mut clone = GenericBinding::new(self.name, type_expr, self.binding_kind);
        clone.original = WriteOnce::from(Some(original));
        if fields.contains(CloneFields::BINDING_INDEX) {
            clone.index = self.index;
        }
        if fields.contains(CloneFields::TEMPLATE_VALUE) {
            clone.template_value = self.template_value;
        }
        if fields.contains(CloneFields::SYMBOLIC_IDENTITY) {
            clone.symbolic_identity = self.symbolic_identity;
        }
        if fields.contains(CloneFields::IMPL_BINDING) {
            clone.impl_binding = self.impl_binding;
        }
        if fields.contains(CloneFields::DOT_SELF) {
            clone.named_as_type_via_dot_self = self.named_as_type_via_dot_self;
        }
        clone
    }
}

impl Named for GenericBinding {
    fn name(&self) -> Name {
        self.name
    }
}
