//! Uniform view over the pattern kinds that name a value.

use ori_ir::{Name, Named, ValueId};

use crate::{BindingPattern, ExpressionCategory, GenericBinding};

/// A binding pattern or a generic binding, seen through what they have in
/// common: a name, a category, and possibly a constant or symbolic value.
#[derive(Copy, Clone, Debug)]
pub enum ValueNode<'a> {
    Binding(&'a BindingPattern),
    Generic(&'a GenericBinding),
}

impl ValueNode<'_> {
    /// `None` for a binding whose category has not been set yet.
    pub fn expression_category(&self) -> Option<ExpressionCategory> {
        match self {
            ValueNode::Binding(binding) => binding.try_expression_category(),
            ValueNode::Generic(generic) => Some(generic.expression_category()),
        }
    }

    pub fn constant_value(&self) -> Option<ValueId> {
        match self {
            ValueNode::Binding(binding) => binding.constant_value(),
            ValueNode::Generic(generic) => generic.constant_value(),
        }
    }

    pub fn symbolic_identity(&self) -> Option<ValueId> {
        match self {
            ValueNode::Binding(binding) => binding.symbolic_identity(),
            ValueNode::Generic(generic) => generic.symbolic_identity(),
        }
    }
}

impl Named for ValueNode<'_> {
    fn name(&self) -> Name {
        match self {
            ValueNode::Binding(binding) => binding.name(),
            ValueNode::Generic(generic) => generic.name(),
        }
    }
}
