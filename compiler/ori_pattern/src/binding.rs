//! `name: T` binding patterns.

use ori_ir::{Name, Named, PatternId, ValueId};

use crate::write_once::WriteOnce;
use crate::ExpressionCategory;

/// Introduces a name bound to the matched value.
///
/// `type_pattern` is any pattern (`auto`, an expression, ...) describing the
/// bound value's type. The expression category is given at construction when
/// the parser knows it (`addr self`) and otherwise set once by the checker.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct BindingPattern {
    name: Name,
    type_pattern: PatternId,
    expression_category: WriteOnce<ExpressionCategory>,
    /// The category was fixed by the syntax rather than by the checker.
    category_from_syntax: bool,
}

impl BindingPattern {
    pub(crate) fn new(
        name: Name,
        type_pattern: PatternId,
        expression_category: Option<ExpressionCategory>,
    ) -> Self {
        BindingPattern {
            name,
            type_pattern,
            category_from_syntax: expression_category.is_some(),
            expression_category: WriteOnce::from(expression_category),
        }
    }

    /// A copy bound by `type_pattern`. A category fixed by the syntax is
    /// always kept; one set by the checker only if `keep_category`.
    pub(crate) fn instantiate(&self, type_pattern: PatternId, keep_category: bool) -> Self {
        let expression_category = if self.category_from_syntax || keep_category {
            self.expression_category
        } else {
            WriteOnce::default()
        };
        BindingPattern {
            name: self.name,
            type_pattern,
            expression_category,
            category_from_syntax: self.category_from_syntax,
        }
    }

    #[inline]
    pub fn type_pattern(&self) -> PatternId {
        self.type_pattern
    }

    /// `_: T` binds nothing.
    #[inline]
    pub fn is_anonymous(&self) -> bool {
        self.name.is_anonymous()
    }

    #[inline]
    pub fn has_expression_category(&self) -> bool {
        self.expression_category.is_set()
    }

    /// # Panics
    /// Panics if neither the parser nor the checker supplied a category.
    #[track_caller]
    pub fn expression_category(&self) -> ExpressionCategory {
        self.expression_category.read("expression category")
    }

    pub(crate) fn try_expression_category(&self) -> Option<ExpressionCategory> {
        self.expression_category.get()
    }

    /// # Panics
    /// Panics if the category was already set.
    #[track_caller]
    pub fn set_expression_category(&mut self, category: ExpressionCategory) {
        self.expression_category.set(category, "expression category");
    }

    /// Runtime bindings never have a compile-time constant value.
    #[inline]
    pub fn constant_value(&self) -> Option<ValueId> {
        None
    }

    /// Runtime bindings never carry a symbolic identity.
    #[inline]
    pub fn symbolic_identity(&self) -> Option<ValueId> {
        None
    }
}

impl Named for BindingPattern {
    fn name(&self) -> Name {
        self.name
    }
}
