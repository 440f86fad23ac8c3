//! Source-like rendering of patterns for diagnostics and logs.

use std::fmt;

use ori_ir::{Named, PatternId, StringInterner};

use crate::{PatternArena, PatternKind};

/// Renders a pattern as it would be written.
///
/// Created by [`PatternArena::display`] or [`PatternArena::display_id`].
pub struct PatternDisplay<'a> {
    arena: &'a PatternArena,
    interner: &'a StringInterner,
    id: PatternId,
    /// Render value nodes by name only.
    name_only: bool,
}

impl PatternArena {
    /// `x: i32`, `(a, b)`, `template T:! type`, ...
    pub fn display<'a>(&'a self, id: PatternId, interner: &'a StringInterner) -> PatternDisplay<'a> {
        PatternDisplay {
            arena: self,
            interner,
            id,
            name_only: false,
        }
    }

    /// Like [`display`](Self::display), but bindings and generic bindings
    /// render as just their name.
    pub fn display_id<'a>(
        &'a self,
        id: PatternId,
        interner: &'a StringInterner,
    ) -> PatternDisplay<'a> {
        PatternDisplay {
            name_only: true,
            ..self.display(id, interner)
        }
    }
}

impl PatternDisplay<'_> {
    fn nested(&self, id: PatternId) -> Self {
        PatternDisplay {
            arena: self.arena,
            interner: self.interner,
            id,
            name_only: false,
        }
    }

    fn write_list(&self, f: &mut fmt::Formatter<'_>, fields: &[PatternId], tuple: bool) -> fmt::Result {
        f.write_str("(")?;
        for (i, &field) in fields.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", self.nested(field))?;
        }
        if tuple && fields.len() == 1 {
            f.write_str(",")?;
        }
        f.write_str(")")
    }
}

impl fmt::Display for PatternDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let arena = self.arena;
        let exprs = arena.exprs();
        match arena.kind(self.id) {
            PatternKind::Auto => f.write_str("auto"),
            PatternKind::Var(inner) => write!(f, "var {}", self.nested(*inner)),
            PatternKind::Binding(binding) => {
                let name = self.interner.lookup(binding.name());
                if self.name_only {
                    return f.write_str(name);
                }
                write!(f, "{name}: {}", self.nested(binding.type_pattern()))
            }
            PatternKind::Addr(binding) => write!(f, "addr {}", self.nested(binding.pattern())),
            PatternKind::Tuple(fields) => self.write_list(f, arena.pattern_list(*fields), true),
            PatternKind::GenericBinding(generic) => {
                let name = self.interner.lookup(generic.name());
                if self.name_only {
                    return f.write_str(name);
                }
                if generic.is_template() {
                    f.write_str("template ")?;
                }
                write!(f, "{name}:! {}", exprs.display(generic.type_expr(), self.interner))
            }
            PatternKind::Alternative(alternative) => {
                write!(
                    f,
                    "{}.{}",
                    exprs.display(alternative.choice_type(), self.interner),
                    self.interner.lookup(alternative.alternative_name())
                )?;
                self.write_list(f, arena.tuple_fields(alternative.arguments()), false)
            }
            PatternKind::Expression(expr) => {
                write!(f, "{}", exprs.display(*expr, self.interner))
            }
        }
    }
}

impl fmt::Debug for PatternDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} `{self}`", self.id)
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
mod tests;
