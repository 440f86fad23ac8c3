//! Arena allocation for expressions.
//!
//! All expressions of a pattern tree live in one contiguous `Vec`; child
//! lists are flattened into `expr_lists` and addressed by [`ExprRange`].
//! Nodes are never freed individually.

use std::fmt;

use crate::{Expr, ExprId, ExprKind, ExprRange, Name, Span, StringInterner};

/// Convert a collection length to a `u32` index.
///
/// # Panics
/// Panics if `len` exceeds `u32::MAX`; `what` names the collection.
#[inline]
#[track_caller]
pub fn to_u32(len: usize, what: &str) -> u32 {
    u32::try_from(len).unwrap_or_else(|_| panic!("too many {what}: {len} exceeds u32::MAX"))
}

/// Convert a list length to a `u16` range length.
///
/// # Panics
/// Panics if `len` exceeds `u16::MAX`; `what` names the list.
#[inline]
#[track_caller]
pub fn to_u16(len: usize, what: &str) -> u16 {
    u16::try_from(len).unwrap_or_else(|_| panic!("{what} too long: {len} exceeds u16::MAX"))
}

/// Contiguous storage for expressions.
#[derive(Clone, Debug, Default)]
pub struct ExprArena {
    /// All expressions (indexed by `ExprId`).
    exprs: Vec<Expr>,
    /// Flattened expression lists (tuple elements, call arguments).
    expr_lists: Vec<ExprId>,
}

impl ExprArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate expression, return ID.
    #[inline]
    pub fn alloc_expr(&mut self, expr: Expr) -> ExprId {
        let id = ExprId::new(to_u32(self.exprs.len(), "expressions"));
        self.exprs.push(expr);
        id
    }

    /// Allocate an expression from its parts.
    #[inline]
    pub fn alloc(&mut self, kind: ExprKind, span: Span) -> ExprId {
        self.alloc_expr(Expr::new(kind, span))
    }

    /// Get expression by ID.
    ///
    /// # Panics
    /// Panics if `id` is out of bounds.
    #[inline]
    #[track_caller]
    pub fn get_expr(&self, id: ExprId) -> &Expr {
        &self.exprs[id.index()]
    }

    #[inline]
    #[track_caller]
    pub fn kind(&self, id: ExprId) -> &ExprKind {
        &self.exprs[id.index()].kind
    }

    #[inline]
    #[track_caller]
    pub fn span(&self, id: ExprId) -> Span {
        self.exprs[id.index()].span
    }

    /// Allocate expression list, return range.
    pub fn alloc_expr_list(&mut self, exprs: impl IntoIterator<Item = ExprId>) -> ExprRange {
        let start = to_u32(self.expr_lists.len(), "expression list entries");
        self.expr_lists.extend(exprs);
        let len = to_u16(self.expr_lists.len() - start as usize, "expression list");
        if len == 0 {
            ExprRange::EMPTY
        } else {
            ExprRange::new(start, len)
        }
    }

    /// Get expression list by range.
    #[inline]
    pub fn get_expr_list(&self, range: ExprRange) -> &[ExprId] {
        &self.expr_lists[range.indices()]
    }

    /// Number of allocated expressions.
    pub fn len(&self) -> usize {
        self.exprs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exprs.is_empty()
    }

    /// Decompose `object.member`.
    ///
    /// Returns `None` for anything that is not syntactically a simple member
    /// access.
    pub fn simple_member_access(&self, id: ExprId) -> Option<(ExprId, Name)> {
        match *self.kind(id) {
            ExprKind::MemberAccess { object, member } => Some((object, member)),
            _ => None,
        }
    }

    /// Render an expression as source text.
    pub fn display<'a>(&'a self, id: ExprId, interner: &'a StringInterner) -> ExprDisplay<'a> {
        ExprDisplay {
            arena: self,
            interner,
            id,
        }
    }
}

/// `Display` adapter returned by [`ExprArena::display`].
pub struct ExprDisplay<'a> {
    arena: &'a ExprArena,
    interner: &'a StringInterner,
    id: ExprId,
}

impl ExprDisplay<'_> {
    fn with(&self, id: ExprId) -> Self {
        ExprDisplay { id, ..*self }
    }

    fn write_list(&self, f: &mut fmt::Formatter<'_>, range: ExprRange) -> fmt::Result {
        let ids = self.arena.get_expr_list(range);
        f.write_str("(")?;
        for (i, &id) in ids.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", self.with(id))?;
        }
        f.write_str(")")
    }
}

impl fmt::Display for ExprDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self.arena.kind(self.id) {
            ExprKind::Ident(name) | ExprKind::BindingRef { name, .. } => {
                f.write_str(self.interner.lookup(name))
            }
            ExprKind::MemberAccess { object, member } => {
                write!(f, "{}.{}", self.with(object), self.interner.lookup(member))
            }
            ExprKind::Int(value) => write!(f, "{value}"),
            ExprKind::Bool(value) => write!(f, "{value}"),
            ExprKind::TypeType => f.write_str("type"),
            ExprKind::DotSelf => f.write_str(".Self"),
            ExprKind::Tuple(elements) => {
                if elements.len() == 1 {
                    let only = self.arena.get_expr_list(elements)[0];
                    write!(f, "({},)", self.with(only))
                } else {
                    self.write_list(f, elements)
                }
            }
            ExprKind::Call { callee, args } => {
                write!(f, "{}", self.with(callee))?;
                self.write_list(f, args)
            }
        }
    }
}
