//! Parenthesized, comma-separated lists as the parser hands them over.

/// Contents of `( ... )`.
///
/// Whether the parentheses group or form a tuple depends on the element
/// count and on a trailing comma: `(x)` groups, `(x,)` and `()` are tuples.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ParenContents<T> {
    pub elements: Vec<T>,
    pub has_trailing_comma: bool,
}

impl<T> ParenContents<T> {
    pub fn new(elements: Vec<T>, has_trailing_comma: bool) -> Self {
        ParenContents {
            elements,
            has_trailing_comma,
        }
    }

    /// The single element, if these parentheses only group it.
    pub fn grouped(&self) -> Option<&T> {
        match self.elements.as_slice() {
            [only] if !self.has_trailing_comma => Some(only),
            _ => None,
        }
    }

    /// Convert every element, keeping the trailing-comma flag.
    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> ParenContents<U> {
        ParenContents {
            elements: self.elements.iter().map(f).collect(),
            has_trailing_comma: self.has_trailing_comma,
        }
    }
}

impl<T> Default for ParenContents<T> {
    fn default() -> Self {
        ParenContents {
            elements: Vec::new(),
            has_trailing_comma: false,
        }
    }
}
