//! Searchable codes for reported problems.

use std::fmt;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    /// An alternative pattern whose callee is not `Choice.Alternative`.
    E1008,
    /// The queue stopped accepting errors.
    E9002,
}

impl ErrorCode {
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorCode::E1008 => "E1008",
            ErrorCode::E9002 => "E9002",
        }
    }

    /// Message used until a diagnostic supplies its own.
    pub const fn summary(self) -> &'static str {
        match self {
            ErrorCode::E1008 => "malformed alternative pattern",
            ErrorCode::E9002 => "too many errors",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
