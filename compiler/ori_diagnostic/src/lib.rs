//! Errors reported to the user while building patterns.
//!
//! Only malformed input becomes a [`Diagnostic`]. Contract violations inside
//! the pattern model are bugs in a caller and panic where they happen.
//!
//! [`DiagnosticQueue::emit_error`] returns an [`ErrorGuaranteed`], proof
//! that something was reported:
//!
//! ```text
//! fn build(..) -> Result<PatternId, ErrorGuaranteed> {
//!     create(..).map_err(|err| queue.emit_error(err.to_diagnostic()))
//! }
//! ```

mod diagnostic;
mod error_code;
mod guarantee;
mod queue;

pub use diagnostic::{Diagnostic, Label};
pub use error_code::ErrorCode;
pub use guarantee::ErrorGuaranteed;
pub use queue::{DiagnosticConfig, DiagnosticQueue};
