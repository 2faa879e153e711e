//! Runtime error types for the MiniJS evaluator.
//!
//! Message texts follow the JavaScript engine phrasing because the
//! console shows them to learners verbatim, prefixed with `Error: `.

use thiserror::Error;

/// Evaluation error — the runtime faults a single expression can raise.
///
/// Arithmetic never traps (division by zero is `Infinity`), so the only
/// faults are name resolution and property/call misuse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// Unknown identifier in the isolated scope.
    #[error("{0} is not defined")]
    NotDefined(String),

    /// Property access on `null` or `undefined`.
    #[error("Cannot read properties of {kind} (reading '{property}')")]
    NullPropertyAccess {
        /// `"null"` or `"undefined"`.
        kind: &'static str,
        property: String,
    },

    /// Call of a value that is not a function. No function values exist
    /// in the isolated scope, so every call lands here.
    #[error("{0} is not a function")]
    NotCallable(String),
}

/// Result alias for evaluator operations.
pub type EvalResult<T> = Result<T, EvalError>;
