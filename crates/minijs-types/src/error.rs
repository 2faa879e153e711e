use crate::Span;
use thiserror::Error;

/// A syntax error from the lexer or parser.
///
/// Messages follow the JavaScript engine phrasing (`Unexpected token
/// ')'`, `Unexpected end of input`, ...) because the console displays
/// them to learners verbatim, prefixed with `Error: `.
///
/// Lexing and parsing fail fast: the console surfaces exactly one error
/// per submission, so there is no multi-error collection or recovery.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct SyntaxError {
    pub message: String,
    pub span: Span,
}

impl SyntaxError {
    /// Create a new syntax error.
    pub fn new(message: impl Into<String>, span: Span) -> Self {
        Self {
            message: message.into(),
            span,
        }
    }
}
