//! Shared types for the MiniJS expression engine.
//!
//! This crate defines the AST node types, source spans, the runtime
//! [`Value`], and the syntax error type used across all pipeline stages.

mod error;
mod span;
mod value;
pub mod ast;

pub use error::SyntaxError;
pub use span::Span;
pub use value::{js_number_to_string, Value};
