//! MiniJS tree-walking evaluator.
//!
//! Walks the expression AST directly, with JavaScript-faithful value
//! semantics: `f64` arithmetic (division by zero yields `Infinity`, not
//! an error), string concatenation with ToPrimitive coercion, loose and
//! strict equality, short-circuiting operand-valued `&&`/`||`.
//!
//! The evaluation scope is fully isolated: only the `NaN` and
//! `Infinity` globals resolve, every other identifier is a reference
//! error, and there are no callable values.

mod error;
mod evaluator;
mod format;

pub use error::{EvalError, EvalResult};
pub use evaluator::eval_expr;
pub use format::format_value;
