//! Restricted expression console.
//!
//! Submitted text runs through a fixed pipeline: policy check, lex,
//! parse, evaluate, format. Any stage failure yields a rejected
//! [`EvaluationRecord`]; policy failures carry their fixed messages
//! while syntax and runtime faults are prefixed with `Error: `.

pub mod history;
pub mod log;
pub mod policy;
pub mod record;
pub mod session;

pub use history::HistoryNavigator;
pub use log::{ConsoleLog, LineKind, LogLine, MAX_LINES};
pub use policy::PolicyViolation;
pub use record::{EvaluationRecord, Verdict};
pub use session::ConsoleSession;

use minijs_eval::{eval_expr, format_value};
use minijs_parser::parse_expression;

/// Run one line of input through the whole pipeline and produce its
/// record.
pub fn evaluate(text: &str) -> EvaluationRecord {
    if let Err(violation) = policy::check(text) {
        return EvaluationRecord::rejected(text, violation.to_string());
    }
    let expr = match parse_expression(text) {
        Ok(expr) => expr,
        Err(err) => return EvaluationRecord::rejected(text, format!("Error: {err}")),
    };
    match eval_expr(&expr) {
        Ok(value) => EvaluationRecord::accepted(text, format_value(&value)),
        Err(err) => EvaluationRecord::rejected(text, format!("Error: {err}")),
    }
}
