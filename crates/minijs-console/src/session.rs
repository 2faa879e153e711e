//! A full console session: submissions feed the history and the log.

use crate::evaluate;
use crate::history::HistoryNavigator;
use crate::log::{ConsoleLog, LineKind};
use crate::record::EvaluationRecord;

/// Lines shown after a clear, inviting the first submissions.
const GREETING_LINES: &[&str] = &[
    "Console cleared!",
    "Try typing: 5 + 3",
    "Or: \"Hello \" + \"World\"",
];

/// Ties together the evaluation pipeline, the submission history and
/// the bounded display log.
#[derive(Debug, Default, Clone)]
pub struct ConsoleSession {
    history: HistoryNavigator,
    log: ConsoleLog,
}

impl ConsoleSession {
    /// A session starting with the greeting lines already in the log.
    pub fn new() -> Self {
        let mut session = Self::default();
        session.clear();
        session
    }

    /// Submit one line. Blank input (after trimming) is discarded and
    /// returns `None`. Otherwise the line is recorded in history,
    /// echoed to the log with a `> ` prompt, evaluated, and its output
    /// logged as either an output or an error line.
    pub fn submit(&mut self, input: &str) -> Option<EvaluationRecord> {
        let text = input.trim();
        if text.is_empty() {
            return None;
        }
        self.history.record_submission(text);
        self.log.push(LineKind::Input, format!("> {text}"));

        let record = evaluate(text);
        let kind = if record.is_accepted() {
            LineKind::Output
        } else {
            LineKind::Error
        };
        self.log.push(kind, record.output.clone());
        Some(record)
    }

    /// Move through past submissions; see [`HistoryNavigator::navigate`].
    pub fn navigate_history(&mut self, offset: isize) -> &str {
        self.history.navigate(offset)
    }

    /// Empty the log and seed it with the greeting lines. History is
    /// kept: clearing the display does not forget past submissions.
    pub fn clear(&mut self) {
        self.log.clear();
        for line in GREETING_LINES {
            self.log.push(LineKind::Output, *line);
        }
    }

    pub fn log(&self) -> &ConsoleLog {
        &self.log
    }
}
