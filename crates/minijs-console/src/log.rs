//! Bounded display log with FIFO eviction.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

/// Maximum number of lines the log retains.
pub const MAX_LINES: usize = 50;

/// How a line should be styled when displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    /// Echo of a submitted line, rendered with a `> ` prompt.
    Input,
    /// A successful evaluation result or an informational message.
    Output,
    /// A rejection message or an evaluation fault.
    Error,
}

/// One displayed line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogLine {
    pub kind: LineKind,
    pub text: String,
}

impl LogLine {
    pub fn new(kind: LineKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

/// The console's scrollback: at most [`MAX_LINES`] lines, oldest
/// evicted first.
#[derive(Debug, Default, Clone)]
pub struct ConsoleLog {
    lines: VecDeque<LogLine>,
}

impl ConsoleLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line, evicting the oldest if the log is full.
    pub fn push(&mut self, kind: LineKind, text: impl Into<String>) {
        if self.lines.len() == MAX_LINES {
            self.lines.pop_front();
        }
        self.lines.push_back(LogLine::new(kind, text));
    }

    /// Drop every line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Lines in display order, oldest first.
    pub fn lines(&self) -> impl Iterator<Item = &LogLine> {
        self.lines.iter()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
