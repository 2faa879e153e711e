//! The record produced for every evaluated submission.

use serde::{Deserialize, Serialize};

/// Whether a submission passed policy, parsing and evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Accepted,
    Rejected,
}

/// One evaluated submission: the original text, the verdict, and the
/// display output (a formatted value, a policy message, or an
/// `Error: `-prefixed fault).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationRecord {
    pub text: String,
    pub verdict: Verdict,
    pub output: String,
}

impl EvaluationRecord {
    pub fn accepted(text: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            verdict: Verdict::Accepted,
            output: output.into(),
        }
    }

    pub fn rejected(text: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            verdict: Verdict::Rejected,
            output: output.into(),
        }
    }

    pub fn is_accepted(&self) -> bool {
        self.verdict == Verdict::Accepted
    }
}
