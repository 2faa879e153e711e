//! Restricted expression console as a WASM module for browser pages.
//!
//! This crate exposes the evaluation pipeline and a stateful console
//! session via `wasm-bindgen`.
//!
//! # Usage (JavaScript)
//!
//! ```js
//! import init, { evaluate, Console } from 'minijs-wasm';
//!
//! await init();
//!
//! const record = JSON.parse(evaluate("5 + 3"));
//! // { text: "5 + 3", verdict: "accepted", output: "8" }
//!
//! const console = new Console();
//! console.submit('"Hello " + "World"');
//! const lines = JSON.parse(console.lines());
//! ```

use minijs_console::ConsoleSession;
use wasm_bindgen::prelude::*;

/// Evaluate one line of input.
///
/// Returns a JSON string containing an `EvaluationRecord`:
/// ```json
/// { "text": "5 + 3", "verdict": "accepted", "output": "8" }
/// ```
///
/// Rejected input carries the policy message or an `Error: `-prefixed
/// fault in `output`.
#[wasm_bindgen]
pub fn evaluate(text: &str) -> String {
    let record = minijs_console::evaluate(text);
    serde_json::to_string(&record).unwrap_or_else(|e| {
        format!(r#"{{"text":"","verdict":"rejected","output":"Serialization error: {e}"}}"#)
    })
}

/// Return the console version string.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// A stateful console session: submission history, arrow-key
/// navigation, and a bounded display log.
#[wasm_bindgen]
pub struct Console {
    session: ConsoleSession,
}

#[wasm_bindgen]
impl Console {
    /// A new session with the greeting lines already in the log.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            session: ConsoleSession::new(),
        }
    }

    /// Submit one line; returns the `EvaluationRecord` as JSON, or
    /// `null` for blank input.
    pub fn submit(&mut self, input: &str) -> String {
        match self.session.submit(input) {
            Some(record) => serde_json::to_string(&record).unwrap_or_else(|e| {
                format!(
                    r#"{{"text":"","verdict":"rejected","output":"Serialization error: {e}"}}"#
                )
            }),
            None => "null".to_string(),
        }
    }

    /// Move through past submissions: negative offsets go older,
    /// positive newer. Returns the entry text, or `""` past the end.
    pub fn navigate(&mut self, offset: i32) -> String {
        self.session.navigate_history(offset as isize).to_string()
    }

    /// Empty the display log and seed the greeting lines.
    pub fn clear(&mut self) {
        self.session.clear();
    }

    /// The display log as a JSON array of `{ kind, text }` lines,
    /// oldest first.
    pub fn lines(&self) -> String {
        let lines: Vec<_> = self.session.log().lines().collect();
        serde_json::to_string(&lines).unwrap_or_else(|_| "[]".to_string())
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}
