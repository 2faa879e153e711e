//! End-to-end console tests: the policy gate, the evaluation pipeline,
//! history navigation and the bounded display log, exercised together
//! through a session the way a page would drive them.

use minijs_console::{evaluate, ConsoleSession, LineKind, Verdict, MAX_LINES};

// ─────────────────────────────────────────────────────────────────────
// Pipeline verdicts
// ─────────────────────────────────────────────────────────────────────

#[test]
fn test_arithmetic_is_accepted() {
    let record = evaluate("5 + 3");
    assert_eq!(record.verdict, Verdict::Accepted);
    assert_eq!(record.output, "8");
}

#[test]
fn test_string_result_keeps_its_quotes() {
    let record = evaluate("\"Hello \" + \"World\"");
    assert_eq!(record.verdict, Verdict::Accepted);
    assert_eq!(record.output, "\"Hello World\"");
}

#[test]
fn test_null_and_infinity_display() {
    assert_eq!(evaluate("null").output, "null");
    assert_eq!(evaluate("undefined").output, "undefined");
    assert_eq!(evaluate("1/0").output, "Infinity");
}

#[test]
fn test_disallowed_characters_reject_before_parsing() {
    let record = evaluate("5 % 3");
    assert_eq!(record.verdict, Verdict::Rejected);
    assert_eq!(record.output, "Code contains disallowed characters");
}

#[test]
fn test_denied_keyword_rejects_even_inside_arithmetic() {
    let record = evaluate("1 + fetch");
    assert_eq!(record.verdict, Verdict::Rejected);
    assert_eq!(record.output, "Potentially dangerous code detected");
}

#[test]
fn test_syntax_faults_carry_the_error_prefix() {
    let record = evaluate("5 +");
    assert_eq!(record.verdict, Verdict::Rejected);
    assert!(record.output.starts_with("Error: "), "{}", record.output);
    assert_eq!(evaluate("(1").output, "Error: Unexpected end of input");
    assert_eq!(evaluate(")").output, "Error: Unexpected token ')'");
}

#[test]
fn test_runtime_faults_carry_the_error_prefix() {
    assert_eq!(evaluate("x + 1").output, "Error: x is not defined");
    assert_eq!(
        evaluate("null.x").output,
        "Error: Cannot read properties of null (reading 'x')"
    );
    assert_eq!(evaluate("NaN()").output, "Error: NaN is not a function");
}

#[test]
fn test_braced_input_is_an_object_literal() {
    let record = evaluate("{a: [1, 2]}");
    assert_eq!(record.verdict, Verdict::Accepted);
    assert_eq!(record.output, "{\n  \"a\": [\n    1,\n    2\n  ]\n}");
}

// ─────────────────────────────────────────────────────────────────────
// History navigation through a session
// ─────────────────────────────────────────────────────────────────────

#[test]
fn test_history_navigation_with_clamping() {
    let mut session = ConsoleSession::new();
    session.submit("1");
    session.submit("2");
    session.submit("3");

    assert_eq!(session.navigate_history(-1), "3");
    assert_eq!(session.navigate_history(-1), "2");
    assert_eq!(session.navigate_history(-1), "1");
    assert_eq!(session.navigate_history(-1), "1");
    assert_eq!(session.navigate_history(1), "2");
    assert_eq!(session.navigate_history(1), "3");
    assert_eq!(session.navigate_history(1), "");
    assert_eq!(session.navigate_history(1), "");
}

#[test]
fn test_rejected_submissions_still_enter_history() {
    let mut session = ConsoleSession::new();
    session.submit("fetch(1)");
    assert_eq!(session.navigate_history(-1), "fetch(1)");
}

#[test]
fn test_blank_lines_never_enter_history() {
    let mut session = ConsoleSession::new();
    session.submit("  ");
    assert_eq!(session.navigate_history(-1), "");
}

// ─────────────────────────────────────────────────────────────────────
// Display log
// ─────────────────────────────────────────────────────────────────────

#[test]
fn test_log_caps_at_fifty_lines_evicting_the_oldest() {
    let mut session = ConsoleSession::new();
    // Each submission adds two lines (echo + result); 51 submissions
    // push well past the cap.
    for i in 0..51 {
        session.submit(&format!("{i}"));
    }
    assert_eq!(session.log().len(), MAX_LINES);
    // The greeting and the earliest submissions were evicted; order of
    // the survivors is preserved.
    let lines: Vec<&str> = session.log().lines().map(|l| l.text.as_str()).collect();
    assert_eq!(lines[lines.len() - 2], "> 50");
    assert_eq!(lines[lines.len() - 1], "50");
    assert_eq!(lines[0], "> 26");
    assert_eq!(lines[1], "26");
}

#[test]
fn test_submissions_are_echoed_with_a_prompt() {
    let mut session = ConsoleSession::new();
    session.submit("1 + 1");
    let lines: Vec<_> = session.log().lines().collect();
    let echo = &lines[lines.len() - 2];
    assert_eq!(echo.kind, LineKind::Input);
    assert_eq!(echo.text, "> 1 + 1");
}

#[test]
fn test_clear_reseeds_the_greeting() {
    let mut session = ConsoleSession::new();
    session.submit("1");
    session.clear();
    let lines: Vec<&str> = session.log().lines().map(|l| l.text.as_str()).collect();
    assert_eq!(
        lines,
        ["Console cleared!", "Try typing: 5 + 3", "Or: \"Hello \" + \"World\""]
    );
    let kinds: Vec<LineKind> = session.log().lines().map(|l| l.kind).collect();
    assert!(kinds.iter().all(|k| *k == LineKind::Output));
}

// ─────────────────────────────────────────────────────────────────────
// Record serialization
// ─────────────────────────────────────────────────────────────────────

#[test]
fn test_record_serializes_for_the_page() {
    let record = evaluate("5 + 3");
    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["text"], "5 + 3");
    assert_eq!(json["verdict"], "accepted");
    assert_eq!(json["output"], "8");
}
