//! Evaluator integration tests over the full lex → parse → eval path.
//!
//! Covers: arithmetic and its coercions, string concatenation, equality
//! (loose and strict), relational comparison, logical operators,
//! property access, calls, identifiers, and result formatting.

use minijs_eval::{eval_expr, format_value, EvalError};
use minijs_parser::parse_expression;
use minijs_types::Value;

// ─────────────────────────────────────────────────────────────────────
// Helpers
// ─────────────────────────────────────────────────────────────────────

/// Parse and evaluate one expression.
fn eval(source: &str) -> Result<Value, EvalError> {
    let expr = parse_expression(source).expect("parse should succeed");
    eval_expr(&expr)
}

/// Parse, evaluate and format — the console's display text.
fn display(source: &str) -> String {
    format_value(&eval(source).expect("evaluation should succeed"))
}

fn eval_err(source: &str) -> EvalError {
    eval(source).expect_err("evaluation should fail")
}

// ─────────────────────────────────────────────────────────────────────
// Arithmetic
// ─────────────────────────────────────────────────────────────────────

#[test]
fn test_basic_arithmetic() {
    assert_eq!(display("5 + 3"), "8");
    assert_eq!(display("10 - 4"), "6");
    assert_eq!(display("6 * 7"), "42");
    assert_eq!(display("9 / 2"), "4.5");
    assert_eq!(display("2 + 3 * 4"), "14");
    assert_eq!(display("(2 + 3) * 4"), "20");
}

#[test]
fn test_division_never_faults() {
    assert_eq!(display("1 / 0"), "Infinity");
    assert_eq!(display("-1 / 0"), "-Infinity");
    assert_eq!(display("0 / 0"), "NaN");
}

#[test]
fn test_arithmetic_coercions() {
    assert_eq!(display("'6' * '7'"), "42");
    assert_eq!(display("true + 1"), "2");
    assert_eq!(display("null + 1"), "1");
    assert_eq!(display("undefined + 1"), "NaN");
    assert_eq!(display("'5' - 2"), "3");
    assert_eq!(display("'abc' * 2"), "NaN");
    assert_eq!(display("+'3'"), "3");
    assert_eq!(display("-'4'"), "-4");
}

// ─────────────────────────────────────────────────────────────────────
// String concatenation
// ─────────────────────────────────────────────────────────────────────

#[test]
fn test_plus_concatenates_when_either_side_is_a_string() {
    assert_eq!(display("'Hello ' + 'World'"), "\"Hello World\"");
    assert_eq!(display("'n = ' + 5"), "\"n = 5\"");
    assert_eq!(display("1 + '2'"), "\"12\"");
    assert_eq!(display("'' + null"), "\"null\"");
    assert_eq!(display("'' + undefined"), "\"undefined\"");
}

#[test]
fn test_arrays_and_objects_coerce_through_strings_under_plus() {
    assert_eq!(display("[1, 2] + [3]"), "\"1,23\"");
    assert_eq!(display("[] + 1"), "\"1\"");
    assert_eq!(display("[1, null, 2] + ''"), "\"1,,2\"");
}

// ─────────────────────────────────────────────────────────────────────
// Equality
// ─────────────────────────────────────────────────────────────────────

#[test]
fn test_loose_equality() {
    assert_eq!(display("null == undefined"), "true");
    assert_eq!(display("'5' == 5"), "true");
    assert_eq!(display("true == 1"), "true");
    assert_eq!(display("false == 0"), "true");
    assert_eq!(display("null == 0"), "false");
    assert_eq!(display("NaN == NaN"), "false");
    assert_eq!(display("'1' != 1"), "false");
}

#[test]
fn test_strict_equality() {
    assert_eq!(display("null === undefined"), "false");
    assert_eq!(display("'5' === 5"), "false");
    assert_eq!(display("5 === 5"), "true");
    assert_eq!(display("'a' === 'a'"), "true");
    assert_eq!(display("true !== 1"), "true");
}

#[test]
fn test_distinct_literals_are_never_equal() {
    assert_eq!(display("[] == []"), "false");
    assert_eq!(display("[1] == [1]"), "false");
    assert_eq!(display("{} == {}"), "false");
    assert_eq!(display("[] === []"), "false");
    assert_eq!(display("{a: 1} === {a: 1}"), "false");
}

// ─────────────────────────────────────────────────────────────────────
// Relational comparison
// ─────────────────────────────────────────────────────────────────────

#[test]
fn test_relational_operators() {
    assert_eq!(display("1 < 2"), "true");
    assert_eq!(display("2 <= 2"), "true");
    assert_eq!(display("3 > 4"), "false");
    // Both sides strings: lexicographic.
    assert_eq!(display("'a' < 'b'"), "true");
    assert_eq!(display("'10' < '9'"), "true");
    // Mixed: numeric.
    assert_eq!(display("'10' < 9"), "false");
}

#[test]
fn test_nan_makes_every_relation_false() {
    assert_eq!(display("NaN < 1"), "false");
    assert_eq!(display("NaN > 1"), "false");
    assert_eq!(display("NaN <= NaN"), "false");
}

// ─────────────────────────────────────────────────────────────────────
// Logical operators & conditional
// ─────────────────────────────────────────────────────────────────────

#[test]
fn test_logical_operators_yield_operand_values() {
    assert_eq!(display("5 && 3"), "3");
    assert_eq!(display("0 && 3"), "0");
    assert_eq!(display("0 || 'x'"), "\"x\"");
    assert_eq!(display("5 || 'x'"), "5");
    assert_eq!(display("'' || null"), "null");
}

#[test]
fn test_short_circuit_skips_the_right_side() {
    // The unresolvable identifier on the right never evaluates.
    assert_eq!(display("0 && nope"), "0");
    assert_eq!(display("1 || nope"), "1");
}

#[test]
fn test_conditional_expression() {
    assert_eq!(display("1 < 2 ? 'yes' : 'no'"), "\"yes\"");
    assert_eq!(display("0 ? 'yes' : 'no'"), "\"no\"");
    // Only the taken branch evaluates.
    assert_eq!(display("true ? 1 : nope"), "1");
}

#[test]
fn test_truthiness() {
    assert_eq!(display("!0"), "true");
    assert_eq!(display("!''"), "true");
    assert_eq!(display("!null"), "true");
    assert_eq!(display("!undefined"), "true");
    assert_eq!(display("!NaN"), "true");
    assert_eq!(display("![]"), "false");
    assert_eq!(display("!{}"), "false");
    assert_eq!(display("!'0'"), "false");
}

// ─────────────────────────────────────────────────────────────────────
// Property access
// ─────────────────────────────────────────────────────────────────────

#[test]
fn test_length_and_indexing() {
    assert_eq!(display("'hello'.length"), "5");
    assert_eq!(display("[1, 2, 3].length"), "3");
    assert_eq!(display("'abc'[1]"), "\"b\"");
    assert_eq!(display("[10, 20][0]"), "10");
    assert_eq!(display("[10, 20][5]"), "undefined");
}

#[test]
fn test_object_field_access() {
    assert_eq!(display("{a: 1, b: 2}.a"), "1");
    assert_eq!(display("{a: 1}['a']"), "1");
    assert_eq!(display("{a: 1}.missing"), "undefined");
    assert_eq!(display("(5).x"), "undefined");
}

#[test]
fn test_duplicate_object_keys_take_the_last_value() {
    assert_eq!(display("{a: 1, a: 2}.a"), "2");
}

#[test]
fn test_property_access_on_nullish_faults() {
    assert_eq!(
        eval_err("null.x"),
        EvalError::NullPropertyAccess {
            kind: "null",
            property: "x".to_string()
        }
    );
    assert_eq!(
        eval_err("undefined.length").to_string(),
        "Cannot read properties of undefined (reading 'length')"
    );
}

// ─────────────────────────────────────────────────────────────────────
// Identifiers & calls
// ─────────────────────────────────────────────────────────────────────

#[test]
fn test_only_the_numeric_globals_resolve() {
    assert_eq!(display("Infinity"), "Infinity");
    assert_eq!(display("-Infinity"), "-Infinity");
    assert_eq!(display("NaN"), "NaN");
    assert_eq!(eval_err("someVariable").to_string(), "someVariable is not defined");
}

#[test]
fn test_every_call_is_a_type_fault() {
    assert_eq!(eval_err("NaN()").to_string(), "NaN is not a function");
    assert_eq!(
        eval_err("[1].join(',')").to_string(),
        "(intermediate value).join is not a function"
    );
    // An undefined callee reports the reference error first.
    assert_eq!(eval_err("alert(1)").to_string(), "alert is not defined");
    // So does an unresolvable argument.
    assert_eq!(eval_err("NaN(oops)").to_string(), "oops is not defined");
}

// ─────────────────────────────────────────────────────────────────────
// Formatting
// ─────────────────────────────────────────────────────────────────────

#[test]
fn test_number_display_forms() {
    assert_eq!(display("8"), "8");
    assert_eq!(display("8.5"), "8.5");
    assert_eq!(display("-0"), "0");
    assert_eq!(display("1e3"), "1000");
}

#[test]
fn test_structural_display_is_pretty_json() {
    assert_eq!(display("[1, 2]"), "[\n  1,\n  2\n]");
    assert_eq!(display("{a: 1}"), "{\n  \"a\": 1\n}");
    // Non-finite numbers serialize as null, as JSON.stringify does.
    assert_eq!(display("[1 / 0]"), "[\n  null\n]");
    assert_eq!(display("[undefined]"), "[\n  null\n]");
    // Undefined-valued fields are omitted.
    assert_eq!(display("{a: undefined, b: 1}"), "{\n  \"b\": 1\n}");
}
