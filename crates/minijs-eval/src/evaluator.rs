//! Core expression evaluator.

use crate::error::{EvalError, EvalResult};
use minijs_types::ast::*;
use minijs_types::Value;

/// Evaluate an expression to a [`Value`].
///
/// Evaluation is pure: there is no environment, no bindings and no side
/// effects. The only resolvable identifiers are the `NaN` and
/// `Infinity` globals.
pub fn eval_expr(expr: &Expr) -> EvalResult<Value> {
    match &expr.kind {
        ExprKind::Number(n) => Ok(Value::Number(*n)),
        ExprKind::String(s) => Ok(Value::String(s.clone())),
        ExprKind::Bool(b) => Ok(Value::Bool(*b)),
        ExprKind::Null => Ok(Value::Null),
        ExprKind::Undefined => Ok(Value::Undefined),

        ExprKind::Array(elements) => eval_array(elements),
        ExprKind::Object(entries) => eval_object(entries),

        ExprKind::Identifier(name) => eval_identifier(name),

        ExprKind::Unary { op, operand } => eval_unary(*op, operand),
        ExprKind::Binary { left, op, right } => eval_binary(left, *op, right),
        ExprKind::Logical { left, op, right } => eval_logical(left, *op, right),
        ExprKind::Conditional {
            condition,
            consequent,
            alternate,
        } => {
            if eval_expr(condition)?.is_truthy() {
                eval_expr(consequent)
            } else {
                eval_expr(alternate)
            }
        }

        ExprKind::Member { object, property } => {
            let obj = eval_expr(object)?;
            get_property(&obj, property)
        }
        ExprKind::Index { object, index } => {
            let obj = eval_expr(object)?;
            let key = eval_expr(index)?.to_display_string();
            get_property(&obj, &key)
        }
        ExprKind::Call { callee, args } => eval_call(callee, args),

        ExprKind::Paren(inner) => eval_expr(inner),
    }
}

// ── Literals ──────────────────────────────────────────────────────────

fn eval_array(elements: &[Expr]) -> EvalResult<Value> {
    let mut values = Vec::with_capacity(elements.len());
    for element in elements {
        values.push(eval_expr(element)?);
    }
    Ok(Value::Array(values))
}

/// Duplicate keys keep their first position but take the last value,
/// matching JavaScript object literal semantics.
fn eval_object(entries: &[(ObjectKey, Expr)]) -> EvalResult<Value> {
    let mut fields: Vec<(String, Value)> = Vec::new();
    for (key, value_expr) in entries {
        let name = key.property_name();
        let value = eval_expr(value_expr)?;
        match fields.iter_mut().find(|(existing, _)| *existing == name) {
            Some(slot) => slot.1 = value,
            None => fields.push((name, value)),
        }
    }
    Ok(Value::Object(fields))
}

// ── Identifiers ───────────────────────────────────────────────────────

/// The isolated scope exposes only the two numeric globals; everything
/// else is a reference error.
fn eval_identifier(name: &str) -> EvalResult<Value> {
    match name {
        "NaN" => Ok(Value::Number(f64::NAN)),
        "Infinity" => Ok(Value::Number(f64::INFINITY)),
        _ => Err(EvalError::NotDefined(name.to_string())),
    }
}

// ── Operators ─────────────────────────────────────────────────────────

fn eval_unary(op: UnaryOp, operand: &Expr) -> EvalResult<Value> {
    let value = eval_expr(operand)?;
    Ok(match op {
        UnaryOp::Not => Value::Bool(!value.is_truthy()),
        UnaryOp::Neg => Value::Number(-value.to_number()),
        UnaryOp::Plus => Value::Number(value.to_number()),
    })
}

fn eval_binary(left: &Expr, op: BinOp, right: &Expr) -> EvalResult<Value> {
    let lv = eval_expr(left)?;
    let rv = eval_expr(right)?;
    Ok(match op {
        BinOp::Add => eval_add(&lv, &rv),
        BinOp::Sub => Value::Number(lv.to_number() - rv.to_number()),
        BinOp::Mul => Value::Number(lv.to_number() * rv.to_number()),
        // f64 division: 1/0 is Infinity, 0/0 is NaN — never an error.
        BinOp::Div => Value::Number(lv.to_number() / rv.to_number()),
        BinOp::Eq => Value::Bool(loose_eq(&lv, &rv)),
        BinOp::NotEq => Value::Bool(!loose_eq(&lv, &rv)),
        BinOp::StrictEq => Value::Bool(strict_eq(&lv, &rv)),
        BinOp::StrictNotEq => Value::Bool(!strict_eq(&lv, &rv)),
        BinOp::Less => compare(&lv, &rv, |o| o == std::cmp::Ordering::Less),
        BinOp::Greater => compare(&lv, &rv, |o| o == std::cmp::Ordering::Greater),
        BinOp::LessEq => compare(&lv, &rv, |o| o != std::cmp::Ordering::Greater),
        BinOp::GreaterEq => compare(&lv, &rv, |o| o != std::cmp::Ordering::Less),
    })
}

/// `&&` and `||` short-circuit and yield an operand value, not a
/// boolean: `5 && 3` is `3`, `0 || "x"` is `"x"`.
fn eval_logical(left: &Expr, op: LogicalOp, right: &Expr) -> EvalResult<Value> {
    let lv = eval_expr(left)?;
    match op {
        LogicalOp::And => {
            if lv.is_truthy() {
                eval_expr(right)
            } else {
                Ok(lv)
            }
        }
        LogicalOp::Or => {
            if lv.is_truthy() {
                Ok(lv)
            } else {
                eval_expr(right)
            }
        }
    }
}

/// `+` with ToPrimitive coercion: if either side is string-like the
/// result is concatenation, otherwise numeric addition.
fn eval_add(left: &Value, right: &Value) -> Value {
    let lp = to_primitive(left);
    let rp = to_primitive(right);
    if matches!(lp, Value::String(_)) || matches!(rp, Value::String(_)) {
        Value::String(format!(
            "{}{}",
            lp.to_display_string(),
            rp.to_display_string()
        ))
    } else {
        Value::Number(lp.to_number() + rp.to_number())
    }
}

/// ToPrimitive: arrays and objects coerce through their string form,
/// everything else is already primitive.
fn to_primitive(value: &Value) -> Value {
    match value {
        Value::Array(_) | Value::Object(_) => Value::String(value.to_display_string()),
        other => other.clone(),
    }
}

/// Loose equality (`==`): `null == undefined`, number↔string compares
/// numerically, booleans coerce to numbers, arrays/objects coerce to
/// primitives against primitives but never equal each other (reference
/// semantics — distinct literals are distinct objects).
fn loose_eq(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Undefined | Value::Null, _) => right.is_nullish(),
        (_, Value::Undefined | Value::Null) => false,
        (Value::Number(a), Value::Number(b)) => a == b,
        (Value::String(a), Value::String(b)) => a == b,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Bool(b), other) | (other, Value::Bool(b)) => {
            let n = if *b { 1.0 } else { 0.0 };
            loose_eq(&Value::Number(n), other)
        }
        (Value::Array(_) | Value::Object(_), Value::Array(_) | Value::Object(_)) => false,
        (Value::Number(n), other) | (other, Value::Number(n)) => {
            *n == to_primitive(other).to_number()
        }
        // Remaining: string against array/object — compare as strings.
        (a, b) => to_primitive(a).to_display_string() == to_primitive(b).to_display_string(),
    }
}

/// Strict equality (`===`): same type and same value; arrays and
/// objects compare by reference and so are never equal here.
fn strict_eq(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Undefined, Value::Undefined) => true,
        (Value::Null, Value::Null) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Number(a), Value::Number(b)) => a == b,
        (Value::String(a), Value::String(b)) => a == b,
        _ => false,
    }
}

/// Relational comparison: lexicographic when both operands are strings,
/// numeric otherwise. Any NaN operand makes every relation false.
fn compare(left: &Value, right: &Value, pick: impl Fn(std::cmp::Ordering) -> bool) -> Value {
    let lp = to_primitive(left);
    let rp = to_primitive(right);
    let ordering = match (&lp, &rp) {
        (Value::String(a), Value::String(b)) => Some(a.cmp(b)),
        _ => lp.to_number().partial_cmp(&rp.to_number()),
    };
    Value::Bool(ordering.is_some_and(pick))
}

// ── Property Access ───────────────────────────────────────────────────

/// Look up a property on a value.
///
/// Strings and arrays expose `length` and numeric indices; objects
/// expose their own fields; missing properties and lookups on other
/// primitives yield `undefined`; lookups on `null`/`undefined` are
/// type errors.
fn get_property(value: &Value, name: &str) -> EvalResult<Value> {
    match value {
        Value::Null => Err(EvalError::NullPropertyAccess {
            kind: "null",
            property: name.to_string(),
        }),
        Value::Undefined => Err(EvalError::NullPropertyAccess {
            kind: "undefined",
            property: name.to_string(),
        }),
        Value::String(s) => {
            if name == "length" {
                return Ok(Value::Number(s.len() as f64));
            }
            // The allowed character alphabet is ASCII, so byte indexing
            // matches JavaScript's UTF-16 unit indexing.
            Ok(match name.parse::<usize>() {
                Ok(i) => s
                    .as_bytes()
                    .get(i)
                    .map(|b| Value::String((*b as char).to_string()))
                    .unwrap_or(Value::Undefined),
                Err(_) => Value::Undefined,
            })
        }
        Value::Array(items) => {
            if name == "length" {
                return Ok(Value::Number(items.len() as f64));
            }
            Ok(match name.parse::<usize>() {
                Ok(i) => items.get(i).cloned().unwrap_or(Value::Undefined),
                Err(_) => Value::Undefined,
            })
        }
        Value::Object(fields) => Ok(fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, v)| v.clone())
            .unwrap_or(Value::Undefined)),
        // Property lookup on number/bool primitives: unknown props are
        // simply undefined.
        Value::Number(_) | Value::Bool(_) => Ok(Value::Undefined),
    }
}

// ── Calls ─────────────────────────────────────────────────────────────

/// The isolated scope holds no function values, so every call is a type
/// error — but only after the callee and arguments evaluate, matching
/// JavaScript's evaluation order (an undefined identifier in callee
/// position reports `is not defined` first).
fn eval_call(callee: &Expr, args: &[Expr]) -> EvalResult<Value> {
    eval_expr(callee)?;
    for arg in args {
        eval_expr(arg)?;
    }
    Err(EvalError::NotCallable(callee_name(callee)))
}

/// Render the callee the way an engine names it in `... is not a
/// function` messages.
fn callee_name(expr: &Expr) -> String {
    match &expr.kind {
        ExprKind::Identifier(name) => name.clone(),
        ExprKind::Member { object, property } => match &object.kind {
            ExprKind::Identifier(name) => format!("{name}.{property}"),
            _ => format!("(intermediate value).{property}"),
        },
        ExprKind::Paren(inner) => callee_name(inner),
        _ => "(intermediate value)".to_string(),
    }
}
