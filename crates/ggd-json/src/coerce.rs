//! # Lenient Coercion — Documented Fallback Rules
//!
//! The schema layer maps value trees into typed records without ever
//! failing: a field of the wrong type falls back to the field's zero
//! value. The legacy frontend got this behavior incidentally from
//! runtime casts; here the fallback rules are explicit, total
//! functions, pinned by tests.
//!
//! These rules are compatibility behavior. Do not widen them — a new
//! convertible shape is a schema change, not a coercion tweak.

use crate::value::{Number, Value};

/// Convert a value to `i64` with permissive numeric coercion.
///
/// Fallback rules:
/// - `Number::Int` — the value itself.
/// - `Number::Float` — truncated toward zero.
/// - `Str` — trimmed and parsed as a decimal integer, else 0. A
///   numeric-looking string such as `"5000"` converts; `"5000.5"`
///   does not.
/// - `Bool` — 1 for true, 0 for false.
/// - `Null`, `Array`, `Object` — 0.
pub fn to_i64(value: &Value) -> i64 {
    match value {
        Value::Number(Number::Int(i)) => *i,
        Value::Number(Number::Float(f)) => *f as i64,
        Value::Str(s) => s.trim().parse().unwrap_or(0),
        Value::Bool(b) => i64::from(*b),
        Value::Null | Value::Array(_) | Value::Object(_) => 0,
    }
}

/// Convert a value to `bool`.
///
/// Fallback rules:
/// - `Bool` — the value itself.
/// - `Number` — true when nonzero.
/// - `Str` — ASCII-case-insensitive `"true"`/`"false"`, else false.
/// - `Null`, `Array`, `Object` — false.
pub fn to_bool(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(Number::Int(i)) => *i != 0,
        Value::Number(Number::Float(f)) => *f != 0.0,
        Value::Str(s) => s.eq_ignore_ascii_case("true"),
        Value::Null | Value::Array(_) | Value::Object(_) => false,
    }
}

/// Convert a value to an owned `String`.
///
/// Only `Str` carries text; every other variant falls back to the
/// empty string. Numbers are deliberately not stringified — a numeric
/// value in a text field is a type mismatch, and mismatches zero out.
pub fn to_text(value: &Value) -> String {
    match value {
        Value::Str(s) => s.clone(),
        _ => String::new(),
    }
}
