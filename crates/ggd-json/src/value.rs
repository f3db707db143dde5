//! # Value Tree — Closed Tagged Union for JSON Data
//!
//! Defines [`Value`], the generic tree every data artifact is parsed
//! into before schema mapping. The variant set is closed: object,
//! array, string, number, bool, null — nothing else exists, and every
//! consumer matches exhaustively. This replaces the loosely-typed
//! string-to-object mapping of the legacy frontend bridge and removes
//! its invalid-cast failure class by construction.
//!
//! ## Invariants
//!
//! - The tree is acyclic and finite; its size is bounded by the input
//!   that produced it (all children are owned, no sharing).
//! - Object keys are unique with last-write-wins semantics on duplicate
//!   keys in the source text; key order is not significant and is
//!   stored sorted.
//!
//! ## Writer
//!
//! `Display` renders compact JSON (no whitespace, escaped strings,
//! objects in sorted key order). Parsing the rendered text yields an
//! equal tree for any float-free value.

use std::collections::BTreeMap;
use std::fmt;
use std::fmt::Write as _;

use serde::ser::{Serialize, Serializer};

/// A JSON number, retained as an integer when the source token parses
/// as one and as a float otherwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// A number that fits in a signed 64-bit integer.
    Int(i64),
    /// Any other numeric value.
    Float(f64),
}

impl Number {
    /// The value as an `i64`, truncating floats toward zero.
    pub fn as_i64(&self) -> i64 {
        match *self {
            Number::Int(i) => i,
            Number::Float(f) => f as i64,
        }
    }

    /// The value as an `f64`.
    pub fn as_f64(&self) -> f64 {
        match *self {
            Number::Int(i) => i as f64,
            Number::Float(f) => f,
        }
    }
}

/// A dynamically-typed JSON value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// The `null` literal, and the result of parsing empty input.
    #[default]
    Null,
    /// `true` or `false`.
    Bool(bool),
    /// An integer or floating-point number.
    Number(Number),
    /// A string, or a bare token that parsed as neither a number nor a
    /// recognized literal (documented parser leniency).
    Str(String),
    /// An ordered sequence of values.
    Array(Vec<Value>),
    /// A key-value mapping with unique string keys.
    Object(BTreeMap<String, Value>),
}

impl Value {
    /// Returns true for `Value::Null`.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// The boolean payload, if this is a `Bool`.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// The numeric payload as `i64`, if this is a `Number`.
    /// Floats truncate toward zero.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Number(n) => Some(n.as_i64()),
            _ => None,
        }
    }

    /// The numeric payload as `f64`, if this is a `Number`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(n.as_f64()),
            _ => None,
        }
    }

    /// The string payload, if this is a `Str`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// The element sequence, if this is an `Array`.
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// The key-value mapping, if this is an `Object`.
    pub fn as_object(&self) -> Option<&BTreeMap<String, Value>> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Member lookup on an `Object`; `None` for absent keys and for
    /// non-object values.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_object().and_then(|map| map.get(key))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Number(Number::Int(i))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Number(Number::Float(f))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(true) => f.write_str("true"),
            Value::Bool(false) => f.write_str("false"),
            Value::Number(Number::Int(i)) => write!(f, "{i}"),
            Value::Number(Number::Float(x)) => write_float(f, *x),
            Value::Str(s) => write_escaped(f, s),
            Value::Array(items) => {
                f.write_char('[')?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_char(',')?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_char(']')
            }
            Value::Object(map) => {
                f.write_char('{')?;
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        f.write_char(',')?;
                    }
                    write_escaped(f, key)?;
                    f.write_char(':')?;
                    write!(f, "{value}")?;
                }
                f.write_char('}')
            }
        }
    }
}

/// Render a float as a valid JSON number token.
///
/// Whole-valued floats keep a trailing `.0` so they re-parse as floats;
/// non-finite values have no JSON representation and render as `null`.
fn write_float(f: &mut fmt::Formatter<'_>, x: f64) -> fmt::Result {
    if !x.is_finite() {
        return f.write_str("null");
    }
    if x.fract() == 0.0 && x.abs() < 1e15 {
        write!(f, "{x:.1}")
    } else {
        write!(f, "{x}")
    }
}

/// Write a string as a quoted, escaped JSON string token.
fn write_escaped(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    f.write_char('"')?;
    for c in s.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            '\u{0008}' => f.write_str("\\b")?,
            '\u{000C}' => f.write_str("\\f")?,
            c if (c as u32) < 0x20 => write!(f, "\\u{:04x}", c as u32)?,
            c => f.write_char(c)?,
        }
    }
    f.write_char('"')
}

impl Serialize for Number {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match *self {
            Number::Int(i) => serializer.serialize_i64(i),
            Number::Float(x) => serializer.serialize_f64(x),
        }
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(Number::Int(i)) => serializer.serialize_i64(*i),
            Value::Number(Number::Float(x)) => serializer.serialize_f64(*x),
            Value::Str(s) => serializer.serialize_str(s),
            Value::Array(items) => items.serialize(serializer),
            Value::Object(map) => map.serialize(serializer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obj(entries: &[(&str, Value)]) -> Value {
        Value::Object(
            entries
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect(),
        )
    }

    #[test]
    fn test_accessors_match_variants() {
        assert!(Value::Null.is_null());
        assert_eq!(Value::from(true).as_bool(), Some(true));
        assert_eq!(Value::from(42i64).as_i64(), Some(42));
        assert_eq!(Value::from(1.5).as_f64(), Some(1.5));
        assert_eq!(Value::from("x").as_str(), Some("x"));
        assert!(Value::Array(vec![]).as_array().is_some());
        assert!(obj(&[]).as_object().is_some());
    }

    #[test]
    fn test_accessors_reject_other_variants() {
        assert_eq!(Value::from("x").as_i64(), None);
        assert_eq!(Value::from(1i64).as_str(), None);
        assert_eq!(Value::Null.as_bool(), None);
        assert_eq!(Value::from(1i64).as_array(), None);
    }

    #[test]
    fn test_float_truncates_toward_zero() {
        assert_eq!(Number::Float(2.9).as_i64(), 2);
        assert_eq!(Number::Float(-2.9).as_i64(), -2);
    }

    #[test]
    fn test_get_on_object_and_non_object() {
        let v = obj(&[("a", Value::from(1i64))]);
        assert_eq!(v.get("a"), Some(&Value::from(1i64)));
        assert_eq!(v.get("b"), None);
        assert_eq!(Value::from(1i64).get("a"), None);
    }

    #[test]
    fn test_display_scalars() {
        assert_eq!(Value::Null.to_string(), "null");
        assert_eq!(Value::from(true).to_string(), "true");
        assert_eq!(Value::from(false).to_string(), "false");
        assert_eq!(Value::from(-7i64).to_string(), "-7");
        assert_eq!(Value::from(1.5).to_string(), "1.5");
    }

    #[test]
    fn test_display_whole_float_keeps_point() {
        assert_eq!(Value::from(1.0).to_string(), "1.0");
    }

    #[test]
    fn test_display_non_finite_float_is_null() {
        assert_eq!(Value::from(f64::INFINITY).to_string(), "null");
        assert_eq!(Value::from(f64::NAN).to_string(), "null");
    }

    #[test]
    fn test_display_string_escapes() {
        let v = Value::from("a\"b\\c\nd");
        assert_eq!(v.to_string(), r#""a\"b\\c\nd""#);
    }

    #[test]
    fn test_display_control_char_uses_unicode_escape() {
        let v = Value::from("x\u{0001}");
        assert_eq!(v.to_string(), "\"x\\u0001\"");
    }

    #[test]
    fn test_display_nested_compact() {
        let v = obj(&[
            ("b", Value::Array(vec![Value::from(1i64), Value::from(2i64)])),
            ("a", Value::from("x")),
        ]);
        // BTreeMap renders in sorted key order.
        assert_eq!(v.to_string(), r#"{"a":"x","b":[1,2]}"#);
    }

    #[test]
    fn test_serde_serialization_agrees_with_display() {
        // serde_json acts as the oracle for the int/string/bool subset,
        // where both writers must produce identical compact output.
        let v = obj(&[
            ("nums", Value::Array(vec![Value::from(1i64), Value::from(-2i64)])),
            ("s", Value::from("hi\n")),
            ("t", Value::from(true)),
            ("z", Value::Null),
        ]);
        let via_serde = serde_json::to_string(&v).expect("serializable");
        assert_eq!(via_serde, v.to_string());
    }
}
