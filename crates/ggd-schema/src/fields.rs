//! Shared field-extraction helpers for the record mappers. Absent keys
//! take the field's zero value; present keys go through the lenient
//! coercion rules.

use std::collections::BTreeMap;

use ggd_json::{coerce, Value};

pub(crate) fn get_i64(obj: &BTreeMap<String, Value>, key: &str) -> i64 {
    obj.get(key).map(coerce::to_i64).unwrap_or(0)
}

pub(crate) fn get_text(obj: &BTreeMap<String, Value>, key: &str) -> String {
    obj.get(key).map(coerce::to_text).unwrap_or_default()
}

/// Iterate the object-shaped elements of an array-valued key. A key
/// that is absent or not an array yields nothing; elements that are
/// not objects are skipped.
pub(crate) fn object_elements<'a>(
    obj: &'a BTreeMap<String, Value>,
    key: &str,
) -> impl Iterator<Item = &'a BTreeMap<String, Value>> {
    obj.get(key)
        .and_then(Value::as_array)
        .unwrap_or(&[])
        .iter()
        .filter_map(Value::as_object)
}
