//! # Contract Records — Schema Mapping for Player Contracts
//!
//! Maps a generic value tree into [`ContractRecord`], the typed form of
//! a `gg.v1` contract artifact. Mapping is total: it never fails, it
//! defaults, and it drops malformed sub-array elements silently. The
//! domain checks live in [`crate::validate`], invoked separately by the
//! consumer.
//!
//! ## Forward Compatibility
//!
//! Top-level keys outside the known set are preserved verbatim in
//! [`ContractRecord::extra`], so a newer pipeline stage can attach
//! fields this build does not understand without losing them on the
//! way through.

use std::collections::BTreeMap;

use serde::Serialize;

use ggd_json::{coerce, Value};

use crate::fields::{get_i64, get_text, object_elements};

/// The single schema tag this build accepts.
pub const SUPPORTED_API_VERSION: &str = "gg.v1";

/// Top-level keys routed to typed fields; everything else goes to `extra`.
const KNOWN_KEYS: [&str; 8] = [
    "apiVersion",
    "startYear",
    "endYear",
    "terms",
    "guarantees",
    "incentives",
    "flags",
    "notes",
];

/// One contract year. Monetary fields are minor currency units.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YearTerm {
    pub year: i64,
    pub base: i64,
    pub signing_prorated: i64,
    pub roster_bonus: i64,
    pub workout_bonus: i64,
    pub guaranteed_base: i64,
}

/// A guarantee attached to a contract. The wire key for `kind` is
/// `"type"`, renamed because `type` is reserved in Rust.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Guarantee {
    #[serde(rename = "type")]
    pub kind: String,
    pub through_year: i64,
}

/// A performance incentive. `amount` is minor currency units; the wire
/// key for `kind` is `"type"`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Incentive {
    #[serde(rename = "type")]
    pub kind: String,
    pub amount: i64,
    pub metric: String,
    pub threshold: String,
}

/// A fully mapped player contract.
///
/// Constructed fresh per load call, owned solely by the caller; there
/// is no cross-call identity or cache.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractRecord {
    /// Schema tag; validation requires [`SUPPORTED_API_VERSION`].
    pub api_version: String,
    pub start_year: i64,
    pub end_year: i64,
    /// One entry per contract year. Must be non-empty to validate.
    pub terms: Vec<YearTerm>,
    pub guarantees: Vec<Guarantee>,
    pub incentives: Vec<Incentive>,
    pub flags: BTreeMap<String, bool>,
    pub notes: Vec<String>,
    /// Unrecognized top-level keys, preserved verbatim.
    pub extra: BTreeMap<String, Value>,
}

impl ContractRecord {
    /// Map a generic value tree into a contract record.
    ///
    /// Never fails: a non-object input yields a fully defaulted record,
    /// and wrong-typed fields fall back to their zero values through
    /// the [`ggd_json::coerce`] rules.
    pub fn from_value(value: &Value) -> Self {
        map_contract(value)
    }
}

fn map_contract(value: &Value) -> ContractRecord {
    let mut record = ContractRecord::default();
    let Some(obj) = value.as_object() else {
        return record;
    };

    record.api_version = get_text(obj, "apiVersion");
    record.start_year = get_i64(obj, "startYear");
    record.end_year = get_i64(obj, "endYear");
    record.terms = map_terms(obj);
    record.guarantees = map_guarantees(obj);
    record.incentives = map_incentives(obj);
    record.flags = map_flags(obj);
    record.notes = map_notes(obj);

    for (key, val) in obj {
        if !KNOWN_KEYS.contains(&key.as_str()) {
            record.extra.insert(key.clone(), val.clone());
        }
    }
    record
}

fn map_terms(obj: &BTreeMap<String, Value>) -> Vec<YearTerm> {
    object_elements(obj, "terms")
        .map(|term| YearTerm {
            year: get_i64(term, "year"),
            base: get_i64(term, "base"),
            signing_prorated: get_i64(term, "signingProrated"),
            roster_bonus: get_i64(term, "rosterBonus"),
            workout_bonus: get_i64(term, "workoutBonus"),
            guaranteed_base: get_i64(term, "guaranteedBase"),
        })
        .collect()
}

fn map_guarantees(obj: &BTreeMap<String, Value>) -> Vec<Guarantee> {
    object_elements(obj, "guarantees")
        .map(|g| Guarantee {
            kind: get_text(g, "type"),
            through_year: get_i64(g, "throughYear"),
        })
        .collect()
}

fn map_incentives(obj: &BTreeMap<String, Value>) -> Vec<Incentive> {
    object_elements(obj, "incentives")
        .map(|inc| Incentive {
            kind: get_text(inc, "type"),
            amount: get_i64(inc, "amount"),
            metric: get_text(inc, "metric"),
            threshold: get_text(inc, "threshold"),
        })
        .collect()
}

fn map_flags(obj: &BTreeMap<String, Value>) -> BTreeMap<String, bool> {
    obj.get("flags")
        .and_then(Value::as_object)
        .map(|flags| {
            flags
                .iter()
                .map(|(key, val)| (key.clone(), coerce::to_bool(val)))
                .collect()
        })
        .unwrap_or_default()
}

fn map_notes(obj: &BTreeMap<String, Value>) -> Vec<String> {
    // Notes are kept strictly: only string elements survive, with no
    // coercion of other shapes.
    obj.get("notes")
        .and_then(Value::as_array)
        .map(|notes| {
            notes
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}
