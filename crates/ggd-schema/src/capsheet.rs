//! # Capsheet Records — Schema Mapping for Team Cap Sheets
//!
//! Maps a generic value tree into [`CapsheetRecord`], the typed form of
//! a `data/cap/capsheet_<year>.json` artifact. Cap sheets are trusted
//! output of the upstream pipeline stage: the mapper performs no
//! validation beyond the structural projection, and the totals row is
//! carried as-is, never recomputed. There is deliberately no validator
//! for this record kind.

use std::collections::BTreeMap;

use serde::Serialize;

use ggd_json::Value;

use crate::fields::{get_i64, get_text, object_elements};

/// One cap-sheet line. Monetary fields are minor currency units;
/// `cap_hit` and `dead_cap` arrive already computed upstream.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CapRow {
    pub player_name: String,
    pub team_abbr: String,
    pub year: i64,
    pub base: i64,
    pub signing_prorated: i64,
    pub roster_bonus: i64,
    pub workout_bonus: i64,
    pub cap_hit: i64,
    pub dead_cap: i64,
}

/// A fully mapped team cap sheet.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CapsheetRecord {
    pub rows: Vec<CapRow>,
    /// Aggregate row as supplied upstream, when present.
    pub totals: Option<CapRow>,
}

impl CapsheetRecord {
    /// Map a generic value tree into a capsheet record.
    ///
    /// Never fails: non-object input yields an empty sheet, non-object
    /// row elements are dropped, and a wrong-typed `totals` is treated
    /// as absent.
    pub fn from_value(value: &Value) -> Self {
        let mut record = CapsheetRecord::default();
        let Some(obj) = value.as_object() else {
            return record;
        };
        record.rows = object_elements(obj, "rows").map(map_row).collect();
        record.totals = obj.get("totals").and_then(Value::as_object).map(map_row);
        record
    }
}

fn map_row(row: &BTreeMap<String, Value>) -> CapRow {
    CapRow {
        player_name: get_text(row, "playerName"),
        team_abbr: get_text(row, "teamAbbr"),
        year: get_i64(row, "year"),
        base: get_i64(row, "base"),
        signing_prorated: get_i64(row, "signingProrated"),
        roster_bonus: get_i64(row, "rosterBonus"),
        workout_bonus: get_i64(row, "workoutBonus"),
        cap_hit: get_i64(row, "capHit"),
        dead_cap: get_i64(row, "deadCap"),
    }
}
