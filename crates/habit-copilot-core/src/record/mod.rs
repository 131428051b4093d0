//! Tolerant reading and writing of habit collections.
//!
//! Reading never fails on shape problems. A top-level value that is neither
//! a record array nor an object with a `habits` array reads as no habits; a
//! record without a string `id` and `name` is dropped; other bad fields get
//! defaults. The only failure is text that is not JSON at all.

pub mod envelope;
pub mod fields;

pub use envelope::{
    export_file_name, serialize_for_export, serialize_for_export_at, serialize_for_persistence,
    ExportEnvelope, APP_TAG, SCHEMA_VERSION,
};
pub use fields::{Field, FieldError};

use std::collections::BTreeSet;

use serde_json::Value;
use tracing::{debug, warn};

use crate::calendar::now_millis;
use crate::error::ImportError;
use crate::habit::{Habit, DEFAULT_COLOR};

/// Normalize any parsed value into habit records, defaulting `createdAt`
/// to the current instant.
pub fn normalize_habit_list(raw: &Value) -> Vec<Habit> {
    normalize_habit_list_at(raw, now_millis())
}

/// Same as [`normalize_habit_list`] with an explicit `createdAt` default.
pub fn normalize_habit_list_at(raw: &Value, now_ms: i64) -> Vec<Habit> {
    let Some(candidates) = candidate_list(raw) else {
        debug!("habit payload has no record list, reading as empty");
        return Vec::new();
    };

    candidates
        .iter()
        .enumerate()
        .filter_map(|(idx, candidate)| match normalize_record(candidate, now_ms) {
            Ok(habit) => Some(habit),
            Err(reason) => {
                debug!(index = idx, %reason, "dropping habit record");
                None
            }
        })
        .collect()
}

/// Decode import text and normalize it.
///
/// # Errors
/// Returns [`ImportError::Decode`] if the text is not well-formed JSON.
pub fn parse_exported_payload(raw_text: &str) -> Result<Vec<Habit>, ImportError> {
    let value: Value = serde_json::from_str(raw_text)?;
    Ok(normalize_habit_list(&value))
}

fn candidate_list(raw: &Value) -> Option<&Vec<Value>> {
    match raw {
        Value::Array(items) => Some(items),
        Value::Object(obj) => {
            if let Some(version) = obj.get("version").and_then(Value::as_u64) {
                if version > u64::from(SCHEMA_VERSION) {
                    warn!(version, "reading export from a newer schema version");
                }
            }
            obj.get("habits").and_then(Value::as_array)
        }
        _ => None,
    }
}

/// Build one record, or report why the candidate was rejected.
pub fn normalize_record(candidate: &Value, now_ms: i64) -> Result<Habit, FieldError> {
    let obj = fields::as_object(candidate)?;

    let id = fields::string_field(obj, "id")?;
    let name = fields::string_field(obj, "name")?;

    let color = fields::string_field(obj, "color").unwrap_or_else(|_| DEFAULT_COLOR.to_string());
    let created_at = fields::timestamp_field(obj, "createdAt").unwrap_or(now_ms);
    let done_dates: BTreeSet<String> = fields::string_list_field(obj, "doneDates")
        .unwrap_or_default()
        .into_iter()
        .collect();

    Ok(Habit {
        id,
        name,
        color,
        created_at,
        done_dates: done_dates.into_iter().collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const NOW: i64 = 1_700_000_000_000;

    #[test]
    fn bare_array_is_accepted() {
        let raw = json!([{"id": "a", "name": "x"}]);
        let habits = normalize_habit_list_at(&raw, NOW);
        assert_eq!(habits.len(), 1);
        assert_eq!(habits[0].id, "a");
    }

    #[test]
    fn envelope_is_accepted() {
        let raw = json!({"app": "habit-copilot", "version": 1, "exportedAt": 1,
                         "habits": [{"id": "a", "name": "x"}]});
        assert_eq!(normalize_habit_list_at(&raw, NOW).len(), 1);
    }

    #[test]
    fn other_shapes_read_as_empty() {
        for raw in [
            json!(null),
            json!(3),
            json!("habits"),
            json!({}),
            json!({"habits": "nope"}),
            json!({"habits": {"id": "a", "name": "x"}}),
        ] {
            assert!(normalize_habit_list_at(&raw, NOW).is_empty(), "{raw}");
        }
    }

    #[test]
    fn defaults_fill_missing_optional_fields() {
        let raw = json!([{"id": "a", "name": "x"}]);
        let habit = &normalize_habit_list_at(&raw, NOW)[0];
        assert_eq!(habit.color, DEFAULT_COLOR);
        assert_eq!(habit.created_at, NOW);
        assert!(habit.done_dates.is_empty());
    }

    #[test]
    fn wrong_typed_optional_fields_are_defaulted() {
        let raw = json!([{"id": "a", "name": "x", "color": 7, "createdAt": "yesterday",
                          "doneDates": "2024-01-01"}]);
        let habit = &normalize_habit_list_at(&raw, NOW)[0];
        assert_eq!(habit.color, DEFAULT_COLOR);
        assert_eq!(habit.created_at, NOW);
        assert!(habit.done_dates.is_empty());
    }

    #[test]
    fn valid_fields_are_kept() {
        let raw = json!([{"id": "a", "name": "x", "color": "not-a-color", "createdAt": 5,
                          "doneDates": ["2024-01-02", "2024-01-01"]}]);
        let habit = &normalize_habit_list_at(&raw, NOW)[0];
        assert_eq!(habit.color, "not-a-color");
        assert_eq!(habit.created_at, 5);
        assert_eq!(habit.done_dates, ["2024-01-01", "2024-01-02"]);
    }

    #[test]
    fn mixed_entries_keep_only_valid_records() {
        let raw = json!([
            {"id": "a", "name": "x"},
            {"foo": "bar"},
            {"id": "b", "name": "y", "doneDates": ["z", "2024-01-01", 5]},
        ]);
        let habits = normalize_habit_list_at(&raw, NOW);
        assert_eq!(habits.len(), 2);
        assert_eq!(habits[1].id, "b");
        assert_eq!(habits[1].done_dates, ["2024-01-01", "z"]);
    }

    #[test]
    fn required_fields_must_be_strings() {
        let raw = json!([
            {"id": 1, "name": "x"},
            {"id": "a", "name": null},
            {"id": "b"},
            "c",
            [],
        ]);
        assert!(normalize_habit_list_at(&raw, NOW).is_empty());
    }

    #[test]
    fn duplicate_days_collapse() {
        let raw = json!([{"id": "a", "name": "x",
                          "doneDates": ["2024-01-01", "2024-01-01", "2023-12-31"]}]);
        let habit = &normalize_habit_list_at(&raw, NOW)[0];
        assert_eq!(habit.done_dates, ["2023-12-31", "2024-01-01"]);
    }

    #[test]
    fn rejection_reason_names_the_field() {
        let err = normalize_record(&json!({"id": "a"}), NOW).unwrap_err();
        assert_eq!(err, FieldError::Missing { field: "name" });
    }

    #[test]
    fn undecodable_text_is_an_error_not_a_panic() {
        assert!(matches!(
            parse_exported_payload("not json"),
            Err(ImportError::Decode(_))
        ));
        assert!(parse_exported_payload("").is_err());
    }

    #[test]
    fn decodable_text_with_wrong_shape_is_empty() {
        assert_eq!(parse_exported_payload("{\"x\": 1}").unwrap(), Vec::new());
        assert_eq!(parse_exported_payload("null").unwrap(), Vec::new());
    }

    #[test]
    fn newer_schema_versions_are_still_read() {
        let raw = json!({"version": 7, "habits": [{"id": "a", "name": "x"}]});
        assert_eq!(normalize_habit_list_at(&raw, NOW).len(), 1);
    }
}
