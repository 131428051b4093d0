//! Export envelope and the two serialized forms of the collection.

use serde::{Deserialize, Serialize};

use crate::calendar::{now_millis, CalendarDay};
use crate::error::Result;
use crate::habit::Habit;

/// Application tag written into every export.
pub const APP_TAG: &str = "habit-copilot";

/// Current export schema version.
pub const SCHEMA_VERSION: u32 = 1;

/// Versioned wrapper used for user-facing exports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportEnvelope {
    pub app: String,
    pub version: u32,
    /// Epoch milliseconds.
    pub exported_at: i64,
    pub habits: Vec<Habit>,
}

impl ExportEnvelope {
    /// Export file contents, indented by two spaces.
    pub fn to_pretty_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Wrap records for export, stamped with the current instant.
pub fn serialize_for_export(records: &[Habit]) -> ExportEnvelope {
    serialize_for_export_at(records, now_millis())
}

pub fn serialize_for_export_at(records: &[Habit], exported_at: i64) -> ExportEnvelope {
    ExportEnvelope {
        app: APP_TAG.to_string(),
        version: SCHEMA_VERSION,
        exported_at,
        habits: records.to_vec(),
    }
}

/// Durable form: the bare record array, no envelope.
pub fn serialize_for_persistence(records: &[Habit]) -> Result<String> {
    Ok(serde_json::to_string(records)?)
}

/// Suggested file name for an export made on `today`.
pub fn export_file_name(today: CalendarDay) -> String {
    format!("{APP_TAG}-{today}.json")
}
