//! The durable habit slot.
//!
//! The whole collection is stored as one serialized value under
//! [`STORAGE_KEY`]. There is no partial update: callers load everything,
//! mutate in memory and save everything. A single writer is assumed.

use serde_json::Value;
use tracing::{info, warn};

use crate::error::Result;
use crate::habit::Habit;
use crate::record::{normalize_habit_list, serialize_for_persistence};

use super::Database;

/// Key of the slot holding the habit collection.
pub const STORAGE_KEY: &str = "habit-copilot:v1";

/// Read-whole/write-whole access to the habit collection.
pub trait HabitStore {
    /// Load every habit.
    ///
    /// A missing or corrupted slot reads as an empty collection; only
    /// storage failures are errors.
    fn load_habits(&self) -> Result<Vec<Habit>>;

    /// Replace the stored collection with `habits`.
    fn save_habits(&self, habits: &[Habit]) -> Result<()>;
}

impl HabitStore for Database {
    fn load_habits(&self) -> Result<Vec<Habit>> {
        let Some(raw) = self.kv_get(STORAGE_KEY)? else {
            return Ok(Vec::new());
        };
        match serde_json::from_str::<Value>(&raw) {
            Ok(value) => Ok(normalize_habit_list(&value)),
            Err(e) => {
                warn!(error = %e, "stored habits are not valid JSON, starting empty");
                Ok(Vec::new())
            }
        }
    }

    fn save_habits(&self, habits: &[Habit]) -> Result<()> {
        let text = serialize_for_persistence(habits)?;
        self.kv_set(STORAGE_KEY, &text)?;
        info!(count = habits.len(), "saved habits");
        Ok(())
    }
}
