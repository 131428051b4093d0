//! Habit records and whole-collection mutations.
//!
//! The collection is always handled as a whole: load it, change it with the
//! functions here, then write every record back through a
//! [`HabitStore`](crate::storage::HabitStore).

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calendar::CalendarDay;
use crate::error::{CoreError, Result, ValidationError};
use crate::streak::{self, StreakSummary};

/// Accent color used when none is given or a stored one is unusable.
pub const DEFAULT_COLOR: &str = "#22c55e";

/// Accent colors offered when creating a habit.
pub const PRESET_COLORS: [&str; 6] = [
    "#22c55e", // green
    "#3b82f6", // blue
    "#a855f7", // purple
    "#f97316", // orange
    "#ef4444", // red
    "#14b8a6", // teal
];

/// One tracked habit.
///
/// `done_dates` holds day identifiers sorted ascending without duplicates.
/// Entries are kept as stored strings; only canonical days take part in
/// streaks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    pub id: String,
    pub name: String,
    pub color: String,
    /// Epoch milliseconds.
    pub created_at: i64,
    pub done_dates: Vec<String>,
}

fn validated_name(name: &str) -> Result<String, ValidationError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    Ok(name.to_string())
}

impl Habit {
    /// Create a habit with a fresh id and no completed days.
    pub fn new(
        name: &str,
        color: impl Into<String>,
        created_at: i64,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            id: Uuid::new_v4().to_string(),
            name: validated_name(name)?,
            color: color.into(),
            created_at,
            done_dates: Vec::new(),
        })
    }

    /// Change the editable fields. `id` and `created_at` never change.
    pub fn edit(&mut self, name: Option<&str>, color: Option<&str>) -> Result<(), ValidationError> {
        if let Some(name) = name {
            self.name = validated_name(name)?;
        }
        if let Some(color) = color {
            self.color = color.to_string();
        }
        Ok(())
    }

    /// Flip completion of `day`. Returns whether the day is now done.
    pub fn toggle_done(&mut self, day: CalendarDay) -> bool {
        let mut set: BTreeSet<String> = self.done_dates.drain(..).collect();
        let key = day.to_string();
        let done = if set.remove(&key) {
            false
        } else {
            set.insert(key);
            true
        };
        self.done_dates = set.into_iter().collect();
        done
    }

    pub fn is_done_on(&self, day: CalendarDay) -> bool {
        self.done_dates.iter().any(|d| day == **d)
    }

    pub fn streaks(&self, today: CalendarDay) -> StreakSummary {
        streak::summarize(&self.done_dates, today)
    }
}

/// Index of the habit whose id equals `key` or uniquely starts with it.
pub fn find_habit(habits: &[Habit], key: &str) -> Result<usize> {
    if let Some(idx) = habits.iter().position(|h| h.id == key) {
        return Ok(idx);
    }
    if key.is_empty() {
        return Err(CoreError::HabitNotFound(key.to_string()));
    }

    let matches: Vec<usize> = habits
        .iter()
        .enumerate()
        .filter(|(_, h)| h.id.starts_with(key))
        .map(|(i, _)| i)
        .collect();

    match matches.as_slice() {
        [idx] => Ok(*idx),
        [] => Err(CoreError::HabitNotFound(key.to_string())),
        many => Err(CoreError::AmbiguousHabitId {
            prefix: key.to_string(),
            matches: many.len(),
        }),
    }
}

/// Newest habits are listed first.
pub fn add_habit(habits: &mut Vec<Habit>, habit: Habit) {
    habits.insert(0, habit);
}

pub fn edit_habit<'a>(
    habits: &'a mut [Habit],
    key: &str,
    name: Option<&str>,
    color: Option<&str>,
) -> Result<&'a Habit> {
    let idx = find_habit(habits, key)?;
    habits[idx].edit(name, color)?;
    Ok(&habits[idx])
}

/// Toggle `day` on the matching habit. Returns whether the day is now done.
pub fn toggle_habit(habits: &mut [Habit], key: &str, day: CalendarDay) -> Result<bool> {
    let idx = find_habit(habits, key)?;
    Ok(habits[idx].toggle_done(day))
}

/// Remove the matching habit for good and hand it back.
pub fn delete_habit(habits: &mut Vec<Habit>, key: &str) -> Result<Habit> {
    let idx = find_habit(habits, key)?;
    Ok(habits.remove(idx))
}
