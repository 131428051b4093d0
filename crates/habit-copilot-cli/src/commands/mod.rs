pub mod config;
pub mod habit;
pub mod stats;
pub mod transfer;

use habit_copilot_core::{CalendarDay, Habit};

/// Parse a `--date` argument, defaulting to today.
pub fn day_or_today(date: Option<&str>) -> Result<CalendarDay, Box<dyn std::error::Error>> {
    match date {
        Some(d) => Ok(d.parse::<CalendarDay>()?),
        None => Ok(habit_copilot_core::today()),
    }
}

/// One-line text form of a habit for confirmations.
pub fn describe(habit: &Habit) -> String {
    format!("{} [{}]", habit.name, short_id(&habit.id))
}

pub fn short_id(id: &str) -> &str {
    id.get(..8).unwrap_or(id)
}
