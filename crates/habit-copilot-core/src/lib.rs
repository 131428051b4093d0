//! # Habit Copilot Core Library
//!
//! This library provides the core logic for Habit Copilot, a local habit
//! tracker. Users define habits, mark days as done and read back streaks;
//! the whole collection lives in one local slot and can be exported and
//! imported as JSON. The CLI binary is a thin layer over this crate.
//!
//! ## Architecture
//!
//! - **Calendar**: local-calendar `YYYY-MM-DD` days and day arithmetic
//! - **Streak engine**: current and longest runs of completed days
//! - **Record store**: tolerant normalization of stored and imported JSON,
//!   plus the export envelope
//! - **Storage**: SQLite key-value slot and TOML configuration
//!
//! ## Key Components
//!
//! - [`CalendarDay`]: canonical calendar-day identifier
//! - [`Habit`]: one tracked habit and its completed days
//! - [`HabitStore`]: read-whole/write-whole access to the collection
//! - [`normalize_habit_list`]: turns any parsed JSON into valid records
//! - [`Config`]: application configuration management

pub mod calendar;
pub mod error;
pub mod habit;
pub mod record;
pub mod stats;
pub mod storage;
pub mod streak;

pub use calendar::{add_days, now_millis, recent_days, to_calendar_day, today, CalendarDay};
pub use error::{ConfigError, CoreError, DatabaseError, ImportError, ValidationError};
pub use habit::{Habit, DEFAULT_COLOR, PRESET_COLORS};
pub use record::{
    normalize_habit_list, normalize_habit_list_at, parse_exported_payload, serialize_for_export,
    serialize_for_persistence, ExportEnvelope,
};
pub use stats::{dashboard_stats, habit_rows, DashboardStats, HabitRow};
pub use storage::{Config, Database, HabitStore};
pub use streak::{current_streak, longest_streak, StreakSummary};
