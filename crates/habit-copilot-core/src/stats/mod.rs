//! Statistics module for Habit Copilot
//!
//! Derives the dashboard figures and per-habit rows shown to the user from
//! the habit collection and the current day.

mod dashboard;

pub use dashboard::{dashboard_stats, habit_row, habit_rows, DashboardStats, DayMark, HabitRow};
