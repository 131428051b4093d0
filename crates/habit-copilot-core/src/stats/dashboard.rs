use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::calendar::{recent_days, CalendarDay};
use crate::habit::Habit;
use crate::streak::{current_streak, StreakSummary};

/// Figures across all habits for one day.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total: usize,
    pub done_today: usize,
    /// Percentage of habits done today, rounded to a whole number.
    pub completion_rate: u32,
    /// Highest current streak of any habit.
    pub best_streak: u32,
    /// Mean current streak, rounded to one decimal.
    pub avg_streak: f64,
}

/// One day in the recent-history strip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayMark {
    pub day: CalendarDay,
    pub done: bool,
}

/// A habit as listed for `today`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HabitRow {
    pub id: String,
    pub name: String,
    pub color: String,
    pub done_today: bool,
    pub streak: StreakSummary,
    pub recent: Vec<DayMark>,
}

pub fn dashboard_stats(habits: &[Habit], today: CalendarDay) -> DashboardStats {
    let total = habits.len();
    if total == 0 {
        return DashboardStats::default();
    }

    let done_today = habits.iter().filter(|h| h.is_done_on(today)).count();
    let completion_rate = (done_today as f64 / total as f64 * 100.0).round() as u32;

    let streaks: Vec<u32> = habits
        .iter()
        .map(|h| current_streak(&h.done_dates, today))
        .collect();
    let best_streak = streaks.iter().copied().max().unwrap_or(0);
    let sum: u64 = streaks.iter().map(|&s| u64::from(s)).sum();
    let avg_streak = (sum as f64 / total as f64 * 10.0).round() / 10.0;

    DashboardStats {
        total,
        done_today,
        completion_rate,
        best_streak,
        avg_streak,
    }
}

/// Row for one habit with a `window`-day history strip ending today.
pub fn habit_row(habit: &Habit, today: CalendarDay, window: usize) -> HabitRow {
    let done: HashSet<&str> = habit.done_dates.iter().map(String::as_str).collect();
    let recent = recent_days(today, window)
        .into_iter()
        .map(|day| DayMark {
            done: done.contains(day.to_string().as_str()),
            day,
        })
        .collect();

    HabitRow {
        id: habit.id.clone(),
        name: habit.name.clone(),
        color: habit.color.clone(),
        done_today: habit.is_done_on(today),
        streak: habit.streaks(today),
        recent,
    }
}

pub fn habit_rows(habits: &[Habit], today: CalendarDay, window: usize) -> Vec<HabitRow> {
    habits.iter().map(|h| habit_row(h, today, window)).collect()
}
