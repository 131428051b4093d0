//! Streak engine.
//!
//! Completed days come in as stored identifiers. Anything that is not a
//! canonical `YYYY-MM-DD` day is ignored here: it can never equal a real
//! day, so it never extends or starts a run. Duplicates collapse because
//! the days are gathered into a set first.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::calendar::{add_days, CalendarDay};

/// Current and longest streak of one habit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StreakSummary {
    pub current: u32,
    pub longest: u32,
}

/// Collect the canonical days out of stored identifiers.
pub fn completed_days<I>(done_days: I) -> BTreeSet<CalendarDay>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    done_days
        .into_iter()
        .filter_map(|s| CalendarDay::parse(s.as_ref()))
        .collect()
}

/// Consecutive completed days ending at `reference`.
///
/// An unfinished `reference` day does not break the streak; counting then
/// starts from the day before.
pub fn current_streak<I>(done_days: I, reference: CalendarDay) -> u32
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    current_in(&completed_days(done_days), reference)
}

fn current_in(days: &BTreeSet<CalendarDay>, reference: CalendarDay) -> u32 {
    let mut cursor = reference;
    if !days.contains(&cursor) {
        cursor = add_days(cursor, -1);
    }

    let mut streak = 0;
    while days.contains(&cursor) {
        streak += 1;
        let prev = add_days(cursor, -1);
        if prev == cursor {
            // bottom of the calendar
            break;
        }
        cursor = prev;
    }
    streak
}

/// Longest run of consecutive completed days anywhere in the history.
pub fn longest_streak<I>(done_days: I) -> u32
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    longest_in(&completed_days(done_days))
}

fn longest_in(days: &BTreeSet<CalendarDay>) -> u32 {
    let mut best = 0;
    let mut run = 0;
    let mut prev: Option<CalendarDay> = None;

    for &day in days {
        run = match prev {
            Some(p) if add_days(p, 1) == day => run + 1,
            _ => 1,
        };
        best = best.max(run);
        prev = Some(day);
    }
    best
}

/// Both streak figures for one history.
pub fn summarize<I>(done_days: I, today: CalendarDay) -> StreakSummary
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let days = completed_days(done_days);
    StreakSummary {
        current: current_in(&days, today),
        longest: longest_in(&days),
    }
}
