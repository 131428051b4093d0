//! Canonical calendar-day identifier.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A calendar date rendered as `YYYY-MM-DD`.
///
/// Years are kept within 0000..=9999 so the rendered form is always ten
/// characters and ordering is the same as lexicographic string ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CalendarDay(NaiveDate);

const MIN_YEAR: i32 = 0;
const MAX_YEAR: i32 = 9999;

impl CalendarDay {
    /// Build from year/month/day, `None` if the date does not exist or the
    /// year has more than four digits.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return None;
        }
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Earliest representable day, `0000-01-01`.
    pub fn min() -> Self {
        Self(NaiveDate::from_ymd_opt(MIN_YEAR, 1, 1).unwrap_or(NaiveDate::MIN))
    }

    /// Latest representable day, `9999-12-31`.
    pub fn max() -> Self {
        Self(NaiveDate::from_ymd_opt(MAX_YEAR, 12, 31).unwrap_or(NaiveDate::MAX))
    }

    /// The day for `date`, saturated to the representable range.
    pub fn clamped(date: NaiveDate) -> Self {
        Self(date).clamp(Self::min(), Self::max())
    }

    /// Parse the canonical zero-padded form only.
    ///
    /// `2024-1-5`, `2024-02-30` and anything not exactly ten characters long
    /// are rejected.
    pub fn parse(s: &str) -> Option<Self> {
        let b = s.as_bytes();
        if b.len() != 10 || b[4] != b'-' || b[7] != b'-' {
            return None;
        }
        let digits = [0, 1, 2, 3, 5, 6, 8, 9];
        if !digits.iter().all(|&i| b[i].is_ascii_digit()) {
            return None;
        }
        let year = s[0..4].parse().ok()?;
        let month = s[5..7].parse().ok()?;
        let day = s[8..10].parse().ok()?;
        Self::from_ymd(year, month, day)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for CalendarDay {
    fn from(date: NaiveDate) -> Self {
        Self::clamped(date)
    }
}

impl fmt::Display for CalendarDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.0.year(),
            self.0.month(),
            self.0.day()
        )
    }
}

impl FromStr for CalendarDay {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ValidationError::InvalidDay(s.to_string()))
    }
}

impl TryFrom<String> for CalendarDay {
    type Error = ValidationError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<CalendarDay> for String {
    fn from(day: CalendarDay) -> Self {
        day.to_string()
    }
}

impl PartialEq<str> for CalendarDay {
    fn eq(&self, other: &str) -> bool {
        CalendarDay::parse(other).is_some_and(|d| d == *self)
    }
}
