//! Local-calendar day arithmetic.
//!
//! A day is derived from the calendar fields of an instant in its own time
//! zone. For `DateTime<Local>` that means the user's wall clock, so shortly
//! after local midnight "today" is already the new day even where UTC is
//! still on the previous one.
//!
//! [`add_days`] is the only place days are shifted; the streak engine walks
//! through it rather than doing its own date math.

mod day;

pub use day::CalendarDay;

use chrono::{DateTime, Days, Local, NaiveDate, TimeZone, Utc};

/// Calendar day of `instant` in the instant's own time zone.
pub fn to_calendar_day<Tz: TimeZone>(instant: &DateTime<Tz>) -> CalendarDay {
    CalendarDay::from(instant.date_naive())
}

/// Today according to the local wall clock.
pub fn today() -> CalendarDay {
    to_calendar_day(&Local::now())
}

/// Current instant in epoch milliseconds.
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// The day `delta` days after `day` (before, when negative).
///
/// Month lengths and leap years follow the proleptic Gregorian calendar.
/// Results outside 0000-01-01..=9999-12-31 saturate at those ends.
pub fn add_days(day: CalendarDay, delta: i64) -> CalendarDay {
    let date = day.date();
    let shifted = if delta >= 0 {
        date.checked_add_days(Days::new(delta.unsigned_abs()))
            .unwrap_or(NaiveDate::MAX)
    } else {
        date.checked_sub_days(Days::new(delta.unsigned_abs()))
            .unwrap_or(NaiveDate::MIN)
    };
    CalendarDay::clamped(shifted)
}

/// The `count` days ending at `today`, oldest first.
pub fn recent_days(today: CalendarDay, count: usize) -> Vec<CalendarDay> {
    (0..count as i64)
        .rev()
        .map(|back| add_days(today, -back))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn day(s: &str) -> CalendarDay {
        CalendarDay::parse(s).unwrap()
    }

    #[test]
    fn leap_year_rollover() {
        assert_eq!(add_days(day("2024-02-28"), 1), day("2024-02-29"));
        assert_eq!(add_days(day("2023-02-28"), 1), day("2023-03-01"));
        assert_eq!(add_days(day("2024-03-01"), -1), day("2024-02-29"));
    }

    #[test]
    fn month_and_year_rollover() {
        assert_eq!(add_days(day("2024-04-30"), 1), day("2024-05-01"));
        assert_eq!(add_days(day("2024-12-31"), 1), day("2025-01-01"));
        assert_eq!(add_days(day("2025-01-01"), -1), day("2024-12-31"));
        assert_eq!(add_days(day("2024-01-31"), 30), day("2024-03-01"));
    }

    #[test]
    fn zero_delta_is_identity() {
        assert_eq!(add_days(day("2024-06-15"), 0), day("2024-06-15"));
    }

    #[test]
    fn saturates_instead_of_overflowing() {
        assert_eq!(add_days(day("2024-06-15"), i64::MAX), CalendarDay::max());
        assert_eq!(add_days(day("2024-06-15"), i64::MIN), CalendarDay::min());
    }

    #[test]
    fn year_boundaries_stay_ten_characters() {
        let last = add_days(day("9999-12-31"), 1);
        assert_eq!(last, day("9999-12-31"));
        let first = add_days(day("0000-01-01"), -1);
        assert_eq!(first, day("0000-01-01"));

        for d in [last, first, add_days(day("9999-12-30"), 5)] {
            let rendered = d.to_string();
            assert_eq!(rendered.len(), 10);
            let json = serde_json::to_string(&d).unwrap();
            assert_eq!(serde_json::from_str::<CalendarDay>(&json).unwrap(), d);
        }
    }

    #[test]
    fn uses_local_fields_just_after_local_midnight() {
        let tokyo = FixedOffset::east_opt(9 * 3600).unwrap();
        let instant = tokyo.with_ymd_and_hms(2024, 3, 1, 0, 30, 0).unwrap();
        assert_eq!(to_calendar_day(&instant).to_string(), "2024-03-01");
        assert_eq!(to_calendar_day(&instant.with_timezone(&Utc)).to_string(), "2024-02-29");
    }

    #[test]
    fn uses_local_fields_just_before_local_midnight() {
        let new_york = FixedOffset::west_opt(5 * 3600).unwrap();
        let instant = new_york.with_ymd_and_hms(2024, 12, 31, 23, 30, 0).unwrap();
        assert_eq!(to_calendar_day(&instant).to_string(), "2024-12-31");
        assert_eq!(to_calendar_day(&instant.with_timezone(&Utc)).to_string(), "2025-01-01");
    }

    #[test]
    fn today_matches_local_clock() {
        let before = to_calendar_day(&Local::now());
        let t = today();
        let after = to_calendar_day(&Local::now());
        assert!(t == before || t == after);
    }

    #[test]
    fn recent_days_window() {
        let days = recent_days(day("2024-03-02"), 4);
        let rendered: Vec<String> = days.iter().map(ToString::to_string).collect();
        assert_eq!(rendered, ["2024-02-28", "2024-02-29", "2024-03-01", "2024-03-02"]);
        assert!(recent_days(day("2024-03-02"), 0).is_empty());
    }
}
