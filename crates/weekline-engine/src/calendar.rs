//! Calendar helpers for week-aligned windows.
//!
//! Weeks start on Monday. All arithmetic is on whole calendar days
//! (`NaiveDate`), so time zones never enter the layout math. Shifts saturate
//! at `NaiveDate::MIN`/`MAX` instead of overflowing.

use chrono::{Datelike, Duration, Local, NaiveDate};

/// Number of days shown in one window.
pub const WEEK_DAYS: i64 = 7;

/// Monday on or before `date`.
///
/// Dates in the first partial week of the calendar map to `NaiveDate::MIN`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    let since_monday = i64::from(date.weekday().num_days_from_monday());
    add_days(date, -since_monday)
}

/// Signed number of whole days from `from` to `to`.
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}

/// Shift a date by a signed number of days, saturating at the calendar bounds.
pub fn add_days(date: NaiveDate, days: i64) -> NaiveDate {
    date.checked_add_signed(Duration::days(days))
        .unwrap_or(if days < 0 { NaiveDate::MIN } else { NaiveDate::MAX })
}

/// Source of the current calendar date.
pub trait Clock {
    /// Today's date.
    fn today(&self) -> NaiveDate;
}

/// Clock backed by the local system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock pinned to a fixed date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_week_start_on_monday_is_identity() {
        // 2024-01-01 is a Monday
        assert_eq!(week_start(date(2024, 1, 1)), date(2024, 1, 1));
    }

    #[test]
    fn test_week_start_mid_week_and_sunday() {
        assert_eq!(week_start(date(2024, 1, 4)), date(2024, 1, 1));
        assert_eq!(week_start(date(2024, 1, 7)), date(2024, 1, 1));
        assert_eq!(week_start(date(2024, 1, 8)), date(2024, 1, 8));
    }

    #[test]
    fn test_week_start_crosses_year_boundary() {
        // 2023-01-01 is a Sunday
        assert_eq!(week_start(date(2023, 1, 1)), date(2022, 12, 26));
    }

    #[test]
    fn test_days_between_is_signed() {
        assert_eq!(days_between(date(2024, 1, 1), date(2024, 1, 3)), 2);
        assert_eq!(days_between(date(2024, 1, 3), date(2024, 1, 1)), -2);
        assert_eq!(add_days(date(2024, 1, 1), -7), date(2023, 12, 25));
    }

    #[test]
    fn test_shifts_saturate_at_calendar_bounds() {
        assert_eq!(add_days(NaiveDate::MAX, 1), NaiveDate::MAX);
        assert_eq!(add_days(NaiveDate::MIN, -7), NaiveDate::MIN);
        assert_eq!(week_start(NaiveDate::MIN), NaiveDate::MIN);
        assert_eq!(week_start(NaiveDate::MAX).weekday(), chrono::Weekday::Mon);
    }

    #[test]
    fn test_fixed_clock() {
        let clock = FixedClock(date(2025, 6, 15));
        assert_eq!(clock.today(), date(2025, 6, 15));
    }
}
