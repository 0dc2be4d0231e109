//! Day-granularity date arithmetic shared by the analyzer and layout engine.

use chrono::{Datelike, Duration, Months, NaiveDate};

/// Whole days from `from` to `to` (negative when `to` precedes `from`).
#[inline]
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}

/// The Monday on or before `date`. Week buckets start here.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    let offset = date.weekday().num_days_from_monday() as i64;
    date - Duration::days(offset)
}

/// The first day of `date`'s month. Month buckets start here.
pub fn month_start(date: NaiveDate) -> NaiveDate {
    // First of any valid month always exists
    date.with_day(1).unwrap_or(date)
}

/// The first day of the month after `date`'s month.
pub fn next_month(date: NaiveDate) -> NaiveDate {
    month_start(date) + Months::new(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_days_between() {
        assert_eq!(days_between(ymd(2025, 1, 1), ymd(2025, 1, 8)), 7);
        assert_eq!(days_between(ymd(2025, 1, 8), ymd(2025, 1, 1)), -7);
        assert_eq!(days_between(ymd(2025, 1, 1), ymd(2025, 1, 1)), 0);
    }

    #[test]
    fn test_week_start_rolls_back_to_monday() {
        // 2025-01-01 is a Wednesday
        assert_eq!(week_start(ymd(2025, 1, 1)), ymd(2024, 12, 30));
        // A Monday maps to itself
        assert_eq!(week_start(ymd(2025, 1, 6)), ymd(2025, 1, 6));
        // Sunday rolls back six days
        assert_eq!(week_start(ymd(2025, 1, 12)), ymd(2025, 1, 6));
    }

    #[test]
    fn test_month_start() {
        assert_eq!(month_start(ymd(2025, 2, 17)), ymd(2025, 2, 1));
        assert_eq!(month_start(ymd(2025, 2, 1)), ymd(2025, 2, 1));
    }

    #[test]
    fn test_next_month_crosses_year_boundary() {
        assert_eq!(next_month(ymd(2024, 12, 15)), ymd(2025, 1, 1));
        assert_eq!(next_month(ymd(2025, 1, 31)), ymd(2025, 2, 1));
    }
}
