//! Timeline bucket generation per zoom granularity.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::dates::{month_start, next_month, week_start};

/// Zoom granularity for the timeline axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    #[default]
    Days,
    Weeks,
    Months,
}

/// Generate bucket labels covering `span_start..=span_end`.
///
/// - Days: one bucket per calendar day, labeled like `Mar 04`.
/// - Weeks: 7-day buckets from the Monday on or before the span start,
///   labeled `Week 1`, `Week 2`, ... Sequential numbering is deliberate;
///   ISO week numbers are ambiguous across year boundaries.
/// - Months: calendar-month buckets from the first of the span's starting
///   month, labeled like `March 2025`.
pub fn generate_buckets(
    span_start: NaiveDate,
    span_end: NaiveDate,
    granularity: Granularity,
) -> Vec<String> {
    let mut buckets = Vec::new();
    match granularity {
        Granularity::Days => {
            let mut cursor = span_start;
            while cursor <= span_end {
                buckets.push(cursor.format("%b %d").to_string());
                cursor += Duration::days(1);
            }
        }
        Granularity::Weeks => {
            let mut cursor = week_start(span_start);
            let mut week = 1;
            while cursor <= span_end {
                buckets.push(format!("Week {week}"));
                week += 1;
                cursor += Duration::days(7);
            }
        }
        Granularity::Months => {
            let mut cursor = month_start(span_start);
            while cursor <= span_end {
                buckets.push(cursor.format("%B %Y").to_string());
                cursor = next_month(cursor);
            }
        }
    }
    buckets
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_seven_day_span_yields_seven_day_buckets() {
        let buckets = generate_buckets(ymd(2025, 3, 3), ymd(2025, 3, 9), Granularity::Days);
        assert_eq!(buckets.len(), 7);
        assert_eq!(buckets[0], "Mar 03");
        assert_eq!(buckets[6], "Mar 09");
    }

    #[test]
    fn test_single_day_span_yields_one_bucket_per_granularity() {
        let day = ymd(2025, 3, 5);
        assert_eq!(generate_buckets(day, day, Granularity::Days).len(), 1);
        assert_eq!(generate_buckets(day, day, Granularity::Weeks).len(), 1);
        assert_eq!(generate_buckets(day, day, Granularity::Months).len(), 1);
    }

    #[test]
    fn test_week_buckets_align_to_monday() {
        // 2025-03-05 is a Wednesday; its week bucket opens Monday 03-03.
        // Span through Sunday 03-09 stays in one bucket; Monday 03-10 opens
        // the next.
        let start = ymd(2025, 3, 5);
        assert_eq!(
            generate_buckets(start, ymd(2025, 3, 9), Granularity::Weeks),
            vec!["Week 1"]
        );
        assert_eq!(
            generate_buckets(start, ymd(2025, 3, 10), Granularity::Weeks),
            vec!["Week 1", "Week 2"]
        );
    }

    #[test]
    fn test_week_labels_sequential_across_year_boundary() {
        let buckets = generate_buckets(ymd(2024, 12, 23), ymd(2025, 1, 12), Granularity::Weeks);
        assert_eq!(buckets, vec!["Week 1", "Week 2", "Week 3"]);
    }

    #[test]
    fn test_month_span_starting_mid_month_yields_two_buckets() {
        // 31 days from Jan 15: partial January plus partial February
        let buckets = generate_buckets(ymd(2025, 1, 15), ymd(2025, 2, 14), Granularity::Months);
        assert_eq!(buckets, vec!["January 2025", "February 2025"]);
    }

    #[test]
    fn test_month_buckets_across_year_boundary() {
        let buckets = generate_buckets(ymd(2024, 11, 20), ymd(2025, 1, 10), Granularity::Months);
        assert_eq!(
            buckets,
            vec!["November 2024", "December 2024", "January 2025"]
        );
    }

    #[test]
    fn test_granularity_serde_names() {
        assert_eq!(
            serde_json::to_string(&Granularity::Weeks).unwrap(),
            "\"weeks\""
        );
        let parsed: Granularity = serde_json::from_str("\"months\"").unwrap();
        assert_eq!(parsed, Granularity::Months);
    }
}
