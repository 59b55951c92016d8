// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Reporting-window calendar math.
//!
//! All puzzle days are integer offsets of a calendar date from the epoch
//! date, evaluated in the fixed reporting timezone. Windows are computed
//! fresh per request and never persisted.

use crate::models::ReportingWindow;
use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, Utc};

/// Calendar anchored at the epoch date in a fixed timezone.
#[derive(Debug, Clone, Copy)]
pub struct Calendar {
    epoch: NaiveDate,
    tz: FixedOffset,
}

impl Calendar {
    pub fn new(epoch: NaiveDate, tz: FixedOffset) -> Self {
        Self { epoch, tz }
    }

    /// Current time in the reporting timezone.
    pub fn now(&self) -> DateTime<FixedOffset> {
        Utc::now().with_timezone(&self.tz)
    }

    pub fn timezone(&self) -> FixedOffset {
        self.tz
    }

    /// Offset of a calendar date from the epoch (epoch itself is day 0,
    /// the first scored puzzle is day 1).
    pub fn day_offset(&self, date: NaiveDate) -> i64 {
        (date - self.epoch).num_days()
    }

    /// The reporting window for "now".
    ///
    /// On the 1st of a month the window is the *previous* calendar month
    /// in full, so the day's scheduled report naturally becomes the final
    /// monthly standing (January rolls back to December of the previous
    /// year). On any other day it is the current month truncated to the
    /// days already completed; the partially-elapsed day is excluded.
    pub fn current_window(&self, now: DateTime<FixedOffset>) -> ReportingWindow {
        let today = now.with_timezone(&self.tz).date_naive();
        let mut year = today.year();
        let mut month = today.month();

        let length_days = if today.day() == 1 {
            if month == 1 {
                month = 12;
                year -= 1;
            } else {
                month -= 1;
            }
            days_in_month(year, month)
        } else {
            today.day() - 1
        };

        let first_of_month =
            NaiveDate::from_ymd_opt(year, month, 1).expect("first of month is a valid date");

        ReportingWindow {
            start_day: self.day_offset(first_of_month),
            length_days,
            year,
            month,
        }
    }
}

/// Number of days in a calendar month.
fn days_in_month(year: i32, month: u32) -> u32 {
    let first = NaiveDate::from_ymd_opt(year, month, 1).expect("valid month");
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .expect("valid month");

    (next - first).num_days() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    const EPOCH: &str = "2021-06-19";

    fn calendar() -> Calendar {
        let epoch = EPOCH.parse().unwrap();
        let tz = FixedOffset::west_opt(10 * 3600).unwrap();
        Calendar::new(epoch, tz)
    }

    fn at(year: i32, month: u32, day: u32) -> DateTime<FixedOffset> {
        calendar()
            .timezone()
            .with_ymd_and_hms(year, month, day, 0, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_day_offset_from_epoch() {
        let cal = calendar();
        assert_eq!(cal.day_offset("2021-06-19".parse().unwrap()), 0);
        assert_eq!(cal.day_offset("2021-06-20".parse().unwrap()), 1);
        assert_eq!(cal.day_offset("2024-01-01".parse().unwrap()), 926);
    }

    #[test]
    fn test_mid_month_window_excludes_today() {
        let window = calendar().current_window(at(2024, 3, 15));
        assert_eq!(window.length_days, 14);
        assert_eq!((window.year, window.month), (2024, 3));
        assert_eq!(
            window.start_day,
            calendar().day_offset("2024-03-01".parse().unwrap())
        );
    }

    #[test]
    fn test_first_of_month_rolls_to_previous_month() {
        let window = calendar().current_window(at(2024, 3, 1));
        assert_eq!((window.year, window.month), (2024, 2));
        assert_eq!(window.length_days, 29); // leap February
        assert_eq!(
            window.start_day,
            calendar().day_offset("2024-02-01".parse().unwrap())
        );
    }

    #[test]
    fn test_first_of_january_rolls_to_previous_year() {
        let window = calendar().current_window(at(2024, 1, 1));
        assert_eq!((window.year, window.month), (2023, 12));
        assert_eq!(window.length_days, 31);
        assert_eq!(
            window.start_day,
            calendar().day_offset("2023-12-01".parse().unwrap())
        );
    }

    #[test]
    fn test_second_of_month_covers_one_day() {
        let window = calendar().current_window(at(2024, 3, 2));
        assert_eq!(window.length_days, 1);
        assert!(window.contains(window.start_day));
        assert!(!window.contains(window.start_day + 1));
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2024, 12), 31);
        assert_eq!(days_in_month(2024, 4), 30);
    }
}
