// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Streak and gap scanning over a user's full history.

use crate::models::{StreakResult, UserRecord, FAILED_ATTEMPTS};

/// Single pass over the day-sorted record.
///
/// A failed puzzle (attempts 7) and any day with no post at all both
/// break the streak and count toward `missed_or_failed`; gaps contribute
/// one miss per absent day. The current streak is whatever run is alive
/// after the last recorded day. Independent of any reporting window.
pub fn scan(record: &UserRecord) -> StreakResult {
    let mut streak: u32 = 0;
    let mut longest: u32 = 0;
    let mut missed: u32 = 0;
    let mut previous_day: Option<i64> = None;

    for (&day, &attempts) in record {
        if let Some(prev) = previous_day {
            if day != prev + 1 {
                missed += (day - prev - 1) as u32;
                streak = 0;
            }
        }

        if attempts == FAILED_ATTEMPTS {
            missed += 1;
            streak = 0;
        } else {
            streak += 1;
            longest = longest.max(streak);
        }

        previous_day = Some(day);
    }

    StreakResult {
        longest_streak: longest,
        current_streak: streak,
        missed_or_failed: missed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserRecord;

    fn record(entries: &[(i64, u8)]) -> UserRecord {
        entries.iter().copied().collect()
    }

    #[test]
    fn test_empty_record() {
        let result = scan(&record(&[]));
        assert_eq!(result.longest_streak, 0);
        assert_eq!(result.current_streak, 0);
        assert_eq!(result.missed_or_failed, 0);
    }

    #[test]
    fn test_failure_and_gap_both_reset() {
        // Days [1,2,3,5,6], attempts [2,3,7,4,5]: the failure on day 3 and
        // the absent day 4 each count one miss and reset the streak.
        let result = scan(&record(&[(1, 2), (2, 3), (3, 7), (5, 4), (6, 5)]));
        assert_eq!(result.longest_streak, 2);
        assert_eq!(result.current_streak, 2);
        assert_eq!(result.missed_or_failed, 2);
    }

    #[test]
    fn test_unbroken_run() {
        let result = scan(&record(&[(1, 3), (2, 2), (3, 5), (4, 1)]));
        assert_eq!(result.longest_streak, 4);
        assert_eq!(result.current_streak, 4);
        assert_eq!(result.missed_or_failed, 0);
    }

    #[test]
    fn test_longest_streak_survives_later_reset() {
        let result = scan(&record(&[(1, 3), (2, 2), (3, 5), (4, 7), (5, 4)]));
        assert_eq!(result.longest_streak, 3);
        assert_eq!(result.current_streak, 1);
        assert_eq!(result.missed_or_failed, 1);
    }

    #[test]
    fn test_wide_gap_counts_every_absent_day() {
        let result = scan(&record(&[(10, 3), (20, 4)]));
        assert_eq!(result.missed_or_failed, 9);
        assert_eq!(result.longest_streak, 1);
        assert_eq!(result.current_streak, 1);
    }

    #[test]
    fn test_ending_on_failure_zeroes_current_streak() {
        let result = scan(&record(&[(1, 2), (2, 7)]));
        assert_eq!(result.longest_streak, 1);
        assert_eq!(result.current_streak, 0);
        assert_eq!(result.missed_or_failed, 1);
    }
}
