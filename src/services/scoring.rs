// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Windowed aggregation and leaderboard ranking.

use crate::models::{LeaderboardEntry, ReportingWindow, UserRecord, FAILED_ATTEMPTS};
use std::collections::BTreeMap;

/// Reduce one user's record over a window.
///
/// Returns `(total_score, games_played)`, or `None` when the user played
/// no day in the window. Every unplayed day in the window adds a
/// worst-case miss (7) to the total, but `games_played` counts only days
/// actually played.
pub fn aggregate(record: &UserRecord, window: &ReportingWindow) -> Option<(u32, u32)> {
    let mut total_score: u32 = 0;
    let mut games_played: u32 = 0;

    for (_, &attempts) in record.range(window.start_day..window.end_day()) {
        total_score += u32::from(attempts);
        games_played += 1;
    }

    if games_played == 0 {
        return None;
    }

    if games_played < window.length_days {
        total_score += (window.length_days - games_played) * u32::from(FAILED_ATTEMPTS);
    }

    Some((total_score, games_played))
}

/// Build the ranked leaderboard for a window.
///
/// Ascending by penalised total (every entry shares `length_days`, so this
/// is the same order as ascending average without the float compare), then
/// descending games played, then ascending user ID so ties are
/// reproducible.
///
/// `rank_absent_players` switches the treatment of users who are in the
/// ledger but played nothing in the window: excluded by default, scored as
/// all misses when set.
pub fn rank(
    users: &BTreeMap<String, UserRecord>,
    window: &ReportingWindow,
    rank_absent_players: bool,
) -> Vec<LeaderboardEntry> {
    let mut entries: Vec<LeaderboardEntry> = users
        .iter()
        .filter_map(|(user_id, record)| {
            let (total_score, games_played) = match aggregate(record, window) {
                Some(totals) => totals,
                None if rank_absent_players => {
                    (window.length_days * u32::from(FAILED_ATTEMPTS), 0)
                }
                None => return None,
            };

            Some(LeaderboardEntry {
                user_id: user_id.clone(),
                total_score,
                games_played,
                average_score: f64::from(total_score) / f64::from(window.length_days),
            })
        })
        .collect();

    entries.sort_by(|a, b| {
        a.total_score
            .cmp(&b.total_score)
            .then(b.games_played.cmp(&a.games_played))
            .then(a.user_id.cmp(&b.user_id))
    });

    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window(start_day: i64, length_days: u32) -> ReportingWindow {
        ReportingWindow {
            start_day,
            length_days,
            year: 2024,
            month: 3,
        }
    }

    fn record(entries: &[(i64, u8)]) -> UserRecord {
        entries.iter().copied().collect()
    }

    #[test]
    fn test_penalty_for_unplayed_days() {
        // Played 2 of 5 days with attempts [3, 4]: 3 + 4 + 3*7 = 28.
        let rec = record(&[(10, 3), (12, 4)]);
        let (total, played) = aggregate(&rec, &window(10, 5)).unwrap();
        assert_eq!(total, 28);
        assert_eq!(played, 2);
    }

    #[test]
    fn test_full_participation_has_no_penalty() {
        let rec = record(&[(10, 2), (11, 3), (12, 4)]);
        let (total, played) = aggregate(&rec, &window(10, 3)).unwrap();
        assert_eq!(total, 9);
        assert_eq!(played, 3);
    }

    #[test]
    fn test_days_outside_window_are_ignored() {
        let rec = record(&[(9, 1), (10, 3), (15, 1)]);
        let (total, played) = aggregate(&rec, &window(10, 5)).unwrap();
        assert_eq!(played, 1);
        assert_eq!(total, 3 + 4 * 7);
    }

    #[test]
    fn test_no_games_in_window_aggregates_to_none() {
        let rec = record(&[(1, 3), (2, 4)]);
        assert!(aggregate(&rec, &window(10, 5)).is_none());
    }

    #[test]
    fn test_non_participants_excluded_from_ranking() {
        let mut users = BTreeMap::new();
        users.insert("active".to_string(), record(&[(10, 3)]));
        users.insert("inactive".to_string(), record(&[(1, 2)]));

        let board = rank(&users, &window(10, 5), false);
        assert_eq!(board.len(), 1);
        assert_eq!(board[0].user_id, "active");
    }

    #[test]
    fn test_rank_absent_players_scores_all_misses() {
        let mut users = BTreeMap::new();
        users.insert("active".to_string(), record(&[(10, 3)]));
        users.insert("inactive".to_string(), record(&[(1, 2)]));

        let board = rank(&users, &window(10, 5), true);
        assert_eq!(board.len(), 2);
        assert_eq!(board[1].user_id, "inactive");
        assert_eq!(board[1].total_score, 35);
        assert_eq!(board[1].games_played, 0);
    }

    #[test]
    fn test_lower_average_ranks_first() {
        let mut users = BTreeMap::new();
        users.insert("good".to_string(), record(&[(10, 2), (11, 3)]));
        users.insert("bad".to_string(), record(&[(10, 6), (11, 6)]));

        let board = rank(&users, &window(10, 2), false);
        assert_eq!(board[0].user_id, "good");
        assert_eq!(board[0].average_score, 2.5);
        assert_eq!(board[1].user_id, "bad");
    }

    #[test]
    fn test_tie_broken_by_games_played() {
        // Equal totals (14 over 2 days), but one user actually played both.
        let mut users = BTreeMap::new();
        users.insert("one_game".to_string(), record(&[(10, 7)]));
        users.insert("two_games".to_string(), record(&[(10, 7), (11, 7)]));

        let board = rank(&users, &window(10, 2), false);
        assert_eq!(board[0].total_score, board[1].total_score);
        assert_eq!(board[0].user_id, "two_games");
    }

    #[test]
    fn test_remaining_ties_broken_by_user_id() {
        let mut users = BTreeMap::new();
        users.insert("zed".to_string(), record(&[(10, 4)]));
        users.insert("amy".to_string(), record(&[(10, 4)]));

        let board = rank(&users, &window(10, 1), false);
        assert_eq!(board[0].user_id, "amy");
        assert_eq!(board[1].user_id, "zed");
    }
}
