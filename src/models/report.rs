//! Derived report structures handed to the rendering collaborator.
//!
//! Everything here is ephemeral: computed fresh per request from the
//! ledger, never persisted.

use serde::Serialize;

/// A contiguous range of puzzle days scores are aggregated over.
///
/// `year`/`month` name the calendar month the window covers so the
/// renderer can label the report ("Leaderboard for March 2024") without
/// redoing the calendar math.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReportingWindow {
    /// First puzzle day of the window (offset from the epoch date)
    pub start_day: i64,
    /// Number of elapsed days covered by the window
    pub length_days: u32,
    /// Calendar year of the covered month
    pub year: i32,
    /// Calendar month of the covered month (1-12)
    pub month: u32,
}

impl ReportingWindow {
    /// First puzzle day past the end of the window.
    pub fn end_day(&self) -> i64 {
        self.start_day + i64::from(self.length_days)
    }

    /// Whether a puzzle day falls inside the window.
    pub fn contains(&self, day: i64) -> bool {
        day >= self.start_day && day < self.end_day()
    }
}

/// One ranked row of a leaderboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeaderboardEntry {
    /// User identifier (display-name resolution is the renderer's job)
    pub user_id: String,
    /// Sum of attempts over the window, unplayed days penalized as 7
    pub total_score: u32,
    /// Days actually played within the window (not inflated by the penalty)
    pub games_played: u32,
    /// `total_score / window.length_days`, the ranking key
    pub average_score: f64,
}

/// Streak statistics over a user's entire history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StreakResult {
    /// Longest run of consecutive solved days
    pub longest_streak: u32,
    /// Run of consecutive solved days ending at the last recorded day
    pub current_streak: u32,
    /// Failed puzzles plus days with no post at all between recorded days
    pub missed_or_failed: u32,
}

/// Whole-history stats for one user: totals plus streaks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UserStatsReport {
    /// Total puzzles recorded (solved or failed)
    pub games_played: u32,
    /// Sum of attempts over all recorded puzzles
    pub total_attempts: u32,
    /// `total_attempts / games_played`
    pub average_attempts: f64,
    pub streaks: StreakResult,
}

/// Which scheduled report a daily tick produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ReportKind {
    /// Month-to-date standings, posted every day
    Daily,
    /// Full previous-month standings, posted on the 1st
    MonthlyFinal,
}

/// A scheduled leaderboard report ready for rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduledReport {
    pub kind: ReportKind,
    pub window: ReportingWindow,
    /// Ranked rows, best average first; empty when nobody participated
    pub entries: Vec<LeaderboardEntry>,
}
