// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! The engine owning the ledger and exposing the core operations.
//!
//! Handles the full workflow:
//! 1. Ingest a message: parse result lines, upsert into the ledger
//! 2. On demand: aggregate + rank a leaderboard, compute user stats
//! 3. On the daily tick: decide daily vs monthly-final report
//! 4. At startup: backfill from channel history if the ledger is empty
//!
//! The ledger sits behind an `RwLock`: ingestion and backfill serialize
//! on the write lock, report queries share the read lock, so readers
//! always see complete upserts and never block each other.

use crate::config::Config;
use crate::db::Ledger;
use crate::error::Result;
use crate::models::{
    InboundMessage, LeaderboardEntry, ReportKind, ReportingWindow, ScheduledReport,
    UserStatsReport,
};
use crate::services::{backfill, scoring, streaks, Calendar, ChatHistory, ScoreParser};
use chrono::{DateTime, Datelike, FixedOffset};
use std::sync::RwLock;

/// Outcome of ingesting one message, rendered by the chat collaborator
/// as a positive/negative acknowledgment (or none at all).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngestOutcome {
    /// This many entries were recorded; acknowledge positively
    Accepted(usize),
    /// Keyword-prefixed content with no parsable entry; acknowledge
    /// negatively
    NotAResult,
    /// Wrong channel, automated author, or not a result post at all; no
    /// acknowledgment
    Ignored,
}

/// Engine value wiring parser, calendar, and ledger together.
pub struct Engine {
    config: Config,
    parser: ScoreParser,
    calendar: Calendar,
    ledger: RwLock<Ledger>,
}

impl Engine {
    /// Load the ledger and build the engine.
    ///
    /// Fails on unreadable or corrupt persisted state; running with
    /// unknown state would silently lose scores, so the process should
    /// not start.
    pub fn new(config: Config) -> Result<Self> {
        let ledger = Ledger::load(&config.data_file)?;
        let parser = ScoreParser::new(&config.keyword);
        let calendar = Calendar::new(config.epoch_date, config.timezone);

        Ok(Self {
            config,
            parser,
            calendar,
            ledger: RwLock::new(ledger),
        })
    }

    /// Current time in the reporting timezone.
    pub fn now(&self) -> DateTime<FixedOffset> {
        self.calendar.now()
    }

    /// Ingest one inbound message.
    ///
    /// A persistence failure surfaces as `Err` with the failed entry
    /// rolled back; entries recorded before the failure are durable, and
    /// upserts are idempotent, so the collaborator can retry the whole
    /// message.
    pub fn handle_message(&self, message: &InboundMessage) -> Result<IngestOutcome> {
        if message.channel != self.config.channel_name || message.author_is_automated {
            return Ok(IngestOutcome::Ignored);
        }
        if !self.parser.is_candidate(&message.text) {
            return Ok(IngestOutcome::Ignored);
        }

        let entries = self.parser.parse(&message.text);
        if entries.is_empty() {
            tracing::debug!(
                author = %message.author_id,
                "Result post without a parsable entry"
            );
            return Ok(IngestOutcome::NotAResult);
        }

        let mut ledger = self.ledger.write().expect("ledger lock poisoned");
        for entry in &entries {
            ledger.upsert(&message.author_id, entry.puzzle_day, entry.attempts)?;
        }

        tracing::info!(
            author = %message.author_id,
            entries = entries.len(),
            "Scores recorded"
        );

        Ok(IngestOutcome::Accepted(entries.len()))
    }

    /// The current reporting window and its ranked leaderboard.
    ///
    /// An empty leaderboard is a valid result ("no entries this month
    /// yet"); the renderer decides how to phrase it.
    pub fn leaderboard(
        &self,
        now: DateTime<FixedOffset>,
    ) -> (ReportingWindow, Vec<LeaderboardEntry>) {
        let window = self.calendar.current_window(now);
        let ledger = self.ledger.read().expect("ledger lock poisoned");
        let entries = scoring::rank(ledger.users(), &window, self.config.rank_absent_players);
        (window, entries)
    }

    /// Whole-history stats for one user, `None` when nothing is recorded.
    pub fn user_stats(&self, user_id: &str) -> Option<UserStatsReport> {
        let record = {
            let ledger = self.ledger.read().expect("ledger lock poisoned");
            ledger.get(user_id)
        };

        if record.is_empty() {
            return None;
        }

        let games_played = record.len() as u32;
        let total_attempts: u32 = record.values().map(|&a| u32::from(a)).sum();

        Some(UserStatsReport {
            games_played,
            total_attempts,
            average_attempts: f64::from(total_attempts) / f64::from(games_played),
            streaks: streaks::scan(&record),
        })
    }

    /// The report a daily tick should produce: the previous month's final
    /// standings on the 1st, month-to-date standings otherwise.
    pub fn daily_report(&self, now: DateTime<FixedOffset>) -> ScheduledReport {
        let local = now.with_timezone(&self.calendar.timezone());
        let kind = if local.day() == 1 {
            ReportKind::MonthlyFinal
        } else {
            ReportKind::Daily
        };

        let (window, entries) = self.leaderboard(now);
        ScheduledReport {
            kind,
            window,
            entries,
        }
    }

    /// Rebuild the ledger from channel history if it is empty.
    ///
    /// Returns the number of entries recorded (0 when the ledger was
    /// already populated). History is collected without holding the
    /// ledger lock, then applied in one bulk write.
    pub async fn backfill<H: ChatHistory>(&self, history: &H) -> Result<usize> {
        {
            let ledger = self.ledger.read().expect("ledger lock poisoned");
            if !ledger.is_empty() {
                tracing::debug!("Ledger already populated, skipping backfill");
                return Ok(0);
            }
        }

        tracing::info!(
            channel = %self.config.channel_name,
            "Populating ledger from message history"
        );

        let entries =
            backfill::collect_entries(history, &self.parser, &self.config.channel_name).await;

        let mut ledger = self.ledger.write().expect("ledger lock poisoned");
        let count = ledger.bulk_upsert(entries)?;

        tracing::info!(count, "Backfill complete");
        Ok(count)
    }
}
