// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod message;
pub mod report;
pub mod score;

pub use message::InboundMessage;
pub use report::{
    LeaderboardEntry, ReportKind, ReportingWindow, ScheduledReport, StreakResult, UserStatsReport,
};
pub use score::{ScoreEntry, UserRecord, FAILED_ATTEMPTS};
