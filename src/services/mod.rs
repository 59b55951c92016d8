// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod backfill;
pub mod calendar;
pub mod parser;
pub mod scoring;
pub mod streaks;

pub use backfill::{ChatError, ChatHistory, HistoryMessage};
pub use calendar::Calendar;
pub use parser::ScoreParser;
