// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Wordle-Tracker: score ledger and leaderboard engine for a chat
//! community's daily puzzle results.
//!
//! This crate provides the stateful core: parsing result messages into
//! canonical score records, the persisted per-user ledger, windowed
//! aggregation with a miss penalty, tie-broken ranking, and streak
//! statistics. Chat delivery, acknowledgment rendering, and display-name
//! resolution are the chat collaborator's job, reached through the
//! [`models::InboundMessage`] / [`services::ChatHistory`] boundaries and
//! the structured report types in [`models`].

pub mod config;
pub mod db;
pub mod engine;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod services;

pub use engine::{Engine, IngestOutcome};
