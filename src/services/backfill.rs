// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! One-time ledger reconstruction from channel history.
//!
//! When the ledger is empty at startup, the designated channel's history
//! is replayed through the same parser semantics as live ingestion. The
//! chat client supplies history through [`ChatHistory`]; a fetch failure
//! for one channel skips that channel and continues with the rest.

use crate::services::parser::ScoreParser;
use std::future::Future;

/// One message pulled from channel history.
#[derive(Debug, Clone)]
pub struct HistoryMessage {
    pub author_id: String,
    /// Bot/automated authors are never scored
    pub author_is_automated: bool,
    pub text: String,
}

/// Historical message access, implemented by the chat client.
pub trait ChatHistory {
    /// Identifiers of every readable channel with the given name (the
    /// same name can exist in several guilds).
    fn channels_named(&self, channel_name: &str) -> Vec<String>;

    /// Full message history of one channel.
    fn fetch_history(
        &self,
        channel_id: &str,
    ) -> impl Future<Output = Result<Vec<HistoryMessage>, ChatError>> + Send;
}

/// Errors from the chat history boundary.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("History fetch failed: {0}")]
    Fetch(String),
}

/// Replay history into `(user_id, day, attempts)` tuples.
///
/// Entries come back in arrival order, so applying them to the ledger
/// with last-write-wins reproduces exactly what live ingestion would have
/// recorded. No lock is held here; the caller applies the result in one
/// bulk write.
pub async fn collect_entries<H: ChatHistory>(
    history: &H,
    parser: &ScoreParser,
    channel_name: &str,
) -> Vec<(String, i64, u8)> {
    let mut entries = Vec::new();

    for channel_id in history.channels_named(channel_name) {
        let messages = match history.fetch_history(&channel_id).await {
            Ok(messages) => messages,
            Err(e) => {
                tracing::warn!(
                    channel = %channel_id,
                    error = %e,
                    "History fetch failed, skipping channel"
                );
                continue;
            }
        };

        for message in messages {
            if message.author_is_automated {
                continue;
            }
            for entry in parser.parse(&message.text) {
                entries.push((message.author_id.clone(), entry.puzzle_day, entry.attempts));
            }
        }
    }

    entries
}
