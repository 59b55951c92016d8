// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types.

use crate::config::ConfigError;
use crate::db::LedgerError;

/// Top-level application error.
///
/// Configuration and ledger-load failures are fatal at startup; a ledger
/// write failure during ingestion is retryable by the caller (the failed
/// upsert is rolled back, so retrying the message is safe).
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Ledger error: {0}")]
    Ledger(#[from] LedgerError),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, AppError>;
