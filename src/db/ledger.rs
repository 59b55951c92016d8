// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Score ledger with synchronous write-through persistence.
//!
//! The ledger is the sole source of truth: a single JSON document mapping
//! user IDs to per-day attempts. Every mutation is persisted before it is
//! considered applied, so a crash loses at most the in-flight message.

use crate::models::UserRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// On-disk document shape: `{"users": {"<user_id>": {"<day>": attempts}}}`.
///
/// Day keys are stored as strings in JSON (object keys always are) and
/// round-trip through the integer map keys losslessly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
struct LedgerDocument {
    users: BTreeMap<String, UserRecord>,
}

/// Persisted mapping of user -> {puzzle day -> attempts}.
pub struct Ledger {
    path: PathBuf,
    doc: LedgerDocument,
}

impl Ledger {
    /// Load the ledger from `path`, creating an empty one if the file does
    /// not exist yet.
    ///
    /// An unreadable or corrupt file is an error: running with unknown
    /// state would silently lose scores, so the caller should treat this
    /// as fatal at startup.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, LedgerError> {
        let path = path.as_ref().to_path_buf();

        if !path.exists() {
            tracing::info!(path = %path.display(), "No ledger file, starting empty");
            let ledger = Self {
                path,
                doc: LedgerDocument::default(),
            };
            ledger.save()?;
            return Ok(ledger);
        }

        let raw = fs::read_to_string(&path).map_err(|e| LedgerError::Io(e.to_string()))?;
        let doc: LedgerDocument =
            serde_json::from_str(&raw).map_err(|e| LedgerError::Corrupt(e.to_string()))?;

        tracing::info!(
            path = %path.display(),
            users = doc.users.len(),
            "Ledger loaded"
        );

        Ok(Self { path, doc })
    }

    /// Record `attempts` for `(user_id, day)`, overwriting any existing
    /// value, and persist synchronously.
    ///
    /// Applying the same entry twice is a no-op the second time. If the
    /// write fails the in-memory change is rolled back and the error
    /// returned, so the update is never considered durable without being
    /// on disk and a retry starts from consistent state.
    pub fn upsert(&mut self, user_id: &str, day: i64, attempts: u8) -> Result<(), LedgerError> {
        let previous = self
            .doc
            .users
            .entry(user_id.to_string())
            .or_default()
            .insert(day, attempts);

        if let Err(e) = self.save() {
            // Roll back so memory matches the durable state.
            let record = self.doc.users.get_mut(user_id);
            match (record, previous) {
                (Some(record), Some(prev)) => {
                    record.insert(day, prev);
                }
                (Some(record), None) => {
                    record.remove(&day);
                    if record.is_empty() {
                        self.doc.users.remove(user_id);
                    }
                }
                (None, _) => {}
            }
            return Err(e);
        }

        Ok(())
    }

    /// Record a batch of entries with a single save at the end.
    ///
    /// Used by backfill, where per-entry write-through would rewrite the
    /// file thousands of times. Last-write-wins per (user, day) applies
    /// in iteration order, same as replaying the entries through
    /// [`Ledger::upsert`].
    pub fn bulk_upsert<I>(&mut self, entries: I) -> Result<usize, LedgerError>
    where
        I: IntoIterator<Item = (String, i64, u8)>,
    {
        let mut count = 0;
        for (user_id, day, attempts) in entries {
            self.doc.users.entry(user_id).or_default().insert(day, attempts);
            count += 1;
        }
        self.save()?;
        Ok(count)
    }

    /// Scores for one user; empty record if the user is unknown.
    pub fn get(&self, user_id: &str) -> UserRecord {
        self.doc.users.get(user_id).cloned().unwrap_or_default()
    }

    /// All users with at least one recorded score.
    pub fn users(&self) -> &BTreeMap<String, UserRecord> {
        &self.doc.users
    }

    /// IDs of all known users.
    pub fn all_users(&self) -> Vec<String> {
        self.doc.users.keys().cloned().collect()
    }

    /// Whether any score has ever been recorded (drives backfill).
    pub fn is_empty(&self) -> bool {
        self.doc.users.is_empty()
    }

    /// Write the document to disk.
    fn save(&self) -> Result<(), LedgerError> {
        let json = serde_json::to_string_pretty(&self.doc)
            .map_err(|e| LedgerError::Write(e.to_string()))?;
        fs::write(&self.path, json).map_err(|e| LedgerError::Write(e.to_string()))
    }
}

/// Errors from ledger persistence.
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    #[error("Failed to read ledger file: {0}")]
    Io(String),

    #[error("Corrupt ledger file: {0}")]
    Corrupt(String),

    #[error("Failed to write ledger file: {0}")]
    Write(String),
}
