// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Canonical score record extracted from a result message.

use std::collections::BTreeMap;

/// Sentinel attempts value for a failed/unsolved puzzle (the `X/6` marker).
pub const FAILED_ATTEMPTS: u8 = 7;

/// One parsed result: which puzzle day, and how many guesses it took.
///
/// `attempts` is 1-6 for a solve, [`FAILED_ATTEMPTS`] for a failure.
/// Entries are immutable; a later submission for the same day replaces the
/// stored value rather than merging with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreEntry {
    /// Puzzle day as an offset from the epoch date
    pub puzzle_day: i64,
    /// Guesses used (1-6), or 7 for failed
    pub attempts: u8,
}

/// One user's scores, keyed by puzzle day.
///
/// `BTreeMap` keeps day iteration sorted (the streak scan relies on this)
/// and makes saved JSON key order deterministic.
pub type UserRecord = BTreeMap<i64, u8>;
