// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Result-line parsing service.
//!
//! Extracts `(puzzle day, attempts)` pairs from raw message text. One
//! message may carry several result lines (catch-up posts after a few
//! days away), so parsing returns a sequence.

use crate::models::{ScoreEntry, FAILED_ATTEMPTS};
use regex::Regex;

/// Parser for result lines of the shape `<keyword> <day> <result>/6`.
pub struct ScoreParser {
    keyword: String,
    pattern: Regex,
}

impl ScoreParser {
    /// Build a parser for the given keyword token (e.g. "Wordle").
    pub fn new(keyword: &str) -> Self {
        // Anchored per physical line: the day token is digits with at most
        // one `,` or `.` thousands separator, the result token a digit 1-6
        // or the failure marker X.
        let pattern = Regex::new(&format!(
            r"(?m)^{} (\d{{1,4}}[,.]?\d{{0,3}}) ([Xx1-6])/6",
            regex::escape(keyword)
        ))
        .expect("score pattern is valid");

        Self {
            keyword: keyword.to_string(),
            pattern,
        }
    }

    /// Whether the text claims to be a result post at all.
    ///
    /// Non-candidates are ignored outright; candidates that then yield no
    /// entries get a negative acknowledgment.
    pub fn is_candidate(&self, text: &str) -> bool {
        text.starts_with(&self.keyword)
    }

    /// Extract every score entry from `text`.
    ///
    /// Lines that do not match yield nothing; an empty result is the
    /// "not a result post" signal, not an error.
    pub fn parse(&self, text: &str) -> Vec<ScoreEntry> {
        self.pattern
            .captures_iter(text)
            .filter_map(|caps| {
                let puzzle_day: i64 = caps[1].replace([',', '.'], "").parse().ok()?;
                if puzzle_day < 1 {
                    return None;
                }

                let result = &caps[2];
                let attempts = if result.eq_ignore_ascii_case("X") {
                    FAILED_ATTEMPTS
                } else {
                    result.parse().ok()?
                };

                Some(ScoreEntry {
                    puzzle_day,
                    attempts,
                })
            })
            .collect()
    }
}
