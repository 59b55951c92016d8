//! Application configuration loaded from environment variables.
//!
//! Everything is read once at startup and immutable afterwards.

use chrono::{FixedOffset, NaiveDate};
use std::env;
use std::path::PathBuf;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Designated channel name whose messages are scored
    pub channel_name: String,
    /// Path of the persisted ledger document
    pub data_file: PathBuf,
    /// Keyword token result lines must start with
    pub keyword: String,
    /// Epoch date: puzzle day 0, the day before the first scored puzzle
    pub epoch_date: NaiveDate,
    /// Fixed reporting timezone
    pub timezone: FixedOffset,
    /// Local hour (0-23) at which the scheduled report fires
    pub report_hour: u32,
    /// Rank users with history but no games in the window as all-misses
    /// instead of leaving them off the leaderboard
    pub rank_absent_players: bool,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            channel_name: "wordle".to_string(),
            data_file: PathBuf::from("wordle_data.json"),
            keyword: "Wordle".to_string(),
            epoch_date: NaiveDate::from_ymd_opt(2021, 6, 19).expect("valid epoch"),
            timezone: FixedOffset::west_opt(10 * 3600).expect("valid offset"),
            report_hour: 0,
            rank_absent_players: false,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Only the channel name is required; everything else defaults to
    /// keyword "Wordle", epoch 2021-06-19, UTC-10, and midnight reports.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let channel_name =
            env::var("WORDLE_CHANNEL").map_err(|_| ConfigError::Missing("WORDLE_CHANNEL"))?;

        let data_file = env::var("WORDLE_DATA_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("wordle_data.json"));

        let keyword = env::var("WORDLE_KEYWORD").unwrap_or_else(|_| "Wordle".to_string());

        let epoch_date = parse_env("WORDLE_EPOCH_DATE", "2021-06-19", |raw| {
            raw.parse::<NaiveDate>().ok()
        })?;

        let offset_hours = parse_env("WORDLE_UTC_OFFSET_HOURS", "-10", |raw| {
            raw.parse::<i32>().ok().filter(|h| (-12..=14).contains(h))
        })?;
        let timezone = FixedOffset::east_opt(offset_hours * 3600)
            .ok_or(ConfigError::Invalid("WORDLE_UTC_OFFSET_HOURS"))?;

        let report_hour = parse_env("WORDLE_REPORT_HOUR", "0", |raw| {
            raw.parse::<u32>().ok().filter(|h| *h < 24)
        })?;

        let rank_absent_players = parse_env("WORDLE_RANK_ABSENT", "false", |raw| {
            raw.parse::<bool>().ok()
        })?;

        Ok(Self {
            channel_name,
            data_file,
            keyword,
            epoch_date,
            timezone,
            report_hour,
            rank_absent_players,
        })
    }
}

/// Read an optional variable, falling back to `default`, and parse it.
fn parse_env<T, F>(name: &'static str, default: &str, parse: F) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<T>,
{
    let raw = env::var(name).unwrap_or_else(|_| default.to_string());
    parse(raw.trim()).ok_or(ConfigError::Invalid(name))
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for environment variable: {0}")]
    Invalid(&'static str),
}
