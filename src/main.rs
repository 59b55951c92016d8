// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Wordle-Tracker daemon
//!
//! Loads the score ledger and runs the schedule boundary: one tick per
//! day at the configured local hour, producing the daily (or, on the
//! 1st, monthly-final) leaderboard report. The chat client plugs into
//! [`Engine::handle_message`] and [`Engine::backfill`] and renders the
//! structured reports produced here.

use tokio::sync::mpsc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wordle_tracker::{config::Config, scheduler, Engine};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let config = Config::from_env()?;
    tracing::info!(
        channel = %config.channel_name,
        data_file = %config.data_file.display(),
        "Starting Wordle-Tracker"
    );

    let tz = config.timezone;
    let report_hour = config.report_hour;

    // A corrupt ledger is fatal: refusing to start beats silently losing
    // recorded scores.
    let engine = Engine::new(config)?;

    let (tick_tx, mut tick_rx) = mpsc::channel(1);
    let _scheduler = scheduler::start(tz, report_hour, tick_tx);
    tracing::info!(report_hour, "Report scheduler running");

    while tick_rx.recv().await.is_some() {
        let report = engine.daily_report(engine.now());
        tracing::info!(
            kind = ?report.kind,
            year = report.window.year,
            month = report.window.month,
            entries = report.entries.len(),
            "Scheduled report generated"
        );
    }

    Ok(())
}

/// Initialize structured logging.
fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("wordle_tracker=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}
