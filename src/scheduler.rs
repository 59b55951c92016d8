// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Daily report tick scheduling.
//!
//! Delivers one tick per day at the configured local hour over an mpsc
//! channel. The engine decides what a tick means (daily vs monthly-final
//! report); this task only owns the timing.

use chrono::{DateTime, Duration as ChronoDuration, FixedOffset, TimeZone, Utc};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Time until the next `report_hour:00` local, strictly in the future.
pub fn until_next_tick(now: DateTime<FixedOffset>, report_hour: u32) -> Duration {
    let fire_time = now
        .date_naive()
        .and_hms_opt(report_hour, 0, 0)
        .expect("report hour is validated to 0-23");

    // Fixed offsets have no DST transitions, so local times are never
    // ambiguous.
    let mut fire = now
        .offset()
        .from_local_datetime(&fire_time)
        .single()
        .expect("fixed-offset local time is unambiguous");

    if fire <= now {
        fire += ChronoDuration::days(1);
    }

    (fire - now).to_std().unwrap_or_default()
}

/// Spawn the daily tick task.
///
/// The task exits when the receiving side is dropped.
pub fn start(tz: FixedOffset, report_hour: u32, tick: mpsc::Sender<()>) -> JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            let now = Utc::now().with_timezone(&tz);
            let wait = until_next_tick(now, report_hour);
            tracing::debug!(seconds = wait.as_secs(), "Next report tick scheduled");

            tokio::time::sleep(wait).await;
            if tick.send(()).await.is_err() {
                break;
            }
        }
    })
}
