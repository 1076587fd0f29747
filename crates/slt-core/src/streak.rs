//! Consecutive-day logging streaks.

use std::collections::HashSet;

use chrono::NaiveDate;

use crate::log::SleepLog;

/// Counts consecutive calendar days with at least one record, walking
/// backward from `today`.
///
/// The streak is currently active by definition: no record dated `today`
/// means 0, regardless of history. Multiple records on one date count as
/// that single day.
pub fn current_streak(logs: &[SleepLog], today: NaiveDate) -> u32 {
    let days: HashSet<NaiveDate> = logs.iter().map(|log| log.date).collect();

    let mut streak = 0;
    let mut day = today;
    while days.contains(&day) {
        streak += 1;
        let Some(prev) = day.pred_opt() else {
            break;
        };
        day = prev;
    }
    streak
}
