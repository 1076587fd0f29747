//! Seed command for generating sample history.

use std::io::Write;

use anyhow::{Result, bail};
use chrono::{Local, NaiveDate, NaiveTime};

use slt_core::{LogId, Mood, NewSleepLog, Quality, SleepLog};
use slt_db::Database;

/// Moods cycled through the generated nights.
const MOODS: [Mood; 3] = [Mood::Energized, Mood::Refreshed, Mood::Neutral];

/// Runs the seed command.
pub fn run(db: &mut Database, days: u32) -> Result<()> {
    let stdout = std::io::stdout();
    let today = Local::now().date_naive();
    seed(&mut stdout.lock(), db, days, today)
}

fn seed<W: Write>(writer: &mut W, db: &mut Database, days: u32, today: NaiveDate) -> Result<()> {
    let logs = sample_logs(days, today)?;
    let inserted = db.insert_logs(&logs)?;
    tracing::debug!(inserted, "seeded sample history");

    let night_word = if inserted == 1 { "night" } else { "nights" };
    writeln!(writer, "Seeded {inserted} sample {night_word}.")?;
    Ok(())
}

/// Generates `days` consecutive nights ending today, oldest first.
///
/// Values vary deterministically with the day offset so repeated runs
/// produce the same shape of history.
fn sample_logs(days: u32, today: NaiveDate) -> Result<Vec<SleepLog>> {
    // The whole span must land on representable dates
    let span = chrono::Duration::days(i64::from(days.saturating_sub(1)));
    if today.checked_sub_signed(span).is_none() {
        bail!("cannot seed {days} days back from {today}");
    }

    let bedtime = NaiveTime::from_hms_opt(22, 30, 0).unwrap();
    let waketime = NaiveTime::from_hms_opt(6, 30, 0).unwrap();

    let mut logs = Vec::with_capacity(days as usize);
    for offset in (0..days).rev() {
        let date = today - chrono::Duration::days(i64::from(offset));
        let variant = offset % 3;
        logs.push(SleepLog::new(NewSleepLog {
            id: LogId::new(uuid::Uuid::new_v4().to_string())?,
            date,
            bedtime,
            waketime,
            quality: Quality::new(i64::from(7 + variant))?,
            mood: MOODS[variant as usize].clone(),
            factors: vec!["exercise".to_string()],
            notes: String::new(),
        }));
    }
    Ok(logs)
}
