//! Log command for recording a night of sleep.

use std::io::Write;

use anyhow::Result;
use chrono::{Local, NaiveDate};

use slt_core::{LogId, Mood, NewSleepLog, Quality, SleepLog, parse_date, parse_time};
use slt_db::Database;

use super::util::format_hours;

/// Raw argument bundle for `slt log`, before validation.
#[derive(Debug)]
pub struct Entry<'a> {
    pub date: &'a str,
    pub bedtime: &'a str,
    pub waketime: &'a str,
    pub quality: i64,
    pub mood: &'a str,
    pub factors: &'a [String],
    pub notes: &'a str,
}

pub fn run(db: &Database, entry: &Entry<'_>) -> Result<()> {
    let stdout = std::io::stdout();
    let today = Local::now().date_naive();
    record(&mut stdout.lock(), db, entry, today)
}

/// Validates the entry, stores it, and writes a one-line confirmation.
fn record<W: Write>(
    writer: &mut W,
    db: &Database,
    entry: &Entry<'_>,
    today: NaiveDate,
) -> Result<()> {
    let date = parse_date(entry.date, today)?;
    let bedtime = parse_time(entry.bedtime)?;
    let waketime = parse_time(entry.waketime)?;
    let quality = Quality::new(entry.quality)?;

    let log = SleepLog::new(NewSleepLog {
        id: LogId::new(uuid::Uuid::new_v4().to_string())?,
        date,
        bedtime,
        waketime,
        quality,
        mood: Mood::from(entry.mood),
        factors: entry.factors.to_vec(),
        notes: entry.notes.to_string(),
    });
    db.insert_log(&log)?;
    tracing::debug!(id = %log.id, %date, "recorded sleep log");

    writeln!(
        writer,
        "Logged {date}: {} of sleep, quality {}",
        format_hours(log.duration_hours),
        log.quality
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry<'a>(factors: &'a [String]) -> Entry<'a> {
        Entry {
            date: "2026-03-14",
            bedtime: "22:30",
            waketime: "06:30",
            quality: 8,
            mood: "refreshed",
            factors,
            notes: "",
        }
    }

    #[test]
    fn record_stores_and_confirms() {
        let db = Database::open_in_memory().unwrap();
        let today = NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();
        let factors = vec!["exercise".to_string()];

        let mut output = Vec::new();
        record(&mut output, &db, &entry(&factors), today).unwrap();

        let output = String::from_utf8(output).unwrap();
        assert_eq!(output, "Logged 2026-03-14: 8h of sleep, quality 8/10\n");

        let logs = db.list_logs().unwrap();
        assert_eq!(logs.len(), 1);
        assert_eq!(logs[0].date, today);
        assert_eq!(logs[0].mood, Mood::Refreshed);
        assert_eq!(logs[0].factors, vec!["exercise"]);
    }

    #[test]
    fn record_resolves_date_keywords() {
        let db = Database::open_in_memory().unwrap();
        let today = NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();
        let mut args = entry(&[]);
        args.date = "yesterday";

        let mut output = Vec::new();
        record(&mut output, &db, &args, today).unwrap();

        let logs = db.list_logs().unwrap();
        assert_eq!(logs[0].date, NaiveDate::from_ymd_opt(2026, 3, 13).unwrap());
    }

    #[test]
    fn record_rejects_bad_quality() {
        let db = Database::open_in_memory().unwrap();
        let today = NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();
        let mut args = entry(&[]);
        args.quality = 14;

        let mut output = Vec::new();
        let err = record(&mut output, &db, &args, today).unwrap_err();
        assert!(err.to_string().contains("between 1 and 10"));
        assert_eq!(db.count_logs().unwrap(), 0);
    }

    #[test]
    fn record_rejects_bad_time() {
        let db = Database::open_in_memory().unwrap();
        let today = NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();
        let mut args = entry(&[]);
        args.bedtime = "ten thirty";

        let mut output = Vec::new();
        assert!(record(&mut output, &db, &args, today).is_err());
        assert_eq!(db.count_logs().unwrap(), 0);
    }
}
