//! Import command for reading JSON Lines history from stdin.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};

use slt_core::{NewSleepLog, SleepLog};
use slt_db::Database;

/// Runs the import command.
pub fn run(db: &mut Database) -> Result<()> {
    let stdin = io::stdin();
    let logs = parse_logs(stdin.lock())?;

    let stdout = io::stdout();
    import(&mut stdout.lock(), db, &logs)
}

/// Parses one record per line, skipping blank lines.
///
/// Each record is rebuilt through [`SleepLog::new`], so the stored duration
/// and factor list end up exactly as if the night had been logged directly.
fn parse_logs<R: BufRead>(reader: R) -> Result<Vec<SleepLog>> {
    let mut logs = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("failed to read line {}", idx + 1))?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let log: SleepLog = serde_json::from_str(trimmed)
            .with_context(|| format!("invalid record on line {}", idx + 1))?;
        // Rebuild through the constructor to renormalize external data
        logs.push(SleepLog::new(NewSleepLog {
            id: log.id,
            date: log.date,
            bedtime: log.bedtime,
            waketime: log.waketime,
            quality: log.quality,
            mood: log.mood,
            factors: log.factors,
            notes: log.notes,
        }));
    }
    Ok(logs)
}

/// Inserts the parsed records, skipping IDs already present.
fn import<W: Write>(writer: &mut W, db: &mut Database, logs: &[SleepLog]) -> Result<()> {
    let inserted = db.insert_logs(logs)?;
    let skipped = logs.len() - inserted;
    tracing::debug!(inserted, skipped, "imported sleep logs");

    let night_word = if inserted == 1 { "night" } else { "nights" };
    writeln!(writer, "Imported {inserted} {night_word}.")?;
    if skipped > 0 {
        writeln!(writer, "Skipped {skipped} with duplicate IDs.")?;
    }
    Ok(())
}
