//! List command for showing recently recorded nights.

use std::fmt::Write;

use anyhow::Result;

use slt_core::SleepLog;
use slt_db::Database;

use super::util::format_hours;

/// Formats the human-readable listing, newest night first.
///
/// The no-data state keys off `total`, not the fetched page, so a zero
/// limit still reports the nights it hides.
pub fn format_list(logs: &[SleepLog], total: u64) -> String {
    let mut output = String::new();

    if total == 0 {
        writeln!(output, "No sleep logged yet.").unwrap();
        writeln!(output).unwrap();
        writeln!(
            output,
            "Hint: Run 'slt log --bedtime 22:30 --waketime 06:30 --quality 7' to record a night."
        )
        .unwrap();
        return output;
    }

    writeln!(output, "RECENT SLEEP").unwrap();
    writeln!(output, "────────────").unwrap();

    for log in logs {
        let date = log.date.format("%a, %b %-d").to_string();
        let duration = format_hours(log.duration_hours);
        let times = format!(
            "{} - {}",
            log.bedtime.format("%H:%M"),
            log.waketime.format("%H:%M")
        );
        let quality = log.quality.to_string();
        let mut line = format!(
            "{date:<12} {duration:>7}  {times}  {quality:>5}  {} {}",
            log.mood.emoji(),
            log.mood.label()
        );
        if !log.factors.is_empty() {
            write!(line, "  [{}]", log.factors.join(", ")).unwrap();
        }
        writeln!(output, "{line}").unwrap();
    }

    let remaining = total.saturating_sub(logs.len() as u64);
    if remaining > 0 {
        writeln!(output, "... and {remaining} more").unwrap();
    }

    output
}

/// Runs the list command.
pub fn run(db: &Database, limit: u32, json: bool) -> Result<()> {
    let logs = db.list_recent_logs(limit as usize)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&logs)?);
    } else {
        let total = db.count_logs()?;
        print!("{}", format_list(&logs, total));
    }

    Ok(())
}
