//! Stats command for summary statistics over the recorded history.

use std::fmt::Write;

use anyhow::Result;
use chrono::{Local, NaiveDate};
use serde::Serialize;

use slt_core::{SleepLog, average_duration, average_quality, current_streak};
use slt_db::Database;

use super::util::{duration_bar, format_hours};

/// Computed figures for the stats output.
#[derive(Debug)]
pub struct StatsSummary {
    pub average_duration_hours: f64,
    pub average_quality: f64,
    pub current_streak: u32,
    pub nights_logged: usize,
    /// Up to the last seven nights by date, oldest first.
    pub recent: Vec<(NaiveDate, f64)>,
}

/// Computes the stats figures. Returns `None` when nothing is recorded.
pub fn stats_summary(logs: &[SleepLog], today: NaiveDate) -> Option<StatsSummary> {
    let average_duration_hours = average_duration(logs).ok()?;
    let average_quality = average_quality(logs).ok()?;

    // Stable date sort, then the positional last seven for the chart
    let mut sorted: Vec<&SleepLog> = logs.iter().collect();
    sorted.sort_by_key(|log| log.date);
    let recent = sorted
        .iter()
        .skip(sorted.len().saturating_sub(7))
        .map(|log| (log.date, log.duration_hours))
        .collect();

    Some(StatsSummary {
        average_duration_hours,
        average_quality,
        current_streak: current_streak(logs, today),
        nights_logged: logs.len(),
        recent,
    })
}

/// Formats the human-readable stats output.
pub fn format_stats(summary: Option<&StatsSummary>) -> String {
    let mut output = String::new();

    let Some(summary) = summary else {
        writeln!(output, "No sleep logged yet.").unwrap();
        writeln!(output).unwrap();
        writeln!(output, "Hint: Run 'slt log' to record a night.").unwrap();
        return output;
    };

    let streak_word = if summary.current_streak == 1 {
        "night"
    } else {
        "nights"
    };

    writeln!(output, "SLEEP STATS").unwrap();
    writeln!(output, "───────────").unwrap();
    writeln!(
        output,
        "Average sleep:   {}",
        format_hours(summary.average_duration_hours)
    )
    .unwrap();
    writeln!(output, "Average quality: {:.1}/10", summary.average_quality).unwrap();
    writeln!(
        output,
        "Current streak:  {} {streak_word}",
        summary.current_streak
    )
    .unwrap();
    writeln!(output, "Nights logged:   {}", summary.nights_logged).unwrap();

    let max = summary
        .recent
        .iter()
        .map(|(_, hours)| *hours)
        .fold(0.0, f64::max);

    writeln!(output).unwrap();
    writeln!(output, "RECENT NIGHTS").unwrap();
    writeln!(output, "─────────────").unwrap();
    for (date, hours) in &summary.recent {
        writeln!(
            output,
            "{}  {}  {:>7}",
            date.format("%b %d"),
            duration_bar(*hours, max),
            format_hours(*hours)
        )
        .unwrap();
    }

    output
}

// ========== JSON Output ==========

/// JSON stats structure.
#[derive(Debug, Serialize)]
pub struct JsonStats {
    pub nights_logged: usize,
    pub current_streak: u32,
    pub average_duration_hours: Option<f64>,
    pub average_quality: Option<f64>,
}

/// Formats stats as JSON.
pub fn format_stats_json(summary: Option<&StatsSummary>) -> Result<String> {
    let stats = summary.map_or(
        JsonStats {
            nights_logged: 0,
            current_streak: 0,
            average_duration_hours: None,
            average_quality: None,
        },
        |s| JsonStats {
            nights_logged: s.nights_logged,
            current_streak: s.current_streak,
            average_duration_hours: Some(s.average_duration_hours),
            average_quality: Some(s.average_quality),
        },
    );

    Ok(serde_json::to_string_pretty(&stats)?)
}

// ========== Public Interface ==========

/// Runs the stats command.
pub fn run(db: &Database, json: bool) -> Result<()> {
    let logs = db.list_logs()?;
    let today = Local::now().date_naive();
    let summary = stats_summary(&logs, today);

    if json {
        println!("{}", format_stats_json(summary.as_ref())?);
    } else {
        print!("{}", format_stats(summary.as_ref()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::NaiveTime;
    use slt_core::{LogId, Mood, Quality};

    fn night(date: &str, duration_hours: f64, quality: i64) -> SleepLog {
        SleepLog {
            id: LogId::new(format!("night-{date}")).unwrap(),
            date: date.parse().unwrap(),
            bedtime: NaiveTime::from_hms_opt(22, 30, 0).unwrap(),
            waketime: NaiveTime::from_hms_opt(6, 30, 0).unwrap(),
            duration_hours,
            quality: Quality::new(quality).unwrap(),
            mood: Mood::Neutral,
            factors: Vec::new(),
            notes: String::new(),
        }
    }

    #[test]
    fn summary_is_none_when_empty() {
        let today = NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();
        assert!(stats_summary(&[], today).is_none());
    }

    #[test]
    fn summary_averages_and_streak() {
        let today = NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();
        let logs = vec![
            night("2026-03-13", 6.0, 6),
            night("2026-03-14", 8.0, 8),
        ];
        let summary = stats_summary(&logs, today).unwrap();

        assert!((summary.average_duration_hours - 7.0).abs() < 1e-9);
        assert!((summary.average_quality - 7.0).abs() < 1e-9);
        assert_eq!(summary.current_streak, 2);
        assert_eq!(summary.nights_logged, 2);
    }

    #[test]
    fn summary_chart_takes_last_seven_by_date() {
        let today = NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();
        // Nine nights inserted out of order
        let mut logs: Vec<SleepLog> = (6..=14)
            .map(|day| night(&format!("2026-03-{day:02}"), 7.0, 7))
            .collect();
        logs.reverse();

        let summary = stats_summary(&logs, today).unwrap();
        assert_eq!(summary.recent.len(), 7);
        assert_eq!(
            summary.recent.first().unwrap().0,
            NaiveDate::from_ymd_opt(2026, 3, 8).unwrap()
        );
        assert_eq!(
            summary.recent.last().unwrap().0,
            NaiveDate::from_ymd_opt(2026, 3, 14).unwrap()
        );
    }

    #[test]
    fn format_stats_empty_shows_hint() {
        let output = format_stats(None);
        assert!(output.contains("No sleep logged yet."));
        assert!(output.contains("Hint: Run 'slt log'"));
    }

    #[test]
    fn format_stats_renders_summary_and_chart() {
        let today = NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();
        let logs = vec![
            night("2026-03-13", 6.0, 6),
            night("2026-03-14", 8.0, 8),
        ];
        let summary = stats_summary(&logs, today).unwrap();
        let output = format_stats(Some(&summary));

        assert!(output.contains("Average sleep:   7h"));
        assert!(output.contains("Average quality: 7.0/10"));
        assert!(output.contains("Current streak:  2 nights"));
        assert!(output.contains("Nights logged:   2"));
        assert!(output.contains("RECENT NIGHTS"));
        assert!(output.contains("Mar 14  ██████████"));
        assert!(output.contains("Mar 13  ████████░░"));
    }

    #[test]
    fn format_stats_singular_streak() {
        let today = NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();
        let logs = vec![night("2026-03-14", 8.0, 8)];
        let summary = stats_summary(&logs, today).unwrap();
        let output = format_stats(Some(&summary));
        assert!(output.contains("Current streak:  1 night\n"));
    }

    #[test]
    fn json_stats_nulls_averages_when_empty() {
        let json = format_stats_json(None).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["nights_logged"], 0);
        assert!(value["average_duration_hours"].is_null());
    }

    #[test]
    fn json_stats_carries_raw_averages() {
        let today = NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();
        let logs = vec![
            night("2026-03-13", 6.5, 6),
            night("2026-03-14", 8.0, 9),
        ];
        let summary = stats_summary(&logs, today).unwrap();
        let json = format_stats_json(Some(&summary)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["average_duration_hours"], 7.25);
        assert_eq!(value["average_quality"], 7.5);
        assert_eq!(value["current_streak"], 2);
    }
}
