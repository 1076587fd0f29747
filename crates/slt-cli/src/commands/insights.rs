//! Insights command for sleep pattern analysis.

use std::fmt::Write;

use anyhow::Result;
use chrono::{NaiveTime, Weekday};
use serde::Serialize;

use slt_core::{
    FactorStats, SleepLog, StatsError, Trend, best_day, factor_quality_stats, most_common,
    weekly_trend,
};
use slt_db::Database;

use super::util::{capitalize, duration_bar, format_hours, format_time_12h, weekday_name};

/// Computed insight set.
#[derive(Debug)]
pub struct InsightData {
    /// Weekday with the highest average duration, with that average.
    pub best_day: Option<(Weekday, f64)>,
    /// Most common bedtime among nights rated 8 or higher.
    pub optimal_bedtime: Option<NaiveTime>,
    pub trend: Result<Trend, StatsError>,
    /// Factor averages, best first.
    pub factors: Vec<FactorStats>,
}

/// Computes the insights. Returns `None` when nothing is recorded.
pub fn insight_data(logs: &[SleepLog]) -> Option<InsightData> {
    if logs.is_empty() {
        return None;
    }

    let best = best_day(logs)
        .ok()
        .map(|stats| (stats.weekday, stats.avg_duration_hours));

    let high_quality_bedtimes: Vec<NaiveTime> = logs
        .iter()
        .filter(|log| log.quality.is_high())
        .map(|log| log.bedtime)
        .collect();
    let optimal_bedtime = most_common(&high_quality_bedtimes).ok().copied();

    Some(InsightData {
        best_day: best,
        optimal_bedtime,
        trend: weekly_trend(logs),
        factors: factor_quality_stats(logs),
    })
}

/// Formats the human-readable insights output.
pub fn format_insights(data: Option<&InsightData>) -> String {
    let mut output = String::new();

    let Some(data) = data else {
        writeln!(output, "No sleep logged yet.").unwrap();
        writeln!(output).unwrap();
        writeln!(output, "Hint: Run 'slt log' to record a night.").unwrap();
        return output;
    };

    let best_day_line = data.best_day.as_ref().map_or_else(
        || "N/A".to_string(),
        |(day, avg)| format!("{} (avg {})", weekday_name(*day), format_hours(*avg)),
    );
    let bedtime_line = data
        .optimal_bedtime
        .map_or_else(|| "N/A".to_string(), format_time_12h);
    let trend_line = match &data.trend {
        Ok(trend) => format!("{} {}", trend.arrow(), capitalize(trend.as_str())),
        Err(StatsError::InsufficientSample { needed, actual }) => {
            format!("N/A ({actual} of {needed} nights)")
        }
        Err(StatsError::EmptyInput) => "N/A".to_string(),
    };

    writeln!(output, "SLEEP INSIGHTS").unwrap();
    writeln!(output, "──────────────").unwrap();
    writeln!(output, "Best sleep day:  {best_day_line}").unwrap();
    writeln!(output, "Optimal bedtime: {bedtime_line}").unwrap();
    writeln!(output, "Weekly trend:    {trend_line}").unwrap();

    writeln!(output).unwrap();
    writeln!(output, "FACTOR IMPACT").unwrap();
    writeln!(output, "─────────────").unwrap();
    if data.factors.is_empty() {
        writeln!(output, "(no factors recorded)").unwrap();
    } else {
        for factor in &data.factors {
            let night_word = if factor.count == 1 { "night" } else { "nights" };
            writeln!(
                output,
                "{:<14} {}  {:.1}/10  ({} {night_word})",
                capitalize(&factor.factor),
                duration_bar(factor.avg_quality, 10.0),
                factor.avg_quality,
                factor.count
            )
            .unwrap();
        }
    }

    output
}

// ========== JSON Output ==========

/// JSON insights structure.
#[derive(Debug, Serialize)]
pub struct JsonInsights {
    pub best_day: Option<JsonBestDay>,
    pub optimal_bedtime: Option<String>,
    pub weekly_trend: Option<String>,
    pub factors: Vec<JsonFactor>,
}

#[derive(Debug, Serialize)]
pub struct JsonBestDay {
    pub weekday: String,
    pub avg_duration_hours: f64,
}

#[derive(Debug, Serialize)]
pub struct JsonFactor {
    pub factor: String,
    pub avg_quality: f64,
    pub count: usize,
}

/// Formats insights as JSON.
pub fn format_insights_json(data: Option<&InsightData>) -> Result<String> {
    let insights = data.map_or(
        JsonInsights {
            best_day: None,
            optimal_bedtime: None,
            weekly_trend: None,
            factors: Vec::new(),
        },
        |d| JsonInsights {
            best_day: d.best_day.as_ref().map(|(day, avg)| JsonBestDay {
                weekday: weekday_name(*day).to_string(),
                avg_duration_hours: *avg,
            }),
            optimal_bedtime: d
                .optimal_bedtime
                .map(|t| t.format("%H:%M").to_string()),
            weekly_trend: d.trend.ok().map(|t| t.as_str().to_string()),
            factors: d
                .factors
                .iter()
                .map(|f| JsonFactor {
                    factor: f.factor.clone(),
                    avg_quality: f.avg_quality,
                    count: f.count,
                })
                .collect(),
        },
    );

    Ok(serde_json::to_string_pretty(&insights)?)
}

// ========== Public Interface ==========

/// Runs the insights command.
pub fn run(db: &Database, json: bool) -> Result<()> {
    let logs = db.list_logs()?;
    let data = insight_data(&logs);

    if json {
        println!("{}", format_insights_json(data.as_ref())?);
    } else {
        print!("{}", format_insights(data.as_ref()));
    }

    Ok(())
}
