//! Aggregate statistics over the record collection.
//!
//! Tie-breaks are an explicit contract, not an accident of map iteration:
//! weekday and factor buckets remember the order they were first populated,
//! and equal averages resolve in favor of the earlier bucket.

use std::collections::HashMap;

use chrono::{Datelike, Weekday};
use thiserror::Error;

use crate::log::SleepLog;

/// Errors for computations that need a non-empty (or large enough) sample.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum StatsError {
    /// An aggregation was requested over zero records.
    #[error("no sleep records to analyze")]
    EmptyInput,

    /// Fewer records than the computation needs for a meaningful answer.
    #[error("need at least {needed} records, got {actual}")]
    InsufficientSample { needed: usize, actual: usize },
}

/// Aggregate for one weekday bucket.
#[derive(Debug, Clone, PartialEq)]
pub struct WeekdayStats {
    pub weekday: Weekday,
    /// Number of records falling on this weekday.
    pub count: usize,
    pub avg_duration_hours: f64,
}

/// Aggregate for one factor tag.
#[derive(Debug, Clone, PartialEq)]
pub struct FactorStats {
    pub factor: String,
    /// Number of records carrying this factor.
    pub count: usize,
    pub avg_quality: f64,
}

/// Arithmetic mean of stored durations.
#[expect(clippy::cast_precision_loss, reason = "record counts are small")]
pub fn average_duration(logs: &[SleepLog]) -> Result<f64, StatsError> {
    if logs.is_empty() {
        return Err(StatsError::EmptyInput);
    }
    let total: f64 = logs.iter().map(|log| log.duration_hours).sum();
    Ok(total / logs.len() as f64)
}

/// Arithmetic mean of quality ratings.
#[expect(clippy::cast_precision_loss, reason = "record counts are small")]
pub fn average_quality(logs: &[SleepLog]) -> Result<f64, StatsError> {
    if logs.is_empty() {
        return Err(StatsError::EmptyInput);
    }
    let total: f64 = logs
        .iter()
        .map(|log| f64::from(log.quality.value()))
        .sum();
    Ok(total / logs.len() as f64)
}

/// Buckets records by the weekday of their date.
///
/// Buckets appear in the order they were first populated by the input; that
/// order is the tie-break contract for [`best_day`]. Callers wanting
/// calendar ordering can sort by [`Weekday::num_days_from_sunday`].
#[expect(clippy::cast_precision_loss, reason = "record counts are small")]
pub fn weekday_stats(logs: &[SleepLog]) -> Vec<WeekdayStats> {
    let mut order: Vec<Weekday> = Vec::new();
    let mut buckets: HashMap<Weekday, (usize, f64)> = HashMap::new();

    for log in logs {
        let weekday = log.date.weekday();
        let (count, total) = buckets.entry(weekday).or_insert_with(|| {
            order.push(weekday);
            (0, 0.0)
        });
        *count += 1;
        *total += log.duration_hours;
    }

    order
        .into_iter()
        .map(|weekday| {
            let (count, total) = buckets[&weekday];
            WeekdayStats {
                weekday,
                count,
                avg_duration_hours: total / count as f64,
            }
        })
        .collect()
}

/// The weekday with the highest average duration.
///
/// Ties resolve to the bucket first populated by the input.
pub fn best_day(logs: &[SleepLog]) -> Result<WeekdayStats, StatsError> {
    let mut best: Option<WeekdayStats> = None;
    for bucket in weekday_stats(logs) {
        if best
            .as_ref()
            .is_none_or(|b| bucket.avg_duration_hours > b.avg_duration_hours)
        {
            best = Some(bucket);
        }
    }
    best.ok_or(StatsError::EmptyInput)
}

/// Per-factor average quality, sorted by descending average.
///
/// A record contributes its full quality rating once to each distinct factor
/// it carries. Equal averages keep first-seen factor order. Empty input
/// yields an empty sequence rather than an error; there is no single
/// aggregate to withhold.
#[expect(clippy::cast_precision_loss, reason = "record counts are small")]
pub fn factor_quality_stats(logs: &[SleepLog]) -> Vec<FactorStats> {
    let mut order: Vec<String> = Vec::new();
    let mut buckets: HashMap<String, (usize, u64)> = HashMap::new();

    for log in logs {
        for (idx, factor) in log.factors.iter().enumerate() {
            // A tag repeated within one record counts one night
            if log.factors[..idx].contains(factor) {
                continue;
            }
            let (count, quality_sum) = buckets.entry(factor.clone()).or_insert_with(|| {
                order.push(factor.clone());
                (0, 0)
            });
            *count += 1;
            *quality_sum += u64::from(log.quality.value());
        }
    }

    let mut stats: Vec<FactorStats> = order
        .into_iter()
        .map(|factor| {
            let (count, quality_sum) = buckets[&factor];
            FactorStats {
                factor,
                count,
                avg_quality: quality_sum as f64 / count as f64,
            }
        })
        .collect();

    // Stable sort keeps first-seen order among equal averages
    stats.sort_by(|a, b| b.avg_quality.total_cmp(&a.avg_quality));
    stats
}
