//! Week-over-week duration trend.
//!
//! Windows are positional, not calendar-aligned: after a date sort, the last
//! seven records are "this week" and the seven before them "last week", even
//! if the history has gaps.

use std::fmt;

use crate::log::SleepLog;
use crate::stats::StatsError;

/// Records per comparison window.
pub const TREND_WINDOW: usize = 7;

/// Minimum records before a trend is reported at all.
pub const TREND_MIN_RECORDS: usize = 2 * TREND_WINDOW;

/// Average-duration change (hours) within which the trend reads as stable.
/// Guards against single-night measurement noise.
pub const TREND_THRESHOLD_HOURS: f64 = 0.3;

/// Coarse classification of recent versus prior average sleep duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trend {
    Improving,
    Stable,
    Declining,
}

impl Trend {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Improving => "improving",
            Self::Stable => "stable",
            Self::Declining => "declining",
        }
    }

    /// Arrow glyph for dashboard display.
    #[must_use]
    pub const fn arrow(&self) -> &'static str {
        match self {
            Self::Improving => "\u{2197}",
            Self::Stable => "\u{2192}",
            Self::Declining => "\u{2198}",
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifies the duration change between the last seven records and the
/// seven before them, after sorting by date ascending.
///
/// Signals [`StatsError::InsufficientSample`] below [`TREND_MIN_RECORDS`];
/// a short history never reads as [`Trend::Stable`].
pub fn weekly_trend(logs: &[SleepLog]) -> Result<Trend, StatsError> {
    if logs.len() < TREND_MIN_RECORDS {
        return Err(StatsError::InsufficientSample {
            needed: TREND_MIN_RECORDS,
            actual: logs.len(),
        });
    }

    // Stable sort: records sharing a date keep insertion order
    let mut sorted: Vec<&SleepLog> = logs.iter().collect();
    sorted.sort_by_key(|log| log.date);

    let recent = &sorted[sorted.len() - TREND_WINDOW..];
    let previous = &sorted[sorted.len() - TREND_MIN_RECORDS..sorted.len() - TREND_WINDOW];
    let delta = window_average(recent) - window_average(previous);

    Ok(if delta > TREND_THRESHOLD_HOURS {
        Trend::Improving
    } else if delta < -TREND_THRESHOLD_HOURS {
        Trend::Declining
    } else {
        Trend::Stable
    })
}

#[expect(clippy::cast_precision_loss, reason = "window length is 7")]
fn window_average(window: &[&SleepLog]) -> f64 {
    let total: f64 = window.iter().map(|log| log.duration_hours).sum();
    total / window.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log::SleepLog;
    use crate::log::test_support::log_hours;
    use chrono::NaiveDate;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, day).unwrap()
    }

    /// Fourteen consecutive nights: seven at `previous` hours, then seven at
    /// `recent` hours.
    fn two_weeks(previous: f64, recent: f64) -> Vec<SleepLog> {
        (1..=14)
            .map(|day| log_hours(d(day), if day <= 7 { previous } else { recent }))
            .collect()
    }

    #[test]
    fn longer_recent_week_reads_improving() {
        // 7.0 vs 6.5: delta 0.5 clears the threshold
        assert_eq!(weekly_trend(&two_weeks(6.5, 7.0)).unwrap(), Trend::Improving);
    }

    #[test]
    fn small_delta_reads_stable() {
        // 6.25 vs 6.0: delta 0.25 is inside the threshold
        assert_eq!(weekly_trend(&two_weeks(6.0, 6.25)).unwrap(), Trend::Stable);
    }

    #[test]
    fn shorter_recent_week_reads_declining() {
        assert_eq!(weekly_trend(&two_weeks(7.0, 6.25)).unwrap(), Trend::Declining);
    }

    #[test]
    fn too_few_records_signals_insufficient_sample() {
        let logs: Vec<SleepLog> = (1..=10).map(|day| log_hours(d(day), 7.0)).collect();
        assert_eq!(
            weekly_trend(&logs),
            Err(StatsError::InsufficientSample {
                needed: 14,
                actual: 10
            })
        );
        assert!(weekly_trend(&[]).is_err());
    }

    #[test]
    fn records_are_sorted_by_date_before_windowing() {
        // Supplied newest-first; the sort must put the short nights in the
        // recent window
        let mut logs = two_weeks(7.5, 6.0);
        logs.reverse();
        assert_eq!(weekly_trend(&logs).unwrap(), Trend::Declining);
    }

    #[test]
    fn only_the_last_fourteen_records_count() {
        // An ancient outlier outside both windows must not affect the verdict
        let mut logs = vec![log_hours(d(1), 24.0)];
        logs.extend((2..=15).map(|day| log_hours(d(day), 7.0)));
        assert_eq!(weekly_trend(&logs).unwrap(), Trend::Stable);
    }

    #[test]
    fn windows_ignore_calendar_gaps() {
        // Seven nights in early March, then a gap, then seven in late March:
        // still two adjacent positional windows
        let mut logs: Vec<SleepLog> = (1..=7).map(|day| log_hours(d(day), 6.0)).collect();
        logs.extend((20..=26).map(|day| log_hours(d(day), 7.0)));
        assert_eq!(weekly_trend(&logs).unwrap(), Trend::Improving);
    }

    #[test]
    fn display_matches_labels() {
        assert_eq!(Trend::Improving.to_string(), "improving");
        assert_eq!(Trend::Stable.to_string(), "stable");
        assert_eq!(Trend::Declining.to_string(), "declining");
    }
}
