//! Sleep analytics engine.
//!
//! Pure, synchronous computations over a caller-owned collection of sleep
//! records:
//! - Duration: bed-to-wake arithmetic across midnight
//! - Streaks: consecutive logged days ending today
//! - Aggregates: averages, weekday buckets, factor/quality ranking
//! - Mode: most-common-value extraction
//! - Trend: week-over-week duration classification
//!
//! Nothing here does I/O or retains state between calls; persistence and
//! rendering live in the surrounding crates.

pub mod duration;
pub mod log;
pub mod mode;
pub mod mood;
pub mod stats;
pub mod streak;
pub mod trend;
pub mod types;

pub use duration::compute_duration;
pub use log::{NewSleepLog, SleepLog, parse_date, parse_time};
pub use mode::most_common;
pub use mood::Mood;
pub use stats::{
    FactorStats, StatsError, WeekdayStats, average_duration, average_quality, best_day,
    factor_quality_stats, weekday_stats,
};
pub use streak::current_streak;
pub use trend::{TREND_MIN_RECORDS, TREND_THRESHOLD_HOURS, TREND_WINDOW, Trend, weekly_trend};
pub use types::{LogId, Quality, ValidationError};
