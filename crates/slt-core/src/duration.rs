//! Sleep duration arithmetic.
//!
//! A session's bedtime is anchored on the record's date. The wake time falls
//! on the same date unless that would put it at or before the bedtime, in
//! which case it rolls over to the next day. Equal bed and wake times
//! therefore wrap to a full 24-hour session, not a zero-length one.

use chrono::{NaiveDate, NaiveTime};

/// Computes the hours slept for one session, rounded to one decimal place
/// (half away from zero).
///
/// `bedtime == waketime` wraps to the next day and yields exactly `24.0`.
#[expect(
    clippy::cast_precision_loss,
    reason = "session spans are at most 24h of seconds, exact in f64"
)]
pub fn compute_duration(bedtime: NaiveTime, waketime: NaiveTime, date: NaiveDate) -> f64 {
    let wake_date = if waketime <= bedtime {
        date.succ_opt().unwrap_or(date)
    } else {
        date
    };

    let seconds = wake_date
        .and_time(waketime)
        .signed_duration_since(date.and_time(bedtime))
        .num_seconds()
        .max(0);
    let hours = seconds as f64 / 3600.0;
    (hours * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 14).unwrap()
    }

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    #[expect(clippy::float_cmp, reason = "exact values intended")]
    fn cross_midnight_session() {
        assert_eq!(compute_duration(t(23, 0), t(7, 0), date()), 8.0);
        assert_eq!(compute_duration(t(22, 30), t(6, 30), date()), 8.0);
    }

    #[test]
    #[expect(clippy::float_cmp, reason = "exact values intended")]
    fn same_day_session() {
        // Afternoon nap logged with wake strictly after bed
        assert_eq!(compute_duration(t(13, 0), t(14, 30), date()), 1.5);
        assert_eq!(compute_duration(t(0, 15), t(9, 15), date()), 9.0);
    }

    #[test]
    #[expect(clippy::float_cmp, reason = "exact values intended")]
    fn rounds_half_away_from_zero() {
        // 8h15m = 8.25h rounds up to 8.3
        assert_eq!(compute_duration(t(22, 30), t(6, 45), date()), 8.3);
        // 7h45m = 7.75h rounds up to 7.8
        assert_eq!(compute_duration(t(23, 0), t(6, 45), date()), 7.8);
        // 6h10m = 6.1666h rounds to 6.2
        assert_eq!(compute_duration(t(23, 50), t(6, 0), date()), 6.2);
    }

    #[test]
    #[expect(clippy::float_cmp, reason = "exact values intended")]
    fn equal_times_wrap_to_full_day() {
        assert_eq!(compute_duration(t(22, 0), t(22, 0), date()), 24.0);
        assert_eq!(compute_duration(t(0, 0), t(0, 0), date()), 24.0);
    }

    #[test]
    fn wake_before_bed_wraps_to_under_a_day() {
        let hours = compute_duration(t(22, 0), t(21, 0), date());
        assert!(hours > 0.0 && hours < 24.0);
        // 23 hours exactly
        assert!((hours - 23.0).abs() < f64::EPSILON);
    }

    #[test]
    #[expect(clippy::float_cmp, reason = "exact values intended")]
    fn one_minute_session_rounds_to_zero() {
        // 23:59 to midnight is a real session but rounds below 0.05h
        assert_eq!(compute_duration(t(23, 59), t(0, 0), date()), 0.0);
    }
}
