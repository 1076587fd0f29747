//! Shared formatting helpers for command output.

use chrono::{NaiveTime, Weekday};

// ========== Duration Formatting ==========

/// Formats fractional hours as a duration string.
/// Returns "Xh Ym" when there are leftover minutes, "Xh" otherwise.
/// Negative durations are treated as "0h".
#[expect(
    clippy::cast_possible_truncation,
    reason = "whole hours and minutes fit i64 after floor/round"
)]
pub fn format_hours(hours: f64) -> String {
    if hours <= 0.0 {
        return "0h".to_string();
    }
    let whole = hours.floor();
    let mut h = whole as i64;
    let mut m = ((hours - whole) * 60.0).round() as i64;
    // Rounding can carry to a full hour (e.g. 7.996 -> 7h + 60m)
    if m == 60 {
        h += 1;
        m = 0;
    }

    if m > 0 {
        format!("{h}h {m}m")
    } else {
        format!("{h}h")
    }
}

// ========== Clock Formatting ==========

/// Formats a clock time in 12-hour notation, e.g. "10:30 PM".
pub fn format_time_12h(time: NaiveTime) -> String {
    time.format("%-I:%M %p").to_string()
}

// ========== Duration Bar ==========

/// Generates a 10-character bar proportional to `value / max`.
/// Values below 5% of max get a single block so they stay visible.
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "ratio is clamped to 0..=10 before the cast"
)]
pub fn duration_bar(value: f64, max: f64) -> String {
    if max <= 0.0 {
        return "░░░░░░░░░░".to_string();
    }

    let ratio = value / max;
    let filled = if ratio < 0.05 && value > 0.0 {
        1
    } else {
        (ratio * 10.0).round().clamp(0.0, 10.0) as usize
    };

    let empty = 10 - filled;
    format!("{}{}", "█".repeat(filled), "░".repeat(empty))
}

// ========== Labels ==========

/// Uppercases the first character, e.g. "exercise" -> "Exercise".
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().collect::<String>() + chars.as_str()
    })
}

/// Full weekday name, e.g. "Saturday".
pub const fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
