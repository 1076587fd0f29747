//! The sleep record type and its construction-time normalization.

use std::collections::HashSet;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::duration::compute_duration;
use crate::mood::Mood;
use crate::types::{LogId, Quality, ValidationError};

/// One logged night of sleep.
///
/// Immutable once created. `duration_hours` is derived from the bed and wake
/// times at construction and stored redundantly; analytics read it as-is and
/// never recompute it, so it must round-trip storage exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SleepLog {
    pub id: LogId,
    /// The night the session is attributed to.
    pub date: NaiveDate,
    pub bedtime: NaiveTime,
    pub waketime: NaiveTime,
    /// Derived at construction; see [`compute_duration`].
    pub duration_hours: f64,
    pub quality: Quality,
    pub mood: Mood,
    /// Insertion-ordered set: normalized at construction, duplicates dropped,
    /// first occurrence wins.
    #[serde(default)]
    pub factors: Vec<String>,
    #[serde(default)]
    pub notes: String,
}

/// Field set for a new record, before the duration is derived.
#[derive(Debug, Clone)]
pub struct NewSleepLog {
    pub id: LogId,
    pub date: NaiveDate,
    pub bedtime: NaiveTime,
    pub waketime: NaiveTime,
    pub quality: Quality,
    pub mood: Mood,
    pub factors: Vec<String>,
    pub notes: String,
}

impl SleepLog {
    /// Builds a record from validated fields, deriving `duration_hours` and
    /// normalizing `factors`.
    #[must_use]
    pub fn new(draft: NewSleepLog) -> Self {
        let duration_hours = compute_duration(draft.bedtime, draft.waketime, draft.date);
        Self {
            id: draft.id,
            date: draft.date,
            bedtime: draft.bedtime,
            waketime: draft.waketime,
            duration_hours,
            quality: draft.quality,
            mood: draft.mood,
            factors: normalize_factors(draft.factors),
            notes: draft.notes,
        }
    }
}

/// Trims factor tags, drops empties, and deduplicates preserving first
/// occurrence.
fn normalize_factors(factors: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut normalized = Vec::with_capacity(factors.len());
    for factor in factors {
        let factor = factor.trim();
        if factor.is_empty() || !seen.insert(factor.to_string()) {
            continue;
        }
        normalized.push(factor.to_string());
    }
    normalized
}

/// Parses a `YYYY-MM-DD` date, also accepting the `today` and `yesterday`
/// keywords relative to the caller-supplied reference date.
pub fn parse_date(s: &str, today: NaiveDate) -> Result<NaiveDate, ValidationError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(ValidationError::Empty { field: "date" });
    }
    match s {
        "today" => Ok(today),
        "yesterday" => Ok(today.pred_opt().unwrap_or(today)),
        _ => NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| ValidationError::InvalidDate {
            value: s.to_string(),
        }),
    }
}

/// Parses an `HH:MM` time of day.
pub fn parse_time(s: &str) -> Result<NaiveTime, ValidationError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(ValidationError::Empty { field: "time" });
    }
    NaiveTime::parse_from_str(s, "%H:%M").map_err(|_| ValidationError::InvalidTime {
        value: s.to_string(),
    })
}
