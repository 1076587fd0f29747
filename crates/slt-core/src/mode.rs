//! Most-common-value extraction.

use std::collections::HashMap;
use std::hash::Hash;

use crate::stats::StatsError;

/// Returns the most frequently occurring value in `values`.
///
/// Ties resolve to the value encountered first in input order. Signals
/// [`StatsError::EmptyInput`] for an empty sequence so callers render an
/// unavailable state instead of a fabricated answer.
pub fn most_common<T: Eq + Hash>(values: &[T]) -> Result<&T, StatsError> {
    let mut counts: HashMap<&T, usize> = HashMap::with_capacity(values.len());
    for value in values {
        *counts.entry(value).or_insert(0) += 1;
    }

    // Scanning in input order with a strict comparison makes the
    // first-encountered value win ties
    let mut best: Option<(&T, usize)> = None;
    for value in values {
        let count = counts[value];
        if best.is_none_or(|(_, best_count)| count > best_count) {
            best = Some((value, count));
        }
    }
    best.map(|(value, _)| value).ok_or(StatsError::EmptyInput)
}
