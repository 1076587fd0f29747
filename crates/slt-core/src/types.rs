//! Core type definitions with validation.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation errors for core types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided value was empty.
    #[error("{field} cannot be empty")]
    Empty { field: &'static str },

    /// The quality rating was out of range.
    #[error("quality must be between 1 and 10, got {value}")]
    QualityOutOfRange { value: i64 },

    /// A date string that does not parse as `YYYY-MM-DD`.
    #[error("invalid date (expected YYYY-MM-DD): {value}")]
    InvalidDate { value: String },

    /// A time string that does not parse as `HH:MM`.
    #[error("invalid time (expected HH:MM): {value}")]
    InvalidTime { value: String },
}

/// A validated sleep log identifier.
///
/// Log IDs must be non-empty strings. They should be unique within the system,
/// though uniqueness is enforced at the database level.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LogId(String);

impl LogId {
    /// Creates a new ID after validation.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.is_empty() {
            return Err(ValidationError::Empty { field: "log ID" });
        }
        Ok(Self(id))
    }

    /// Returns the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for LogId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<LogId> for String {
    fn from(id: LogId) -> Self {
        id.0
    }
}

impl fmt::Display for LogId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for LogId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A subjective sleep quality rating in the range \[1, 10\].
///
/// Values are clamped during deserialization to be lenient with external data;
/// `new` rejects out-of-range input so interactive entry fails loudly instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Quality(u8);

impl Quality {
    /// The best rating (10).
    pub const MAX: Self = Self(10);

    /// The worst rating (1).
    pub const MIN: Self = Self(1);

    /// Ratings at or above this count as a high-quality night.
    pub const HIGH: Self = Self(8);

    /// Creates a new quality rating after validation.
    ///
    /// Returns an error if the value is outside \[1, 10\].
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "value is range-checked into 1..=10"
    )]
    pub fn new(value: i64) -> Result<Self, ValidationError> {
        if !(1..=10).contains(&value) {
            return Err(ValidationError::QualityOutOfRange { value });
        }
        Ok(Self(value as u8))
    }

    /// Creates a quality rating, clamping to \[1, 10\].
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "value is clamped into 1..=10"
    )]
    pub const fn clamped(value: i64) -> Self {
        if value < 1 {
            Self(1)
        } else if value > 10 {
            Self(10)
        } else {
            Self(value as u8)
        }
    }

    /// Returns the inner rating.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Whether this rating counts as a high-quality night.
    #[must_use]
    pub const fn is_high(self) -> bool {
        self.0 >= Self::HIGH.0
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/10", self.0)
    }
}

impl TryFrom<i64> for Quality {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Quality> for i64 {
    fn from(q: Quality) -> Self {
        Self::from(q.0)
    }
}

impl Serialize for Quality {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Quality {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = i64::deserialize(deserializer)?;
        // Clamp on deserialization to be lenient with external data
        Ok(Self::clamped(value))
    }
}
