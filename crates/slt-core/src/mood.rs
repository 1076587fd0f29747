//! Wake-up mood enum as the single source of truth for mood strings.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Canonical wake-up moods.
///
/// Parsing never fails: labels outside the canonical set are retained
/// verbatim in [`Mood::Other`] so they still group correctly in frequency
/// analysis, and render with the neutral emoji.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Mood {
    Energized,
    Refreshed,
    Neutral,
    Tired,
    Exhausted,
    /// Unrecognized label, kept as entered.
    Other(String),
}

impl Mood {
    /// The label used for storage and display.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Energized => "energized",
            Self::Refreshed => "refreshed",
            Self::Neutral => "neutral",
            Self::Tired => "tired",
            Self::Exhausted => "exhausted",
            Self::Other(s) => s,
        }
    }

    /// Emoji for dashboard display. Unrecognized moods fall back to neutral.
    #[must_use]
    pub const fn emoji(&self) -> &'static str {
        match self {
            Self::Energized => "\u{1f604}",
            Self::Refreshed => "\u{1f60a}",
            Self::Neutral | Self::Other(_) => "\u{1f610}",
            Self::Tired => "\u{1f634}",
            Self::Exhausted => "\u{1f62b}",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<&str> for Mood {
    fn from(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "energized" => Self::Energized,
            "refreshed" => Self::Refreshed,
            "neutral" => Self::Neutral,
            "tired" => Self::Tired,
            "exhausted" => Self::Exhausted,
            _ => Self::Other(s.to_string()),
        }
    }
}

impl FromStr for Mood {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl Serialize for Mood {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for Mood {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from(s.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip_canonical_variants() {
        let variants = [
            Mood::Energized,
            Mood::Refreshed,
            Mood::Neutral,
            Mood::Tired,
            Mood::Exhausted,
        ];

        for variant in &variants {
            let s = variant.to_string();
            let parsed: Mood = s.parse().unwrap();
            assert_eq!(parsed, *variant, "roundtrip failed for {variant:?}");
        }
    }

    #[test]
    fn parse_is_case_insensitive() {
        let parsed: Mood = "Tired".parse().unwrap();
        assert_eq!(parsed, Mood::Tired);

        let parsed: Mood = " REFRESHED ".parse().unwrap();
        assert_eq!(parsed, Mood::Refreshed);
    }

    #[test]
    fn unknown_label_retained_verbatim() {
        let parsed: Mood = "restless".parse().unwrap();
        assert_eq!(parsed, Mood::Other("restless".to_string()));
        assert_eq!(parsed.label(), "restless");

        // Two identical unknown labels compare equal, so they group together
        let again: Mood = "restless".parse().unwrap();
        assert_eq!(parsed, again);
    }

    #[test]
    fn unknown_label_uses_neutral_emoji() {
        let parsed: Mood = "groggy".parse().unwrap();
        assert_eq!(parsed.emoji(), Mood::Neutral.emoji());
    }

    #[test]
    fn serde_roundtrip() {
        let mood = Mood::Exhausted;
        let json = serde_json::to_string(&mood).unwrap();
        assert_eq!(json, "\"exhausted\"");
        let parsed: Mood = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, mood);

        let other = Mood::Other("wired".to_string());
        let json = serde_json::to_string(&other).unwrap();
        let parsed: Mood = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, other);
    }
}
