//! The closed set of format tokens and the time component each one stands for.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// A two-letter placeholder recognised inside a format string.
pub enum TimeToken {
    #[serde(rename = "hh")]
    /// `hh`
    Hour,
    #[serde(rename = "mm")]
    /// `mm`
    Minute,
    #[serde(rename = "ss")]
    /// `ss`
    Second,
    #[serde(rename = "aa")]
    /// `aa`
    AmPm,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Semantic class of a section, which decides how typed values are clamped and merged.
pub enum TimeType {
    /// Hours, bounded by the configured hour format.
    Hour,
    /// Minutes, 00 to 59.
    Minute,
    /// Seconds, 00 to 59.
    Second,
    /// Meridiem marker, `AM` or `PM`.
    AmPm,
}

impl TimeToken {
    /// Every token, in the order they are tried when splitting a letter run.
    pub const ALL: [Self; 4] = [Self::Hour, Self::Minute, Self::Second, Self::AmPm];

    /// Width of every token in a format string.
    pub const LEN: usize = 2;

    #[must_use]
    /// Exact match against the four token literals.
    pub fn parse(text: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|token| token.as_str() == text)
    }

    #[must_use]
    /// The literal as written in a format, also used as the placeholder for an empty section.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hour => "hh",
            Self::Minute => "mm",
            Self::Second => "ss",
            Self::AmPm => "aa",
        }
    }

    #[must_use]
    /// The time component this token edits.
    pub const fn kind(self) -> TimeType {
        match self {
            Self::Hour => TimeType::Hour,
            Self::Minute => TimeType::Minute,
            Self::Second => TimeType::Second,
            Self::AmPm => TimeType::AmPm,
        }
    }
}

impl fmt::Display for TimeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TimeType {
    #[must_use]
    /// Whether values of this type are entered as digits.
    pub const fn is_numeric(self) -> bool {
        !matches!(self, Self::AmPm)
    }
}

#[cfg(test)]
#[path = "tests/token.rs"]
mod tests;
