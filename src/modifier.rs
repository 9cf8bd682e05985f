//! Per-type rules for turning typed text into a stored section value.
//!
//! `modify` clamps a single entry into range and renders it at its fixed width. `concatenate`
//! merges a digit already held by a section with a newly typed one, falling back to the new
//! digit alone when the pair would not fit. Both return `None` for input the section cannot hold;
//! callers store that as an empty value.

use crate::token::TimeType;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Largest minute or second value.
const MINUTE_SECOND_MAX: u64 = 59;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Upper bound applied to hour sections.
pub enum HourFormat {
    #[default]
    #[serde(rename = "12")]
    /// Hours clamp at 12.
    Twelve,
    #[serde(rename = "24")]
    /// Hours clamp at 24.
    TwentyFour,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
/// Returned when an hour format other than `12` or `24` is requested.
pub enum ParseHourFormatError {
    #[error("unknown hour format {0:?}, expected \"12\" or \"24\"")]
    /// The rejected input.
    Unknown(String),
}

impl HourFormat {
    #[must_use]
    /// Largest hour value accepted before clamping.
    pub const fn bound(self) -> u64 {
        match self {
            Self::Twelve => 12,
            Self::TwentyFour => 24,
        }
    }
}

impl FromStr for HourFormat {
    type Err = ParseHourFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "12" => Ok(Self::Twelve),
            "24" => Ok(Self::TwentyFour),
            other => Err(ParseHourFormatError::Unknown(other.to_string())),
        }
    }
}

impl fmt::Display for HourFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.bound())
    }
}

/// Reads a run of ASCII digits. Values too large for `u64` saturate, which still clamps.
fn parse_number(text: &str) -> Option<u64> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(text.parse().unwrap_or(u64::MAX))
}

fn upper_bound(kind: TimeType, hour_format: HourFormat) -> u64 {
    match kind {
        TimeType::Hour => hour_format.bound(),
        TimeType::Minute | TimeType::Second | TimeType::AmPm => MINUTE_SECOND_MAX,
    }
}

fn modify_number(value: &str, bound: u64) -> Option<String> {
    let number = parse_number(value)?;
    Some(format!("{:02}", number.min(bound)))
}

fn modify_ampm(value: &str) -> Option<String> {
    // The placeholder starts with `a` but means "nothing entered".
    if value == "aa" {
        return None;
    }
    match value.chars().next()?.to_ascii_lowercase() {
        'a' => Some("AM".to_string()),
        'p' => Some("PM".to_string()),
        _ => None,
    }
}

#[must_use]
/// Clamps a single entry for a section of type `kind`.
///
/// Numeric types accept digits only; anything above the bound becomes the bound and the result
/// is always two digits wide. `AmPm` looks at the first letter, case-insensitively.
pub fn modify(value: &str, kind: TimeType, hour_format: HourFormat) -> Option<String> {
    match kind {
        TimeType::Hour | TimeType::Minute | TimeType::Second => {
            modify_number(value, upper_bound(kind, hour_format))
        }
        TimeType::AmPm => modify_ampm(value),
    }
}

#[must_use]
/// Merges the value a section already holds with newly typed text.
///
/// A previous value of at most 10 is treated as the first digit of a two-digit entry
/// (`"1"` then `"2"` gives `"12"`). When the previous value is already larger, or the combined
/// number would leave the range, the new text starts a fresh entry on its own. An empty previous
/// value counts as zero. `AmPm` only ever looks at the new text.
pub fn concatenate(
    previous: &str,
    current: &str,
    kind: TimeType,
    hour_format: HourFormat,
) -> Option<String> {
    if !kind.is_numeric() {
        return modify_ampm(current);
    }

    let bound = upper_bound(kind, hour_format);
    let current_number = parse_number(current)?;
    let previous_number = if previous.is_empty() {
        0
    } else {
        parse_number(previous)?
    };

    let combined = previous_number
        .saturating_mul(10)
        .saturating_add(current_number);
    if previous_number > 10 || combined > bound {
        modify_number(current, bound)
    } else {
        Some(format!("{combined:02}"))
    }
}

#[cfg(test)]
#[path = "tests/modifier.rs"]
mod tests;
