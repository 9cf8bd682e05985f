//! Section representation for a parsed time format.
//!
//! A section is one editable slot of the time value, corresponding to a single token in the
//! format string. Position metadata (order, separators, selection range) is derived from the
//! format and never changes while the format stays the same; only `value` moves as the user
//! types.

use crate::token::{TimeToken, TimeType};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// One token instance of a format together with the text entered for it.
pub struct Section {
    /// Token this section was built from.
    pub token: TimeToken,
    /// Time component, always `token.kind()`.
    pub kind: TimeType,
    /// Entered text; empty until the user fills the section.
    pub value: String,
    /// Zero-based position among the sections of the format.
    pub order: usize,
    /// Number of characters the token occupies in the format.
    pub max_length: usize,
    /// Literal character preceding the token, or empty.
    pub start_separator: String,
    /// Literal character following the token, or empty.
    pub end_separator: String,
    /// Character offset where the token starts in the format string.
    pub selection_start: usize,
    /// Character offset just past the token in the format string.
    pub selection_end: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// Half-open character range a host should select in its input field.
pub struct Selection {
    /// First selected character.
    pub start: usize,
    /// One past the last selected character.
    pub end: usize,
}

impl Section {
    #[must_use]
    /// Creates an empty section for `token` found at character offset `start`.
    pub fn new(token: TimeToken, order: usize, start: usize, start_separator: String) -> Self {
        Self {
            token,
            kind: token.kind(),
            value: String::new(),
            order,
            max_length: TimeToken::LEN,
            start_separator,
            end_separator: String::new(),
            selection_start: start,
            selection_end: start + TimeToken::LEN,
        }
    }

    #[must_use]
    /// Whether nothing has been entered yet.
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    #[must_use]
    /// Text shown for this section: the value, or the token as a placeholder.
    pub fn display(&self) -> &str {
        if self.value.is_empty() {
            self.token.as_str()
        } else {
            &self.value
        }
    }

    #[must_use]
    /// The range a host selects to put this section under the caret.
    pub fn selection(&self) -> Selection {
        Selection {
            start: self.selection_start,
            end: self.selection_end,
        }
    }
}
