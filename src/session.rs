//! The core state machine bridging a time format and the input field showing it.
//!
//! A host needs a single source of truth that can be interrogated and mutated as the user types
//! and moves the caret. The session holds the sections for the current format, the display string
//! derived from them, and which section is active. Every event is handled against the state as it
//! stood before the event, and every value change hands back the selection the host must restore,
//! since input fields reset their caret whenever their text is replaced.

use crate::config::Config;
use crate::locator::{locate, next, previous};
use crate::modifier::HourFormat;
use crate::reducer::{distribute, reduce};
use crate::section::{Section, Selection};
use crate::serializer::serialize;
use crate::tokenizer::tokenize;
use tracing::{debug, trace};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Which neighbour of the active section to move to.
pub enum Direction {
    /// The section to the right, staying on the last one.
    Next,
    /// The section to the left, staying on the first one.
    Previous,
}

#[derive(Clone, Debug)]
/// Edit state for one time input.
pub struct Session {
    format: String,
    hour_format: HourFormat,
    sections: Vec<Section>,
    active: Option<usize>,
    value: String,
}

impl Session {
    #[must_use]
    /// Starts an empty session for `format`.
    pub fn new(format: &str, hour_format: HourFormat) -> Self {
        let sections = tokenize(format);
        let value = serialize(&sections);
        Self {
            format: format.to_string(),
            hour_format,
            sections,
            active: None,
            value,
        }
    }

    #[must_use]
    /// Starts an empty session with the configured format and hour bound.
    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.format, config.hour_format())
    }

    /// Replaces the format, discarding every entered value and the active section.
    pub fn set_format(&mut self, format: &str) {
        debug!(from = %self.format, to = format, "format changed");
        *self = Self::new(format, self.hour_format);
    }

    /// Changes the hour bound used by subsequent edits. Values already entered are kept.
    pub fn set_hour_format(&mut self, hour_format: HourFormat) {
        self.hour_format = hour_format;
    }

    /// Applies the full text of the input field after an edit.
    ///
    /// Returns the range the host should select again, or `None` if no section is active.
    pub fn input(&mut self, raw: &str) -> Option<Selection> {
        self.sections = reduce(raw, &self.sections, self.hour_format);
        self.refresh();
        self.active_selection()
    }

    /// Spreads pasted text over all sections at once.
    pub fn paste(&mut self, text: &str) -> Option<Selection> {
        self.sections = distribute(text, &self.sections, self.hour_format);
        self.refresh();
        self.active_selection()
    }

    /// Types one character over the active section, as a text field does when a key is pressed
    /// while that section is selected. Does nothing without an active section.
    pub fn type_char(&mut self, c: char) -> Option<Selection> {
        let Selection { start, end } = self.display_range(self.active?)?;
        let mut raw: String = self.value.chars().take(start).collect();
        raw.push(c);
        raw.extend(self.value.chars().skip(end));
        self.input(&raw)
    }

    /// Empties the active section.
    pub fn clear_active(&mut self) -> Option<Selection> {
        let index = self.active?;
        self.sections.get_mut(index)?.value.clear();
        self.refresh();
        self.active_selection()
    }

    /// Updates the active section from the caret or selection the host reports.
    ///
    /// `None` bounds, as reported when the field loses focus, leave no section active.
    pub fn select(&mut self, start: Option<usize>, end: Option<usize>) -> Option<&Section> {
        let order = locate(&self.sections, start, end).map(|section| section.order);
        if order != self.active {
            trace!(from = ?self.active, to = ?order, "active section changed");
            self.active = order;
        }
        self.active_section()
    }

    /// Clears the active section when the field loses focus.
    pub fn blur(&mut self) {
        self.active = None;
    }

    /// Moves to a neighbouring section and returns the range to select for it.
    pub fn navigate(&mut self, direction: Direction) -> Option<Selection> {
        let order = self.active?;
        let target = match direction {
            Direction::Next => next(&self.sections, order),
            Direction::Previous => previous(&self.sections, order),
        }?;
        let selection = target.selection();
        self.active = Some(target.order);
        trace!(?direction, to = target.order, "navigated");
        Some(selection)
    }

    #[must_use]
    /// The string the input field should display.
    pub fn value(&self) -> &str {
        &self.value
    }

    #[must_use]
    /// The current format template.
    pub fn format(&self) -> &str {
        &self.format
    }

    #[must_use]
    /// The hour bound applied to edits.
    pub fn hour_format(&self) -> HourFormat {
        self.hour_format
    }

    #[must_use]
    /// All sections in format order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    #[must_use]
    /// Order of the active section, if any.
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    #[must_use]
    /// The active section, if any.
    pub fn active_section(&self) -> Option<&Section> {
        self.sections.get(self.active?)
    }

    #[must_use]
    /// Range of the active section in the displayed string.
    pub fn active_selection(&self) -> Option<Selection> {
        self.active_section().map(Section::selection)
    }

    #[must_use]
    /// Whether every section holds a value.
    pub fn is_complete(&self) -> bool {
        !self.sections.is_empty() && self.sections.iter().all(|s| !s.is_empty())
    }

    /// Where a section sits in the displayed string, in characters.
    ///
    /// This differs from the format offsets once the format holds separators the display drops,
    /// such as `hh - mm` showing as `hh mm`.
    fn display_range(&self, index: usize) -> Option<Selection> {
        let section = self.sections.get(index)?;
        let before: usize = self.sections[..index]
            .iter()
            .map(|s| {
                s.start_separator.chars().count()
                    + s.display().chars().count()
                    + s.end_separator.chars().count()
            })
            .sum();
        let start = before + section.start_separator.chars().count();
        Some(Selection {
            start,
            end: start + section.display().chars().count(),
        })
    }

    fn refresh(&mut self) {
        self.value = serialize(&self.sections);
    }
}

#[cfg(test)]
#[path = "tests/session.rs"]
mod tests;
