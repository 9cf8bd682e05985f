//! Reads edited input back onto sections.
//!
//! An input field hands over its whole text after every edit. `reduce` walks the sections in
//! order and looks for each one's slot in what is left of that text, using the section's
//! separators as anchors. The payload found is merged with the section's current value, so
//! typing two digits into a selected section builds a two-digit number.
//!
//! `distribute` covers the other way text arrives: a single paste that should fill the whole
//! field at once.

use crate::modifier::{concatenate, modify, HourFormat};
use crate::section::Section;
use crate::token::TimeType;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, trace};

/// The alphanumeric run at the start of a slice.
static LEADING_RUN: Lazy<Regex> = Lazy::new(|| Regex::new("^[A-Za-z0-9]+").unwrap());

/// Byte range of the leftmost `start` + alphanumeric run + `end` in `text`.
///
/// The run is taken as long as possible while still being followed by `end`.
fn find_slot(text: &str, start: &str, end: &str) -> Option<(usize, usize)> {
    for (position, _) in text.char_indices() {
        if !text[position..].starts_with(start) {
            continue;
        }
        let from = position + start.len();
        let Some(run) = LEADING_RUN.find(&text[from..]) else {
            continue;
        };
        // Runs are ASCII, so every length is a char boundary.
        if let Some(len) = (1..=run.end())
            .rev()
            .find(|len| text[from + len..].starts_with(end))
        {
            return Some((from, from + len));
        }
    }
    None
}

/// What the sections glued to the right of `index` currently display, if there are any.
///
/// Without a separator between them, neighbouring sections share one alphanumeric run.
fn glued_tail(sections: &[Section], index: usize) -> Option<String> {
    let mut tail = String::new();
    for pair in sections[index..].windows(2) {
        if !pair[0].end_separator.is_empty() || !pair[1].start_separator.is_empty() {
            break;
        }
        tail.push_str(pair[1].display());
    }
    (!tail.is_empty()).then_some(tail)
}

/// Cuts this section's share off a run it shares with the sections after it.
///
/// When the run still ends with what those sections display, everything before that is ours.
/// Otherwise an edit happened further right and this section keeps at most its own width.
fn own_share<'a>(run: &'a str, tail: &str, max_length: usize) -> &'a str {
    match run.strip_suffix(tail) {
        Some(head) if !head.is_empty() => head,
        _ => &run[..max_length.min(run.len())],
    }
}

/// Reduces the raw text of the input field onto a copy of `sections`.
///
/// A section whose slot is not found is left as it was and consumes nothing, so later
/// sections are still tried against the same remainder. A payload identical to what the section
/// already displays is not reinterpreted.
#[must_use]
pub fn reduce(raw: &str, sections: &[Section], hour_format: HourFormat) -> Vec<Section> {
    let mut next = sections.to_vec();
    let mut remaining = raw;
    let mut changed = 0;

    for index in 0..next.len() {
        let tail = glued_tail(&next, index);
        let section = &mut next[index];
        let Some((from, to)) =
            find_slot(remaining, &section.start_separator, &section.end_separator)
        else {
            trace!(order = section.order, remaining, "no slot found for section");
            continue;
        };
        let run = &remaining[from..to];
        let payload = match &tail {
            Some(tail) => own_share(run, tail, section.max_length),
            None => run,
        };

        if payload != section.display() {
            let value = concatenate(&section.value, payload, section.kind, hour_format)
                .unwrap_or_default();
            if value != section.value {
                changed += 1;
            }
            section.value = value;
        }
        remaining = &remaining[from + payload.len() + section.end_separator.len()..];
    }

    debug!(raw, changed, "reduced input");
    next
}

/// Spreads one pasted string over every section of a copy of `sections`.
///
/// Digits fill numeric sections from the right: each section after the first numeric one takes
/// up to `max_length` digits from the end, and the first numeric section takes whatever is left,
/// which `modify` then clamps. If the text contains letters they are applied to every `AmPm`
/// section. Sections that receive nothing keep their value.
#[must_use]
pub fn distribute(text: &str, sections: &[Section], hour_format: HourFormat) -> Vec<Section> {
    let digits: String = text.chars().filter(char::is_ascii_digit).collect();
    let letters: String = text.chars().filter(char::is_ascii_alphabetic).collect();
    let mut next = sections.to_vec();

    let numeric: Vec<usize> = next
        .iter()
        .enumerate()
        .filter(|(_, section)| section.kind.is_numeric())
        .map(|(index, _)| index)
        .collect();

    let mut remaining = digits.as_str();
    for (position, &index) in numeric.iter().enumerate().rev() {
        if remaining.is_empty() {
            break;
        }
        let section = &mut next[index];
        let take = if position == 0 {
            remaining.len()
        } else {
            section.max_length.min(remaining.len())
        };
        let (head, chunk) = remaining.split_at(remaining.len() - take);
        section.value = modify(chunk, section.kind, hour_format).unwrap_or_default();
        remaining = head;
    }

    if !letters.is_empty() {
        let meridiem = modify(&letters, TimeType::AmPm, hour_format).unwrap_or_default();
        for section in next.iter_mut().filter(|s| s.kind == TimeType::AmPm) {
            section.value.clone_from(&meridiem);
        }
    }

    debug!(text, digits = %digits, letters = %letters, "distributed paste");
    next
}

#[cfg(test)]
#[path = "tests/reducer.rs"]
mod tests;
