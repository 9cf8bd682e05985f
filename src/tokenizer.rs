//! Splits a format string into sections.
//!
//! Runs of letters made only of tokens (`hhmm`, `ss`) become one section per token. Everything
//! else is a separator and is attached to the neighbouring section: before the first token it is
//! the next section's start separator, afterwards it is the previous section's end separator.
//! Only one character is kept per boundary, so `hh - mm` keeps `-` as the end separator of `hh`.

use crate::section::Section;
use crate::token::TimeToken;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

/// Matches a letter run made entirely of back-to-back tokens.
static TOKEN_RUN: Lazy<Regex> = Lazy::new(|| {
    let alternatives: Vec<&str> = TimeToken::ALL.into_iter().map(TimeToken::as_str).collect();
    Regex::new(&format!("^(?:{})+$", alternatives.join("|"))).unwrap()
});

/// Builds the sections for `format`, in left-to-right order.
///
/// Selection offsets count characters, not bytes, so separators outside ASCII still line up
/// with the caret positions of a text field. A format with no tokens yields no sections.
#[must_use]
pub fn tokenize(format: &str) -> Vec<Section> {
    let chars: Vec<char> = format.chars().collect();
    let mut sections: Vec<Section> = Vec::new();
    let mut start_separator = String::new();
    let mut i = 0;

    while i < chars.len() {
        let run: String = chars[i..]
            .iter()
            .take_while(|c| c.is_ascii_alphabetic())
            .collect();

        if !run.is_empty() && TOKEN_RUN.is_match(&run) {
            let mut rest = run.as_str();
            while rest.len() >= TimeToken::LEN {
                let (head, tail) = rest.split_at(TimeToken::LEN);
                let Some(token) = TimeToken::parse(head) else {
                    break;
                };
                let separator = std::mem::take(&mut start_separator);
                sections.push(Section::new(token, sections.len(), i, separator));
                rest = tail;
                i += TimeToken::LEN;
            }
        } else {
            // Stray letters land here one at a time, so a token later in the same run is still found.
            let separator = chars[i].to_string();
            match sections.last_mut() {
                Some(last) => last.end_separator = separator,
                None => start_separator = separator,
            }
            i += 1;
        }
    }

    debug!(format, sections = sections.len(), "tokenized format");
    sections
}

#[cfg(test)]
#[path = "tests/tokenizer.rs"]
mod tests;
