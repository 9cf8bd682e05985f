//! Renders sections back into the string an input field displays.

use crate::section::Section;

#[must_use]
/// Joins every section with its separators, showing the token for sections not yet filled.
pub fn serialize(sections: &[Section]) -> String {
    sections.iter().fold(String::new(), |mut out, section| {
        out.push_str(&section.start_separator);
        out.push_str(section.display());
        out.push_str(&section.end_separator);
        out
    })
}

#[cfg(test)]
#[path = "tests/serializer.rs"]
mod tests;
