//! Maps a caret position onto a section and steps between sections.

use crate::section::Section;
use tracing::trace;

/// Finds the section nearest to a selection reported by the host.
///
/// Distance is measured from `start` to whichever edge of a section is closer. On a tie the
/// leftmost section wins, so a caret sitting on a boundary always resolves the same way.
/// Returns `None` when either bound is unknown, which hosts report on blur.
#[must_use]
pub fn locate(
    sections: &[Section],
    start: Option<usize>,
    end: Option<usize>,
) -> Option<&Section> {
    let (start, _end) = (start?, end?);
    let nearest = sections.iter().min_by_key(|section| {
        section
            .selection_start
            .abs_diff(start)
            .min(section.selection_end.abs_diff(start))
    });
    trace!(start, order = ?nearest.map(|s| s.order), "located section");
    nearest
}

/// The section after the one at `order`, staying on the last section.
#[must_use]
pub fn next(sections: &[Section], order: usize) -> Option<&Section> {
    let last = sections.len().checked_sub(1)?;
    sections.get(order.saturating_add(1).min(last))
}

/// The section before the one at `order`, staying on the first section.
#[must_use]
pub fn previous(sections: &[Section], order: usize) -> Option<&Section> {
    let last = sections.len().checked_sub(1)?;
    sections.get(order.saturating_sub(1).min(last))
}

#[cfg(test)]
#[path = "tests/locator.rs"]
mod tests;
