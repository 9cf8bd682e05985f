use super::{locate, next, previous};
use crate::token::TimeToken;
use crate::tokenizer::tokenize;

fn located_order(format: &str, start: usize) -> Option<usize> {
    let sections = tokenize(format);
    locate(&sections, Some(start), Some(start)).map(|s| s.order)
}

#[test]
fn test_caret_inside_section_selects_it() {
    assert_eq!(located_order("hh:mm:ss", 0), Some(0));
    assert_eq!(located_order("hh:mm:ss", 1), Some(0));
    assert_eq!(located_order("hh:mm:ss", 4), Some(1));
    assert_eq!(located_order("hh:mm:ss", 7), Some(2));
}

#[test]
fn test_caret_near_separator_picks_closest_edge() {
    assert_eq!(located_order("hh:mm:ss", 2), Some(0));
    assert_eq!(located_order("hh:mm:ss", 3), Some(1));
    assert_eq!(located_order("hh:mm:ss", 5), Some(1));
}

#[test]
fn test_shared_boundary_resolves_to_leftmost() {
    let sections = tokenize("hhmm");

    for _ in 0..3 {
        let section = locate(&sections, Some(2), Some(2)).unwrap();
        assert_eq!(section.token, TimeToken::Hour, "Tie should go to the first section");
    }
}

#[test]
fn test_caret_past_the_end_selects_last_section() {
    assert_eq!(located_order("hh:mm:ss", 40), Some(2));
}

#[test]
fn test_unknown_bounds_mean_no_section() {
    let sections = tokenize("hh:mm:ss");

    assert!(locate(&sections, None, None).is_none());
    assert!(locate(&sections, Some(1), None).is_none());
    assert!(locate(&sections, None, Some(1)).is_none());
    assert!(locate(&[], Some(0), Some(0)).is_none());
}

#[test]
fn test_next_and_previous_clamp_at_ends() {
    let sections = tokenize("hh:mm:ss");

    assert_eq!(next(&sections, 0).map(|s| s.order), Some(1));
    assert_eq!(next(&sections, 2).map(|s| s.order), Some(2));
    assert_eq!(previous(&sections, 2).map(|s| s.order), Some(1));
    assert_eq!(previous(&sections, 0).map(|s| s.order), Some(0));

    assert!(next(&[], 0).is_none());
    assert!(previous(&[], 0).is_none());
}
