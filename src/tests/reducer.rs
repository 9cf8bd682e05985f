use super::{distribute, reduce};
use crate::modifier::HourFormat;
use crate::serializer::serialize;
use crate::token::TimeType;
use crate::tokenizer::tokenize;
use proptest::prelude::*;

fn values(sections: &[crate::section::Section]) -> Vec<&str> {
    sections.iter().map(|s| s.value.as_str()).collect()
}

#[test]
fn test_typed_digit_fills_matching_section() {
    let sections = tokenize("hh:mm:ss");

    let sections = reduce("1:mm:ss", &sections, HourFormat::Twelve);
    assert_eq!(values(&sections), vec!["01", "", ""]);
    assert_eq!(serialize(&sections), "01:mm:ss");

    let sections = reduce("2:mm:ss", &sections, HourFormat::Twelve);
    assert_eq!(values(&sections), vec!["12", "", ""]);
}

#[test]
fn test_reducing_current_display_is_idempotent() {
    let mut sections = tokenize("hh:mm:ss");
    sections[0].value = "05".to_string();
    sections[1].value = "30".to_string();

    let display = serialize(&sections);
    let reduced = reduce(&display, &sections, HourFormat::Twelve);

    assert_eq!(reduced, sections, "Nothing should change");
    assert_eq!(serialize(&reduced), display);
}

#[test]
fn test_reducing_glued_sections_is_idempotent() {
    let mut sections = tokenize("hhmm");
    sections[0].value = "05".to_string();
    sections[1].value = "30".to_string();

    let reduced = reduce("0530", &sections, HourFormat::Twelve);

    assert_eq!(reduced, sections);
    assert_eq!(serialize(&reduced), "0530");
}

#[test]
fn test_typing_into_glued_sections() {
    let sections = tokenize("hhmm");

    let sections = reduce("1mm", &sections, HourFormat::Twelve);
    assert_eq!(values(&sections), vec!["01", ""]);
    assert_eq!(serialize(&sections), "01mm");

    // Minute overtyped with 7: the hour keeps its two digits.
    let mut filled = tokenize("hhmm");
    filled[0].value = "05".to_string();
    filled[1].value = "30".to_string();
    let minute = reduce("057", &filled, HourFormat::Twelve);
    assert_eq!(values(&minute), vec!["05", "07"]);

    let hour = reduce("130", &filled, HourFormat::Twelve);
    assert_eq!(values(&hour), vec!["01", "30"]);
}

#[test]
fn test_glued_meridiem_keeps_its_letters() {
    let mut sections = tokenize("hhmmaa");
    sections[0].value = "11".to_string();
    sections[2].value = "PM".to_string();

    let reduced = reduce("11mmPM", &sections, HourFormat::Twelve);

    assert_eq!(reduced, sections);
}

#[test]
fn test_missing_slot_leaves_section_and_input_untouched() {
    let sections = tokenize("hh:mm");

    // No `:` in the input, so the hour cannot be found; the minute pattern has no
    // separators and matches the whole run instead.
    let sections = reduce("1230", &sections, HourFormat::Twelve);

    assert_eq!(values(&sections), vec!["", "59"]);
}

#[test]
fn test_invalid_payload_clears_section() {
    let mut sections = tokenize("hh:mm:ss");
    sections[0].value = "05".to_string();

    let sections = reduce("xy:mm:ss", &sections, HourFormat::Twelve);

    assert_eq!(sections[0].value, "");
    assert_eq!(serialize(&sections), "hh:mm:ss");
}

#[test]
fn test_separators_are_matched_literally() {
    let sections = tokenize("(hh)");

    let sections = reduce("(7)", &sections, HourFormat::Twelve);

    assert_eq!(sections[0].value, "07");
    assert_eq!(serialize(&sections), "(07)");
}

#[test]
fn test_ampm_section_reads_letters() {
    let sections = tokenize("hh:mm aa");

    let sections = reduce("hh:mm p", &sections, HourFormat::Twelve);

    assert_eq!(values(&sections), vec!["", "", "PM"]);
    assert_eq!(serialize(&sections), "hh:mm PM");
}

#[test]
fn test_hour_format_bounds_reduction() {
    let sections = tokenize("hh:mm");

    let twelve = reduce("18:mm", &sections, HourFormat::Twelve);
    let twenty_four = reduce("18:mm", &sections, HourFormat::TwentyFour);

    assert_eq!(twelve[0].value, "12");
    assert_eq!(twenty_four[0].value, "18");
}

#[test]
fn test_reduce_keeps_format_metadata() {
    let sections = tokenize("hh:mm:ss");

    let reduced = reduce("4:7:9", &sections, HourFormat::Twelve);

    for (before, after) in sections.iter().zip(&reduced) {
        assert_eq!(before.order, after.order);
        assert_eq!(before.selection(), after.selection());
        assert_eq!(before.start_separator, after.start_separator);
        assert_eq!(before.end_separator, after.end_separator);
    }
    assert_eq!(values(&reduced), vec!["04", "07", "09"]);
}

#[test]
fn test_distribute_fills_from_the_right() {
    let sections = tokenize("hh:mm:ss");

    let sections = distribute("1235959", &sections, HourFormat::Twelve);

    assert_eq!(serialize(&sections), "12:59:59");
}

#[test]
fn test_distribute_short_paste_fills_trailing_sections() {
    let sections = tokenize("hh:mm:ss");

    let sections = distribute("5", &sections, HourFormat::Twelve);

    assert_eq!(serialize(&sections), "hh:mm:05");
}

#[test]
fn test_distribute_reads_meridiem_letters() {
    let sections = tokenize("hh:mm aa");

    let sections = distribute("10:30 pm", &sections, HourFormat::Twelve);

    assert_eq!(serialize(&sections), "10:30 PM");
}

#[test]
fn test_distribute_clamps_each_chunk() {
    let sections = tokenize("hh:mm");

    let sections = distribute("2575", &sections, HourFormat::TwentyFour);

    assert_eq!(values(&sections), vec!["24", "59"]);
}

#[test]
fn test_distribute_without_digits_or_letters_changes_nothing() {
    let mut sections = tokenize("hh:mm");
    sections[0].value = "08".to_string();

    let distributed = distribute(" :- ", &sections, HourFormat::Twelve);

    assert_eq!(distributed, sections);
}

fn format_strategy() -> impl Strategy<Value = String> {
    let token = prop::sample::select(vec!["hh", "mm", "ss", "aa"]);
    let separator = prop::sample::select(vec!["", ":", "-", " ", "."]);
    (
        separator.clone(),
        prop::collection::vec((token, separator), 1..6),
    )
        .prop_map(|(lead, parts)| {
            let mut format = lead.to_string();
            for (token, separator) in parts {
                format.push_str(token);
                format.push_str(separator);
            }
            format
        })
}

proptest! {
    #[test]
    fn prop_reducing_current_display_changes_nothing(
        format in format_strategy(),
        fills in prop::collection::vec(prop::option::of(0u8..=12), 6),
    ) {
        let mut sections = tokenize(&format);
        for (section, fill) in sections.iter_mut().zip(&fills) {
            section.value = match (fill, section.kind) {
                (None, _) => String::new(),
                (Some(n), TimeType::AmPm) => (if n % 2 == 0 { "AM" } else { "PM" }).to_string(),
                (Some(n), _) => format!("{n:02}"),
            };
        }

        let reduced = reduce(&serialize(&sections), &sections, HourFormat::Twelve);

        prop_assert_eq!(reduced, sections);
    }
}
