//! Line scanner turning the itinerary section into ordered day records.

use wayfare_shared::IdGenerator;

use crate::model::{Day, Item};

/// Parse the itinerary section into day records.
///
/// A line containing "Day" followed by a number (any case, anywhere in the
/// line) opens a new day titled with the full trimmed line. Under a day, a
/// bullet line becomes a checklist item with a generator-issued id; any
/// other line accumulates into the day's freeform content, newline
/// preserved. Lines before the first heading are dropped.
///
/// Day ids are positional (`day-{line_index}`): stable within one parse,
/// regenerated identically on re-parse, and deliberately not durable across
/// edits to the source text.
pub fn parse_itinerary(text: &str, ids: &dyn IdGenerator) -> Vec<Day> {
    let mut days: Vec<Day> = Vec::new();
    let mut current: Option<Day> = None;

    for (idx, line) in text.lines().enumerate() {
        if is_day_heading(line) {
            if let Some(day) = current.take() {
                days.push(day);
            }
            current = Some(Day {
                id: format!("day-{idx}"),
                title: line.trim().to_string(),
                content: String::new(),
                checklist: Vec::new(),
            });
            continue;
        }

        let Some(day) = current.as_mut() else {
            continue;
        };

        let trimmed = line.trim();
        if let Some(rest) = trimmed
            .strip_prefix('-')
            .or_else(|| trimmed.strip_prefix('*'))
        {
            day.checklist.push(Item {
                id: format!("item-{}", ids.next_id()),
                text: rest.trim().to_string(),
                completed: false,
            });
        } else {
            day.content.push_str(line);
            day.content.push('\n');
        }
    }

    if let Some(day) = current.take() {
        days.push(day);
    }

    if days.is_empty() && !text.trim().is_empty() {
        tracing::debug!("no day headings recognized in itinerary text");
    }

    days
}

/// True when the line contains "Day" (any case) immediately followed by
/// optional whitespace and a digit, e.g. "Day 3:", "day2", "## DAY 10".
fn is_day_heading(line: &str) -> bool {
    let bytes = line.as_bytes();
    for i in 0..bytes.len() {
        if bytes.len() - i >= 3 && bytes[i..i + 3].eq_ignore_ascii_case(b"day") {
            let mut j = i + 3;
            while j < bytes.len() && bytes[j].is_ascii_whitespace() {
                j += 1;
            }
            if j < bytes.len() && bytes[j].is_ascii_digit() {
                return true;
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DayBody;
    use wayfare_shared::SequenceIds;

    const SAMPLE: &str = "ITINERARY\n\
        Intro text before the first day is dropped.\n\
        Day 1: Arrival\n\
        Settle into the hotel.\n\
        - Buy visa\n\
        * Exchange money\n\
        Day 2: Old Town\n\
        Wander the markets all afternoon.\n\
        DAY 3: Departure\n\
        - Pack bags";

    #[test]
    fn parses_one_day_per_heading_in_order() {
        let days = parse_itinerary(SAMPLE, &SequenceIds::new("t"));
        assert_eq!(days.len(), 3);
        assert_eq!(days[0].title, "Day 1: Arrival");
        assert_eq!(days[1].title, "Day 2: Old Town");
        assert_eq!(days[2].title, "DAY 3: Departure");
    }

    #[test]
    fn bullet_lines_become_items() {
        let days = parse_itinerary(SAMPLE, &SequenceIds::new("t"));
        let items = &days[0].checklist;
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].text, "Buy visa");
        assert!(!items[0].completed);
        assert_eq!(items[0].id, "item-t-1");
        assert_eq!(items[1].text, "Exchange money");
        assert_eq!(items[1].id, "item-t-2");
    }

    #[test]
    fn narrative_lines_accumulate_with_newlines() {
        let days = parse_itinerary(SAMPLE, &SequenceIds::new("t"));
        assert_eq!(days[0].content, "Settle into the hotel.\n");
        assert_eq!(days[1].content, "Wander the markets all afternoon.\n");
    }

    #[test]
    fn day_ids_are_positional_and_reparse_stable() {
        let first = parse_itinerary(SAMPLE, &SequenceIds::new("a"));
        let second = parse_itinerary(SAMPLE, &SequenceIds::new("b"));
        assert_eq!(first[0].id, "day-2");
        assert_eq!(first[1].id, "day-6");
        assert_eq!(first[2].id, "day-8");
        let first_ids: Vec<&str> = first.iter().map(|d| d.id.as_str()).collect();
        let second_ids: Vec<&str> = second.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(first_ids, second_ids);
    }

    #[test]
    fn lines_before_first_heading_are_dropped() {
        let days = parse_itinerary(SAMPLE, &SequenceIds::new("t"));
        assert!(!days[0].content.contains("Intro text"));
    }

    #[test]
    fn day_without_bullets_renders_freeform() {
        let days = parse_itinerary(SAMPLE, &SequenceIds::new("t"));
        assert_eq!(
            days[1].body(),
            DayBody::Freeform("Wander the markets all afternoon.\n")
        );
    }

    #[test]
    fn empty_or_headingless_text_yields_no_days() {
        assert!(parse_itinerary("", &SequenceIds::new("t")).is_empty());
        assert!(parse_itinerary("nothing resembling a heading", &SequenceIds::new("t")).is_empty());
    }

    #[test]
    fn heading_detection_allows_compact_and_spaced_forms() {
        assert!(is_day_heading("Day 1"));
        assert!(is_day_heading("day4: compact"));
        assert!(is_day_heading("### DAY  12"));
        assert!(is_day_heading("Sunday 5 departures")); // "day" inside a word still counts
        assert!(!is_day_heading("Day trip to the lake"));
        assert!(!is_day_heading("A fine day"));
    }
}
