//! Pure in-memory edits over the parsed itinerary tree.
//!
//! Every operation consumes the day sequence and returns the edited one,
//! touching only the addressed day. Unknown ids are tolerated as no-ops
//! rather than errors: item ids are ephemeral and regenerated on every
//! parse, so a stale id is an expected condition, not a bug. Nothing here
//! creates or removes days, or touches a day's title or content.

use serde::Deserialize;

use wayfare_shared::IdGenerator;

use crate::model::{Day, Item};

/// Fields of an item that an edit may replace.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ItemUpdate {
    pub text: Option<String>,
    pub completed: Option<bool>,
}

/// Replace an item's mutable fields.
pub fn update_item(
    mut days: Vec<Day>,
    day_id: &str,
    item_id: &str,
    update: &ItemUpdate,
) -> Vec<Day> {
    if let Some(item) = find_item(&mut days, day_id, item_id) {
        if let Some(text) = &update.text {
            item.text = text.clone();
        }
        if let Some(completed) = update.completed {
            item.completed = completed;
        }
    }
    days
}

/// Remove an item from its day's checklist.
pub fn delete_item(mut days: Vec<Day>, day_id: &str, item_id: &str) -> Vec<Day> {
    if let Some(day) = find_day(&mut days, day_id) {
        day.checklist.retain(|item| item.id != item_id);
    }
    days
}

/// Append a fresh empty item (completed = false) to a day's checklist.
pub fn add_item(mut days: Vec<Day>, day_id: &str, ids: &dyn IdGenerator) -> Vec<Day> {
    if let Some(day) = find_day(&mut days, day_id) {
        day.checklist.push(Item {
            id: format!("item-{}", ids.next_id()),
            text: String::new(),
            completed: false,
        });
    }
    days
}

fn find_day<'a>(days: &'a mut [Day], day_id: &str) -> Option<&'a mut Day> {
    days.iter_mut().find(|day| day.id == day_id)
}

fn find_item<'a>(days: &'a mut [Day], day_id: &str, item_id: &str) -> Option<&'a mut Item> {
    find_day(days, day_id)?
        .checklist
        .iter_mut()
        .find(|item| item.id == item_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wayfare_shared::SequenceIds;

    fn sample_days() -> Vec<Day> {
        vec![
            Day {
                id: "day-0".to_string(),
                title: "Day 1: Arrival".to_string(),
                content: String::new(),
                checklist: vec![
                    Item {
                        id: "item-a".to_string(),
                        text: "Buy visa".to_string(),
                        completed: false,
                    },
                    Item {
                        id: "item-b".to_string(),
                        text: "Exchange money".to_string(),
                        completed: true,
                    },
                ],
            },
            Day {
                id: "day-5".to_string(),
                title: "Day 2: Old Town".to_string(),
                content: "Free roaming.\n".to_string(),
                checklist: vec![],
            },
        ]
    }

    #[test]
    fn update_replaces_only_requested_fields() {
        let days = update_item(
            sample_days(),
            "day-0",
            "item-a",
            &ItemUpdate {
                completed: Some(true),
                ..Default::default()
            },
        );
        assert_eq!(days[0].checklist[0].text, "Buy visa");
        assert!(days[0].checklist[0].completed);
        // The sibling item is untouched.
        assert_eq!(days[0].checklist[1], sample_days()[0].checklist[1]);
    }

    #[test]
    fn update_with_unknown_ids_is_a_no_op() {
        let update = ItemUpdate {
            text: Some("changed".to_string()),
            completed: Some(true),
        };
        assert_eq!(
            update_item(sample_days(), "day-9", "item-a", &update),
            sample_days()
        );
        assert_eq!(
            update_item(sample_days(), "day-0", "item-z", &update),
            sample_days()
        );
    }

    #[test]
    fn delete_removes_the_item() {
        let days = delete_item(sample_days(), "day-0", "item-a");
        assert_eq!(days[0].checklist.len(), 1);
        assert_eq!(days[0].checklist[0].id, "item-b");
    }

    #[test]
    fn delete_with_unknown_ids_is_a_no_op() {
        assert_eq!(delete_item(sample_days(), "day-0", "item-z"), sample_days());
        assert_eq!(delete_item(sample_days(), "day-9", "item-a"), sample_days());
    }

    #[test]
    fn add_appends_a_blank_item() {
        let ids = SequenceIds::new("new");
        let days = add_item(sample_days(), "day-5", &ids);
        assert_eq!(days[1].checklist.len(), 1);
        let added = &days[1].checklist[0];
        assert_eq!(added.id, "item-new-1");
        assert_eq!(added.text, "");
        assert!(!added.completed);
    }

    #[test]
    fn add_never_creates_a_day() {
        let ids = SequenceIds::new("new");
        let days = add_item(sample_days(), "day-404", &ids);
        assert_eq!(days, sample_days());
    }

    #[test]
    fn add_update_delete_round_trip_restores_the_day() {
        let ids = SequenceIds::new("rt");
        let original = sample_days();

        let days = add_item(original.clone(), "day-0", &ids);
        let added_id = days[0].checklist.last().unwrap().id.clone();
        let days = update_item(
            days,
            "day-0",
            &added_id,
            &ItemUpdate {
                completed: Some(true),
                ..Default::default()
            },
        );
        let days = delete_item(days, "day-0", &added_id);

        assert_eq!(days, original);
    }
}
