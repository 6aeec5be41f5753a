use std::sync::Arc;

use tracing::debug;

use wayfare_core::checklist::{self, ItemUpdate};
use wayfare_core::flights;
use wayfare_core::model::Day;
use wayfare_core::{FlightEntry, TravelData};
use wayfare_shared::IdGenerator;

/// Owns the active (unsaved) plan and the flight-editor working set.
///
/// The session is the single mutable owner of in-flight state: every
/// mutation runs synchronously to completion, applied sequentially by one
/// interactive actor. Saving is not the session's job; the active plan is a
/// detached copy until the caller pushes it into the plan store.
pub struct Session {
    ids: Arc<dyn IdGenerator>,
    active: Option<TravelData>,
    flight_edits: Option<Vec<FlightEntry>>,
}

impl Session {
    pub fn new(ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            ids,
            active: None,
            flight_edits: None,
        }
    }

    /// Install a freshly assembled or loaded plan as the active one. Any
    /// open flight edits belong to the previous plan and are discarded.
    pub fn install(&mut self, data: TravelData) {
        self.flight_edits = None;
        self.active = Some(data);
    }

    pub fn active(&self) -> Option<&TravelData> {
        self.active.as_ref()
    }

    pub fn clear_active(&mut self) {
        self.active = None;
        self.flight_edits = None;
    }

    /// Decode the comparison table into the editor working set. A plan with
    /// no recognizable table opens with exactly one blank row, never zero.
    /// Returns `None` when there is no active plan.
    pub fn open_flight_editor(&mut self) -> Option<&[FlightEntry]> {
        let data = self.active.as_ref()?;
        let mut rows = flights::decode_flights(&data.accommodations);
        if rows.is_empty() {
            rows.push(FlightEntry::blank());
        }
        debug!(rows = rows.len(), "opened flight editor");
        self.flight_edits = Some(rows);
        self.flight_edits.as_deref()
    }

    pub fn flight_edits(&self) -> Option<&[FlightEntry]> {
        self.flight_edits.as_deref()
    }

    /// Replace the whole working set (the editor keys rows by position).
    /// An empty replacement is re-seeded with one blank row.
    pub fn set_flight_edits(&mut self, mut rows: Vec<FlightEntry>) {
        if rows.is_empty() {
            rows.push(FlightEntry::blank());
        }
        self.flight_edits = Some(rows);
    }

    pub fn add_flight_row(&mut self) {
        if let Some(rows) = self.flight_edits.as_mut() {
            rows.push(FlightEntry::blank());
        }
    }

    pub fn set_airline(&mut self, index: usize, value: impl Into<String>) {
        self.with_row(index, |row| row.airline = value.into());
    }

    pub fn set_price(&mut self, index: usize, value: impl Into<String>) {
        self.with_row(index, |row| row.price = value.into());
    }

    pub fn set_duration(&mut self, index: usize, value: impl Into<String>) {
        self.with_row(index, |row| row.duration = value.into());
    }

    pub fn set_transit(&mut self, index: usize, value: impl Into<String>) {
        self.with_row(index, |row| row.transit = value.into());
    }

    pub fn set_link(&mut self, index: usize, value: impl Into<String>) {
        self.with_row(index, |row| row.link = value.into());
    }

    /// Edit one open-editor row by position; out-of-range indexes and a
    /// closed editor are no-ops.
    fn with_row(&mut self, index: usize, apply: impl FnOnce(&mut FlightEntry)) {
        if let Some(row) = self
            .flight_edits
            .as_mut()
            .and_then(|rows| rows.get_mut(index))
        {
            apply(row);
        }
    }

    /// Remove one row by position. The editor never drops to zero rows;
    /// removing the last one leaves a single blank row behind.
    pub fn remove_flight_row(&mut self, index: usize) {
        if let Some(rows) = self.flight_edits.as_mut() {
            if index < rows.len() {
                rows.remove(index);
            }
            if rows.is_empty() {
                rows.push(FlightEntry::blank());
            }
        }
    }

    /// Re-embed the edited rows into the accommodations text and close the
    /// editor. A no-op unless both a plan and an editor are open.
    pub fn save_flight_edits(&mut self, currency: &str) {
        let Some(data) = self.active.as_mut() else {
            return;
        };
        let Some(rows) = self.flight_edits.take() else {
            return;
        };
        data.accommodations = flights::embed_flights(&data.accommodations, &rows, currency);
        debug!(rows = rows.len(), "saved flight edits into accommodations");
    }

    pub fn update_item(&mut self, day_id: &str, item_id: &str, update: &ItemUpdate) {
        self.with_itinerary(|days, _| checklist::update_item(days, day_id, item_id, update));
    }

    pub fn delete_item(&mut self, day_id: &str, item_id: &str) {
        self.with_itinerary(|days, _| checklist::delete_item(days, day_id, item_id));
    }

    pub fn add_item(&mut self, day_id: &str) {
        self.with_itinerary(|days, ids| checklist::add_item(days, day_id, ids));
    }

    /// Apply one pure checklist transformation to the parsed itinerary.
    /// No-op when there is no active plan or it has no parsed itinerary.
    fn with_itinerary(&mut self, apply: impl FnOnce(Vec<Day>, &dyn IdGenerator) -> Vec<Day>) {
        let Some(data) = self.active.as_mut() else {
            return;
        };
        let Some(days) = data.parsed_itinerary.take() else {
            return;
        };
        data.parsed_itinerary = Some(apply(days, self.ids.as_ref()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use wayfare_core::model::Item;
    use wayfare_shared::SequenceIds;

    fn plan(accommodations: &str) -> TravelData {
        TravelData {
            id: "plan-1".to_string(),
            custom_name: None,
            itinerary: "ITINERARY\nDay 1: Arrival\n- Buy visa".to_string(),
            accommodations: accommodations.to_string(),
            safety: "Not found".to_string(),
            health: "Not found".to_string(),
            environmental: "Not found".to_string(),
            tips: "Not found".to_string(),
            sources: vec![],
            created_at: Utc::now(),
            parsed_itinerary: Some(vec![Day {
                id: "day-1".to_string(),
                title: "Day 1: Arrival".to_string(),
                content: String::new(),
                checklist: vec![Item {
                    id: "item-a".to_string(),
                    text: "Buy visa".to_string(),
                    completed: false,
                }],
            }]),
        }
    }

    fn session() -> Session {
        Session::new(Arc::new(SequenceIds::new("s")))
    }

    const TABLE: &str = "Flights:\n\
        | Airline | Est. Price (USD) | Duration | Transit | Booking Link |\n\
        |:---|:---|:---|:---|:---|\n\
        | AirX | 500 | 10h | Direct | [Book Now](https://airx.com) |\n\n\
        Hotels nearby.";

    #[test]
    fn editor_without_plan_does_not_open() {
        let mut session = session();
        assert!(session.open_flight_editor().is_none());
        assert!(session.flight_edits().is_none());
    }

    #[test]
    fn editor_decodes_existing_table() {
        let mut session = session();
        session.install(plan(TABLE));
        let rows = session.open_flight_editor().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].airline, "AirX");
    }

    #[test]
    fn editor_without_table_seeds_one_blank_row() {
        let mut session = session();
        session.install(plan("No table here."));
        let rows = session.open_flight_editor().unwrap();
        assert_eq!(rows, [FlightEntry::blank()].as_slice());
    }

    #[test]
    fn field_setters_edit_rows_by_position() {
        let mut session = session();
        session.install(plan(TABLE));
        session.open_flight_editor();

        session.set_price(0, "475");
        session.set_transit(0, "1 stop in Taipei, 1h 10m");
        session.set_price(9, "ignored");

        let rows = session.flight_edits().unwrap();
        assert_eq!(rows[0].price, "475");
        assert_eq!(rows[0].transit, "1 stop in Taipei, 1h 10m");
        assert_eq!(rows[0].airline, "AirX");
    }

    #[test]
    fn removing_the_last_row_reseeds_a_blank() {
        let mut session = session();
        session.install(plan(TABLE));
        session.open_flight_editor();
        session.remove_flight_row(0);
        assert_eq!(
            session.flight_edits().unwrap(),
            [FlightEntry::blank()].as_slice()
        );
    }

    #[test]
    fn saving_edits_rewrites_accommodations_and_closes_editor() {
        let mut session = session();
        session.install(plan(TABLE));
        let mut rows = session.open_flight_editor().unwrap().to_vec();
        rows[0].price = "550".to_string();
        session.set_flight_edits(rows);
        session.save_flight_edits("USD");

        assert!(session.flight_edits().is_none());
        let accommodations = &session.active().unwrap().accommodations;
        assert!(accommodations.contains("| 550 |"));
        assert!(accommodations.ends_with("Hotels nearby."));
    }

    #[test]
    fn installing_a_plan_discards_open_edits() {
        let mut session = session();
        session.install(plan(TABLE));
        session.open_flight_editor();
        session.install(plan("fresh"));
        assert!(session.flight_edits().is_none());
    }

    #[test]
    fn checklist_edits_flow_through_to_the_active_plan() {
        let mut session = session();
        session.install(plan(TABLE));

        session.add_item("day-1");
        session.update_item(
            "day-1",
            "item-a",
            &ItemUpdate {
                completed: Some(true),
                ..Default::default()
            },
        );
        session.delete_item("day-1", "item-s-1");

        let days = session
            .active()
            .unwrap()
            .parsed_itinerary
            .as_ref()
            .unwrap();
        assert_eq!(days[0].checklist.len(), 1);
        assert!(days[0].checklist[0].completed);
    }

    #[test]
    fn checklist_edits_without_a_plan_are_no_ops() {
        let mut session = session();
        session.add_item("day-1");
        session.delete_item("day-1", "item-a");
        assert!(session.active().is_none());
    }
}
