use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use wayfare_shared::GroundingSource;

use crate::sections::SectionKind;

/// One checklist entry under a day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Item {
    pub id: String,
    pub text: String,
    pub completed: bool,
}

/// One itinerary day: the raw heading line, narrative lines not captured as
/// checklist items (newlines preserved), and the ordered checklist.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Day {
    pub id: String,
    pub title: String,
    pub content: String,
    pub checklist: Vec<Item>,
}

/// How a day renders. The two modes are mutually exclusive: a day with
/// items renders as a checklist, a day without falls back to its narrative.
#[derive(Debug, PartialEq, Eq)]
pub enum DayBody<'a> {
    Checklist(&'a [Item]),
    Freeform(&'a str),
}

impl Day {
    /// The render variant for this day. The emptiness rule lives here and
    /// nowhere else; deleting the last item reverts the day to freeform.
    pub fn body(&self) -> DayBody<'_> {
        if self.checklist.is_empty() {
            DayBody::Freeform(&self.content)
        } else {
            DayBody::Checklist(&self.checklist)
        }
    }
}

/// One row of the flight comparison table. Every field is raw cell text;
/// identity is positional within the edited list.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FlightEntry {
    pub airline: String,
    pub price: String,
    pub duration: String,
    pub transit: String,
    pub link: String,
}

impl FlightEntry {
    /// An all-empty row. The editor is seeded with one of these so it never
    /// opens with zero rows.
    pub fn blank() -> Self {
        Self::default()
    }
}

/// The full AI-derived guide: six raw section texts, grounding sources, and
/// the derived itinerary tree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TravelData {
    pub id: String,
    pub custom_name: Option<String>,
    pub itinerary: String,
    pub accommodations: String,
    pub safety: String,
    pub health: String,
    pub environmental: String,
    pub tips: String,
    pub sources: Vec<GroundingSource>,
    pub created_at: DateTime<Utc>,
    pub parsed_itinerary: Option<Vec<Day>>,
}

impl TravelData {
    /// Raw text of one of the six sections.
    pub fn section(&self, kind: SectionKind) -> &str {
        match kind {
            SectionKind::Itinerary => &self.itinerary,
            SectionKind::Accommodations => &self.accommodations,
            SectionKind::Safety => &self.safety,
            SectionKind::Health => &self.health,
            SectionKind::Environmental => &self.environmental,
            SectionKind::Tips => &self.tips,
        }
    }
}

/// Guide depth requested from the model collaborator. Forwarded verbatim;
/// what it means (model choice, tool use, thinking budget) is decided there.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum GuideDepth {
    Fast,
    Detailed,
    Deep,
}

/// Opaque media (base64 payload + mime type) handed through to the model
/// collaborator for analysis.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MediaAttachment {
    pub data: String,
    pub mime: String,
}

/// Trip parameters supplied by the traveler.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TripQuery {
    pub origin: String,
    pub destination: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub currency: String,
    pub budget: String,
    pub traveler_style: String,
    pub travelers: u32,
    pub depth: GuideDepth,
}

impl TripQuery {
    /// Number of nights between check-in and check-out, clamped at zero.
    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days().max(0)
    }

    /// Default display name offered when saving the plan.
    pub fn suggested_plan_name(&self) -> String {
        format!(
            "{} Expedition ({} - {})",
            self.destination,
            self.check_in.format("%b %-d"),
            self.check_out.format("%b %-d"),
        )
    }
}
