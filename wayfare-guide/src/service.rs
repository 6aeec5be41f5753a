use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use wayfare_core::{itinerary, sections, MediaAttachment, TravelData, TripQuery};
use wayfare_shared::IdGenerator;

use crate::client::{ModelClient, ModelError};

#[derive(Debug, thiserror::Error)]
pub enum GuideError {
    #[error("guide generation failed: {0}")]
    Model(#[from] ModelError),
}

/// Assembles a [`TravelData`] from one model call.
///
/// The model collaborator may fail hard; everything downstream of it
/// (splitting, itinerary parsing) degrades gracefully and never does.
pub struct GuideService {
    client: Arc<dyn ModelClient>,
    ids: Arc<dyn IdGenerator>,
}

impl GuideService {
    pub fn new(client: Arc<dyn ModelClient>, ids: Arc<dyn IdGenerator>) -> Self {
        Self { client, ids }
    }

    /// Call the model, split the response into the six sections, and parse
    /// the itinerary eagerly. The flight table stays unparsed until the
    /// editor opens.
    pub async fn assemble(
        &self,
        query: &TripQuery,
        media: Option<&MediaAttachment>,
    ) -> Result<TravelData, GuideError> {
        let response = self.client.generate(query, media).await?;

        let sections = sections::split_sections(&response.text);
        let parsed = itinerary::parse_itinerary(&sections.itinerary, self.ids.as_ref());
        if parsed.is_empty() {
            // The caller falls back to showing the raw section text.
            warn!(
                destination = %query.destination,
                "itinerary section yielded no day headings"
            );
        }

        info!(
            destination = %query.destination,
            nights = query.nights(),
            days = parsed.len(),
            sources = response.sources.len(),
            "assembled travel guide"
        );

        Ok(TravelData {
            id: self.ids.next_id(),
            custom_name: None,
            itinerary: sections.itinerary,
            accommodations: sections.accommodations,
            safety: sections.safety,
            health: sections.health,
            environmental: sections.environmental,
            tips: sections.tips,
            sources: response.sources,
            created_at: Utc::now(),
            parsed_itinerary: Some(parsed),
        })
    }
}
