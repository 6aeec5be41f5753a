use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use wayfare_core::{MediaAttachment, TripQuery};
use wayfare_shared::GroundingSource;

/// Raw output of one guide generation call: the freeform text blob plus any
/// grounding citations the model attached.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModelResponse {
    pub text: String,
    pub sources: Vec<GroundingSource>,
}

#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("model transport failure: {0}")]
    Transport(String),

    #[error("model client not configured: {0}")]
    Unavailable(String),
}

/// External generative-model collaborator.
///
/// Prompt construction, model selection, media analysis and transcription
/// all live behind this boundary; the pipeline only ever sees the finished
/// text and its sources.
#[async_trait]
pub trait ModelClient: Send + Sync {
    async fn generate(
        &self,
        query: &TripQuery,
        media: Option<&MediaAttachment>,
    ) -> Result<ModelResponse, ModelError>;
}
