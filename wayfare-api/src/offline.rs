use async_trait::async_trait;

use wayfare_core::{MediaAttachment, TripQuery};
use wayfare_guide::{ModelClient, ModelError, ModelResponse};

/// Placeholder model collaborator wired into the binary until a real
/// transport is configured. Every other route works against it; guide
/// generation reports the boundary as unavailable.
pub struct OfflineModel;

#[async_trait]
impl ModelClient for OfflineModel {
    async fn generate(
        &self,
        _query: &TripQuery,
        _media: Option<&MediaAttachment>,
    ) -> Result<ModelResponse, ModelError> {
        Err(ModelError::Unavailable(
            "no model transport configured".to_string(),
        ))
    }
}
