use axum::{extract::State, routing::post, Json, Router};
use serde::Deserialize;

use wayfare_core::{MediaAttachment, TravelData, TripQuery};

use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct GuideRequest {
    pub query: TripQuery,
    #[serde(default)]
    pub media: Option<MediaAttachment>,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/v1/guide", post(generate_guide))
}

/// Assemble a fresh guide and install it as the active session plan.
async fn generate_guide(
    State(state): State<AppState>,
    Json(request): Json<GuideRequest>,
) -> Result<Json<TravelData>, AppError> {
    if request.query.destination.trim().is_empty() {
        return Err(AppError::Validation(
            "destination must not be empty".to_string(),
        ));
    }

    let data = state
        .guide
        .assemble(&request.query, request.media.as_ref())
        .await?;

    let mut session = state.session.lock().await;
    session.install(data.clone());

    Ok(Json(data))
}
