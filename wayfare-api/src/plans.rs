use axum::extract::{Path, State};
use axum::routing::{get, patch, post};
use axum::{Json, Router};
use serde::Deserialize;

use wayfare_core::TravelData;

use crate::error::AppError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/plans", get(list_plans).post(save_plan).delete(clear_plans))
        .route("/v1/plans/{id}", patch(rename_plan).delete(delete_plan))
        .route("/v1/plans/{id}/load", post(load_plan))
}

async fn list_plans(State(state): State<AppState>) -> Result<Json<Vec<TravelData>>, AppError> {
    Ok(Json(state.store.list().await?))
}

#[derive(Debug, Deserialize)]
pub struct SavePlanRequest {
    pub name: String,
}

/// Push the active session plan into the saved collection. The session
/// keeps its detached copy; only the store owns the saved entry.
async fn save_plan(
    State(state): State<AppState>,
    Json(request): Json<SavePlanRequest>,
) -> Result<Json<TravelData>, AppError> {
    let active = {
        let session = state.session.lock().await;
        session.active().cloned()
    }
    .ok_or_else(|| AppError::NotFound("no active plan in session".to_string()))?;

    let saved = state.store.save(active, request.name).await?;
    Ok(Json(saved))
}

#[derive(Debug, Deserialize)]
pub struct RenamePlanRequest {
    pub name: String,
}

async fn rename_plan(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<RenamePlanRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    state.store.rename(&id, &request.name).await?;
    Ok(Json(serde_json::json!({ "renamed": id })))
}

/// Deletion is irreversible; the calling client is expected to have
/// confirmed with the user.
async fn delete_plan(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    state.store.delete(&id).await?;
    Ok(Json(serde_json::json!({ "deleted": id })))
}

async fn clear_plans(State(state): State<AppState>) -> Result<Json<serde_json::Value>, AppError> {
    state.store.clear().await?;
    Ok(Json(serde_json::json!({ "cleared": true })))
}

/// Copy one saved plan into the session as the active plan.
async fn load_plan(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<TravelData>, AppError> {
    let plan = state.store.get(&id).await?;
    let mut session = state.session.lock().await;
    session.install(plan.clone());
    Ok(Json(plan))
}
