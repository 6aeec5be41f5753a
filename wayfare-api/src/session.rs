use axum::extract::{Path, State};
use axum::routing::{get, patch, post};
use axum::{Json, Router};
use serde::Deserialize;

use wayfare_core::checklist::ItemUpdate;
use wayfare_core::markdown::{self, Block};
use wayfare_core::sections::SectionKind;
use wayfare_core::{FlightEntry, TravelData};

use crate::error::AppError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/session", get(active_plan))
        .route("/v1/session/itinerary/{day_id}/items", post(add_item))
        .route(
            "/v1/session/itinerary/{day_id}/items/{item_id}",
            patch(update_item).delete(delete_item),
        )
        .route(
            "/v1/session/flights",
            get(open_flight_editor).put(save_flights),
        )
        .route("/v1/session/render/{section}", get(render_section))
}

fn no_active_plan() -> AppError {
    AppError::NotFound("no active plan in session".to_string())
}

async fn active_plan(State(state): State<AppState>) -> Result<Json<TravelData>, AppError> {
    let session = state.session.lock().await;
    session.active().cloned().map(Json).ok_or_else(no_active_plan)
}

/// Append a blank editable item to one day's checklist.
async fn add_item(
    State(state): State<AppState>,
    Path(day_id): Path<String>,
) -> Result<Json<TravelData>, AppError> {
    let mut session = state.session.lock().await;
    if session.active().is_none() {
        return Err(no_active_plan());
    }
    session.add_item(&day_id);
    session.active().cloned().map(Json).ok_or_else(no_active_plan)
}

async fn update_item(
    State(state): State<AppState>,
    Path((day_id, item_id)): Path<(String, String)>,
    Json(update): Json<ItemUpdate>,
) -> Result<Json<TravelData>, AppError> {
    let mut session = state.session.lock().await;
    if session.active().is_none() {
        return Err(no_active_plan());
    }
    session.update_item(&day_id, &item_id, &update);
    session.active().cloned().map(Json).ok_or_else(no_active_plan)
}

async fn delete_item(
    State(state): State<AppState>,
    Path((day_id, item_id)): Path<(String, String)>,
) -> Result<Json<TravelData>, AppError> {
    let mut session = state.session.lock().await;
    if session.active().is_none() {
        return Err(no_active_plan());
    }
    session.delete_item(&day_id, &item_id);
    session.active().cloned().map(Json).ok_or_else(no_active_plan)
}

/// Decode the comparison table into editable rows. A plan without a table
/// opens with exactly one blank row.
async fn open_flight_editor(
    State(state): State<AppState>,
) -> Result<Json<Vec<FlightEntry>>, AppError> {
    let mut session = state.session.lock().await;
    session
        .open_flight_editor()
        .map(|rows| Json(rows.to_vec()))
        .ok_or_else(no_active_plan)
}

#[derive(Debug, Deserialize)]
pub struct FlightSaveRequest {
    pub rows: Vec<FlightEntry>,
    /// Currency code for the regenerated table header; the configured
    /// default applies when omitted.
    #[serde(default)]
    pub currency: Option<String>,
}

/// Replace the editor working set and re-embed it into the accommodations
/// text.
async fn save_flights(
    State(state): State<AppState>,
    Json(request): Json<FlightSaveRequest>,
) -> Result<Json<TravelData>, AppError> {
    let mut session = state.session.lock().await;
    if session.active().is_none() {
        return Err(no_active_plan());
    }

    let currency = request
        .currency
        .unwrap_or_else(|| state.default_currency.clone());
    session.set_flight_edits(request.rows);
    session.save_flight_edits(&currency);

    session.active().cloned().map(Json).ok_or_else(no_active_plan)
}

/// Display tree for one of the six sections of the active plan.
async fn render_section(
    State(state): State<AppState>,
    Path(section): Path<String>,
) -> Result<Json<Vec<Block>>, AppError> {
    let kind = SectionKind::from_slug(&section)
        .ok_or_else(|| AppError::Validation(format!("unknown section {section:?}")))?;

    let session = state.session.lock().await;
    let data = session.active().ok_or_else(no_active_plan)?;
    Ok(Json(markdown::render_section(data.section(kind))))
}
