use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use wayfare_guide::GuideError;
use wayfare_store::StoreError;

#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    Validation(String),
    UpstreamModel(String),
    Internal(anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::UpstreamModel(msg) => {
                tracing::error!("model collaborator failed: {}", msg);
                (StatusCode::BAD_GATEWAY, msg)
            }
            AppError::Internal(err) => {
                tracing::error!("Internal Server Error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

impl From<GuideError> for AppError {
    fn from(err: GuideError) -> Self {
        AppError::UpstreamModel(err.to_string())
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => AppError::NotFound(format!("no saved plan with id {id}")),
            other => AppError::Internal(other.into()),
        }
    }
}
