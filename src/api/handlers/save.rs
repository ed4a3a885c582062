//! Handler for the save endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::save::{SaveRequest, SaveResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Maps a URL to an explicit or generated alias.
///
/// # Endpoint
///
/// `POST /url` (basic authentication required when mounted by the app router)
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com", "alias": "optional" }
/// ```
///
/// # Response
///
/// ```json
/// { "status": "OK", "alias": "ex7Q" }
/// ```
///
/// # Errors
///
/// - 400 Bad Request if the body cannot be decoded or fails validation
/// - 409 Conflict if the explicit alias already exists
/// - 503 Service Unavailable on backend failure or timeout
pub async fn save_handler(
    State(state): State<AppState>,
    payload: Result<Json<SaveRequest>, JsonRejection>,
) -> Result<Json<SaveResponse>, AppError> {
    let Json(payload) = payload.map_err(|rejection| {
        tracing::warn!(error = %rejection, "failed to decode request body");
        AppError::bad_request(
            "failed to decode request",
            json!({ "reason": rejection.body_text() }),
        )
    })?;

    let request = payload.normalized();

    request.validate().inspect_err(|e| {
        tracing::info!(error = %e, "invalid request");
    })?;

    tracing::debug!(url = %request.url, alias = ?request.alias, "request body decoded");

    let alias = state
        .alias_service
        .save_url(&request.url, request.alias, state.deadline())
        .await?;

    Ok(Json(SaveResponse::ok(alias)))
}
