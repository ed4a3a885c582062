//! Handler for alias redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::IntoResponse,
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects an alias to its URL.
///
/// # Endpoint
///
/// `GET /{alias}`
///
/// # Errors
///
/// Returns 404 Not Found if the alias was never stored.
/// Returns 503 Service Unavailable on backend failure or timeout.
/// Returns 500 Internal Server Error if the stored URL cannot be sent as a
/// `Location` header.
pub async fn redirect_handler(
    Path(alias): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let url = state.alias_service.resolve(&alias, state.deadline()).await?;

    let location = HeaderValue::from_str(&url).map_err(|e| {
        tracing::error!(alias = %alias, error = %e, "stored url is not a valid location");
        AppError::internal("failed to redirect")
    })?;

    tracing::debug!(alias = %alias, url = %url, "redirecting");

    Ok((
        StatusCode::TEMPORARY_REDIRECT,
        [(header::LOCATION, location)],
    ))
}
