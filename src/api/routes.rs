//! API route configuration.
//!
//! Save routes require basic authentication via [`crate::api::middleware::auth`].

use crate::api::handlers::save_handler;
use crate::state::AppState;
use axum::{Router, routing::post};

/// Routes protected by basic authentication.
///
/// # Endpoints
///
/// - `POST /url` - Map a URL to an explicit or generated alias
pub fn protected_routes() -> Router<AppState> {
    Router::new().route("/url", post(save_handler))
}
