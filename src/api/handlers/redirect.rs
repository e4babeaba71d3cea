//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};

use crate::error::AppError;
use crate::state::AppState;
use crate::web::pages::NotFoundTemplate;

/// Redirects a short key to its target URL.
///
/// # Endpoint
///
/// `GET /{key}`
///
/// # Request Flow
///
/// 1. Atomically increment the click counter of the active link
/// 2. Respond with 307 Temporary Redirect to the stored target
///
/// Unknown keys and deactivated links render the HTML not-found page instead
/// of the JSON error envelope — this endpoint is opened by people, not API
/// clients.
pub async fn redirect_handler(
    Path(key): Path<String>,
    State(state): State<AppState>,
) -> Response {
    match state.link_service.follow_link(&key).await {
        Ok(link) => {
            tracing::debug!(key = %link.key, clicks = link.clicks, "redirecting");
            Redirect::temporary(&link.target_url).into_response()
        }
        Err(AppError::NotFound { .. }) => {
            tracing::debug!(%key, "redirect for unknown or inactive key");
            (StatusCode::NOT_FOUND, NotFoundTemplate { key }).into_response()
        }
        Err(e) => e.into_response(),
    }
}
