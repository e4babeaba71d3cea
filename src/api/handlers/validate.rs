//! Handler for dry-run URL validation.

use axum::{Json, extract::State};

use crate::api::dto::validate::{ValidateUrlRequest, ValidateUrlResponse};
use crate::state::AppState;

/// Runs the validation pipeline over a URL without persisting anything.
///
/// # Endpoint
///
/// `POST /api/validate-url`
///
/// Always answers 200; the verdict is in the body. A rejected URL carries
/// the failing stage's reason in `message`, an accepted one the normalized
/// URL (plus the probe warning when the soft-pass rule applied).
pub async fn validate_url_handler(
    State(state): State<AppState>,
    Json(payload): Json<ValidateUrlRequest>,
) -> Json<ValidateUrlResponse> {
    match state.validator.validate(&payload.url).await {
        Ok(outcome) => Json(ValidateUrlResponse {
            valid: true,
            message: outcome
                .warning
                .unwrap_or_else(|| "URL is valid".to_string()),
            normalized_url: Some(outcome.url),
        }),
        Err(e) => Json(ValidateUrlResponse {
            valid: false,
            message: e.to_string(),
            normalized_url: None,
        }),
    }
}
