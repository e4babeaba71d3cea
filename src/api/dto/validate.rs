//! DTOs for the dry-run URL validation endpoint.

use serde::{Deserialize, Serialize};

/// Request body for `POST /api/validate-url`.
#[derive(Debug, Deserialize)]
pub struct ValidateUrlRequest {
    pub url: String,
}

/// Validation outcome. Always returned with status 200; `valid` carries the
/// verdict and `message` the stage-specific reason or warning.
#[derive(Debug, Serialize)]
pub struct ValidateUrlResponse {
    pub valid: bool,
    pub message: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub normalized_url: Option<String>,
}
