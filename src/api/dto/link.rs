//! DTOs for link creation, update, and listing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::ShortLink;

/// Request body for `POST /url`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateLinkRequest {
    /// The destination to shorten. Scheme is optional; `https://` is assumed.
    #[validate(length(min = 1, message = "target_url must not be empty"))]
    pub target_url: String,
}

/// Request body for `PUT /urls/{key}`.
///
/// All fields are optional — only provided fields are changed. A new
/// `target_url` goes through the full validation pipeline before it is
/// stored.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateLinkRequest {
    #[validate(length(min = 1, message = "target_url must not be empty"))]
    pub target_url: Option<String>,

    pub is_active: Option<bool>,
}

/// JSON representation of a short link.
///
/// `url_completa` is derived from the serving host (or the configured base)
/// at response time; it is never stored.
#[derive(Debug, Serialize)]
pub struct LinkResponse {
    pub id: i64,
    pub target_url: String,
    pub key: String,
    pub clicks: i64,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub url_completa: String,

    /// Present when the liveness probe timed out and the URL was accepted
    /// without confirmation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

impl LinkResponse {
    /// Builds the response for a stored link, composing the public short URL
    /// against `short_url_base`.
    pub fn from_link(link: ShortLink, short_url_base: &str) -> Self {
        let url_completa =
            crate::application::services::link_service::compose_short_url(short_url_base, &link.key);

        Self {
            id: link.id,
            target_url: link.target_url,
            key: link.key,
            clicks: link.clicks,
            is_active: link.is_active,
            created_at: link.created_at,
            url_completa,
            warning: None,
        }
    }

    /// Attaches a validation warning (probe soft pass) to the response.
    pub fn with_warning(mut self, warning: Option<String>) -> Self {
        self.warning = warning;
        self
    }
}

/// Confirmation body for `DELETE /urls/{key}`.
#[derive(Debug, Serialize)]
pub struct DeleteLinkResponse {
    pub key: String,
    pub deleted: bool,
}
