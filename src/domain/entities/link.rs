//! Short link entity: the mapping from a generated key to a target URL.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// A shortened URL with its click counter and activity flag.
///
/// `key` is globally unique and immutable once created; `clicks` never
/// decreases; `created_at` is assigned by the store.
#[derive(Debug, Clone, FromRow)]
pub struct ShortLink {
    pub id: i64,
    pub key: String,
    pub target_url: String,
    pub clicks: i64,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Input data for creating a new short link.
///
/// `clicks`, `is_active`, and `created_at` are assigned by the store.
#[derive(Debug, Clone)]
pub struct NewShortLink {
    pub key: String,
    pub target_url: String,
}

/// Partial update for an existing short link.
///
/// `None` fields are left unchanged; only fields the caller explicitly
/// supplied are written.
#[derive(Debug, Clone, Default)]
pub struct ShortLinkPatch {
    pub target_url: Option<String>,
    pub is_active: Option<bool>,
}

impl ShortLinkPatch {
    /// Returns true when the patch would change nothing.
    pub fn is_empty(&self) -> bool {
        self.target_url.is_none() && self.is_active.is_none()
    }
}
