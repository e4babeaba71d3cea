//! Repository trait for short link data access.

use crate::domain::entities::{NewShortLink, ShortLink, ShortLinkPatch};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing short links.
///
/// Plain CRUD over the `links` table plus the atomic click increment used by
/// the redirect path. Key uniqueness is enforced by the store's constraint,
/// not by the trait; callers must treat [`AppError::Conflict`] from
/// [`LinkRepository::insert`] as a key collision.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Inserts a new short link and returns the stored record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the key already exists (including
    /// the generate-check-insert race between concurrent writers).
    /// Returns [`AppError::Internal`] on database errors.
    async fn insert(&self, new_link: NewShortLink) -> Result<ShortLink, AppError>;

    /// Finds a link by its short key.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_key(&self, key: &str) -> Result<Option<ShortLink>, AppError>;

    /// Lists links ordered by creation time, newest first, with
    /// `skip`/`limit` pagination.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self, skip: i64, limit: i64) -> Result<Vec<ShortLink>, AppError>;

    /// Partially updates a link. Only fields present in [`ShortLinkPatch`]
    /// are modified.
    ///
    /// Returns `Ok(None)` if no link matches `key`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(&self, key: &str, patch: ShortLinkPatch)
    -> Result<Option<ShortLink>, AppError>;

    /// Removes a link. Returns `Ok(true)` if a row was deleted.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, key: &str) -> Result<bool, AppError>;

    /// Atomically increments the click counter of an active link and returns
    /// the updated record.
    ///
    /// Returns `Ok(None)` if the key does not exist or the link is inactive;
    /// the counter is only ever moved by exactly 1 per call.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn increment_clicks(&self, key: &str) -> Result<Option<ShortLink>, AppError>;
}
