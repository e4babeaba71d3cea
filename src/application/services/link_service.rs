//! Short link creation, lookup, and lifecycle service.

use std::sync::Arc;

use crate::domain::entities::{NewShortLink, ShortLink, ShortLinkPatch};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::key_generator::{DEFAULT_KEY_LENGTH, generate_key};
use serde_json::json;

/// Attempts per key length before escalating to a longer key.
const MAX_ATTEMPTS_PER_LENGTH: usize = 8;

/// Longest key length tried before giving up. With a 62-symbol alphabet the
/// keyspace grows 62x per extra character, so reaching this bound means the
/// table is pathologically full or the random source is broken.
const MAX_KEY_LENGTH: usize = DEFAULT_KEY_LENGTH + 2;

/// Service for creating and managing short links.
///
/// Owns the generate-check-insert loop: key collisions, including the race
/// where a concurrent writer inserts the same key between our existence
/// check and our insert, are retried with a fresh key instead of surfacing
/// to the caller.
pub struct LinkService<R: LinkRepository> {
    repository: Arc<R>,
}

impl<R: LinkRepository> LinkService<R> {
    /// Creates a new link service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Creates a short link for an already-validated target URL.
    ///
    /// # Key Generation
    ///
    /// Generates a random 5-character key, checks it against the store, and
    /// inserts. Collisions retry with a fresh key, a bounded number of times
    /// per length, escalating to a longer key when a length is exhausted.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if every length up to the bound is
    /// exhausted, or on database errors.
    pub async fn create_link(&self, target_url: String) -> Result<ShortLink, AppError> {
        for length in DEFAULT_KEY_LENGTH..=MAX_KEY_LENGTH {
            for _ in 0..MAX_ATTEMPTS_PER_LENGTH {
                let key = generate_key(length);

                if self.repository.find_by_key(&key).await?.is_some() {
                    continue;
                }

                match self
                    .repository
                    .insert(NewShortLink {
                        key,
                        target_url: target_url.clone(),
                    })
                    .await
                {
                    Ok(link) => return Ok(link),
                    // Lost the race against a concurrent writer: the unique
                    // constraint rejected our insert. Regenerate and retry.
                    Err(AppError::Conflict { .. }) => continue,
                    Err(e) => return Err(e),
                }
            }

            tracing::warn!(length, "key length exhausted, escalating");
        }

        Err(AppError::internal(
            "Failed to generate a unique key",
            json!({ "reason": "too many collisions" }),
        ))
    }

    /// Retrieves a link by its short key.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches the key.
    pub async fn get_link(&self, key: &str) -> Result<ShortLink, AppError> {
        self.repository.find_by_key(key).await?.ok_or_else(|| {
            AppError::not_found("Short link not found", json!({ "key": key }))
        })
    }

    /// Lists links with `skip`/`limit` pagination, newest first.
    pub async fn list_links(&self, skip: i64, limit: i64) -> Result<Vec<ShortLink>, AppError> {
        self.repository.list(skip, limit).await
    }

    /// Partially updates a link. Only fields present in the patch change.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches the key.
    pub async fn update_link(
        &self,
        key: &str,
        patch: ShortLinkPatch,
    ) -> Result<ShortLink, AppError> {
        if patch.is_empty() {
            return self.get_link(key).await;
        }

        self.repository.update(key, patch).await?.ok_or_else(|| {
            AppError::not_found("Short link not found", json!({ "key": key }))
        })
    }

    /// Removes a link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches the key.
    pub async fn delete_link(&self, key: &str) -> Result<(), AppError> {
        let deleted = self.repository.delete(key).await?;

        if !deleted {
            return Err(AppError::not_found(
                "Short link not found",
                json!({ "key": key }),
            ));
        }

        Ok(())
    }

    /// Resolves a key for redirecting: counts the click and returns the link.
    ///
    /// Inactive links do not redirect. The increment is atomic in the store,
    /// so concurrent redirects each count exactly once.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for unknown keys and for links whose
    /// `is_active` flag is off.
    pub async fn follow_link(&self, key: &str) -> Result<ShortLink, AppError> {
        match self.repository.increment_clicks(key).await? {
            Some(link) => Ok(link),
            None => Err(AppError::not_found(
                "Short link not found",
                json!({ "key": key }),
            )),
        }
    }
}

/// Composes the public short URL for a key against a base like
/// `https://aco.rt` or `http://localhost:8000`.
pub fn compose_short_url(base: &str, key: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), key)
}
