//! PostgreSQL implementation of the link repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewShortLink, ShortLink, ShortLinkPatch};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// PostgreSQL repository for short link storage and retrieval.
///
/// All statements are single-row and rely on the `links_key_unique`
/// constraint for key uniqueness; a violated constraint surfaces as
/// [`AppError::Conflict`] through the shared sqlx error mapping.
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
}

impl PgLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn insert(&self, new_link: NewShortLink) -> Result<ShortLink, AppError> {
        let link = sqlx::query_as::<_, ShortLink>(
            r#"
            INSERT INTO links (key, target_url)
            VALUES ($1, $2)
            RETURNING id, key, target_url, clicks, is_active, created_at
            "#,
        )
        .bind(&new_link.key)
        .bind(&new_link.target_url)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(link)
    }

    async fn find_by_key(&self, key: &str) -> Result<Option<ShortLink>, AppError> {
        let link = sqlx::query_as::<_, ShortLink>(
            r#"
            SELECT id, key, target_url, clicks, is_active, created_at
            FROM links
            WHERE key = $1
            "#,
        )
        .bind(key)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(link)
    }

    async fn list(&self, skip: i64, limit: i64) -> Result<Vec<ShortLink>, AppError> {
        let links = sqlx::query_as::<_, ShortLink>(
            r#"
            SELECT id, key, target_url, clicks, is_active, created_at
            FROM links
            ORDER BY created_at DESC, id DESC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(skip)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(links)
    }

    async fn update(
        &self,
        key: &str,
        patch: ShortLinkPatch,
    ) -> Result<Option<ShortLink>, AppError> {
        // COALESCE keeps the stored value for every field the patch omits.
        let link = sqlx::query_as::<_, ShortLink>(
            r#"
            UPDATE links
            SET target_url = COALESCE($2, target_url),
                is_active = COALESCE($3, is_active)
            WHERE key = $1
            RETURNING id, key, target_url, clicks, is_active, created_at
            "#,
        )
        .bind(key)
        .bind(patch.target_url)
        .bind(patch.is_active)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(link)
    }

    async fn delete(&self, key: &str) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM links WHERE key = $1")
            .bind(key)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn increment_clicks(&self, key: &str) -> Result<Option<ShortLink>, AppError> {
        // Atomic: a concurrent redirect on the same key can never skip or
        // double-apply an increment.
        let link = sqlx::query_as::<_, ShortLink>(
            r#"
            UPDATE links
            SET clicks = clicks + 1
            WHERE key = $1 AND is_active
            RETURNING id, key, target_url, clicks, is_active, created_at
            "#,
        )
        .bind(key)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(link)
    }
}
