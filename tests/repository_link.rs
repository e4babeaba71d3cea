mod common;

use sqlx::PgPool;
use std::sync::Arc;

use acorta::domain::entities::{NewShortLink, ShortLinkPatch};
use acorta::domain::repositories::LinkRepository;
use acorta::error::AppError;
use acorta::infrastructure::persistence::PgLinkRepository;

fn repo(pool: PgPool) -> PgLinkRepository {
    PgLinkRepository::new(Arc::new(pool))
}

#[sqlx::test]
async fn test_insert_and_find_by_key(pool: PgPool) {
    let repo = repo(pool);

    let link = repo
        .insert(NewShortLink {
            key: "abc12".to_string(),
            target_url: "https://example.com".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(link.key, "abc12");
    assert_eq!(link.clicks, 0);
    assert!(link.is_active);

    let found = repo.find_by_key("abc12").await.unwrap().unwrap();
    assert_eq!(found.id, link.id);
    assert_eq!(found.target_url, "https://example.com");

    assert!(repo.find_by_key("missing").await.unwrap().is_none());
}

#[sqlx::test]
async fn test_insert_duplicate_key_is_conflict(pool: PgPool) {
    let repo = repo(pool);

    let new_link = NewShortLink {
        key: "dup01".to_string(),
        target_url: "https://example.com".to_string(),
    };

    repo.insert(new_link.clone()).await.unwrap();

    let err = repo.insert(new_link).await.unwrap_err();
    assert!(matches!(err, AppError::Conflict { .. }));
}

#[sqlx::test]
async fn test_list_respects_skip_and_limit(pool: PgPool) {
    common::insert_test_link(&pool, "lst01", "https://example.com/1").await;
    common::insert_test_link(&pool, "lst02", "https://example.com/2").await;
    common::insert_test_link(&pool, "lst03", "https://example.com/3").await;

    let repo = repo(pool);

    let page = repo.list(0, 2).await.unwrap();
    assert_eq!(page.len(), 2);

    let rest = repo.list(2, 2).await.unwrap();
    assert_eq!(rest.len(), 1);

    let all = repo.list(0, 100).await.unwrap();
    assert_eq!(all.len(), 3);
}

#[sqlx::test]
async fn test_update_patches_only_supplied_fields(pool: PgPool) {
    common::insert_test_link(&pool, "pat01", "https://example.com/original").await;

    let repo = repo(pool);

    let updated = repo
        .update(
            "pat01",
            ShortLinkPatch {
                target_url: None,
                is_active: Some(false),
            },
        )
        .await
        .unwrap()
        .unwrap();

    assert!(!updated.is_active);
    assert_eq!(updated.target_url, "https://example.com/original");

    let updated = repo
        .update(
            "pat01",
            ShortLinkPatch {
                target_url: Some("https://example.com/new".to_string()),
                is_active: None,
            },
        )
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.target_url, "https://example.com/new");
    assert!(!updated.is_active, "is_active must survive a URL-only patch");
}

#[sqlx::test]
async fn test_update_unknown_key_returns_none(pool: PgPool) {
    let repo = repo(pool);

    let result = repo
        .update("nope0", ShortLinkPatch { target_url: None, is_active: Some(true) })
        .await
        .unwrap();
    assert!(result.is_none());
}

#[sqlx::test]
async fn test_delete(pool: PgPool) {
    common::insert_test_link(&pool, "del01", "https://example.com").await;

    let repo = repo(pool);

    assert!(repo.delete("del01").await.unwrap());
    assert!(repo.find_by_key("del01").await.unwrap().is_none());
    assert!(!repo.delete("del01").await.unwrap());
}

#[sqlx::test]
async fn test_increment_clicks_moves_counter_by_one(pool: PgPool) {
    common::insert_test_link(&pool, "clk01", "https://example.com").await;

    let repo = repo(pool);

    let link = repo.increment_clicks("clk01").await.unwrap().unwrap();
    assert_eq!(link.clicks, 1);

    let link = repo.increment_clicks("clk01").await.unwrap().unwrap();
    assert_eq!(link.clicks, 2);
}

#[sqlx::test]
async fn test_increment_clicks_skips_inactive_links(pool: PgPool) {
    common::insert_inactive_link(&pool, "off01", "https://example.com").await;

    let repo = repo(pool.clone());

    assert!(repo.increment_clicks("off01").await.unwrap().is_none());
    assert_eq!(common::fetch_clicks(&pool, "off01").await, 0);
}

#[sqlx::test]
async fn test_increment_clicks_unknown_key_returns_none(pool: PgPool) {
    let repo = repo(pool);

    assert!(repo.increment_clicks("nope0").await.unwrap().is_none());
}
