mod common;

use axum::Router;
use axum::routing::{get, post, put};
use axum_test::TestServer;
use serde_json::json;
use sqlx::PgPool;

use acorta::api::handlers::{
    create_link_handler, delete_link_handler, list_links_handler, update_link_handler,
};

fn link_routes(state: acorta::AppState) -> Router {
    Router::new()
        .route("/url", post(create_link_handler))
        .route("/urls", get(list_links_handler))
        .route(
            "/urls/{key}",
            put(update_link_handler).delete(delete_link_handler),
        )
        .with_state(state)
}

#[sqlx::test]
async fn test_create_link_success(pool: PgPool) {
    let server = TestServer::new(link_routes(common::create_test_state(pool))).unwrap();

    let response = server
        .post("/url")
        .json(&json!({ "target_url": "https://www.google.com" }))
        .await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["target_url"], "https://www.google.com");
    assert_eq!(body["clicks"], 0);
    assert_eq!(body["is_active"], true);

    let key = body["key"].as_str().unwrap();
    assert_eq!(key.len(), 5);
    assert!(key.chars().all(|c| c.is_ascii_alphanumeric()));

    assert_eq!(
        body["url_completa"],
        format!("{}/{}", common::TEST_BASE_URL, key)
    );
}

#[sqlx::test]
async fn test_create_link_prepends_https_scheme(pool: PgPool) {
    let server = TestServer::new(link_routes(common::create_test_state(pool))).unwrap();

    let response = server
        .post("/url")
        .json(&json!({ "target_url": "www.example.com/page" }))
        .await;

    response.assert_status_ok();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["target_url"], "https://www.example.com/page");
}

#[sqlx::test]
async fn test_create_link_composes_url_from_host_header(pool: PgPool) {
    let state = common::create_test_state_without_base_url(pool);
    let server = TestServer::new(link_routes(state)).unwrap();

    let response = server
        .post("/url")
        .add_header("Host", "short.example.com:8000")
        .json(&json!({ "target_url": "https://www.example.com" }))
        .await;

    response.assert_status_ok();
    let body = response.json::<serde_json::Value>();
    let key = body["key"].as_str().unwrap();
    assert_eq!(
        body["url_completa"],
        format!("http://short.example.com:8000/{key}")
    );
}

#[sqlx::test]
async fn test_create_link_rejects_input_without_domain(pool: PgPool) {
    let server = TestServer::new(link_routes(common::create_test_state(pool))).unwrap();

    let response = server
        .post("/url")
        .json(&json!({ "target_url": "not a domain" }))
        .await;

    response.assert_status_bad_request();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "validation_error");
    assert!(
        body["error"]["message"]
            .as_str()
            .unwrap()
            .contains("domain structure")
    );
}

#[sqlx::test]
async fn test_create_link_rejects_private_targets(pool: PgPool) {
    let server = TestServer::new(link_routes(common::create_test_state(pool))).unwrap();

    for target in ["http://127.0.0.1/admin", "http://192.168.1.1"] {
        let response = server.post("/url").json(&json!({ "target_url": target })).await;

        response.assert_status_bad_request();

        let message = response.json::<serde_json::Value>()["error"]["message"]
            .as_str()
            .unwrap()
            .to_string();
        assert!(
            message.contains("private") || message.contains("loopback"),
            "unexpected reason for {target}: {message}"
        );
    }
}

#[sqlx::test]
async fn test_create_link_rejects_empty_body_url(pool: PgPool) {
    let server = TestServer::new(link_routes(common::create_test_state(pool))).unwrap();

    let response = server.post("/url").json(&json!({ "target_url": "" })).await;

    response.assert_status_bad_request();
}

#[sqlx::test]
async fn test_created_keys_are_unique(pool: PgPool) {
    let server = TestServer::new(link_routes(common::create_test_state(pool))).unwrap();

    let mut keys = std::collections::HashSet::new();
    for i in 0..10 {
        let response = server
            .post("/url")
            .json(&json!({ "target_url": format!("https://example.com/{i}") }))
            .await;
        response.assert_status_ok();

        let body = response.json::<serde_json::Value>();
        keys.insert(body["key"].as_str().unwrap().to_string());
    }

    assert_eq!(keys.len(), 10);
}

#[sqlx::test]
async fn test_list_links_pagination(pool: PgPool) {
    common::insert_test_link(&pool, "aaaa1", "https://example.com/1").await;
    common::insert_test_link(&pool, "bbbb2", "https://example.com/2").await;

    let server = TestServer::new(link_routes(common::create_test_state(pool))).unwrap();

    let response = server.get("/urls").add_query_param("skip", 0).add_query_param("limit", 1).await;
    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body.as_array().unwrap().len(), 1);

    let response = server.get("/urls").await;
    let body = response.json::<serde_json::Value>();
    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[sqlx::test]
async fn test_list_links_rejects_zero_limit(pool: PgPool) {
    let server = TestServer::new(link_routes(common::create_test_state(pool))).unwrap();

    let response = server.get("/urls").add_query_param("limit", 0).await;
    response.assert_status_bad_request();
}

#[sqlx::test]
async fn test_update_only_is_active_leaves_target_unchanged(pool: PgPool) {
    common::insert_test_link(&pool, "upd01", "https://example.com/original").await;

    let server = TestServer::new(link_routes(common::create_test_state(pool))).unwrap();

    let response = server
        .put("/urls/upd01")
        .json(&json!({ "is_active": false }))
        .await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["is_active"], false);
    assert_eq!(body["target_url"], "https://example.com/original");
}

#[sqlx::test]
async fn test_update_target_url_is_validated(pool: PgPool) {
    common::insert_test_link(&pool, "upd02", "https://example.com").await;

    let server = TestServer::new(link_routes(common::create_test_state(pool))).unwrap();

    let response = server
        .put("/urls/upd02")
        .json(&json!({ "target_url": "http://localhost/evil" }))
        .await;

    response.assert_status_bad_request();
}

#[sqlx::test]
async fn test_update_unknown_key_is_404(pool: PgPool) {
    let server = TestServer::new(link_routes(common::create_test_state(pool))).unwrap();

    let response = server
        .put("/urls/nope0")
        .json(&json!({ "is_active": false }))
        .await;

    response.assert_status_not_found();
}

#[sqlx::test]
async fn test_delete_link(pool: PgPool) {
    common::insert_test_link(&pool, "del01", "https://example.com").await;

    let server = TestServer::new(link_routes(common::create_test_state(pool))).unwrap();

    let response = server.delete("/urls/del01").await;
    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["deleted"], true);
    assert_eq!(body["key"], "del01");

    // Deleting again is a 404.
    let response = server.delete("/urls/del01").await;
    response.assert_status_not_found();
}
