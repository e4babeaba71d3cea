//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`               - Landing page (public)
//! - `POST /url`            - Create a short link (public)
//! - `GET  /urls`           - List links, `skip`/`limit` paginated (public)
//! - `PUT  /urls/{key}`     - Partial update (public)
//! - `DELETE /urls/{key}`   - Remove a link (public)
//! - `GET  /api/health`     - Health status + feature flags (public)
//! - `POST /api/validate-url` - Dry-run validation (public)
//! - `GET  /admin`          - Admin page (Basic Auth)
//! - `GET  /{key}`          - Short link redirect (public)
//! - `/static/*`            - Static assets
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Basic Auth** - Admin page only
//! - **Path normalization** - Trailing slash handling

use crate::api::handlers::{
    create_link_handler, delete_link_handler, health_handler, list_links_handler,
    redirect_handler, update_link_handler, validate_url_handler,
};
use crate::api::middleware::{basic_auth, tracing};
use crate::state::AppState;
use crate::web::pages::{admin_handler, index_handler};
use axum::routing::{get, post, put};
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Constructs the application router with all routes and middleware.
///
/// Literal routes (`/url`, `/urls`, `/admin`, `/api/...`) take precedence
/// over the `/{key}` capture, so generated keys can never shadow an
/// endpoint.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let api = Router::new()
        .route("/health", get(health_handler))
        .route("/validate-url", post(validate_url_handler));

    let admin = Router::new()
        .route("/admin", get(admin_handler))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            basic_auth::layer,
        ));

    let router = Router::new()
        .route("/", get(index_handler))
        .route("/url", post(create_link_handler))
        .route("/urls", get(list_links_handler))
        .route(
            "/urls/{key}",
            put(update_link_handler).delete(delete_link_handler),
        )
        .nest("/api", api)
        .merge(admin)
        .route("/{key}", get(redirect_handler))
        .nest_service("/static", ServeDir::new("static"))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
