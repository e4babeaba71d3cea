//! Askama templates and handlers for the HTML pages.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;

/// Landing page with the shorten form.
///
/// The form posts to `/url` from `static/app.js`.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {}

/// Admin page listing every stored link.
///
/// The table is populated client-side from `GET /urls` by
/// `static/admin.js`; the route is gated by Basic Auth.
#[derive(Template, WebTemplate)]
#[template(path = "admin.html")]
pub struct AdminTemplate {}

/// Not-found page rendered when a short key does not exist or has been
/// deactivated.
#[derive(Template, WebTemplate)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {
    pub key: String,
}

/// Renders the landing page.
///
/// # Endpoint
///
/// `GET /`
pub async fn index_handler() -> impl IntoResponse {
    IndexTemplate {}
}

/// Renders the admin page shell.
///
/// # Endpoint
///
/// `GET /admin` (Basic Auth required; see
/// [`crate::api::middleware::basic_auth`])
pub async fn admin_handler() -> impl IntoResponse {
    AdminTemplate {}
}
