//! Shared application state injected into every handler.

use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::LinkService;
use crate::config::Config;
use crate::infrastructure::persistence::PgLinkRepository;
use crate::validation::UrlValidator;

/// Application state: the service layer, the validator, and the startup
/// configuration. Built once in [`crate::server::run`]; everything here is
/// cheap to clone per request.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<PgPool>,
    pub link_service: Arc<LinkService<PgLinkRepository>>,
    pub validator: Arc<UrlValidator>,
    pub config: Arc<Config>,
}
