//! Handlers for link management endpoints (create, list, update, delete).

use axum::{
    Json,
    extract::{Path, Query, State},
    http::HeaderMap,
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::link::{
    CreateLinkRequest, DeleteLinkResponse, LinkResponse, UpdateLinkRequest,
};
use crate::api::dto::pagination::ListParams;
use crate::domain::entities::ShortLinkPatch;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::extract_host::extract_host_from_headers;
use crate::validation::ValidationError;

/// Resolves the base for composed short URLs: the configured override when
/// set, otherwise the inbound request's own `Host` header. Nothing about the
/// base is stored, so the same database serves localhost, staging, and
/// production unchanged.
fn short_url_base(state: &AppState, headers: &HeaderMap) -> Result<String, AppError> {
    if let Some(base) = &state.config.base_url {
        return Ok(base.clone());
    }

    let host = extract_host_from_headers(headers)?;
    Ok(format!("http://{host}"))
}

/// Converts a pipeline rejection into a 400 whose message is the
/// stage-specific reason.
fn rejection(e: ValidationError) -> AppError {
    AppError::bad_request(e.to_string(), json!({}))
}

/// Creates a new short link.
///
/// # Endpoint
///
/// `POST /url`
///
/// # Request Flow
///
/// 1. Validate the target URL through the full pipeline
/// 2. Generate a unique key (collision retry with length escalation)
/// 3. Persist and return the record with its computed short URL
///
/// # Errors
///
/// Returns 400 Bad Request with the failing stage's reason when validation
/// rejects the URL.
pub async fn create_link_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateLinkRequest>,
) -> Result<Json<LinkResponse>, AppError> {
    payload.validate()?;

    let validated = state
        .validator
        .validate(&payload.target_url)
        .await
        .map_err(rejection)?;

    let link = state.link_service.create_link(validated.url).await?;

    tracing::info!(key = %link.key, "short link created");

    let base = short_url_base(&state, &headers)?;
    Ok(Json(
        LinkResponse::from_link(link, &base).with_warning(validated.warning),
    ))
}

/// Lists links, newest first.
///
/// # Endpoint
///
/// `GET /urls?skip=0&limit=100`
///
/// # Errors
///
/// Returns 400 Bad Request for an out-of-range `limit`.
pub async fn list_links_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<LinkResponse>>, AppError> {
    let (skip, limit) = params
        .validate_and_get_skip_limit()
        .map_err(|m| AppError::bad_request(m, json!({})))?;

    let links = state.link_service.list_links(skip, limit).await?;

    let base = short_url_base(&state, &headers)?;
    Ok(Json(
        links
            .into_iter()
            .map(|link| LinkResponse::from_link(link, &base))
            .collect(),
    ))
}

/// Partially updates a short link.
///
/// # Endpoint
///
/// `PUT /urls/{key}`
///
/// Only provided fields are changed; a new `target_url` goes through the
/// full validation pipeline first.
///
/// # Errors
///
/// Returns 404 Not Found for unknown keys, 400 Bad Request when the new URL
/// fails validation.
pub async fn update_link_handler(
    Path(key): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<UpdateLinkRequest>,
) -> Result<Json<LinkResponse>, AppError> {
    payload.validate()?;

    let target_url = match payload.target_url {
        Some(raw) => Some(state.validator.validate(&raw).await.map_err(rejection)?.url),
        None => None,
    };

    let patch = ShortLinkPatch {
        target_url,
        is_active: payload.is_active,
    };

    let link = state.link_service.update_link(&key, patch).await?;

    let base = short_url_base(&state, &headers)?;
    Ok(Json(LinkResponse::from_link(link, &base)))
}

/// Removes a short link.
///
/// # Endpoint
///
/// `DELETE /urls/{key}`
///
/// # Errors
///
/// Returns 404 Not Found for unknown keys.
pub async fn delete_link_handler(
    Path(key): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<DeleteLinkResponse>, AppError> {
    state.link_service.delete_link(&key).await?;

    tracing::info!(%key, "short link deleted");

    Ok(Json(DeleteLinkResponse { key, deleted: true }))
}
