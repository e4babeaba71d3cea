//! HTTP Basic authentication middleware for the admin page.

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::Response,
};
use axum_auth::AuthBasic;
use subtle::ConstantTimeEq;

use crate::{error::AppError, state::AppState};

/// Authenticates requests against the configured admin credentials.
///
/// # Header Format
///
/// ```text
/// Authorization: Basic base64(username:password)
/// ```
///
/// Both the username and the password comparison run in constant time, and
/// both always run, so response timing reveals nothing about which part was
/// wrong.
///
/// # Errors
///
/// Returns `401 Unauthorized` with a `WWW-Authenticate: Basic` challenge
/// when the header is missing, malformed, or carries wrong credentials.
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let AuthBasic((username, password)) = AuthBasic::from_request_parts(&mut parts, &())
        .await
        .map_err(|_| {
            AppError::unauthorized(
                "Unauthorized",
                serde_json::json!({"reason": "Authorization header is missing or invalid"}),
            )
        })?;

    let password = password.unwrap_or_default();

    let username_ok = constant_time_eq(&username, &st.config.admin_username);
    let password_ok = constant_time_eq(&password, &st.config.admin_password);

    // Bitwise AND: no short-circuit between the two comparisons.
    if !(username_ok & password_ok) {
        return Err(AppError::unauthorized(
            "Unauthorized",
            serde_json::json!({"reason": "Invalid credentials"}),
        ));
    }

    Ok(next.run(Request::from_parts(parts, body)).await)
}

fn constant_time_eq(provided: &str, expected: &str) -> bool {
    provided.as_bytes().ct_eq(expected.as_bytes()).into()
}
