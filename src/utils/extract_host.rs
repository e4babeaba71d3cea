//! Host extraction from HTTP request headers.
//!
//! The public short URL is composed from the inbound request's own `Host`
//! header unless a base override is configured, so the service works on
//! localhost, staging, and production without data migration.

use crate::error::AppError;
use axum::http::{HeaderMap, header};

/// Extracts the host (with any port preserved) from the `Host` header.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if the `Host` header is missing or not
/// valid UTF-8.
///
/// # Examples
///
/// ```ignore
/// let mut headers = HeaderMap::new();
/// headers.insert(header::HOST, "aco.rt:8080".parse().unwrap());
///
/// assert_eq!(extract_host_from_headers(&headers).unwrap(), "aco.rt:8080");
/// ```
pub fn extract_host_from_headers(headers: &HeaderMap) -> Result<String, AppError> {
    let host = headers
        .get(header::HOST)
        .ok_or_else(|| AppError::bad_request("Missing Host header", serde_json::json!({})))?
        .to_str()
        .map_err(|_| AppError::bad_request("Invalid Host header", serde_json::json!({})))?;

    Ok(host.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderMap, HeaderValue, header};

    #[test]
    fn test_extract_host_simple() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static("aco.rt"));

        assert_eq!(extract_host_from_headers(&headers).unwrap(), "aco.rt");
    }

    #[test]
    fn test_extract_host_keeps_port() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static("localhost:8000"));

        assert_eq!(
            extract_host_from_headers(&headers).unwrap(),
            "localhost:8000"
        );
    }

    #[test]
    fn test_extract_host_missing_header() {
        let headers = HeaderMap::new();

        assert!(extract_host_from_headers(&headers).is_err());
    }
}
