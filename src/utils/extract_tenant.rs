//! Tenant extraction from the trusted `X-SUBJECT` header.
//!
//! Identity is established upstream; this service only reads the header and
//! never verifies it.

use crate::AppError;
use axum::extract::FromRequestParts;
use axum::http::HeaderMap;
use axum::http::request::Parts;
use serde_json::json;

/// Header carrying the already-authenticated tenant.
pub const TENANT_HEADER: &str = "x-subject";

/// The tenant owning the links touched by an admin request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tenant(pub String);

/// Reads the tenant from `X-SUBJECT`.
///
/// Surrounding whitespace is trimmed.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if the header is missing, empty, or not
/// valid UTF-8.
pub fn extract_tenant_from_headers(headers: &HeaderMap) -> Result<String, AppError> {
    let tenant = headers
        .get(TENANT_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| {
            AppError::bad_request(
                "Missing required header: X-SUBJECT",
                json!({ "header": "X-SUBJECT" }),
            )
        })?;

    Ok(tenant.to_string())
}

impl<S> FromRequestParts<S> for Tenant
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        extract_tenant_from_headers(&parts.headers).map(Tenant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_extract_tenant() {
        let mut headers = HeaderMap::new();
        headers.insert(TENANT_HEADER, HeaderValue::from_static("team-a"));

        assert_eq!(extract_tenant_from_headers(&headers).unwrap(), "team-a");
    }

    #[test]
    fn test_extract_tenant_trims() {
        let mut headers = HeaderMap::new();
        headers.insert(TENANT_HEADER, HeaderValue::from_static("  team-a "));

        assert_eq!(extract_tenant_from_headers(&headers).unwrap(), "team-a");
    }

    #[test]
    fn test_missing_tenant() {
        let headers = HeaderMap::new();

        let err = extract_tenant_from_headers(&headers).unwrap_err();
        assert!(err.to_string().contains("X-SUBJECT"));
    }

    #[test]
    fn test_empty_tenant() {
        let mut headers = HeaderMap::new();
        headers.insert(TENANT_HEADER, HeaderValue::from_static("   "));

        assert!(matches!(
            extract_tenant_from_headers(&headers),
            Err(AppError::Validation { .. })
        ));
    }
}
