//! Handlers for tenant-scoped link management (create, list, delete).

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::short_url::{CreateShortUrlRequest, ListShortUrlsResponse, ShortUrlResponse};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::extract_tenant::Tenant;

/// Creates a link under a random code.
///
/// # Endpoint
///
/// `POST /v1/admin/short-urls`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://example.org",
///   "expireAt": "2030-01-01T00:00:00Z"  // optional
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if `X-SUBJECT` is missing or validation fails.
pub async fn create_short_url_handler(
    State(state): State<AppState>,
    Tenant(tenant): Tenant,
    Json(payload): Json<CreateShortUrlRequest>,
) -> Result<Json<ShortUrlResponse>, AppError> {
    payload.validate()?;

    let link = state
        .link_service
        .create_short_link(&tenant, &payload.url, None, payload.expire_at)
        .await?;

    Ok(Json(ShortUrlResponse {
        short_url: link.code,
    }))
}

/// Creates a link under a caller-chosen code.
///
/// # Endpoint
///
/// `POST /v1/admin/short-urls/{code}`
///
/// The code is lowercased and must be 3-32 letters or digits.
///
/// # Errors
///
/// Returns 400 Bad Request if the code, URL or `X-SUBJECT` is invalid.
/// Returns 409 Conflict if the tenant already owns the code.
pub async fn create_named_short_url_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
    Tenant(tenant): Tenant,
    Json(payload): Json<CreateShortUrlRequest>,
) -> Result<Json<ShortUrlResponse>, AppError> {
    payload.validate()?;

    let link = state
        .link_service
        .create_short_link(&tenant, &payload.url, Some(&code), payload.expire_at)
        .await?;

    Ok(Json(ShortUrlResponse {
        short_url: link.code,
    }))
}

/// Lists the tenant's codes.
///
/// # Endpoint
///
/// `GET /v1/admin/short-urls`
pub async fn list_short_urls_handler(
    State(state): State<AppState>,
    Tenant(tenant): Tenant,
) -> Result<Json<ListShortUrlsResponse>, AppError> {
    let urls = state.link_service.list_codes(&tenant).await?;

    Ok(Json(ListShortUrlsResponse { urls }))
}

/// Deletes one of the tenant's links.
///
/// # Endpoint
///
/// `DELETE /v1/admin/short-urls/{code}`
///
/// Recorded usage for the code is kept.
///
/// # Errors
///
/// Returns 404 Not Found if the tenant owns no such code.
pub async fn delete_short_url_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
    Tenant(tenant): Tenant,
) -> Result<StatusCode, AppError> {
    state
        .link_service
        .delete_short_link(&tenant, &code)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
