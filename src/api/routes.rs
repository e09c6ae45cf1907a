//! Admin API route configuration.
//!
//! Tenant identity comes from the `X-SUBJECT` header set by a trusted
//! upstream; no credentials are checked here.

use crate::api::handlers::{
    analytics_handler, create_named_short_url_handler, create_short_url_handler,
    delete_short_url_handler, list_short_urls_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Admin routes, nested under `/v1/admin`.
///
/// # Endpoints
///
/// - `POST   /short-urls`                          - Create with a random code
/// - `GET    /short-urls`                          - List the tenant's codes
/// - `POST   /short-urls/{code}`                   - Create with a chosen code
/// - `DELETE /short-urls/{code}`                   - Delete a link
/// - `GET    /short-urls/{code}/analytics/{window}` - Usage count (`all`, `24h`, `7d`)
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/short-urls",
            post(create_short_url_handler).get(list_short_urls_handler),
        )
        .route(
            "/short-urls/{code}",
            post(create_named_short_url_handler).delete(delete_short_url_handler),
        )
        .route(
            "/short-urls/{code}/analytics/{window}",
            get(analytics_handler),
        )
}
