//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `ANY  /s/{code}`    - Forward to the destination of a short code
//! - `GET  /health`      - Health check (database)
//! - `/v1/admin/*`       - Link administration and analytics
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::{any, get};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the routed application without path normalization.
///
/// Integration tests drive this directly.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/s/{code}", any(redirect_handler))
        .route("/health", get(health_handler))
        .nest("/v1/admin", api::routes::admin_routes())
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the served application: [`router`] with trailing slashes trimmed.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}
