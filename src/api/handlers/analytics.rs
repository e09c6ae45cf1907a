//! Handler for per-code usage analytics.

use axum::{
    extract::{Path, State},
    http::header,
    response::IntoResponse,
};

use crate::application::services::AnalyticsService;
use crate::domain::window::LookbackWindow;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::code_generator::normalize_code;

/// Reports how often a code was redirected within a window.
///
/// # Endpoint
///
/// `GET /v1/admin/short-urls/{code}/analytics/{window}`
///
/// `window` is one of `all`, `24h`, `7d`. Codes that never existed report zero.
///
/// # Response
///
/// Plain text, one line:
///
/// ```text
/// abc123 has been called 7 times in 7 DAYS
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request (`invalid_window`) for any other window.
/// Returns 500 Internal Server Error if the ledger cannot be queried.
pub async fn analytics_handler(
    Path((code, window)): Path<(String, String)>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let code = normalize_code(&code);
    let window: LookbackWindow = window.parse()?;

    let count = state.analytics.count(&code, window).await?;

    Ok((
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        AnalyticsService::summary_line(&code, window, count),
    ))
}
