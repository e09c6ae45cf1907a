//! Handler for short URL forwarding.

use axum::{
    extract::{Path, Request, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::code_generator::normalize_code;

/// Forwards the request to the destination behind a short code.
///
/// # Endpoint
///
/// `ANY /s/{code}`
///
/// # Request Flow
///
/// 1. Lowercase the code
/// 2. Resolve it against active links
/// 3. Forward method, headers and body to the destination, appending the
///    inbound query string
/// 4. Stream the upstream response back as-is
/// 5. Record one usage event in the background
///
/// # Response Codes
///
/// - Whatever the destination answered, including its redirects
/// - **404 Not Found**: unknown or expired code, with an empty body
/// - **502 Bad Gateway**: destination unreachable
/// - **504 Gateway Timeout**: destination too slow
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
    request: Request,
) -> Response {
    let code = normalize_code(&code);

    match state.redirector.redirect(&code, request).await {
        Ok(response) => response,
        Err(AppError::NotFound { .. }) => StatusCode::NOT_FOUND.into_response(),
        Err(e) => e.into_response(),
    }
}
