//! Redirect forwarding with usage recording.

use std::sync::Arc;

use axum::body::{Body, to_bytes};
use axum::extract::Request;
use axum::http::request::Parts;
use axum::http::{HeaderName, HeaderValue, Response, header};
use bytes::Bytes;
use serde_json::json;
use tracing::{debug, warn};
use url::Url;

use crate::application::services::Resolver;
use crate::domain::forwarder::{ForwardRequest, Forwarder};
use crate::domain::usage_recorder::UsageRecorder;
use crate::error::AppError;
use crate::utils::hop_by_hop::strip_hop_by_hop;

const X_FORWARDED_HOST: HeaderName = HeaderName::from_static("x-forwarded-host");

/// Forwards an inbound request to the destination of a short code.
///
/// # Request Flow
///
/// 1. Resolve the code; a miss ends here with [`AppError::NotFound`] and
///    nothing is recorded
/// 2. Rewrite the request onto the destination (see [`build_forward_request`])
/// 3. Forward it and hand the upstream response back with its body streaming
/// 4. Dispatch a usage append, whether or not the destination answered
///
/// Step 4 runs detached, so its outcome never changes the response.
pub struct Redirector {
    resolver: Arc<Resolver>,
    forwarder: Arc<dyn Forwarder>,
    recorder: UsageRecorder,
    max_body_bytes: usize,
}

impl Redirector {
    pub fn new(
        resolver: Arc<Resolver>,
        forwarder: Arc<dyn Forwarder>,
        recorder: UsageRecorder,
        max_body_bytes: usize,
    ) -> Self {
        Self {
            resolver,
            forwarder,
            recorder,
            max_body_bytes,
        }
    }

    /// Redirects `request` for the normalized `code`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code does not resolve.
    /// Returns [`AppError::Validation`] if the inbound body exceeds the limit.
    /// Returns [`AppError::UpstreamUnreachable`] or [`AppError::UpstreamTimeout`]
    /// if the destination could not be reached; usage is still recorded.
    /// Returns [`AppError::Persistence`] if the lookup failed.
    pub async fn redirect(&self, code: &str, request: Request) -> Result<Response<Body>, AppError> {
        let destination = match self.resolver.resolve(code).await {
            Ok(destination) => destination,
            Err(e) => {
                if matches!(e, AppError::NotFound { .. }) {
                    metrics::counter!("redirects_total", "outcome" => "not_found").increment(1);
                }
                return Err(e);
            }
        };

        let (parts, body) = request.into_parts();
        let body = to_bytes(body, self.max_body_bytes).await.map_err(|e| {
            AppError::bad_request(
                "Request body too large",
                json!({ "limit": self.max_body_bytes, "reason": e.to_string() }),
            )
        })?;

        let outbound = build_forward_request(&destination, parts, body);
        debug!(code, target = %outbound.url, method = %outbound.method, "Forwarding request");

        let outcome = self.forwarder.forward(outbound).await;

        self.recorder.dispatch(code.to_string());

        match &outcome {
            Ok(response) => {
                metrics::counter!("redirects_total", "outcome" => "forwarded").increment(1);
                debug!(code, status = %response.status(), "Upstream responded");
            }
            Err(e) => {
                metrics::counter!("redirects_total", "outcome" => "upstream_error").increment(1);
                warn!(code, destination = %destination, error = %e, "Forward failed");
            }
        }

        outcome.map_err(AppError::from)
    }
}

/// Rewrites inbound request parts onto `destination`.
///
/// - Scheme, host, port and path come from the destination; the inbound path
///   (`/s/{code}`) is dropped
/// - The inbound query string is appended to the destination's own query
/// - Method, end-to-end headers and body are kept; `Host` is replaced by the
///   destination host and recorded in `X-Forwarded-Host`
///
/// A destination with an empty path is sent as `/`, because the URL parser
/// normalizes an empty http(s) path that way. Destinations that distinguish
/// `https://host` from `https://host/` cannot be forwarded exactly.
pub fn build_forward_request(destination: &Url, parts: Parts, body: Bytes) -> ForwardRequest {
    let mut url = destination.clone();

    if let Some(inbound_query) = parts.uri.query().filter(|q| !q.is_empty()) {
        let merged = match url.query() {
            Some(existing) if !existing.is_empty() => format!("{existing}&{inbound_query}"),
            _ => inbound_query.to_string(),
        };
        url.set_query(Some(&merged));
    }

    let mut headers = parts.headers;
    let inbound_host = headers.remove(header::HOST).or_else(|| {
        parts
            .uri
            .authority()
            .and_then(|a| HeaderValue::from_str(a.as_str()).ok())
    });
    strip_hop_by_hop(&mut headers);

    if let Some(host) = inbound_host {
        headers.insert(X_FORWARDED_HOST, host);
    }

    ForwardRequest {
        method: parts.method,
        url,
        headers,
        body,
    }
}
