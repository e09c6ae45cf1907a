//! Contract for sending a rewritten request to its destination.

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{HeaderMap, Method, Response};
use bytes::Bytes;
use thiserror::Error;
use url::Url;

/// A request already rewritten to target the resolved destination.
#[derive(Debug, Clone)]
pub struct ForwardRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: Bytes,
}

/// Failure to obtain a response from the destination.
///
/// A destination that answers with any status, including 4xx/5xx, is not a
/// forward failure.
#[derive(Debug, Error)]
pub enum ForwardError {
    #[error("destination did not respond in time: {0}")]
    Timeout(String),

    #[error("destination unreachable: {0}")]
    Unreachable(String),
}

/// Sends a [`ForwardRequest`] and returns the upstream response with its body
/// still streaming.
///
/// # Implementations
///
/// - [`crate::infrastructure::upstream::ReqwestForwarder`] - HTTP client backed
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Forwarder: Send + Sync {
    async fn forward(&self, request: ForwardRequest) -> Result<Response<Body>, ForwardError>;
}
