//! `reqwest`-backed forwarder.

use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::Response;
use reqwest::Client;
use reqwest::redirect::Policy;

use crate::domain::forwarder::{ForwardError, ForwardRequest, Forwarder};
use crate::utils::hop_by_hop::strip_hop_by_hop;

/// Forwards requests with a shared `reqwest` client.
///
/// The client never follows redirects (the destination's 3xx goes back to the
/// caller as-is) and does not decompress bodies. `timeout` bounds connecting
/// and waiting for the response head; a body that is still streaming is not
/// cut off.
#[derive(Clone)]
pub struct ReqwestForwarder {
    client: Client,
    timeout: Duration,
}

impl ReqwestForwarder {
    /// Builds a forwarder that gives up when no response head arrives within
    /// `timeout`.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialised.
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .redirect(Policy::none())
            .connect_timeout(timeout)
            .build()?;

        Ok(Self { client, timeout })
    }

    fn timed_out(&self) -> ForwardError {
        ForwardError::Timeout(format!("no response within {:?}", self.timeout))
    }
}

#[async_trait]
impl Forwarder for ReqwestForwarder {
    async fn forward(&self, request: ForwardRequest) -> Result<Response<Body>, ForwardError> {
        let send = self
            .client
            .request(request.method, request.url)
            .headers(request.headers)
            .body(request.body)
            .send();

        let upstream = tokio::time::timeout(self.timeout, send)
            .await
            .map_err(|_| self.timed_out())?
            .map_err(|e| {
                if e.is_timeout() {
                    self.timed_out()
                } else {
                    ForwardError::Unreachable(e.to_string())
                }
            })?;

        let status = upstream.status();
        let mut headers = upstream.headers().clone();
        strip_hop_by_hop(&mut headers);

        let mut response = Response::new(Body::from_stream(upstream.bytes_stream()));
        *response.status_mut() = status;
        *response.headers_mut() = headers;

        Ok(response)
    }
}
