//! DTOs for the short URL admin endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body of both create endpoints.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateShortUrlRequest {
    /// Destination, an absolute HTTP/HTTPS URL.
    #[validate(url(message = "Invalid URL format"))]
    pub url: String,

    /// Optional expiry. Once passed, the code stops resolving.
    #[serde(rename = "expireAt")]
    pub expire_at: Option<DateTime<Utc>>,
}

/// Code assigned to a newly created link.
#[derive(Debug, Serialize)]
pub struct ShortUrlResponse {
    #[serde(rename = "shortUrl")]
    pub short_url: String,
}

/// Codes owned by the requesting tenant.
#[derive(Debug, Serialize)]
pub struct ListShortUrlsResponse {
    pub urls: Vec<String>,
}
