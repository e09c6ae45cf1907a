//! Usage event entity.

use chrono::{DateTime, Utc};

/// A single dispatched redirect for a short code.
///
/// `id` is a monotonic surrogate key; `occurred_at` comes from the datastore
/// clock and is not guaranteed to be ordered across concurrent writers.
#[derive(Debug, Clone, PartialEq)]
pub struct UsageEvent {
    pub id: i64,
    pub code: String,
    pub occurred_at: DateTime<Utc>,
}

impl UsageEvent {
    pub fn new(id: i64, code: String, occurred_at: DateTime<Utc>) -> Self {
        Self {
            id,
            code,
            occurred_at,
        }
    }
}
