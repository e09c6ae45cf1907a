//! Short link entity.

use chrono::{DateTime, Utc};

/// A short code owned by a tenant and pointing at a destination URL.
///
/// Rows are never mutated in place. An expired link keeps its row but is
/// treated as nonexistent by resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortLink {
    pub id: i64,
    pub tenant: String,
    pub code: String,
    pub destination: String,
    pub expiry: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl ShortLink {
    pub fn new(
        id: i64,
        tenant: String,
        code: String,
        destination: String,
        expiry: Option<DateTime<Utc>>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            tenant,
            code,
            destination,
            expiry,
            created_at,
        }
    }

    /// Whether the link is active at `now`.
    ///
    /// Expiry is exclusive: a link whose expiry equals `now` is already expired.
    /// Stores that can compare against their own clock should do so instead.
    pub fn is_active_at(&self, now: DateTime<Utc>) -> bool {
        self.expiry.is_none_or(|expiry| expiry > now)
    }
}

/// Input for creating a short link.
#[derive(Debug, Clone, PartialEq)]
pub struct NewShortLink {
    pub tenant: String,
    pub code: String,
    pub destination: String,
    pub expiry: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn link_with_expiry(expiry: Option<DateTime<Utc>>) -> ShortLink {
        ShortLink::new(
            1,
            "team-a".to_string(),
            "abc123".to_string(),
            "https://example.org".to_string(),
            expiry,
            Utc::now(),
        )
    }

    #[test]
    fn test_link_without_expiry_is_active() {
        assert!(link_with_expiry(None).is_active_at(Utc::now()));
    }

    #[test]
    fn test_link_with_future_expiry_is_active() {
        let now = Utc::now();
        assert!(link_with_expiry(Some(now + Duration::hours(1))).is_active_at(now));
    }

    #[test]
    fn test_link_expiring_now_is_not_active() {
        let now = Utc::now();
        assert!(!link_with_expiry(Some(now)).is_active_at(now));
        assert!(!link_with_expiry(Some(now - Duration::seconds(1))).is_active_at(now));
    }
}
