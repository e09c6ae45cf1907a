//! Short code resolution.

use std::sync::Arc;

use serde_json::json;
use url::Url;

use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// Turns a short code into the destination of its active link.
///
/// Read-only: resolution never writes to either store.
pub struct Resolver {
    links: Arc<dyn LinkRepository>,
}

impl Resolver {
    pub fn new(links: Arc<dyn LinkRepository>) -> Self {
        Self { links }
    }

    /// Resolves `code` to its live destination.
    ///
    /// `code` must already be normalized by the caller. Expiry is checked by
    /// the store against its own clock.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code is absent or expired.
    /// Returns [`AppError::Persistence`] on database errors, or if the stored
    /// destination no longer parses as a URL.
    pub async fn resolve(&self, code: &str) -> Result<Url, AppError> {
        let destination = self
            .links
            .find_active_destination(code)
            .await?
            .ok_or_else(|| AppError::not_found("Short link not found", json!({ "code": code })))?;

        Url::parse(&destination).map_err(|e| {
            tracing::error!(code, destination = %destination, error = %e, "Stored destination is not a valid URL");
            AppError::persistence("Stored destination is invalid", json!({ "code": code }))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockLinkRepository;

    #[tokio::test]
    async fn test_resolve_active_link() {
        let mut mock_repo = MockLinkRepository::new();

        mock_repo
            .expect_find_active_destination()
            .withf(|code| code == "abc123")
            .times(1)
            .returning(|_| Ok(Some("https://example.org".to_string())));

        let resolver = Resolver::new(Arc::new(mock_repo));

        let url = resolver.resolve("abc123").await.unwrap();
        assert_eq!(url.as_str(), "https://example.org/");
        assert_eq!(url.host_str(), Some("example.org"));
    }

    #[tokio::test]
    async fn test_resolve_missing_or_expired_is_not_found() {
        let mut mock_repo = MockLinkRepository::new();

        mock_repo
            .expect_find_active_destination()
            .times(1)
            .returning(|_| Ok(None));

        let resolver = Resolver::new(Arc::new(mock_repo));

        let result = resolver.resolve("gone").await;
        assert!(matches!(result, Err(AppError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_resolve_propagates_persistence_failure() {
        let mut mock_repo = MockLinkRepository::new();

        mock_repo
            .expect_find_active_destination()
            .times(1)
            .returning(|_| Err(AppError::persistence("Database error", json!({}))));

        let resolver = Resolver::new(Arc::new(mock_repo));

        let result = resolver.resolve("abc123").await;
        assert!(matches!(result, Err(AppError::Persistence { .. })));
    }

    #[tokio::test]
    async fn test_resolve_rejects_corrupt_destination() {
        let mut mock_repo = MockLinkRepository::new();

        mock_repo
            .expect_find_active_destination()
            .returning(|_| Ok(Some("not a url".to_string())));

        let resolver = Resolver::new(Arc::new(mock_repo));

        let result = resolver.resolve("abc123").await;
        assert!(matches!(result, Err(AppError::Persistence { .. })));
    }
}
