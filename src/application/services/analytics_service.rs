//! Usage analytics over lookback windows.

use std::sync::Arc;

use crate::domain::repositories::UsageRepository;
use crate::domain::window::LookbackWindow;
use crate::error::AppError;

/// Counts recorded redirects for a code within a [`LookbackWindow`].
///
/// Existence of the code is not checked here: an unknown code simply has no
/// events and counts as zero.
pub struct AnalyticsService {
    ledger: Arc<dyn UsageRepository>,
}

impl AnalyticsService {
    pub fn new(ledger: Arc<dyn UsageRepository>) -> Self {
        Self { ledger }
    }

    /// Returns how many times `code` was redirected inside `window`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] on database errors, never for a zero
    /// count.
    pub async fn count(&self, code: &str, window: LookbackWindow) -> Result<i64, AppError> {
        self.ledger.count(code, window).await
    }

    /// Renders the plain-text analytics line for a count.
    pub fn summary_line(code: &str, window: LookbackWindow, count: i64) -> String {
        format!("{code} has been called {count} times {}\n", window.phrase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockUsageRepository;
    use serde_json::json;

    #[tokio::test]
    async fn test_count_delegates_window() {
        let mut mock_ledger = MockUsageRepository::new();

        mock_ledger
            .expect_count()
            .withf(|code, window| code == "abc123" && *window == LookbackWindow::Last7Days)
            .times(1)
            .returning(|_, _| Ok(7));

        let service = AnalyticsService::new(Arc::new(mock_ledger));

        assert_eq!(service.count("abc123", LookbackWindow::Last7Days).await.unwrap(), 7);
    }

    #[tokio::test]
    async fn test_count_zero_is_not_an_error() {
        let mut mock_ledger = MockUsageRepository::new();

        mock_ledger.expect_count().returning(|_, _| Ok(0));

        let service = AnalyticsService::new(Arc::new(mock_ledger));

        assert_eq!(service.count("unknown", LookbackWindow::All).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_count_failure_is_distinct_from_zero() {
        let mut mock_ledger = MockUsageRepository::new();

        mock_ledger
            .expect_count()
            .returning(|_, _| Err(AppError::persistence("Database error", json!({}))));

        let service = AnalyticsService::new(Arc::new(mock_ledger));

        let result = service.count("abc123", LookbackWindow::All).await;
        assert!(matches!(result, Err(AppError::Persistence { .. })));
    }

    #[test]
    fn test_summary_lines() {
        assert_eq!(
            AnalyticsService::summary_line("abc123", LookbackWindow::All, 8),
            "abc123 has been called 8 times for all time\n"
        );
        assert_eq!(
            AnalyticsService::summary_line("abc123", LookbackWindow::Last24Hours, 1),
            "abc123 has been called 1 times in 24 HOURS\n"
        );
        assert_eq!(
            AnalyticsService::summary_line("abc123", LookbackWindow::Last7Days, 7),
            "abc123 has been called 7 times in 7 DAYS\n"
        );
    }
}
