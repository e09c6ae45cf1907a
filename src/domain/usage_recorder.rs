//! Best-effort usage recording after a forward has been dispatched.

use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{debug, error};

use crate::domain::repositories::UsageRepository;

/// Appends usage events in detached tasks.
///
/// Each dispatch spawns its own task, so dropping the request future (for
/// example when the client disconnects) does not cancel an append that was
/// already dispatched. Failures never reach the caller: they are logged at
/// `error` and counted in `usage_record_failures_total`.
#[derive(Clone)]
pub struct UsageRecorder {
    ledger: Arc<dyn UsageRepository>,
}

impl UsageRecorder {
    pub fn new(ledger: Arc<dyn UsageRepository>) -> Self {
        Self { ledger }
    }

    /// Dispatches an append for `code`.
    ///
    /// The returned handle resolves once the append finished or failed; callers
    /// on the request path drop it.
    pub fn dispatch(&self, code: String) -> JoinHandle<()> {
        let ledger = self.ledger.clone();

        tokio::spawn(async move {
            match ledger.append(&code).await {
                Ok(event) => {
                    metrics::counter!("usage_records_total").increment(1);
                    debug!(code = %event.code, id = event.id, "Usage recorded");
                }
                Err(e) => {
                    metrics::counter!("usage_record_failures_total").increment(1);
                    error!(code = %code, error = %e, "Failed to record usage");
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::UsageEvent;
    use crate::domain::repositories::MockUsageRepository;
    use crate::error::AppError;
    use chrono::Utc;
    use serde_json::json;

    #[tokio::test]
    async fn test_dispatch_appends_once() {
        let mut mock_ledger = MockUsageRepository::new();

        mock_ledger
            .expect_append()
            .withf(|code| code == "abc123")
            .times(1)
            .returning(|code| Ok(UsageEvent::new(1, code.to_string(), Utc::now())));

        let recorder = UsageRecorder::new(Arc::new(mock_ledger));

        recorder.dispatch("abc123".to_string()).await.unwrap();
    }

    #[tokio::test]
    async fn test_dispatch_swallows_append_failure() {
        let mut mock_ledger = MockUsageRepository::new();

        mock_ledger
            .expect_append()
            .times(1)
            .returning(|_| Err(AppError::persistence("Database error", json!({}))));

        let recorder = UsageRecorder::new(Arc::new(mock_ledger));

        let result = recorder.dispatch("abc123".to_string()).await;

        assert!(result.is_ok(), "append failure must not panic the task");
    }
}
