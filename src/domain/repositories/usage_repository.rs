//! UsageLedger contract.

use crate::domain::entities::UsageEvent;
use crate::domain::window::LookbackWindow;
use crate::error::AppError;
use async_trait::async_trait;

/// Append-only log of redirect events keyed by short code.
///
/// Events carry no tenant: codes are counted as seen on the public redirect
/// path, so a code shared by two tenants shares one tally.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUsageRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_usage.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsageRepository: Send + Sync {
    /// Appends one event for `code`, stamped with the store's current time.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] on database errors.
    async fn append(&self, code: &str) -> Result<UsageEvent, AppError>;

    /// Counts events for `code` inside `window`, measured from the store's
    /// current time.
    ///
    /// A code with no events counts as zero; this does not check that the code
    /// exists.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] on database errors.
    async fn count(&self, code: &str, window: LookbackWindow) -> Result<i64, AppError>;
}
