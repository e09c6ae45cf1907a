//! LinkStore contract.

use crate::domain::entities::{NewShortLink, ShortLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Durable mapping from `(tenant, code)` to a destination and optional expiry.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_link.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Returns the destination of the active link for `code`.
    ///
    /// A link is active when it has no expiry or its expiry is strictly after
    /// the store's own clock. When several tenants own the same code the
    /// oldest active link wins.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(destination))` if an active link exists
    /// - `Ok(None)` if the code is absent or every matching row is expired
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] on database errors.
    async fn find_active_destination(&self, code: &str) -> Result<Option<String>, AppError>;

    /// Inserts a new short link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the tenant already owns `code`.
    /// Returns [`AppError::Persistence`] on database errors.
    async fn create(&self, new_link: NewShortLink) -> Result<ShortLink, AppError>;

    /// Whether any tenant owns `code`, expired or not.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] on database errors.
    async fn code_exists(&self, code: &str) -> Result<bool, AppError>;

    /// Lists the tenant's links, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] on database errors.
    async fn list_by_tenant(&self, tenant: &str) -> Result<Vec<ShortLink>, AppError>;

    /// Deletes the tenant's link for `code`.
    ///
    /// Returns `Ok(true)` if a row was removed, `Ok(false)` if the tenant owns
    /// no such code. Usage events for the code are not touched.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] on database errors.
    async fn delete(&self, tenant: &str, code: &str) -> Result<bool, AppError>;

    /// Round-trips a trivial statement to confirm the store is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] if the store cannot be reached.
    async fn ping(&self) -> Result<(), AppError>;
}
