//! Store contracts for the domain layer.
//!
//! These traits abstract the two durable stores the service relies on. They
//! are implemented by the PostgreSQL repositories in
//! `crate::infrastructure::persistence` and mocked via `mockall` in unit tests.
//!
//! # Available Repositories
//!
//! - [`LinkRepository`] - The LinkStore: `(tenant, code)` to destination
//! - [`UsageRepository`] - The UsageLedger: append-only redirect events
//!
//! # Testing
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod link_repository;
pub mod usage_repository;

pub use link_repository::LinkRepository;
pub use usage_repository::UsageRepository;

#[cfg(test)]
pub use link_repository::MockLinkRepository;
#[cfg(test)]
pub use usage_repository::MockUsageRepository;
