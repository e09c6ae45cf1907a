//! PostgreSQL repository implementations.
//!
//! Concrete implementations of the domain store traits using SQLx runtime
//! queries with bound parameters.
//!
//! # Repositories
//!
//! - [`PgLinkRepository`] - LinkStore
//! - [`PgUsageRepository`] - UsageLedger
//!
//! # Pool
//!
//! [`connect`] builds the shared, bounded [`sqlx::PgPool`] from [`crate::config::Config`].

pub mod pg_link_repository;
pub mod pg_usage_repository;
pub mod pool;

pub use pg_link_repository::PgLinkRepository;
pub use pg_usage_repository::PgUsageRepository;
pub use pool::connect;
