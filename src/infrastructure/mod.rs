//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`persistence`] - PostgreSQL repository implementations and pool setup
//! - [`upstream`] - HTTP client used to forward redirects

pub mod persistence;
pub mod upstream;
