//! Data Transfer Objects for API requests and responses.
//!
//! DTOs handle serialization/deserialization and validation at the API boundary,
//! separate from domain entities.

pub mod health;
pub mod short_url;
