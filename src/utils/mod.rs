//! Helpers shared across layers.
//!
//! - [`code_generator`] - Short code generation, validation and normalization
//! - [`url_normalizer`] - Destination URL normalization
//! - [`extract_tenant`] - Tenant extraction from the `X-SUBJECT` header
//! - [`hop_by_hop`] - Connection-scoped header filtering for forwarding

pub mod code_generator;
pub mod extract_tenant;
pub mod hop_by_hop;
pub mod url_normalizer;
