//! Application layer services.
//!
//! Services take their store dependencies at construction as trait objects
//! and expose the operations HTTP handlers and the admin CLI call.
//!
//! # Available Services
//!
//! - [`services::resolver::Resolver`] - Short code to live destination
//! - [`services::redirector::Redirector`] - Forwarding plus usage recording
//! - [`services::analytics_service::AnalyticsService`] - Windowed usage counts
//! - [`services::link_service::LinkService`] - Tenant-scoped link administration

pub mod services;
