//! Business logic services for the application layer.

pub mod analytics_service;
pub mod link_service;
pub mod redirector;
pub mod resolver;

pub use analytics_service::AnalyticsService;
pub use link_service::LinkService;
pub use redirector::Redirector;
pub use resolver::Resolver;
