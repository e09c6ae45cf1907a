//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod analytics;
pub mod health;
pub mod links;
pub mod redirect;

pub use analytics::analytics_handler;
pub use health::health_handler;
pub use links::{
    create_named_short_url_handler, create_short_url_handler, delete_short_url_handler,
    list_short_urls_handler,
};
pub use redirect::redirect_handler;
