//! Core domain entities.
//!
//! - [`ShortLink`] - A tenant-owned code pointing at a destination URL
//! - [`UsageEvent`] - One dispatched redirect for a code
//!
//! Creation inputs use separate structs (`NewShortLink`) since identifiers and
//! timestamps are assigned by the datastore.

pub mod short_link;
pub mod usage_event;

pub use short_link::{NewShortLink, ShortLink};
pub use usage_event::UsageEvent;
