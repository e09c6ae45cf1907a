//! Outbound HTTP used by the redirector.
//!
//! - [`ReqwestForwarder`] - [`crate::domain::forwarder::Forwarder`] backed by `reqwest`

pub mod reqwest_forwarder;

pub use reqwest_forwarder::ReqwestForwarder;
