//! Domain layer: entities, store contracts, and the usage-recording side effect.
//!
//! Nothing in here knows about PostgreSQL or reqwest. Concrete implementations
//! of the traits live in [`crate::infrastructure`].
//!
//! # Architecture
//!
//! - [`entities`] - Short links and usage events
//! - [`repositories`] - LinkStore and UsageLedger contracts
//! - [`window`] - Closed set of analytics lookback windows
//! - [`forwarder`] - Contract for sending a rewritten request upstream
//! - [`usage_recorder`] - Detached, best-effort usage appends
//!
//! # Redirect Flow
//!
//! 1. The redirect handler resolves the code through the LinkStore
//! 2. The rewritten request goes out through a [`forwarder::Forwarder`]
//! 3. [`usage_recorder::UsageRecorder`] appends a usage event in a detached task
//! 4. Analytics read the same events back through [`repositories::UsageRepository`]

pub mod entities;
pub mod forwarder;
pub mod repositories;
pub mod usage_recorder;
pub mod window;
