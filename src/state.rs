//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{AnalyticsService, LinkService, Redirector, Resolver};
use crate::domain::forwarder::Forwarder;
use crate::domain::repositories::{LinkRepository, UsageRepository};
use crate::domain::usage_recorder::UsageRecorder;

/// Services wired over one LinkStore, one UsageLedger and one Forwarder.
///
/// Cloning is cheap: every field is reference-counted.
#[derive(Clone)]
pub struct AppState {
    pub redirector: Arc<Redirector>,
    pub analytics: Arc<AnalyticsService>,
    pub link_service: Arc<LinkService>,
}

impl AppState {
    pub fn new(
        links: Arc<dyn LinkRepository>,
        ledger: Arc<dyn UsageRepository>,
        forwarder: Arc<dyn Forwarder>,
        max_forward_body_bytes: usize,
    ) -> Self {
        let resolver = Arc::new(Resolver::new(links.clone()));
        let recorder = UsageRecorder::new(ledger.clone());

        Self {
            redirector: Arc::new(Redirector::new(
                resolver,
                forwarder,
                recorder,
                max_forward_body_bytes,
            )),
            analytics: Arc::new(AnalyticsService::new(ledger)),
            link_service: Arc::new(LinkService::new(links)),
        }
    }
}
