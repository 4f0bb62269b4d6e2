//! Shared helpers for integration tests.

use std::sync::Arc;

use reader_links::navigation::RecordingPresenter;
use reader_links::{LinkRouter, LinksConfig, ReaderRoute};

/// Default config with metrics switched off.
pub fn test_config() -> LinksConfig {
    let mut config = LinksConfig::default();
    config.observability.metrics_enabled = false;
    config
}

/// A Reader router wired to a fresh recording presenter.
///
/// The presenter must be kept alive for as long as the router is used.
pub fn reader_router(config: &LinksConfig) -> (LinkRouter, Arc<RecordingPresenter>) {
    reader_router_with(config, RecordingPresenter::new())
}

/// A Reader router wired to the given presenter.
pub fn reader_router_with(
    config: &LinksConfig,
    presenter: RecordingPresenter,
) -> (LinkRouter, Arc<RecordingPresenter>) {
    let presenter = Arc::new(presenter);
    let router = LinkRouter::builder(config)
        .routes(ReaderRoute::ALL)
        .presenter(&presenter)
        .build()
        .expect("reader routes compile");
    (router, presenter)
}
