//! Presenter and coordinator that record navigations instead of showing
//! screens. Used by the CLI and by tests.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::navigation::{Navigation, ReaderCoordinator, RootPresenter};

/// A Reader coordinator that appends every call to a journal.
#[derive(Debug, Default)]
pub struct RecordingCoordinator {
    journal: Mutex<Vec<Navigation>>,
}

impl RecordingCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Navigations recorded so far, oldest first.
    pub fn navigations(&self) -> Vec<Navigation> {
        self.lock().clone()
    }

    /// Remove and return everything recorded so far.
    pub fn take(&self) -> Vec<Navigation> {
        std::mem::take(&mut *self.lock())
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub(crate) fn record(&self, navigation: Navigation) {
        tracing::debug!(?navigation, "Navigation recorded");
        self.lock().push(navigation);
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Navigation>> {
        self.journal.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ReaderCoordinator for RecordingCoordinator {
    fn show_reader_tab(&self) {
        self.record(Navigation::ReaderTab);
    }

    fn show_discover(&self) {
        self.record(Navigation::Discover);
    }

    fn show_search(&self) {
        self.record(Navigation::Search);
    }

    fn show_a8c(&self) {
        self.record(Navigation::A8c);
    }

    fn show_p2(&self) {
        self.record(Navigation::P2);
    }

    fn show_my_likes(&self) {
        self.record(Navigation::MyLikes);
    }

    fn show_manage_following(&self) {
        self.record(Navigation::ManageFollowing);
    }

    fn show_list(&self, named: &str, for_user: &str) {
        self.record(Navigation::List {
            name: named.to_string(),
            user: for_user.to_string(),
        });
    }

    fn show_tag(&self, named: &str) {
        self.record(Navigation::Tag { name: named.to_string() });
    }

    fn show_stream(&self, site_id: i64, is_feed: bool) {
        self.record(Navigation::Stream { site_id, is_feed });
    }

    fn show_post(&self, post_id: i64, site_id: i64, is_feed: bool) {
        self.record(Navigation::Post { post_id, site_id, is_feed });
    }

    fn show_post_url(&self, url: &str) {
        self.record(Navigation::PostUrl { url: url.to_string() });
    }
}

/// A root presenter backed by a [`RecordingCoordinator`].
///
/// The static reader tab is recorded into the same journal so that a test
/// sees every side effect in order.
#[derive(Debug)]
pub struct RecordingPresenter {
    coordinator: Arc<RecordingCoordinator>,
    coordinator_attached: bool,
}

impl RecordingPresenter {
    /// A presenter whose Reader coordinator is available.
    pub fn new() -> Self {
        Self {
            coordinator: Arc::new(RecordingCoordinator::new()),
            coordinator_attached: true,
        }
    }

    /// A presenter that reports no Reader coordinator.
    pub fn without_coordinator() -> Self {
        Self {
            coordinator_attached: false,
            ..Self::new()
        }
    }

    /// The journal shared by the presenter and its coordinator.
    pub fn journal(&self) -> &RecordingCoordinator {
        &self.coordinator
    }
}

impl Default for RecordingPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl RootPresenter for RecordingPresenter {
    fn show_static_reader_tab(&self) {
        self.coordinator.record(Navigation::StaticReaderTab);
    }

    fn reader_coordinator(&self) -> Option<Arc<dyn ReaderCoordinator>> {
        if self.coordinator_attached {
            Some(self.coordinator.clone() as Arc<dyn ReaderCoordinator>)
        } else {
            None
        }
    }
}
