//! Navigation collaborators.
//!
//! # Data Flow
//! ```text
//! Route action
//!     → RootPresenter (looked up through a weak handle at dispatch time)
//!     → ReaderCoordinator (optional; absent until the Reader is set up)
//!     → screen-specific call with typed arguments
//! ```
//!
//! # Design Decisions
//! - The router never owns the presenter; a dropped presenter means no-op
//! - Every side effect has a `Navigation` value, so it can be logged,
//!   recorded in tests, and printed by the CLI

pub mod recording;

use std::fmt;
use std::sync::Arc;

use serde::Serialize;

pub use recording::{RecordingCoordinator, RecordingPresenter};

/// The application's root presenter.
pub trait RootPresenter: Send + Sync {
    /// Show the Reader tab without any Reader navigation. Used when Reader
    /// features are switched off.
    fn show_static_reader_tab(&self);

    /// The Reader coordinator, if the Reader has been set up.
    fn reader_coordinator(&self) -> Option<Arc<dyn ReaderCoordinator>>;
}

/// Screen-level entry points of the Reader.
pub trait ReaderCoordinator: Send + Sync {
    fn show_reader_tab(&self);
    fn show_discover(&self);
    fn show_search(&self);
    fn show_a8c(&self);
    fn show_p2(&self);
    fn show_my_likes(&self);
    fn show_manage_following(&self);
    fn show_list(&self, named: &str, for_user: &str);
    fn show_tag(&self, named: &str);
    /// Show the stream of a feed (`is_feed`) or a blog.
    fn show_stream(&self, site_id: i64, is_feed: bool);
    /// Show a post of a feed (`is_feed`) or a blog.
    fn show_post(&self, post_id: i64, site_id: i64, is_feed: bool);
    fn show_post_url(&self, url: &str);
}

/// A single navigation side effect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "screen", rename_all = "snake_case")]
pub enum Navigation {
    StaticReaderTab,
    ReaderTab,
    Discover,
    Search,
    A8c,
    P2,
    MyLikes,
    ManageFollowing,
    List { name: String, user: String },
    Tag { name: String },
    Stream { site_id: i64, is_feed: bool },
    Post { post_id: i64, site_id: i64, is_feed: bool },
    PostUrl { url: String },
}

impl Navigation {
    /// Perform this navigation on a Reader coordinator.
    ///
    /// `StaticReaderTab` belongs to the root presenter and is ignored here.
    pub fn apply(&self, coordinator: &dyn ReaderCoordinator) {
        match self {
            Navigation::StaticReaderTab => {}
            Navigation::ReaderTab => coordinator.show_reader_tab(),
            Navigation::Discover => coordinator.show_discover(),
            Navigation::Search => coordinator.show_search(),
            Navigation::A8c => coordinator.show_a8c(),
            Navigation::P2 => coordinator.show_p2(),
            Navigation::MyLikes => coordinator.show_my_likes(),
            Navigation::ManageFollowing => coordinator.show_manage_following(),
            Navigation::List { name, user } => coordinator.show_list(name, user),
            Navigation::Tag { name } => coordinator.show_tag(name),
            Navigation::Stream { site_id, is_feed } => coordinator.show_stream(*site_id, *is_feed),
            Navigation::Post { post_id, site_id, is_feed } => {
                coordinator.show_post(*post_id, *site_id, *is_feed)
            }
            Navigation::PostUrl { url } => coordinator.show_post_url(url),
        }
    }
}

/// Where an inbound link came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkSource {
    /// Delivered by the system as a universal link.
    UniversalLink,
    Notification,
    Widget,
    /// Opened from a screen inside the app.
    Screen(String),
}

impl LinkSource {
    pub fn name(&self) -> &str {
        match self {
            LinkSource::UniversalLink => "universal_link",
            LinkSource::Notification => "notification",
            LinkSource::Widget => "widget",
            LinkSource::Screen(name) => name,
        }
    }

    /// Fixed-set label for metrics; every screen shares one value.
    pub fn label(&self) -> &'static str {
        match self {
            LinkSource::UniversalLink => "universal_link",
            LinkSource::Notification => "notification",
            LinkSource::Widget => "widget",
            LinkSource::Screen(_) => "screen",
        }
    }
}

impl fmt::Display for LinkSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
