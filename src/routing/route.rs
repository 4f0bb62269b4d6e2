//! Route and action contracts.

use std::fmt;

use serde::Serialize;

use crate::navigation::LinkSource;
use crate::routing::router::LinkRouter;
use crate::routing::values::MatchedValues;

/// Logical area of the app a route belongs to.
///
/// Only the Reader ships routes here; other sections register their own
/// route enums against the same router.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeepLinkSection {
    Reader,
    MySite,
    Notifications,
    Stats,
    Me,
}

impl DeepLinkSection {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeepLinkSection::Reader => "reader",
            DeepLinkSection::MySite => "my_site",
            DeepLinkSection::Notifications => "notifications",
            DeepLinkSection::Stats => "stats",
            DeepLinkSection::Me => "me",
        }
    }
}

impl fmt::Display for DeepLinkSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The behavior bound to a route.
///
/// Actions validate the values they need themselves; a value that does not
/// parse means the action does nothing. Actions never fail the dispatch.
pub trait NavigationAction: Send + Sync {
    fn perform(&self, values: &MatchedValues, source: Option<&LinkSource>, router: &LinkRouter);
}

/// A registered deep link.
pub trait Route: Send + Sync + fmt::Debug {
    /// Stable name used in logs and counters.
    fn name(&self) -> &str;

    /// Path template, e.g. `/read/feeds/:feed_id`.
    fn path(&self) -> &str;

    fn section(&self) -> Option<DeepLinkSection>;

    fn action(&self) -> &dyn NavigationAction;

    /// Whether the route only makes sense in the Jetpack-powered app.
    fn jetpack_powered(&self) -> bool {
        false
    }
}
