//! Reader route table.

use serde::Serialize;

use crate::routing::route::{DeepLinkSection, NavigationAction, Route};

/// Every Reader deep link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReaderRoute {
    Root,
    Discover,
    Search,
    A8c,
    P2,
    Likes,
    ManageFollowing,
    List,
    Tag,
    Feed,
    Blog,
    FeedsPost,
    BlogsPost,
    WpcomPost,
}

impl ReaderRoute {
    /// All routes in registration order.
    pub const ALL: [ReaderRoute; 14] = [
        ReaderRoute::Root,
        ReaderRoute::Discover,
        ReaderRoute::Search,
        ReaderRoute::A8c,
        ReaderRoute::P2,
        ReaderRoute::Likes,
        ReaderRoute::ManageFollowing,
        ReaderRoute::List,
        ReaderRoute::Tag,
        ReaderRoute::Feed,
        ReaderRoute::Blog,
        ReaderRoute::FeedsPost,
        ReaderRoute::BlogsPost,
        ReaderRoute::WpcomPost,
    ];

    pub fn template(&self) -> &'static str {
        match self {
            ReaderRoute::Root => "/read",
            ReaderRoute::Discover => "/discover",
            ReaderRoute::Search => "/read/search",
            ReaderRoute::A8c => "/read/a8c",
            ReaderRoute::P2 => "/read/p2",
            ReaderRoute::Likes => "/activities/likes",
            ReaderRoute::ManageFollowing => "/following/manage",
            ReaderRoute::List => "/read/list/:username/:list_name",
            ReaderRoute::Tag => "/tag/:tag_name",
            ReaderRoute::Feed => "/read/feeds/:feed_id",
            ReaderRoute::Blog => "/read/blogs/:blog_id",
            ReaderRoute::FeedsPost => "/read/feeds/:feed_id/posts/:post_id",
            ReaderRoute::BlogsPost => "/read/blogs/:blog_id/posts/:post_id",
            ReaderRoute::WpcomPost => "/:post_year/:post_month/:post_day/:post_name",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ReaderRoute::Root => "reader_root",
            ReaderRoute::Discover => "reader_discover",
            ReaderRoute::Search => "reader_search",
            ReaderRoute::A8c => "reader_a8c",
            ReaderRoute::P2 => "reader_p2",
            ReaderRoute::Likes => "reader_likes",
            ReaderRoute::ManageFollowing => "reader_manage_following",
            ReaderRoute::List => "reader_list",
            ReaderRoute::Tag => "reader_tag",
            ReaderRoute::Feed => "reader_feed",
            ReaderRoute::Blog => "reader_blog",
            ReaderRoute::FeedsPost => "reader_feeds_post",
            ReaderRoute::BlogsPost => "reader_blogs_post",
            ReaderRoute::WpcomPost => "reader_wpcom_post",
        }
    }
}

impl Route for ReaderRoute {
    fn name(&self) -> &str {
        self.as_str()
    }

    fn path(&self) -> &str {
        self.template()
    }

    fn section(&self) -> Option<DeepLinkSection> {
        Some(DeepLinkSection::Reader)
    }

    fn action(&self) -> &dyn NavigationAction {
        self
    }

    fn jetpack_powered(&self) -> bool {
        true
    }
}
