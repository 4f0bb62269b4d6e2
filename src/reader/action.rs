//! Reader navigation actions.

use url::Url;

use crate::navigation::{LinkSource, Navigation};
use crate::reader::route::ReaderRoute;
use crate::reader::validation::{is_valid_wpcom_permalink, site_and_post_id};
use crate::routing::route::NavigationAction;
use crate::routing::router::LinkRouter;
use crate::routing::values::MatchedValues;

impl ReaderRoute {
    /// The navigation this route asks for, or `None` if the values do not
    /// pass the route's checks.
    pub fn navigation(&self, values: &MatchedValues) -> Option<Navigation> {
        match self {
            ReaderRoute::Root => Some(Navigation::ReaderTab),
            ReaderRoute::Discover => Some(Navigation::Discover),
            ReaderRoute::Search => Some(Navigation::Search),
            ReaderRoute::A8c => Some(Navigation::A8c),
            ReaderRoute::P2 => Some(Navigation::P2),
            ReaderRoute::Likes => Some(Navigation::MyLikes),
            ReaderRoute::ManageFollowing => Some(Navigation::ManageFollowing),
            ReaderRoute::List => {
                let user = values.get("username")?;
                let name = values.get("list_name")?;
                Some(Navigation::List {
                    name: name.to_string(),
                    user: user.to_string(),
                })
            }
            ReaderRoute::Tag => values.get("tag_name").map(|name| Navigation::Tag {
                name: name.to_string(),
            }),
            ReaderRoute::Feed => values.parse("feed_id").map(|site_id| Navigation::Stream {
                site_id,
                is_feed: true,
            }),
            ReaderRoute::Blog => values.parse("blog_id").map(|site_id| Navigation::Stream {
                site_id,
                is_feed: false,
            }),
            ReaderRoute::FeedsPost => {
                site_and_post_id(values, "feed_id").map(|(site_id, post_id)| Navigation::Post {
                    post_id,
                    site_id,
                    is_feed: true,
                })
            }
            ReaderRoute::BlogsPost => {
                site_and_post_id(values, "blog_id").map(|(site_id, post_id)| Navigation::Post {
                    post_id,
                    site_id,
                    is_feed: false,
                })
            }
            ReaderRoute::WpcomPost => {
                let url = Url::parse(values.url()?).ok()?;
                if !is_valid_wpcom_permalink(values) {
                    return None;
                }
                Some(Navigation::PostUrl { url: url.into() })
            }
        }
    }
}

impl NavigationAction for ReaderRoute {
    fn perform(&self, values: &MatchedValues, _source: Option<&LinkSource>, router: &LinkRouter) {
        let Some(presenter) = router.presenter() else {
            tracing::debug!(route = self.as_str(), "No presenter, ignoring link");
            return;
        };

        if !router.features().jetpack_features_enabled {
            tracing::debug!(route = self.as_str(), "Reader features disabled, showing static tab");
            presenter.show_static_reader_tab();
            return;
        }

        let Some(coordinator) = presenter.reader_coordinator() else {
            tracing::debug!(route = self.as_str(), "No Reader coordinator, ignoring link");
            return;
        };

        match self.navigation(values) {
            Some(navigation) => {
                tracing::info!(route = self.as_str(), ?navigation, "Following Reader link");
                navigation.apply(coordinator.as_ref());
            }
            None => {
                tracing::debug!(route = self.as_str(), "Link values rejected, not navigating");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::values::URL_KEY;

    fn values(pairs: &[(&str, &str)]) -> MatchedValues {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_static_routes() {
        let empty = MatchedValues::new();
        assert_eq!(ReaderRoute::Root.navigation(&empty), Some(Navigation::ReaderTab));
        assert_eq!(ReaderRoute::Discover.navigation(&empty), Some(Navigation::Discover));
        assert_eq!(ReaderRoute::Likes.navigation(&empty), Some(Navigation::MyLikes));
        assert_eq!(
            ReaderRoute::ManageFollowing.navigation(&empty),
            Some(Navigation::ManageFollowing)
        );
    }

    #[test]
    fn test_list_and_tag() {
        let list = values(&[("username", "matt"), ("list_name", "design")]);
        assert_eq!(
            ReaderRoute::List.navigation(&list),
            Some(Navigation::List { name: "design".into(), user: "matt".into() })
        );
        assert_eq!(ReaderRoute::List.navigation(&values(&[("username", "matt")])), None);

        let tag = values(&[("tag_name", "photography")]);
        assert_eq!(
            ReaderRoute::Tag.navigation(&tag),
            Some(Navigation::Tag { name: "photography".into() })
        );
    }

    #[test]
    fn test_streams() {
        assert_eq!(
            ReaderRoute::Feed.navigation(&values(&[("feed_id", "42")])),
            Some(Navigation::Stream { site_id: 42, is_feed: true })
        );
        assert_eq!(
            ReaderRoute::Blog.navigation(&values(&[("blog_id", "9")])),
            Some(Navigation::Stream { site_id: 9, is_feed: false })
        );
        assert_eq!(ReaderRoute::Feed.navigation(&values(&[("feed_id", "abc")])), None);
    }

    #[test]
    fn test_posts() {
        assert_eq!(
            ReaderRoute::FeedsPost.navigation(&values(&[("feed_id", "42"), ("post_id", "7")])),
            Some(Navigation::Post { post_id: 7, site_id: 42, is_feed: true })
        );
        assert_eq!(
            ReaderRoute::BlogsPost.navigation(&values(&[("blog_id", "3"), ("post_id", "5")])),
            Some(Navigation::Post { post_id: 5, site_id: 3, is_feed: false })
        );
        assert_eq!(
            ReaderRoute::FeedsPost.navigation(&values(&[("feed_id", "abc"), ("post_id", "7")])),
            None
        );
    }

    #[test]
    fn test_wpcom_post_needs_url_and_date() {
        let link = "https://wordpress.com/1999/01/15/hello-world";
        let dated = values(&[
            ("post_year", "1999"),
            ("post_month", "01"),
            ("post_day", "15"),
            ("post_name", "hello-world"),
            (URL_KEY, link),
        ]);
        assert_eq!(
            ReaderRoute::WpcomPost.navigation(&dated),
            Some(Navigation::PostUrl { url: link.into() })
        );

        let old = values(&[
            ("post_year", "1800"),
            ("post_month", "01"),
            ("post_day", "15"),
            ("post_name", "hello-world"),
            (URL_KEY, "https://wordpress.com/1800/01/15/hello-world"),
        ]);
        assert_eq!(ReaderRoute::WpcomPost.navigation(&old), None);

        let no_url = values(&[("post_year", "1999"), ("post_month", "01"), ("post_day", "15")]);
        assert_eq!(ReaderRoute::WpcomPost.navigation(&no_url), None);
    }
}
