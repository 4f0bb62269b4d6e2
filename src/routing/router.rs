//! Route lookup and dispatch.
//!
//! # Responsibilities
//! - Store compiled routes in declaration order
//! - Look up the matching route for a link
//! - Run the matched route's action with the captured values
//! - Return the dispatched route or an explicit no-match
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - O(n) scan over the table (acceptable for typical route counts)
//! - First match wins; later routes are never consulted
//! - Explicit NoRoute rather than silent default
//! - The presenter is held weakly and looked up per dispatch

use std::sync::{Arc, Weak};

use url::Url;
use uuid::Uuid;

use crate::config::schema::{FeatureConfig, LinksConfig};
use crate::error::{LinkError, PatternError};
use crate::navigation::{LinkSource, RootPresenter};
use crate::observability::metrics;
use crate::routing::matcher::{AndMatcher, HostMatcher, Matcher, WebSchemeMatcher};
use crate::routing::pattern::{path_components, PathPattern};
use crate::routing::route::Route;
use crate::routing::values::{MatchedValues, SOURCE_KEY, URL_KEY};

/// Host used to resolve bare paths when no host is configured.
pub const DEFAULT_HOST: &str = "wordpress.com";

/// A route together with its compiled pattern.
#[derive(Debug)]
struct CompiledRoute {
    pattern: PathPattern,
    route: Box<dyn Route>,
}

/// Ordered table of routes.
#[derive(Debug, Default)]
pub struct RouteTable {
    routes: Vec<CompiledRoute>,
}

/// Stores information about a matched route.
#[derive(Debug)]
pub struct RouteMatch<'a> {
    pub route: &'a dyn Route,
    pub values: MatchedValues,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compile and append a route. It is consulted after every route already
    /// in the table.
    pub fn push(&mut self, route: Box<dyn Route>) -> Result<(), PatternError> {
        let pattern = PathPattern::parse(route.path())?;
        self.routes.push(CompiledRoute { pattern, route });
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Routes in the order they are consulted.
    pub fn routes(&self) -> impl Iterator<Item = &dyn Route> {
        self.routes.iter().map(|r| r.route.as_ref())
    }

    /// Find the first route whose pattern matches `path`.
    pub fn match_path(&self, path: &str) -> Option<RouteMatch<'_>> {
        let components = path_components(path);
        self.routes.iter().find_map(|compiled| {
            compiled
                .pattern
                .match_components(&components)
                .map(|values| RouteMatch {
                    route: compiled.route.as_ref(),
                    values,
                })
        })
    }

    /// Match the path of `url` and record the full URL in the values.
    pub fn match_url(&self, url: &Url) -> Option<RouteMatch<'_>> {
        let mut matched = self.match_path(url.path())?;
        matched.values.insert(URL_KEY, url.as_str());
        Some(matched)
    }
}

/// Dispatches inbound links to route actions.
pub struct LinkRouter {
    table: RouteTable,
    acceptance: AndMatcher,
    base_host: String,
    presenter: Option<Weak<dyn RootPresenter>>,
    features: FeatureConfig,
    metrics_enabled: bool,
}

impl LinkRouter {
    /// Start building a router from configuration.
    pub fn builder(config: &LinksConfig) -> LinkRouterBuilder {
        LinkRouterBuilder {
            config: config.clone(),
            routes: Vec::new(),
            presenter: None,
        }
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    pub fn features(&self) -> &FeatureConfig {
        &self.features
    }

    /// The root presenter, if it is still alive.
    pub fn presenter(&self) -> Option<Arc<dyn RootPresenter>> {
        self.presenter.as_ref().and_then(Weak::upgrade)
    }

    /// Whether the link's scheme and host are ones this router answers for.
    pub fn accepts(&self, url: &Url) -> bool {
        self.acceptance.matches(url)
    }

    /// Whether `url` would be dispatched to a route.
    pub fn can_handle(&self, url: &Url) -> bool {
        self.accepts(url) && self.table.match_url(url).is_some()
    }

    /// Parse and dispatch a link.
    pub fn handle(&self, link: &str, source: Option<&LinkSource>) -> Result<&str, LinkError> {
        let link = link.trim();
        let url = Url::parse(link).map_err(|_| self.reject(LinkError::InvalidUrl(link.to_string())))?;
        self.handle_url(&url, source)
    }

    /// Dispatch a universal link.
    ///
    /// Returns the name of the route whose action ran. The action may still
    /// have decided not to navigate.
    pub fn handle_url(&self, url: &Url, source: Option<&LinkSource>) -> Result<&str, LinkError> {
        if !self.accepts(url) {
            return Err(self.reject(LinkError::UnsupportedUrl(url.to_string())));
        }
        self.dispatch(url, source)
    }

    /// Dispatch a bare path on the first configured host.
    ///
    /// The path must start with `/`. It only ever replaces the path and
    /// query of the base URL, so the host cannot be changed through it.
    pub fn handle_path(&self, path: &str, source: Option<&LinkSource>) -> Result<&str, LinkError> {
        let invalid = || self.reject(LinkError::InvalidUrl(path.to_string()));
        if !path.starts_with('/') {
            return Err(invalid());
        }

        let mut url =
            Url::parse(&format!("https://{}/", self.base_host)).map_err(|_| invalid())?;
        let (path_part, query) = match path.split_once('?') {
            Some((p, q)) => (p, Some(q)),
            None => (path, None),
        };
        url.set_path(path_part);
        url.set_query(query);

        self.dispatch(&url, source)
    }

    fn dispatch(&self, url: &Url, source: Option<&LinkSource>) -> Result<&str, LinkError> {
        let link_id = Uuid::new_v4();

        let RouteMatch { route, mut values } = match self.table.match_url(url) {
            Some(matched) => matched,
            None => {
                tracing::debug!(link_id = %link_id, path = url.path(), "No route matched");
                return Err(self.reject(LinkError::NoRoute {
                    path: url.path().to_string(),
                }));
            }
        };

        let source_name = source.map(LinkSource::name).unwrap_or("none");
        let span = tracing::info_span!(
            "link_dispatch",
            link_id = %link_id,
            route = route.name(),
            source = source_name
        );
        let _entered = span.enter();

        if let Some(source) = source {
            values.insert(SOURCE_KEY, source.name());
        }

        tracing::debug!(
            section = ?route.section(),
            values = values.len(),
            "Dispatching link"
        );
        route.action().perform(&values, source, self);

        if self.metrics_enabled {
            metrics::record_dispatch(route.name(), source.map(LinkSource::label).unwrap_or("none"));
        }
        Ok(route.name())
    }

    fn reject(&self, error: LinkError) -> LinkError {
        if self.metrics_enabled {
            metrics::record_unmatched(error.reason());
        }
        error
    }
}

/// Builder for [`LinkRouter`].
pub struct LinkRouterBuilder {
    config: LinksConfig,
    routes: Vec<Box<dyn Route>>,
    presenter: Option<Weak<dyn RootPresenter>>,
}

impl LinkRouterBuilder {
    /// Register a route after those already registered.
    pub fn route<R: Route + 'static>(mut self, route: R) -> Self {
        self.routes.push(Box::new(route));
        self
    }

    /// Register several routes, keeping their order.
    pub fn routes<I, R>(mut self, routes: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Route + 'static,
    {
        for route in routes {
            self.routes.push(Box::new(route));
        }
        self
    }

    /// Attach the root presenter. Only a weak reference is kept.
    pub fn presenter<P: RootPresenter + 'static>(mut self, presenter: &Arc<P>) -> Self {
        let weak: Weak<P> = Arc::downgrade(presenter);
        self.presenter = Some(weak as Weak<dyn RootPresenter>);
        self
    }

    /// Compile every route and freeze the table.
    pub fn build(self) -> Result<LinkRouter, PatternError> {
        let links = &self.config.links;
        let mut table = RouteTable::new();

        for route in self.routes {
            if route.jetpack_powered() && !links.jetpack_powered_routes {
                tracing::debug!(route = route.name(), "Skipping Jetpack-powered route");
                continue;
            }
            table.push(route)?;
        }

        let acceptance = AndMatcher::new(vec![
            Box::new(WebSchemeMatcher),
            Box::new(HostMatcher::new(links.allowed_hosts.iter().cloned())),
        ]);
        let base_host = links
            .allowed_hosts
            .first()
            .cloned()
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        tracing::info!(routes = table.len(), hosts = links.allowed_hosts.len(), "Link router ready");

        Ok(LinkRouter {
            table,
            acceptance,
            base_host,
            presenter: self.presenter,
            features: self.config.features.clone(),
            metrics_enabled: self.config.observability.metrics_enabled,
        })
    }
}
