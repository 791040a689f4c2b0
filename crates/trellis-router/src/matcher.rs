//! The route matcher.
//!
//! [`RouteMatcher`] is built once from the full route list and is immutable
//! afterwards. Each HTTP method owns its own subtree: a route's pattern is
//! indexed under a synthetic leading literal equal to the method name, once
//! per method it answers. A `GET` search therefore can only ever reach `GET`
//! routes, which makes a match mean "pattern matches and the route answers
//! this method".

use std::fmt;
use std::iter;
use std::sync::Arc;

use http::Method;

use crate::error::{Result, RouterError};
use crate::params::Params;
use crate::route::{BoxHandler, Handler, ParamInjector, Request, Response, Route};
use crate::search::{literal_child, Search, SearchStats};
use crate::segment::{parse_pattern, split_path, Segment};
use crate::trie::Trie;

type RouteTrie = Trie<Segment, Arc<Route>>;

/// Options controlling how a [`RouteMatcher`] is built.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatcherOptions {
    /// Fail the build on a repeated `(method, pattern)` pair instead of
    /// keeping the first registration and logging a warning.
    pub reject_duplicates: bool,
}

impl MatcherOptions {
    /// Creates the default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether duplicate registrations fail the build.
    #[must_use]
    pub const fn reject_duplicates(mut self, reject: bool) -> Self {
        self.reject_duplicates = reject;
        self
    }
}

/// A successful match: the stored route and the bindings made on the
/// winning path.
#[derive(Debug, Clone)]
pub struct RouteMatch<'a> {
    route: &'a Arc<Route>,
    params: Params,
}

impl<'a> RouteMatch<'a> {
    /// The matched route as registered.
    #[must_use]
    pub fn route(&self) -> &'a Route {
        &**self.route
    }

    /// The matched route's pattern.
    #[must_use]
    pub fn pattern(&self) -> &'a str {
        self.route.pattern()
    }

    /// Parameters bound by this match.
    #[must_use]
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// A single bound parameter.
    #[must_use]
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name)
    }

    /// Handler to invoke for this match.
    ///
    /// Without parameters this is the stored handler itself. Otherwise it is a
    /// fresh [`ParamInjector`] around it, so the stored route is never touched.
    #[must_use]
    pub fn handler(&self) -> BoxHandler {
        if self.params.is_empty() {
            Arc::clone(self.route.handler())
        } else {
            Arc::new(ParamInjector::new(
                Arc::clone(self.route.handler()),
                self.params.clone(),
            ))
        }
    }

    /// Builds a derived route carrying [`handler`](Self::handler).
    #[must_use]
    pub fn into_route(self) -> Route {
        Route::from_shared(
            self.route.methods().iter().cloned(),
            self.route.pattern(),
            self.handler(),
        )
    }

    /// Invokes the match's handler.
    pub fn call(&self, request: Request) -> Response {
        self.handler().call(request)
    }

    /// Splits the match into the route and its parameters.
    #[must_use]
    pub fn into_parts(self) -> (&'a Route, Params) {
        (&**self.route, self.params)
    }
}

/// Two matches are equal when they resolve to the same stored route with the
/// same bindings.
impl PartialEq for RouteMatch<'_> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(self.route, other.route) && self.params == other.params
    }
}

/// Matches `(method, path)` pairs against a fixed route set.
///
/// # Example
///
/// ```rust
/// use http::Method;
/// use trellis_router::{Request, Response, Route, RouteMatcher};
///
/// let ok = |_req: Request| Response::new("ok".into());
/// let matcher = RouteMatcher::new([
///     Route::get("/api/:version", ok),
///     Route::get("/api/api", ok),
///     Route::get("/hello/*", ok),
/// ])
/// .unwrap();
///
/// let found = matcher.match_route(&Method::GET, "/api/api").unwrap();
/// assert_eq!(found.pattern(), "/api/api");
///
/// let found = matcher.match_route(&Method::GET, "/api/v2").unwrap();
/// assert_eq!(found.param("version"), Some("v2"));
///
/// assert!(matcher.match_route(&Method::POST, "/api/v2").is_none());
/// ```
///
/// # Route Priority
///
/// At every level, candidates are tried in this order:
///
/// 1. **Literal segments** (e.g., `/users/me`)
/// 2. **Parameter segments** (e.g., `/users/:id`)
/// 3. **Wildcard segments** (e.g., `/files/*`)
///
/// A candidate whose subtree fails to match is abandoned and the next one is
/// tried, so `/users/me/profile` still reaches `/users/:id/profile` when only
/// `/users/me/settings` exists under the literal.
#[derive(Clone)]
pub struct RouteMatcher {
    trie: RouteTrie,
    routes: Vec<Arc<Route>>,
    options: MatcherOptions,
}

impl RouteMatcher {
    /// Builds a matcher with default options.
    ///
    /// # Errors
    ///
    /// Returns the first [`RouterError`] raised by a route, see
    /// [`with_options`](Self::with_options).
    pub fn new<I>(routes: I) -> Result<Self>
    where
        I: IntoIterator<Item = Route>,
    {
        Self::with_options(routes, MatcherOptions::default())
    }

    /// Builds a matcher.
    ///
    /// Routes are indexed in order; a repeated `(method, pattern)` keeps the
    /// first registration unless `options.reject_duplicates` is set.
    ///
    /// # Errors
    ///
    /// - any pattern error from [`parse_pattern`]
    /// - [`RouterError::NoMethods`] for a route answering no method
    /// - [`RouterError::DuplicateRoute`] for a repeat when duplicates are
    ///   rejected
    pub fn with_options<I>(routes: I, options: MatcherOptions) -> Result<Self>
    where
        I: IntoIterator<Item = Route>,
    {
        let mut trie = RouteTrie::new();
        let mut kept = Vec::new();

        for route in routes {
            let segments = parse_pattern(route.pattern())?;
            if route.methods().is_empty() {
                return Err(RouterError::NoMethods {
                    pattern: route.pattern().to_string(),
                });
            }

            let route = Arc::new(route);
            let mut stored = false;
            for method in route.methods() {
                let keys = iter::once(method_segment(method)).chain(segments.iter().cloned());
                if trie.insert(keys, Arc::clone(&route)) {
                    stored = true;
                    continue;
                }
                if options.reject_duplicates {
                    return Err(RouterError::DuplicateRoute {
                        method: method.to_string(),
                        pattern: route.pattern().to_string(),
                    });
                }
                tracing::warn!(
                    http.method = %method,
                    route.pattern = route.pattern(),
                    "Duplicate route ignored, first registration wins"
                );
            }
            if stored {
                kept.push(route);
            }
        }

        trie.sort_by(Segment::priority_cmp);

        tracing::debug!(
            routes = kept.len(),
            entries = trie.len(),
            nodes = trie.node_count(),
            "Route matcher built"
        );

        Ok(Self {
            trie,
            routes: kept,
            options,
        })
    }

    /// Matches a request method and path.
    #[must_use]
    pub fn match_route(&self, method: &Method, path: &str) -> Option<RouteMatch<'_>> {
        self.explain(method, path).0
    }

    /// Matches like [`match_route`](Self::match_route) and also reports how
    /// much of the trie the search explored.
    #[must_use]
    pub fn explain(&self, method: &Method, path: &str) -> (Option<RouteMatch<'_>>, SearchStats) {
        let Some(start) = literal_child(self.trie.root(), method.as_str()) else {
            tracing::trace!(
                http.method = %method,
                http.path = path,
                matched = false,
                "No routes for method"
            );
            return (None, SearchStats::default());
        };

        let tokens = split_path(path);
        let (found, stats) = Search::new(&tokens).run(start);

        tracing::trace!(
            http.method = %method,
            http.path = path,
            matched = found.is_some(),
            nodes_visited = stats.nodes_visited,
            backtracks = stats.backtracks,
            "Route lookup"
        );

        let found = found.map(|(route, params)| RouteMatch { route, params });
        (found, stats)
    }

    /// Every registered method under which `path` matches.
    ///
    /// An empty result means the path is unknown; a non-empty one that lacks
    /// the request's method means the method is not allowed.
    #[must_use]
    pub fn allowed_methods(&self, path: &str) -> Vec<Method> {
        let tokens = split_path(path);
        self.trie
            .root()
            .children()
            .iter()
            .filter(|node| Search::new(&tokens).run(node).0.is_some())
            .filter_map(|node| node.key())
            .filter_map(|key| Method::from_bytes(key.text().as_bytes()).ok())
            .collect()
    }

    /// Returns true if exactly `pattern` is registered for `method`.
    ///
    /// This compares patterns structurally and applies no matching rules:
    /// `/users/:id` is contained, `/users/42` is not. An unparsable pattern is
    /// never contained.
    #[must_use]
    pub fn contains(&self, method: &Method, pattern: &str) -> bool {
        let Ok(segments) = parse_pattern(pattern) else {
            return false;
        };
        let keys: Vec<Segment> = iter::once(method_segment(method)).chain(segments).collect();
        self.trie.contains(&keys)
    }

    /// Routes kept at build time, in registration order.
    ///
    /// A route whose every method was a duplicate is not kept.
    #[must_use]
    pub fn routes(&self) -> impl ExactSizeIterator<Item = &Route> {
        self.routes.iter().map(|route| &**route)
    }

    /// Number of routes kept.
    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Returns true if no routes were registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Options the matcher was built with.
    #[must_use]
    pub fn options(&self) -> MatcherOptions {
        self.options
    }
}

/// Owned key for a method subtree, used when building and by [`RouteMatcher::contains`].
/// Lookups borrow the method name through `literal_child` instead.
fn method_segment(method: &Method) -> Segment {
    Segment::Literal(method.as_str().to_string())
}

impl fmt::Debug for RouteMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteMatcher")
            .field("routes", &self.routes)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

/// Dumps the ranked trie, one method subtree per top-level branch.
impl fmt::Display for RouteMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.trie, f)
    }
}
