//! Segment trie and priority-backtracking route matcher for Trellis.
//!
//! This crate matches an HTTP `(method, path)` pair against a fixed set of
//! route patterns and hands back the matching route together with the path
//! parameters extracted on the way.
//!
//! # Features
//!
//! - **Segment Trie**: a generic ordered prefix tree, [`Trie`]
//! - **Path Parameters**: `:name` segments bind a single token (`/users/:id`)
//! - **Wildcards**: `*` consumes the rest of the path, `*name` also binds it
//! - **Backtracking**: a failed literal branch falls back to parameters, then
//!   wildcards, at every level
//! - **Method-Based Routing**: each method owns a subtree of the trie
//! - **Immutable Once Built**: a [`RouteMatcher`] can be shared across threads
//!   and queried without locking
//!
//! # Example
//!
//! ```rust
//! use http::Method;
//! use trellis_router::{Request, RequestExt, Response, Route, RouteMatcher};
//!
//! let matcher = RouteMatcher::new([
//!     Route::get("/users", |_req: Request| Response::new("list".into())),
//!     Route::get("/users/:id", |req: Request| {
//!         let id = req.param("id").unwrap_or_default().to_string();
//!         Response::new(id.into())
//!     }),
//!     Route::get("/files/*path", |_req: Request| Response::new("file".into())),
//! ])
//! .unwrap();
//!
//! let found = matcher.match_route(&Method::GET, "/users/123").unwrap();
//! assert_eq!(found.pattern(), "/users/:id");
//! assert_eq!(found.param("id"), Some("123"));
//!
//! let response = found.call(Request::new(Default::default()));
//! assert_eq!(response.body(), "123");
//!
//! let found = matcher.match_route(&Method::GET, "/files/images/logo.png").unwrap();
//! assert_eq!(found.param("path"), Some("images/logo.png"));
//! ```
//!
//! # Architecture
//!
//! Every pattern is stored under a leading node for its method:
//!
//! ```text
//!                    (root)
//!                      │
//!              ┌───────┴───────┐
//!              │               │
//!             GET            POST
//!              │               │
//!           "users" •       "users" •
//!              │
//!        ┌─────┴─────┐
//!        │           │
//!      "me" •      ":id" •
//! ```
//!
//! Siblings are ranked literal < parameter < wildcard, then by key, once
//! after the last route is inserted.

mod error;
mod matcher;
mod params;
mod route;
mod search;
mod segment;
mod trie;

pub use error::{Result, RouterError};
pub use matcher::{MatcherOptions, RouteMatch, RouteMatcher};
pub use params::Params;
pub use route::{BoxHandler, Handler, ParamInjector, Request, RequestExt, Response, Route};
pub use search::SearchStats;
pub use segment::{parse_pattern, split_path, Segment};
pub use trie::{Trie, TrieNode};

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;
    use http::Method;

    fn named(name: &'static str) -> impl Fn(Request) -> Response + Send + Sync + 'static {
        move |_req| Response::new(Bytes::from_static(name.as_bytes()))
    }

    fn matched(matcher: &RouteMatcher, method: &Method, path: &str) -> Option<String> {
        matcher
            .match_route(method, path)
            .map(|m| m.pattern().to_string())
    }

    #[test]
    fn test_basic_routing() {
        let matcher = RouteMatcher::new([
            Route::get("/users", named("list")),
            Route::get("/users/:id", named("get")),
        ])
        .unwrap();

        let m = matcher.match_route(&Method::GET, "/users").unwrap();
        assert_eq!(m.pattern(), "/users");
        assert!(m.params().is_empty());

        let m = matcher.match_route(&Method::GET, "/users/123").unwrap();
        assert_eq!(m.pattern(), "/users/:id");
        assert_eq!(m.param("id"), Some("123"));
    }

    #[test]
    fn test_wildcard_routing() {
        let matcher = RouteMatcher::new([
            Route::get("/*", named("any")),
            Route::get("/hello/*", named("hello-any")),
            Route::get("/hello/dan", named("dan")),
        ])
        .unwrap();

        assert_eq!(matched(&matcher, &Method::GET, "/a/s/d/f").as_deref(), Some("/*"));
        assert_eq!(matched(&matcher, &Method::GET, "/hello/asdf").as_deref(), Some("/hello/*"));
        assert_eq!(matched(&matcher, &Method::GET, "/hello/dan").as_deref(), Some("/hello/dan"));
    }

    #[test]
    fn test_no_match() {
        let matcher = RouteMatcher::new([Route::get("/hello/world", named("w"))]).unwrap();
        assert!(matcher.match_route(&Method::GET, "/posts").is_none());
        assert!(matcher.match_route(&Method::GET, "/hello/world/dan").is_none());
    }

    #[test]
    fn test_multiple_params() {
        let matcher = RouteMatcher::new([Route::get("/:greeting/:location", named("g"))]).unwrap();

        let m = matcher.match_route(&Method::GET, "/hey/australia").unwrap();
        assert_eq!(m.param("greeting"), Some("hey"));
        assert_eq!(m.param("location"), Some("australia"));
    }

    #[test]
    fn test_trailing_slash() {
        let matcher = RouteMatcher::new([Route::get("/hello/world", named("w"))]).unwrap();
        assert!(matcher.match_route(&Method::GET, "/hello/world").is_some());
        assert!(matcher.match_route(&Method::GET, "/hello/world/").is_some());
    }
}
