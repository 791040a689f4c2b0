//! # Trellis
//!
//! **Trie-based HTTP route matching with priority backtracking**
//!
//! Trellis maps a request method and path to one registered route and the
//! parameters bound along the way:
//!
//! - **Deterministic precedence** – literal segments beat parameters, parameters beat wildcards
//! - **Backtracking search** – a dead end under a literal falls back to a parameter sibling
//! - **Structured logging** – build and lookup events carry stable field names
//! - **Typed configuration** – TOML/JSON files with environment overrides
//!
//! ## Quick Start
//!
//! ```
//! use trellis::prelude::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ConfigLoader::new()
//!     .with_string("[router]\nreject_duplicates = true", "toml")?
//!     .load()?;
//!
//! let matcher = RouteMatcher::with_options(
//!     vec![
//!         Route::get("/users/me", |_req: Request| Response::new("me".into())),
//!         Route::get("/users/:id", |req: Request| {
//!             let id = req.param("id").unwrap_or_default().to_string();
//!             Response::new(id.into())
//!         }),
//!     ],
//!     config.router.matcher_options(),
//! )?;
//!
//! let found = matcher.match_route(&Method::GET, "/users/42").unwrap();
//! assert_eq!(found.pattern(), "/users/:id");
//! assert_eq!(found.call(Request::default()).body(), "42");
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! trellis-config ──▶ MatcherOptions ──▶ trellis-router ──▶ RouteMatch ──▶ Handler
//!        │                                    │
//!        └──────▶ LogConfig ──▶ trellis-telemetry ◀── tracing events
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export router types
pub use trellis_router as router;

// Re-export logging setup
pub use trellis_telemetry as telemetry;

// Re-export configuration types
pub use trellis_config as config;

/// Prelude module for convenient imports.
///
/// # Example
///
/// ```
/// use trellis::prelude::*;
///
/// let matcher = RouteMatcher::new(vec![Route::get("/", |_req: Request| Response::default())]).unwrap();
/// assert!(matcher.match_route(&Method::GET, "/").is_some());
/// ```
pub mod prelude {
    pub use bytes::Bytes;
    pub use http::Method;

    pub use trellis_router::{
        BoxHandler, Handler, MatcherOptions, Params, Request, RequestExt, Response, Route,
        RouteMatch, RouteMatcher, RouterError, SearchStats,
    };

    pub use trellis_telemetry::{init_logging, LogConfig, LogFormat};

    pub use trellis_config::{ConfigError, ConfigLoader, TrellisConfig};
}
