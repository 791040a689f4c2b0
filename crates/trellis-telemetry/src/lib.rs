//! Structured logging for Trellis.
//!
//! The matcher crates only emit `tracing` events. This crate turns them into
//! output: a `tracing-subscriber` registry with an `EnvFilter` and one fmt
//! layer, JSON in production and pretty-printed in development.
//!
//! # Events
//!
//! | Level | Message | Fields |
//! |-------|---------|--------|
//! | `debug` | `Route matcher built` | `routes`, `entries`, `nodes` |
//! | `warn` | `Duplicate route ignored, first registration wins` | `http.method`, `route.pattern` |
//! | `trace` | `Route lookup` | `http.method`, `http.path`, `matched`, `nodes_visited`, `backtracks` |
//!
//! Field names are listed in [`fields`].
//!
//! # Example
//!
//! ```rust,ignore
//! use trellis_telemetry::{init_logging, LogConfig};
//!
//! fn main() {
//!     init_logging(&LogConfig::production().with_level("info,trellis_router=trace"))
//!         .expect("Failed to init logging");
//!
//!     // Logging is now active...
//! }
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod logging;

pub use error::TelemetryError;
pub use logging::{
    build_subscriber, create_env_filter, fields, init_logging, LogConfig, LogFormat,
};

/// Result type for telemetry operations.
pub type TelemetryResult<T> = Result<T, TelemetryError>;
