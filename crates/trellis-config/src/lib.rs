//! Typed configuration for Trellis.
//!
//! This crate provides a strongly-typed configuration layer for the route
//! matcher and its logging with support for:
//! - TOML and JSON configuration files
//! - Environment variable overrides
//! - Strict validation (fails on unknown fields)
//! - Layered configuration (defaults → file → env)
//!
//! # Overview
//!
//! The configuration system is built around the [`TrellisConfig`] struct:
//!
//! - [`RouterSection`] - How the route matcher is built
//! - [`LoggingSection`] - Log level, format and location info
//!
//! # Example
//!
//! ```no_run
//! use trellis_config::ConfigLoader;
//! use trellis_router::RouteMatcher;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ConfigLoader::new()
//!     .with_defaults()
//!     .with_file("trellis.toml")?
//!     .with_env_prefix("TRELLIS")
//!     .load()?;
//!
//! trellis_telemetry::init_logging(&config.logging.log_config())?;
//! let matcher = RouteMatcher::with_options(Vec::new(), config.router.matcher_options())?;
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration File Format
//!
//! ```toml
//! [router]
//! reject_duplicates = true
//!
//! [logging]
//! enabled = true
//! level = "info,trellis_router=debug"
//! format = "json"
//! include_location = false
//! ```
//!
//! # Environment Variable Overrides
//!
//! All configuration values can be overridden via environment variables using
//! the format `PREFIX__SECTION__KEY`. For example:
//!
//! - `TRELLIS__ROUTER__REJECT_DUPLICATES=true`
//! - `TRELLIS__LOGGING__LEVEL=debug`
//! - `TRELLIS__LOGGING__FORMAT=pretty`

#![warn(missing_docs)]

mod config;
mod error;
mod loader;
mod schema;

pub use config::*;
pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use schema::*;
pub use trellis_telemetry::LogFormat;
