//! Configuration schema types.
//!
//! This module defines the structure of all configuration sections.

use serde::{Deserialize, Serialize};
use trellis_router::MatcherOptions;
use trellis_telemetry::{LogConfig, LogFormat};

/// Router configuration section.
///
/// Controls how the route matcher is built.
///
/// # Example
///
/// ```
/// use trellis_config::RouterSection;
///
/// let section = RouterSection {
///     reject_duplicates: true,
/// };
/// assert!(section.matcher_options().reject_duplicates);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct RouterSection {
    /// Fail the build on a repeated method and pattern instead of keeping
    /// the first registration.
    #[serde(default)]
    pub reject_duplicates: bool,
}

impl RouterSection {
    /// Options for [`RouteMatcher::with_options`](trellis_router::RouteMatcher::with_options).
    #[must_use]
    pub fn matcher_options(&self) -> MatcherOptions {
        MatcherOptions::new().reject_duplicates(self.reject_duplicates)
    }
}

/// Logging configuration section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct LoggingSection {
    /// Enable logging.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Filter directives (e.g., "info" or "warn,trellis_router=trace").
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log output format.
    #[serde(default)]
    pub format: LogFormat,

    /// Include source file and line in logs.
    #[serde(default)]
    pub include_location: bool,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            enabled: true,
            level: default_log_level(),
            format: LogFormat::default(),
            include_location: false,
        }
    }
}

impl LoggingSection {
    /// Logging setup for [`init_logging`](trellis_telemetry::init_logging).
    ///
    /// Settings the section does not expose are taken from the preset
    /// matching `format`.
    #[must_use]
    pub fn log_config(&self) -> LogConfig {
        let preset = match self.format {
            LogFormat::Json => LogConfig::production(),
            LogFormat::Pretty => LogConfig::development(),
        };
        LogConfig {
            enabled: self.enabled,
            level: self.level.clone(),
            format: self.format,
            include_location: self.include_location,
            ..preset
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}
