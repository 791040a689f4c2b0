//! Build-time routing errors.
//!
//! Matching never fails: a request either resolves to a route or it does not.
//! Everything in this module is produced while a
//! [`RouteMatcher`](crate::RouteMatcher) is being constructed.

use thiserror::Error;

/// Errors raised while building a [`RouteMatcher`](crate::RouteMatcher).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouterError {
    /// The pattern string was empty. Use `/` for the root route.
    #[error("route pattern is empty")]
    EmptyPattern,

    /// The pattern could not be parsed.
    #[error("invalid route pattern '{pattern}': {reason}")]
    InvalidPattern {
        /// The offending pattern.
        pattern: String,
        /// Why it was rejected.
        reason: String,
    },

    /// A wildcard segment was followed by further segments.
    #[error("wildcard must be the last segment in '{pattern}'")]
    WildcardNotLast {
        /// The offending pattern.
        pattern: String,
    },

    /// The route was registered without any HTTP method.
    #[error("route '{pattern}' does not answer any method")]
    NoMethods {
        /// The offending pattern.
        pattern: String,
    },

    /// The same method and pattern were registered twice while duplicates
    /// are rejected.
    #[error("duplicate route: {method} {pattern}")]
    DuplicateRoute {
        /// HTTP method of the second registration.
        method: String,
        /// The repeated pattern.
        pattern: String,
    },
}

impl RouterError {
    /// Create a new invalid pattern error.
    pub fn invalid_pattern(pattern: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for router construction.
pub type Result<T> = std::result::Result<T, RouterError>;
