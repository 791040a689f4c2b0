//! Route pattern segments.
//!
//! A pattern such as `/users/:id/files/*rest` is split on `/` into
//! [`Segment`]s. Incoming request paths are tokenised the same way by
//! [`split_path`], so leading, trailing and doubled slashes never matter.

use std::cmp::Ordering;
use std::fmt;

use crate::error::{Result, RouterError};

/// One `/`-delimited unit of a route pattern.
///
/// Siblings in the trie are ranked literal < parameter < wildcard, see
/// [`Segment::priority_cmp`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Matches only an identical token (e.g. `users`).
    Literal(String),

    /// Matches any single token and binds it (e.g. `:id`).
    Param(String),

    /// Matches all remaining tokens, including none (`*` or `*rest`).
    ///
    /// A named wildcard binds the remainder joined with `/`.
    Wildcard(Option<String>),
}

impl Segment {
    /// Parses a single pattern token.
    ///
    /// Returns `None` for a parameter marker without a name (`:`).
    fn parse_token(token: &str) -> Option<Self> {
        if let Some(name) = token.strip_prefix(':') {
            (!name.is_empty()).then(|| Self::Param(name.to_string()))
        } else if let Some(name) = token.strip_prefix('*') {
            Some(Self::Wildcard((!name.is_empty()).then(|| name.to_string())))
        } else {
            Some(Self::Literal(token.to_string()))
        }
    }

    /// Match priority of this segment kind: literal 0, parameter 1, wildcard 2.
    #[must_use]
    pub const fn rank(&self) -> u8 {
        match self {
            Self::Literal(_) => 0,
            Self::Param(_) => 1,
            Self::Wildcard(_) => 2,
        }
    }

    /// The segment's key text: the literal itself, or the binding name.
    ///
    /// An unnamed wildcard has the empty key.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Literal(text) | Self::Param(text) => text,
            Self::Wildcard(name) => name.as_deref().unwrap_or(""),
        }
    }

    /// Returns true for literal segments.
    #[must_use]
    pub const fn is_literal(&self) -> bool {
        matches!(self, Self::Literal(_))
    }

    /// Name this segment binds on a match, if any.
    #[must_use]
    pub fn binding(&self) -> Option<&str> {
        match self {
            Self::Literal(_) => None,
            Self::Param(name) => Some(name),
            Self::Wildcard(name) => name.as_deref(),
        }
    }

    /// Sibling ordering used when the trie is ranked: by [`rank`](Self::rank),
    /// then by key text.
    ///
    /// Keeping literals first and sorted lets the matcher binary-search them.
    #[must_use]
    pub fn priority_cmp(&self, other: &Self) -> Ordering {
        self.rank()
            .cmp(&other.rank())
            .then_with(|| self.text().cmp(other.text()))
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(text) => f.write_str(text),
            Self::Param(name) => write!(f, ":{name}"),
            Self::Wildcard(name) => write!(f, "*{}", name.as_deref().unwrap_or("")),
        }
    }
}

/// Splits a request path into tokens, dropping empty ones.
///
/// `/a/b`, `a/b` and `/a//b/` all yield `["a", "b"]`; `/` yields nothing.
#[must_use]
pub fn split_path(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

/// Parses a route pattern into segments.
///
/// # Errors
///
/// - [`RouterError::EmptyPattern`] for `""`
/// - [`RouterError::InvalidPattern`] when the pattern does not start with `/`,
///   a parameter has no name, or a binding name is used twice
/// - [`RouterError::WildcardNotLast`] when anything follows a wildcard
///
/// # Example
///
/// ```rust
/// use trellis_router::{parse_pattern, Segment};
///
/// let segments = parse_pattern("/users/:id/*").unwrap();
/// assert_eq!(
///     segments,
///     vec![
///         Segment::Literal("users".to_string()),
///         Segment::Param("id".to_string()),
///         Segment::Wildcard(None),
///     ]
/// );
/// ```
pub fn parse_pattern(pattern: &str) -> Result<Vec<Segment>> {
    if pattern.is_empty() {
        return Err(RouterError::EmptyPattern);
    }
    if !pattern.starts_with('/') {
        return Err(RouterError::invalid_pattern(pattern, "must begin with '/'"));
    }

    let mut segments: Vec<Segment> = Vec::new();
    for token in split_path(pattern) {
        if matches!(segments.last(), Some(Segment::Wildcard(_))) {
            return Err(RouterError::WildcardNotLast {
                pattern: pattern.to_string(),
            });
        }

        let segment = Segment::parse_token(token).ok_or_else(|| {
            RouterError::invalid_pattern(pattern, "parameter segment has no name")
        })?;

        if let Some(name) = segment.binding() {
            if segments.iter().any(|s| s.binding() == Some(name)) {
                return Err(RouterError::invalid_pattern(
                    pattern,
                    format!("parameter '{name}' is bound twice"),
                ));
            }
        }

        segments.push(segment);
    }

    Ok(segments)
}
