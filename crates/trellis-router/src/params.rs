//! Path parameter bindings.
//!
//! Bindings are stored as ordered `(name, value)` pairs in a small vector so
//! that the common case of a handful of parameters never touches the heap.
//! During a search the vector doubles as an undo log: a branch records
//! [`Params::len`] before binding and [`Params::truncate`]s back to it when the
//! branch is abandoned.

use smallvec::SmallVec;

/// Maximum number of parameters stored inline (stack allocated).
const INLINE_PARAMS: usize = 4;

/// Path parameters bound by a route match.
///
/// # Example
///
/// ```rust
/// use trellis_router::Params;
///
/// let mut params = Params::new();
/// params.push("greeting", "hey");
/// params.push("location", "australia");
///
/// assert_eq!(params.get("greeting"), Some("hey"));
/// assert_eq!(params.get("location"), Some("australia"));
/// assert_eq!(params.get("unknown"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Params {
    inner: SmallVec<[(String, String); INLINE_PARAMS]>,
}

impl Params {
    /// Creates a new empty parameter set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a binding.
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.inner.push((name.into(), value.into()));
    }

    /// Returns the value bound to `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.inner
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Returns true if there are no bindings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the number of bindings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns an iterator over the bindings in the order they were made.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.inner.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Drops every binding made after the first `len`.
    pub fn truncate(&mut self, len: usize) {
        self.inner.truncate(len);
    }

    /// Merges `other` into this set.
    ///
    /// A name present in both takes the value from `other`; all other
    /// bindings are kept.
    pub fn merge(&mut self, other: &Self) {
        for (name, value) in &other.inner {
            match self.inner.iter_mut().find(|(n, _)| n == name) {
                Some(slot) => slot.1.clone_from(value),
                None => self.inner.push((name.clone(), value.clone())),
            }
        }
    }
}

impl<'a> IntoIterator for &'a Params {
    type Item = (&'a str, &'a str);
    type IntoIter = std::iter::Map<
        std::slice::Iter<'a, (String, String)>,
        fn(&'a (String, String)) -> (&'a str, &'a str),
    >;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }
}

impl FromIterator<(String, String)> for Params {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            inner: iter.into_iter().collect(),
        }
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for Params {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        iter.into_iter()
            .map(|(n, v)| (n.to_string(), v.to_string()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_new() {
        let params = Params::new();
        assert!(params.is_empty());
        assert_eq!(params.len(), 0);
    }

    #[test]
    fn test_params_push_and_get() {
        let mut params = Params::new();
        params.push("location", "america");

        assert_eq!(params.get("location"), Some("america"));
        assert_eq!(params.get("greeting"), None);
    }

    #[test]
    fn test_params_iter_preserves_order() {
        let params: Params = [("a", "1"), ("b", "2")].into_iter().collect();
        let pairs: Vec<_> = params.iter().collect();
        assert_eq!(pairs, vec![("a", "1"), ("b", "2")]);
    }

    #[test]
    fn test_params_truncate_undoes_bindings() {
        let mut params = Params::new();
        params.push("a", "1");
        let mark = params.len();
        params.push("b", "2");
        params.push("c", "3");

        params.truncate(mark);
        assert_eq!(params.len(), 1);
        assert_eq!(params.get("a"), Some("1"));
        assert_eq!(params.get("b"), None);
    }

    #[test]
    fn test_params_merge_overrides_and_keeps() {
        let mut existing: Params = [("id", "old"), ("tenant", "acme")].into_iter().collect();
        let matched: Params = [("id", "42"), ("slug", "intro")].into_iter().collect();

        existing.merge(&matched);

        assert_eq!(existing.len(), 3);
        assert_eq!(existing.get("id"), Some("42"));
        assert_eq!(existing.get("tenant"), Some("acme"));
        assert_eq!(existing.get("slug"), Some("intro"));
    }

    #[test]
    fn test_params_many_params() {
        let mut params = Params::new();
        for i in 0..10 {
            params.push(format!("key{i}"), format!("value{i}"));
        }

        assert_eq!(params.len(), 10);
        assert_eq!(params.get("key5"), Some("value5"));
    }

    #[test]
    fn test_params_into_iter_ref() {
        let params: Params = [("x", "1")].into_iter().collect();
        let mut seen = Vec::new();
        for (name, value) in &params {
            seen.push(format!("{name}={value}"));
        }
        assert_eq!(seen, vec!["x=1"]);
    }
}
