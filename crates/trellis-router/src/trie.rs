//! Ordered prefix tree.
//!
//! [`Trie`] is a plain parent-owns-child tree keyed by a sequence of `K`s with
//! an optional payload `V` at any node. It knows nothing about HTTP: the route
//! matcher instantiates it as `Trie<Segment, Arc<Route>>` and layers the
//! parameter/wildcard semantics on top.
//!
//! ```text
//!                    (root)
//!                      │
//!              ┌───────┴───────┐
//!              │               │
//!             GET            POST
//!              │               │
//!            hello           users
//!              │               •
//!        ┌─────┴─────┐
//!       dan          *
//!        •           •
//! ```

use std::cmp::Ordering;
use std::fmt;

/// A node of a [`Trie`].
///
/// Invariant: no two children of one node carry equal keys.
#[derive(Debug, Clone)]
pub struct TrieNode<K, V> {
    /// Key of the edge leading here; `None` only for the root.
    key: Option<K>,

    /// Payload stored when a key sequence ends here.
    value: Option<V>,

    /// Set once a key sequence has been inserted ending at this node.
    terminal: bool,

    /// Owned children, in insertion order until [`Trie::sort_by`] runs.
    children: Vec<TrieNode<K, V>>,
}

impl<K, V> TrieNode<K, V> {
    fn root() -> Self {
        Self {
            key: None,
            value: None,
            terminal: false,
            children: Vec::new(),
        }
    }

    fn with_key(key: K) -> Self {
        Self {
            key: Some(key),
            ..Self::root()
        }
    }

    /// Key of this node (`None` for the root).
    #[must_use]
    pub fn key(&self) -> Option<&K> {
        self.key.as_ref()
    }

    /// Payload stored at this node.
    #[must_use]
    pub fn value(&self) -> Option<&V> {
        self.value.as_ref()
    }

    /// Returns true if an inserted key sequence ends here.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// Child nodes.
    #[must_use]
    pub fn children(&self) -> &[Self] {
        &self.children
    }

    fn count_nodes(&self) -> usize {
        1 + self.children.iter().map(Self::count_nodes).sum::<usize>()
    }

    fn sort_recursive<F>(&mut self, cmp: &F)
    where
        F: Fn(&K, &K) -> Ordering,
    {
        self.children.sort_by(|a, b| match (&a.key, &b.key) {
            (Some(a), Some(b)) => cmp(a, b),
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
        });
        for child in &mut self.children {
            child.sort_recursive(cmp);
        }
    }
}

/// A prefix tree over key sequences.
///
/// # Example
///
/// ```rust
/// use trellis_router::Trie;
///
/// let mut trie: Trie<&str, u32> = Trie::new();
/// assert!(trie.insert(["api", "users"], 1));
/// assert!(trie.insert(["api", "posts"], 2));
///
/// // First registration wins
/// assert!(!trie.insert(["api", "users"], 99));
/// assert_eq!(trie.find_last(&["api", "users"]).and_then(|n| n.value()), Some(&1));
///
/// assert!(trie.contains(&["api", "posts"]));
/// assert!(!trie.contains(&["api"]));
/// ```
#[derive(Debug, Clone)]
pub struct Trie<K, V> {
    root: TrieNode<K, V>,
    len: usize,
}

impl<K, V> Default for Trie<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Trie<K, V> {
    /// Creates an empty trie.
    #[must_use]
    pub fn new() -> Self {
        Self {
            root: TrieNode::root(),
            len: 0,
        }
    }

    /// The keyless root node.
    #[must_use]
    pub fn root(&self) -> &TrieNode<K, V> {
        &self.root
    }

    /// Number of stored payloads.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if nothing has been inserted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Total number of nodes, root included.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.root.count_nodes()
    }

    /// Recursively reorders the children of every node with `cmp`.
    ///
    /// Insertion appends new children, so this must run once after the last
    /// insert for any ordering-dependent lookup to be correct.
    pub fn sort_by<F>(&mut self, cmp: F)
    where
        F: Fn(&K, &K) -> Ordering,
    {
        self.root.sort_recursive(&cmp);
    }
}

impl<K: PartialEq, V> Trie<K, V> {
    /// Inserts `value` at the node addressed by `keys`, creating nodes as
    /// needed and reusing any child whose key is equal.
    ///
    /// If that node already holds a payload the new one is dropped and the
    /// existing one kept. Returns true when `value` was stored.
    pub fn insert<I>(&mut self, keys: I, value: V) -> bool
    where
        I: IntoIterator<Item = K>,
    {
        let mut node = &mut self.root;
        for key in keys {
            let index = match node.children.iter().position(|c| c.key.as_ref() == Some(&key)) {
                Some(index) => index,
                None => {
                    node.children.push(TrieNode::with_key(key));
                    node.children.len() - 1
                }
            };
            node = &mut node.children[index];
        }

        if node.value.is_some() {
            return false;
        }
        node.terminal = true;
        node.value = Some(value);
        self.len += 1;
        true
    }

    /// Follows `keys` by exact equality and returns the node reached.
    ///
    /// No parameter or wildcard semantics apply here.
    #[must_use]
    pub fn find_last(&self, keys: &[K]) -> Option<&TrieNode<K, V>> {
        keys.iter().try_fold(&self.root, |node, key| {
            node.children.iter().find(|c| c.key.as_ref() == Some(key))
        })
    }

    /// Returns true if `keys` was inserted.
    #[must_use]
    pub fn contains(&self, keys: &[K]) -> bool {
        self.find_last(keys).is_some_and(TrieNode::is_terminal)
    }
}

impl<K: fmt::Display, V> TrieNode<K, V> {
    fn render(&self, f: &mut fmt::Formatter<'_>, prefix: &str, last: bool) -> fmt::Result {
        let (branch, extend) = if last { ("└── ", "    ") } else { ("├── ", "│   ") };
        match &self.key {
            Some(key) => write!(f, "{prefix}{branch}{key}")?,
            None => write!(f, "(root)")?,
        }
        if self.terminal {
            write!(f, " •")?;
        }
        writeln!(f)?;

        let child_prefix = if self.key.is_some() {
            format!("{prefix}{extend}")
        } else {
            String::new()
        };
        let count = self.children.len();
        for (i, child) in self.children.iter().enumerate() {
            child.render(f, &child_prefix, i + 1 == count)?;
        }
        Ok(())
    }
}

/// Diagnostic tree dump; terminal nodes are marked with `•`.
impl<K: fmt::Display, V> fmt::Display for Trie<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.root.render(f, "", true)
    }
}
