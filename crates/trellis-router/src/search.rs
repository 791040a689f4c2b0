//! Priority backtracking search over a ranked route trie.
//!
//! At every node the candidates are tried in priority order:
//!
//! 1. the literal child equal to the current token (binary search),
//! 2. each parameter child, binding the token to its name,
//! 3. each wildcard child, which ends the search on the spot and consumes
//!    whatever tokens remain, possibly none.
//!
//! A failed candidate falls through to the next one at the same level, and a
//! level with no successful candidate fails back to its parent. Bindings live
//! in a single [`Params`] used as an undo log: each parameter branch records
//! the length before binding and truncates back to it if the branch fails, so
//! nothing bound on an abandoned branch survives into the result.

use std::sync::Arc;

use crate::params::Params;
use crate::route::Route;
use crate::segment::Segment;
use crate::trie::TrieNode;

pub(crate) type RouteNode = TrieNode<Segment, Arc<Route>>;

/// Counters describing how much work one search did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Trie nodes entered, wildcard leaves included.
    pub nodes_visited: usize,
    /// Candidates whose subtree failed and were abandoned.
    pub backtracks: usize,
}

/// Splits a ranked child list into its literal, parameter and wildcard runs.
fn partition(node: &RouteNode) -> (&[RouteNode], &[RouteNode], &[RouteNode]) {
    let children = node.children();
    let rank = |c: &RouteNode| c.key().map_or(u8::MAX, Segment::rank);
    let literal_end = children.partition_point(|c| rank(c) == 0);
    let param_end = children.partition_point(|c| rank(c) <= 1);
    (
        &children[..literal_end],
        &children[literal_end..param_end],
        &children[param_end..],
    )
}

/// Finds the literal child keyed `token` by binary search.
pub(crate) fn literal_child<'t>(node: &'t RouteNode, token: &str) -> Option<&'t RouteNode> {
    let (literals, _, _) = partition(node);
    literals
        .binary_search_by(|c| c.key().map_or("", Segment::text).cmp(token))
        .ok()
        .map(|i| &literals[i])
}

pub(crate) struct Search<'p> {
    tokens: &'p [&'p str],
    params: Params,
    stats: SearchStats,
}

impl<'p> Search<'p> {
    pub(crate) fn new(tokens: &'p [&'p str]) -> Self {
        Self {
            tokens,
            params: Params::new(),
            stats: SearchStats::default(),
        }
    }

    /// Searches below `start`, which stands for zero consumed tokens.
    pub(crate) fn run(mut self, start: &RouteNode) -> (Option<(&Arc<Route>, Params)>, SearchStats) {
        let found = self.descend(start, 0);
        (found.map(|route| (route, self.params)), self.stats)
    }

    fn descend<'t>(&mut self, node: &'t RouteNode, depth: usize) -> Option<&'t Arc<Route>> {
        self.stats.nodes_visited += 1;
        let (_, params, wildcards) = partition(node);

        if let Some(&token) = self.tokens.get(depth) {
            if let Some(child) = literal_child(node, token) {
                if let Some(route) = self.descend(child, depth + 1) {
                    return Some(route);
                }
                self.stats.backtracks += 1;
            }

            for child in params {
                let Some(name) = child.key().and_then(Segment::binding) else {
                    continue;
                };
                let mark = self.params.len();
                self.params.push(name, token);
                if let Some(route) = self.descend(child, depth + 1) {
                    return Some(route);
                }
                self.params.truncate(mark);
                self.stats.backtracks += 1;
            }
        } else if node.is_terminal() {
            if let Some(route) = node.value() {
                return Some(route);
            }
        }

        for child in wildcards {
            self.stats.nodes_visited += 1;
            let Some(route) = child.value() else {
                continue;
            };
            if let Some(name) = child.key().and_then(Segment::binding) {
                self.params.push(name, self.tokens[depth..].join("/"));
            }
            return Some(route);
        }

        None
    }
}
