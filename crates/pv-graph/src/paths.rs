//! Path tests over edge sets, and the per-graph reachability cache.
//!
//! All traversals are iterative with a visited set, so cyclic input cannot
//! recurse or loop without bound.

use std::collections::{HashMap, HashSet};

use pv_core::NodeId;

use crate::edge::Edge;

/// True iff the edges in `edges` form a path from `start` to `target`.
///
/// A node only leads to itself through a cycle.
pub fn leads_to(start: NodeId, target: NodeId, edges: &[Edge]) -> bool {
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut stack = vec![start];

    while let Some(current) = stack.pop() {
        for edge in edges.iter().filter(|e| e.start() == current) {
            if edge.end() == target {
                return true;
            }
            if visited.insert(edge.end()) {
                stack.push(edge.end());
            }
        }
    }
    false
}

/// True iff some edge in `edges` ends at `node` and starts at a member of `subset`.
///
/// The parent test is relative to `subset`, not to every node the edges touch.
pub fn has_parent(node: NodeId, subset: &HashSet<NodeId>, edges: &[Edge]) -> bool {
    edges
        .iter()
        .any(|e| e.end() == node && subset.contains(&e.start()))
}

/// Forward adjacency in edge order.
pub(crate) fn successors(edges: &[Edge]) -> HashMap<NodeId, Vec<NodeId>> {
    let mut adj: HashMap<NodeId, Vec<NodeId>> = HashMap::new();
    for edge in edges {
        adj.entry(edge.start()).or_default().push(edge.end());
    }
    adj
}

/// Backward adjacency in edge order.
pub(crate) fn predecessors(edges: &[Edge]) -> HashMap<NodeId, Vec<NodeId>> {
    let mut adj: HashMap<NodeId, Vec<NodeId>> = HashMap::new();
    for edge in edges {
        adj.entry(edge.end()).or_default().push(edge.start());
    }
    adj
}

/// Memoized answers to "does `start` reach `end`".
///
/// Pairs are cached individually. Once a start node has been traversed in
/// full, any pair from it that is not cached as reachable is unreachable.
#[derive(Debug, Default)]
pub(crate) struct ReachCache {
    pairs: HashMap<(NodeId, NodeId), bool>,
    explored: HashSet<NodeId>,
}

impl ReachCache {
    pub(crate) fn lookup(&self, start: NodeId, end: NodeId) -> Option<bool> {
        if let Some(&known) = self.pairs.get(&(start, end)) {
            return Some(known);
        }
        self.explored.contains(&start).then_some(false)
    }

    pub(crate) fn is_explored(&self, start: NodeId) -> bool {
        self.explored.contains(&start)
    }

    /// Traverse everything reachable from `start` and record it.
    pub(crate) fn explore(&mut self, start: NodeId, adj: &HashMap<NodeId, Vec<NodeId>>) {
        let mut visited: HashSet<NodeId> = HashSet::new();
        let mut stack = vec![start];
        while let Some(current) = stack.pop() {
            for &next in adj.get(&current).map(Vec::as_slice).unwrap_or_default() {
                if visited.insert(next) {
                    stack.push(next);
                }
            }
        }
        for reached in visited {
            self.pairs.insert((start, reached), true);
        }
        self.explored.insert(start);
    }

    pub(crate) fn len(&self) -> usize {
        self.pairs.len()
    }
}
