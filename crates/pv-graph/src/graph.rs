//! Core graph data structures.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

use pv_core::NodeId;

use crate::edge::Edge;
use crate::node::Node;
use crate::paths::{self, ReachCache};

/// Name given to graphs built straight from ingested records.
pub const DEFAULT_GRAPH_NAME: &str = "Pipeline";

/// Owning store of every node ingested for one pipeline.
///
/// A graph and all subgraphs derived from it share one arena, so a `NodeId`
/// means the same node instance in each of them.
#[derive(Debug, Default)]
pub(crate) struct NodeArena {
    pub(crate) nodes: Vec<Node>,
    pub(crate) by_key: HashMap<String, NodeId>,
}

impl NodeArena {
    pub(crate) fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.slot())
    }
}

/// A sealed pipeline graph, ready for queries.
///
/// The graph stores:
/// - A shared arena of nodes plus the handles of its own members, in insertion order.
/// - Its edges in insertion order, each tagged direct or connection.
/// - An optional centre node (set on subgraphs).
/// - A reachability cache filled lazily by [`Graph::contains_path`].
///
/// There are no mutators. Every query is idempotent, so callers may probe
/// [`Graph::size`] and [`Graph::subgraph`] repeatedly and from several threads.
#[derive(Debug)]
pub struct Graph {
    name: String,
    arena: Arc<NodeArena>,
    members: Vec<NodeId>,
    member_set: HashSet<NodeId>,
    edges: Vec<Edge>,
    centre: Option<NodeId>,
    reach: Mutex<ReachCache>,
}

impl Graph {
    pub(crate) fn from_parts(
        name: String,
        arena: Arc<NodeArena>,
        members: Vec<NodeId>,
        edges: Vec<Edge>,
        centre: Option<NodeId>,
    ) -> Self {
        let member_set = members.iter().copied().collect();
        Self {
            name,
            arena,
            members,
            member_set,
            edges,
            centre,
            reach: Mutex::new(ReachCache::default()),
        }
    }

    /// A new graph over some of this graph's nodes, sharing the arena.
    pub(crate) fn derive(
        &self,
        name: String,
        members: Vec<NodeId>,
        edges: Vec<Edge>,
        centre: Option<NodeId>,
    ) -> Graph {
        Graph::from_parts(name, Arc::clone(&self.arena), members, edges, centre)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn node_count(&self) -> usize {
        self.members.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Member handles in insertion order.
    pub fn node_ids(&self) -> &[NodeId] {
        &self.members
    }

    /// Member nodes with their handles, in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.members
            .iter()
            .filter_map(|&id| self.arena.get(id).map(|node| (id, node)))
    }

    /// Get a member node by handle (None if the handle is not a member).
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        if self.member_set.contains(&id) {
            self.arena.get(id)
        } else {
            None
        }
    }

    /// Edges in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Look up a member by its string id.
    pub fn find(&self, key: &str) -> Option<NodeId> {
        self.arena
            .by_key
            .get(key)
            .copied()
            .filter(|id| self.member_set.contains(id))
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.member_set.contains(&id)
    }

    pub fn centre(&self) -> Option<NodeId> {
        self.centre
    }

    /// True iff `id` is this graph's designated centre node.
    pub fn is_centre(&self, id: NodeId) -> bool {
        self.centre == Some(id)
    }

    /// Sum of member node weights.
    pub fn total_weight(&self) -> u64 {
        self.nodes().map(|(_, node)| node.weight).sum()
    }

    /// String id for a handle, or `?` for a handle from another arena.
    pub(crate) fn node_key(&self, id: NodeId) -> &str {
        self.arena.get(id).map_or("?", Node::id)
    }

    /// True iff this graph's edges form a path from `start` to `end`.
    ///
    /// Results are memoized per graph instance; the first query from a given
    /// start node traverses everything downstream of it once.
    pub fn contains_path(&self, start: NodeId, end: NodeId) -> bool {
        let mut cache = self.reach.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(known) = cache.lookup(start, end) {
            return known;
        }
        cache.explore(start, &paths::successors(&self.edges));
        cache.lookup(start, end).unwrap_or(false)
    }

    /// For each of `members`, the other members it reaches.
    ///
    /// Takes the cache lock once for the whole batch.
    pub(crate) fn reachable_within(&self, members: &[NodeId]) -> HashMap<NodeId, HashSet<NodeId>> {
        let mut cache = self.reach.lock().unwrap_or_else(PoisonError::into_inner);
        let adj = paths::successors(&self.edges);
        members
            .iter()
            .map(|&x| {
                if !cache.is_explored(x) {
                    cache.explore(x, &adj);
                }
                let reached = members
                    .iter()
                    .copied()
                    .filter(|&y| y != x && cache.lookup(x, y) == Some(true))
                    .collect();
                (x, reached)
            })
            .collect()
    }

    /// Number of cached reachable pairs (diagnostics).
    pub fn cached_reachability(&self) -> usize {
        self.reach
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (_, node) in self.nodes() {
            writeln!(f, "{}", node)?;
        }
        for edge in &self.edges {
            writeln!(f, "{}", edge.display(self))?;
        }
        Ok(())
    }
}
