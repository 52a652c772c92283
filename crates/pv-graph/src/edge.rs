//! Directed edges between pipeline nodes.

use std::fmt;
use std::hash::{Hash, Hasher};

use pv_core::NodeId;

use crate::graph::Graph;

/// Where an edge came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeKind {
    /// Ingested from source data.
    Direct,
    /// Synthesized by subgraph extraction to stand in for a multi-hop path
    /// whose intermediate nodes were excluded.
    Connection,
}

/// A directed edge `start -> end`.
///
/// Equality and hashing consider only the endpoint handles, so a connection
/// edge and a direct edge joining the same pair compare equal.
#[derive(Debug, Clone, Copy)]
pub struct Edge {
    start: NodeId,
    end: NodeId,
    kind: EdgeKind,
}

impl Edge {
    pub fn direct(start: NodeId, end: NodeId) -> Self {
        Self {
            start,
            end,
            kind: EdgeKind::Direct,
        }
    }

    pub fn connection(start: NodeId, end: NodeId) -> Self {
        Self {
            start,
            end,
            kind: EdgeKind::Connection,
        }
    }

    pub fn start(&self) -> NodeId {
        self.start
    }

    pub fn end(&self) -> NodeId {
        self.end
    }

    /// Re-point the edge's end. Nothing in the engine depends on this.
    pub fn set_end(&mut self, end: NodeId) {
        self.end = end;
    }

    pub fn kind(&self) -> EdgeKind {
        self.kind
    }

    pub fn is_connection(&self) -> bool {
        self.kind == EdgeKind::Connection
    }

    /// Render as `Edge[<StartId>-><EndId>]` using the graph's node ids.
    pub fn display<'a>(&'a self, graph: &'a Graph) -> EdgeDisplay<'a> {
        EdgeDisplay { edge: self, graph }
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start && self.end == other.end
    }
}

impl Eq for Edge {}

impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.start.hash(state);
        self.end.hash(state);
    }
}

/// Display adapter returned by [`Edge::display`].
pub struct EdgeDisplay<'a> {
    edge: &'a Edge,
    graph: &'a Graph,
}

impl fmt::Display for EdgeDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Edge[{}->{}]",
            self.graph.node_key(self.edge.start),
            self.graph.node_key(self.edge.end)
        )
    }
}
