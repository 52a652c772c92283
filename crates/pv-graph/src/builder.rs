//! Incremental graph builder.

use std::collections::HashMap;
use std::sync::Arc;

use pv_core::NodeId;

use crate::edge::Edge;
use crate::error::{GraphError, GraphResult};
use crate::graph::{DEFAULT_GRAPH_NAME, Graph, NodeArena};
use crate::node::Node;

/// Builder for constructing a graph during ingestion.
///
/// Use `add_node` for every node record, then `add_edge` for every edge
/// record, then call `build()` to seal it into an immutable `Graph`.
/// A failed call leaves the builder exactly as it was.
#[derive(Debug)]
pub struct GraphBuilder {
    name: String,
    nodes: Vec<Node>,
    by_key: HashMap<String, NodeId>,
    edges: Vec<Edge>,
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_GRAPH_NAME)
    }
}

impl GraphBuilder {
    /// Create a new empty builder for a graph with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            nodes: Vec::new(),
            by_key: HashMap::new(),
            edges: Vec::new(),
        }
    }

    /// Add a node and return its handle.
    pub fn add_node(&mut self, node: Node) -> GraphResult<NodeId> {
        if self.by_key.contains_key(node.id()) {
            return Err(GraphError::DuplicateNodeId {
                id: node.id().to_string(),
            });
        }
        let id = NodeId::from_index(self.nodes.len() as u32);
        self.by_key.insert(node.id().to_string(), id);
        self.nodes.push(node);
        Ok(id)
    }

    /// Add a direct edge between two previously added nodes.
    pub fn add_edge(&mut self, start: &str, end: &str) -> GraphResult<()> {
        let start = self.resolve(start)?;
        let end = self.resolve(end)?;
        self.edges.push(Edge::direct(start, end));
        Ok(())
    }

    fn resolve(&self, key: &str) -> GraphResult<NodeId> {
        self.find(key).ok_or_else(|| GraphError::UnknownEndpoint {
            id: key.to_string(),
        })
    }

    /// Look up a node added so far.
    pub fn find(&self, key: &str) -> Option<NodeId> {
        self.by_key.get(key).copied()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Seal the graph. Nodes keep their insertion order and handles.
    pub fn build(self) -> Graph {
        let members = (0..self.nodes.len() as u32)
            .map(NodeId::from_index)
            .collect();
        let arena = NodeArena {
            nodes: self.nodes,
            by_key: self.by_key,
        };
        Graph::from_parts(self.name, Arc::new(arena), members, self.edges, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(id: &str) -> Node {
        Node::new(id).unwrap()
    }

    #[test]
    fn builder_basic() {
        let mut builder = GraphBuilder::new("test");
        let a = builder.add_node(node("A")).unwrap();
        let b = builder.add_node(node("B")).unwrap();
        builder.add_edge("A", "B").unwrap();

        assert_eq!(a.index(), 0);
        assert_eq!(b.index(), 1);
        assert_eq!(builder.node_count(), 2);
        assert_eq!(builder.edge_count(), 1);
        assert_eq!(builder.find("B"), Some(b));
    }

    #[test]
    fn duplicate_id_leaves_nodes_unchanged() {
        let mut builder = GraphBuilder::default();
        builder.add_node(node("A").with_short_name("first")).unwrap();
        let err = builder
            .add_node(node("A").with_short_name("second"))
            .unwrap_err();
        assert_eq!(err, GraphError::DuplicateNodeId { id: "A".into() });
        assert_eq!(builder.node_count(), 1);

        let graph = builder.build();
        let (_, kept) = graph.nodes().next().unwrap();
        assert_eq!(kept.short_name, "first");
    }

    #[test]
    fn unknown_endpoint_adds_no_edge() {
        let mut builder = GraphBuilder::default();
        builder.add_node(node("A")).unwrap();
        assert_eq!(
            builder.add_edge("A", "Z"),
            Err(GraphError::UnknownEndpoint { id: "Z".into() })
        );
        assert_eq!(
            builder.add_edge("Y", "A"),
            Err(GraphError::UnknownEndpoint { id: "Y".into() })
        );
        assert_eq!(builder.edge_count(), 0);
    }

    #[test]
    fn builder_build_simple() {
        let mut builder = GraphBuilder::new("g");
        builder.add_node(node("A")).unwrap();
        builder.add_node(node("B")).unwrap();
        builder.add_edge("A", "B").unwrap();

        let graph = builder.build();
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edges().len(), 1);
        let a = graph.find("A").unwrap();
        let b = graph.find("B").unwrap();
        assert_eq!(graph.edges()[0], Edge::direct(a, b));
        assert!(!graph.edges()[0].is_connection());
    }
}
