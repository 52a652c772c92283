//! pv-graph: the pipeline graph engine for pipeviz.
//!
//! Provides:
//! - Node and edge model (`Node`, `ObjectType`, `Edge`, `EdgeKind`)
//! - Incremental builder with validation (`GraphBuilder`)
//! - Sealed, queryable graphs: rank-based size estimation, ego-subgraph
//!   extraction with reachability preservation, critical path, memoized
//!   path containment
//!
//! Nodes live in one arena per ingested graph and are addressed by
//! [`pv_core::NodeId`] handles. Subgraphs share the arena, so a handle names
//! the same node in a graph and everything derived from it.
//!
//! # Example
//!
//! ```
//! use pv_graph::{GraphBuilder, Node};
//!
//! let mut builder = GraphBuilder::new("etl");
//! builder.add_node(Node::new("A").unwrap()).unwrap();
//! builder.add_node(Node::new("B").unwrap()).unwrap();
//! builder.add_node(Node::new("C").unwrap()).unwrap();
//! builder.add_edge("A", "B").unwrap();
//! builder.add_edge("B", "C").unwrap();
//! let graph = builder.build();
//!
//! let size = graph.size().unwrap();
//! assert_eq!((size.width, size.height), (1, 3));
//!
//! let sub = graph.subgraph(graph.find("B").unwrap(), 1).unwrap();
//! assert_eq!(sub.node_count(), 3);
//! ```

pub mod builder;
pub mod critical;
pub mod edge;
pub mod error;
pub mod graph;
pub mod node;
pub mod paths;
mod rank;
mod subgraph;

// Re-exports for ergonomics
pub use builder::GraphBuilder;
pub use critical::CRITICAL_PATH_NAME;
pub use edge::{Edge, EdgeDisplay, EdgeKind};
pub use error::{GraphError, GraphResult};
pub use graph::{DEFAULT_GRAPH_NAME, Graph};
pub use node::{Node, ObjectType};
pub use paths::{has_parent, leads_to};
pub use pv_core::{NodeId, Size};
