//! Graph-specific error types.

use thiserror::Error;

/// Result type for graph construction and queries.
pub type GraphResult<T> = Result<T, GraphError>;

/// Graph construction and query errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A node was created with an empty id.
    #[error("Node id must be non-empty")]
    InvalidNodeId,

    /// A node with the same id is already present.
    #[error("Node id '{id}' is already present")]
    DuplicateNodeId { id: String },

    /// An edge names a node id that has not been added.
    #[error("Edge endpoint '{id}' does not name a node in the graph")]
    UnknownEndpoint { id: String },

    /// A node property was read but never set.
    #[error("Property '{key}' not found")]
    PropertyNotFound { key: String },

    /// A query named a node that is not a member of this graph.
    #[error("Node '{id}' is not a member of this graph")]
    NodeNotInGraph { id: String },

    /// Rank or path search could not make progress; the graph is cyclic.
    #[error("Graph contains a cycle ({remaining} nodes could not be ranked)")]
    CycleDetected { remaining: usize },
}
