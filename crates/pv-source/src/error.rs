//! Error types for graph sources.

use std::path::PathBuf;

use pv_graph::GraphError;

/// Result type for graph source operations.
pub type SourceResult<T> = Result<T, SourceError>;

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Failed to read record file: {path}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Unsupported record file format: {path} (expected .yaml, .yml or .json)")]
    UnsupportedFormat { path: PathBuf },

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Graph assembly failed: {0}")]
    Graph(#[from] GraphError),
}
