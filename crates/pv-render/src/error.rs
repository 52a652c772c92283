//! Error types for visualisers.

use std::path::PathBuf;

/// Result type for rendering operations.
pub type RenderResult<T> = Result<T, RenderError>;

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Failed to create output folder: {path}")]
    OutputFolder {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write diagram: {path}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Graph '{name}' cannot be rendered: {reason}")]
    Rejected { name: String, reason: String },
}
