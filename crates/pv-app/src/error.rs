//! Error types for the pv-app service layer.

use std::path::PathBuf;

/// Application error type wrapping the errors of the backend crates.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Failed to read settings file: {path}")]
    SettingsRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Settings error: {0}")]
    Settings(String),

    #[error("Unknown instance: {0}")]
    UnknownInstance(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Source error: {0}")]
    Source(String),

    #[error("Graph error: {0}")]
    Graph(String),

    #[error("Render error: {0}")]
    Render(String),
}

/// Result type for pv-app operations.
pub type AppResult<T> = Result<T, AppError>;

impl From<pv_core::CoreError> for AppError {
    fn from(err: pv_core::CoreError) -> Self {
        AppError::InvalidInput(err.to_string())
    }
}

impl From<pv_graph::GraphError> for AppError {
    fn from(err: pv_graph::GraphError) -> Self {
        AppError::Graph(err.to_string())
    }
}

impl From<pv_source::SourceError> for AppError {
    fn from(err: pv_source::SourceError) -> Self {
        AppError::Source(err.to_string())
    }
}

impl From<pv_render::RenderError> for AppError {
    fn from(err: pv_render::RenderError) -> Self {
        AppError::Render(err.to_string())
    }
}
