//! Error types for the ca-app service layer.

use std::path::PathBuf;

/// Application error type that wraps errors from the library crates and
/// provides one error surface for every host.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Failed to read {path}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write {path}")]
    FileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Document error: {0}")]
    Document(#[from] ca_document::DocumentError),

    #[error("Document validation failed: {0}")]
    Validation(#[from] ca_document::ValidationError),

    #[error("Graph error: {0}")]
    Graph(#[from] ca_graph::GraphError),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type AppResult<T> = Result<T, AppError>;
