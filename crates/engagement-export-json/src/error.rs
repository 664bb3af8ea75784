//! Error types for the JSON exporter.

use thiserror::Error;

/// Errors that can occur while writing the structured output.
#[derive(Error, Debug)]
pub enum JsonExportError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Schema-related error.
    #[error("Schema error: {0}")]
    Schema(String),

    /// Generator error.
    #[error("Generator error: {0}")]
    Generator(String),
}
