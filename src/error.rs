//! Error types for the preview engine

use thiserror::Error;

/// Result type alias for preview operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in the preview engine
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to build or commit a document to the preview surface
    #[error("Rendering failed: {0}")]
    RenderError(String),

    /// Failed to read from or write to the persistent store
    #[error("Storage failed: {0}")]
    StorageError(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}
