//! Error types for memopad.

use thiserror::Error;

/// Result type alias using memopad's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for memopad operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Database operation failed (wraps sqlx::Error)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Note not found
    #[error("Note not found: {0}")]
    NoteNotFound(uuid::Uuid),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
