//! Server lifecycle errors

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("database error: {0}")]
    Database(String),

    #[error("internal server error")]
    Internal(#[from] anyhow::Error),
}

/// Result type for server startup and run
pub type Result<T> = std::result::Result<T, ServerError>;
