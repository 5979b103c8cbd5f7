use std::io;

use thiserror::Error;

/// Library-wide error type for cleanme operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Path escapes the cleaning root.
    #[error("Path '{0}' escapes the cleaning root")]
    PathTraversal(String),

    /// Path resolves to the cleaning root itself.
    #[error("Refusing to remove the cleaning root via '{0}'")]
    RootTarget(String),

    /// Directory removal was asked to remove something that is not a directory.
    #[error("Not a directory: {0}")]
    NotADirectory(String),
}
