//! Error types for the generation pipeline.

use std::path::PathBuf;

/// Errors that can occur while generating models.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    /// Database error during introspection.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// IO error (reading migration files, writing models).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// No migrations directory found.
    #[error("Migrations directory not found: {}", .0.display())]
    MigrationsDirNotFound(PathBuf),

    /// The output directory could not be created.
    #[error("Cannot create output directory '{}': {}", .path.display(), .source)]
    OutputDir {
        /// The directory that could not be created.
        path: PathBuf,
        /// The underlying IO failure.
        source: std::io::Error,
    },

    /// A column reported by the database was gone when queried.
    #[error("Column '{table}.{column}' not found during introspection")]
    UnknownColumn {
        /// Table being introspected.
        table: String,
        /// The missing column.
        column: String,
    },
}

/// Result type for generation operations.
pub type Result<T> = std::result::Result<T, GenerateError>;
