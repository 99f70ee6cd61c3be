//! Error types for taskdesk.
//!
//! [`StoreError`] is the only error that leaves the persistence layer; callers
//! never see `rusqlite` types directly. [`Error`] adds form validation on top.
//!
//! Messages describe only the failed step. The underlying cause is reachable
//! through [`std::error::Error::source`].

use super::task::TaskId;
use super::validation::ValidationErrors;
use std::path::PathBuf;

/// Failures of the persistence gateway.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The database file could not be opened or created.
    #[error("Cannot open task database at {}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// The tasks table could not be created.
    #[error("Failed to initialize database")]
    Initialize {
        #[source]
        source: rusqlite::Error,
    },

    #[error("Failed to save task {id}")]
    Save {
        id: TaskId,
        #[source]
        source: rusqlite::Error,
    },

    #[error("Failed to load tasks")]
    Load {
        #[source]
        source: rusqlite::Error,
    },

    #[error("Failed to delete task {id}")]
    Delete {
        id: TaskId,
        #[source]
        source: rusqlite::Error,
    },

    /// An operation was attempted before `initialize()` succeeded.
    #[error("Task database is not initialized")]
    NotInitialized,
}

/// Errors surfaced by the session workflows.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid input: {0}")]
    Validation(ValidationErrors),

    /// The task being edited is no longer in the collection.
    #[error("Task {0} not found")]
    NotFound(TaskId),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<ValidationErrors> for Error {
    fn from(errors: ValidationErrors) -> Self {
        Error::Validation(errors)
    }
}

/// A specialized Result type for session workflows.
pub type Result<T> = std::result::Result<T, Error>;
