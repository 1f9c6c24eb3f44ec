use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the stores and the persistence layer.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Reading or writing a document failed
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A persisted document exists but could not be parsed
    #[error("Malformed document {}: {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A document parsed but holds values the app cannot use
    #[error("Invalid document {}: {reason}", path.display())]
    Invalid { path: PathBuf, reason: String },

    /// A document could not be serialized
    #[error("Failed to serialize document: {0}")]
    Serialize(#[from] serde_json::Error),

    /// A task index no longer refers to a task in the list
    #[error("Task index {index} out of bounds (list has {len} tasks)")]
    IndexOutOfBounds { index: usize, len: usize },
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;
