//! Error types for the sync module.

use thiserror::Error;

/// Errors that can occur while reading a checkpoint document.
///
/// Only the fallible readers return these. [`Checkpoint::read_json`] logs them
/// and falls back to a fresh checkpoint instead.
///
/// [`Checkpoint::read_json`]: crate::Checkpoint::read_json
#[derive(Debug, Error)]
pub enum CheckpointError {
    /// The payload is not valid JSON.
    #[error("unparseable checkpoint: {0}")]
    Parse(#[from] serde_json::Error),

    /// The payload parsed, but its root is not an object.
    #[error("checkpoint document is not an object (found {0})")]
    NotAnObject(&'static str),
}

/// Result type for checkpoint operations.
pub type Result<T> = std::result::Result<T, CheckpointError>;
