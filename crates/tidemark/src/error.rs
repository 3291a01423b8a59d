//! Error types for Tidemark.

use thiserror::Error;

use tidemark_store::StoreError;
use tidemark_sync::CheckpointError;

/// Errors that can occur during checkpointer operations.
#[derive(Debug, Error)]
pub enum TidemarkError {
    /// Storage error.
    #[error("storage error: {0}")]
    Store(#[from] StoreError),

    /// Checkpoint document error.
    #[error("checkpoint error: {0}")]
    Checkpoint(#[from] CheckpointError),
}

/// Result type for Tidemark operations.
pub type Result<T> = std::result::Result<T, TidemarkError>;
