//! CheckpointStore trait: the abstract interface for checkpoint persistence.
//!
//! Tidemark never performs I/O itself. The replication layer hands it a
//! store implementation and decides when reads and writes happen.

use async_trait::async_trait;
use tidemark_core::CheckpointId;

use crate::error::Result;

/// Async interface for persisting checkpoint documents.
///
/// Bodies are opaque bytes (JSON in practice). Implementations must treat a
/// missing document as `Ok(None)`, not as an error.
#[async_trait]
pub trait CheckpointStore: Send + Sync {
    /// Fetch the stored body for a checkpoint.
    async fn get_checkpoint(&self, id: &CheckpointId) -> Result<Option<Vec<u8>>>;

    /// Store a checkpoint body, replacing any previous one.
    async fn put_checkpoint(&self, id: &CheckpointId, body: &[u8]) -> Result<()>;

    /// Delete a checkpoint.
    ///
    /// Returns true if a document was removed.
    async fn delete_checkpoint(&self, id: &CheckpointId) -> Result<bool>;

    /// List all stored checkpoint IDs.
    async fn list_checkpoints(&self) -> Result<Vec<CheckpointId>>;
}

#[async_trait]
impl<S: CheckpointStore + ?Sized> CheckpointStore for std::sync::Arc<S> {
    async fn get_checkpoint(&self, id: &CheckpointId) -> Result<Option<Vec<u8>>> {
        (**self).get_checkpoint(id).await
    }

    async fn put_checkpoint(&self, id: &CheckpointId, body: &[u8]) -> Result<()> {
        (**self).put_checkpoint(id, body).await
    }

    async fn delete_checkpoint(&self, id: &CheckpointId) -> Result<bool> {
        (**self).delete_checkpoint(id).await
    }

    async fn list_checkpoints(&self) -> Result<Vec<CheckpointId>> {
        (**self).list_checkpoints().await
    }
}
