//! In-memory implementation of the CheckpointStore trait.
//!
//! This is primarily for testing. Everything is lost when the store is dropped.

use std::collections::BTreeMap;
use std::sync::RwLock;

use async_trait::async_trait;
use tidemark_core::CheckpointId;

use crate::error::{Result, StoreError};
use crate::traits::CheckpointStore;

/// In-memory store implementation. Thread-safe via RwLock.
pub struct MemoryStore {
    inner: RwLock<BTreeMap<CheckpointId, Vec<u8>>>,
}

impl MemoryStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(BTreeMap::new()),
        }
    }

    /// Number of stored checkpoints.
    pub fn len(&self) -> usize {
        self.inner.read().map(|map| map.len()).unwrap_or(0)
    }

    /// True if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CheckpointStore for MemoryStore {
    async fn get_checkpoint(&self, id: &CheckpointId) -> Result<Option<Vec<u8>>> {
        let inner = self.inner.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(inner.get(id).cloned())
    }

    async fn put_checkpoint(&self, id: &CheckpointId, body: &[u8]) -> Result<()> {
        let mut inner = self.inner.write().map_err(|_| StoreError::LockPoisoned)?;
        tracing::trace!(checkpoint = %id, bytes = body.len(), "storing checkpoint");
        inner.insert(*id, body.to_vec());
        Ok(())
    }

    async fn delete_checkpoint(&self, id: &CheckpointId) -> Result<bool> {
        let mut inner = self.inner.write().map_err(|_| StoreError::LockPoisoned)?;
        Ok(inner.remove(id).is_some())
    }

    async fn list_checkpoints(&self) -> Result<Vec<CheckpointId>> {
        let inner = self.inner.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(inner.keys().copied().collect())
    }
}
