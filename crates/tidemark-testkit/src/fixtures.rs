//! Test fixtures and helpers.
//!
//! Common setup code for integration tests.

use std::sync::Arc;

use tidemark::Checkpointer;
use tidemark_core::CheckpointId;
use tidemark_store::MemoryStore;
use tidemark_sync::{Checkpoint, CheckpointConfig, RemoteSequence};

/// A test fixture with a memory store and a fixed checkpoint ID.
pub struct CheckpointFixture {
    pub id: CheckpointId,
    pub store: Arc<MemoryStore>,
    pub config: CheckpointConfig,
}

impl CheckpointFixture {
    /// Create a fixture for the default test remote.
    pub fn new() -> Self {
        Self::for_remote("wss://sync.test/db")
    }

    /// Create a fixture for a specific remote URL.
    pub fn for_remote(remote_url: &str) -> Self {
        Self {
            id: CheckpointId::derive("test-local-uuid", remote_url, "_default"),
            store: Arc::new(MemoryStore::new()),
            config: CheckpointConfig::deterministic(),
        }
    }

    /// A checkpointer over this fixture's store.
    pub fn checkpointer(&self) -> Checkpointer<MemoryStore> {
        Checkpointer::new(Arc::clone(&self.store), self.id, self.config.clone())
    }

    /// Build a checkpoint with the given completed `[first, last)` ranges.
    pub fn checkpoint(&self, ranges: &[(u64, u64)], remote: Option<RemoteSequence>) -> Checkpoint {
        checkpoint_with(ranges, remote)
    }

    /// The JSON body this fixture would store for a checkpoint.
    pub fn document(&self, checkpoint: &Checkpoint) -> Vec<u8> {
        checkpoint.to_json(&self.config).into_bytes()
    }
}

impl Default for CheckpointFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Build a checkpoint with the given completed `[first, last)` ranges.
pub fn checkpoint_with(ranges: &[(u64, u64)], remote: Option<RemoteSequence>) -> Checkpoint {
    let mut checkpoint = Checkpoint::new();
    for &(first, last) in ranges {
        for seq in first..last {
            checkpoint.completed_sequence(seq);
        }
    }
    checkpoint.set_remote_min_sequence(remote);
    checkpoint
}

/// Create fixtures for several distinct remotes.
pub fn multi_remote_fixtures(count: usize) -> Vec<CheckpointFixture> {
    (0..count)
        .map(|i| CheckpointFixture::for_remote(&format!("wss://peer-{}.test/db", i)))
        .collect()
}
