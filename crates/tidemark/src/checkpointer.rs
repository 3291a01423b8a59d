//! The Checkpointer: a checkpoint bound to its stored document.
//!
//! The Checkpointer brings together a [`Checkpoint`], the store that persists
//! it, and the settings used to write it. It does not decide when to save;
//! the replication layer calls [`Checkpointer::save`] at its own save points.

use std::sync::Arc;

use tidemark_core::CheckpointId;
use tidemark_store::CheckpointStore;
use tidemark_sync::{Checkpoint, CheckpointConfig, Reconciliation, RemoteSequence};

use crate::error::Result;

/// A checkpoint and the document it is persisted as.
pub struct Checkpointer<S: CheckpointStore> {
    /// The storage backend.
    store: Arc<S>,
    /// Which document holds this checkpoint.
    id: CheckpointId,
    /// Serialization settings.
    config: CheckpointConfig,
    /// Current in-memory state.
    checkpoint: Checkpoint,
    /// Set when the state differs from what was last read or saved.
    changed: bool,
}

impl<S: CheckpointStore> Checkpointer<S> {
    /// Create a checkpointer with fresh state. Call [`Checkpointer::read`] to
    /// load the stored document.
    pub fn new(store: Arc<S>, id: CheckpointId, config: CheckpointConfig) -> Self {
        Self {
            store,
            id,
            config,
            checkpoint: Checkpoint::new(),
            changed: false,
        }
    }

    /// The checkpoint document ID.
    pub fn id(&self) -> &CheckpointId {
        &self.id
    }

    /// The current checkpoint.
    pub fn checkpoint(&self) -> &Checkpoint {
        &self.checkpoint
    }

    /// The store reference.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// True if there is unsaved progress.
    pub fn is_changed(&self) -> bool {
        self.changed
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Persistence
    // ─────────────────────────────────────────────────────────────────────────

    /// Load the stored checkpoint.
    ///
    /// A missing or unparseable document yields a fresh checkpoint. Returns
    /// true if a document was found.
    pub async fn read(&mut self) -> Result<bool> {
        let body = self.store.get_checkpoint(&self.id).await?;
        let found = body.is_some();
        self.checkpoint.read_json(body.as_deref().unwrap_or_default());
        self.changed = false;

        tracing::debug!(
            checkpoint = %self.id,
            found,
            completed = %self.checkpoint.completed(),
            "read checkpoint"
        );
        Ok(found)
    }

    /// Load the stored checkpoint, failing on an unparseable document.
    ///
    /// State is left untouched on error.
    pub async fn read_strict(&mut self) -> Result<bool> {
        let body = self.store.get_checkpoint(&self.id).await?;
        let found = body.is_some();
        self.checkpoint
            .try_read_json(body.as_deref().unwrap_or_default())?;
        self.changed = false;
        Ok(found)
    }

    /// Write the checkpoint if it changed since the last read or save.
    ///
    /// Returns true if a document was written.
    pub async fn save(&mut self) -> Result<bool> {
        if !self.changed {
            return Ok(false);
        }
        self.save_now().await?;
        Ok(true)
    }

    /// Write the checkpoint unconditionally.
    pub async fn save_now(&mut self) -> Result<()> {
        let body = self.checkpoint.to_json(&self.config);
        self.store.put_checkpoint(&self.id, body.as_bytes()).await?;
        self.changed = false;

        tracing::debug!(checkpoint = %self.id, body = %body, "saved checkpoint");
        Ok(())
    }

    /// Delete the stored document and start over from a fresh checkpoint.
    pub async fn reset(&mut self) -> Result<()> {
        let removed = self.store.delete_checkpoint(&self.id).await?;
        self.checkpoint = Checkpoint::new();
        self.changed = false;

        tracing::info!(checkpoint = %self.id, removed, "reset checkpoint");
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Progress
    // ─────────────────────────────────────────────────────────────────────────

    /// Mark `seq` as in flight.
    pub fn add_pending_sequence(&mut self, seq: u64) {
        self.checkpoint.add_pending_sequence(seq);
        self.changed = true;
    }

    /// Mark `seq` as replicated.
    pub fn completed_sequence(&mut self, seq: u64) {
        if !self.checkpoint.is_sequence_completed(seq) {
            self.checkpoint.completed_sequence(seq);
            self.changed = true;
        }
    }

    /// Replace the peer's marker. Returns true if it changed.
    pub fn set_remote_min_sequence(&mut self, remote: Option<RemoteSequence>) -> bool {
        let changed = self.checkpoint.set_remote_min_sequence(remote);
        self.changed |= changed;
        changed
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Reconciliation
    // ─────────────────────────────────────────────────────────────────────────

    /// Reconcile with the checkpoint document the peer stored.
    ///
    /// An unparseable peer document reads as "no progress", which rolls the
    /// local checkpoint all the way back.
    pub fn reconcile_with_peer(&mut self, peer_json: &[u8]) -> Reconciliation {
        let peer = Checkpoint::from_json(peer_json);
        let outcome = self.checkpoint.reconcile(&peer);
        if !outcome.is_match() {
            self.changed = true;
        }
        outcome
    }

    /// Reconcile with the peer's document. Returns true if they already matched.
    pub fn validate_with_peer(&mut self, peer_json: &[u8]) -> bool {
        self.reconcile_with_peer(peer_json).is_match()
    }
}
