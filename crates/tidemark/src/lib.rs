//! # Tidemark
//!
//! Replication progress tracking between a local dataset and a remote peer.
//!
//! ## Overview
//!
//! Tidemark answers two questions for a replication session:
//!
//! - **Which local sequences have been exchanged?** A sparse set of completed
//!   ranges plus a "last checked" watermark.
//! - **Where should replication resume?** The highest contiguous completed
//!   sequence, and the peer's own progress marker.
//!
//! When the local and the peer's copy of a checkpoint disagree, Tidemark
//! settles on the conservative state both sides can confirm.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use tidemark::{CheckpointConfig, CheckpointId, Checkpointer, RemoteSequence};
//! use tidemark::store::MemoryStore;
//!
//! async fn example() {
//!     let store = Arc::new(MemoryStore::new());
//!     let id = CheckpointId::derive("local-uuid", "wss://peer/db", "_default");
//!     let mut checkpointer = Checkpointer::new(store, id, CheckpointConfig::default());
//!
//!     // Resume from the stored checkpoint
//!     checkpointer.read().await.unwrap();
//!
//!     // Settle against the peer's copy before pushing anything
//!     // let peer_json: Vec<u8> = ...;
//!     // checkpointer.validate_with_peer(&peer_json);
//!
//!     checkpointer.add_pending_sequence(17);
//!     checkpointer.completed_sequence(17);
//!     checkpointer.set_remote_min_sequence(Some(RemoteSequence::from(940)));
//!     checkpointer.save().await.unwrap();
//! }
//! ```
//!
//! ## Re-exports
//!
//! - `tidemark::core` - Sequence sets and checkpoint IDs
//! - `tidemark::store` - Checkpoint storage abstraction
//! - `tidemark::sync` - Checkpoint state, encoding and reconciliation

pub mod checkpointer;
pub mod error;

// Re-export component crates
pub use tidemark_core as core;
pub use tidemark_store as store;
pub use tidemark_sync as sync;

pub use checkpointer::Checkpointer;
pub use error::{Result, TidemarkError};

pub use tidemark_core::{CheckpointId, SequenceSet};
pub use tidemark_sync::{
    Checkpoint, CheckpointConfig, CheckpointError, CheckpointFormat, Reconciliation,
    RemoteOutcome, RemoteSequence,
};
