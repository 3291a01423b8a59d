//! # Tidemark Sync
//!
//! Replication checkpoints: which local sequences have been exchanged with a
//! peer, where to resume, and how to settle disagreements between the local
//! and the peer's copy of the checkpoint.
//!
//! ## Overview
//!
//! A replication session owns one [`Checkpoint`]. As changes flow it marks
//! sequences pending or completed, periodically writes the checkpoint out as
//! a JSON document, and on reconnect reconciles it against the copy the peer
//! kept. Nothing here performs I/O or locking; the session serializes access.
//!
//! ## Usage
//!
//! ```rust
//! use tidemark_sync::{Checkpoint, CheckpointConfig, RemoteSequence};
//!
//! let mut checkpoint = Checkpoint::new();
//! for seq in 1..=10 {
//!     checkpoint.completed_sequence(seq);
//! }
//! checkpoint.add_pending_sequence(4);
//! checkpoint.set_remote_min_sequence(Some(RemoteSequence::from(250)));
//!
//! let json = checkpoint.to_json(&CheckpointConfig::deterministic());
//! assert_eq!(json, r#"{"local":3,"localCompleted":[0,4,5,6],"remote":250}"#);
//!
//! // The peer's copy is older: roll back to it.
//! let peer = Checkpoint::from_json(br#"{"local":3,"remote":200}"#);
//! assert!(!checkpoint.validate_with(&peer));
//! assert_eq!(checkpoint.local_min_sequence(), 3);
//! assert_eq!(checkpoint.remote_min_sequence(), Some(&RemoteSequence::from(200)));
//! ```
//!
//! ## Reconciliation
//!
//! ```text
//! completed:  local != peer            -> local := local ∩ peer
//! remote:     local int > peer int     -> local := peer
//!             local int < peer int     -> keep local
//!             either side non-integral -> local := none
//! ```
//!
//! Every adjustment moves the checkpoint backward, never forward.

pub mod checkpoint;
pub mod codec;
pub mod config;
pub mod error;
pub mod reconcile;
pub mod remote;

pub use checkpoint::Checkpoint;
pub use config::{CheckpointConfig, CheckpointFormat};
pub use error::{CheckpointError, Result};
pub use reconcile::{Reconciliation, RemoteOutcome};
pub use remote::RemoteSequence;
