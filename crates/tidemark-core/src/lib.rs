//! # Tidemark Core
//!
//! Pure primitives for tracking replication progress: which sequence numbers
//! have been completed, and which checkpoint document they belong to.
//!
//! This crate contains no I/O, no storage, no networking.
//!
//! ## Key Types
//!
//! - [`SequenceSet`] - Disjoint, ascending half-open ranges of completed sequences
//! - [`CheckpointId`] - Content-derived identifier of a checkpoint document
//!
//! ## Example
//!
//! ```rust
//! use tidemark_core::SequenceSet;
//!
//! let mut set = SequenceSet::new();
//! set.add(0, 1);
//! set.add(5, 8);
//! set.add(1, 5);
//! assert_eq!(set.ranges_count(), 1);
//! assert_eq!(set.to_string(), "[0-7]");
//! ```

pub mod seqset;
pub mod types;

pub use seqset::SequenceSet;
pub use types::CheckpointId;
