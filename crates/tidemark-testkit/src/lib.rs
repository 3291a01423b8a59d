//! # Tidemark Testkit
//!
//! Testing utilities for Tidemark.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: Exact checkpoint documents for known states
//! - **Generators**: Proptest strategies for sequence sets and checkpoints
//! - **Fixtures**: Memory-store backed checkpointers for integration tests
//!
//! ## Golden Vectors
//!
//! ```rust
//! use tidemark_testkit::vectors::verify_all_vectors;
//!
//! for (name, matches, json) in verify_all_vectors() {
//!     assert!(matches, "{}: {}", name, json);
//! }
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use tidemark_testkit::generators::{checkpoint_from_params, CheckpointParams};
//!
//! proptest! {
//!     #[test]
//!     fn agrees_with_itself(params: CheckpointParams) {
//!         let mut checkpoint = checkpoint_from_params(&params);
//!         let peer = checkpoint.clone();
//!         prop_assert!(checkpoint.validate_with(&peer));
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! ```rust
//! use tidemark_testkit::fixtures::CheckpointFixture;
//!
//! let fixture = CheckpointFixture::new();
//! let checkpointer = fixture.checkpointer();
//! assert_eq!(checkpointer.checkpoint().local_min_sequence(), 0);
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{checkpoint_with, multi_remote_fixtures, CheckpointFixture};
pub use generators::{checkpoint_from_params, CheckpointParams, SeqOp};
pub use vectors::{all_vectors, checkpoint_from_vector, verify_all_vectors, GoldenVector};
